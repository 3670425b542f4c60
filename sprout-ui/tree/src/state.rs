use sprout_tree::NodeKey;

/// Inline edit modes supported in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineEditKind {
    /// A placeholder created by an add; cancelling discards it.
    Create,
    /// An existing node; cancelling keeps it with its old title.
    Rename,
}

/// Inline editing state for the single row being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineEditState {
    pub key: NodeKey,
    pub kind: InlineEditKind,
    /// Text currently in the row's input.
    pub value: String,
}

impl InlineEditState {
    pub(crate) fn create(key: NodeKey) -> Self {
        Self {
            key,
            kind: InlineEditKind::Create,
            value: String::new(),
        }
    }

    pub(crate) fn rename(key: NodeKey, value: String) -> Self {
        Self {
            key,
            kind: InlineEditKind::Rename,
            value,
        }
    }
}
