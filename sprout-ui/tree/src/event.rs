use sprout_tree::{NodeKey, TreeNode};

/// Events emitted by editable tree rows.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeEvent {
    Remove { key: NodeKey },
    AddSameLevel { key: NodeKey },
    AddSubNode { key: NodeKey },
    Confirm { key: NodeKey, title: String },
    Cancel { key: NodeKey },
    StartEdit { key: NodeKey },
    DraftChanged(String),
    RequestRemove { key: NodeKey },
    DismissRemove,
    ToggleAddMenu { key: NodeKey },
    ToggleExpanded { key: NodeKey },
    HoverEntered { key: NodeKey },
    HoverLeft { key: NodeKey },
}

/// Results the embedding application is told about.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeOutcome {
    /// A remove ran; carries the removed subtree, if the key was found.
    Removed(Option<TreeNode>),
    /// A title was committed; carries the node, if the key was found.
    Edited(Option<TreeNode>),
    /// The action was refused and the user should be told why.
    Notice(TreeNotice),
}

/// User-facing notices raised instead of performing an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNotice {
    /// Another node is still being added or edited.
    EditInProgress(String),
    /// A blank title was submitted.
    EmptyTitle(String),
}

impl TreeNotice {
    pub fn message(&self) -> &str {
        match self {
            TreeNotice::EditInProgress(message)
            | TreeNotice::EmptyTitle(message) => message,
        }
    }
}
