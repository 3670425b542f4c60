use std::collections::HashSet;

use serde_json::Value;
use sprout_tree::{
    FieldNames, NodeKey, TreeNode, normalize, normalize_str, ops,
};

use crate::event::{TreeEvent, TreeNotice, TreeOutcome};
use crate::settings::EditableTreeSettings;
use crate::state::{InlineEditKind, InlineEditState};
use crate::title::normalize_title;

/// Editable tree control that owns the canonical tree and reduces row
/// events into tree mutations.
///
/// At most one node is added or edited at a time. While an inline edit is
/// open, further add and edit requests are refused with
/// [`TreeNotice::EditInProgress`].
#[derive(Debug)]
pub struct EditableTree {
    settings: EditableTreeSettings,
    tree: Vec<TreeNode>,
    inline_edit: Option<InlineEditState>,
    collapsed: HashSet<NodeKey>,
    hovered: Option<NodeKey>,
    add_menu: Option<NodeKey>,
    pending_remove: Option<NodeKey>,
}

impl EditableTree {
    /// Construct an empty tree control.
    pub fn new(settings: EditableTreeSettings) -> Self {
        Self {
            settings,
            tree: Vec::new(),
            inline_edit: None,
            collapsed: HashSet::new(),
            hovered: None,
            add_menu: None,
            pending_remove: None,
        }
    }

    /// Construct a tree control and load `source` into it.
    pub fn with_source(
        settings: EditableTreeSettings,
        source: &Value,
    ) -> Self {
        let mut tree = Self::new(settings);
        tree.load(source);
        tree
    }

    /// Replace the tree with `source`, normalized with the configured
    /// field names. Malformed sources leave the tree empty.
    pub fn load(&mut self, source: &Value) {
        let tree = match normalize(source, &self.settings.field_names) {
            Ok(tree) => tree,
            Err(err) => {
                log::warn!("editable tree source rejected: {err}");
                Vec::new()
            },
        };
        self.replace_tree(tree);
    }

    /// Parse `source` as JSON and [`load`](Self::load) it.
    pub fn load_str(&mut self, source: &str) {
        let tree = match normalize_str(source, &self.settings.field_names) {
            Ok(tree) => tree,
            Err(err) => {
                log::warn!("editable tree source rejected: {err}");
                Vec::new()
            },
        };
        self.replace_tree(tree);
    }

    /// Switch to new source field names and reload `source` with them.
    pub fn set_field_names(
        &mut self,
        field_names: FieldNames,
        source: &Value,
    ) {
        self.settings.field_names = field_names;
        self.load(source);
    }

    /// Return root tree entries.
    pub fn tree(&self) -> &[TreeNode] {
        &self.tree
    }

    pub fn settings(&self) -> &EditableTreeSettings {
        &self.settings
    }

    /// Return the open inline edit, if any.
    pub fn inline_edit(&self) -> Option<&InlineEditState> {
        self.inline_edit.as_ref()
    }

    /// Whether a node is currently being added or edited.
    pub fn is_editing(&self) -> bool {
        self.inline_edit.is_some()
    }

    pub fn hovered(&self) -> Option<&NodeKey> {
        self.hovered.as_ref()
    }

    /// Return the key whose add menu is open.
    pub fn add_menu(&self) -> Option<&NodeKey> {
        self.add_menu.as_ref()
    }

    /// Return the key waiting for remove confirmation.
    pub fn pending_remove(&self) -> Option<&NodeKey> {
        self.pending_remove.as_ref()
    }

    /// Whether the children of `key` are shown.
    pub fn is_expanded(&self, key: &NodeKey) -> bool {
        !self.collapsed.contains(key)
    }

    fn replace_tree(&mut self, tree: Vec<TreeNode>) {
        self.tree = tree;
        self.inline_edit = None;
        self.collapsed.clear();
        self.hovered = None;
        self.add_menu = None;
        self.pending_remove = None;
    }

    fn inline_edit_matches(&self, key: &NodeKey) -> bool {
        self.inline_edit.as_ref().is_some_and(|edit| &edit.key == key)
    }

    fn edit_in_progress(&self) -> Option<TreeOutcome> {
        if self.inline_edit.is_none() {
            return None;
        }

        Some(TreeOutcome::Notice(TreeNotice::EditInProgress(
            self.settings.editing_tips.clone(),
        )))
    }

    fn reduce_remove(&mut self, key: NodeKey) -> Option<TreeOutcome> {
        self.pending_remove = None;
        self.add_menu = None;

        let removed = ops::remove_node(&mut self.tree, &key);
        match removed.as_ref() {
            Some(node) => {
                let edited_inside = self
                    .inline_edit
                    .as_ref()
                    .is_some_and(|edit| node.contains_key(&edit.key));
                if edited_inside {
                    self.inline_edit = None;
                }
                if self.hovered.as_ref().is_some_and(|k| node.contains_key(k)) {
                    self.hovered = None;
                }
                self.collapsed.retain(|k| !node.contains_key(k));
            },
            None => log::debug!("remove ignored, no node with key {key}"),
        }

        Some(TreeOutcome::Removed(removed))
    }

    fn reduce_add_same_level(&mut self, key: NodeKey) -> Option<TreeOutcome> {
        if let Some(notice) = self.edit_in_progress() {
            return Some(notice);
        }
        self.add_menu = None;

        match ops::add_same_level_node(&mut self.tree, &key) {
            Some(placeholder) => {
                self.inline_edit =
                    Some(InlineEditState::create(placeholder.key.clone()));
            },
            None => log::debug!("add sibling ignored, no node with key {key}"),
        }
        None
    }

    fn reduce_add_sub_node(&mut self, key: NodeKey) -> Option<TreeOutcome> {
        if let Some(notice) = self.edit_in_progress() {
            return Some(notice);
        }
        self.add_menu = None;

        match ops::add_sub_node(&mut self.tree, &key) {
            Some(placeholder) => {
                self.inline_edit =
                    Some(InlineEditState::create(placeholder.key.clone()));
                self.collapsed.remove(&key);
            },
            None => log::debug!("add child ignored, no node with key {key}"),
        }
        None
    }

    fn reduce_start_edit(&mut self, key: NodeKey) -> Option<TreeOutcome> {
        if let Some(notice) = self.edit_in_progress() {
            return Some(notice);
        }
        self.add_menu = None;

        match ops::edit_node(&mut self.tree, &key) {
            Some(node) => {
                let value = node.title().to_string();
                self.inline_edit = Some(InlineEditState::rename(key, value));
            },
            None => log::debug!("edit ignored, no node with key {key}"),
        }
        None
    }

    fn reduce_confirm(
        &mut self,
        key: NodeKey,
        title: String,
    ) -> Option<TreeOutcome> {
        let title = match normalize_title(&title) {
            Ok(title) => title,
            Err(err) => {
                log::debug!("confirm rejected for key {key}: {err}");
                return Some(TreeOutcome::Notice(TreeNotice::EmptyTitle(
                    self.settings.empty_title_tips.clone(),
                )));
            },
        };

        let confirmed = ops::confirm_add_node(&mut self.tree, &key, title)
            .cloned();
        if confirmed.is_none() {
            log::debug!("confirm ignored, no node with key {key}");
        } else if self.inline_edit_matches(&key) {
            self.inline_edit = None;
        }

        Some(TreeOutcome::Edited(confirmed))
    }

    fn reduce_cancel(&mut self, key: NodeKey) -> Option<TreeOutcome> {
        let kind = match self.inline_edit.take_if(|edit| edit.key == key) {
            Some(edit) => edit.kind,
            None => {
                let is_placeholder = ops::find_node(&self.tree, &key)
                    .is_some_and(TreeNode::is_placeholder);
                if is_placeholder {
                    InlineEditKind::Create
                } else {
                    InlineEditKind::Rename
                }
            },
        };

        let found = match kind {
            InlineEditKind::Create => {
                ops::cancel_node(&mut self.tree, &key).is_some()
            },
            InlineEditKind::Rename => {
                ops::stop_editing(&mut self.tree, &key).is_some()
            },
        };
        if !found {
            log::debug!("cancel ignored, no node with key {key}");
        }
        None
    }
}

impl EditableTree {
    /// Reduce a row event into state updates.
    ///
    /// Returns what the embedding application should react to, if
    /// anything. Mutating events are ignored when editing is disabled.
    pub fn reduce(&mut self, event: TreeEvent) -> Option<TreeOutcome> {
        use TreeEvent::*;

        match event {
            HoverEntered { key } => {
                self.hovered = Some(key);
                None
            },
            HoverLeft { key } => {
                if self.hovered.as_ref() == Some(&key) {
                    self.hovered = None;
                }
                None
            },
            ToggleExpanded { key } => {
                if !self.collapsed.remove(&key) {
                    self.collapsed.insert(key);
                }
                None
            },
            _ if !self.settings.can_edit => {
                log::debug!("editable tree is read-only, ignoring {event:?}");
                None
            },
            Remove { key } => self.reduce_remove(key),
            AddSameLevel { key } => self.reduce_add_same_level(key),
            AddSubNode { key } => self.reduce_add_sub_node(key),
            StartEdit { key } => self.reduce_start_edit(key),
            Confirm { key, title } => self.reduce_confirm(key, title),
            Cancel { key } => self.reduce_cancel(key),
            DraftChanged(value) => {
                if let Some(edit) = self.inline_edit.as_mut() {
                    edit.value = value;
                }
                None
            },
            RequestRemove { key } => {
                self.add_menu = None;
                self.pending_remove = Some(key);
                None
            },
            DismissRemove => {
                self.pending_remove = None;
                None
            },
            ToggleAddMenu { key } => {
                self.pending_remove = None;
                self.add_menu = if self.add_menu.as_ref() == Some(&key) {
                    None
                } else {
                    Some(key)
                };
                None
            },
        }
    }
}
