use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::key::NodeKey;

/// Node of an editable tree in canonical shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub key: NodeKey,
    /// Display label, absent while the node is being created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Child nodes; `None` marks a leaf.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
    /// Set while the label is being composed or edited.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_editing: bool,
    /// Source fields of the record this node was built from.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub data: Map<String, Value>,
}

impl TreeNode {
    /// Create a leaf node with a title.
    pub fn new(key: impl Into<NodeKey>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: Some(title.into()),
            children: None,
            is_editing: false,
            data: Map::new(),
        }
    }

    /// Create a placeholder: generated key, no title, in editing state.
    pub fn placeholder() -> Self {
        Self {
            key: NodeKey::generate(),
            title: None,
            children: None,
            is_editing: true,
            data: Map::new(),
        }
    }

    /// Attach children, an empty list keeps the node a leaf.
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = if children.is_empty() {
            None
        } else {
            Some(children)
        };
        self
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or_default()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Whether this node was created by an add and never confirmed.
    pub fn is_placeholder(&self) -> bool {
        self.is_editing && self.title.is_none()
    }

    /// Total number of nodes in this subtree, the node included.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(TreeNode::subtree_len)
            .sum::<usize>()
    }

    /// Whether `key` names this node or one of its descendants.
    pub fn contains_key(&self, key: &NodeKey) -> bool {
        &self.key == key
            || self.children().iter().any(|child| child.contains_key(key))
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
