//! In-place mutations of an editable tree.
//!
//! Lookups follow one of two orders:
//! - pre-order: a node is checked before its subtree, and the subtree is
//!   exhausted before the next sibling ([`remove_node`], [`confirm_add_node`],
//!   [`stop_editing`], [`find_node`]);
//! - level-first: the whole sibling list is checked before descending into
//!   the children of each sibling in turn ([`add_same_level_node`],
//!   [`add_sub_node`], [`cancel_node`], [`edit_node`]).
//!
//! Both orders stop at the first match. A missing key leaves the tree
//! untouched and yields `None`.

use crate::key::NodeKey;
use crate::node::TreeNode;

/// Find a node by key in pre-order.
pub fn find_node<'a>(
    tree: &'a [TreeNode],
    key: &NodeKey,
) -> Option<&'a TreeNode> {
    for node in tree {
        if &node.key == key {
            return Some(node);
        }
        if let Some(found) = find_node(node.children(), key) {
            return Some(found);
        }
    }
    None
}

/// Find a node by key in pre-order, mutably.
pub fn find_node_mut<'a>(
    tree: &'a mut [TreeNode],
    key: &NodeKey,
) -> Option<&'a mut TreeNode> {
    for node in tree.iter_mut() {
        if &node.key == key {
            return Some(node);
        }
        if let Some(children) = node.children.as_deref_mut() {
            if let Some(found) = find_node_mut(children, key) {
                return Some(found);
            }
        }
    }
    None
}

/// Remove the first node with `key` in pre-order and return it together
/// with its subtree.
pub fn remove_node(
    tree: &mut Vec<TreeNode>,
    key: &NodeKey,
) -> Option<TreeNode> {
    for index in 0..tree.len() {
        if &tree[index].key == key {
            return Some(tree.remove(index));
        }

        let node = &mut tree[index];
        let Some(children) = node.children.as_mut() else {
            continue;
        };
        if let Some(removed) = remove_node(children, key) {
            collapse_children(node);
            return Some(removed);
        }
    }
    None
}

/// Insert a placeholder right after the node with `key`.
///
/// Returns the placeholder.
pub fn add_same_level_node<'a>(
    tree: &'a mut Vec<TreeNode>,
    key: &NodeKey,
) -> Option<&'a mut TreeNode> {
    if let Some(index) = position(tree, key) {
        tree.insert(index + 1, TreeNode::placeholder());
        return tree.get_mut(index + 1);
    }

    tree.iter_mut()
        .filter_map(|node| node.children.as_mut())
        .find_map(|children| add_same_level_node(children, key))
}

/// Insert a placeholder as the first child of the node with `key`,
/// turning a leaf into a parent when needed.
///
/// Returns the placeholder.
pub fn add_sub_node<'a>(
    tree: &'a mut Vec<TreeNode>,
    key: &NodeKey,
) -> Option<&'a mut TreeNode> {
    if let Some(index) = position(tree, key) {
        let children = tree[index].children.get_or_insert_with(Vec::new);
        children.insert(0, TreeNode::placeholder());
        return children.first_mut();
    }

    tree.iter_mut()
        .filter_map(|node| node.children.as_mut())
        .find_map(|children| add_sub_node(children, key))
}

/// Commit `value` as the title of the node with `key` and leave editing.
///
/// The value is stored as given; rejecting blank titles is up to the
/// caller.
pub fn confirm_add_node<'a>(
    tree: &'a mut [TreeNode],
    key: &NodeKey,
    value: impl Into<String>,
) -> Option<&'a mut TreeNode> {
    let node = find_node_mut(tree, key)?;
    node.is_editing = false;
    node.title = Some(value.into());
    Some(node)
}

/// Remove the node with `key`, discarding an unconfirmed placeholder.
pub fn cancel_node(
    tree: &mut Vec<TreeNode>,
    key: &NodeKey,
) -> Option<TreeNode> {
    if let Some(index) = position(tree, key) {
        return Some(tree.remove(index));
    }

    for node in tree.iter_mut() {
        let Some(children) = node.children.as_mut() else {
            continue;
        };
        if let Some(removed) = cancel_node(children, key) {
            collapse_children(node);
            return Some(removed);
        }
    }
    None
}

/// Put the node with `key` into editing state, keeping its title.
pub fn edit_node<'a>(
    tree: &'a mut [TreeNode],
    key: &NodeKey,
) -> Option<&'a mut TreeNode> {
    if let Some(index) = position(tree, key) {
        let node = &mut tree[index];
        node.is_editing = true;
        return Some(node);
    }

    tree.iter_mut()
        .filter_map(|node| node.children.as_deref_mut())
        .find_map(|children| edit_node(children, key))
}

/// Leave editing state on the node with `key` without changing its title.
pub fn stop_editing<'a>(
    tree: &'a mut [TreeNode],
    key: &NodeKey,
) -> Option<&'a mut TreeNode> {
    let node = find_node_mut(tree, key)?;
    node.is_editing = false;
    Some(node)
}

fn position(siblings: &[TreeNode], key: &NodeKey) -> Option<usize> {
    siblings.iter().position(|node| &node.key == key)
}

// A parent whose last child went away becomes a leaf again.
fn collapse_children(node: &mut TreeNode) {
    if node.children.as_ref().is_some_and(Vec::is_empty) {
        node.children = None;
    }
}
