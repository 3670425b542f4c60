//! Editable tree model.
//!
//! This crate holds the UI-agnostic half of an editable tree control:
//! - [`normalize`] turns caller data with custom field names into
//!   canonical [`TreeNode`]s;
//! - the functions in [`ops`] add, confirm, cancel, edit and remove nodes
//!   in place and hand back the node they touched.
//!
//! # Quick Example
//!
//! ```
//! use serde_json::json;
//! use sprout_tree::{FieldNames, NodeKey, normalize, ops};
//!
//! let source = json!([
//!     { "id": 1, "name": "Fruit", "kids": [{ "id": 2, "name": "Apple" }] }
//! ]);
//! let fields = FieldNames::new("id", "name", "kids");
//! let mut tree = normalize(&source, &fields).unwrap_or_default();
//!
//! let placeholder = ops::add_same_level_node(&mut tree, &NodeKey::from(2))
//!     .map(|node| node.key.clone())
//!     .expect("key 2 exists");
//! ops::confirm_add_node(&mut tree, &placeholder, "Pear");
//!
//! let titles: Vec<&str> =
//!     tree[0].children().iter().map(|node| node.title()).collect();
//! assert_eq!(titles, ["Apple", "Pear"]);
//! ```

mod fields;
mod key;
mod node;
pub mod ops;

pub use fields::{FieldNames, NormalizeError, normalize, normalize_str};
pub use key::NodeKey;
pub use node::TreeNode;
pub use ops::{
    add_same_level_node, add_sub_node, cancel_node, confirm_add_node,
    edit_node, find_node, find_node_mut, remove_node, stop_editing,
};
