use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a tree node.
///
/// Source data may key its records by number or by string, so both are
/// kept as-is. Keys of different kinds never compare equal: `Int(1)` and
/// `Str("1")` name different nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeKey {
    Int(i64),
    Str(String),
}

impl NodeKey {
    /// Generate a fresh random key for a node that is being created.
    ///
    /// Keys come from a v4 UUID in its simple (hyphenless) form. They are
    /// not checked against the tree, collisions are treated as impossible.
    pub fn generate() -> Self {
        NodeKey::Str(uuid::Uuid::new_v4().simple().to_string())
    }

    /// Return the string form if this is a string key.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            NodeKey::Str(value) => Some(value),
            NodeKey::Int(_) => None,
        }
    }

    /// Return the integer form if this is an integer key.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            NodeKey::Int(value) => Some(*value),
            NodeKey::Str(_) => None,
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Int(value) => write!(f, "{value}"),
            NodeKey::Str(value) => f.write_str(value),
        }
    }
}

impl From<i64> for NodeKey {
    fn from(value: i64) -> Self {
        NodeKey::Int(value)
    }
}

impl From<i32> for NodeKey {
    fn from(value: i32) -> Self {
        NodeKey::Int(i64::from(value))
    }
}

impl From<&str> for NodeKey {
    fn from(value: &str) -> Self {
        NodeKey::Str(value.to_string())
    }
}

impl From<String> for NodeKey {
    fn from(value: String) -> Self {
        NodeKey::Str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_are_distinct_strings() {
        let first = NodeKey::generate();
        let second = NodeKey::generate();

        assert_ne!(first, second);
        let text = first.as_str().expect("generated key is a string");
        assert_eq!(text.len(), 32);
        assert!(text.chars().all(|ch| ch.is_ascii_hexdigit()));
    }

    #[test]
    fn integer_and_string_keys_never_match() {
        assert_ne!(NodeKey::from(1), NodeKey::from("1"));
        assert_eq!(NodeKey::from(1), NodeKey::Int(1));
    }

    #[test]
    fn display_prints_the_raw_value() {
        assert_eq!(NodeKey::from(42).to_string(), "42");
        assert_eq!(NodeKey::from("abc").to_string(), "abc");
    }

    #[test]
    fn serializes_untagged() {
        let int = serde_json::to_value(NodeKey::from(7)).expect("serialize");
        let text =
            serde_json::to_value(NodeKey::from("seven")).expect("serialize");

        assert_eq!(int, serde_json::json!(7));
        assert_eq!(text, serde_json::json!("seven"));
    }
}
