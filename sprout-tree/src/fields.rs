use serde_json::{Map, Number, Value};
use thiserror::Error;

use crate::key::NodeKey;
use crate::node::TreeNode;

/// Names of the source fields that hold a node's key, title and children.
///
/// The same mapping is applied at every depth of the source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    pub key: String,
    pub title: String,
    pub children: String,
}

impl FieldNames {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        children: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            children: children.into(),
        }
    }
}

impl Default for FieldNames {
    fn default() -> Self {
        Self::new("key", "title", "children")
    }
}

/// Errors returned while converting source data into canonical nodes.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("tree source is not valid JSON")]
    Json(#[from] serde_json::Error),
    #[error("tree source at {path} is not an array")]
    NotAnArray { path: String },
    #[error("tree node at {path} is not an object")]
    NotAnObject { path: String },
    #[error("tree node at {path} has no `{field}` field")]
    MissingKey { path: String, field: String },
    #[error("tree node at {path} has a key that is neither number nor string")]
    InvalidKey { path: String },
    #[error("tree node at {path} has a title that is not a scalar")]
    InvalidTitle { path: String },
    #[error("tree node at {path} has children that are not an array")]
    InvalidChildren { path: String },
}

/// Convert a source tree into canonical nodes.
///
/// `source` must be an array of objects. Each object provides its key,
/// title and children under the names in `fields`; every other field is
/// carried over into [`TreeNode::data`]. The source is only borrowed, the
/// returned tree shares nothing with it.
pub fn normalize(
    source: &Value,
    fields: &FieldNames,
) -> Result<Vec<TreeNode>, NormalizeError> {
    normalize_level(source, fields, "$")
}

/// Parse `source` as JSON and [`normalize`] it.
pub fn normalize_str(
    source: &str,
    fields: &FieldNames,
) -> Result<Vec<TreeNode>, NormalizeError> {
    let value: Value = serde_json::from_str(source)?;
    normalize(&value, fields)
}

fn normalize_level(
    source: &Value,
    fields: &FieldNames,
    path: &str,
) -> Result<Vec<TreeNode>, NormalizeError> {
    let Some(items) = source.as_array() else {
        return Err(NormalizeError::NotAnArray {
            path: path.to_string(),
        });
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            normalize_node(item, fields, &format!("{path}[{index}]"))
        })
        .collect()
}

fn normalize_node(
    source: &Value,
    fields: &FieldNames,
    path: &str,
) -> Result<TreeNode, NormalizeError> {
    let Some(object) = source.as_object() else {
        return Err(NormalizeError::NotAnObject {
            path: path.to_string(),
        });
    };

    let key = read_key(object, &fields.key, path)?;
    let title = read_title(object.get(&fields.title), path)?;
    let children = match object.get(&fields.children) {
        None | Some(Value::Null) => None,
        Some(value @ Value::Array(_)) => {
            let child_path = format!("{path}.{}", fields.children);
            let nodes = normalize_level(value, fields, &child_path)?;
            if nodes.is_empty() { None } else { Some(nodes) }
        },
        Some(_) => {
            return Err(NormalizeError::InvalidChildren {
                path: path.to_string(),
            });
        },
    };

    let data = object
        .iter()
        .filter(|(name, _)| *name != &fields.children)
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect::<Map<String, Value>>();

    Ok(TreeNode {
        key,
        title,
        children,
        is_editing: false,
        data,
    })
}

fn read_key(
    object: &Map<String, Value>,
    field: &str,
    path: &str,
) -> Result<NodeKey, NormalizeError> {
    match object.get(field) {
        None | Some(Value::Null) => Err(NormalizeError::MissingKey {
            path: path.to_string(),
            field: field.to_string(),
        }),
        Some(Value::String(value)) => Ok(NodeKey::Str(value.clone())),
        Some(Value::Number(number)) => Ok(number_key(number)),
        Some(_) => Err(NormalizeError::InvalidKey {
            path: path.to_string(),
        }),
    }
}

/// Integral numbers become integer keys. Numbers outside the `i64` range
/// or with a fraction keep their JSON text as a string key.
fn number_key(number: &Number) -> NodeKey {
    if let Some(value) = number.as_i64() {
        return NodeKey::Int(value);
    }

    match number.as_f64() {
        Some(value)
            if value.fract() == 0.0
                && value >= i64::MIN as f64
                && value < i64::MAX as f64 =>
        {
            NodeKey::Int(value as i64)
        },
        _ => NodeKey::Str(number.to_string()),
    }
}

fn read_title(
    value: Option<&Value>,
    path: &str,
) -> Result<Option<String>, NormalizeError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(_) => Err(NormalizeError::InvalidTitle {
            path: path.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn kids_fields() -> FieldNames {
        FieldNames::new("id", "name", "kids")
    }

    #[test]
    fn normalize_maps_aliases_recursively() {
        let source = json!([
            { "id": 1, "name": "A", "kids": [{ "id": 2, "name": "B" }] }
        ]);

        let tree = normalize(&source, &kids_fields()).expect("normalize");

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].key, NodeKey::from(1));
        assert_eq!(tree[0].title.as_deref(), Some("A"));
        let children = tree[0].children.as_ref().expect("children");
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].key, NodeKey::from(2));
        assert_eq!(children[0].title.as_deref(), Some("B"));
        assert!(children[0].is_leaf());
    }

    #[test]
    fn normalize_keeps_other_source_fields_except_children() {
        let source = json!([
            { "id": "a", "name": "A", "price": 10, "kids": [{ "id": "b" }] }
        ]);

        let tree = normalize(&source, &kids_fields()).expect("normalize");

        assert_eq!(tree[0].data.get("price"), Some(&json!(10)));
        assert_eq!(tree[0].data.get("id"), Some(&json!("a")));
        assert!(!tree[0].data.contains_key("kids"));
    }

    #[test]
    fn normalize_with_default_fields_reads_canonical_shape() {
        let source = json!([{ "key": "k", "title": "T", "children": null }]);

        let tree = normalize(&source, &FieldNames::default()).expect("ok");

        assert_eq!(tree[0].key, NodeKey::from("k"));
        assert_eq!(tree[0].title(), "T");
        assert!(tree[0].is_leaf());
    }

    #[test]
    fn normalize_turns_empty_children_into_leaf() {
        let source = json!([{ "id": 1, "name": "A", "kids": [] }]);

        let tree = normalize(&source, &kids_fields()).expect("normalize");

        assert!(tree[0].is_leaf());
    }

    #[test]
    fn normalize_stringifies_scalar_titles_and_allows_missing_title() {
        let source = json!([
            { "id": 1, "name": 5 },
            { "id": 2, "name": true },
            { "id": 3 },
        ]);

        let tree = normalize(&source, &kids_fields()).expect("normalize");

        assert_eq!(tree[0].title.as_deref(), Some("5"));
        assert_eq!(tree[1].title.as_deref(), Some("true"));
        assert!(tree[2].title.is_none());
    }

    #[test]
    fn normalize_does_not_touch_the_source() {
        let source = json!([{ "id": 1, "name": "A" }]);
        let before = source.clone();

        let mut tree = normalize(&source, &kids_fields()).expect("normalize");
        tree[0].title = Some(String::from("changed"));

        assert_eq!(source, before);
    }

    #[test]
    fn normalize_rejects_malformed_sources() {
        let fields = kids_fields();

        assert!(matches!(
            normalize(&json!({ "id": 1 }), &fields),
            Err(NormalizeError::NotAnArray { .. })
        ));
        assert!(matches!(
            normalize(&json!([1]), &fields),
            Err(NormalizeError::NotAnObject { .. })
        ));
        assert!(matches!(
            normalize(&json!([{ "name": "A" }]), &fields),
            Err(NormalizeError::MissingKey { .. })
        ));
        assert!(matches!(
            normalize(&json!([{ "id": true }]), &fields),
            Err(NormalizeError::InvalidKey { .. })
        ));
        assert!(matches!(
            normalize(&json!([{ "id": 1, "name": ["x"] }]), &fields),
            Err(NormalizeError::InvalidTitle { .. })
        ));
        assert!(matches!(
            normalize(&json!([{ "id": 1, "kids": "nope" }]), &fields),
            Err(NormalizeError::InvalidChildren { .. })
        ));
    }

    #[test]
    fn normalize_accepts_integral_floats_and_wide_numbers_as_keys() {
        let source = json!([
            { "id": 1.0, "name": "float" },
            { "id": u64::MAX, "name": "wide" },
            { "id": 1.5, "name": "fraction" },
        ]);

        let tree = normalize(&source, &kids_fields()).expect("normalize");

        assert_eq!(tree.len(), 3);
        assert_eq!(tree[0].key, NodeKey::from(1));
        assert_eq!(tree[1].key, NodeKey::from(u64::MAX.to_string()));
        assert_eq!(tree[2].key, NodeKey::from("1.5"));
    }

    #[test]
    fn normalize_reports_path_of_nested_failure() {
        let source = json!([
            { "id": 1, "kids": [{ "id": 2 }, { "name": "no key" }] }
        ]);

        let err = normalize(&source, &kids_fields()).expect_err("malformed");

        match err {
            NormalizeError::MissingKey { path, field } => {
                assert_eq!(path, "$[0].kids[1]");
                assert_eq!(field, "id");
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn normalize_str_reports_invalid_json() {
        let result = normalize_str("[{", &FieldNames::default());
        assert!(matches!(result, Err(NormalizeError::Json(_))));
    }
}
