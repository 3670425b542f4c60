use serde_json::Value;
use sprout_tree::FieldNames;

const DEFAULT_EDITING_TIPS: &str = "A node is being edited, save it first.";
const DEFAULT_REMOVE_TIPS: &str =
    "Removing this node also removes its children. Continue?";
const DEFAULT_EMPTY_TITLE_TIPS: &str = "Please enter a node name.";

/// Behaviour and texts of an [`EditableTree`](crate::EditableTree).
#[derive(Debug, Clone, PartialEq)]
pub struct EditableTreeSettings {
    /// Whether rows expose add/edit/remove actions at all.
    pub can_edit: bool,
    /// Shown when an add or edit is attempted while another is open.
    pub editing_tips: String,
    /// Shown in the remove confirmation prompt.
    pub remove_tips: String,
    /// Shown when a blank title is submitted.
    pub empty_title_tips: String,
    /// Source field names used when loading data.
    pub field_names: FieldNames,
}

impl Default for EditableTreeSettings {
    fn default() -> Self {
        Self {
            can_edit: false,
            editing_tips: String::from(DEFAULT_EDITING_TIPS),
            remove_tips: String::from(DEFAULT_REMOVE_TIPS),
            empty_title_tips: String::from(DEFAULT_EMPTY_TITLE_TIPS),
            field_names: FieldNames::default(),
        }
    }
}

impl EditableTreeSettings {
    pub fn with_can_edit(mut self, can_edit: bool) -> Self {
        self.can_edit = can_edit;
        self
    }

    pub fn with_editing_tips(mut self, tips: impl Into<String>) -> Self {
        self.editing_tips = tips.into();
        self
    }

    pub fn with_remove_tips(mut self, tips: impl Into<String>) -> Self {
        self.remove_tips = tips.into();
        self
    }

    pub fn with_empty_title_tips(mut self, tips: impl Into<String>) -> Self {
        self.empty_title_tips = tips.into();
        self
    }

    pub fn with_field_names(mut self, field_names: FieldNames) -> Self {
        self.field_names = field_names;
        self
    }

    /// Read settings from a JSON object, keeping defaults for missing,
    /// mistyped or blank entries.
    ///
    /// Recognised keys: `canEdit`, `editingTips`, `removeTips`,
    /// `emptyTitleTips` and `fieldNames` (`key`, `title`, `children`).
    pub fn from_json(value: &Value) -> Self {
        let mut settings = Self::default();

        if let Some(can_edit) = value.get("canEdit").and_then(Value::as_bool)
        {
            settings.can_edit = can_edit;
        }
        if let Some(tips) = read_string_field(value, "editingTips") {
            settings.editing_tips = tips;
        }
        if let Some(tips) = read_string_field(value, "removeTips") {
            settings.remove_tips = tips;
        }
        if let Some(tips) = read_string_field(value, "emptyTitleTips") {
            settings.empty_title_tips = tips;
        }

        if let Some(fields) = value.get("fieldNames") {
            let defaults = FieldNames::default();
            settings.field_names = FieldNames {
                key: read_string_field(fields, "key").unwrap_or(defaults.key),
                title: read_string_field(fields, "title")
                    .unwrap_or(defaults.title),
                children: read_string_field(fields, "children")
                    .unwrap_or(defaults.children),
            };
        }

        settings
    }
}

fn read_string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.trim().is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn defaults_are_read_only_with_canonical_field_names() {
        let settings = EditableTreeSettings::default();

        assert!(!settings.can_edit);
        assert_eq!(settings.field_names, FieldNames::default());
        assert_eq!(settings.editing_tips, DEFAULT_EDITING_TIPS);
    }

    #[test]
    fn from_json_reads_all_known_keys() {
        let settings = EditableTreeSettings::from_json(&json!({
            "canEdit": true,
            "editingTips": "busy",
            "removeTips": "sure?",
            "emptyTitleTips": "name it",
            "fieldNames": {
                "key": "productCategoryId",
                "title": "name",
                "children": "subs"
            }
        }));

        assert!(settings.can_edit);
        assert_eq!(settings.editing_tips, "busy");
        assert_eq!(settings.remove_tips, "sure?");
        assert_eq!(settings.empty_title_tips, "name it");
        assert_eq!(
            settings.field_names,
            FieldNames::new("productCategoryId", "name", "subs")
        );
    }

    #[test]
    fn from_json_keeps_defaults_for_wrong_types_and_blank_strings() {
        let settings = EditableTreeSettings::from_json(&json!({
            "canEdit": "yes",
            "editingTips": "   ",
            "removeTips": 3,
            "fieldNames": { "key": "id", "title": "" }
        }));

        assert!(!settings.can_edit);
        assert_eq!(settings.editing_tips, DEFAULT_EDITING_TIPS);
        assert_eq!(settings.remove_tips, DEFAULT_REMOVE_TIPS);
        assert_eq!(
            settings.field_names,
            FieldNames::new("id", "title", "children")
        );
    }

    #[test]
    fn builders_override_fields() {
        let settings = EditableTreeSettings::default()
            .with_can_edit(true)
            .with_remove_tips("gone")
            .with_field_names(FieldNames::new("id", "name", "kids"));

        assert!(settings.can_edit);
        assert_eq!(settings.remove_tips, "gone");
        assert_eq!(settings.field_names.children, "kids");
    }
}
