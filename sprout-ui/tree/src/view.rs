use iced::alignment;
use iced::widget::{
    Column, Row, Space, button, column, container, mouse_area, row, text,
    text_input,
};
use iced::{Element, Length, mouse};
use sprout_tree::TreeNode;

use crate::controller::EditableTree;
use crate::event::TreeEvent;
use crate::model::{FlattenedNode, flatten_tree};

const DEFAULT_INDENT_WIDTH: f32 = 14.0;
const DEFAULT_TOGGLE_WIDTH: f32 = 16.0;

const ROW_SPACING: f32 = 6.0;
const ROW_PADDING_X: f32 = 6.0;
const ACTION_FONT_SIZE: f32 = 12.0;
const ACTION_PADDING_X: f32 = 6.0;
const ACTION_PADDING_Y: f32 = 2.0;
const INPUT_PADDING_X: f32 = 6.0;
const INPUT_PADDING_Y: f32 = 4.0;

/// Renders an [`EditableTree`] row by row.
///
/// A row is either a label (with remove/edit/add actions while hovered)
/// or, when its node is being edited, an input with confirm and cancel.
/// Read-only trees render plain labels.
pub struct EditableTreeView<'a> {
    tree: &'a EditableTree,
    spacing: f32,
    indent_width: f32,
    toggle_width: f32,
}

impl<'a> EditableTreeView<'a> {
    pub fn new(tree: &'a EditableTree) -> Self {
        Self {
            tree,
            spacing: 0.0,
            indent_width: DEFAULT_INDENT_WIDTH,
            toggle_width: DEFAULT_TOGGLE_WIDTH,
        }
    }

    /// Set indentation width per tree depth level.
    pub fn indent_width(mut self, width: f32) -> Self {
        self.indent_width = width.max(0.0);
        self
    }

    /// Set the width reserved for the expand/collapse toggle.
    pub fn toggle_width(mut self, width: f32) -> Self {
        self.toggle_width = width.max(0.0);
        self
    }

    /// Vertical spacing between rows.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Build the `Element` for the tree.
    pub fn view(self) -> Element<'a, TreeEvent> {
        let tree = self.tree;
        let mut column = Column::new().spacing(self.spacing);

        for entry in
            flatten_tree(tree.tree(), |node| tree.is_expanded(&node.key))
        {
            column = column.push(self.render_row(&entry));
        }

        column.into()
    }

    fn render_row(&self, entry: &FlattenedNode<'a>) -> Element<'a, TreeEvent> {
        let node = entry.node;
        let indent = entry.depth as f32 * self.indent_width;

        let content: Element<'a, TreeEvent> = if !self.tree.settings().can_edit
        {
            text(node.title()).width(Length::Fill).into()
        } else if node.is_editing {
            self.editing_row(node)
        } else {
            self.display_row(node)
        };

        let line = row![
            Space::new().width(Length::Fixed(indent)),
            self.toggle_slot(node),
            content,
        ]
        .spacing(ROW_SPACING)
        .align_y(alignment::Vertical::Center);

        container(line)
            .width(Length::Fill)
            .padding([0.0, ROW_PADDING_X])
            .into()
    }

    fn toggle_slot(&self, node: &'a TreeNode) -> Element<'a, TreeEvent> {
        let width = Length::Fixed(self.toggle_width);
        if node.is_leaf() {
            return Space::new().width(width).into();
        }

        let label = if self.tree.is_expanded(&node.key) {
            "[-]"
        } else {
            "[+]"
        };
        let slot = container(text(label))
            .width(width)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        mouse_area(slot)
            .interaction(mouse::Interaction::Pointer)
            .on_press(TreeEvent::ToggleExpanded {
                key: node.key.clone(),
            })
            .into()
    }

    fn display_row(&self, node: &'a TreeNode) -> Element<'a, TreeEvent> {
        let key = &node.key;
        let menu_open = self.tree.add_menu() == Some(key);
        let remove_pending = self.tree.pending_remove() == Some(key);
        let show_actions =
            self.tree.hovered() == Some(key) || menu_open || remove_pending;

        let mut line = Row::new()
            .spacing(ROW_SPACING)
            .align_y(alignment::Vertical::Center)
            .push(text(node.title()).width(Length::Fill));

        if show_actions {
            line = line
                .push(action_button(
                    "Delete",
                    TreeEvent::RequestRemove { key: key.clone() },
                ))
                .push(action_button(
                    "Edit",
                    TreeEvent::StartEdit { key: key.clone() },
                ))
                .push(action_button(
                    "+",
                    TreeEvent::ToggleAddMenu { key: key.clone() },
                ));
        }

        let mut body = Column::new().spacing(ROW_SPACING).push(line);

        if remove_pending {
            let prompt = row![
                text(self.tree.settings().remove_tips.as_str())
                    .width(Length::Fill),
                action_button("Remove", TreeEvent::Remove { key: key.clone() }),
                action_button("Keep", TreeEvent::DismissRemove),
            ]
            .spacing(ROW_SPACING)
            .align_y(alignment::Vertical::Center);
            body = body.push(prompt);
        }

        if menu_open {
            let menu = column![
                action_button(
                    "Add sibling",
                    TreeEvent::AddSameLevel { key: key.clone() },
                ),
                action_button(
                    "Add child",
                    TreeEvent::AddSubNode { key: key.clone() },
                ),
            ]
            .spacing(2);
            body = body.push(menu);
        }

        mouse_area(body)
            .on_enter(TreeEvent::HoverEntered { key: key.clone() })
            .on_exit(TreeEvent::HoverLeft { key: key.clone() })
            .into()
    }

    fn editing_row(&self, node: &'a TreeNode) -> Element<'a, TreeEvent> {
        let value = self
            .tree
            .inline_edit()
            .filter(|edit| edit.key == node.key)
            .map(|edit| edit.value.as_str())
            .unwrap_or_default();
        let confirm = TreeEvent::Confirm {
            key: node.key.clone(),
            title: value.to_string(),
        };

        let input = text_input("", value)
            .on_input(TreeEvent::DraftChanged)
            .on_submit(confirm.clone())
            .padding([INPUT_PADDING_Y, INPUT_PADDING_X])
            .width(Length::Fill);

        row![
            input,
            action_button("OK", confirm),
            action_button(
                "Cancel",
                TreeEvent::Cancel {
                    key: node.key.clone(),
                },
            ),
        ]
        .spacing(ROW_SPACING)
        .align_y(alignment::Vertical::Center)
        .into()
    }
}

fn action_button<'a>(
    label: &'static str,
    event: TreeEvent,
) -> Element<'a, TreeEvent> {
    button(text(label).size(ACTION_FONT_SIZE))
        .padding([ACTION_PADDING_Y, ACTION_PADDING_X])
        .on_press(event)
        .into()
}
