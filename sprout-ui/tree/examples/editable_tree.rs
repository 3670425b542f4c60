use iced::widget::{column, container, scrollable, text};
use iced::{Element, Length};
use serde_json::json;
use sprout_tree::FieldNames;
use sprout_ui_tree::{
    EditableTree, EditableTreeSettings, EditableTreeView, TreeEvent,
    TreeOutcome,
};

#[derive(Debug, Clone)]
enum Message {
    Tree(TreeEvent),
}

struct AppState {
    tree: EditableTree,
    status: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let settings = EditableTreeSettings::default()
            .with_can_edit(true)
            .with_field_names(FieldNames::new(
                "productCategoryId",
                "name",
                "subs",
            ));

        let source = json!([
            {
                "productCategoryId": 1,
                "name": "Produce",
                "subs": [
                    { "productCategoryId": 11, "name": "Fruit", "subs": [
                        { "productCategoryId": 111, "name": "Apples" },
                        { "productCategoryId": 112, "name": "Pears" }
                    ]},
                    { "productCategoryId": 12, "name": "Vegetables" }
                ]
            },
            { "productCategoryId": 2, "name": "Dairy" },
            { "productCategoryId": 3, "name": "Bakery" }
        ]);

        Self {
            tree: EditableTree::with_source(settings, &source),
            status: None,
        }
    }
}

fn update(state: &mut AppState, message: Message) {
    match message {
        Message::Tree(event) => {
            let Some(outcome) = state.tree.reduce(event) else {
                return;
            };
            state.status = Some(match outcome {
                TreeOutcome::Removed(Some(node)) => {
                    format!("Removed \"{}\"", node.title())
                },
                TreeOutcome::Edited(Some(node)) => {
                    format!("Saved \"{}\"", node.title())
                },
                TreeOutcome::Removed(None) | TreeOutcome::Edited(None) => {
                    String::from("Node no longer exists")
                },
                TreeOutcome::Notice(notice) => notice.message().to_string(),
            });
        },
    }
}

fn view(state: &AppState) -> Element<'_, Message> {
    let tree = EditableTreeView::new(&state.tree)
        .indent_width(18.0)
        .spacing(2.0)
        .view()
        .map(Message::Tree);

    let status = text(state.status.as_deref().unwrap_or_default()).size(12);

    container(column![scrollable(tree).height(Length::Fill), status])
        .padding(12)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn main() -> iced::Result {
    env_logger::init();
    iced::run(update, view)
}
