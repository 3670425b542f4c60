//! Editable tree control for [`iced`].
//!
//! This crate is split into two layers:
//! - the controller ([`EditableTree`]) that owns the canonical tree, turns
//!   row events ([`TreeEvent`]) into mutations from [`sprout_tree`] and
//!   reports results ([`TreeOutcome`]);
//! - view helpers ([`EditableTreeView`], [`flatten_tree`]) that render rows
//!   in `iced`.
//!
//! The recommended flow:
//! 1. keep an [`EditableTree`] in your app state;
//! 2. render it with [`EditableTreeView`] and map its events into your
//!    message type;
//! 3. feed those events back through [`EditableTree::reduce`] and react to
//!    the returned [`TreeOutcome`] (persist a removed node, show a notice).
//!
//! See `examples/editable_tree.rs` for a complete runnable example.
//!
//! # Quick Example
//!
//! ```no_run
//! use iced::Element;
//! use serde_json::json;
//! use sprout_ui_tree::{
//!     EditableTree, EditableTreeSettings, EditableTreeView, TreeEvent,
//!     TreeOutcome,
//! };
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Tree(TreeEvent),
//! }
//!
//! struct State {
//!     tree: EditableTree,
//!     status: Option<String>,
//! }
//!
//! fn update(state: &mut State, message: Message) {
//!     match message {
//!         Message::Tree(event) => match state.tree.reduce(event) {
//!             Some(TreeOutcome::Notice(notice)) => {
//!                 state.status = Some(notice.message().to_string());
//!             },
//!             Some(_) | None => state.status = None,
//!         },
//!     }
//! }
//!
//! fn view(state: &State) -> Element<'_, Message> {
//!     EditableTreeView::new(&state.tree).view().map(Message::Tree)
//! }
//!
//! let settings = EditableTreeSettings::default().with_can_edit(true);
//! let tree = EditableTree::with_source(
//!     settings,
//!     &json!([{ "key": 1, "title": "Inbox" }]),
//! );
//! let _state = State { tree, status: None };
//! ```

mod controller;
mod event;
mod model;
mod settings;
mod state;
mod title;
mod view;

pub use controller::EditableTree;
pub use event::{TreeEvent, TreeNotice, TreeOutcome};
pub use model::{FlattenedNode, flatten_tree};
pub use settings::EditableTreeSettings;
pub use state::{InlineEditKind, InlineEditState};
pub use title::TitleError;
pub use view::EditableTreeView;
