//! Search widget module
//!
//! The live product search: debounced input handling, the suggestions
//! panel, keyboard/mouse highlight state and the mapping of a selection
//! onto a navigation target.

mod debouncer;
pub mod elements;
pub mod escape;
pub mod markup;
mod panel;
mod query;
mod record;
pub mod search_events;
pub mod search_render;
mod search_state;
mod selection;

pub use debouncer::Debouncer;
pub use elements::PageElements;
pub use panel::{EntryAction, EntryBindings, Panel, SuggestionEntry};
pub use query::SearchText;
pub use record::SuggestionRecord;
pub use search_events::{KeyOutcome, WidgetKey};
pub use search_state::{FetchRequest, FetchResponse, SearchWidget, WidgetSettings};
pub use selection::SelectionState;
