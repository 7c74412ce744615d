//! Use-case handlers.

mod get_handbook_overview;
mod request_suggestions;

pub use get_handbook_overview::GetHandbookOverviewHandler;
pub use request_suggestions::{
    RequestSuggestionsCommand, RequestSuggestionsHandler, SuggestionError,
};
