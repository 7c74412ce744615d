//! HTTP adapter - routes, handlers and DTOs for the form and the JSON API.

mod dto;
mod handlers;
mod page;
mod routes;

pub use dto::{ErrorResponse, HandbookOverviewResponse, SuggestionRequestBody, SuggestionResponseBody};
pub use handlers::{AdvisorAppState, ApiError, HandbookInfo};
pub use routes::advisor_routes;
