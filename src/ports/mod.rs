//! Ports - interfaces between the application core and the outside world.

mod handbook_analyzer;
mod handbook_storage;
mod suggestion_provider;

pub use handbook_analyzer::{ExtractError, HandbookAnalyzer};
pub use handbook_storage::{HandbookStorage, StorageError};
pub use suggestion_provider::{
    DocumentAttachment, FinishReason, ProviderError, ProviderInfo, SuggestionProvider,
    SuggestionRequest, SuggestionResponse, TokenUsage, PDF_MIME_TYPE,
};
