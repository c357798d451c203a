use crate::error::DigestResult;
use async_trait::async_trait;

// Export components
pub mod deepseek;
pub mod sefaria;

pub use deepseek::ChatCompletionClient;
pub use sefaria::{ContentCategory, SefariaClient};

/// Source of today's cleaned study text for a category
#[async_trait]
pub trait StudyTextSource: Send + Sync {
    /// Resolve the category in the calendar and fetch its cleaned text
    async fn fetch_category_text(&self, category: ContentCategory) -> DigestResult<String>;
}

/// Turns cleaned text into a short social-media summary
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize `text`; `label` only appears in the prompt and in errors
    async fn summarize(&self, text: &str, label: &str) -> DigestResult<String>;
}
