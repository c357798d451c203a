mod calendar;
pub mod models;
mod text;

pub use calendar::{find_reference, select_reference};
pub use models::{CalendarItem, ContentCategory, ResolvedReference};

use crate::config::Config;
use crate::error::DigestResult;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;

/// Client for the Sefaria calendar and texts APIs
#[derive(Clone)]
pub struct SefariaClient {
    config: Arc<Config>,
    client: Client,
}

impl SefariaClient {
    /// Create a client; `client` should already carry the request timeout
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl super::StudyTextSource for SefariaClient {
    async fn fetch_category_text(&self, category: ContentCategory) -> DigestResult<String> {
        let reference = self.resolve(category).await?;
        self.fetch_text(&reference).await
    }
}
