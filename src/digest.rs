//! The `/summarize` pipeline: fetch every category, then summarize every category.
//!
//! All fetches finish before the first summarization starts, so an upstream text
//! failure never costs a completion call. The first failure of either phase ends
//! the run.

use crate::components::{ContentCategory, StudyTextSource, Summarizer};
use crate::error::Error;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error as ThisError;
use tracing::info;

/// Aggregated summaries, one per category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DigestResponse {
    pub tanya_summary: String,
    pub rambam_summary: String,
    pub daf_yomi_summary: String,
    pub halakhah_yomit_summary: String,
}

impl DigestResponse {
    fn set(&mut self, category: ContentCategory, summary: String) {
        let slot = match category {
            ContentCategory::Tanya => &mut self.tanya_summary,
            ContentCategory::Rambam => &mut self.rambam_summary,
            ContentCategory::DafYomi => &mut self.daf_yomi_summary,
            ContentCategory::HalakhahYomit => &mut self.halakhah_yomit_summary,
        };
        *slot = summary;
    }
}

/// Which stage failed, for which category
#[derive(Debug, ThisError)]
pub enum DigestFailure {
    #[error("{}: {}", .category.label(), .source)]
    Fetch {
        category: ContentCategory,
        source: Error,
    },
    #[error("{} summary: {}", .category.label(), .source)]
    Summary {
        category: ContentCategory,
        source: Error,
    },
}

impl DigestFailure {
    pub fn category(&self) -> ContentCategory {
        match self {
            DigestFailure::Fetch { category, .. } | DigestFailure::Summary { category, .. } => {
                *category
            }
        }
    }

    pub fn source_error(&self) -> &Error {
        match self {
            DigestFailure::Fetch { source, .. } | DigestFailure::Summary { source, .. } => source,
        }
    }
}

/// Runs the digest against a text source and a summarizer
#[derive(Clone)]
pub struct DigestService {
    source: Arc<dyn StudyTextSource>,
    summarizer: Arc<dyn Summarizer>,
}

impl DigestService {
    pub fn new(source: Arc<dyn StudyTextSource>, summarizer: Arc<dyn Summarizer>) -> Self {
        Self { source, summarizer }
    }

    pub async fn run(&self) -> Result<DigestResponse, DigestFailure> {
        let mut texts = Vec::with_capacity(ContentCategory::ALL.len());
        for category in ContentCategory::ALL {
            info!("Fetching {}", category);
            let text = self
                .source
                .fetch_category_text(category)
                .await
                .map_err(|source| DigestFailure::Fetch { category, source })?;
            texts.push((category, text));
        }

        let mut response = DigestResponse::default();
        for (category, text) in texts {
            info!("Summarizing {}", category);
            let summary = self
                .summarizer
                .summarize(&text, category.label())
                .await
                .map_err(|source| DigestFailure::Summary { category, source })?;
            response.set(category, summary);
        }

        Ok(response)
    }
}
