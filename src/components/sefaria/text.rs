use super::models::{ResolvedReference, TextResponse};
use super::SefariaClient;
use crate::error::{from_reqwest, text_fetch_error, DigestResult};
use crate::utils::text::clean_text;
use tracing::{debug, info};
use url::Url;

impl SefariaClient {
    /// Build the texts URL for a reference, asking for the English version
    pub fn text_url(&self, reference: &ResolvedReference) -> DigestResult<Url> {
        let mut url = Url::parse(&self.config.texts_url)
            .map_err(|e| text_fetch_error(&format!("Failed to parse URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| text_fetch_error("Texts URL cannot take a path"))?
            .pop_if_empty()
            .push(&reference.to_string());
        url.query_pairs_mut().append_pair("version", "english");

        Ok(url)
    }

    /// Fetch and clean the text behind a resolved reference
    pub async fn fetch_text(&self, reference: &ResolvedReference) -> DigestResult<String> {
        let url = self.text_url(reference)?;
        debug!("Fetching text from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| {
                let context = format!("Error fetching text for {}", reference);
                from_reqwest(&context, e, text_fetch_error)
            })?;

        if !response.status().is_success() {
            return Err(text_fetch_error(&format!(
                "Error fetching text for {}: HTTP {}",
                reference,
                response.status().as_u16()
            )));
        }

        let data: TextResponse = response
            .json()
            .await
            .map_err(|e| from_reqwest("Failed to parse text response", e, text_fetch_error))?;

        debug!("Text response for '{}': {:?}", reference, data);

        let cleaned = clean_text(data.first_version_fragments());
        info!("Fetched {} characters for '{}'", cleaned.len(), reference);
        Ok(cleaned)
    }
}
