use super::{FetchRequest, SiteAdapter};
use crate::site_types::FurAffinitySubmission;
use crate::{Preview, RelayError, SiteId};
use tracing::debug;

const API_BASE: &str = "https://bawk.space/fapi";

#[derive(Debug, Clone)]
pub struct FurAffinityAdapter {
    api_base: String,
}

impl Default for FurAffinityAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl FurAffinityAdapter {
    pub fn new() -> Self {
        Self::with_api_base(API_BASE)
    }

    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }
}

impl SiteAdapter for FurAffinityAdapter {
    fn site(&self) -> SiteId {
        SiteId::FurAffinity
    }

    fn build_request(&self, site_id: &str) -> FetchRequest {
        FetchRequest::get(format!("{}/submission/{}", self.api_base, site_id))
    }

    fn parse_response(&self, raw: &[u8]) -> Result<Preview, RelayError> {
        let submission: FurAffinitySubmission = serde_json::from_slice(raw)
            .map_err(|e| RelayError::malformed(self.site(), e.to_string()))?;

        debug!(title = %submission.title, "Parsed FurAffinity submission");

        Ok(Preview {
            title: submission.title,
            image_url: submission.image_url,
            has_author: self.shows_author(),
            author_name: Some(submission.author),
            author_icon_url: Some(submission.avatar),
        })
    }
}
