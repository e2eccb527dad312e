use super::{FetchRequest, SiteAdapter};
use crate::site_types::WeasylSubmission;
use crate::{Preview, RelayError, SiteId};
use tracing::debug;

const API_BASE: &str = "https://www.weasyl.com/api";
const API_KEY_HEADER: &str = "X-Weasyl-API-Key";

#[derive(Clone)]
pub struct WeasylAdapter {
    api_base: String,
    api_key: String,
}

impl std::fmt::Debug for WeasylAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeasylAdapter")
            .field("api_base", &self.api_base)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl WeasylAdapter {
    pub fn new(api_key: &str) -> Result<Self, RelayError> {
        Self::with_api_base(API_BASE, api_key)
    }

    pub fn with_api_base(api_base: impl Into<String>, api_key: &str) -> Result<Self, RelayError> {
        if api_key.trim().is_empty() {
            return Err(RelayError::Config("weasyl_api_key must not be empty".into()));
        }
        Ok(Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }
}

impl SiteAdapter for WeasylAdapter {
    fn site(&self) -> SiteId {
        SiteId::Weasyl
    }

    fn build_request(&self, site_id: &str) -> FetchRequest {
        FetchRequest::get(format!("{}/submissions/{}/view", self.api_base, site_id))
            .with_header(API_KEY_HEADER, self.api_key.as_str())
    }

    fn parse_response(&self, raw: &[u8]) -> Result<Preview, RelayError> {
        let submission: WeasylSubmission = serde_json::from_slice(raw)
            .map_err(|e| RelayError::malformed(self.site(), e.to_string()))?;

        let image_url = submission
            .media
            .submission
            .into_iter()
            .next()
            .and_then(|media| media.links.cover.into_iter().next())
            .map(|link| link.url)
            .ok_or_else(|| RelayError::malformed(self.site(), "submission has no cover image"))?;

        let author_icon_url = submission
            .owner_media
            .avatar
            .into_iter()
            .next()
            .map(|link| link.url)
            .ok_or_else(|| RelayError::malformed(self.site(), "owner has no avatar"))?;

        debug!(title = %submission.title, "Parsed Weasyl submission");

        Ok(Preview {
            title: submission.title,
            image_url,
            has_author: self.shows_author(),
            author_name: Some(submission.owner),
            author_icon_url: Some(author_icon_url),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "submitid": 1234,
        "title": "Sunset",
        "owner": "alice",
        "owner_login": "alice",
        "owner_media": {
            "avatar": [{"mediaid": 1, "url": "https://cdn.weasyl.com/avatar.png"}]
        },
        "media": {
            "submission": [{
                "mediaid": 2,
                "url": "https://cdn.weasyl.com/full.png",
                "links": {
                    "cover": [{"mediaid": 3, "url": "https://cdn.weasyl.com/cover.png"}]
                }
            }],
            "thumbnail": [{"mediaid": 4, "url": "https://cdn.weasyl.com/thumb.png"}]
        }
    }"#;

    fn adapter() -> WeasylAdapter {
        WeasylAdapter::new("secret-key").unwrap()
    }

    #[test]
    fn test_build_request_carries_api_key() {
        let request = adapter().build_request("1234");
        assert_eq!(request.url, "https://www.weasyl.com/api/submissions/1234/view");
        assert_eq!(
            request.headers,
            vec![("X-Weasyl-API-Key".to_string(), "secret-key".to_string())]
        );
    }

    #[test]
    fn test_parse_nested_payload() {
        let preview = adapter().parse_response(SAMPLE.as_bytes()).unwrap();
        assert_eq!(preview.title, "Sunset");
        assert_eq!(preview.image_url, "https://cdn.weasyl.com/cover.png");
        assert!(preview.has_author);
        assert_eq!(preview.author_name.as_deref(), Some("alice"));
        assert_eq!(
            preview.author_icon_url.as_deref(),
            Some("https://cdn.weasyl.com/avatar.png")
        );
    }

    #[test]
    fn test_empty_cover_list() {
        let raw = SAMPLE.replace(
            r#"[{"mediaid": 3, "url": "https://cdn.weasyl.com/cover.png"}]"#,
            "[]",
        );
        let err = adapter().parse_response(raw.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("cover image"));
    }

    #[test]
    fn test_missing_owner() {
        let raw = SAMPLE.replace(r#""owner": "alice","#, "");
        assert!(matches!(
            adapter().parse_response(raw.as_bytes()),
            Err(RelayError::MalformedMetadata { site: SiteId::Weasyl, .. })
        ));
    }

    #[test]
    fn test_debug_redacts_key() {
        assert!(!format!("{:?}", adapter()).contains("secret-key"));
    }
}
