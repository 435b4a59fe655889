//! Where the latest release tag comes from

use super::VersionCheckError;
use serde::Deserialize;

#[cfg(feature = "network")]
use std::time::Duration;

/// Tag listing of the pytr repository
pub const TAGS_URL: &str = "https://api.github.com/repos/pytr-org/pytr/tags";

/// Upper bound on the whole tag request
#[cfg(feature = "network")]
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(1);

/// A source of the most recent release tag
pub trait TagSource {
    fn latest_tag(&self) -> Result<String, VersionCheckError>;
}

impl<F> TagSource for F
where
    F: Fn() -> Result<String, VersionCheckError>,
{
    fn latest_tag(&self) -> Result<String, VersionCheckError> {
        self()
    }
}

#[derive(Debug, Deserialize)]
struct Tag {
    name: String,
}

/// Decode a tag listing body and take its first entry.
///
/// The listing is trusted to be newest first; tags are neither sorted nor
/// filtered for pre-releases.
pub fn first_tag(body: &str, url: &str) -> Result<String, VersionCheckError> {
    let tags: Vec<Tag> =
        serde_json::from_str(body).map_err(|e| VersionCheckError::decode(url, e.to_string()))?;
    tags.into_iter()
        .next()
        .map(|tag| tag.name)
        .ok_or_else(|| VersionCheckError::NoTags {
            url: url.to_string(),
        })
}

/// Fetches the tag listing over HTTPS, one attempt per call
#[cfg(feature = "network")]
pub struct GithubTags {
    url: String,
    agent: ureq::Agent,
}

#[cfg(feature = "network")]
impl GithubTags {
    pub fn new() -> Self {
        Self::with_url(TAGS_URL)
    }

    /// Query a different tag listing, e.g. a mirror or a local test server
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(feature = "network")]
impl Default for GithubTags {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "network")]
impl TagSource for GithubTags {
    fn latest_tag(&self) -> Result<String, VersionCheckError> {
        let response = self
            .agent
            .get(&self.url)
            .set("Accept", "application/vnd.github+json")
            .call()
            .map_err(|e| VersionCheckError::request(&self.url, e.to_string()))?;
        let body = response
            .into_string()
            .map_err(|e| VersionCheckError::request(&self.url, e.to_string()))?;
        first_tag(&body, &self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tag_takes_first_entry() {
        let body = r#"[{"name": "v0.29.1", "commit": {}}, {"name": "v0.29.0"}]"#;
        assert_eq!(first_tag(body, TAGS_URL).unwrap(), "v0.29.1");
    }

    #[test]
    fn test_first_tag_empty_listing() {
        let err = first_tag("[]", TAGS_URL).unwrap_err();
        assert!(matches!(err, VersionCheckError::NoTags { .. }));
    }

    #[test]
    fn test_first_tag_malformed_body() {
        let err = first_tag(r#"{"message": "API rate limit exceeded"}"#, TAGS_URL).unwrap_err();
        assert!(matches!(err, VersionCheckError::Decode { .. }));
        assert!(err.to_string().contains(TAGS_URL));
    }

    #[test]
    fn test_closure_source() {
        let source = || Ok::<_, VersionCheckError>("1.2.3".to_string());
        assert_eq!(source.latest_tag().unwrap(), "1.2.3");
    }
}
