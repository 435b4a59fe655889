//! Release version check
//!
//! Compares the running version against the newest tag of the pytr
//! repository and logs the outcome. The check is best effort: any failure is
//! logged and swallowed so it can never abort the caller.

pub mod source;

pub use source::{first_tag, TagSource, TAGS_URL};

#[cfg(feature = "network")]
pub use source::{GithubTags, REQUEST_TIMEOUT};

use crate::factory::LoggerFactory;
use crate::{debug, error, info, warning};
use semver::Version;

/// Logger used for the outcome of the check
pub const LOGGER_NAME: &str = "pytr.utils";

#[derive(Debug, thiserror::Error)]
pub enum VersionCheckError {
    /// Transport failure: DNS, connect, timeout, non-success status
    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// Body was not a tag listing
    #[error("Unexpected response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("No tags listed at {url}")]
    NoTags { url: String },

    #[error("Invalid version '{version}': {source}")]
    InvalidVersion {
        version: String,
        #[source]
        source: semver::Error,
    },
}

impl VersionCheckError {
    pub fn request(url: impl Into<String>, message: impl Into<String>) -> Self {
        VersionCheckError::Request {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn decode(url: impl Into<String>, message: impl Into<String>) -> Self {
        VersionCheckError::Decode {
            url: url.into(),
            message: message.into(),
        }
    }
}

/// Outcome of comparing the installed version with the latest tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionStatus {
    UpToDate,
    Outdated { installed: String, latest: String },
}

impl VersionStatus {
    pub fn is_outdated(&self) -> bool {
        matches!(self, VersionStatus::Outdated { .. })
    }
}

/// Parse a release identifier with semantic-version precedence.
///
/// A leading `v` is dropped and missing minor/patch numbers count as zero,
/// so `v3.1` parses as `3.1.0`. Pre-release tails spelled `a1`, `b2` or
/// `rc1` become `-alpha.1`, `-beta.2` and `-rc.1`.
pub fn parse_version(raw: &str) -> Result<Version, VersionCheckError> {
    let trimmed = raw.trim();
    let bare = trimmed
        .strip_prefix(|c: char| c == 'v' || c == 'V')
        .unwrap_or(trimmed);
    let split = bare
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(bare.len());
    let (release, suffix) = bare.split_at(split);
    let release = release.trim_end_matches('.');

    let mut normalized = release.to_string();
    for _ in release.split('.').count()..3 {
        normalized.push_str(".0");
    }
    normalized.push_str(&pre_release(suffix));

    Version::parse(&normalized).map_err(|source| VersionCheckError::InvalidVersion {
        version: raw.to_string(),
        source,
    })
}

/// Rewrite a pre-release tail such as `rc1`, `.b2` or `-alpha3` in semver
/// spelling. Anything else is returned unchanged.
fn pre_release(suffix: &str) -> String {
    let is_separator = |c: char| c == '.' || c == '-' || c == '_';
    let tail = suffix.trim_start_matches(is_separator);
    let digits_at = tail
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(tail.len());
    let (tag, number) = tail.split_at(digits_at);

    let label = match tag.trim_end_matches(is_separator).to_ascii_lowercase().as_str() {
        "a" | "alpha" => "alpha",
        "b" | "beta" => "beta",
        "c" | "rc" | "pre" | "preview" => "rc",
        _ => return suffix.to_string(),
    };
    let number = if number.is_empty() {
        0
    } else {
        match number.parse::<u64>() {
            Ok(n) => n,
            Err(_) => return suffix.to_string(),
        }
    };
    format!("-{}.{}", label, number)
}

pub fn compare_versions(installed: &str, latest: &str) -> Result<VersionStatus, VersionCheckError> {
    if parse_version(installed)? < parse_version(latest)? {
        Ok(VersionStatus::Outdated {
            installed: installed.to_string(),
            latest: latest.to_string(),
        })
    } else {
        Ok(VersionStatus::UpToDate)
    }
}

pub struct VersionChecker<'a, S> {
    factory: &'a LoggerFactory,
    source: S,
}

impl<'a, S: TagSource> VersionChecker<'a, S> {
    pub fn new(factory: &'a LoggerFactory, source: S) -> Self {
        Self { factory, source }
    }

    /// Run the check once and log the outcome.
    ///
    /// Returns `None` when the latest tag could not be fetched or either
    /// version could not be parsed; that case logs one error line followed by
    /// the detail at debug level.
    pub fn check(&self, installed_version: &str) -> Option<VersionStatus> {
        let log = self.factory.logger(LOGGER_NAME);

        let outcome = self
            .source
            .latest_tag()
            .and_then(|latest| compare_versions(installed_version, &latest));

        match &outcome {
            Ok(VersionStatus::Outdated { installed, latest }) => {
                warning!(
                    log,
                    "Installed pytr version ({}) is outdated. Latest version is {}",
                    installed,
                    latest
                );
            }
            Ok(VersionStatus::UpToDate) => info!(log, "pytr is up to date"),
            Err(e) => {
                error!(log, "Could not check for a newer version");
                debug!(log, "{}", e);
                return None;
            }
        }
        outcome.ok()
    }
}
