//! Version coercion - single concrete versions only
//!
//! depot does not solve semver ranges. Any specifier is coerced to the first
//! concrete version embedded in it (`^1.2.3` -> `1.2.3`, `~2.0` -> `2.0.0`),
//! and pre-release/build metadata is discarded. `latest` is left for the
//! registry to resolve as a dist-tag.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Raised when no concrete version can be coerced out of a range.
#[derive(Error, Debug)]
#[error("no usable version in range '{0}'")]
pub struct CoercionError(pub String);

/// Registry dist-tag used when no concrete version is requested.
pub const LATEST_TAG: &str = "latest";

fn version_token() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| {
        Regex::new(r"(\d+)(?:\.(\d+))?(?:\.(\d+))?").expect("version token regex is valid")
    })
}

/// Coerce a loose range to a concrete `major.minor.patch` string.
///
/// Takes the first digit-run shaped like a version anywhere in the input and
/// zero-fills missing components. Returns `None` when the input contains no
/// digits at all.
pub fn coerce(range: &str) -> Option<String> {
    let caps = version_token().captures(range)?;

    let part = |i: usize| -> Option<u64> {
        match caps.get(i) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };

    let version = semver::Version::new(part(1)?, part(2)?, part(3)?);
    Some(version.to_string())
}

/// Resolve a requested range to the version string used in the package key.
///
/// `None`, `latest`, `*`, and the empty string resolve to the `latest` tag,
/// which the registry resolves server-side. Anything else must coerce.
pub fn resolve_version(range: Option<&str>) -> Result<String, CoercionError> {
    match range {
        None => Ok(LATEST_TAG.to_string()),
        Some(range) if range.is_empty() || range == LATEST_TAG || range == "*" => {
            Ok(LATEST_TAG.to_string())
        }
        Some(range) => coerce(range).ok_or_else(|| CoercionError(range.to_string())),
    }
}
