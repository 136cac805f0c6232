//! Package specifier parsing
//!
//! Supports:
//! - Latest: `lodash` or `lodash@latest`
//! - Pinned: `lodash@4.17.21`
//! - Scoped: `@babel/core` or `@babel/core@7.24.0`

use thiserror::Error;

/// Errors raised while parsing a package specifier.
#[derive(Error, Debug)]
pub enum SpecError {
    #[error("invalid package specifier '{0}': missing package name")]
    MissingName(String),

    #[error("invalid package specifier '{0}': missing version after @")]
    MissingVersion(String),
}

/// Parsed package specifier with optional version range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    /// Package name; scoped names keep their leading `@scope/` segment.
    pub name: String,
    /// Requested range, `None` when the latest version is wanted.
    pub range: Option<String>,
}

impl PackageSpec {
    /// Parse a specifier like `lodash`, `lodash@4.17.21`, or `@babel/core@7.24.0`.
    pub fn parse(spec: &str) -> Result<Self, SpecError> {
        // The '@' of a scope prefix is not a version separator.
        let (scope, rest) = match spec.strip_prefix('@') {
            Some(rest) => ("@", rest),
            None => ("", spec),
        };

        if let Some((name, range)) = rest.split_once('@') {
            if name.is_empty() {
                return Err(SpecError::MissingName(spec.to_string()));
            }
            if range.is_empty() {
                return Err(SpecError::MissingVersion(spec.to_string()));
            }

            // Treat "latest" as no range (get latest)
            let range = if range == "latest" {
                None
            } else {
                Some(range.to_string())
            };

            Ok(Self {
                name: format!("{scope}{name}"),
                range,
            })
        } else {
            if rest.is_empty() {
                return Err(SpecError::MissingName(spec.to_string()));
            }
            Ok(Self {
                name: format!("{scope}{rest}"),
                range: None,
            })
        }
    }

    /// Get the requested range for display.
    pub fn range(&self) -> Option<&str> {
        self.range.as_deref()
    }
}

impl std::fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.range {
            Some(range) => write!(f, "{}@{}", self.name, range),
            None => write!(f, "{}", self.name),
        }
    }
}
