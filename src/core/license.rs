//! License audit against the approved allow-list

/// SPDX identifiers approved for use.
pub const ALLOWED_LICENSES: &[&str] = &[
    "MIT",
    "ISC",
    "Apache-2.0",
    "BSD-2-Clause",
    "BSD-3-Clause",
    "0BSD",
    "Unlicense",
    "CC0-1.0",
];

/// Classify a package's declared license.
///
/// Returns a warning line for a missing or non-approved license, `None` when
/// the license is on the allow-list. The wording distinguishes the two cases:
/// an absent license is reported as `Unknown`.
pub fn audit(key: &str, license: Option<&str>) -> Option<String> {
    match license {
        None => Some(format!("{key}: license Unknown (none declared)")),
        Some(license) if ALLOWED_LICENSES.contains(&license) => None,
        Some(license) => Some(format!("{key}: license '{license}' is not approved")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_license_passes() {
        assert_eq!(audit("lodash@4.17.21", Some("MIT")), None);
        assert_eq!(audit("rimraf@3.0.2", Some("ISC")), None);
    }

    #[test]
    fn test_missing_license_warns_unknown() {
        let warning = audit("leftpad@0.0.1", None).unwrap();
        assert!(warning.contains("leftpad@0.0.1"));
        assert!(warning.contains("Unknown"));
    }

    #[test]
    fn test_disallowed_license_warns_with_name() {
        let warning = audit("gpl-thing@1.0.0", Some("GPL-3.0")).unwrap();
        assert!(warning.contains("GPL-3.0"));
        assert!(!warning.contains("Unknown"));
    }

    #[test]
    fn test_case_sensitive_match() {
        // SPDX identifiers are exact; "mit" is not an approved spelling.
        assert!(audit("pkg@1.0.0", Some("mit")).is_some());
    }
}
