//! Semantic-versioning grammar gate
//!
//! Accepts `MAJOR.MINOR.PATCH` with optional `-prerelease` and
//! `+buildmetadata` suffixes, e.g. `1.0.0`, `2.3.4-alpha.1`,
//! `1.0.0-rc.1+exp.sha.abc`. The whole string must match; a `v` prefix,
//! surrounding whitespace, or fewer than three components are rejected.
//! Versions are never compared or ordered here, only shape-checked.

use regex::Regex;

/// Validates version strings against the semantic-versioning grammar
pub struct SemverValidator {
    semver_re: Regex,
}

impl SemverValidator {
    pub fn new() -> Self {
        Self {
            semver_re: Regex::new(
                r"^\d+\.\d+\.\d+(?:-[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?(?:\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?$",
            )
            .unwrap(),
        }
    }

    pub fn is_valid(&self, version: &str) -> bool {
        self.semver_re.is_match(version)
    }
}

impl Default for SemverValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.0.0", true)]
    #[case("0.0.1", true)]
    #[case("10.20.30", true)]
    #[case("2.3.4-alpha.1", true)]
    #[case("1.0.0+build.5", true)]
    #[case("1.0.0-rc.1+exp.sha.abc", true)]
    #[case("1.0.0-0.3.7", true)]
    #[case("1.0", false)] // two components
    #[case("1", false)]
    #[case("v1.0.0", false)] // prefix
    #[case("1.0.0 ", false)] // trailing whitespace
    #[case(" 1.0.0", false)]
    #[case("1.0.0-", false)] // empty pre-release
    #[case("1.0.0+", false)] // empty build metadata
    #[case("1.0.0-rc.", false)]
    #[case("1.0.0.0", false)] // four components
    #[case("1.a.0", false)]
    #[case("", false)]
    fn is_valid_cases(#[case] version: &str, #[case] expected: bool) {
        let validator = SemverValidator::new();
        assert_eq!(validator.is_valid(version), expected, "{version:?}");
    }
}
