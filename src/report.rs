//! Human-readable rendering of a verdict
//!
//! Every line carries a status glyph: `❌` for failures, `✅` for the
//! success line, `🔍`/`📁`/`💡` for informational lines. The caller decides
//! where the lines go; the binary prints them to stdout.

use crate::checker::{Inconsistency, Verdict};
use crate::extractor::types::join_labels;

const HEADER: &str = "🔍 Checking version consistency across project files...";

/// Render a verdict as the ordered list of status lines
pub fn render(verdict: &Verdict) -> Vec<String> {
    let mut lines = vec![HEADER.to_string()];

    for diagnostic in &verdict.diagnostics {
        lines.push(format!("❌ {diagnostic}"));
    }

    match &verdict.outcome {
        Ok(consistent) => {
            lines.push(format!(
                "✅ All versions are consistent: {}",
                consistent.version
            ));
            lines.push(format!("📁 Found in: {}", join_labels(&consistent.sources)));
        }
        Err(Inconsistency::Mismatch(pairs)) => {
            lines.push("❌ Version mismatch detected:".to_string());
            for (kind, version) in pairs {
                lines.push(format!("   {}: {}", kind.label(), version));
            }
            lines.push("💡 Please ensure all version numbers are consistent".to_string());
        }
        Err(Inconsistency::InvalidFormat(version)) => {
            lines.push(format!("❌ Invalid version format: {version}"));
            lines.push(
                "💡 Version should follow semantic versioning (e.g., 1.0.0, 1.0.0-alpha.1)"
                    .to_string(),
            );
        }
        Err(other) => {
            lines.push(format!("❌ {other}"));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::Consistent;
    use crate::extractor::ArtifactKind;

    #[test]
    fn success_lists_version_and_sources() {
        let verdict = Verdict {
            diagnostics: Vec::new(),
            outcome: Ok(Consistent {
                version: "1.2.3".to_string(),
                sources: vec![ArtifactKind::PackageInit, ArtifactKind::BuildManifest],
            }),
        };
        assert_eq!(
            render(&verdict),
            vec![
                "🔍 Checking version consistency across project files...",
                "✅ All versions are consistent: 1.2.3",
                "📁 Found in: __init__.py, pyproject.toml",
            ]
        );
    }

    #[test]
    fn mismatch_lists_every_contributing_pair() {
        let verdict = Verdict {
            diagnostics: Vec::new(),
            outcome: Err(Inconsistency::Mismatch(vec![
                (ArtifactKind::PackageInit, "1.2.3".to_string()),
                (ArtifactKind::BuildManifest, "1.2.4".to_string()),
            ])),
        };
        assert_eq!(
            render(&verdict),
            vec![
                "🔍 Checking version consistency across project files...",
                "❌ Version mismatch detected:",
                "   __init__.py: 1.2.3",
                "   pyproject.toml: 1.2.4",
                "💡 Please ensure all version numbers are consistent",
            ]
        );
    }

    #[test]
    fn invalid_format_includes_hint() {
        let verdict = Verdict {
            diagnostics: Vec::new(),
            outcome: Err(Inconsistency::InvalidFormat("1.2".to_string())),
        };
        assert_eq!(
            render(&verdict),
            vec![
                "🔍 Checking version consistency across project files...",
                "❌ Invalid version format: 1.2",
                "💡 Version should follow semantic versioning (e.g., 1.0.0, 1.0.0-alpha.1)",
            ]
        );
    }

    #[test]
    fn missing_mandatory_names_the_files() {
        let verdict = Verdict {
            diagnostics: vec!["pyproject.toml not found".to_string()],
            outcome: Err(Inconsistency::MissingMandatory(vec![
                ArtifactKind::BuildManifest,
            ])),
        };
        assert_eq!(
            render(&verdict),
            vec![
                "🔍 Checking version consistency across project files...",
                "❌ pyproject.toml not found",
                "❌ Version missing from required files: pyproject.toml",
            ]
        );
    }

    #[test]
    fn no_version_found_anywhere() {
        let verdict = Verdict {
            diagnostics: vec![
                "ai_data_collector/__init__.py not found".to_string(),
                "pyproject.toml not found".to_string(),
            ],
            outcome: Err(Inconsistency::NoVersionFound),
        };
        assert_eq!(
            render(&verdict),
            vec![
                "🔍 Checking version consistency across project files...",
                "❌ ai_data_collector/__init__.py not found",
                "❌ pyproject.toml not found",
                "❌ No version information found in any file",
            ]
        );
    }
}
