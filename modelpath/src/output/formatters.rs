//! Output formatter implementations.

use serde_json::{json, Value};

use crate::{Error, Result};

use super::{OutputFormatter, Report};

/// Stable machine-readable name for an error.
fn error_kind(error: &Error) -> &'static str {
    match error {
        Error::InvalidExtension { .. } => "invalid_extension",
        Error::NotFound(_) => "not_found",
        Error::PermissionDenied { .. } => "permission_denied",
        Error::InvalidPath { .. } => "invalid_path",
        Error::TargetExists { .. } => "target_exists",
        Error::CopyVerification { .. } => "copy_verification",
        Error::Validation { .. } => "validation",
        Error::Configuration(_) => "configuration",
        Error::Io(_) => "io",
    }
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| Error::Validation {
        field: "json_output".to_string(),
        message: format!("failed to serialize to JSON: {e}"),
    })
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report<'_>) -> Result<String> {
        let value = match report {
            Report::Resolved(resolved) => to_value(resolved)?,
            Report::Suggestions {
                requested,
                suggestions,
            } => json!({
                "requested": requested,
                "suggestions": to_value(suggestions)?,
            }),
            Report::Files(files) => json!({ "files": to_value(files)? }),
            Report::Roots(roots) => json!({ "roots": to_value(roots)? }),
            Report::Copy(copy) => to_value(copy)?,
            Report::Failure(error) => {
                let mut body = json!({
                    "error": error_kind(error),
                    "message": error.to_string(),
                });
                if let Error::NotFound(report) = error {
                    body["searched"] = to_value(&report.searched)?;
                    body["suggestions"] = to_value(&report.suggestions)?;
                }
                if let Error::InvalidExtension {
                    extension, allowed, ..
                } = error
                {
                    body["extension"] = json!(extension);
                    body["allowed"] = json!(allowed);
                }
                body
            }
        };

        serde_json::to_string_pretty(&value).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

/// Formatter for human-readable output.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, report: &Report<'_>) -> Result<String> {
        let text = match report {
            Report::Resolved(resolved) => resolved.path().display().to_string(),
            Report::Suggestions {
                requested,
                suggestions,
            } => {
                if suggestions.is_empty() {
                    format!("No files resemble {requested}.")
                } else {
                    suggestions
                        .iter()
                        .map(|s| format!("{:.2}  {}", s.score(), s.path().display()))
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            Report::Files(files) => {
                if files.is_empty() {
                    "No matching files.".to_string()
                } else {
                    files
                        .iter()
                        .map(|f| f.display().to_string())
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            Report::Roots(roots) => roots
                .iter()
                .map(|r| {
                    let marker = if r.exists { "" } else { "  (absent)" };
                    format!("{}: {}{marker}", r.label, r.path.display())
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Report::Copy(copy) => format!(
                "Copied {} -> {} ({} bytes in {:.3}s)",
                copy.source.display(),
                copy.target.display(),
                copy.size_bytes,
                copy.elapsed_seconds
            ),
            Report::Failure(error) => format!("Error: {error}"),
        };
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotFoundReport;
    use crate::output::RootStatus;
    use crate::path::{CandidateRoot, ResolutionOrigin, ResolvedPath, RootLabel, Suggestion};
    use std::path::PathBuf;

    fn not_found() -> Error {
        Error::not_found(NotFoundReport {
            description: "OSM file".to_string(),
            requested: "offic.osm".to_string(),
            searched: vec![CandidateRoot::new(
                RootLabel::Workspace,
                PathBuf::from("/ws"),
            )],
            suggestions: vec![Suggestion::new(PathBuf::from("/ws/office.osm"), 0.95)],
        })
    }

    #[test]
    fn test_json_resolved() {
        let resolved = ResolvedPath::new(
            PathBuf::from("/ws/a.osm"),
            "a.osm",
            ResolutionOrigin::Root(RootLabel::Workspace),
        );
        let out = JsonFormatter.format(&Report::Resolved(&resolved)).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["path"], "/ws/a.osm");
        assert_eq!(value["requested"], "a.osm");
        assert_eq!(value["origin"]["root"], "workspace");
    }

    #[test]
    fn test_json_not_found() {
        let err = not_found();
        let out = JsonFormatter.format(&Report::Failure(&err)).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["error"], "not_found");
        assert_eq!(value["searched"][0]["label"], "workspace");
        assert_eq!(value["suggestions"][0]["path"], "/ws/office.osm");
    }

    #[test]
    fn test_json_invalid_extension() {
        let err = Error::InvalidExtension {
            path: PathBuf::from("model.txt"),
            extension: ".txt".to_string(),
            allowed: vec![".osm".to_string()],
        };
        let out = JsonFormatter.format(&Report::Failure(&err)).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["error"], "invalid_extension");
        assert_eq!(value["extension"], ".txt");
        assert_eq!(value["allowed"][0], ".osm");
    }

    #[test]
    fn test_human_suggestions() {
        let suggestions = vec![Suggestion::new(PathBuf::from("/ws/office.osm"), 0.9)];
        let out = HumanFormatter
            .format(&Report::Suggestions {
                requested: "offic.osm",
                suggestions: &suggestions,
            })
            .unwrap();
        assert_eq!(out, "0.90  /ws/office.osm");

        let out = HumanFormatter
            .format(&Report::Suggestions {
                requested: "zzz",
                suggestions: &[],
            })
            .unwrap();
        assert_eq!(out, "No files resemble zzz.");
    }

    #[test]
    fn test_human_roots_marks_absent() {
        let roots = vec![
            RootStatus {
                label: RootLabel::Uploads,
                path: PathBuf::from("/up"),
                exists: false,
            },
            RootStatus {
                label: RootLabel::Workspace,
                path: PathBuf::from("/ws"),
                exists: true,
            },
        ];
        let out = HumanFormatter.format(&Report::Roots(&roots)).unwrap();
        assert_eq!(out, "user uploads: /up  (absent)\nworkspace root: /ws");
    }

    #[test]
    fn test_human_failure_includes_hint() {
        let err = not_found();
        let out = HumanFormatter.format(&Report::Failure(&err)).unwrap();
        assert!(out.starts_with("Error: OSM file not found: offic.osm"));
        assert!(out.contains("/ws/office.osm"));
    }
}
