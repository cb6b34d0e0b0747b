use crate::domain::model::{Dialect, DocumentSummary, IconOutcome, SpriteReport, SyncReport};
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

/// Human-readable run report, one line per icon and identifier followed by a
/// per-document summary.
pub fn render_sync_report(report: &SyncReport) -> String {
    let mut out = String::new();

    for icon in &report.icons {
        match icon {
            IconOutcome::Missing { file } => {
                let _ = writeln!(out, "⚠️  {}: File not found, skipped", file);
            }
            IconOutcome::Processed { file, targets } => {
                let _ = writeln!(out, "📝 {}", file);
                for target in targets {
                    let document = match target.dialect {
                        Dialect::Markup => &report.primary.label,
                        Dialect::Jsx => &report.alternate.label,
                    };
                    if target.found {
                        let _ = writeln!(out, "   ✓ Updated {} in {}", target.target_id, document);
                    } else {
                        let _ = writeln!(out, "   ⚠️  {} not found in {}", target.target_id, document);
                    }
                }
            }
        }
    }

    out.push('\n');
    for document in [&report.primary, &report.alternate] {
        let _ = writeln!(out, "{}", document_line(document, report.dry_run));
    }

    out.push('\n');
    if report.is_success() {
        out.push_str("✨ Icon synchronization complete!\n");
    } else {
        out.push_str("❌ No icons were updated\n");
    }
    out
}

fn document_line(document: &DocumentSummary, dry_run: bool) -> String {
    match (document.updated, dry_run) {
        (false, _) => format!("⚠️  No changes made to {}", document.label),
        (true, true) => format!(
            "🔍 Would update {} ({} replacements)",
            document.label, document.replacements
        ),
        (true, false) => format!(
            "✅ Successfully updated {} ({} replacements)",
            document.label, document.replacements
        ),
    }
}

pub fn render_sprite_report(report: &SpriteReport) -> String {
    let mut out = String::new();
    for symbol in &report.symbols {
        let _ = writeln!(out, "   ✓ {}", symbol);
    }
    let status = if report.written {
        "✅ Wrote"
    } else if report.dry_run {
        "🔍 Would write"
    } else {
        "⚠️  Unchanged:"
    };
    let _ = writeln!(
        out,
        "\n{} {} ({} symbols)",
        status,
        report.output.display(),
        report.symbols.len()
    );
    out
}

#[derive(Serialize)]
struct TimestampedReport<'a, T: Serialize> {
    timestamp: String,
    #[serde(flatten)]
    report: &'a T,
}

/// Writes `report` as pretty JSON with an RFC 3339 timestamp.
pub fn export_json_report<T: Serialize>(report: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&TimestampedReport {
        timestamp: chrono::Utc::now().to_rfc3339(),
        report,
    })?;
    std::fs::write(path, json)?;
    tracing::info!("📊 Run report exported to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TargetOutcome;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn summary(label: &str, replacements: usize) -> DocumentSummary {
        DocumentSummary {
            path: PathBuf::from(label),
            label: label.to_string(),
            updated: replacements > 0,
            replacements,
            written: replacements > 0,
        }
    }

    fn report() -> SyncReport {
        SyncReport {
            icons: vec![
                IconOutcome::Processed {
                    file: "chat.svg".to_string(),
                    targets: vec![
                        TargetOutcome {
                            target_id: "mask-chat".to_string(),
                            dialect: Dialect::Markup,
                            found: true,
                        },
                        TargetOutcome {
                            target_id: "mask-chat-react".to_string(),
                            dialect: Dialect::Jsx,
                            found: false,
                        },
                    ],
                },
                IconOutcome::Missing {
                    file: "bell.svg".to_string(),
                },
            ],
            primary: summary("index.html", 1),
            alternate: summary("NavigationSidebar.jsx", 0),
            dry_run: false,
        }
    }

    #[test]
    fn test_render_sync_report() {
        let text = render_sync_report(&report());

        assert!(text.contains("📝 chat.svg\n   ✓ Updated mask-chat in index.html\n"));
        assert!(text.contains("   ⚠️  mask-chat-react not found in NavigationSidebar.jsx\n"));
        assert!(text.contains("⚠️  bell.svg: File not found, skipped\n"));
        assert!(text.contains("✅ Successfully updated index.html (1 replacements)"));
        assert!(text.contains("⚠️  No changes made to NavigationSidebar.jsx"));
        assert!(text.ends_with("✨ Icon synchronization complete!\n"));
    }

    #[test]
    fn test_export_json_report() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.json");

        export_json_report(&report(), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(value["timestamp"].is_string());
        assert_eq!(value["icons"][0]["status"], "processed");
        assert_eq!(value["icons"][0]["targets"][1]["dialect"], "jsx");
        assert_eq!(value["icons"][1]["status"], "missing");
        assert_eq!(value["primary"]["replacements"], 1);
    }
}
