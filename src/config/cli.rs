use crate::config::toml_config::SyncConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "icon-sync")]
#[command(about = "Copy SVG icons into their inline copies in index.html and the sidebar component")]
pub struct CliConfig {
    /// Path to a TOML configuration file (built-in icon mapping when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory that relative paths are resolved against
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Override the icons directory
    #[arg(long)]
    pub icons_dir: Option<PathBuf>,

    /// Override the primary (HTML) document
    #[arg(long)]
    pub primary: Option<PathBuf>,

    /// Override the alternate (JSX) document
    #[arg(long)]
    pub alternate: Option<PathBuf>,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON run report to this path (relative to --root)
    #[arg(long)]
    pub report_file: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the configuration and applies the command-line overrides.
    pub fn resolve(&self) -> Result<SyncConfig> {
        let mut config = SyncConfig::load(self.config.as_deref())?;

        if let Some(icons_dir) = &self.icons_dir {
            config.paths.icons_dir = icons_dir.clone();
        }
        if let Some(primary) = &self.primary {
            config.paths.primary_document = primary.clone();
        }
        if let Some(alternate) = &self.alternate {
            config.paths.alternate_document = alternate.clone();
        }

        Ok(config)
    }

    /// The JSON report location, resolved against `root` like every other path.
    pub fn report_path(&self) -> Option<PathBuf> {
        self.report_file.as_ref().map(|file| self.root.join(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_overrides_apply_on_top_of_defaults() {
        let cli = CliConfig::parse_from([
            "icon-sync",
            "--primary",
            "public/index.html",
            "--dry-run",
        ]);

        let config = cli.resolve().unwrap();

        assert!(cli.dry_run);
        assert_eq!(cli.root, Path::new("."));
        assert_eq!(config.paths.primary_document, Path::new("public/index.html"));
        assert_eq!(config.paths.icons_dir, Path::new("assets/icons"));
    }

    #[test]
    fn test_report_file_is_relative_to_root() {
        let cli = CliConfig::parse_from([
            "icon-sync",
            "--root",
            "site",
            "--report-file",
            "reports/icons.json",
        ]);

        assert_eq!(cli.report_path(), Some(PathBuf::from("site/reports/icons.json")));
        assert_eq!(CliConfig::parse_from(["icon-sync"]).report_path(), None);
    }
}
