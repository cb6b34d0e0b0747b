use crate::core::{ConfigProvider, Indentation, SpriteConfigProvider};
use crate::domain::model::{Dialect, IconDescriptor};
use crate::utils::error::{Result, SyncError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

const MAX_INDENT: usize = 64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default = "default_icon_mappings")]
    pub icons: Vec<IconDescriptor>,
    #[serde(default)]
    pub sprite: SpriteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub icons_dir: PathBuf,
    pub primary_document: PathBuf,
    pub alternate_document: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub primary_indent: usize,
    pub alternate_indent: usize,
    pub primary_closing_indent: usize,
    pub alternate_closing_indent: usize,
    /// Identifiers ending with this suffix target the alternate document.
    pub alternate_suffix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    pub output: PathBuf,
    pub symbol_prefix: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            icons_dir: PathBuf::from("assets/icons"),
            primary_document: PathBuf::from("index.html"),
            alternate_document: PathBuf::from("NavigationSidebar.jsx"),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            primary_indent: 24,
            alternate_indent: 14,
            primary_closing_indent: 20,
            alternate_closing_indent: 10,
            alternate_suffix: "-react".to_string(),
        }
    }
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("assets/icons-sprite.svg"),
            symbol_prefix: "icon-".to_string(),
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            layout: LayoutConfig::default(),
            icons: default_icon_mappings(),
            sprite: SpriteConfig::default(),
        }
    }
}

/// The navigation icons shipped with the site.
fn default_icon_mappings() -> Vec<IconDescriptor> {
    vec![
        IconDescriptor::new("home.svg", &["mask-home"]),
        IconDescriptor::new("search.svg", &["mask-search-builder"]),
        IconDescriptor::new("bell.svg", &["mask-bell-alerts"]),
        IconDescriptor::new("bookmark.svg", &["mask-bookmark-saved"]),
        IconDescriptor::new("star.svg", &["mask-star-interest"]),
        IconDescriptor::new("chat.svg", &["mask-chat", "mask-chat-react"]),
        IconDescriptor::new("reports.svg", &["mask-reports", "mask-reports-react"]),
        IconDescriptor::new("newspaper.svg", &["mask-newspaper-newsletters"]),
        IconDescriptor::new("chart.svg", &["mask-chart-companies", "mask-chart-companies-react"]),
        IconDescriptor::new("user-gear.svg", &["mask-user-gear-admin"]),
    ]
}

impl SyncConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SyncError::ConfigError {
            message: format!("cannot read '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SyncError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ICONS_DIR})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("paths.icons_dir", &self.paths.icons_dir.to_string_lossy())?;
        validation::validate_path(
            "paths.primary_document",
            &self.paths.primary_document.to_string_lossy(),
        )?;
        validation::validate_path(
            "paths.alternate_document",
            &self.paths.alternate_document.to_string_lossy(),
        )?;

        let layout = &self.layout;
        for (field, value) in [
            ("layout.primary_indent", layout.primary_indent),
            ("layout.alternate_indent", layout.alternate_indent),
            ("layout.primary_closing_indent", layout.primary_closing_indent),
            ("layout.alternate_closing_indent", layout.alternate_closing_indent),
        ] {
            validation::validate_range(field, value, 0, MAX_INDENT)?;
        }
        validation::validate_non_empty_string("layout.alternate_suffix", &layout.alternate_suffix)?;

        let files: Vec<&str> = self.icons.iter().map(|icon| icon.file.as_str()).collect();
        validation::validate_file_extensions("icons.file", &files, &["svg"])?;

        for icon in &self.icons {
            if icon.targets.is_empty() {
                return Err(SyncError::ConfigValidationError {
                    field: format!("icons.{}", icon.file),
                    message: "icon must list at least one target identifier".to_string(),
                });
            }
            for target in &icon.targets {
                validation::validate_non_empty_string("icons.targets", target)?;
            }
        }

        Ok(())
    }

    pub fn validate_sprite_config(&self) -> Result<()> {
        validation::validate_path("paths.icons_dir", &self.paths.icons_dir.to_string_lossy())?;
        validation::validate_path("sprite.output", &self.sprite.output.to_string_lossy())?;
        validation::validate_non_empty_string("sprite.symbol_prefix", &self.sprite.symbol_prefix)
    }

    /// Loads the given file, or the built-in configuration when none is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn target_count(&self) -> usize {
        self.icons.iter().map(|icon| icon.targets.len()).sum()
    }
}

impl ConfigProvider for SyncConfig {
    fn icons_dir(&self) -> &Path {
        &self.paths.icons_dir
    }

    fn primary_document(&self) -> &Path {
        &self.paths.primary_document
    }

    fn alternate_document(&self) -> &Path {
        &self.paths.alternate_document
    }

    fn icon_mappings(&self) -> &[IconDescriptor] {
        &self.icons
    }

    fn alternate_suffix(&self) -> &str {
        &self.layout.alternate_suffix
    }

    fn indentation(&self, dialect: Dialect) -> Indentation {
        match dialect {
            Dialect::Markup => Indentation {
                fragment: self.layout.primary_indent,
                closing: self.layout.primary_closing_indent,
            },
            Dialect::Jsx => Indentation {
                fragment: self.layout.alternate_indent,
                closing: self.layout.alternate_closing_indent,
            },
        }
    }
}

impl SpriteConfigProvider for SyncConfig {
    fn sprite_output(&self) -> &Path {
        &self.sprite.output
    }

    fn symbol_prefix(&self) -> &str {
        &self.sprite.symbol_prefix
    }
}

impl Validate for SyncConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_navigation_icons() {
        let config = SyncConfig::default();

        assert_eq!(config.icons.len(), 10);
        assert_eq!(config.target_count(), 13);
        assert_eq!(config.icons[0], IconDescriptor::new("home.svg", &["mask-home"]));
        assert_eq!(config.indentation(Dialect::Markup), Indentation { fragment: 24, closing: 20 });
        assert_eq!(config.indentation(Dialect::Jsx), Indentation { fragment: 14, closing: 10 });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_dialect_follows_suffix() {
        let config = SyncConfig::default();
        assert_eq!(config.dialect_for("mask-chat"), Dialect::Markup);
        assert_eq!(config.dialect_for("mask-chat-react"), Dialect::Jsx);
    }

    #[test]
    fn test_parse_partial_toml_config() {
        let toml_content = r#"
[paths]
icons_dir = "static/icons"

[layout]
primary_indent = 8

[[icons]]
file = "logo.svg"
targets = ["mask-logo", "mask-logo-react"]
"#;

        let config = SyncConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.paths.icons_dir, PathBuf::from("static/icons"));
        assert_eq!(config.paths.primary_document, PathBuf::from("index.html"));
        assert_eq!(config.layout.primary_indent, 8);
        assert_eq!(config.layout.alternate_indent, 14);
        assert_eq!(config.icons, vec![IconDescriptor::new("logo.svg", &["mask-logo", "mask-logo-react"])]);
        assert_eq!(config.sprite.symbol_prefix, "icon-");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = SyncConfig::from_toml_str("").unwrap();
        assert_eq!(config.icons.len(), 10);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ICON_SYNC_TEST_DOCUMENT", "public/index.html");

        let config = SyncConfig::from_toml_str(
            r#"
[paths]
primary_document = "${ICON_SYNC_TEST_DOCUMENT}"
alternate_document = "${ICON_SYNC_TEST_UNSET}"
"#,
        )
        .unwrap();

        assert_eq!(config.paths.primary_document, PathBuf::from("public/index.html"));
        assert_eq!(config.paths.alternate_document, PathBuf::from("${ICON_SYNC_TEST_UNSET}"));

        std::env::remove_var("ICON_SYNC_TEST_DOCUMENT");
    }

    #[test]
    fn test_config_validation() {
        let mut config = SyncConfig::default();
        config.layout.alternate_indent = 200;
        assert!(config.validate().is_err());

        let mut config = SyncConfig::default();
        config.icons.push(IconDescriptor::new("logo.png", &["mask-logo"]));
        assert!(config.validate().is_err());

        let mut config = SyncConfig::default();
        config.icons.push(IconDescriptor::new("logo.svg", &[]));
        assert!(matches!(
            config.validate(),
            Err(SyncError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = SyncConfig::from_toml_str("[layout]\nprimary_indent = \"wide\"").unwrap_err();
        assert!(matches!(err, SyncError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[sprite]\noutput = \"public/sprite.svg\"\nsymbol_prefix = \"i-\"\n")
            .unwrap();

        let config = SyncConfig::load(Some(temp_file.path())).unwrap();
        assert_eq!(config.sprite_output(), Path::new("public/sprite.svg"));
        assert_eq!(config.symbol_prefix(), "i-");
        assert!(config.validate_sprite_config().is_ok());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        assert!(matches!(
            SyncConfig::load(Some(Path::new("/nonexistent/icon-sync.toml"))),
            Err(SyncError::ConfigError { .. })
        ));
    }
}
