use crate::core::extract::{extract_inner_markup, extract_view_box};
use crate::core::fragment::reindent;
use crate::core::mask::rewrite_mask_id;
use crate::core::{SpriteConfigProvider, Storage};
use crate::domain::model::SpriteReport;
use crate::utils::error::{PathKind, Result, SyncError};
use std::path::Path;

const DEFAULT_VIEW_BOX: &str = "0 0 16 16";
const SYMBOL_INDENT: usize = 4;
const SYMBOL_BODY_INDENT: usize = 6;

/// Directory-driven sprite: every icon in the directory becomes one
/// `<symbol>` in a single hidden `<defs>` block, keyed by file stem.
pub struct SpriteBuilder<S: Storage, C: SpriteConfigProvider> {
    storage: S,
    config: C,
    dry_run: bool,
}

impl<S: Storage, C: SpriteConfigProvider> SpriteBuilder<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn run(&self) -> Result<SpriteReport> {
        let icons_dir = self.config.icons_dir();
        if !self.storage.exists(icons_dir) {
            return Err(SyncError::PathNotFound {
                kind: PathKind::IconDirectory,
                path: icons_dir.to_path_buf(),
            });
        }

        let output = self.config.sprite_output();
        let output_location = self.storage.resolve(output);
        let mut files = self.storage.list_files(icons_dir, "svg")?;
        files.retain(|path| self.storage.resolve(path) != output_location);
        tracing::info!("📁 Building sprite from {} icons in {}", files.len(), icons_dir.display());

        let mut symbols = Vec::with_capacity(files.len());
        let mut body = Vec::with_capacity(files.len());
        for path in &files {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                tracing::warn!("⚠️  Skipping icon with unreadable name: {}", path.display());
                continue;
            };
            let svg = self.storage.read_to_string(path)?;
            let symbol_id = format!("{}{}", self.config.symbol_prefix(), stem);
            body.push(render_symbol(&svg, stem, &symbol_id));
            tracing::debug!("Added symbol {}", symbol_id);
            symbols.push(symbol_id);
        }

        let sprite = render_sprite(&body);
        let written = self.store(output, &sprite)?;

        Ok(SpriteReport {
            output: output.to_path_buf(),
            symbols,
            written,
            dry_run: self.dry_run,
        })
    }

    fn store(&self, output: &Path, sprite: &str) -> Result<bool> {
        if self.storage.exists(output) && self.storage.read_to_string(output)? == sprite {
            tracing::info!("Sprite already up to date: {}", output.display());
            return Ok(false);
        }
        if self.dry_run {
            tracing::info!("🔍 Dry run: not writing {}", output.display());
            return Ok(false);
        }
        self.storage.write(output, sprite)?;
        Ok(true)
    }
}

/// One `<symbol>` for an icon; its mask identifier becomes `mask-<stem>` so
/// masks from different icons never collide inside the shared `<defs>`.
pub fn render_symbol(svg: &str, stem: &str, symbol_id: &str) -> String {
    let view_box = extract_view_box(svg).unwrap_or(DEFAULT_VIEW_BOX);
    let inner = rewrite_mask_id(extract_inner_markup(svg), &format!("mask-{}", stem));
    let pad = " ".repeat(SYMBOL_INDENT);

    let content = reindent(&inner, SYMBOL_BODY_INDENT);
    if content.is_empty() {
        return format!(
            "{pad}<symbol id=\"{symbol_id}\" viewBox=\"{view_box}\" fill=\"none\">\n{pad}</symbol>"
        );
    }
    format!(
        "{pad}<symbol id=\"{symbol_id}\" viewBox=\"{view_box}\" fill=\"none\">\n{content}\n{pad}</symbol>"
    )
}

pub fn render_sprite(symbols: &[String]) -> String {
    let mut lines = vec![
        r#"<svg xmlns="http://www.w3.org/2000/svg" style="display: none">"#.to_string(),
        "  <defs>".to_string(),
    ];
    lines.extend(symbols.iter().cloned());
    lines.push("  </defs>".to_string());
    lines.push("</svg>".to_string());
    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SyncConfig;
    use crate::core::sync::tests::MemoryStorage;
    use std::path::PathBuf;

    fn config() -> SyncConfig {
        let mut config = SyncConfig::default();
        config.paths.icons_dir = "icons".into();
        config.sprite.output = "sprite.svg".into();
        config
    }

    #[test]
    fn test_render_symbol_rewrites_mask_by_stem() {
        let svg = r#"<svg width="24" height="24" viewBox="0 0 24 24"><mask id="mask0_4_1"/><g mask="url(#mask0_4_1)"/></svg>"#;
        let symbol = render_symbol(svg, "bell", "icon-bell");
        assert_eq!(
            symbol,
            "    <symbol id=\"icon-bell\" viewBox=\"0 0 24 24\" fill=\"none\">\n      <mask id=\"mask-bell\"/><g mask=\"url(#mask-bell)\"/>\n    </symbol>"
        );
    }

    #[test]
    fn test_builds_sorted_sprite() {
        let storage = MemoryStorage::with_dir("icons");
        storage.insert("icons/star.svg", "<svg><path d=\"S\"/></svg>");
        storage.insert("icons/bell.svg", "<svg viewBox=\"0 0 20 20\"><path d=\"B\"/></svg>");
        storage.insert("icons/notes.txt", "not an icon");
        let builder = SpriteBuilder::new(storage, config());

        let report = builder.run().unwrap();

        assert_eq!(report.symbols, vec!["icon-bell", "icon-star"]);
        assert!(report.written);
        let sprite = builder.storage().get("sprite.svg").unwrap();
        assert!(sprite.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" style=\"display: none\">\n  <defs>\n    <symbol id=\"icon-bell\" viewBox=\"0 0 20 20\""));
        assert!(sprite.contains("<symbol id=\"icon-star\" viewBox=\"0 0 16 16\" fill=\"none\">\n      <path d=\"S\"/>"));
        assert!(sprite.ends_with("  </defs>\n</svg>\n"));
    }

    #[test]
    fn test_unchanged_sprite_is_not_rewritten() {
        let storage = MemoryStorage::with_dir("icons");
        storage.insert("icons/star.svg", "<svg><path/></svg>");
        let builder = SpriteBuilder::new(storage, config());
        assert!(builder.run().unwrap().written);

        let report = builder.run().unwrap();

        assert!(!report.written);
        assert_eq!(*builder.storage().writes.borrow(), vec![PathBuf::from("sprite.svg")]);
    }

    #[test]
    fn test_output_inside_icon_directory_is_excluded_however_spelled() {
        let storage = MemoryStorage::with_dir("icons");
        storage.insert("icons/a.svg", "<svg><path/></svg>");
        storage.insert("icons/sprite.svg", "<svg><defs/></svg>");
        let mut config = config();
        config.sprite.output = "./icons/sprite.svg".into();

        let report = SpriteBuilder::new(storage, config).run().unwrap();

        assert_eq!(report.symbols, vec!["icon-a"]);
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let builder = SpriteBuilder::new(MemoryStorage::default(), config());
        assert!(matches!(
            builder.run(),
            Err(SyncError::PathNotFound { kind: PathKind::IconDirectory, .. })
        ));
    }
}
