use crate::core::fragment::prepare_fragment;
use crate::core::patch::apply_fragment;
use crate::core::{ConfigProvider, Storage};
use crate::domain::model::{
    Dialect, DocumentSummary, IconDescriptor, IconOutcome, SyncReport, TargetDocument,
    TargetOutcome,
};
use crate::utils::error::{PathKind, Result, SyncError};

/// Mapping-driven sync: copies each configured icon into the placeholder
/// blocks named by its target identifiers.
pub struct IconSync<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    dry_run: bool,
}

impl<S: Storage, C: ConfigProvider> IconSync<S, C> {
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

    pub fn run(&self) -> Result<SyncReport> {
        let (mut primary, mut alternate) = self.load()?;

        tracing::info!("📁 Reading icons from: {}", self.config.icons_dir().display());

        let mut icons = Vec::with_capacity(self.config.icon_mappings().len());
        for descriptor in self.config.icon_mappings() {
            let outcome = self.sync_icon(descriptor, &mut primary, &mut alternate)?;
            icons.push(outcome);
        }

        let primary_summary = self.store(&primary)?;
        let alternate_summary = self.store(&alternate)?;

        Ok(SyncReport {
            icons,
            primary: primary_summary,
            alternate: alternate_summary,
            dry_run: self.dry_run,
        })
    }

    /// Pre-flight checks every required path, then reads both documents.
    fn load(&self) -> Result<(TargetDocument, TargetDocument)> {
        let required = [
            (PathKind::IconDirectory, self.config.icons_dir()),
            (PathKind::PrimaryDocument, self.config.primary_document()),
            (PathKind::AlternateDocument, self.config.alternate_document()),
        ];
        for (kind, path) in required {
            if !self.storage.exists(path) {
                return Err(SyncError::PathNotFound {
                    kind,
                    path: path.to_path_buf(),
                });
            }
        }

        let primary_path = self.config.primary_document();
        let alternate_path = self.config.alternate_document();
        let primary = TargetDocument::new(
            primary_path.to_path_buf(),
            self.storage.read_to_string(primary_path)?,
        );
        let alternate = TargetDocument::new(
            alternate_path.to_path_buf(),
            self.storage.read_to_string(alternate_path)?,
        );

        tracing::debug!(
            "Loaded {} ({} bytes) and {} ({} bytes)",
            primary.label(),
            primary.content.len(),
            alternate.label(),
            alternate.content.len()
        );

        Ok((primary, alternate))
    }

    fn sync_icon(
        &self,
        descriptor: &IconDescriptor,
        primary: &mut TargetDocument,
        alternate: &mut TargetDocument,
    ) -> Result<IconOutcome> {
        let icon_path = self.config.icons_dir().join(&descriptor.file);
        if !self.storage.exists(&icon_path) {
            tracing::warn!("⚠️  {}: File not found, skipping...", descriptor.file);
            return Ok(IconOutcome::Missing {
                file: descriptor.file.clone(),
            });
        }

        tracing::info!("📝 Processing: {}", descriptor.file);
        let svg = self.storage.read_to_string(&icon_path)?;

        let mut targets = Vec::with_capacity(descriptor.targets.len());
        for target_id in &descriptor.targets {
            let dialect = self.config.dialect_for(target_id);
            let indentation = self.config.indentation(dialect);
            let document = match dialect {
                Dialect::Markup => &mut *primary,
                Dialect::Jsx => &mut *alternate,
            };

            let fragment = prepare_fragment(&svg, target_id, dialect, indentation.fragment);
            let found = apply_fragment(document, &fragment, indentation.closing)?;
            if found {
                tracing::info!("   ✓ Updated {} in {}", target_id, document.label());
            } else {
                tracing::warn!("   ⚠️  {} not found in {}", target_id, document.label());
            }

            targets.push(TargetOutcome {
                target_id: target_id.clone(),
                dialect,
                found,
            });
        }

        Ok(IconOutcome::Processed {
            file: descriptor.file.clone(),
            targets,
        })
    }

    fn store(&self, document: &TargetDocument) -> Result<DocumentSummary> {
        let mut summary = DocumentSummary::from(document);
        if !document.is_updated() {
            return Ok(summary);
        }

        if self.dry_run {
            tracing::info!("🔍 Dry run: not writing {}", document.path.display());
        } else {
            self.storage.write(&document.path, &document.content)?;
            summary.written = true;
            tracing::debug!("Wrote {} bytes to {}", document.content.len(), document.path.display());
        }
        Ok(summary)
    }
}
