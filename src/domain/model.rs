use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which target document an identifier lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Plain markup with hyphenated attribute names (`index.html`).
    Markup,
    /// Component file with camel-cased attributes and object-literal styles.
    Jsx,
}

/// An icon source file and the identifiers its content must be copied to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconDescriptor {
    pub file: String,
    pub targets: Vec<String>,
}

impl IconDescriptor {
    pub fn new(file: impl Into<String>, targets: &[&str]) -> Self {
        Self {
            file: file.into(),
            targets: targets.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedFragment {
    pub target_id: String,
    pub markup: String,
}

/// In-memory buffer for one output document.
#[derive(Debug, Clone)]
pub struct TargetDocument {
    pub path: PathBuf,
    pub content: String,
    pub replacements: usize,
}

impl TargetDocument {
    pub fn new(path: PathBuf, content: String) -> Self {
        Self {
            path,
            content,
            replacements: 0,
        }
    }

    pub fn is_updated(&self) -> bool {
        self.replacements > 0
    }

    pub fn label(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetOutcome {
    pub target_id: String,
    pub dialect: Dialect,
    pub found: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum IconOutcome {
    Processed {
        file: String,
        targets: Vec<TargetOutcome>,
    },
    Missing {
        file: String,
    },
}

impl IconOutcome {
    pub fn file(&self) -> &str {
        match self {
            IconOutcome::Processed { file, .. } | IconOutcome::Missing { file } => file,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub path: PathBuf,
    pub label: String,
    pub updated: bool,
    pub replacements: usize,
    pub written: bool,
}

impl From<&TargetDocument> for DocumentSummary {
    fn from(document: &TargetDocument) -> Self {
        Self {
            path: document.path.clone(),
            label: document.label(),
            updated: document.is_updated(),
            replacements: document.replacements,
            written: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub icons: Vec<IconOutcome>,
    pub primary: DocumentSummary,
    pub alternate: DocumentSummary,
    pub dry_run: bool,
}

impl SyncReport {
    /// True when at least one placeholder was replaced in either document.
    pub fn is_success(&self) -> bool {
        self.primary.updated || self.alternate.updated
    }

    pub fn not_found(&self) -> Vec<&TargetOutcome> {
        self.icons
            .iter()
            .filter_map(|icon| match icon {
                IconOutcome::Processed { targets, .. } => Some(targets),
                IconOutcome::Missing { .. } => None,
            })
            .flatten()
            .filter(|target| !target.found)
            .collect()
    }

    pub fn missing_icons(&self) -> Vec<&str> {
        self.icons
            .iter()
            .filter(|icon| matches!(icon, IconOutcome::Missing { .. }))
            .map(IconOutcome::file)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpriteReport {
    pub output: PathBuf,
    pub symbols: Vec<String>,
    pub written: bool,
    pub dry_run: bool,
}
