use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::style::StyleSet;

const REFERENCE_PREFIX: &str = "$theme.";

/// Named style presets that pages can refer to as `$theme.<name>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    #[serde(default)]
    pub styles: HashMap<String, StyleSet>,
}

impl Theme {
    /// Create a new empty theme
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, name: impl Into<String>, style: impl Into<StyleSet>) -> Self {
        self.styles.insert(name.into(), style.into());
        self
    }

    /// Resolve a theme reference (e.g., "$theme.panel")
    pub fn resolve(&self, reference: &str) -> Option<&StyleSet> {
        let name = reference.strip_prefix(REFERENCE_PREFIX)?;
        if name.is_empty() || name.contains('.') {
            return None;
        }
        self.styles.get(name)
    }

    /// Check if a string is a theme reference
    pub fn is_theme_reference(value: &str) -> bool {
        value.starts_with(REFERENCE_PREFIX)
    }

    /// Presets of `other` take precedence over presets with the same name.
    pub fn merged_with(mut self, other: Theme) -> Theme {
        self.styles.extend(other.styles);
        self
    }
}
