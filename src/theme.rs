//! Component themes for generated templates
//!
//! The emitted template imports a skeleton component from a UI library.
//! A theme remaps the component name and import path so generated views
//! can target codebases that keep their skeleton primitive elsewhere.

use std::path::Path;

use serde::Deserialize;

use crate::error::ThemeError;

/// A component theme for the emitted template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Optional name for the theme
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Name of the skeleton component, used in the import and every tag
    pub component: String,
    /// Module specifier the component is imported from
    pub import_path: String,
}

/// TOML structure for deserializing themes
#[derive(Deserialize)]
struct TomlTheme {
    metadata: Option<TomlMetadata>,
    component: TomlComponent,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct TomlComponent {
    name: String,
    import: String,
}

/// Default theme - the shadcn/ui Skeleton component
const DEFAULT_THEME: &str = r#"
[component]
name = "Skeleton"
import = "@/components/ui/skeleton"
"#;

impl Theme {
    /// Load a theme from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a theme from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ThemeError> {
        let parsed: TomlTheme = toml::from_str(content)?;

        Ok(Theme {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            component: parsed.component.name,
            import_path: parsed.component.import,
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_str(DEFAULT_THEME).expect("Default theme should be valid TOML")
    }
}
