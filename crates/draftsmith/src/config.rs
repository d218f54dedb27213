//! Configuration types for source generation.
//!
//! All types implement [`serde::Deserialize`] so the CLI can load them from a
//! TOML file. Every field has a default, so an empty file is a valid
//! configuration.
//!
//! # Example
//!
//! ```
//! # use draftsmith::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.emit().indent(), 4);
//! assert_eq!(config.emit().package(), None);
//! ```

use serde::Deserialize;

/// Indentation width used when no configuration overrides it.
const DEFAULT_INDENT: usize = 4;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Emission configuration section.
    #[serde(default)]
    emit: EmitConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(emit: EmitConfig) -> Self {
        Self { emit }
    }

    /// Returns the emission configuration.
    pub fn emit(&self) -> &EmitConfig {
        &self.emit
    }
}

/// Controls the layout of generated source files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmitConfig {
    /// Spaces per indentation level.
    #[serde(default = "default_indent")]
    indent: usize,

    /// Package declared at the top of every generated file.
    #[serde(default)]
    package: Option<String>,
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            package: None,
        }
    }
}

impl EmitConfig {
    /// Creates a new [`EmitConfig`].
    ///
    /// # Arguments
    ///
    /// * `indent` - Spaces per indentation level.
    /// * `package` - Optional package name for every generated file.
    pub fn new(indent: usize, package: Option<String>) -> Self {
        Self { indent, package }
    }

    /// Returns the number of spaces per indentation level.
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Returns the configured package name, if any.
    pub fn package(&self) -> Option<&str> {
        self.package.as_deref().filter(|name| !name.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").expect("empty config parses");
        assert_eq!(config.emit(), &EmitConfig::default());
    }

    #[test]
    fn test_partial_emit_section() {
        let config: AppConfig = toml::from_str("[emit]\npackage = \"com.example.fleet\"\n")
            .expect("config parses");

        assert_eq!(config.emit().indent(), 4);
        assert_eq!(config.emit().package(), Some("com.example.fleet"));
    }

    #[test]
    fn test_full_emit_section() {
        let config: AppConfig =
            toml::from_str("[emit]\nindent = 2\npackage = \"school\"\n").expect("config parses");

        assert_eq!(config.emit(), &EmitConfig::new(2, Some("school".to_string())));
    }

    #[test]
    fn test_blank_package_is_absent() {
        let emit = EmitConfig::new(4, Some("  ".to_string()));
        assert_eq!(emit.package(), None);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[emit]\nindent = \"wide\"\n");
        assert!(result.is_err());
    }
}
