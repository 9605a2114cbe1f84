//! # Configuration Root
//!
//! The object the CSS engine loads: content globs, theme, plugins and
//! safelist, plus its JSON and ES module renderings.

use std::collections::BTreeSet;

use config::constants::{CONTENT_GLOBS, SAFELIST};
use serde::Serialize;

use crate::error::TokenError;
use crate::theme::ThemeTable;
use crate::units::RemConverter;
use crate::validate;

/// Globs of source files the engine scans for class usage.
///
/// Only membership is meaningful; order is kept for stable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContentPatterns(Vec<String>);

impl ContentPatterns {
    /// Creates a pattern list.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(patterns.into_iter().map(Into::into).collect())
    }

    /// Whether `pattern` is scanned.
    pub fn contains(&self, pattern: &str) -> bool {
        self.0.iter().any(|p| p == pattern)
    }

    /// Patterns in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no pattern is configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ContentPatterns {
    fn default() -> Self {
        Self::new(CONTENT_GLOBS.iter().copied())
    }
}

/// Class names the engine emits even when the scan does not find them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Safelist(BTreeSet<String>);

impl Safelist {
    /// Creates a safelist; duplicates collapse.
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(classes.into_iter().map(Into::into).collect())
    }

    /// Whether `class` is always emitted.
    pub fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    /// Class names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of class names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the safelist is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Safelist {
    fn default() -> Self {
        Self::new(SAFELIST.iter().copied())
    }
}

/// Complete engine configuration.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigurationRoot {
    /// Files to scan.
    pub content: ContentPatterns,
    /// Token table.
    pub theme: ThemeTable,
    /// Engine extension hooks; none are used.
    pub plugins: Vec<String>,
    /// Classes to always emit.
    pub safelist: Safelist,
}

impl ConfigurationRoot {
    /// Composes the gnoweb configuration.
    pub fn assemble(converter: &RemConverter) -> Self {
        let root = Self {
            content: ContentPatterns::default(),
            theme: ThemeTable::build(converter),
            plugins: Vec::new(),
            safelist: Safelist::default(),
        };
        log::debug!(
            "assembled configuration: {} content globs, {} screens, {} palettes, {} safelisted classes",
            root.content.len(),
            root.theme.screens.len(),
            root.theme.colors.len(),
            root.safelist.len()
        );
        root
    }

    /// Checks the invariants the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), TokenError> {
        validate::validate_configuration(self)
    }

    /// Pretty-printed JSON, keys in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Serialization`] if serialization fails.
    pub fn to_json(&self) -> Result<String, TokenError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// ES module source whose default export is this configuration.
    ///
    /// JSON is a subset of JavaScript object literal syntax, so the pretty
    /// JSON is embedded as-is.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Serialization`] if serialization fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// let source = gnoweb_tokens::assemble_configuration().to_module_source().unwrap();
    /// assert!(source.starts_with("export default {"));
    /// assert!(source.ends_with("};\n"));
    /// ```
    pub fn to_module_source(&self) -> Result<String, TokenError> {
        Ok(format!("export default {};\n", self.to_json()?))
    }
}
