//! Configuration types for Umlwright extraction and rendering.
//!
//! This module provides the configuration structures that control how
//! generated output is extracted, how snippets are validated, and how the
//! HTML page is produced. All types implement [`serde::Deserialize`] with
//! every field defaulted, so a partial file only overrides what it names.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining every section.
//! - [`ExtractConfig`] - Fallback placeholders and source-notation conversion.
//! - [`ValidationConfig`] - Thresholds for the structural validator.
//! - [`HtmlConfig`] - Options for the standalone HTML page.
//!
//! # Example
//!
//! ```
//! # use umlwright::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.validation().min_length(), 10);
//! assert!(config.extract().convert_source_notation());
//! ```

use serde::Deserialize;

use umlwright_core::{DiagramValidator, validate::DEFAULT_MIN_LENGTH};

/// Recommendation used when nothing usable was extracted.
pub const DEFAULT_FALLBACK_RECOMMENDATION: &str = "No SDLC recommendation generated";

/// Diagram used when nothing usable was extracted.
pub const DEFAULT_FALLBACK_DIAGRAM: &str = "flowchart TD\n    A[No diagram generated]";

const DEFAULT_HTML_HEIGHT: u32 = 500;
const DEFAULT_HTML_THEME: &str = "default";
const DEFAULT_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/mermaid/dist/mermaid.min.js";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Extraction section.
    #[serde(default)]
    extract: ExtractConfig,

    /// Validation section.
    #[serde(default)]
    validation: ValidationConfig,

    /// HTML page section.
    #[serde(default)]
    html: HtmlConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(extract: ExtractConfig, validation: ValidationConfig, html: HtmlConfig) -> Self {
        Self {
            extract,
            validation,
            html,
        }
    }

    /// Returns the extraction configuration.
    pub fn extract(&self) -> &ExtractConfig {
        &self.extract
    }

    /// Returns the validation configuration.
    pub fn validation(&self) -> &ValidationConfig {
        &self.validation
    }

    /// Returns the HTML configuration.
    pub fn html(&self) -> &HtmlConfig {
        &self.html
    }
}

/// Extraction settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Recommendation substituted when no strategy produced one.
    fallback_recommendation: String,

    /// Diagram substituted when no strategy produced one.
    fallback_diagram: String,

    /// Whether rescued snippets in the source notation are converted.
    convert_source_notation: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            fallback_recommendation: DEFAULT_FALLBACK_RECOMMENDATION.to_string(),
            fallback_diagram: DEFAULT_FALLBACK_DIAGRAM.to_string(),
            convert_source_notation: true,
        }
    }
}

impl ExtractConfig {
    /// Creates a new [`ExtractConfig`].
    ///
    /// # Arguments
    ///
    /// * `fallback_recommendation` - Text used when no recommendation is found.
    /// * `fallback_diagram` - Diagram used when no diagram is found.
    /// * `convert_source_notation` - Convert `@startuml` snippets during normalization.
    pub fn new(
        fallback_recommendation: impl Into<String>,
        fallback_diagram: impl Into<String>,
        convert_source_notation: bool,
    ) -> Self {
        Self {
            fallback_recommendation: fallback_recommendation.into(),
            fallback_diagram: fallback_diagram.into(),
            convert_source_notation,
        }
    }

    /// Returns the fallback recommendation text.
    pub fn fallback_recommendation(&self) -> &str {
        &self.fallback_recommendation
    }

    /// Returns the fallback diagram text.
    pub fn fallback_diagram(&self) -> &str {
        &self.fallback_diagram
    }

    /// Returns whether source-notation snippets are converted.
    pub fn convert_source_notation(&self) -> bool {
        self.convert_source_notation
    }
}

/// Structural validation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum trimmed length, in characters, of a valid snippet.
    min_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

impl ValidationConfig {
    /// Creates a new [`ValidationConfig`] with the given minimum length.
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Returns the minimum snippet length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Builds the [`DiagramValidator`] described by this section.
    pub fn validator(&self) -> DiagramValidator {
        DiagramValidator::new(self.min_length)
    }
}

/// Settings for the standalone HTML page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    /// Minimum height of the diagram container, in pixels.
    height: u32,

    /// Theme name passed to the diagram script.
    theme: String,

    /// URL the diagram script is loaded from.
    script_url: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HTML_HEIGHT,
            theme: DEFAULT_HTML_THEME.to_string(),
            script_url: DEFAULT_SCRIPT_URL.to_string(),
        }
    }
}

impl HtmlConfig {
    /// Creates a new [`HtmlConfig`].
    pub fn new(height: u32, theme: impl Into<String>, script_url: impl Into<String>) -> Self {
        Self {
            height,
            theme: theme.into(),
            script_url: script_url.into(),
        }
    }

    /// Returns the container height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the theme name.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Returns the script URL.
    pub fn script_url(&self) -> &str {
        &self.script_url
    }
}
