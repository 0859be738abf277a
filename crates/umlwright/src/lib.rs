//! Umlwright - diagram notation conversion and output extraction.
//!
//! Converts PlantUML-style diagram sources into Mermaid-style diagrams, and
//! recovers a development-process recommendation plus a diagram from the
//! loosely structured output of a multi-step text generation process.

pub mod config;
pub mod extract;
pub mod html;

mod error;

pub use umlwright_core::{
    DiagramKind, DiagramNotation, DiagramSnippet, DiagramValidator, ValidationFailure,
};

pub use error::UmlwrightError;

use log::{debug, info, warn};
use serde::Serialize;
use serde_json::Value;

use config::AppConfig;
use extract::{ExtractionResult, OutputExtractor};

/// The final result handed to callers: both recovered fields plus the
/// validator's verdict on the diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramOutcome {
    recommendation: String,
    diagram: String,
    diagram_valid: bool,
    notation: Option<DiagramNotation>,
}

impl DiagramOutcome {
    /// Returns the recommendation text.
    pub fn recommendation(&self) -> &str {
        &self.recommendation
    }

    /// Returns the diagram text.
    pub fn diagram(&self) -> &str {
        &self.diagram
    }

    /// Returns whether the diagram passed structural validation.
    pub fn diagram_valid(&self) -> bool {
        self.diagram_valid
    }

    /// Returns the notation the diagram opens with, if recognized.
    pub fn notation(&self) -> Option<DiagramNotation> {
        self.notation
    }
}

/// Pipeline for converting, extracting and rendering diagrams.
///
/// This provides an API over the converter, the extractor and the validator,
/// all driven by one [`AppConfig`].
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use umlwright::{DiagramKind, DiagramPipeline, config::AppConfig};
///
/// let pipeline = DiagramPipeline::new(AppConfig::default());
///
/// // Convert a source diagram
/// let snippet = pipeline.convert("participant A\nparticipant B\nA->B: hello", None);
/// assert!(snippet.text().starts_with("sequenceDiagram"));
///
/// // Recover fields from generated output
/// let raw = json!({"tasks_output": ["Use Scrum.", "classDiagram\n    class Order"]});
/// let outcome = pipeline.process(&raw, Some(DiagramKind::Class));
/// assert!(outcome.diagram_valid());
/// ```
#[derive(Debug, Clone)]
pub struct DiagramPipeline {
    config: AppConfig,
    extractor: OutputExtractor,
}

impl Default for DiagramPipeline {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl DiagramPipeline {
    /// Create a new pipeline with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including fallbacks and validation settings
    pub fn new(config: AppConfig) -> Self {
        let extractor = OutputExtractor::from_config(&config);
        Self { config, extractor }
    }

    /// Returns the configuration this pipeline was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Convert source-notation text into the target notation.
    ///
    /// `hint` is the requested diagram kind, used only for diagnostics.
    pub fn convert(&self, source: &str, hint: Option<&str>) -> DiagramSnippet {
        umlwright_parser::convert(source, hint)
    }

    /// Recover the recommendation and diagram from `raw`, using the
    /// configured fallbacks.
    pub fn extract(&self, raw: &Value) -> ExtractionResult {
        let extract = self.config.extract();
        self.extractor.extract(
            raw,
            extract.fallback_recommendation(),
            extract.fallback_diagram(),
        )
    }

    /// Extract, then validate the diagram.
    ///
    /// When `requested` names a kind whose notation differs from the one the
    /// diagram opens with, a warning is logged. The diagram is returned as is.
    pub fn process(&self, raw: &Value, requested: Option<DiagramKind>) -> DiagramOutcome {
        info!(requested:? = requested; "Processing generated output");

        let result = self.extract(raw);
        let diagram_valid = match self.config.validation().validator().check(result.diagram()) {
            Ok(()) => true,
            Err(failure) => {
                warn!(reason = failure.to_string(); "Diagram failed validation");
                false
            }
        };

        let notation = DiagramNotation::detect(result.diagram());
        if let Some(kind) = requested {
            match notation {
                Some(notation) if notation != kind.notation() => warn!(
                    requested:? = kind,
                    expected:? = kind.notation(),
                    found:? = notation;
                    "Diagram notation differs from the requested kind"
                ),
                Some(_) => debug!(requested:? = kind; "Diagram notation matches the requested kind"),
                None => {}
            }
        }

        let (recommendation, diagram) = result.into_parts();
        DiagramOutcome {
            recommendation,
            diagram,
            diagram_valid,
            notation,
        }
    }

    /// Render a standalone HTML page for `diagram`.
    pub fn render_html(&self, diagram: &str) -> String {
        html::render_page(diagram, self.config.html())
    }
}
