//! Recovery of a recommendation and a diagram from loosely structured output.
//!
//! A multi-step text generation process hands back an opaque result: a JSON
//! value that may expose per-step outputs in one of several shapes, or plain
//! text. [`OutputExtractor`] runs an ordered [`Strategy`] chain over it and
//! keeps, for each field, the longest candidate any strategy produced. The
//! chain stops as soon as both fields are usable.
//!
//! Extraction never fails. When nothing usable is found the caller's fallback
//! text is returned, and [`ExtractionResult`] records which fields fell back.

mod normalize;
mod rescue;
mod strategy;
mod text;

pub use normalize::strip_code_fence;
pub use strategy::Strategy;
pub use text::stringify;

use log::{debug, info, warn};
use serde_json::Value;

use umlwright_core::DiagramValidator;
use umlwright_parser::is_source_notation;

use crate::config::{AppConfig, DEFAULT_FALLBACK_DIAGRAM, DEFAULT_FALLBACK_RECOMMENDATION};

/// The best recommendation and diagram candidates found so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    recommendation: String,
    diagram: String,
}

impl Candidates {
    pub fn new(recommendation: impl Into<String>, diagram: impl Into<String>) -> Self {
        Self {
            recommendation: recommendation.into(),
            diagram: diagram.into(),
        }
    }

    pub fn recommendation(&self) -> &str {
        &self.recommendation
    }

    pub fn diagram(&self) -> &str {
        &self.diagram
    }

    /// Merge `other` field by field. A field is replaced only by a candidate
    /// with strictly more characters.
    ///
    /// Returns `(recommendation_replaced, diagram_replaced)`.
    pub fn merge(&mut self, other: Candidates) -> (bool, bool) {
        (
            keep_longer(&mut self.recommendation, other.recommendation),
            keep_longer(&mut self.diagram, other.diagram),
        )
    }
}

fn keep_longer(current: &mut String, candidate: String) -> bool {
    if candidate.chars().count() > current.chars().count() {
        *current = candidate;
        true
    } else {
        false
    }
}

/// What a single strategy found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyOutcome {
    /// The shape the strategy looks for is absent, or every field was blank.
    NotFound,
    /// Exactly one field has a non-blank candidate.
    Partial(Candidates),
    /// Both fields have non-blank candidates.
    Found(Candidates),
}

impl StrategyOutcome {
    /// The candidates carried by this outcome, if any.
    pub fn into_candidates(self) -> Option<Candidates> {
        match self {
            StrategyOutcome::NotFound => None,
            StrategyOutcome::Partial(candidates) | StrategyOutcome::Found(candidates) => {
                Some(candidates)
            }
        }
    }
}

impl From<Candidates> for StrategyOutcome {
    fn from(candidates: Candidates) -> Self {
        let has_recommendation = !candidates.recommendation.trim().is_empty();
        let has_diagram = !candidates.diagram.trim().is_empty();
        match (has_recommendation, has_diagram) {
            (true, true) => StrategyOutcome::Found(candidates),
            (false, false) => StrategyOutcome::NotFound,
            _ => StrategyOutcome::Partial(candidates),
        }
    }
}

/// The recovered fields. Both are always non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    recommendation: String,
    diagram: String,
    recommendation_from_fallback: bool,
    diagram_from_fallback: bool,
}

impl ExtractionResult {
    pub fn recommendation(&self) -> &str {
        &self.recommendation
    }

    pub fn diagram(&self) -> &str {
        &self.diagram
    }

    /// `true` when no strategy produced a recommendation.
    pub fn recommendation_from_fallback(&self) -> bool {
        self.recommendation_from_fallback
    }

    /// `true` when no strategy produced a diagram.
    pub fn diagram_from_fallback(&self) -> bool {
        self.diagram_from_fallback
    }

    /// Consume the result, returning `(recommendation, diagram)`.
    pub fn into_parts(self) -> (String, String) {
        (self.recommendation, self.diagram)
    }
}

/// Runs the strategy chain and normalizes the winning diagram.
#[derive(Debug, Clone)]
pub struct OutputExtractor {
    validator: DiagramValidator,
    convert_source_notation: bool,
}

impl Default for OutputExtractor {
    fn default() -> Self {
        Self::new(DiagramValidator::default(), true)
    }
}

impl OutputExtractor {
    /// Create an extractor.
    ///
    /// # Arguments
    ///
    /// * `validator` - Decides whether a normalized diagram candidate is usable.
    /// * `convert_source_notation` - Convert `@startuml` snippets during normalization.
    pub fn new(validator: DiagramValidator, convert_source_notation: bool) -> Self {
        Self {
            validator,
            convert_source_notation,
        }
    }

    /// Create an extractor from the extraction and validation sections of `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.validation().validator(),
            config.extract().convert_source_notation(),
        )
    }

    /// Recover the recommendation and diagram from `raw`.
    ///
    /// Blank fields fall back to `fallback_recommendation` and
    /// `fallback_diagram`, which are returned verbatim. A blank fallback is
    /// itself replaced by the built-in default, so neither field is ever empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use serde_json::json;
    /// # use umlwright::extract::OutputExtractor;
    /// let raw = json!({"tasks_output": ["Use Agile.", "```mermaid\nflowchart TD\n    A-->B\n```"]});
    /// let result = OutputExtractor::default().extract(&raw, "no recommendation", "flowchart TD\n    A[none]");
    /// assert_eq!(result.recommendation(), "Use Agile.");
    /// assert_eq!(result.diagram(), "flowchart TD\n    A-->B");
    /// ```
    pub fn extract(
        &self,
        raw: &Value,
        fallback_recommendation: &str,
        fallback_diagram: &str,
    ) -> ExtractionResult {
        let mut best = Candidates::default();

        for strategy in Strategy::CHAIN {
            let Some(candidates) = strategy.apply(raw, &best).into_candidates() else {
                debug!(strategy = strategy.to_string(); "Strategy found nothing");
                continue;
            };

            let (recommendation_replaced, diagram_replaced) = best.merge(candidates);
            debug!(
                strategy = strategy.to_string(),
                recommendation_replaced,
                diagram_replaced;
                "Merged strategy candidates"
            );

            if self.is_usable(&best) {
                debug!(strategy = strategy.to_string(); "Candidates usable, stopping early");
                break;
            }
        }

        let recommendation_from_fallback = best.recommendation.trim().is_empty();
        let diagram_from_fallback = best.diagram.trim().is_empty();

        if recommendation_from_fallback && diagram_from_fallback {
            warn!("No extraction strategy produced output, using fallbacks");
        } else if recommendation_from_fallback || diagram_from_fallback {
            warn!(
                recommendation_from_fallback,
                diagram_from_fallback;
                "Extraction incomplete, using fallback for missing field"
            );
        }

        let recommendation = if recommendation_from_fallback {
            non_blank_or(fallback_recommendation, DEFAULT_FALLBACK_RECOMMENDATION)
        } else {
            best.recommendation
        };

        let diagram = if diagram_from_fallback {
            non_blank_or(fallback_diagram, DEFAULT_FALLBACK_DIAGRAM)
        } else {
            self.normalize(&best.diagram)
        };

        info!(
            recommendation_len = recommendation.len(),
            diagram_len = diagram.len();
            "Extraction finished"
        );

        ExtractionResult {
            recommendation,
            diagram,
            recommendation_from_fallback,
            diagram_from_fallback,
        }
    }

    /// Reduce a diagram candidate to the diagram text.
    ///
    /// The inner text of a fenced block is taken first. Source-notation text
    /// is then converted when conversion is enabled; anything else goes
    /// through [`strip_code_fence`].
    pub fn normalize(&self, candidate: &str) -> String {
        let inner = normalize::fence_inner(candidate).unwrap_or(candidate);
        if self.convert_source_notation && is_source_notation(inner) {
            debug!("Converting source-notation diagram candidate");
            return umlwright_parser::convert(inner, None)
                .text()
                .trim_end()
                .to_string();
        }
        strip_code_fence(inner)
    }

    fn is_usable(&self, best: &Candidates) -> bool {
        !best.recommendation.trim().is_empty()
            && !best.diagram.trim().is_empty()
            && self.validator.is_valid(&self.normalize(&best.diagram))
    }
}

fn non_blank_or(text: &str, default: &str) -> String {
    if text.trim().is_empty() {
        default.to_string()
    } else {
        text.to_string()
    }
}
