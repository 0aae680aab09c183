use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One demonstrated call: what was invoked, with which input, and what came back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub step: String,
    pub input: serde_json::Value,
    pub output: serde_json::Value,
    pub evaluated_at: DateTime<Utc>,
}

impl Evaluation {
    pub fn new(step: &str, input: serde_json::Value, output: serde_json::Value) -> Self {
        Self {
            step: step.to_string(),
            input,
            output,
            evaluated_at: Utc::now(),
        }
    }

    pub fn render_text(&self) -> String {
        match &self.output {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TourReport {
    pub evaluations: Vec<Evaluation>,
}

impl TourReport {
    pub fn steps(&self) -> Vec<&str> {
        self.evaluations.iter().map(|e| e.step.as_str()).collect()
    }
}

/// Renders evaluations for printing. Text is one output per line; JSON is a
/// single object for one-off commands and an array when `as_list` is set.
pub fn render_evaluations(
    evaluations: &[Evaluation],
    format: OutputFormat,
    as_list: bool,
) -> Result<String> {
    let rendered = match (format, evaluations) {
        (OutputFormat::Text, _) => evaluations
            .iter()
            .map(Evaluation::render_text)
            .collect::<Vec<_>>()
            .join("\n"),
        (OutputFormat::Json, [single]) if !as_list => serde_json::to_string_pretty(single)?,
        (OutputFormat::Json, _) => serde_json::to_string_pretty(evaluations)?,
    };
    Ok(rendered)
}
