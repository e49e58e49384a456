//! Server-rendered search page
//!
//! Records are flattened into labelled lines before rendering so the
//! template stays logic-free. Handlebars escapes every interpolated value.

use dialtrace_source_api::json::as_text;
use dialtrace_source_api::SourceRecord;
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

const REPORT_TEMPLATE: &str = include_str!("../templates/report.hbs");
const REPORT: &str = "report";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Invalid report template: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    #[error("Failed to render report: {0}")]
    Render(#[from] handlebars::RenderError),
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportView {
    pub phone_number: String,
    pub ask_api_key: bool,
    pub results: Vec<ResultBlock>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultBlock {
    pub source: String,
    pub error: Option<String>,
    pub lines: Vec<Line>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub label: String,
    pub value: String,
    pub children: Vec<Line>,
}

impl Line {
    fn new(key: &str, value: &Value) -> Self {
        let label = title_case(key);
        match value {
            Value::Object(map) => Self {
                label,
                value: String::new(),
                children: map.iter().map(|(k, v)| Line::new(k, v)).collect(),
            },
            other => Self {
                label,
                value: as_text(other).unwrap_or_default(),
                children: Vec::new(),
            },
        }
    }
}

impl From<&SourceRecord> for ResultBlock {
    fn from(record: &SourceRecord) -> Self {
        if let Some(error) = record.error_message() {
            return Self {
                source: record.source.clone(),
                error: Some(error.to_string()),
                lines: Vec::new(),
            };
        }

        Self {
            source: record.source.clone(),
            error: None,
            lines: record
                .fields
                .iter()
                .map(|(key, value)| Line::new(key, value))
                .collect(),
        }
    }
}

impl ReportView {
    pub fn new(phone_number: impl Into<String>, ask_api_key: bool) -> Self {
        Self {
            phone_number: phone_number.into(),
            ask_api_key,
            ..Self::default()
        }
    }

    pub fn with_records(mut self, records: &[SourceRecord]) -> Self {
        self.results = records.iter().map(ResultBlock::from).collect();
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// `phone_code` becomes `Phone Code`.
pub fn title_case(key: &str) -> String {
    key.split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub struct ReportRenderer {
    handlebars: Handlebars<'static>,
}

impl ReportRenderer {
    pub fn new() -> Result<Self, ReportError> {
        let mut handlebars = Handlebars::new();
        handlebars
            .register_template_string(REPORT, REPORT_TEMPLATE)
            .map_err(Box::new)?;

        Ok(Self { handlebars })
    }

    pub fn render(&self, view: &ReportView) -> Result<String, ReportError> {
        Ok(self.handlebars.render(REPORT, view)?)
    }
}
