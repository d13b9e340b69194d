pub mod export;
pub mod json;
pub mod md;

use crate::error::ReadinessError;
use crate::types::report::Report;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &Report, format: OutputFormat) -> Result<String, ReadinessError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ReadinessError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
