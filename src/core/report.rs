use crate::core::format::{
    format_currency, format_optional_currency, format_optional_percentage, format_percentage,
};
use crate::domain::CalculationResult;
use crate::utils::error::{PricingError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

pub fn render(result: &CalculationResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Json => render_json(result),
        OutputFormat::Csv => render_csv(result),
    }
}

pub fn render_text(result: &CalculationResult) -> String {
    let outputs = &result.outputs;
    let comparisons = &outputs.comparisons;

    let mut lines = vec!["Project Pricing".to_string()];
    lines.extend(
        outputs
            .breakdown
            .lines()
            .iter()
            .map(|(label, line)| format!("  {:<12} {}", label, line)),
    );

    lines.push(String::new());
    lines.push("Variables".to_string());
    lines.extend(outputs.individual_variables.iter().map(|(kind, value)| {
        format!(
            "  {:<18} {:>8} {:>14}",
            kind.label(),
            format_percentage(value.percentage),
            format_currency(value.amount)
        )
    }));

    lines.push(String::new());
    lines.push("Comparisons".to_string());
    let rows = [
        (
            "Variables vs base",
            format_optional_percentage(comparisons.variable_vs_base_percentage),
        ),
        (
            "Effective hourly rate",
            format_optional_currency(comparisons.effective_hourly_rate),
        ),
        (
            "Target vs current rate",
            format_currency(comparisons.target_vs_current_rate_diff),
        ),
        ("Posts revenue", outputs.formatted.posts_revenue.clone()),
        (
            "Project vs set price",
            format_optional_currency(comparisons.project_vs_set_price_diff),
        ),
    ];
    lines.extend(
        rows.iter()
            .map(|(label, value)| format!("  {:<24} {}", label, value)),
    );

    lines.push(String::new());
    lines.push(format!(
        "Price per asset: {}",
        outputs.formatted.price_per_asset
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Writes a rendered report, creating missing parent directories.
pub fn write_report(path: &Path, report: &str) -> Result<()> {
    let write_error = |source| PricingError::OutputWriteError {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, report).map_err(write_error)?;

    tracing::info!("📁 Report saved to: {}", path.display());
    Ok(())
}

pub fn render_json(result: &CalculationResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// One row per variable followed by the cost summary rows.
pub fn render_csv(result: &CalculationResult) -> Result<String> {
    let outputs = &result.outputs;
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(["item", "percentage", "amount"])?;
    for (kind, value) in outputs.individual_variables.iter() {
        writer.write_record([
            kind.label().to_string(),
            value.percentage.to_string(),
            value.amount.to_string(),
        ])?;
    }

    let summary = [
        ("Base labor cost", outputs.base_labor_cost),
        ("Total labor cost", outputs.total_labor_cost),
        ("Project expenses", result.inputs.project_expenses),
        ("Project cost", outputs.project_cost),
        ("Price per asset", outputs.price_per_asset),
    ];
    for (label, amount) in summary {
        writer.write_record([label.to_string(), String::new(), amount.to_string()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| PricingError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| {
        PricingError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}
