use anyhow::Result;
use project_pricer::core::report::{render_csv, render_text};
use project_pricer::utils::validation::Validate;
use project_pricer::{
    render, CalculatorState, OutputFormat, PricingEngine, PricingError, PricingSource, TomlConfig,
};
use tempfile::TempDir;

#[test]
fn test_toml_file_through_engine_to_json() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("quote.toml");

    std::fs::write(
        &config_path,
        r#"
[inputs]
hours_per_week = 30
weeks_per_year = 40
annual_income_goal = 120000
hours_for_project = 10
project_expenses = 0
number_of_assets = 2
project_price = 5000

[variables]
client_pps = 1.0
client_sales = 0.0
client_license = 0.0
delivery_speed = 0.0
delivery_risk = 0.0
delivery_quality = 0.0
"#,
    )?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;

    let engine = PricingEngine::new(config);
    let result = engine.run()?;

    // 120000 / 1200 = 100 per hour, 10 hours, ratio 1.0
    assert_eq!(result.outputs.workable_hours, 1200.0);
    assert_eq!(result.outputs.worth_per_hour, 100.0);
    assert_eq!(result.outputs.base_labor_cost, 1000.0);
    assert_eq!(result.outputs.project_cost, 1000.0);
    assert_eq!(result.outputs.price_per_asset, 500.0);
    assert_eq!(
        result.outputs.comparisons.project_vs_set_price_diff,
        Some(-4000.0)
    );
    assert_eq!(result.outputs.comparisons.variable_vs_base_percentage, Some(0.0));

    let json = render(&result, OutputFormat::Json)?;
    let value: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(value["outputs"]["pricePerAsset"], 500.0);
    assert_eq!(value["outputs"]["formatted"]["projectCost"], "$1,000.00");
    assert_eq!(
        value["outputs"]["individualVariables"]["clientPps"]["percentage"],
        100.0
    );
    assert_eq!(value["variables"]["clientPps"], 1.0);

    Ok(())
}

#[test]
fn test_invalid_file_values_stop_the_engine() -> Result<()> {
    let config = TomlConfig::from_toml_str(
        r#"
[inputs]
hours_per_week = 0
"#,
    )?;
    assert!(config.validate().is_ok());

    let err = PricingEngine::new(config).run().unwrap_err();
    assert_eq!(err.to_string(), "Hours per week must be greater than 0");
    Ok(())
}

#[test]
fn test_skip_validation_surfaces_arithmetic_error() -> Result<()> {
    let config = TomlConfig::from_toml_str(
        r#"
[inputs]
number_of_assets = 0

[report]
skip_validation = true
"#,
    )?;
    let validate = !config.skip_validation();
    let err = PricingEngine::with_validation(config, validate)
        .run()
        .unwrap_err();
    assert!(matches!(err, PricingError::DivisionByZero { .. }));
    Ok(())
}

#[test]
fn test_reports_written_to_disk() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = TomlConfig::from_toml_str("")?;
    let result = PricingEngine::new(config).run()?;

    let text_path = temp_dir.path().join("quote.txt");
    std::fs::write(&text_path, render_text(&result))?;
    let text = std::fs::read_to_string(&text_path)?;
    assert!(text.contains("$11,833.33 ÷ 10 = $1,183.33/asset"));

    let csv_path = temp_dir.path().join("quote.csv");
    std::fs::write(&csv_path, render_csv(&result)?)?;
    let mut reader = csv::Reader::from_path(&csv_path)?;
    let items: Vec<String> = reader
        .records()
        .map(|r| r.map(|record| record[0].to_string()))
        .collect::<std::result::Result<_, _>>()?;
    assert_eq!(items.len(), 11);
    assert_eq!(items[0], "Client PPS");
    assert_eq!(items[10], "Price per asset");

    Ok(())
}

#[test]
fn test_calculator_state_from_toml_source() -> Result<()> {
    let config = TomlConfig::from_toml_str(
        r#"
[inputs]
hours_per_week = 0
"#,
    )?;
    let snapshot = config.snapshot();
    let state = CalculatorState::evaluate(&snapshot.inputs, &snapshot.variables, &snapshot.extras);
    assert!(!state.is_valid);
    assert_eq!(
        state.error.as_deref(),
        Some("Division by zero: Workable hours cannot be zero")
    );
    Ok(())
}
