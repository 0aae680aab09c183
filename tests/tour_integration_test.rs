use anyhow::Result;
use fn_tour::core::{ConfigProvider, OutputFormat};
use fn_tour::utils::validation::Validate;
use fn_tour::{TomlConfig, TourEngine, TourError};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn test_tour_from_config_file() -> Result<()> {
    let file = write_config(
        r#"
[factorial]
strategy = "recursive"

[output]
format = "json"

[tour]
factorial_input = 6
greet_name = "Gopher"
add = [20, 22]
sum = []
"#,
    )?;

    let config = TomlConfig::from_file(file.path())?;
    config.validate()?;
    assert_eq!(config.output_format(), OutputFormat::Json);

    let report = TourEngine::new(config).run()?;
    let outputs: Vec<String> = report.evaluations.iter().map(|e| e.render_text()).collect();
    assert_eq!(
        outputs,
        vec![
            "Jay",
            "Hello World Gopher",
            "720",
            "42",
            "0",
            "I am an anonymous function"
        ]
    );

    Ok(())
}

#[test]
fn test_tour_report_serializes_to_json() -> Result<()> {
    let report = TourEngine::new(TomlConfig::default()).run()?;
    let json: serde_json::Value = serde_json::to_value(&report)?;

    let evaluations = json["evaluations"].as_array().expect("evaluations array");
    assert_eq!(evaluations.len(), 6);
    assert_eq!(evaluations[2]["step"], "factorial");
    assert_eq!(evaluations[2]["input"], 5);
    assert_eq!(evaluations[2]["output"], 120);
    assert_eq!(evaluations[4]["input"], serde_json::json!([1, 2, 3, 4]));
    assert!(evaluations[0]["evaluated_at"].is_string());

    Ok(())
}

#[test]
fn test_tour_fails_when_factorial_exceeds_limit() -> Result<()> {
    let file = write_config("[factorial]\nmax_input = 3\n")?;
    let config = TomlConfig::from_file(file.path())?;
    config.validate()?;

    let err = TourEngine::new(config).run().unwrap_err();
    assert!(matches!(err, TourError::InvalidArgument { .. }));
    assert!(err.user_friendly_message().contains("configured limit of 3"));

    Ok(())
}

#[test]
fn test_missing_config_file_is_io_error() {
    let err = TomlConfig::from_file("/nonexistent/fn-tour.toml").unwrap_err();
    assert!(matches!(err, TourError::IoError(_)));
}
