use priority_capacity::config::{AnalysisParams, Scenario, Validate};
use anyhow::Result;

#[test]
fn test_load_reference_scenario() -> Result<()> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/reference_scenario.toml");
    let scenario = Scenario::load_from_file(path)?;

    assert_eq!(scenario.name.as_deref(), Some("Reference T-intersection"));
    assert_eq!(scenario.volumes.i2, 396);
    assert_eq!(scenario.volumes.i3, 567);
    assert_eq!(scenario.volumes.i4, 284);
    assert_eq!(scenario.volumes.i6, 6);
    assert_eq!(scenario.volumes.i7, 6);
    assert_eq!(scenario.volumes.i8, 401);
    Ok(())
}

#[test]
fn test_name_is_optional() -> Result<()> {
    let scenario = Scenario::from_toml(
        "[volumes]\ni2 = 1\ni3 = 2\ni4 = 3\ni6 = 4\ni7 = 5\ni8 = 6\n",
    )?;
    assert!(scenario.name.is_none());
    assert_eq!(scenario.volumes.i8, 6);
    Ok(())
}

#[test]
fn test_missing_volume_fails() {
    let result = Scenario::from_toml("[volumes]\ni2 = 1\ni3 = 2\ni4 = 3\ni6 = 4\ni7 = 5\n");
    assert!(result.is_err());
}

#[test]
fn test_negative_volume_fails() {
    let result = Scenario::from_toml("[volumes]\ni2 = -1\ni3 = 2\ni4 = 3\ni6 = 4\ni7 = 5\ni8 = 6\n");
    assert!(result.is_err());
}

#[test]
fn test_blank_name_fails() {
    let result = Scenario::from_toml(
        "name = \"  \"\n[volumes]\ni2 = 1\ni3 = 2\ni4 = 3\ni6 = 4\ni7 = 5\ni8 = 6\n",
    );
    assert!(result.is_err());
}

#[test]
fn test_missing_file_reports_path() {
    let err = Scenario::load_from_file("does/not/exist.toml").unwrap_err();
    assert!(format!("{:#}", err).contains("does/not/exist.toml"));
}

#[test]
fn test_default_params() -> Result<()> {
    let params = AnalysisParams::default();
    params.validate()?;

    assert_eq!(params.free_flow_speed, 50.0);
    assert_eq!(params.analysis_period, 3600.0);
    assert_eq!(params.priority_sign, 4);
    assert_eq!(params.design_capacity, 1800.0);
    Ok(())
}

#[test]
fn test_params_validation() {
    let invalid = [
        AnalysisParams { free_flow_speed: 0.0, ..AnalysisParams::default() },
        AnalysisParams { analysis_period: -1.0, ..AnalysisParams::default() },
        AnalysisParams { priority_sign: 3, ..AnalysisParams::default() },
        AnalysisParams { design_capacity: 0.0, ..AnalysisParams::default() },
    ];

    for params in invalid {
        assert!(params.validate().is_err(), "{:?}", params);
    }
}
