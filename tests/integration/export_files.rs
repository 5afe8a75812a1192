use super::IntegrationHarness;
use anyhow::{Context, Result};
use careerspark::workspace::AppConfig;
use careerspark::MbtiType;
use std::fs;

#[test]
fn export_writes_named_report() -> Result<()> {
    let harness = IntegrationHarness::new();
    let session = harness.session();
    let record = session.export(MbtiType::Infp, Some("웹툰 작가"), false)?;

    assert_eq!(
        record.path,
        harness.paths().exports_dir.join("mbti_INFP_career_report.txt")
    );
    let written = fs::read_to_string(&record.path).context("exported report missing")?;
    let expected = session.lookup(MbtiType::Infp, Some("웹툰 작가"))?.report;
    assert_eq!(written, expected.body());
    assert_eq!(record.sha256, expected.sha256());
    assert_eq!(record.bytes, written.len());
    Ok(())
}

#[test]
fn second_export_requires_force() -> Result<()> {
    let harness = IntegrationHarness::new();
    let session = harness.session();
    let first = session.export(MbtiType::Estp, None, false)?;
    let baseline = fs::read_to_string(&first.path)?;

    let outcome = session.export(MbtiType::Estp, Some("소방관"), false);
    assert!(outcome.is_err(), "Expected overwrite guard");
    let message = format!("{}", outcome.err().unwrap());
    assert!(message.contains("already exists"), "got {message}");
    assert_eq!(baseline, fs::read_to_string(&first.path)?);

    let forced = session.export(MbtiType::Estp, Some("소방관"), true)?;
    assert!(fs::read_to_string(&forced.path)?.contains("Interest: 소방관"));
    Ok(())
}

#[test]
fn configured_directory_and_overwrite_are_honoured() -> Result<()> {
    let harness = IntegrationHarness::new();
    let target = harness.workspace_path().join("shared-drive");
    let mut config = AppConfig::default();
    config.export.directory = Some(target.clone());
    config.export.overwrite_existing = true;
    let session = harness.session_with(config);

    session.export(MbtiType::Esfp, None, false)?;
    let record = session.export(MbtiType::Esfp, Some("배우"), false)?;
    assert_eq!(record.path, target.join("mbti_ESFP_career_report.txt"));
    assert!(!harness
        .paths()
        .exports_dir
        .join("mbti_ESFP_career_report.txt")
        .exists());
    Ok(())
}
