use super::IntegrationHarness;
use anyhow::Result;
use careerspark::orchestration::{EventType, OrchestrationLog};
use careerspark::MbtiType;
use std::fs;

#[test]
fn lookups_and_exports_are_logged_in_order() -> Result<()> {
    let harness = IntegrationHarness::new();
    let session = harness.session();
    session.lookup(MbtiType::Entj, None)?;
    let record = session.export(MbtiType::Entj, Some("CEO"), false)?;

    let events = session.history()?;
    let kinds: Vec<EventType> = events.iter().map(|e| e.event_type).collect();
    assert_eq!(kinds, [EventType::ProfileResolved, EventType::ReportExported]);
    assert_eq!(events[0].details["type_code"], "ENTJ");
    assert_eq!(events[0].details["interest_provided"], false);
    assert_eq!(events[1].details["sha256"], record.sha256.as_str());
    assert_eq!(events[1].details["interest_provided"], true);
    assert_eq!(
        events[1].details["file_name"],
        "mbti_ENTJ_career_report.txt"
    );
    Ok(())
}

#[test]
fn interest_text_never_reaches_the_log() -> Result<()> {
    let harness = IntegrationHarness::new();
    let session = harness.session();
    let secret = "우주비행사가 꿈이에요";
    session.lookup(MbtiType::Intp, Some(secret))?;
    session.export(MbtiType::Intp, Some(secret), false)?;

    let log = OrchestrationLog::for_workspace(harness.paths());
    let raw = fs::read_to_string(log.events_path())?;
    assert_eq!(raw.lines().count(), 2);
    assert!(!raw.contains(secret));
    Ok(())
}

#[test]
fn empty_workspace_has_no_history() -> Result<()> {
    let harness = IntegrationHarness::new();
    assert!(harness.session().history()?.is_empty());
    Ok(())
}

#[test]
fn unwritable_log_fails_the_lookup() -> Result<()> {
    let harness = IntegrationHarness::new();
    let logs_dir = harness.paths().logs_dir.clone();
    fs::remove_dir_all(&logs_dir)?;
    fs::write(&logs_dir, "not a directory")?;

    let outcome = harness.session().lookup(MbtiType::Infj, None);
    assert!(outcome.is_err(), "Expected the log append to fail");
    let message = format!("{}", outcome.err().unwrap());
    assert!(message.contains("activity log"), "got {message}");
    Ok(())
}
