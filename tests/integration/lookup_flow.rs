use super::IntegrationHarness;
use anyhow::Result;
use careerspark::{MbtiType, ProfileTable, INTEREST_PLACEHOLDER};

#[test]
fn intj_lookup_without_interest() -> Result<()> {
    let harness = IntegrationHarness::new();
    let session = harness.session();
    let outcome = session.lookup(MbtiType::Intj, Some(""))?;

    assert!(outcome.view.title.contains("전략가"));
    assert!(!outcome.view.careers.is_empty());
    let body = outcome.report.body();
    assert!(body.contains(INTEREST_PLACEHOLDER));
    let careers = ProfileTable::shared()
        .resolve(MbtiType::Intj)
        .career_names()
        .collect::<Vec<_>>()
        .join(", ");
    assert!(
        body.lines().any(|line| line == format!("Careers: {careers}")),
        "Expected comma-joined careers line in {body}"
    );
    Ok(())
}

#[test]
fn enfp_lookup_with_interest() -> Result<()> {
    let harness = IntegrationHarness::new();
    let outcome = harness
        .session()
        .lookup(MbtiType::Enfp, Some("디자이너"))?;
    let interest_line = outcome
        .report
        .body()
        .lines()
        .nth(1)
        .expect("report has an interest line");
    assert_eq!(interest_line, "Interest: 디자이너");
    assert_eq!(outcome.view.interest, "디자이너");
    Ok(())
}

#[test]
fn omitted_and_empty_interest_export_identically() -> Result<()> {
    let harness = IntegrationHarness::new();
    let session = harness.session();
    for code in MbtiType::ALL {
        let omitted = session.lookup(code, None)?;
        let empty = session.lookup(code, Some("   "))?;
        assert_eq!(omitted.report.as_bytes(), empty.report.as_bytes());
        assert!(omitted
            .report
            .body()
            .contains(&format!("\nInterest: {INTEREST_PLACEHOLDER}\n")));
    }
    Ok(())
}

#[test]
fn independent_sessions_agree() -> Result<()> {
    let first = IntegrationHarness::new();
    let second = IntegrationHarness::new();
    let a = first.session().lookup(MbtiType::Istj, Some("회계사"))?;
    let b = second.session().lookup(MbtiType::Istj, Some("회계사"))?;
    assert_eq!(a.report, b.report);
    assert_eq!(a.view, b.view);
    assert_eq!(a.report.sha256(), b.report.sha256());
    Ok(())
}

#[test]
fn every_type_is_selectable() {
    let harness = IntegrationHarness::new();
    let types = harness.session().available_types();
    assert_eq!(types.len(), 16);
    for (code, profile) in types {
        assert_eq!(profile.type_code, code);
        assert!(profile.display_title.starts_with(code.as_str()));
    }
}
