use super::IntegrationHarness;
use anyhow::Result;
use careerspark::workspace::{load_or_default, save, AppConfig};
use careerspark::MbtiType;

#[test]
fn saved_display_settings_shape_the_view() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut config = AppConfig::default();
    config.display.trait_delimiter = " | ".into();
    config.display.show_glyphs = false;
    save(harness.paths(), &config)?;

    let loaded = load_or_default(harness.paths())?;
    let session = harness.session_with(loaded);
    let outcome = session.lookup(MbtiType::Isfj, None)?;
    assert_eq!(outcome.view.traits_line, "배려 | 책임 | 세심함 | 협력");
    assert_eq!(outcome.view.careers[0], "간호/보건");
    Ok(())
}

#[test]
fn display_settings_do_not_change_the_export() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut config = AppConfig::default();
    config.display.trait_delimiter = " / ".into();
    config.display.show_glyphs = false;
    let plain = harness.session_with(config).lookup(MbtiType::Estj, None)?;
    let fancy = harness.session().lookup(MbtiType::Estj, None)?;
    assert_ne!(plain.view, fancy.view);
    assert_eq!(plain.report, fancy.report);
    Ok(())
}
