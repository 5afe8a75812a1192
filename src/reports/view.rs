use crate::profiles::{CareerProfile, MbtiType};
use crate::reports::text_export::INTEREST_PLACEHOLDER;
use crate::workspace::DisplaySettings;

const CLOSING_TIP: &str =
    "Tip: these suggestions are a starting point, not a verdict. Try the activities and see what sticks.";

/// Structured fields for on-screen presentation of a resolved profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub type_code: MbtiType,
    pub title: String,
    pub traits_line: String,
    pub interest: String,
    pub careers: Vec<String>,
    pub study_subjects: Vec<String>,
    pub activities: Vec<String>,
}

impl ProfileView {
    pub fn build(
        profile: &CareerProfile,
        interest: Option<&str>,
        settings: &DisplaySettings,
    ) -> Self {
        let careers = profile
            .careers
            .iter()
            .map(|career| {
                if settings.show_glyphs {
                    format!("{} {}", career.glyph, career.name)
                } else {
                    career.name.clone()
                }
            })
            .collect();
        Self {
            type_code: profile.type_code,
            title: profile.display_title.clone(),
            traits_line: profile.traits.join(settings.trait_delimiter.as_str()),
            interest: interest.unwrap_or(INTEREST_PLACEHOLDER).to_string(),
            careers,
            study_subjects: profile.study_subjects.clone(),
            activities: profile.activities.clone(),
        }
    }
}

/// Lays the view out as plain terminal text.
pub fn render_terminal(view: &ProfileView) -> String {
    let mut out = String::new();
    out.push_str(&format!("== {} ==\n", view.title));
    out.push_str(&format!("{}\n", view.traits_line));
    out.push_str(&format!("Interest: {}\n", view.interest));
    push_section(&mut out, "Careers", &view.careers);
    push_section(&mut out, "Study", &view.study_subjects);
    push_section(&mut out, "Activities", &view.activities);
    out.push('\n');
    out.push_str(CLOSING_TIP);
    out.push('\n');
    out
}

fn push_section(out: &mut String, heading: &str, items: &[String]) {
    out.push('\n');
    out.push_str(heading);
    out.push('\n');
    for item in items {
        out.push_str("  - ");
        out.push_str(item);
        out.push('\n');
    }
}
