use crate::profiles::{CareerProfile, MbtiType};
use sha2::{Digest, Sha256};

/// Shown in place of an interest the student left blank.
pub const INTEREST_PLACEHOLDER: &str = "not provided";

const LIST_SEPARATOR: &str = ", ";

/// Plain-text report for one lookup, ready to be saved as a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextReport {
    type_code: MbtiType,
    body: String,
}

impl TextReport {
    /// Serializes the profile in the fixed six-line layout:
    /// header, interest, traits, careers, study, activities.
    pub fn build(profile: &CareerProfile, interest: Option<&str>) -> Self {
        let mut body = String::new();
        push_line(
            &mut body,
            "MBTI",
            &format!("{} | {}", profile.type_code, profile.display_title),
        );
        let interest = interest
            .map(|text| single_line(text).trim().to_string())
            .filter(|text| !text.is_empty());
        push_line(
            &mut body,
            "Interest",
            interest.as_deref().unwrap_or(INTEREST_PLACEHOLDER),
        );
        push_line(&mut body, "Traits", &profile.traits.join(LIST_SEPARATOR));
        push_line(
            &mut body,
            "Careers",
            &profile.career_names().collect::<Vec<_>>().join(LIST_SEPARATOR),
        );
        push_line(&mut body, "Study", &profile.study_subjects.join(LIST_SEPARATOR));
        push_line(&mut body, "Activities", &profile.activities.join(LIST_SEPARATOR));
        Self {
            type_code: profile.type_code,
            body,
        }
    }

    pub fn type_code(&self) -> MbtiType {
        self.type_code
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.body.as_bytes()
    }

    /// Suggested download name, e.g. `mbti_INTJ_career_report.txt`.
    pub fn file_name(&self) -> String {
        suggested_file_name(self.type_code)
    }

    /// Hex-encoded SHA-256 of the report body.
    pub fn sha256(&self) -> String {
        let digest = Sha256::digest(self.body.as_bytes());
        format!("{:x}", digest)
    }
}

pub fn suggested_file_name(code: MbtiType) -> String {
    format!("mbti_{code}_career_report.txt")
}

/// Replaces each run of control characters (line breaks, tabs) with one space.
pub fn single_line(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    let mut in_break = false;
    for ch in text.chars() {
        if ch.is_control() {
            if !in_break {
                folded.push(' ');
                in_break = true;
            }
        } else {
            folded.push(ch);
            in_break = false;
        }
    }
    folded
}

fn push_line(body: &mut String, label: &str, value: &str) {
    body.push_str(label);
    body.push_str(": ");
    body.push_str(value);
    body.push('\n');
}
