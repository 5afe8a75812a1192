//! Fixed MBTI → career profile table.
//!
//! The table is built once from the static catalog and shared read-only for
//! the lifetime of the process. Every [`MbtiType`] has exactly one entry, so
//! [`ProfileTable::resolve`] never fails.

mod catalog;

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// The sixteen selectable personality-type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MbtiType {
    Intj,
    Intp,
    Entj,
    Entp,
    Infj,
    Infp,
    Enfj,
    Enfp,
    Istj,
    Isfj,
    Estj,
    Esfj,
    Istp,
    Isfp,
    Estp,
    Esfp,
}

impl MbtiType {
    /// Canonical order used by selection lists.
    pub const ALL: [MbtiType; 16] = [
        MbtiType::Intj,
        MbtiType::Intp,
        MbtiType::Entj,
        MbtiType::Entp,
        MbtiType::Infj,
        MbtiType::Infp,
        MbtiType::Enfj,
        MbtiType::Enfp,
        MbtiType::Istj,
        MbtiType::Isfj,
        MbtiType::Estj,
        MbtiType::Esfj,
        MbtiType::Istp,
        MbtiType::Isfp,
        MbtiType::Estp,
        MbtiType::Esfp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MbtiType::Intj => "INTJ",
            MbtiType::Intp => "INTP",
            MbtiType::Entj => "ENTJ",
            MbtiType::Entp => "ENTP",
            MbtiType::Infj => "INFJ",
            MbtiType::Infp => "INFP",
            MbtiType::Enfj => "ENFJ",
            MbtiType::Enfp => "ENFP",
            MbtiType::Istj => "ISTJ",
            MbtiType::Isfj => "ISFJ",
            MbtiType::Estj => "ESTJ",
            MbtiType::Esfj => "ESFJ",
            MbtiType::Istp => "ISTP",
            MbtiType::Isfp => "ISFP",
            MbtiType::Estp => "ESTP",
            MbtiType::Esfp => "ESFP",
        }
    }
}

impl fmt::Display for MbtiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MbtiType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_uppercase();
        MbtiType::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == wanted)
            .ok_or_else(|| {
                let valid = MbtiType::ALL
                    .iter()
                    .map(MbtiType::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                anyhow!("Unknown MBTI type '{}'. Expected one of: {valid}", s.trim())
            })
    }
}

/// A suggested career and the glyph shown next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Career {
    pub name: String,
    pub glyph: String,
}

/// Per-type record of traits, careers, study areas and activities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerProfile {
    pub type_code: MbtiType,
    pub display_title: String,
    pub traits: Vec<String>,
    pub careers: Vec<Career>,
    pub study_subjects: Vec<String>,
    pub activities: Vec<String>,
}

impl CareerProfile {
    pub fn career_names(&self) -> impl Iterator<Item = &str> {
        self.careers.iter().map(|career| career.name.as_str())
    }
}

/// Immutable lookup table keyed by type code.
#[derive(Debug, Clone)]
pub struct ProfileTable {
    entries: BTreeMap<MbtiType, CareerProfile>,
}

static SHARED_TABLE: OnceLock<ProfileTable> = OnceLock::new();

impl ProfileTable {
    /// Builds a fresh table from the built-in catalog.
    pub fn seeded() -> Self {
        let entries = catalog::SEED_PROFILES
            .iter()
            .map(|seed| (seed.code, seed.to_profile()))
            .collect();
        Self { entries }
    }

    /// Process-wide table, constructed on first use.
    pub fn shared() -> &'static ProfileTable {
        SHARED_TABLE.get_or_init(ProfileTable::seeded)
    }

    pub fn resolve(&self, code: MbtiType) -> &CareerProfile {
        // The catalog covers every variant; `validate` and the unit tests pin that down.
        &self.entries[&code]
    }

    pub fn codes(&self) -> Vec<MbtiType> {
        MbtiType::ALL
            .iter()
            .copied()
            .filter(|code| self.entries.contains_key(code))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CareerProfile> {
        MbtiType::ALL
            .into_iter()
            .filter_map(move |code| self.entries.get(&code))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks coverage, key uniqueness and that no list field is empty.
    pub fn validate(&self) -> Result<()> {
        if catalog::SEED_PROFILES.len() != self.entries.len() {
            bail!(
                "Catalog lists {} profiles but only {} distinct type codes",
                catalog::SEED_PROFILES.len(),
                self.entries.len()
            );
        }
        for code in MbtiType::ALL {
            let profile = self
                .entries
                .get(&code)
                .ok_or_else(|| anyhow!("Missing career profile for {code}"))?;
            if profile.type_code != code {
                bail!("Profile stored under {code} claims type {}", profile.type_code);
            }
            let empty_field = if profile.traits.is_empty() {
                Some("traits")
            } else if profile.careers.is_empty() {
                Some("careers")
            } else if profile.study_subjects.is_empty() {
                Some("study_subjects")
            } else if profile.activities.is_empty() {
                Some("activities")
            } else {
                None
            };
            if let Some(field) = empty_field {
                bail!("Profile {code} has an empty {field} list");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_type_has_non_empty_lists() {
        let table = ProfileTable::seeded();
        assert_eq!(table.len(), 16);
        for profile in table.iter() {
            assert!(!profile.traits.is_empty(), "{} traits", profile.type_code);
            assert!(!profile.careers.is_empty(), "{} careers", profile.type_code);
            assert!(
                !profile.study_subjects.is_empty(),
                "{} study",
                profile.type_code
            );
            assert!(
                !profile.activities.is_empty(),
                "{} activities",
                profile.type_code
            );
        }
        table.validate().unwrap();
    }

    #[test]
    fn catalog_codes_are_unique() {
        let mut seen = HashSet::new();
        for seed in catalog::SEED_PROFILES {
            assert!(seen.insert(seed.code), "duplicate code {}", seed.code);
        }
        assert_eq!(seen.len(), MbtiType::ALL.len());
    }

    #[test]
    fn resolve_is_deterministic() {
        let table = ProfileTable::shared();
        for code in MbtiType::ALL {
            let first = table.resolve(code).clone();
            let second = table.resolve(code).clone();
            assert_eq!(first, second);
            assert_eq!(first, *ProfileTable::seeded().resolve(code));
        }
    }

    #[test]
    fn intj_is_the_strategist() {
        let profile = ProfileTable::shared().resolve(MbtiType::Intj);
        assert!(profile.display_title.contains("전략가"));
        assert_eq!(profile.careers[0].name, "데이터 과학자");
        assert_eq!(profile.careers[0].glyph, "📊");
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(" enfp ".parse::<MbtiType>().unwrap(), MbtiType::Enfp);
        assert_eq!("IsTj".parse::<MbtiType>().unwrap(), MbtiType::Istj);
        let err = "XXXX".parse::<MbtiType>().unwrap_err().to_string();
        assert!(err.contains("Unknown MBTI type 'XXXX'"));
        assert!(err.contains("INTJ"));
    }

    #[test]
    fn codes_follow_canonical_order() {
        let codes = ProfileTable::shared().codes();
        assert_eq!(codes, MbtiType::ALL.to_vec());
        assert_eq!(codes.first().map(MbtiType::as_str), Some("INTJ"));
        assert_eq!(codes.last().map(MbtiType::as_str), Some("ESFP"));
    }
}
