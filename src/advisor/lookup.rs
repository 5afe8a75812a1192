//! Select → Resolve → Render/Export, one lookup at a time.

use crate::profiles::{CareerProfile, MbtiType, ProfileTable};
use crate::reports::{single_line, ProfileView, TextReport};
use crate::workspace::DisplaySettings;

/// A chosen type code plus the optional free-text interest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    code: MbtiType,
    interest: Option<String>,
}

impl Selection {
    /// Blank or whitespace-only interests are stored as absent.
    pub fn new(code: MbtiType, interest: Option<&str>) -> Self {
        Self {
            code,
            interest: normalize_interest(interest),
        }
    }

    pub fn code(&self) -> MbtiType {
        self.code
    }

    pub fn interest(&self) -> Option<&str> {
        self.interest.as_deref()
    }

    pub fn resolve(self, table: &ProfileTable) -> ResolvedLookup<'_> {
        ResolvedLookup {
            profile: table.resolve(self.code),
            selection: self,
        }
    }
}

/// A selection bound to its profile record.
#[derive(Debug, Clone)]
pub struct ResolvedLookup<'t> {
    selection: Selection,
    profile: &'t CareerProfile,
}

impl<'t> ResolvedLookup<'t> {
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn profile(&self) -> &'t CareerProfile {
        self.profile
    }

    pub fn render(&self, settings: &DisplaySettings) -> ProfileView {
        ProfileView::build(self.profile, self.selection.interest(), settings)
    }

    pub fn export(&self) -> TextReport {
        TextReport::build(self.profile, self.selection.interest())
    }
}

/// Folds line breaks and other control characters into single spaces, then
/// trims; blank input becomes `None`.
pub fn normalize_interest(raw: Option<&str>) -> Option<String> {
    raw.map(single_line)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
