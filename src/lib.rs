pub mod advisor;
pub mod orchestration;
pub mod profiles;
pub mod reports;
pub mod workspace;

// Re-export commonly used types for convenience.
pub use advisor::{AdvisorSession, LookupOutcome, Selection};
pub use profiles::{Career, CareerProfile, MbtiType, ProfileTable};
pub use reports::{ExportRecord, ProfileView, TextReport, INTEREST_PLACEHOLDER};
pub use workspace::{AppConfig, WorkspacePaths};
