//! Presentation and export of a resolved career profile.

pub mod text_export;
pub mod view;
pub mod writer;

pub use text_export::{single_line, suggested_file_name, TextReport, INTEREST_PLACEHOLDER};
pub use view::{render_terminal, ProfileView};
pub use writer::{ExportRecord, ReportWriter};
