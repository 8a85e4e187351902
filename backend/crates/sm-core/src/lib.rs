pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::configuration_export::{ConfigurationExport, ESSENTIAL_OPTIONS};
pub use models::export_document::ExportDocument;
pub use models::export_file_info::ExportFileInfo;
pub use models::export_file_name::ExportFileName;
pub use models::export_metadata::{EXPORT_FORMAT_VERSION, ExportMetadata};
pub use models::export_outcome::ExportOutcome;
pub use models::export_type::ExportType;
pub use models::media_record::MediaRecord;
pub use models::post_record::PostRecord;
pub use models::site_content::SiteContent;
pub use models::term_ref::TermRef;
pub use models::user_record::UserRecord;

pub use error_location::ErrorLocation;
