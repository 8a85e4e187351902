pub mod configuration_export;
pub mod export_document;
pub mod export_file_info;
pub mod export_file_name;
pub mod export_metadata;
pub mod export_outcome;
pub mod export_type;
pub mod media_record;
pub mod post_record;
pub mod site_content;
pub mod term_ref;
pub mod user_record;
