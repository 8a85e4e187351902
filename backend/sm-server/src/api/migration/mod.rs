pub mod create_export_request;
pub mod create_export_response;
pub mod export_content_response;
pub mod migration;
pub mod nonce_response;
