use crate::{ConfigurationExport, ExportMetadata, SiteContent};

use serde::{Deserialize, Serialize};

/// One export run, serialized as a single JSON file.
///
/// `wordpress` is present iff the export type includes content and
/// `configuration` iff it includes configuration. Absent sections are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wordpress: Option<SiteContent>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<ConfigurationExport>,

    pub metadata: ExportMetadata,
}

impl ExportDocument {
    /// Assemble a document, dropping sections the metadata's export type excludes
    pub fn assemble(
        metadata: ExportMetadata,
        content: Option<SiteContent>,
        configuration: Option<ConfigurationExport>,
    ) -> Self {
        let export_type = metadata.export_type;

        Self {
            wordpress: content.filter(|_| export_type.includes_content()),
            configuration: configuration.filter(|_| export_type.includes_configuration()),
            metadata,
        }
    }
}
