use serde::{Deserialize, Serialize};
use sha256::digest;

pub const SCHEMA_VERSION: i32 = 1;

/// Record of every artifact a build produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteManifest {
    #[serde(rename = "schemaVersion")]
    pub schema_version: i32,
    pub generator: Generator,
    #[serde(rename = "generatedAt")]
    pub generated_at: String,
    pub artifacts: Vec<Descriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generator {
    pub name: String,
    pub version: String,
}

/// Descriptor for a single written file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    pub path: String,
    #[serde(rename = "mediaType")]
    pub media_type: String,
    pub size: i64,
    pub digest: String,
}

/// `sha256:<hex>` digest of `bytes`
pub fn content_digest(bytes: &[u8]) -> String {
    format!("sha256:{}", digest(bytes))
}

impl SiteManifest {
    pub fn new(artifacts: Vec<Descriptor>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            generator: Generator {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            generated_at: chrono::Utc::now().to_rfc3339(),
            artifacts,
        }
    }

    pub fn find(&self, path: &str) -> Option<&Descriptor> {
        self.artifacts.iter().find(|d| d.path == path)
    }
}
