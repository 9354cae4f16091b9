use crate::PhotoApiError;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

/// One indexed photo as returned by the search endpoint.
///
/// Every field is optional: documents indexed before a pipeline change can
/// miss any of them, and rendering has to survive that.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(default)]
    pub object_key: Option<String>,
    #[serde(default)]
    pub bucket: Option<String>,
    #[serde(default)]
    pub created_timestamp: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Body of a successful search response. `results` may be absent or null,
/// both mean the same as an empty array.
#[derive(Debug, Deserialize, Default)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Option<Vec<SearchResult>>,
}

impl SearchResponse {
    #[must_use]
    pub fn into_results(self) -> Vec<SearchResult> {
        self.results.unwrap_or_default()
    }
}

/// A photo staged for upload, discarded once the request completes.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    /// File name as selected, not yet URL-encoded.
    pub file_name: String,
    /// Declared MIME type, if the file reports one.
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl PhotoUpload {
    /// Stage a file from disk, guessing the content type from the extension.
    pub async fn from_path(path: &Path) -> Result<Self, PhotoApiError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content_type = mime_guess::from_path(path)
            .first()
            .map(|mime| mime.essence_str().to_string());
        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    /// Declared MIME type, falling back to `image/jpeg`.
    #[must_use]
    pub fn content_type_or_default(&self) -> &str {
        self.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE)
    }
}
