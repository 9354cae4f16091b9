use crate::{PhotoApiError, PhotoUpload, SearchResponse, SearchResult};
use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use urlencoding::encode;

pub const API_KEY_HEADER: &str = "x-api-key";
pub const CUSTOM_LABELS_HEADER: &str = "x-amz-meta-customLabels";

/// The two operations the gallery needs from the backend.
#[automock]
#[async_trait]
pub trait PhotoBackend {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, PhotoApiError>;
    async fn upload(
        &self,
        photo: PhotoUpload,
        custom_labels: &str,
    ) -> Result<(), PhotoApiError>;
}

/// HTTP client for the photo search/storage API.
///
/// No request timeout is configured; the transport default applies.
#[derive(Clone)]
pub struct PhotoApiClient {
    http: Client,
    api_base: String,
    api_key: Option<String>,
}

impl PhotoApiClient {
    #[must_use]
    pub fn new(api_base: &str, api_key: Option<String>) -> Self {
        Self {
            http: Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn search_url(&self, query: &str) -> String {
        format!("{}/search?q={}", self.api_base, encode(query))
    }

    fn upload_url(&self, file_name: &str) -> String {
        format!("{}/photos?objectKey={}", self.api_base, encode(file_name))
    }

    fn with_api_key(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        }
    }
}

#[async_trait]
impl PhotoBackend for PhotoApiClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, PhotoApiError> {
        let url = self.search_url(query);
        debug!(%url, "searching photos");
        let response = self.with_api_key(self.http.get(&url)).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PhotoApiError::UnexpectedStatus { status, body });
        }
        let body: SearchResponse = response.json().await?;
        Ok(body.into_results())
    }

    async fn upload(
        &self,
        photo: PhotoUpload,
        custom_labels: &str,
    ) -> Result<(), PhotoApiError> {
        let url = self.upload_url(&photo.file_name);
        let content_type = photo.content_type_or_default().to_string();
        debug!(%url, %content_type, "uploading photo");

        let request = self
            .http
            .put(&url)
            .header(CONTENT_TYPE, content_type)
            .header(CUSTOM_LABELS_HEADER, custom_labels)
            .body(photo.bytes);
        let response = self.with_api_key(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PhotoApiError::UnexpectedStatus { status, body });
        }
        Ok(())
    }
}

/// Public object URL for a result's thumbnail. Only correct when the backing
/// bucket allows public reads; there is no signed-URL support.
#[must_use]
pub fn thumbnail_url(result: &SearchResult) -> Option<String> {
    match (&result.bucket, &result.object_key) {
        (Some(bucket), Some(key)) => {
            Some(format!("https://{bucket}.s3.amazonaws.com/{}", encode(key)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> PhotoApiClient {
        PhotoApiClient::new("https://api.example.com/prod", None)
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = PhotoApiClient::new("https://api.example.com/prod/", None);
        assert_eq!(
            client.search_url("x"),
            "https://api.example.com/prod/search?q=x"
        );
    }

    #[test]
    fn search_url_percent_encodes_query() {
        assert_eq!(
            client().search_url("beach sunset"),
            "https://api.example.com/prod/search?q=beach%20sunset"
        );
    }

    #[test]
    fn upload_url_percent_encodes_file_name() {
        assert_eq!(
            client().upload_url("a b.png"),
            "https://api.example.com/prod/photos?objectKey=a%20b.png"
        );
    }

    #[test]
    fn thumbnail_url_needs_bucket_and_key() {
        let full = SearchResult {
            bucket: Some("my-bucket".to_string()),
            object_key: Some("a b.jpg".to_string()),
            ..SearchResult::default()
        };
        assert_eq!(
            thumbnail_url(&full).as_deref(),
            Some("https://my-bucket.s3.amazonaws.com/a%20b.jpg")
        );

        let no_bucket = SearchResult {
            object_key: Some("a.jpg".to_string()),
            ..SearchResult::default()
        };
        assert_eq!(thumbnail_url(&no_bucket), None);
        assert_eq!(thumbnail_url(&SearchResult::default()), None);
    }
}
