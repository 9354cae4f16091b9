use photo_api::{SearchResult, thumbnail_url};

pub const MISSING_FIELD: &str = "-";

/// View model for one photo in the results list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoCard {
    pub thumbnail_url: Option<String>,
    pub object_key: String,
    pub bucket: String,
    pub created: String,
    pub labels: Vec<String>,
}

/// Build one card per result, in input order. Missing fields show as "-";
/// a result without bucket or key still gets a card, just no thumbnail.
#[must_use]
pub fn build_cards(results: &[SearchResult]) -> Vec<PhotoCard> {
    results
        .iter()
        .map(|result| PhotoCard {
            thumbnail_url: thumbnail_url(result),
            object_key: field_or_placeholder(result.object_key.as_deref()),
            bucket: field_or_placeholder(result.bucket.as_deref()),
            created: field_or_placeholder(result.created_timestamp.as_deref()),
            labels: result.labels.clone(),
        })
        .collect()
}

fn field_or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => MISSING_FIELD.to_string(),
    }
}
