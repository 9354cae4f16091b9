use crate::{GalleryView, build_cards};
use photo_api::{PhotoApiError, PhotoBackend};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, error};

/// Drives the search flow: validate the query, call the backend, translate
/// the outcome into view transitions. Never returns an error to the caller;
/// every failure path ends in a status update.
pub struct SearchController<B> {
    backend: B,
    generation: AtomicU64,
}

impl<B: PhotoBackend> SearchController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            generation: AtomicU64::new(0),
        }
    }

    /// Run one search against the view.
    ///
    /// Each invocation takes a fresh generation; a response resolving after
    /// a newer search has started is dropped without touching the view, so a
    /// stale response cannot overwrite newer results.
    pub async fn search<V: GalleryView + ?Sized>(&self, query: &str, view: &mut V) {
        view.set_error_detail("");

        let query = query.trim();
        if query.is_empty() {
            view.set_search_status("Please enter a query.");
            view.clear_cards();
            return;
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        view.set_search_status(&format!("Searching for \"{query}\"…"));
        view.clear_cards();

        let outcome = self.backend.search(query).await;
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(query, "dropping stale search response");
            return;
        }

        match outcome {
            Ok(results) if results.is_empty() => {
                view.set_search_status(&format!("No photos found for \"{query}\"."));
                view.clear_cards();
            }
            Ok(results) => {
                view.set_search_status(&format!(
                    "Found {} photo(s) for \"{query}\".",
                    results.len()
                ));
                view.show_cards(build_cards(&results));
            }
            Err(PhotoApiError::UnexpectedStatus { status, body }) => {
                error!(%status, %body, "search request rejected");
                view.set_search_status("Search failed.");
                view.set_error_detail(&format!(
                    "Search failed ({}). See logs for details.",
                    status.as_u16()
                ));
            }
            Err(err) => {
                error!(error = %err, "search request failed");
                view.set_search_status("Search error.");
                view.set_error_detail("Search error – check logs.");
            }
        }
    }
}
