use crate::PhotoCard;

/// Presentation port. Controllers emit state transitions through this trait;
/// an adapter (console, GUI, test recorder) decides how to show them.
pub trait GalleryView {
    /// Headline above the results area.
    fn set_search_status(&mut self, text: &str);

    /// Error-detail surface shared by both flows. Empty text clears it.
    fn set_error_detail(&mut self, text: &str);

    /// Replace the rendered cards with a new set, in order.
    fn show_cards(&mut self, cards: Vec<PhotoCard>);

    /// Remove all rendered cards.
    fn clear_cards(&mut self);

    fn set_upload_status(&mut self, text: &str);

    /// The staged file and the labels text should be cleared.
    fn reset_upload_form(&mut self);
}
