use gallery_ui::{GalleryView, PhotoCard};

/// Renders view transitions to the terminal. Status and error lines print as
/// they arrive; clearing is a no-op in a scrolling terminal.
pub struct ConsoleView;

impl GalleryView for ConsoleView {
    fn set_search_status(&mut self, text: &str) {
        if !text.is_empty() {
            println!("{text}");
        }
    }

    fn set_error_detail(&mut self, text: &str) {
        if !text.is_empty() {
            eprintln!("{text}");
        }
    }

    fn show_cards(&mut self, cards: Vec<PhotoCard>) {
        for card in cards {
            println!();
            println!("  Key:     {}", card.object_key);
            println!("  Bucket:  {}", card.bucket);
            println!("  Created: {}", card.created);
            if let Some(url) = &card.thumbnail_url {
                println!("  Thumb:   {url}");
            }
            if !card.labels.is_empty() {
                println!("  Tags:    {}", card.labels.join(", "));
            }
        }
    }

    fn clear_cards(&mut self) {}

    fn set_upload_status(&mut self, text: &str) {
        if !text.is_empty() {
            println!("{text}");
        }
    }

    fn reset_upload_form(&mut self) {}
}
