#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

mod cards;
mod search;
mod upload;
mod view;

pub use cards::*;
pub use search::*;
pub use upload::*;
pub use view::*;
