/// UI widget module
///
/// View-building helpers for the gallery:
/// - `nav.rs` - navigation bar between the two pages
/// - `poster.rs` - the poster surface (image or fallback panel)
/// - `card.rs` - one movie card (poster + details + like control)

pub mod card;
pub mod nav;
pub mod poster;
