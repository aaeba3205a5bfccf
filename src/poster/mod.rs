/// Poster loading module
///
/// This module plays the host-environment role for the resolver: it turns
/// a candidate source identifier into a load outcome.
///
/// - `loader.rs` - async source-to-pixels loading and the error taxonomy
/// - `placeholder.rs` - the built-in placeholder source and its pixels

pub mod loader;
pub mod placeholder;
