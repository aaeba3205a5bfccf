/// Poster source loader
///
/// Turns one candidate source identifier into pixels. Supported sources:
/// the built-in placeholder, `file://` URLs, and bare filesystem paths.
/// Anything with another URL scheme fails with `UnsupportedScheme` - this
/// application has no network layer, so remote-looking sources simply feed
/// the resolver's fallback machinery.
///
/// Every failure is reported as a `LoadError` value inside the load-outcome
/// message; nothing in here panics or surfaces raw detail to the UI.

use iced::widget::image::Handle;
use thiserror::Error;
use tokio::task;

use crate::poster::placeholder;

/// The single error kind the resolver ever sees: a source load failure,
/// split only for diagnostics
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("poster not found: {0}")]
    NotFound(String),
    #[error("failed to read {path}: {reason}")]
    Io { path: String, reason: String },
    #[error("failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },
    #[error("unsupported poster source scheme: {0}")]
    UnsupportedScheme(String),
}

/// Load a poster source and decode it to a renderable handle.
///
/// Decoding runs on a blocking thread because `image` is CPU-intensive,
/// mirroring how RAW decoding is kept off the UI thread elsewhere in iced
/// applications.
pub async fn load_poster(source: String) -> Result<Handle, LoadError> {
    if source == placeholder::PLACEHOLDER_SOURCE {
        return Ok(placeholder::placeholder_handle());
    }

    let path = match source.split_once("://") {
        Some(("file", rest)) => rest.to_string(),
        Some(_) => return Err(LoadError::UnsupportedScheme(source)),
        None => source.clone(),
    };

    let bytes = tokio::fs::read(&path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound(path.clone())
        } else {
            LoadError::Io {
                path: path.clone(),
                reason: e.to_string(),
            }
        }
    })?;

    task::spawn_blocking(move || decode_poster(&path, bytes))
        .await
        .map_err(|e| LoadError::Decode {
            path: source,
            reason: format!("task join error: {}", e),
        })?
}

/// Blocking decode of poster bytes to an RGBA handle
fn decode_poster(path: &str, bytes: Vec<u8>) -> Result<Handle, LoadError> {
    let decoded = image::load_from_memory(&bytes).map_err(|e| LoadError::Decode {
        path: path.to_string(),
        reason: e.to_string(),
    })?;

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    println!("🖼️  Decoded poster {} ({}x{})", path, width, height);

    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

/// Make a retry request distinguishable from the first attempt.
///
/// Query-capable (http/https-shaped) sources get the attempt number as a
/// cache-busting query parameter. For filesystem paths the fresh read is
/// itself the re-request, so they pass through unchanged. Whether busting
/// actually helps depends on the source's cacheability; it is a policy
/// knob, not a recovery guarantee.
pub fn cache_busted(source: &str, retries: u32) -> String {
    if retries == 0 {
        return source.to_string();
    }

    let query_capable = source.starts_with("http://") || source.starts_with("https://");
    if !query_capable {
        return source.to_string();
    }

    let separator = if source.contains('?') { '&' } else { '?' };
    format!("{}{}retry={}", source, separator, retries)
}
