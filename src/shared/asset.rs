//! `neosdb://` asset URL helpers.

use crate::network::ASSETS_URL;

const NEOSDB_SCHEME: &str = "neosdb:";

/// Extract the content signature from a `neosdb:///{signature}.{ext}` URL.
pub fn neosdb_signature(url: &str) -> Option<&str> {
    let rest = url.strip_prefix(NEOSDB_SCHEME)?.trim_start_matches('/');
    let signature = rest.split('.').next()?;
    if signature.is_empty() {
        None
    } else {
        Some(signature)
    }
}

/// Convert a `neosdb://` asset URL to its public HTTPS location.
///
/// Returns `None` when the URL is not a `neosdb` URL.
pub fn neosdb_to_http(url: &str) -> Option<String> {
    neosdb_signature(url).map(|signature| format!("{}/{}", ASSETS_URL, signature))
}
