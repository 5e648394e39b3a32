//! Base-address resolution for the node's RPC listener.

use reqwest::Url;
use tracing::warn;

/// Well-known port of the node's RPC listener.
pub const DEFAULT_PORT: u16 = 7076;

const DEFAULT_ENDPOINT: &str = "http://localhost:7076";

/// Resolve a base address to a full endpoint URL.
///
/// The scheme defaults to `http` and the port to [`DEFAULT_PORT`] when
/// omitted. A missing or malformed address falls back to
/// `http://localhost:7076`.
pub fn resolve_endpoint(base: Option<&str>) -> Url {
    let fallback = || Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL");

    let Some(base) = base else {
        return fallback();
    };

    let candidate = if base.starts_with("http://") || base.starts_with("https://") {
        base.to_owned()
    } else {
        format!("http://{base}")
    };

    let mut url = match Url::parse(&candidate) {
        Ok(url) => url,
        Err(error) => {
            warn!(base, %error, "malformed node address; using localhost default");
            return fallback();
        }
    };

    // port() is None both when the port is absent and when it equals the
    // scheme default; either way the node's own port applies.
    if url.port().is_none() {
        // set_port only fails for cannot-be-a-base URLs, which http(s)
        // URLs never are.
        let _ = url.set_port(Some(DEFAULT_PORT));
    }

    url
}
