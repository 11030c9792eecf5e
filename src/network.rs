//! Network URL constants for the Neos SDK.

/// Default cloud API base URL.
pub const DEFAULT_API_URL: &str = "https://api.neos.com/api";

/// Public asset host used to resolve `neosdb://` URLs.
pub const ASSETS_URL: &str = "https://assets.neos.com/assets";

/// Default location of the persisted session token.
pub const DEFAULT_TOKEN_PATH: &str = "auth.token";

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("neosvr-sdk/", env!("CARGO_PKG_VERSION"));
