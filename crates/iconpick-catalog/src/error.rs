use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Could not resolve latest version")]
    UnresolvedVersion,
}
