use thiserror::Error;

#[derive(Error, Debug)]
pub enum OffError {
    #[error("Barcode or search query must not be empty")]
    InvalidInput,

    #[error("Open Food Facts returned HTTP {0}")]
    UpstreamHttp(u16),

    #[error("Malformed response from Open Food Facts: {0}")]
    MalformedResponse(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Config error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
