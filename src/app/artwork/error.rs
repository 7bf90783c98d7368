use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtworkError {
    #[error("http client error: {0}")]
    Client(String),

    #[error("network error for {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("http status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("cache io error: {0}")]
    Io(#[from] std::io::Error),
}
