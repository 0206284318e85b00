use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("unsupported media type {mime:?} for {name}")]
    Unsupported { name: String, mime: String },

    #[error("probe error: {0}")]
    Probe(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MediaError>;
