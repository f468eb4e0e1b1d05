use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpriteGenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Directory walk error: {0}")]
    Traversal(#[from] walkdir::Error),
    #[error("Invalid image dimensions for `{key}`: {width}x{height}")]
    InvalidDescriptor { key: String, width: u32, height: u32 },
    #[error("Nothing to pack")]
    Empty,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SpriteGenError>;
