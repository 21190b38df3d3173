//! Errors

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Shape data that cannot be rendered, e.g. a polygon with two points
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// Pixel buffer with zero width or height
    #[error("cannot create a {width}x{height} pixel buffer")]
    EmptyBuffer { width: usize, height: usize },

    /// Failure writing an image file
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

impl Error {
    pub fn invalid_shape(msg: impl Into<String>) -> Self {
        Self::InvalidShape(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes() {
        assert!(Error::invalid_shape("x").to_string().starts_with("invalid shape:"));
        let e = Error::EmptyBuffer { width: 0, height: 3 };
        assert_eq!(e.to_string(), "cannot create a 0x3 pixel buffer");
    }
}
