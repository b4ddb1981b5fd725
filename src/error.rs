//! Error types for the native core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NativeError {
    #[error("OpenCV error: {0}")]
    VisionLibrary(String),

    #[error("Vision library reported an empty version string")]
    EmptyVersion,

    #[error("Malformed version string: {0}")]
    MalformedVersion(String),

    #[error("JNI error: {0}")]
    Jni(#[from] jni::errors::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(feature = "opencv")]
impl From<opencv::Error> for NativeError {
    fn from(err: opencv::Error) -> Self {
        NativeError::VisionLibrary(err.message)
    }
}

pub type Result<T> = std::result::Result<T, NativeError>;
