//! Edge Detection native core
//!
//! Rust side of the Edge Detection Android app. Loaded from Kotlin with
//! `System.loadLibrary("edgedetection")`, it currently provides:
//! - OpenCV version reporting
//! - JNI bridge for Android integration

mod config;
mod error;
mod jni_bridge;
mod version;

pub use error::*;
pub use version::*;

use std::sync::Once;

use config::LogConfig;

static LOGGER_INIT: Once = Once::new();

/// Initialize the native core with the default logger configuration
pub fn init_library() {
    init_library_with(&LogConfig::default());
}

/// Initialize the native core. Only the first call in a process has effect.
pub(crate) fn init_library_with(config: &LogConfig) {
    LOGGER_INIT.call_once(|| {
        android_logger::init_once(config.to_logger_config());
        log::info!("Edge detection native library initialized (v{})", VERSION);
    });
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
