//! Version Query - reports the linked vision library's version
//!
//! The shim borrows nothing from the library: every query returns a freshly
//! owned `String` that the JNI layer then copies into a Java string.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{NativeError, Result};

/// Something that can report the version of a vision library build
#[cfg_attr(test, mockall::automock)]
pub trait VersionSource {
    /// Version identifier, e.g. "4.8.0"
    fn version_string(&self) -> Result<String>;

    /// Multi-line build summary (compiler, modules, third-party libs)
    fn build_information(&self) -> Result<String>;
}

/// OpenCV as linked into this library
#[cfg(feature = "opencv")]
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenCvVersion;

#[cfg(feature = "opencv")]
impl VersionSource for OpenCvVersion {
    fn version_string(&self) -> Result<String> {
        Ok(opencv::core::get_version_string()?)
    }

    fn build_information(&self) -> Result<String> {
        Ok(opencv::core::get_build_information()?)
    }
}

/// Parsed form of a version string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub version: String,
    pub major: u32,
    pub minor: u32,
    pub revision: u32,
    pub suffix: Option<String>,
}

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d+)\.(\d+)\.(\d+)(?:[-+.]([0-9A-Za-z][0-9A-Za-z.+-]*))?$")
            .expect("version pattern is valid")
    })
}

impl VersionInfo {
    /// Parse "MAJOR.MINOR.REVISION[-suffix]"
    pub fn parse(version: &str) -> Result<Self> {
        let version = version.trim();
        let caps = version_pattern()
            .captures(version)
            .ok_or_else(|| NativeError::MalformedVersion(version.to_string()))?;

        let number = |idx: usize| -> Result<u32> {
            caps[idx]
                .parse()
                .map_err(|_| NativeError::MalformedVersion(version.to_string()))
        };

        Ok(Self {
            version: version.to_string(),
            major: number(1)?,
            minor: number(2)?,
            revision: number(3)?,
            suffix: caps.get(4).map(|m| m.as_str().to_string()),
        })
    }
}

/// Query the version string, log it and hand back an owned, trimmed copy
pub fn query_version<S: VersionSource + ?Sized>(source: &S) -> Result<String> {
    let raw = source.version_string()?;
    let version = raw.trim();
    if version.is_empty() {
        return Err(NativeError::EmptyVersion);
    }

    log::debug!("OpenCV Version: {}", version);
    Ok(version.to_string())
}

/// Query and parse the version
pub fn query_version_info<S: VersionSource + ?Sized>(source: &S) -> Result<VersionInfo> {
    let version = query_version(source)?;
    VersionInfo::parse(&version)
}

/// Query the build summary
pub fn query_build_information<S: VersionSource + ?Sized>(source: &S) -> Result<String> {
    let info = source.build_information()?;
    log::debug!("OpenCV build information: {} bytes", info.len());
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE_VERSION: &str = "4.8.0";

    struct FixtureSource;

    impl VersionSource for FixtureSource {
        fn version_string(&self) -> Result<String> {
            Ok(FIXTURE_VERSION.to_string())
        }

        fn build_information(&self) -> Result<String> {
            Ok("General configuration for OpenCV 4.8.0".to_string())
        }
    }

    #[test]
    fn test_query_returns_library_version() {
        let version = query_version(&FixtureSource).unwrap();
        assert!(!version.is_empty());
        assert_eq!(version, FIXTURE_VERSION);
    }

    #[test]
    fn test_query_is_idempotent() {
        let first = query_version(&FixtureSource).unwrap();
        let second = query_version(&FixtureSource).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_query_calls_source_once() {
        let mut source = MockVersionSource::new();
        source
            .expect_version_string()
            .times(1)
            .returning(|| Ok("4.9.0".to_string()));

        assert_eq!(query_version(&source).unwrap(), "4.9.0");
    }

    #[test]
    fn test_empty_version_rejected() {
        let mut source = MockVersionSource::new();
        source
            .expect_version_string()
            .returning(|| Ok("  ".to_string()));

        assert!(matches!(query_version(&source), Err(NativeError::EmptyVersion)));
    }

    #[test]
    fn test_source_error_propagates() {
        let mut source = MockVersionSource::new();
        source
            .expect_version_string()
            .returning(|| Err(NativeError::VisionLibrary("not initialized".to_string())));

        let err = query_version(&source).unwrap_err();
        assert_eq!(err.to_string(), "OpenCV error: not initialized");
    }

    #[test]
    fn test_parse_release() {
        let info = VersionInfo::parse("4.8.0").unwrap();
        assert_eq!(info.major, 4);
        assert_eq!(info.minor, 8);
        assert_eq!(info.revision, 0);
        assert_eq!(info.suffix, None);
    }

    #[test]
    fn test_parse_dev_build() {
        let info = VersionInfo::parse("4.9.0-dev").unwrap();
        assert_eq!(info.version, "4.9.0-dev");
        assert_eq!(info.revision, 0);
        assert_eq!(info.suffix.as_deref(), Some("dev"));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            VersionInfo::parse("four.eight"),
            Err(NativeError::MalformedVersion(_))
        ));
        assert!(VersionInfo::parse("4.8").is_err());
        assert!(VersionInfo::parse("99999999999.0.0").is_err());
    }

    #[test]
    fn test_parse_separator_without_suffix() {
        assert!(matches!(
            VersionInfo::parse("4.8.0-"),
            Err(NativeError::MalformedVersion(_))
        ));
        assert!(VersionInfo::parse("4.8.0--").is_err());
        assert!(VersionInfo::parse("4.8.0dev").is_err());

        let info = VersionInfo::parse("4.8.0+build.1").unwrap();
        assert_eq!(info.suffix.as_deref(), Some("build.1"));
    }

    #[test]
    fn test_query_and_info_agree_on_padded_version() {
        let mut source = MockVersionSource::new();
        source
            .expect_version_string()
            .times(2)
            .returning(|| Ok(" 4.8.0\n".to_string()));

        let version = query_version(&source).unwrap();
        let info = query_version_info(&source).unwrap();
        assert_eq!(version, "4.8.0");
        assert_eq!(info.version, version);
    }

    #[test]
    fn test_version_info_json() {
        let info = query_version_info(&FixtureSource).unwrap();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["version"], "4.8.0");
        assert_eq!(json["major"], 4);
        assert!(json["suffix"].is_null());
    }

    #[test]
    fn test_build_information() {
        let info = query_build_information(&FixtureSource).unwrap();
        assert!(info.contains("OpenCV"));
    }

    #[cfg(feature = "opencv")]
    #[test]
    fn test_opencv_version_matches_accessors() {
        let info = query_version_info(&OpenCvVersion).unwrap();
        assert_eq!(info.major as i32, opencv::core::get_version_major().unwrap());
        assert_eq!(info.minor as i32, opencv::core::get_version_minor().unwrap());
        assert_eq!(info.revision as i32, opencv::core::get_version_revision().unwrap());
        assert_eq!(query_version(&OpenCvVersion).unwrap(), opencv::core::CV_VERSION);
    }
}
