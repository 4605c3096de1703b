//! Driver library lookup configuration.

use std::env;
use std::ffi::OsString;

/// Environment variable overriding the driver library location.
pub const LIBRARY_ENV: &str = "GLES30_LIBRARY";

#[cfg(free_unix)]
const DEFAULT_LIBRARIES: &[&str] = &["libGLESv2.so.2", "libGLESv2.so"];
#[cfg(android_platform)]
const DEFAULT_LIBRARIES: &[&str] = &["libGLESv3.so", "libGLESv2.so"];
#[cfg(apple_platform)]
const DEFAULT_LIBRARIES: &[&str] = &["libGLESv2.dylib"];
#[cfg(windows_platform)]
const DEFAULT_LIBRARIES: &[&str] = &["libGLESv2.dll"];
#[cfg(not(any(free_unix, android_platform, apple_platform, windows_platform)))]
const DEFAULT_LIBRARIES: &[&str] = &[];

/// Ordered list of libraries tried when loading the driver.
///
/// Names without a path component go through the platform's regular library
/// search, the first one that opens wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    libraries: Vec<OsString>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self { libraries: DEFAULT_LIBRARIES.iter().map(OsString::from).collect() }
    }
}

impl LoaderConfig {
    /// The platform defaults, preceded by [`LIBRARY_ENV`] when it's set and
    /// non-empty.
    pub fn from_env() -> Self {
        let config = Self::default();
        match env::var_os(LIBRARY_ENV) {
            Some(path) if !path.is_empty() => config.with_library(path),
            _ => config,
        }
    }

    /// A configuration trying only the given libraries.
    pub fn with_libraries<I, S>(libraries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self { libraries: libraries.into_iter().map(Into::into).collect() }
    }

    /// Try `library` before every other candidate.
    pub fn with_library(mut self, library: impl Into<OsString>) -> Self {
        self.libraries.insert(0, library.into());
        self
    }

    /// Candidate libraries in lookup order.
    pub fn libraries(&self) -> &[OsString] {
        &self.libraries
    }
}
