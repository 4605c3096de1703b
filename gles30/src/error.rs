//! Binding and driver error handling.

use std::fmt;

use gles30_sys::gl;
use gles30_sys::gl::types::GLenum;

/// A specialized [`Result`] type for binding operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for loading and installing the binding table.
///
/// Individual GL calls never produce this type, driver failures are only
/// visible through return values and [`Gles::get_error`].
///
/// [`Gles::get_error`]: crate::Gles::get_error
#[derive(Debug, Clone)]
pub struct Error {
    /// The raw message from the loader in case it could be obtained.
    raw_os_message: Option<String>,

    /// The simplified error kind to handle matching.
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new(raw_os_message: Option<String>, kind: ErrorKind) -> Self {
        Self { raw_os_message, kind }
    }

    /// Helper to check that the driver library couldn't be opened at all.
    #[inline]
    pub fn library_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::LibraryNotFound)
    }

    /// The underlying error kind.
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        self.kind
    }

    /// The message reported by the loader, if any.
    #[inline]
    pub fn raw_os_message(&self) -> Option<&str> {
        self.raw_os_message.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.raw_os_message.as_ref() {
            Some(raw_os_message) => write!(f, "{}: {raw_os_message}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for Error {}

/// Build an error with just a kind.
impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error { raw_os_message: None, kind }
    }
}

/// A list specifying general categories of binding errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// None of the candidate driver libraries could be opened.
    LibraryNotFound,

    /// The driver doesn't export the given entry point.
    MissingEntryPoint(&'static str),

    /// The process-wide table was requested before it was loaded.
    NotInitialized,

    /// A process-wide table is already installed.
    AlreadyInitialized,
}

impl ErrorKind {
    pub(crate) fn as_str(&self) -> &'static str {
        use ErrorKind::*;
        match *self {
            LibraryNotFound => "OpenGL ES driver library not found",
            MissingEntryPoint(_) => "required entry point is missing",
            NotInitialized => "binding table is not initialized",
            AlreadyInitialized => "binding table is already initialized",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MissingEntryPoint(name) => write!(f, "{} `{name}`", self.as_str()),
            _ => f.write_str(self.as_str()),
        }
    }
}

/// A decoded `glGetError` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlError {
    /// `GL_INVALID_ENUM`, an enum argument is out of range.
    InvalidEnum,

    /// `GL_INVALID_VALUE`, a numeric argument is out of range.
    InvalidValue,

    /// `GL_INVALID_OPERATION`, the call isn't allowed in the current state.
    InvalidOperation,

    /// `GL_INVALID_FRAMEBUFFER_OPERATION`, the bound framebuffer is
    /// incomplete.
    InvalidFramebufferOperation,

    /// `GL_OUT_OF_MEMORY`, the driver state is undefined afterwards.
    OutOfMemory,

    /// A code outside of the core error set.
    Unknown(GLenum),
}

impl GlError {
    /// Decode a raw error code, `None` means `GL_NO_ERROR`.
    pub fn from_raw(code: GLenum) -> Option<Self> {
        let error = match code {
            gl::NO_ERROR => return None,
            gl::INVALID_ENUM => GlError::InvalidEnum,
            gl::INVALID_VALUE => GlError::InvalidValue,
            gl::INVALID_OPERATION => GlError::InvalidOperation,
            gl::INVALID_FRAMEBUFFER_OPERATION => GlError::InvalidFramebufferOperation,
            gl::OUT_OF_MEMORY => GlError::OutOfMemory,
            code => GlError::Unknown(code),
        };
        Some(error)
    }

    /// The raw code as returned by the driver.
    pub fn raw(self) -> GLenum {
        match self {
            GlError::InvalidEnum => gl::INVALID_ENUM,
            GlError::InvalidValue => gl::INVALID_VALUE,
            GlError::InvalidOperation => gl::INVALID_OPERATION,
            GlError::InvalidFramebufferOperation => gl::INVALID_FRAMEBUFFER_OPERATION,
            GlError::OutOfMemory => gl::OUT_OF_MEMORY,
            GlError::Unknown(code) => code,
        }
    }
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            GlError::InvalidEnum => "invalid enum",
            GlError::InvalidValue => "invalid value",
            GlError::InvalidOperation => "invalid operation",
            GlError::InvalidFramebufferOperation => "invalid framebuffer operation",
            GlError::OutOfMemory => "out of memory",
            GlError::Unknown(_) => "unknown error",
        };
        write!(f, "[{:#06x}] {msg}", self.raw())
    }
}

impl std::error::Error for GlError {}
