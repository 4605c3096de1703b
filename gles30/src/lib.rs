//! Pass-through bindings for the OpenGL ES 3.0 driver library.
//!
//! [`Gles`] exposes one method per native entry point. Each method marshals
//! its arguments to the native representation (slice lengths become counts,
//! `bool` becomes `GLboolean`, strings become `const GLchar*`) and returns
//! whatever the driver returned, sentinel values included. Nothing is
//! validated, cached or checked after the call; driver errors are polled
//! explicitly with [`Gles::get_error`] or [`Gles::check_error`].
//!
//! The table is either loaded from the platform driver with [`Gles::load`],
//! or built from any proc-address function with [`Gles::load_with`]. Both
//! refuse to produce a partially resolved table.
//!
//! A single process-wide table can be installed once and reached through
//! [`current`]:
//!
//! ```no_run
//! # fn main() -> gles30::Result<()> {
//! let gles = gles30::init()?;
//! // A context must be current on this thread before any call.
//! let shader = unsafe { gles.create_shader(gles30::gl::FRAGMENT_SHADER) };
//! # let _ = shader;
//! # Ok(())
//! # }
//! ```
//!
//! # Safety
//!
//! Every entry point is an `unsafe fn`. The caller must make a compatible
//! context current on the calling thread, serialize access to that context,
//! pass handles the driver understands and provide regions large enough for
//! what the driver reads or writes.

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(rustdoc::broken_intra_doc_links)]
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::too_many_arguments)]

use std::ffi::c_void;
use std::fmt;

use once_cell::sync::OnceCell;

pub use gles30_sys::gl;
pub use gles30_sys::gl::types;

pub mod config;
pub mod error;

mod api;
mod entry_points;
mod lib_loading;
mod marshal;

pub use config::LoaderConfig;
pub use entry_points::ENTRY_POINTS;
pub use error::{Error, ErrorKind, GlError, Result};
pub use marshal::{AttribPointer, Indices};

use lib_loading::SymWrapper;

static GLES: OnceCell<Gles> = OnceCell::new();

/// Resolved OpenGL ES 3.0 entry points.
#[derive(Clone)]
pub struct Gles {
    api: SymWrapper<gl::Gles2>,
}

impl Gles {
    /// Load the driver library named by `config`.
    ///
    /// Fails with [`ErrorKind::LibraryNotFound`] when no candidate opens and
    /// with [`ErrorKind::MissingEntryPoint`] when the library lacks any of
    /// [`ENTRY_POINTS`].
    pub fn load(config: &LoaderConfig) -> Result<Self> {
        let api = unsafe { SymWrapper::new(config)? };
        Self::verify(api)
    }

    /// Build the table from a proc-address function such as
    /// `eglGetProcAddress`.
    ///
    /// `loadfn` receives the native symbol name and returns a pointer to a
    /// function with the native signature, or null.
    pub fn load_with<F>(loadfn: F) -> Result<Self>
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        Self::verify(SymWrapper::unowned(gl::Gles2::load_with(loadfn)))
    }

    fn verify(api: SymWrapper<gl::Gles2>) -> Result<Self> {
        if let Some(name) = entry_points::first_missing(&api) {
            log::error!("OpenGL ES driver doesn't export `{name}`");
            return Err(ErrorKind::MissingEntryPoint(name).into());
        }

        Ok(Self { api })
    }

    /// The generated table, for entry points this crate doesn't wrap.
    pub fn raw(&self) -> &gl::Gles2 {
        &self.api
    }
}

impl fmt::Debug for Gles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gles").field("entry_points", &ENTRY_POINTS.len()).finish_non_exhaustive()
    }
}

/// Load the process-wide table from [`LoaderConfig::from_env`].
///
/// The driver is loaded on the first call only, later calls return the same
/// table. A table previously passed to [`install`] is returned as is.
pub fn init() -> Result<&'static Gles> {
    GLES.get_or_try_init(|| {
        let gles = Gles::load(&LoaderConfig::from_env())?;
        log::debug!("Initialized process-wide OpenGL ES table");
        Ok(gles)
    })
}

/// Install `gles` as the process-wide table.
///
/// This is how tests substitute a mock driver. Fails with
/// [`ErrorKind::AlreadyInitialized`] if a table is already present.
pub fn install(gles: Gles) -> Result<&'static Gles> {
    GLES.set(gles).map_err(|_| Error::from(ErrorKind::AlreadyInitialized))?;
    log::debug!("Installed caller-provided OpenGL ES table");
    current()
}

/// The process-wide table.
pub fn current() -> Result<&'static Gles> {
    GLES.get().ok_or_else(|| ErrorKind::NotInitialized.into())
}
