//! Library loading routines.

use std::ffi::c_void;
use std::ops::Deref;
use std::sync::Arc;

use libloading::Library;

use crate::config::LoaderConfig;
use crate::error::{Error, ErrorKind, Result};

pub(crate) trait SymLoading {
    /// # Safety
    /// The library must be ensured to live long enough.
    unsafe fn load_with(lib: &Library) -> Self;
}

/// A symbol table together with the library its pointers came from.
#[derive(Clone)]
pub(crate) struct SymWrapper<T> {
    sym: T,
    _lib: Option<Arc<Library>>,
}

impl<T: SymLoading> SymWrapper<T> {
    /// Open the first library from `config` that loads and resolve `T` from it.
    ///
    /// # Safety
    /// Loading a library runs its initialization routines.
    pub unsafe fn new(config: &LoaderConfig) -> Result<Self> {
        let mut last_error = None;
        for path in config.libraries() {
            match unsafe { Library::new(path) } {
                Ok(lib) => {
                    log::debug!("Loaded OpenGL ES driver from {path:?}");
                    return Ok(SymWrapper {
                        sym: unsafe { T::load_with(&lib) },
                        _lib: Some(Arc::new(lib)),
                    });
                },
                Err(err) => {
                    log::trace!("Failed to open {path:?}: {err}");
                    last_error = Some(err.to_string());
                },
            }
        }

        let tried = config
            .libraries()
            .iter()
            .map(|path| path.to_string_lossy())
            .collect::<Vec<_>>()
            .join(", ");
        let message = match last_error {
            Some(err) => format!("tried [{tried}], last error: {err}"),
            None => format!("tried [{tried}]"),
        };
        Err(Error::new(Some(message), ErrorKind::LibraryNotFound))
    }
}

impl<T> SymWrapper<T> {
    /// Wrap a table whose pointers don't come from a library we own.
    pub fn unowned(sym: T) -> Self {
        Self { sym, _lib: None }
    }
}

impl<T> Deref for SymWrapper<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.sym
    }
}

// The tables only hold immutable function pointers.
unsafe impl<T> Sync for SymWrapper<T> {}
unsafe impl<T> Send for SymWrapper<T> {}

impl SymLoading for gles30_sys::gl::Gles2 {
    unsafe fn load_with(lib: &Library) -> Self {
        let loader = move |sym_name: &'static str| -> *const c_void {
            match unsafe { lib.get::<*const c_void>(sym_name.as_bytes()) } {
                Ok(sym) => *sym,
                Err(_) => std::ptr::null(),
            }
        };

        Self::load_with(loader)
    }
}
