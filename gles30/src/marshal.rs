//! Argument marshaling shared by the entry points.
//!
//! Everything here is a representation change only: no value is validated,
//! clamped or defaulted on its way to the driver.

use std::ffi::{c_void, CStr};
use std::marker::PhantomData;
use std::mem;

use bytemuck::Pod;
use smallvec::SmallVec;

use gles30_sys::gl;
use gles30_sys::gl::types::{GLboolean, GLchar, GLint, GLsizei, GLsizeiptr};

#[inline]
pub(crate) fn to_gl_bool(value: bool) -> GLboolean {
    if value {
        gl::TRUE
    } else {
        gl::FALSE
    }
}

#[inline]
pub(crate) fn from_gl_bool(value: GLboolean) -> bool {
    value != gl::FALSE
}

/// Element count of a caller region as the native `GLsizei`.
#[inline]
pub(crate) fn count<T>(slice: &[T]) -> GLsizei {
    slice.len() as GLsizei
}

/// Byte size of a caller region as the native `GLsizeiptr`.
#[inline]
pub(crate) fn byte_size<T: Pod>(data: &[T]) -> GLsizeiptr {
    mem::size_of_val(data) as GLsizeiptr
}

#[inline]
pub(crate) fn data_ptr<T: Pod>(data: &[T]) -> *const c_void {
    data.as_ptr().cast()
}

#[inline]
pub(crate) fn data_mut_ptr<T: Pod>(data: &mut [T]) -> *mut c_void {
    data.as_mut_ptr().cast()
}

/// Optional pixel region, `None` is passed as a null pointer.
#[inline]
pub(crate) fn opt_data_ptr<T: Pod>(data: Option<&[T]>) -> *const c_void {
    data.map_or(std::ptr::null(), data_ptr)
}

/// Index source for the `glDraw*Elements*` family.
///
/// The native entry points take a single pointer argument that is either a
/// byte offset into the bound `ELEMENT_ARRAY_BUFFER` or client memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indices<'a> {
    /// Byte offset into the bound element array buffer.
    Offset(usize),
    /// Client memory, read only while the call runs.
    Client(&'a [u8]),
}

impl Indices<'_> {
    /// The native pointer argument.
    pub fn as_ptr(&self) -> *const c_void {
        match *self {
            Indices::Offset(offset) => offset as *const c_void,
            Indices::Client(data) => data.as_ptr().cast(),
        }
    }
}

impl From<usize> for Indices<'_> {
    fn from(offset: usize) -> Self {
        Indices::Offset(offset)
    }
}

impl<'a, T: Pod> From<&'a [T]> for Indices<'a> {
    fn from(data: &'a [T]) -> Self {
        Indices::Client(bytemuck::cast_slice(data))
    }
}

/// Attribute source for `glVertexAttribPointer` and `glVertexAttribIPointer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttribPointer {
    /// Byte offset into the bound `ARRAY_BUFFER`.
    Offset(usize),
    /// Client memory. The driver keeps reading it until the attribute is
    /// respecified, so it has to outlive every draw using it.
    Client(*const c_void),
}

impl AttribPointer {
    /// The native pointer argument.
    pub fn as_ptr(&self) -> *const c_void {
        match *self {
            AttribPointer::Offset(offset) => offset as *const c_void,
            AttribPointer::Client(ptr) => ptr,
        }
    }
}

/// Pointer array over null-terminated strings.
pub(crate) struct CStrArray<'a> {
    ptrs: SmallVec<[*const GLchar; 8]>,
    _strings: PhantomData<&'a CStr>,
}

impl<'a> CStrArray<'a> {
    pub fn new(strings: &[&'a CStr]) -> Self {
        Self { ptrs: strings.iter().map(|s| s.as_ptr()).collect(), _strings: PhantomData }
    }

    pub fn count(&self) -> GLsizei {
        count(&self.ptrs)
    }

    pub fn as_ptr(&self) -> *const *const GLchar {
        self.ptrs.as_ptr()
    }
}

/// Pointer and length arrays over strings that aren't null-terminated.
pub(crate) struct StrArray<'a> {
    ptrs: SmallVec<[*const GLchar; 4]>,
    lengths: SmallVec<[GLint; 4]>,
    _strings: PhantomData<&'a str>,
}

impl<'a> StrArray<'a> {
    pub fn new(strings: &[&'a str]) -> Self {
        Self::with_piece_len(strings, GLint::MAX as usize)
    }

    /// Strings longer than `max` bytes are passed as consecutive pieces, so
    /// every length fits in a non-negative `GLint`. The driver concatenates
    /// the pieces back.
    fn with_piece_len(strings: &[&'a str], max: usize) -> Self {
        let mut ptrs = SmallVec::new();
        let mut lengths = SmallVec::new();
        for piece in strings.iter().flat_map(|s| s.as_bytes().chunks(max)) {
            ptrs.push(piece.as_ptr().cast::<GLchar>());
            lengths.push(piece.len() as GLint);
        }

        Self { ptrs, lengths, _strings: PhantomData }
    }

    pub fn count(&self) -> GLsizei {
        count(&self.ptrs)
    }

    pub fn as_ptr(&self) -> *const *const GLchar {
        self.ptrs.as_ptr()
    }

    pub fn lengths(&self) -> *const GLint {
        self.lengths.as_ptr()
    }
}
