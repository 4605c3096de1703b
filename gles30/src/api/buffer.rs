//! Buffer objects.

use std::ffi::c_void;
use std::ptr;

use bytemuck::Pod;

use gles30_sys::gl::types::*;

use crate::marshal::{byte_size, count, data_ptr, from_gl_bool};
use crate::Gles;

impl Gles {
    /// `glGenBuffers`, one name is generated per slot of `buffers`.
    #[inline]
    pub unsafe fn gen_buffers(&self, buffers: &mut [GLuint]) {
        unsafe { self.api.GenBuffers(count(buffers), buffers.as_mut_ptr()) }
    }

    /// `glDeleteBuffers`.
    #[inline]
    pub unsafe fn delete_buffers(&self, buffers: &[GLuint]) {
        unsafe { self.api.DeleteBuffers(count(buffers), buffers.as_ptr()) }
    }

    /// `glIsBuffer`.
    #[inline]
    pub unsafe fn is_buffer(&self, buffer: GLuint) -> bool {
        from_gl_bool(unsafe { self.api.IsBuffer(buffer) })
    }

    /// `glBindBuffer`.
    #[inline]
    pub unsafe fn bind_buffer(&self, target: GLenum, buffer: GLuint) {
        unsafe { self.api.BindBuffer(target, buffer) }
    }

    /// `glBindBufferBase`.
    #[inline]
    pub unsafe fn bind_buffer_base(&self, target: GLenum, index: GLuint, buffer: GLuint) {
        unsafe { self.api.BindBufferBase(target, index, buffer) }
    }

    /// `glBindBufferRange`.
    #[inline]
    pub unsafe fn bind_buffer_range(
        &self,
        target: GLenum,
        index: GLuint,
        buffer: GLuint,
        offset: GLintptr,
        size: GLsizeiptr,
    ) {
        unsafe { self.api.BindBufferRange(target, index, buffer, offset, size) }
    }

    /// `glBufferData` uploading `data`; the size is its byte length.
    #[inline]
    pub unsafe fn buffer_data<T: Pod>(&self, target: GLenum, data: &[T], usage: GLenum) {
        unsafe { self.api.BufferData(target, byte_size(data), data_ptr(data), usage) }
    }

    /// `glBufferData` with a null data pointer, leaving `size` bytes
    /// uninitialized.
    #[inline]
    pub unsafe fn buffer_data_uninit(&self, target: GLenum, size: GLsizeiptr, usage: GLenum) {
        unsafe { self.api.BufferData(target, size, ptr::null(), usage) }
    }

    /// `glBufferSubData`.
    #[inline]
    pub unsafe fn buffer_sub_data<T: Pod>(&self, target: GLenum, offset: GLintptr, data: &[T]) {
        unsafe { self.api.BufferSubData(target, offset, byte_size(data), data_ptr(data)) }
    }

    /// `glCopyBufferSubData`.
    #[inline]
    pub unsafe fn copy_buffer_sub_data(
        &self,
        read_target: GLenum,
        write_target: GLenum,
        read_offset: GLintptr,
        write_offset: GLintptr,
        size: GLsizeiptr,
    ) {
        unsafe {
            self.api.CopyBufferSubData(read_target, write_target, read_offset, write_offset, size)
        }
    }

    /// `glMapBufferRange`, returns null on failure.
    ///
    /// The mapping belongs to the driver and is valid until
    /// [`Gles::unmap_buffer`].
    #[inline]
    pub unsafe fn map_buffer_range(
        &self,
        target: GLenum,
        offset: GLintptr,
        length: GLsizeiptr,
        access: GLbitfield,
    ) -> *mut c_void {
        unsafe { self.api.MapBufferRange(target, offset, length, access) }
    }

    /// `glFlushMappedBufferRange`.
    #[inline]
    pub unsafe fn flush_mapped_buffer_range(
        &self,
        target: GLenum,
        offset: GLintptr,
        length: GLsizeiptr,
    ) {
        unsafe { self.api.FlushMappedBufferRange(target, offset, length) }
    }

    /// `glUnmapBuffer`, `false` means the contents were corrupted while
    /// mapped.
    #[inline]
    pub unsafe fn unmap_buffer(&self, target: GLenum) -> bool {
        from_gl_bool(unsafe { self.api.UnmapBuffer(target) })
    }

    /// `glGetBufferParameteriv`.
    #[inline]
    pub unsafe fn get_buffer_parameteriv(&self, target: GLenum, pname: GLenum, params: &mut [GLint]) {
        unsafe { self.api.GetBufferParameteriv(target, pname, params.as_mut_ptr()) }
    }

    /// `glGetBufferParameteri64v`.
    #[inline]
    pub unsafe fn get_buffer_parameteri64v(
        &self,
        target: GLenum,
        pname: GLenum,
        params: &mut [GLint64],
    ) {
        unsafe { self.api.GetBufferParameteri64v(target, pname, params.as_mut_ptr()) }
    }

    /// `glGetBufferPointerv`, returns the pointer the driver wrote.
    #[inline]
    pub unsafe fn get_buffer_pointerv(&self, target: GLenum, pname: GLenum) -> *mut c_void {
        let mut pointer: *mut c_void = ptr::null_mut();
        unsafe { self.api.GetBufferPointerv(target, pname, &mut pointer as *mut *mut c_void as _) };
        pointer
    }
}
