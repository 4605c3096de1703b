//! Vertex arrays, attributes and draw calls.

use std::ffi::c_void;
use std::ptr;

use gles30_sys::gl::types::*;

use crate::marshal::{count, from_gl_bool, to_gl_bool, AttribPointer, Indices};
use crate::Gles;

impl Gles {
    /// `glGenVertexArrays`, fills every slot of `arrays`.
    #[inline]
    pub unsafe fn gen_vertex_arrays(&self, arrays: &mut [GLuint]) {
        unsafe { self.api.GenVertexArrays(count(arrays), arrays.as_mut_ptr()) }
    }

    /// `glDeleteVertexArrays`.
    #[inline]
    pub unsafe fn delete_vertex_arrays(&self, arrays: &[GLuint]) {
        unsafe { self.api.DeleteVertexArrays(count(arrays), arrays.as_ptr()) }
    }

    /// `glIsVertexArray`.
    #[inline]
    pub unsafe fn is_vertex_array(&self, array: GLuint) -> bool {
        from_gl_bool(unsafe { self.api.IsVertexArray(array) })
    }

    /// `glBindVertexArray`.
    #[inline]
    pub unsafe fn bind_vertex_array(&self, array: GLuint) {
        unsafe { self.api.BindVertexArray(array) }
    }

    /// `glEnableVertexAttribArray`.
    #[inline]
    pub unsafe fn enable_vertex_attrib_array(&self, index: GLuint) {
        unsafe { self.api.EnableVertexAttribArray(index) }
    }

    /// `glDisableVertexAttribArray`.
    #[inline]
    pub unsafe fn disable_vertex_attrib_array(&self, index: GLuint) {
        unsafe { self.api.DisableVertexAttribArray(index) }
    }

    /// `glVertexAttribPointer` sourcing from a buffer offset or client memory.
    #[inline]
    pub unsafe fn vertex_attrib_pointer(
        &self,
        index: GLuint,
        size: GLint,
        ty: GLenum,
        normalized: bool,
        stride: GLsizei,
        pointer: AttribPointer,
    ) {
        unsafe {
            self.api.VertexAttribPointer(
                index,
                size,
                ty,
                to_gl_bool(normalized),
                stride,
                pointer.as_ptr(),
            )
        }
    }

    /// `glVertexAttribIPointer` sourcing from a buffer offset or client
    /// memory.
    #[inline]
    pub unsafe fn vertex_attrib_i_pointer(
        &self,
        index: GLuint,
        size: GLint,
        ty: GLenum,
        stride: GLsizei,
        pointer: AttribPointer,
    ) {
        unsafe { self.api.VertexAttribIPointer(index, size, ty, stride, pointer.as_ptr()) }
    }

    /// `glVertexAttribDivisor`.
    #[inline]
    pub unsafe fn vertex_attrib_divisor(&self, index: GLuint, divisor: GLuint) {
        unsafe { self.api.VertexAttribDivisor(index, divisor) }
    }

    // Generic attribute values.

    /// `glVertexAttrib1f`.
    #[inline]
    pub unsafe fn vertex_attrib_1f(&self, index: GLuint, x: GLfloat) {
        unsafe { self.api.VertexAttrib1f(index, x) }
    }

    /// `glVertexAttrib2f`.
    #[inline]
    pub unsafe fn vertex_attrib_2f(&self, index: GLuint, x: GLfloat, y: GLfloat) {
        unsafe { self.api.VertexAttrib2f(index, x, y) }
    }

    /// `glVertexAttrib3f`.
    #[inline]
    pub unsafe fn vertex_attrib_3f(&self, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat) {
        unsafe { self.api.VertexAttrib3f(index, x, y, z) }
    }

    /// `glVertexAttrib4f`.
    #[inline]
    pub unsafe fn vertex_attrib_4f(
        &self,
        index: GLuint,
        x: GLfloat,
        y: GLfloat,
        z: GLfloat,
        w: GLfloat,
    ) {
        unsafe { self.api.VertexAttrib4f(index, x, y, z, w) }
    }

    /// `glVertexAttrib1fv`.
    #[inline]
    pub unsafe fn vertex_attrib_1fv(&self, index: GLuint, v: &[GLfloat; 1]) {
        unsafe { self.api.VertexAttrib1fv(index, v.as_ptr()) }
    }

    /// `glVertexAttrib2fv`.
    #[inline]
    pub unsafe fn vertex_attrib_2fv(&self, index: GLuint, v: &[GLfloat; 2]) {
        unsafe { self.api.VertexAttrib2fv(index, v.as_ptr()) }
    }

    /// `glVertexAttrib3fv`.
    #[inline]
    pub unsafe fn vertex_attrib_3fv(&self, index: GLuint, v: &[GLfloat; 3]) {
        unsafe { self.api.VertexAttrib3fv(index, v.as_ptr()) }
    }

    /// `glVertexAttrib4fv`.
    #[inline]
    pub unsafe fn vertex_attrib_4fv(&self, index: GLuint, v: &[GLfloat; 4]) {
        unsafe { self.api.VertexAttrib4fv(index, v.as_ptr()) }
    }

    /// `glVertexAttribI4i`.
    #[inline]
    pub unsafe fn vertex_attrib_i4i(&self, index: GLuint, x: GLint, y: GLint, z: GLint, w: GLint) {
        unsafe { self.api.VertexAttribI4i(index, x, y, z, w) }
    }

    /// `glVertexAttribI4iv`.
    #[inline]
    pub unsafe fn vertex_attrib_i4iv(&self, index: GLuint, v: &[GLint; 4]) {
        unsafe { self.api.VertexAttribI4iv(index, v.as_ptr()) }
    }

    /// `glVertexAttribI4ui`.
    #[inline]
    pub unsafe fn vertex_attrib_i4ui(
        &self,
        index: GLuint,
        x: GLuint,
        y: GLuint,
        z: GLuint,
        w: GLuint,
    ) {
        unsafe { self.api.VertexAttribI4ui(index, x, y, z, w) }
    }

    /// `glVertexAttribI4uiv`.
    #[inline]
    pub unsafe fn vertex_attrib_i4uiv(&self, index: GLuint, v: &[GLuint; 4]) {
        unsafe { self.api.VertexAttribI4uiv(index, v.as_ptr()) }
    }

    // Attribute queries.

    /// `glGetVertexAttribfv`.
    #[inline]
    pub unsafe fn get_vertex_attribfv(&self, index: GLuint, pname: GLenum, params: &mut [GLfloat]) {
        unsafe { self.api.GetVertexAttribfv(index, pname, params.as_mut_ptr()) }
    }

    /// `glGetVertexAttribiv`.
    #[inline]
    pub unsafe fn get_vertex_attribiv(&self, index: GLuint, pname: GLenum, params: &mut [GLint]) {
        unsafe { self.api.GetVertexAttribiv(index, pname, params.as_mut_ptr()) }
    }

    /// `glGetVertexAttribIiv`.
    #[inline]
    pub unsafe fn get_vertex_attrib_iiv(&self, index: GLuint, pname: GLenum, params: &mut [GLint]) {
        unsafe { self.api.GetVertexAttribIiv(index, pname, params.as_mut_ptr()) }
    }

    /// `glGetVertexAttribIuiv`.
    #[inline]
    pub unsafe fn get_vertex_attrib_iuiv(
        &self,
        index: GLuint,
        pname: GLenum,
        params: &mut [GLuint],
    ) {
        unsafe { self.api.GetVertexAttribIuiv(index, pname, params.as_mut_ptr()) }
    }

    /// `glGetVertexAttribPointerv`, returns the pointer or offset the driver
    /// wrote.
    #[inline]
    pub unsafe fn get_vertex_attrib_pointerv(&self, index: GLuint, pname: GLenum) -> *mut c_void {
        let mut pointer: *mut c_void = ptr::null_mut();
        unsafe {
            self.api.GetVertexAttribPointerv(index, pname, &mut pointer as *mut *mut c_void as _)
        };
        pointer
    }

    // Draws.

    /// `glDrawArrays`.
    #[inline]
    pub unsafe fn draw_arrays(&self, mode: GLenum, first: GLint, count: GLsizei) {
        unsafe { self.api.DrawArrays(mode, first, count) }
    }

    /// `glDrawArraysInstanced`.
    #[inline]
    pub unsafe fn draw_arrays_instanced(
        &self,
        mode: GLenum,
        first: GLint,
        count: GLsizei,
        instance_count: GLsizei,
    ) {
        unsafe { self.api.DrawArraysInstanced(mode, first, count, instance_count) }
    }

    /// `glDrawElements` reading indices from a buffer offset or client
    /// memory. `count` is the number of indices, not bytes.
    #[inline]
    pub unsafe fn draw_elements(
        &self,
        mode: GLenum,
        count: GLsizei,
        ty: GLenum,
        indices: Indices<'_>,
    ) {
        unsafe { self.api.DrawElements(mode, count, ty, indices.as_ptr()) }
    }

    /// `glDrawElementsInstanced`.
    #[inline]
    pub unsafe fn draw_elements_instanced(
        &self,
        mode: GLenum,
        count: GLsizei,
        ty: GLenum,
        indices: Indices<'_>,
        instance_count: GLsizei,
    ) {
        unsafe {
            self.api.DrawElementsInstanced(mode, count, ty, indices.as_ptr(), instance_count)
        }
    }

    /// `glDrawRangeElements`.
    #[inline]
    pub unsafe fn draw_range_elements(
        &self,
        mode: GLenum,
        start: GLuint,
        end: GLuint,
        count: GLsizei,
        ty: GLenum,
        indices: Indices<'_>,
    ) {
        unsafe { self.api.DrawRangeElements(mode, start, end, count, ty, indices.as_ptr()) }
    }
}
