//! Transform feedback.

use std::ffi::CStr;

use gles30_sys::gl::types::*;

use crate::marshal::{count, from_gl_bool, CStrArray};
use crate::Gles;

impl Gles {
    /// `glGenTransformFeedbacks`, fills every slot of `ids`.
    #[inline]
    pub unsafe fn gen_transform_feedbacks(&self, ids: &mut [GLuint]) {
        unsafe { self.api.GenTransformFeedbacks(count(ids), ids.as_mut_ptr()) }
    }

    /// `glDeleteTransformFeedbacks`.
    #[inline]
    pub unsafe fn delete_transform_feedbacks(&self, ids: &[GLuint]) {
        unsafe { self.api.DeleteTransformFeedbacks(count(ids), ids.as_ptr()) }
    }

    /// `glIsTransformFeedback`.
    #[inline]
    pub unsafe fn is_transform_feedback(&self, id: GLuint) -> bool {
        from_gl_bool(unsafe { self.api.IsTransformFeedback(id) })
    }

    /// `glBindTransformFeedback`.
    #[inline]
    pub unsafe fn bind_transform_feedback(&self, target: GLenum, id: GLuint) {
        unsafe { self.api.BindTransformFeedback(target, id) }
    }

    /// `glBeginTransformFeedback`.
    #[inline]
    pub unsafe fn begin_transform_feedback(&self, primitive_mode: GLenum) {
        unsafe { self.api.BeginTransformFeedback(primitive_mode) }
    }

    /// `glEndTransformFeedback`.
    #[inline]
    pub unsafe fn end_transform_feedback(&self) {
        unsafe { self.api.EndTransformFeedback() }
    }

    /// `glPauseTransformFeedback`.
    #[inline]
    pub unsafe fn pause_transform_feedback(&self) {
        unsafe { self.api.PauseTransformFeedback() }
    }

    /// `glResumeTransformFeedback`.
    #[inline]
    pub unsafe fn resume_transform_feedback(&self) {
        unsafe { self.api.ResumeTransformFeedback() }
    }

    /// `glTransformFeedbackVaryings`.
    #[inline]
    pub unsafe fn transform_feedback_varyings(
        &self,
        program: GLuint,
        varyings: &[&CStr],
        buffer_mode: GLenum,
    ) {
        let varyings = CStrArray::new(varyings);
        unsafe {
            self.api.TransformFeedbackVaryings(
                program,
                varyings.count(),
                varyings.as_ptr(),
                buffer_mode,
            )
        }
    }

    /// `glGetTransformFeedbackVarying`, returns `(length, size, type)`; the
    /// name is written to `name`.
    #[inline]
    pub unsafe fn get_transform_feedback_varying(
        &self,
        program: GLuint,
        index: GLuint,
        name: &mut [u8],
    ) -> (GLsizei, GLsizei, GLenum) {
        let (mut length, mut size, mut ty) = (0, 0, 0);
        unsafe {
            self.api.GetTransformFeedbackVarying(
                program,
                index,
                count(name),
                &mut length,
                &mut size,
                &mut ty,
                name.as_mut_ptr().cast(),
            )
        };
        (length, size, ty)
    }
}
