//! Framebuffers and renderbuffers.

use bytemuck::Pod;

use gles30_sys::gl::types::*;

use crate::marshal::{count, data_mut_ptr, from_gl_bool};
use crate::Gles;

impl Gles {
    /// `glGenFramebuffers`, fills every slot of `framebuffers`.
    #[inline]
    pub unsafe fn gen_framebuffers(&self, framebuffers: &mut [GLuint]) {
        unsafe { self.api.GenFramebuffers(count(framebuffers), framebuffers.as_mut_ptr()) }
    }

    /// `glDeleteFramebuffers`.
    #[inline]
    pub unsafe fn delete_framebuffers(&self, framebuffers: &[GLuint]) {
        unsafe { self.api.DeleteFramebuffers(count(framebuffers), framebuffers.as_ptr()) }
    }

    /// `glIsFramebuffer`.
    #[inline]
    pub unsafe fn is_framebuffer(&self, framebuffer: GLuint) -> bool {
        from_gl_bool(unsafe { self.api.IsFramebuffer(framebuffer) })
    }

    /// `glBindFramebuffer`.
    #[inline]
    pub unsafe fn bind_framebuffer(&self, target: GLenum, framebuffer: GLuint) {
        unsafe { self.api.BindFramebuffer(target, framebuffer) }
    }

    /// `glCheckFramebufferStatus`, `FRAMEBUFFER_COMPLETE` or the reason it
    /// isn't, and `0` if the call itself failed.
    #[inline]
    pub unsafe fn check_framebuffer_status(&self, target: GLenum) -> GLenum {
        unsafe { self.api.CheckFramebufferStatus(target) }
    }

    /// `glFramebufferRenderbuffer`.
    #[inline]
    pub unsafe fn framebuffer_renderbuffer(
        &self,
        target: GLenum,
        attachment: GLenum,
        renderbuffer_target: GLenum,
        renderbuffer: GLuint,
    ) {
        unsafe {
            self.api.FramebufferRenderbuffer(target, attachment, renderbuffer_target, renderbuffer)
        }
    }

    /// `glFramebufferTexture2D`.
    #[inline]
    pub unsafe fn framebuffer_texture_2d(
        &self,
        target: GLenum,
        attachment: GLenum,
        texture_target: GLenum,
        texture: GLuint,
        level: GLint,
    ) {
        unsafe { self.api.FramebufferTexture2D(target, attachment, texture_target, texture, level) }
    }

    /// `glFramebufferTextureLayer`.
    #[inline]
    pub unsafe fn framebuffer_texture_layer(
        &self,
        target: GLenum,
        attachment: GLenum,
        texture: GLuint,
        level: GLint,
        layer: GLint,
    ) {
        unsafe { self.api.FramebufferTextureLayer(target, attachment, texture, level, layer) }
    }

    /// `glGetFramebufferAttachmentParameteriv`.
    #[inline]
    pub unsafe fn get_framebuffer_attachment_parameteriv(
        &self,
        target: GLenum,
        attachment: GLenum,
        pname: GLenum,
        params: &mut [GLint],
    ) {
        unsafe {
            self.api.GetFramebufferAttachmentParameteriv(
                target,
                attachment,
                pname,
                params.as_mut_ptr(),
            )
        }
    }

    /// `glBlitFramebuffer`.
    #[inline]
    pub unsafe fn blit_framebuffer(
        &self,
        src_x0: GLint,
        src_y0: GLint,
        src_x1: GLint,
        src_y1: GLint,
        dst_x0: GLint,
        dst_y0: GLint,
        dst_x1: GLint,
        dst_y1: GLint,
        mask: GLbitfield,
        filter: GLenum,
    ) {
        unsafe {
            self.api.BlitFramebuffer(
                src_x0, src_y0, src_x1, src_y1, dst_x0, dst_y0, dst_x1, dst_y1, mask, filter,
            )
        }
    }

    /// `glInvalidateFramebuffer`.
    #[inline]
    pub unsafe fn invalidate_framebuffer(&self, target: GLenum, attachments: &[GLenum]) {
        unsafe { self.api.InvalidateFramebuffer(target, count(attachments), attachments.as_ptr()) }
    }

    /// `glInvalidateSubFramebuffer`.
    #[inline]
    pub unsafe fn invalidate_sub_framebuffer(
        &self,
        target: GLenum,
        attachments: &[GLenum],
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    ) {
        unsafe {
            self.api.InvalidateSubFramebuffer(
                target,
                count(attachments),
                attachments.as_ptr(),
                x,
                y,
                width,
                height,
            )
        }
    }

    /// `glDrawBuffers`.
    #[inline]
    pub unsafe fn draw_buffers(&self, buffers: &[GLenum]) {
        unsafe { self.api.DrawBuffers(count(buffers), buffers.as_ptr()) }
    }

    /// `glReadBuffer`.
    #[inline]
    pub unsafe fn read_buffer(&self, src: GLenum) {
        unsafe { self.api.ReadBuffer(src) }
    }

    /// `glReadPixels` into `pixels`, which must hold the whole rectangle in
    /// the requested format and the current pack alignment.
    #[inline]
    pub unsafe fn read_pixels<T: Pod>(
        &self,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        ty: GLenum,
        pixels: &mut [T],
    ) {
        unsafe { self.api.ReadPixels(x, y, width, height, format, ty, data_mut_ptr(pixels)) }
    }

    // Per-buffer clears.

    /// `glClearBufferiv`.
    #[inline]
    pub unsafe fn clear_bufferiv(&self, buffer: GLenum, drawbuffer: GLint, value: &[GLint]) {
        unsafe { self.api.ClearBufferiv(buffer, drawbuffer, value.as_ptr()) }
    }

    /// `glClearBufferuiv`.
    #[inline]
    pub unsafe fn clear_bufferuiv(&self, buffer: GLenum, drawbuffer: GLint, value: &[GLuint]) {
        unsafe { self.api.ClearBufferuiv(buffer, drawbuffer, value.as_ptr()) }
    }

    /// `glClearBufferfv`.
    #[inline]
    pub unsafe fn clear_bufferfv(&self, buffer: GLenum, drawbuffer: GLint, value: &[GLfloat]) {
        unsafe { self.api.ClearBufferfv(buffer, drawbuffer, value.as_ptr()) }
    }

    /// `glClearBufferfi`.
    #[inline]
    pub unsafe fn clear_bufferfi(
        &self,
        buffer: GLenum,
        drawbuffer: GLint,
        depth: GLfloat,
        stencil: GLint,
    ) {
        unsafe { self.api.ClearBufferfi(buffer, drawbuffer, depth, stencil) }
    }

    // Renderbuffers.

    /// `glGenRenderbuffers`, fills every slot of `renderbuffers`.
    #[inline]
    pub unsafe fn gen_renderbuffers(&self, renderbuffers: &mut [GLuint]) {
        unsafe { self.api.GenRenderbuffers(count(renderbuffers), renderbuffers.as_mut_ptr()) }
    }

    /// `glDeleteRenderbuffers`.
    #[inline]
    pub unsafe fn delete_renderbuffers(&self, renderbuffers: &[GLuint]) {
        unsafe { self.api.DeleteRenderbuffers(count(renderbuffers), renderbuffers.as_ptr()) }
    }

    /// `glIsRenderbuffer`.
    #[inline]
    pub unsafe fn is_renderbuffer(&self, renderbuffer: GLuint) -> bool {
        from_gl_bool(unsafe { self.api.IsRenderbuffer(renderbuffer) })
    }

    /// `glBindRenderbuffer`.
    #[inline]
    pub unsafe fn bind_renderbuffer(&self, target: GLenum, renderbuffer: GLuint) {
        unsafe { self.api.BindRenderbuffer(target, renderbuffer) }
    }

    /// `glRenderbufferStorage`.
    #[inline]
    pub unsafe fn renderbuffer_storage(
        &self,
        target: GLenum,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        unsafe { self.api.RenderbufferStorage(target, internalformat, width, height) }
    }

    /// `glRenderbufferStorageMultisample`.
    #[inline]
    pub unsafe fn renderbuffer_storage_multisample(
        &self,
        target: GLenum,
        samples: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        unsafe {
            self.api.RenderbufferStorageMultisample(target, samples, internalformat, width, height)
        }
    }

    /// `glGetRenderbufferParameteriv`.
    #[inline]
    pub unsafe fn get_renderbuffer_parameteriv(
        &self,
        target: GLenum,
        pname: GLenum,
        params: &mut [GLint],
    ) {
        unsafe { self.api.GetRenderbufferParameteriv(target, pname, params.as_mut_ptr()) }
    }
}
