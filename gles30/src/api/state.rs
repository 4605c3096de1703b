//! Global state, blending, clears and state queries.

use std::ffi::CStr;

use gles30_sys::gl::types::*;

use crate::error::GlError;
use crate::marshal::{from_gl_bool, to_gl_bool};
use crate::Gles;

impl Gles {
    /// `glGetError`, the raw code is returned unmodified.
    #[inline]
    pub unsafe fn get_error(&self) -> GLenum {
        unsafe { self.api.GetError() }
    }

    /// Poll `glGetError` once and decode the result.
    ///
    /// The driver may hold several pending flags; call this in a loop to
    /// drain them.
    pub unsafe fn check_error(&self) -> Result<(), GlError> {
        match GlError::from_raw(unsafe { self.get_error() }) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// `glEnable`.
    #[inline]
    pub unsafe fn enable(&self, cap: GLenum) {
        unsafe { self.api.Enable(cap) }
    }

    /// `glDisable`.
    #[inline]
    pub unsafe fn disable(&self, cap: GLenum) {
        unsafe { self.api.Disable(cap) }
    }

    /// `glIsEnabled`.
    #[inline]
    pub unsafe fn is_enabled(&self, cap: GLenum) -> bool {
        from_gl_bool(unsafe { self.api.IsEnabled(cap) })
    }

    /// `glViewport`.
    #[inline]
    pub unsafe fn viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        unsafe { self.api.Viewport(x, y, width, height) }
    }

    /// `glScissor`.
    #[inline]
    pub unsafe fn scissor(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        unsafe { self.api.Scissor(x, y, width, height) }
    }

    /// `glFlush`.
    #[inline]
    pub unsafe fn flush(&self) {
        unsafe { self.api.Flush() }
    }

    /// `glFinish`.
    #[inline]
    pub unsafe fn finish(&self) {
        unsafe { self.api.Finish() }
    }

    /// `glHint`.
    #[inline]
    pub unsafe fn hint(&self, target: GLenum, mode: GLenum) {
        unsafe { self.api.Hint(target, mode) }
    }

    /// `glPixelStorei`.
    #[inline]
    pub unsafe fn pixel_storei(&self, pname: GLenum, param: GLint) {
        unsafe { self.api.PixelStorei(pname, param) }
    }

    // Clears.

    /// `glClear`.
    #[inline]
    pub unsafe fn clear(&self, mask: GLbitfield) {
        unsafe { self.api.Clear(mask) }
    }

    /// `glClearColor`.
    #[inline]
    pub unsafe fn clear_color(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        unsafe { self.api.ClearColor(red, green, blue, alpha) }
    }

    /// `glClearDepthf`.
    #[inline]
    pub unsafe fn clear_depthf(&self, depth: GLfloat) {
        unsafe { self.api.ClearDepthf(depth) }
    }

    /// `glClearStencil`.
    #[inline]
    pub unsafe fn clear_stencil(&self, s: GLint) {
        unsafe { self.api.ClearStencil(s) }
    }

    // Blending.

    /// `glBlendColor`.
    #[inline]
    pub unsafe fn blend_color(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        unsafe { self.api.BlendColor(red, green, blue, alpha) }
    }

    /// `glBlendEquation`.
    #[inline]
    pub unsafe fn blend_equation(&self, mode: GLenum) {
        unsafe { self.api.BlendEquation(mode) }
    }

    /// `glBlendEquationSeparate`.
    #[inline]
    pub unsafe fn blend_equation_separate(&self, mode_rgb: GLenum, mode_alpha: GLenum) {
        unsafe { self.api.BlendEquationSeparate(mode_rgb, mode_alpha) }
    }

    /// `glBlendFunc`.
    #[inline]
    pub unsafe fn blend_func(&self, sfactor: GLenum, dfactor: GLenum) {
        unsafe { self.api.BlendFunc(sfactor, dfactor) }
    }

    /// `glBlendFuncSeparate`.
    #[inline]
    pub unsafe fn blend_func_separate(
        &self,
        sfactor_rgb: GLenum,
        dfactor_rgb: GLenum,
        sfactor_alpha: GLenum,
        dfactor_alpha: GLenum,
    ) {
        unsafe { self.api.BlendFuncSeparate(sfactor_rgb, dfactor_rgb, sfactor_alpha, dfactor_alpha) }
    }

    // Rasterization and per-fragment state.

    /// `glColorMask`.
    #[inline]
    pub unsafe fn color_mask(&self, red: bool, green: bool, blue: bool, alpha: bool) {
        unsafe {
            self.api.ColorMask(
                to_gl_bool(red),
                to_gl_bool(green),
                to_gl_bool(blue),
                to_gl_bool(alpha),
            )
        }
    }

    /// `glCullFace`.
    #[inline]
    pub unsafe fn cull_face(&self, mode: GLenum) {
        unsafe { self.api.CullFace(mode) }
    }

    /// `glFrontFace`.
    #[inline]
    pub unsafe fn front_face(&self, mode: GLenum) {
        unsafe { self.api.FrontFace(mode) }
    }

    /// `glDepthFunc`.
    #[inline]
    pub unsafe fn depth_func(&self, func: GLenum) {
        unsafe { self.api.DepthFunc(func) }
    }

    /// `glDepthMask`.
    #[inline]
    pub unsafe fn depth_mask(&self, flag: bool) {
        unsafe { self.api.DepthMask(to_gl_bool(flag)) }
    }

    /// `glDepthRangef`.
    #[inline]
    pub unsafe fn depth_rangef(&self, near: GLfloat, far: GLfloat) {
        unsafe { self.api.DepthRangef(near, far) }
    }

    /// `glLineWidth`.
    #[inline]
    pub unsafe fn line_width(&self, width: GLfloat) {
        unsafe { self.api.LineWidth(width) }
    }

    /// `glPolygonOffset`.
    #[inline]
    pub unsafe fn polygon_offset(&self, factor: GLfloat, units: GLfloat) {
        unsafe { self.api.PolygonOffset(factor, units) }
    }

    /// `glSampleCoverage`.
    #[inline]
    pub unsafe fn sample_coverage(&self, value: GLfloat, invert: bool) {
        unsafe { self.api.SampleCoverage(value, to_gl_bool(invert)) }
    }

    /// `glStencilFunc`.
    #[inline]
    pub unsafe fn stencil_func(&self, func: GLenum, reference: GLint, mask: GLuint) {
        unsafe { self.api.StencilFunc(func, reference, mask) }
    }

    /// `glStencilFuncSeparate`.
    #[inline]
    pub unsafe fn stencil_func_separate(
        &self,
        face: GLenum,
        func: GLenum,
        reference: GLint,
        mask: GLuint,
    ) {
        unsafe { self.api.StencilFuncSeparate(face, func, reference, mask) }
    }

    /// `glStencilMask`.
    #[inline]
    pub unsafe fn stencil_mask(&self, mask: GLuint) {
        unsafe { self.api.StencilMask(mask) }
    }

    /// `glStencilMaskSeparate`.
    #[inline]
    pub unsafe fn stencil_mask_separate(&self, face: GLenum, mask: GLuint) {
        unsafe { self.api.StencilMaskSeparate(face, mask) }
    }

    /// `glStencilOp`.
    #[inline]
    pub unsafe fn stencil_op(&self, fail: GLenum, zfail: GLenum, zpass: GLenum) {
        unsafe { self.api.StencilOp(fail, zfail, zpass) }
    }

    /// `glStencilOpSeparate`.
    #[inline]
    pub unsafe fn stencil_op_separate(
        &self,
        face: GLenum,
        sfail: GLenum,
        dpfail: GLenum,
        dppass: GLenum,
    ) {
        unsafe { self.api.StencilOpSeparate(face, sfail, dpfail, dppass) }
    }

    // State queries. The output slice must hold every value `pname` yields.

    /// `glGetBooleanv`, values are written in the native `GLboolean` encoding.
    #[inline]
    pub unsafe fn get_booleanv(&self, pname: GLenum, data: &mut [GLboolean]) {
        unsafe { self.api.GetBooleanv(pname, data.as_mut_ptr()) }
    }

    /// `glGetFloatv`.
    #[inline]
    pub unsafe fn get_floatv(&self, pname: GLenum, data: &mut [GLfloat]) {
        unsafe { self.api.GetFloatv(pname, data.as_mut_ptr()) }
    }

    /// `glGetIntegerv`.
    #[inline]
    pub unsafe fn get_integerv(&self, pname: GLenum, data: &mut [GLint]) {
        unsafe { self.api.GetIntegerv(pname, data.as_mut_ptr()) }
    }

    /// `glGetInteger64v`.
    #[inline]
    pub unsafe fn get_integer64v(&self, pname: GLenum, data: &mut [GLint64]) {
        unsafe { self.api.GetInteger64v(pname, data.as_mut_ptr()) }
    }

    /// `glGetIntegeri_v`.
    #[inline]
    pub unsafe fn get_integeri_v(&self, target: GLenum, index: GLuint, data: &mut [GLint]) {
        unsafe { self.api.GetIntegeri_v(target, index, data.as_mut_ptr()) }
    }

    /// `glGetInteger64i_v`.
    #[inline]
    pub unsafe fn get_integer64i_v(&self, target: GLenum, index: GLuint, data: &mut [GLint64]) {
        unsafe { self.api.GetInteger64i_v(target, index, data.as_mut_ptr()) }
    }

    /// `glGetInternalformativ`, `bufSize` is the length of `params`.
    #[inline]
    pub unsafe fn get_internalformativ(
        &self,
        target: GLenum,
        internalformat: GLenum,
        pname: GLenum,
        params: &mut [GLint],
    ) {
        unsafe {
            self.api.GetInternalformativ(
                target,
                internalformat,
                pname,
                crate::marshal::count(params),
                params.as_mut_ptr(),
            )
        }
    }

    /// `glGetString`, `None` when the driver returns null.
    ///
    /// The string is owned by the driver and stays valid for the life of the
    /// context.
    #[inline]
    pub unsafe fn get_string(&self, name: GLenum) -> Option<&CStr> {
        let ptr = unsafe { self.api.GetString(name) };
        (!ptr.is_null()).then(|| unsafe { CStr::from_ptr(ptr.cast()) })
    }

    /// `glGetStringi`, `None` when the driver returns null.
    #[inline]
    pub unsafe fn get_stringi(&self, name: GLenum, index: GLuint) -> Option<&CStr> {
        let ptr = unsafe { self.api.GetStringi(name, index) };
        (!ptr.is_null()).then(|| unsafe { CStr::from_ptr(ptr.cast()) })
    }
}
