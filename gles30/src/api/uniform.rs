//! Uniform uploads and queries.
//!
//! Array variants take one Rust array per uniform element, so the native
//! `count` is the slice length rather than the number of scalars.

use gles30_sys::gl::types::*;

use crate::marshal::{count, to_gl_bool};
use crate::Gles;

macro_rules! uniform_arrays {
    ($($name:ident => $raw:ident(&[$elem:ty]);)*) => {
        impl Gles {
            $(
                #[doc = concat!("`gl", stringify!($raw), "`.")]
                #[inline]
                pub unsafe fn $name(&self, location: GLint, value: &[$elem]) {
                    unsafe { self.api.$raw(location, count(value), value.as_ptr().cast()) }
                }
            )*
        }
    };
}

macro_rules! uniform_matrices {
    ($($name:ident => $raw:ident(&[$elem:ty]);)*) => {
        impl Gles {
            $(
                #[doc = concat!("`gl", stringify!($raw), "`.")]
                #[inline]
                pub unsafe fn $name(&self, location: GLint, transpose: bool, value: &[$elem]) {
                    unsafe {
                        self.api.$raw(location, count(value), to_gl_bool(transpose), value.as_ptr().cast())
                    }
                }
            )*
        }
    };
}

uniform_arrays! {
    uniform_1fv => Uniform1fv(&[GLfloat]);
    uniform_2fv => Uniform2fv(&[[GLfloat; 2]]);
    uniform_3fv => Uniform3fv(&[[GLfloat; 3]]);
    uniform_4fv => Uniform4fv(&[[GLfloat; 4]]);
    uniform_1iv => Uniform1iv(&[GLint]);
    uniform_2iv => Uniform2iv(&[[GLint; 2]]);
    uniform_3iv => Uniform3iv(&[[GLint; 3]]);
    uniform_4iv => Uniform4iv(&[[GLint; 4]]);
    uniform_1uiv => Uniform1uiv(&[GLuint]);
    uniform_2uiv => Uniform2uiv(&[[GLuint; 2]]);
    uniform_3uiv => Uniform3uiv(&[[GLuint; 3]]);
    uniform_4uiv => Uniform4uiv(&[[GLuint; 4]]);
}

uniform_matrices! {
    uniform_matrix_2fv => UniformMatrix2fv(&[[GLfloat; 4]]);
    uniform_matrix_3fv => UniformMatrix3fv(&[[GLfloat; 9]]);
    uniform_matrix_4fv => UniformMatrix4fv(&[[GLfloat; 16]]);
    uniform_matrix_2x3fv => UniformMatrix2x3fv(&[[GLfloat; 6]]);
    uniform_matrix_2x4fv => UniformMatrix2x4fv(&[[GLfloat; 8]]);
    uniform_matrix_3x2fv => UniformMatrix3x2fv(&[[GLfloat; 6]]);
    uniform_matrix_3x4fv => UniformMatrix3x4fv(&[[GLfloat; 12]]);
    uniform_matrix_4x2fv => UniformMatrix4x2fv(&[[GLfloat; 8]]);
    uniform_matrix_4x3fv => UniformMatrix4x3fv(&[[GLfloat; 12]]);
}

impl Gles {
    /// `glUniform1f`.
    #[inline]
    pub unsafe fn uniform_1f(&self, location: GLint, v0: GLfloat) {
        unsafe { self.api.Uniform1f(location, v0) }
    }

    /// `glUniform2f`.
    #[inline]
    pub unsafe fn uniform_2f(&self, location: GLint, v0: GLfloat, v1: GLfloat) {
        unsafe { self.api.Uniform2f(location, v0, v1) }
    }

    /// `glUniform3f`.
    #[inline]
    pub unsafe fn uniform_3f(&self, location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat) {
        unsafe { self.api.Uniform3f(location, v0, v1, v2) }
    }

    /// `glUniform4f`.
    #[inline]
    pub unsafe fn uniform_4f(
        &self,
        location: GLint,
        v0: GLfloat,
        v1: GLfloat,
        v2: GLfloat,
        v3: GLfloat,
    ) {
        unsafe { self.api.Uniform4f(location, v0, v1, v2, v3) }
    }

    /// `glUniform1i`.
    #[inline]
    pub unsafe fn uniform_1i(&self, location: GLint, v0: GLint) {
        unsafe { self.api.Uniform1i(location, v0) }
    }

    /// `glUniform2i`.
    #[inline]
    pub unsafe fn uniform_2i(&self, location: GLint, v0: GLint, v1: GLint) {
        unsafe { self.api.Uniform2i(location, v0, v1) }
    }

    /// `glUniform3i`.
    #[inline]
    pub unsafe fn uniform_3i(&self, location: GLint, v0: GLint, v1: GLint, v2: GLint) {
        unsafe { self.api.Uniform3i(location, v0, v1, v2) }
    }

    /// `glUniform4i`.
    #[inline]
    pub unsafe fn uniform_4i(&self, location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint) {
        unsafe { self.api.Uniform4i(location, v0, v1, v2, v3) }
    }

    /// `glUniform1ui`.
    #[inline]
    pub unsafe fn uniform_1ui(&self, location: GLint, v0: GLuint) {
        unsafe { self.api.Uniform1ui(location, v0) }
    }

    /// `glUniform2ui`.
    #[inline]
    pub unsafe fn uniform_2ui(&self, location: GLint, v0: GLuint, v1: GLuint) {
        unsafe { self.api.Uniform2ui(location, v0, v1) }
    }

    /// `glUniform3ui`.
    #[inline]
    pub unsafe fn uniform_3ui(&self, location: GLint, v0: GLuint, v1: GLuint, v2: GLuint) {
        unsafe { self.api.Uniform3ui(location, v0, v1, v2) }
    }

    /// `glUniform4ui`.
    #[inline]
    pub unsafe fn uniform_4ui(
        &self,
        location: GLint,
        v0: GLuint,
        v1: GLuint,
        v2: GLuint,
        v3: GLuint,
    ) {
        unsafe { self.api.Uniform4ui(location, v0, v1, v2, v3) }
    }

    // Queries write every component of the uniform at `location`.

    /// `glGetUniformfv`.
    #[inline]
    pub unsafe fn get_uniformfv(&self, program: GLuint, location: GLint, params: &mut [GLfloat]) {
        unsafe { self.api.GetUniformfv(program, location, params.as_mut_ptr()) }
    }

    /// `glGetUniformiv`.
    #[inline]
    pub unsafe fn get_uniformiv(&self, program: GLuint, location: GLint, params: &mut [GLint]) {
        unsafe { self.api.GetUniformiv(program, location, params.as_mut_ptr()) }
    }

    /// `glGetUniformuiv`.
    #[inline]
    pub unsafe fn get_uniformuiv(&self, program: GLuint, location: GLint, params: &mut [GLuint]) {
        unsafe { self.api.GetUniformuiv(program, location, params.as_mut_ptr()) }
    }
}
