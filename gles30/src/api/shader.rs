//! Shaders and programs.

use std::ffi::CStr;

use gles30_sys::gl::types::*;

use crate::marshal::{count, data_mut_ptr, data_ptr, from_gl_bool, CStrArray, StrArray};
use crate::Gles;

impl Gles {
    /// `glCreateShader`, returns `0` when the driver refuses to create one.
    #[inline]
    pub unsafe fn create_shader(&self, shader_type: GLenum) -> GLuint {
        unsafe { self.api.CreateShader(shader_type) }
    }

    /// `glDeleteShader`.
    #[inline]
    pub unsafe fn delete_shader(&self, shader: GLuint) {
        unsafe { self.api.DeleteShader(shader) }
    }

    /// `glIsShader`.
    #[inline]
    pub unsafe fn is_shader(&self, shader: GLuint) -> bool {
        from_gl_bool(unsafe { self.api.IsShader(shader) })
    }

    /// `glShaderSource` with one string per source chunk.
    ///
    /// Chunks are passed with explicit lengths, so they don't need to be
    /// null-terminated. A chunk longer than `GLint::MAX` bytes is handed over
    /// as several consecutive pieces.
    pub unsafe fn shader_source(&self, shader: GLuint, sources: &[&str]) {
        let sources = StrArray::new(sources);
        unsafe { self.api.ShaderSource(shader, sources.count(), sources.as_ptr(), sources.lengths()) }
    }

    /// `glCompileShader`.
    #[inline]
    pub unsafe fn compile_shader(&self, shader: GLuint) {
        unsafe { self.api.CompileShader(shader) }
    }

    /// `glGetShaderiv`.
    #[inline]
    pub unsafe fn get_shaderiv(&self, shader: GLuint, pname: GLenum, params: &mut [GLint]) {
        unsafe { self.api.GetShaderiv(shader, pname, params.as_mut_ptr()) }
    }

    /// `glGetShaderInfoLog`, returns the number of bytes written excluding
    /// the terminator.
    #[inline]
    pub unsafe fn get_shader_info_log(&self, shader: GLuint, info_log: &mut [u8]) -> GLsizei {
        let mut length = 0;
        unsafe {
            self.api.GetShaderInfoLog(
                shader,
                count(info_log),
                &mut length,
                info_log.as_mut_ptr().cast(),
            )
        };
        length
    }

    /// `glGetShaderSource`, returns the number of bytes written excluding
    /// the terminator.
    #[inline]
    pub unsafe fn get_shader_source(&self, shader: GLuint, source: &mut [u8]) -> GLsizei {
        let mut length = 0;
        unsafe {
            self.api.GetShaderSource(shader, count(source), &mut length, source.as_mut_ptr().cast())
        };
        length
    }

    /// `glGetShaderPrecisionFormat`, `range` holds two values.
    #[inline]
    pub unsafe fn get_shader_precision_format(
        &self,
        shader_type: GLenum,
        precision_type: GLenum,
        range: &mut [GLint; 2],
        precision: &mut GLint,
    ) {
        unsafe {
            self.api.GetShaderPrecisionFormat(
                shader_type,
                precision_type,
                range.as_mut_ptr(),
                precision,
            )
        }
    }

    /// `glReleaseShaderCompiler`.
    #[inline]
    pub unsafe fn release_shader_compiler(&self) {
        unsafe { self.api.ReleaseShaderCompiler() }
    }

    /// `glShaderBinary`, `length` is the byte size of `binary`.
    #[inline]
    pub unsafe fn shader_binary(&self, shaders: &[GLuint], binary_format: GLenum, binary: &[u8]) {
        unsafe {
            self.api.ShaderBinary(
                count(shaders),
                shaders.as_ptr(),
                binary_format,
                data_ptr(binary),
                count(binary),
            )
        }
    }

    /// `glCreateProgram`, returns `0` on failure.
    #[inline]
    pub unsafe fn create_program(&self) -> GLuint {
        unsafe { self.api.CreateProgram() }
    }

    /// `glDeleteProgram`.
    #[inline]
    pub unsafe fn delete_program(&self, program: GLuint) {
        unsafe { self.api.DeleteProgram(program) }
    }

    /// `glIsProgram`.
    #[inline]
    pub unsafe fn is_program(&self, program: GLuint) -> bool {
        from_gl_bool(unsafe { self.api.IsProgram(program) })
    }

    /// `glAttachShader`.
    #[inline]
    pub unsafe fn attach_shader(&self, program: GLuint, shader: GLuint) {
        unsafe { self.api.AttachShader(program, shader) }
    }

    /// `glDetachShader`.
    #[inline]
    pub unsafe fn detach_shader(&self, program: GLuint, shader: GLuint) {
        unsafe { self.api.DetachShader(program, shader) }
    }

    /// `glLinkProgram`.
    #[inline]
    pub unsafe fn link_program(&self, program: GLuint) {
        unsafe { self.api.LinkProgram(program) }
    }

    /// `glUseProgram`.
    #[inline]
    pub unsafe fn use_program(&self, program: GLuint) {
        unsafe { self.api.UseProgram(program) }
    }

    /// `glValidateProgram`.
    #[inline]
    pub unsafe fn validate_program(&self, program: GLuint) {
        unsafe { self.api.ValidateProgram(program) }
    }

    /// `glGetProgramiv`.
    #[inline]
    pub unsafe fn get_programiv(&self, program: GLuint, pname: GLenum, params: &mut [GLint]) {
        unsafe { self.api.GetProgramiv(program, pname, params.as_mut_ptr()) }
    }

    /// `glGetProgramInfoLog`, returns the number of bytes written excluding
    /// the terminator.
    #[inline]
    pub unsafe fn get_program_info_log(&self, program: GLuint, info_log: &mut [u8]) -> GLsizei {
        let mut length = 0;
        unsafe {
            self.api.GetProgramInfoLog(
                program,
                count(info_log),
                &mut length,
                info_log.as_mut_ptr().cast(),
            )
        };
        length
    }

    /// `glGetAttachedShaders`, returns how many handles were written.
    #[inline]
    pub unsafe fn get_attached_shaders(&self, program: GLuint, shaders: &mut [GLuint]) -> GLsizei {
        let mut written = 0;
        unsafe {
            self.api.GetAttachedShaders(program, count(shaders), &mut written, shaders.as_mut_ptr())
        };
        written
    }

    /// `glGetProgramBinary`, returns the byte length written and the binary
    /// format.
    #[inline]
    pub unsafe fn get_program_binary(&self, program: GLuint, binary: &mut [u8]) -> (GLsizei, GLenum) {
        let mut length = 0;
        let mut format = 0;
        unsafe {
            self.api.GetProgramBinary(
                program,
                count(binary),
                &mut length,
                &mut format,
                data_mut_ptr(binary),
            )
        };
        (length, format)
    }

    /// `glProgramBinary`.
    #[inline]
    pub unsafe fn program_binary(&self, program: GLuint, binary_format: GLenum, binary: &[u8]) {
        unsafe {
            self.api.ProgramBinary(program, binary_format, data_ptr(binary), count(binary))
        }
    }

    /// `glProgramParameteri`.
    #[inline]
    pub unsafe fn program_parameteri(&self, program: GLuint, pname: GLenum, value: GLint) {
        unsafe { self.api.ProgramParameteri(program, pname, value) }
    }

    // Attributes and fragment outputs.

    /// `glBindAttribLocation`.
    #[inline]
    pub unsafe fn bind_attrib_location(&self, program: GLuint, index: GLuint, name: &CStr) {
        unsafe { self.api.BindAttribLocation(program, index, name.as_ptr()) }
    }

    /// `glGetAttribLocation`, returns `-1` for unknown names.
    #[inline]
    pub unsafe fn get_attrib_location(&self, program: GLuint, name: &CStr) -> GLint {
        unsafe { self.api.GetAttribLocation(program, name.as_ptr()) }
    }

    /// `glGetFragDataLocation`, returns `-1` for unknown names.
    #[inline]
    pub unsafe fn get_frag_data_location(&self, program: GLuint, name: &CStr) -> GLint {
        unsafe { self.api.GetFragDataLocation(program, name.as_ptr()) }
    }

    /// `glGetActiveAttrib`, returns `(length, size, type)`; the name is
    /// written to `name`.
    #[inline]
    pub unsafe fn get_active_attrib(
        &self,
        program: GLuint,
        index: GLuint,
        name: &mut [u8],
    ) -> (GLsizei, GLint, GLenum) {
        let (mut length, mut size, mut ty) = (0, 0, 0);
        unsafe {
            self.api.GetActiveAttrib(
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

    // Uniform introspection.

    /// `glGetUniformLocation`, returns `-1` for unknown names.
    #[inline]
    pub unsafe fn get_uniform_location(&self, program: GLuint, name: &CStr) -> GLint {
        unsafe { self.api.GetUniformLocation(program, name.as_ptr()) }
    }

    /// `glGetActiveUniform`, returns `(length, size, type)`; the name is
    /// written to `name`.
    #[inline]
    pub unsafe fn get_active_uniform(
        &self,
        program: GLuint,
        index: GLuint,
        name: &mut [u8],
    ) -> (GLsizei, GLint, GLenum) {
        let (mut length, mut size, mut ty) = (0, 0, 0);
        unsafe {
            self.api.GetActiveUniform(
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

    /// `glGetActiveUniformsiv`, `params` receives one value per index.
    #[inline]
    pub unsafe fn get_active_uniformsiv(
        &self,
        program: GLuint,
        uniform_indices: &[GLuint],
        pname: GLenum,
        params: &mut [GLint],
    ) {
        unsafe {
            self.api.GetActiveUniformsiv(
                program,
                count(uniform_indices),
                uniform_indices.as_ptr(),
                pname,
                params.as_mut_ptr(),
            )
        }
    }

    /// `glGetUniformIndices`, `indices` receives one value per name;
    /// unknown names yield `INVALID_INDEX`.
    #[inline]
    pub unsafe fn get_uniform_indices(
        &self,
        program: GLuint,
        names: &[&CStr],
        indices: &mut [GLuint],
    ) {
        let names = CStrArray::new(names);
        unsafe {
            self.api.GetUniformIndices(program, names.count(), names.as_ptr(), indices.as_mut_ptr())
        }
    }

    /// `glGetUniformBlockIndex`, returns `INVALID_INDEX` for unknown names.
    #[inline]
    pub unsafe fn get_uniform_block_index(&self, program: GLuint, name: &CStr) -> GLuint {
        unsafe { self.api.GetUniformBlockIndex(program, name.as_ptr()) }
    }

    /// `glGetActiveUniformBlockName`, returns the number of bytes written
    /// excluding the terminator.
    #[inline]
    pub unsafe fn get_active_uniform_block_name(
        &self,
        program: GLuint,
        uniform_block_index: GLuint,
        name: &mut [u8],
    ) -> GLsizei {
        let mut length = 0;
        unsafe {
            self.api.GetActiveUniformBlockName(
                program,
                uniform_block_index,
                count(name),
                &mut length,
                name.as_mut_ptr().cast(),
            )
        };
        length
    }

    /// `glGetActiveUniformBlockiv`.
    #[inline]
    pub unsafe fn get_active_uniform_blockiv(
        &self,
        program: GLuint,
        uniform_block_index: GLuint,
        pname: GLenum,
        params: &mut [GLint],
    ) {
        unsafe {
            self.api.GetActiveUniformBlockiv(program, uniform_block_index, pname, params.as_mut_ptr())
        }
    }

    /// `glUniformBlockBinding`.
    #[inline]
    pub unsafe fn uniform_block_binding(
        &self,
        program: GLuint,
        uniform_block_index: GLuint,
        uniform_block_binding: GLuint,
    ) {
        unsafe { self.api.UniformBlockBinding(program, uniform_block_index, uniform_block_binding) }
    }
}
