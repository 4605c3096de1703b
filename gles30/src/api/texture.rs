//! Textures and sampler objects.

use bytemuck::Pod;

use gles30_sys::gl::types::*;

use crate::marshal::{count, data_ptr, from_gl_bool, opt_data_ptr};
use crate::Gles;

impl Gles {
    /// `glActiveTexture`.
    #[inline]
    pub unsafe fn active_texture(&self, texture: GLenum) {
        unsafe { self.api.ActiveTexture(texture) }
    }

    /// `glGenTextures`, fills every slot of `textures`.
    #[inline]
    pub unsafe fn gen_textures(&self, textures: &mut [GLuint]) {
        unsafe { self.api.GenTextures(count(textures), textures.as_mut_ptr()) }
    }

    /// `glDeleteTextures`.
    #[inline]
    pub unsafe fn delete_textures(&self, textures: &[GLuint]) {
        unsafe { self.api.DeleteTextures(count(textures), textures.as_ptr()) }
    }

    /// `glIsTexture`.
    #[inline]
    pub unsafe fn is_texture(&self, texture: GLuint) -> bool {
        from_gl_bool(unsafe { self.api.IsTexture(texture) })
    }

    /// `glBindTexture`.
    #[inline]
    pub unsafe fn bind_texture(&self, target: GLenum, texture: GLuint) {
        unsafe { self.api.BindTexture(target, texture) }
    }

    /// `glGenerateMipmap`.
    #[inline]
    pub unsafe fn generate_mipmap(&self, target: GLenum) {
        unsafe { self.api.GenerateMipmap(target) }
    }

    // Parameters.

    /// `glTexParameterf`.
    #[inline]
    pub unsafe fn tex_parameterf(&self, target: GLenum, pname: GLenum, param: GLfloat) {
        unsafe { self.api.TexParameterf(target, pname, param) }
    }

    /// `glTexParameteri`.
    #[inline]
    pub unsafe fn tex_parameteri(&self, target: GLenum, pname: GLenum, param: GLint) {
        unsafe { self.api.TexParameteri(target, pname, param) }
    }

    /// `glTexParameterfv`.
    #[inline]
    pub unsafe fn tex_parameterfv(&self, target: GLenum, pname: GLenum, params: &[GLfloat]) {
        unsafe { self.api.TexParameterfv(target, pname, params.as_ptr()) }
    }

    /// `glTexParameteriv`.
    #[inline]
    pub unsafe fn tex_parameteriv(&self, target: GLenum, pname: GLenum, params: &[GLint]) {
        unsafe { self.api.TexParameteriv(target, pname, params.as_ptr()) }
    }

    /// `glGetTexParameterfv`.
    #[inline]
    pub unsafe fn get_tex_parameterfv(&self, target: GLenum, pname: GLenum, params: &mut [GLfloat]) {
        unsafe { self.api.GetTexParameterfv(target, pname, params.as_mut_ptr()) }
    }

    /// `glGetTexParameteriv`.
    #[inline]
    pub unsafe fn get_tex_parameteriv(&self, target: GLenum, pname: GLenum, params: &mut [GLint]) {
        unsafe { self.api.GetTexParameteriv(target, pname, params.as_mut_ptr()) }
    }

    // Storage and uploads. `None` pixels pass a null pointer, which either
    // allocates uninitialized storage or reads from the bound
    // `PIXEL_UNPACK_BUFFER` at offset zero.

    /// `glTexImage2D`.
    #[inline]
    pub unsafe fn tex_image_2d<T: Pod>(
        &self,
        target: GLenum,
        level: GLint,
        internalformat: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        format: GLenum,
        ty: GLenum,
        pixels: Option<&[T]>,
    ) {
        unsafe {
            self.api.TexImage2D(
                target,
                level,
                internalformat,
                width,
                height,
                border,
                format,
                ty,
                opt_data_ptr(pixels),
            )
        }
    }

    /// `glTexImage3D`.
    #[inline]
    pub unsafe fn tex_image_3d<T: Pod>(
        &self,
        target: GLenum,
        level: GLint,
        internalformat: GLint,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        border: GLint,
        format: GLenum,
        ty: GLenum,
        pixels: Option<&[T]>,
    ) {
        unsafe {
            self.api.TexImage3D(
                target,
                level,
                internalformat,
                width,
                height,
                depth,
                border,
                format,
                ty,
                opt_data_ptr(pixels),
            )
        }
    }

    /// `glTexSubImage2D`.
    #[inline]
    pub unsafe fn tex_sub_image_2d<T: Pod>(
        &self,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        ty: GLenum,
        pixels: &[T],
    ) {
        unsafe {
            self.api.TexSubImage2D(
                target,
                level,
                xoffset,
                yoffset,
                width,
                height,
                format,
                ty,
                data_ptr(pixels),
            )
        }
    }

    /// `glTexSubImage3D`.
    #[inline]
    pub unsafe fn tex_sub_image_3d<T: Pod>(
        &self,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        zoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        format: GLenum,
        ty: GLenum,
        pixels: &[T],
    ) {
        unsafe {
            self.api.TexSubImage3D(
                target,
                level,
                xoffset,
                yoffset,
                zoffset,
                width,
                height,
                depth,
                format,
                ty,
                data_ptr(pixels),
            )
        }
    }

    /// `glTexStorage2D`.
    #[inline]
    pub unsafe fn tex_storage_2d(
        &self,
        target: GLenum,
        levels: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
    ) {
        unsafe { self.api.TexStorage2D(target, levels, internalformat, width, height) }
    }

    /// `glTexStorage3D`.
    #[inline]
    pub unsafe fn tex_storage_3d(
        &self,
        target: GLenum,
        levels: GLsizei,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
    ) {
        unsafe { self.api.TexStorage3D(target, levels, internalformat, width, height, depth) }
    }

    /// `glCompressedTexImage2D`, `imageSize` is the byte length of `data`.
    #[inline]
    pub unsafe fn compressed_tex_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        data: &[u8],
    ) {
        unsafe {
            self.api.CompressedTexImage2D(
                target,
                level,
                internalformat,
                width,
                height,
                border,
                count(data),
                data_ptr(data),
            )
        }
    }

    /// `glCompressedTexImage3D`, `imageSize` is the byte length of `data`.
    #[inline]
    pub unsafe fn compressed_tex_image_3d(
        &self,
        target: GLenum,
        level: GLint,
        internalformat: GLenum,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        border: GLint,
        data: &[u8],
    ) {
        unsafe {
            self.api.CompressedTexImage3D(
                target,
                level,
                internalformat,
                width,
                height,
                depth,
                border,
                count(data),
                data_ptr(data),
            )
        }
    }

    /// `glCompressedTexSubImage2D`.
    #[inline]
    pub unsafe fn compressed_tex_sub_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        data: &[u8],
    ) {
        unsafe {
            self.api.CompressedTexSubImage2D(
                target,
                level,
                xoffset,
                yoffset,
                width,
                height,
                format,
                count(data),
                data_ptr(data),
            )
        }
    }

    /// `glCompressedTexSubImage3D`.
    #[inline]
    pub unsafe fn compressed_tex_sub_image_3d(
        &self,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        zoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        format: GLenum,
        data: &[u8],
    ) {
        unsafe {
            self.api.CompressedTexSubImage3D(
                target,
                level,
                xoffset,
                yoffset,
                zoffset,
                width,
                height,
                depth,
                format,
                count(data),
                data_ptr(data),
            )
        }
    }

    /// `glCopyTexImage2D`.
    #[inline]
    pub unsafe fn copy_tex_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        internalformat: GLenum,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
    ) {
        unsafe {
            self.api.CopyTexImage2D(target, level, internalformat, x, y, width, height, border)
        }
    }

    /// `glCopyTexSubImage2D`.
    #[inline]
    pub unsafe fn copy_tex_sub_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    ) {
        unsafe {
            self.api.CopyTexSubImage2D(target, level, xoffset, yoffset, x, y, width, height)
        }
    }

    /// `glCopyTexSubImage3D`.
    #[inline]
    pub unsafe fn copy_tex_sub_image_3d(
        &self,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        zoffset: GLint,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
    ) {
        unsafe {
            self.api.CopyTexSubImage3D(target, level, xoffset, yoffset, zoffset, x, y, width, height)
        }
    }

    // Sampler objects.

    /// `glGenSamplers`, fills every slot of `samplers`.
    #[inline]
    pub unsafe fn gen_samplers(&self, samplers: &mut [GLuint]) {
        unsafe { self.api.GenSamplers(count(samplers), samplers.as_mut_ptr()) }
    }

    /// `glDeleteSamplers`.
    #[inline]
    pub unsafe fn delete_samplers(&self, samplers: &[GLuint]) {
        unsafe { self.api.DeleteSamplers(count(samplers), samplers.as_ptr()) }
    }

    /// `glIsSampler`.
    #[inline]
    pub unsafe fn is_sampler(&self, sampler: GLuint) -> bool {
        from_gl_bool(unsafe { self.api.IsSampler(sampler) })
    }

    /// `glBindSampler`.
    #[inline]
    pub unsafe fn bind_sampler(&self, unit: GLuint, sampler: GLuint) {
        unsafe { self.api.BindSampler(unit, sampler) }
    }

    /// `glSamplerParameterf`.
    #[inline]
    pub unsafe fn sampler_parameterf(&self, sampler: GLuint, pname: GLenum, param: GLfloat) {
        unsafe { self.api.SamplerParameterf(sampler, pname, param) }
    }

    /// `glSamplerParameteri`.
    #[inline]
    pub unsafe fn sampler_parameteri(&self, sampler: GLuint, pname: GLenum, param: GLint) {
        unsafe { self.api.SamplerParameteri(sampler, pname, param) }
    }

    /// `glSamplerParameterfv`.
    #[inline]
    pub unsafe fn sampler_parameterfv(&self, sampler: GLuint, pname: GLenum, params: &[GLfloat]) {
        unsafe { self.api.SamplerParameterfv(sampler, pname, params.as_ptr()) }
    }

    /// `glSamplerParameteriv`.
    #[inline]
    pub unsafe fn sampler_parameteriv(&self, sampler: GLuint, pname: GLenum, params: &[GLint]) {
        unsafe { self.api.SamplerParameteriv(sampler, pname, params.as_ptr()) }
    }

    /// `glGetSamplerParameterfv`.
    #[inline]
    pub unsafe fn get_sampler_parameterfv(
        &self,
        sampler: GLuint,
        pname: GLenum,
        params: &mut [GLfloat],
    ) {
        unsafe { self.api.GetSamplerParameterfv(sampler, pname, params.as_mut_ptr()) }
    }

    /// `glGetSamplerParameteriv`.
    #[inline]
    pub unsafe fn get_sampler_parameteriv(
        &self,
        sampler: GLuint,
        pname: GLenum,
        params: &mut [GLint],
    ) {
        unsafe { self.api.GetSamplerParameteriv(sampler, pname, params.as_mut_ptr()) }
    }
}
