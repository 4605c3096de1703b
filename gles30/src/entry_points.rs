//! The native entry points exposed by [`Gles`].
//!
//! [`Gles`]: crate::Gles

use gles30_sys::gl::Gles2;

macro_rules! entry_points {
    ($($field:ident),* $(,)?) => {
        /// Native symbol names of every entry point the binding layer exposes.
        pub const ENTRY_POINTS: &[&str] = &[$(concat!("gl", stringify!($field))),*];

        /// The first exposed entry point the table failed to resolve.
        pub(crate) fn first_missing(table: &Gles2) -> Option<&'static str> {
            $(
                if !table.$field.is_loaded() {
                    return Some(concat!("gl", stringify!($field)));
                }
            )*
            None
        }
    };
}

entry_points! {
    ActiveTexture, AttachShader, BeginQuery, BeginTransformFeedback, BindAttribLocation,
    BindBuffer, BindBufferBase, BindBufferRange, BindFramebuffer, BindRenderbuffer, BindSampler,
    BindTexture, BindTransformFeedback, BindVertexArray, BlendColor, BlendEquation,
    BlendEquationSeparate, BlendFunc, BlendFuncSeparate, BlitFramebuffer, BufferData,
    BufferSubData, CheckFramebufferStatus, Clear, ClearBufferfi, ClearBufferfv, ClearBufferiv,
    ClearBufferuiv, ClearColor, ClearDepthf, ClearStencil, ClientWaitSync, ColorMask,
    CompileShader, CompressedTexImage2D, CompressedTexImage3D, CompressedTexSubImage2D,
    CompressedTexSubImage3D, CopyBufferSubData, CopyTexImage2D, CopyTexSubImage2D,
    CopyTexSubImage3D, CreateProgram, CreateShader, CullFace, DeleteBuffers, DeleteFramebuffers,
    DeleteProgram, DeleteQueries, DeleteRenderbuffers, DeleteSamplers, DeleteShader, DeleteSync,
    DeleteTextures, DeleteTransformFeedbacks, DeleteVertexArrays, DepthFunc, DepthMask,
    DepthRangef, DetachShader, Disable, DisableVertexAttribArray, DrawArrays, DrawArraysInstanced,
    DrawBuffers, DrawElements, DrawElementsInstanced, DrawRangeElements, Enable,
    EnableVertexAttribArray, EndQuery, EndTransformFeedback, FenceSync, Finish, Flush,
    FlushMappedBufferRange, FramebufferRenderbuffer, FramebufferTexture2D,
    FramebufferTextureLayer, FrontFace, GenBuffers, GenFramebuffers, GenQueries, GenRenderbuffers,
    GenSamplers, GenTextures, GenTransformFeedbacks, GenVertexArrays, GenerateMipmap,
    GetActiveAttrib, GetActiveUniform, GetActiveUniformBlockName, GetActiveUniformBlockiv,
    GetActiveUniformsiv, GetAttachedShaders, GetAttribLocation, GetBooleanv,
    GetBufferParameteri64v, GetBufferParameteriv, GetBufferPointerv, GetError, GetFloatv,
    GetFragDataLocation, GetFramebufferAttachmentParameteriv, GetInteger64i_v, GetInteger64v,
    GetIntegeri_v, GetIntegerv, GetInternalformativ, GetProgramBinary, GetProgramInfoLog,
    GetProgramiv, GetQueryObjectuiv, GetQueryiv, GetRenderbufferParameteriv,
    GetSamplerParameterfv, GetSamplerParameteriv, GetShaderInfoLog, GetShaderPrecisionFormat,
    GetShaderSource, GetShaderiv, GetString, GetStringi, GetSynciv, GetTexParameterfv,
    GetTexParameteriv, GetTransformFeedbackVarying, GetUniformBlockIndex, GetUniformIndices,
    GetUniformLocation, GetUniformfv, GetUniformiv, GetUniformuiv, GetVertexAttribIiv,
    GetVertexAttribIuiv, GetVertexAttribPointerv, GetVertexAttribfv, GetVertexAttribiv, Hint,
    InvalidateFramebuffer, InvalidateSubFramebuffer, IsBuffer, IsEnabled, IsFramebuffer,
    IsProgram, IsQuery, IsRenderbuffer, IsSampler, IsShader, IsSync, IsTexture,
    IsTransformFeedback, IsVertexArray, LineWidth, LinkProgram, MapBufferRange,
    PauseTransformFeedback, PixelStorei, PolygonOffset, ProgramBinary, ProgramParameteri,
    ReadBuffer, ReadPixels, ReleaseShaderCompiler, RenderbufferStorage,
    RenderbufferStorageMultisample, ResumeTransformFeedback, SampleCoverage, SamplerParameterf,
    SamplerParameterfv, SamplerParameteri, SamplerParameteriv, Scissor, ShaderBinary,
    ShaderSource, StencilFunc, StencilFuncSeparate, StencilMask, StencilMaskSeparate, StencilOp,
    StencilOpSeparate, TexImage2D, TexImage3D, TexParameterf, TexParameterfv, TexParameteri,
    TexParameteriv, TexStorage2D, TexStorage3D, TexSubImage2D, TexSubImage3D,
    TransformFeedbackVaryings, Uniform1f, Uniform1fv, Uniform1i, Uniform1iv, Uniform1ui,
    Uniform1uiv, Uniform2f, Uniform2fv, Uniform2i, Uniform2iv, Uniform2ui, Uniform2uiv, Uniform3f,
    Uniform3fv, Uniform3i, Uniform3iv, Uniform3ui, Uniform3uiv, Uniform4f, Uniform4fv, Uniform4i,
    Uniform4iv, Uniform4ui, Uniform4uiv, UniformBlockBinding, UniformMatrix2fv,
    UniformMatrix2x3fv, UniformMatrix2x4fv, UniformMatrix3fv, UniformMatrix3x2fv,
    UniformMatrix3x4fv, UniformMatrix4fv, UniformMatrix4x2fv, UniformMatrix4x3fv, UnmapBuffer,
    UseProgram, ValidateProgram, VertexAttrib1f, VertexAttrib1fv, VertexAttrib2f, VertexAttrib2fv,
    VertexAttrib3f, VertexAttrib3fv, VertexAttrib4f, VertexAttrib4fv, VertexAttribDivisor,
    VertexAttribI4i, VertexAttribI4iv, VertexAttribI4ui, VertexAttribI4uiv, VertexAttribIPointer,
    VertexAttribPointer, Viewport, WaitSync,
}
