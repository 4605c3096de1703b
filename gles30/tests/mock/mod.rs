//! In-process stand-in for the driver library.
//!
//! Only the entry points the tests call are implemented; every other symbol
//! resolves to a function that aborts if it's ever reached. State is kept per
//! thread, call [`reset`] at the start of each test.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::ffi::{c_void, CStr};
use std::{ptr, slice};

use gles30::gl;
use gles30::types::*;
use gles30::Gles;

pub const VERSION: &[u8] = b"OpenGL ES 3.0 mock\0";

#[derive(Default)]
struct State {
    error: GLenum,
    next_name: GLuint,
    shaders: HashMap<GLuint, Vec<u8>>,
    buffers: HashMap<GLuint, Vec<u8>>,
    bindings: HashMap<GLenum, GLuint>,
    mapped: HashSet<GLenum>,
    enabled: HashSet<GLenum>,
    unpack_alignment: GLint,
    stencil_clear: GLint,
    clear_color: [GLfloat; 4],
    depth_clear: GLfloat,
    color_mask: [GLboolean; 4],
    depth_mask: GLboolean,
    last_indices: usize,
    last_attrib_pointer: usize,
    last_wait: Option<(usize, GLbitfield, GLuint64)>,
    map_pointer: usize,
    attrib_pointers: HashMap<GLuint, usize>,
    calls: Vec<Call>,
    names: Vec<String>,
    uniform_data: Vec<u32>,
}

/// A recorded call, every argument widened to a machine word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub name: &'static str,
    pub args: Vec<usize>,
}

impl Call {
    pub fn new(name: &'static str, args: &[usize]) -> Self {
        Self { name, args: args.to_vec() }
    }
}

thread_local! {
    static STATE: RefCell<State> = RefCell::new(State::default());
}

fn with<R>(f: impl FnOnce(&mut State) -> R) -> R {
    STATE.with(|state| f(&mut state.borrow_mut()))
}

fn raise(state: &mut State, code: GLenum) {
    // Only the first error is kept until it's polled.
    if state.error == gl::NO_ERROR {
        state.error = code;
    }
}

fn gen_name(state: &mut State) -> GLuint {
    state.next_name += 1;
    state.next_name
}

/// Start from a fresh driver with the initial GL state.
pub fn reset() {
    with(|state| {
        *state = State {
            unpack_alignment: 4,
            color_mask: [gl::TRUE; 4],
            depth_mask: gl::TRUE,
            depth_clear: 1.0,
            ..State::default()
        }
    });
}

fn record(state: &mut State, name: &'static str, args: &[usize]) {
    state.calls.push(Call::new(name, args));
}

/// The most recent call made through one of the recording entry points.
pub fn last_call() -> Option<Call> {
    with(|state| state.calls.last().cloned())
}

/// Strings read from the last name array handed to the driver.
pub fn names() -> Vec<String> {
    with(|state| state.names.clone())
}

/// Bit patterns of the components read by the last uniform array upload.
pub fn uniform_data() -> Vec<u32> {
    with(|state| state.uniform_data.clone())
}

/// Pointer argument of the last `glDrawElements`.
pub fn last_indices() -> usize {
    with(|state| state.last_indices)
}

/// Pointer argument of the last `glVertexAttribPointer`.
pub fn last_attrib_pointer() -> usize {
    with(|state| state.last_attrib_pointer)
}

/// `(sync, flags, timeout)` of the last `glClientWaitSync` or `glWaitSync`.
pub fn last_wait() -> Option<(usize, GLbitfield, GLuint64)> {
    with(|state| state.last_wait)
}

/// A table resolved entirely against the mock.
pub fn gles() -> Gles {
    Gles::load_with(proc_address).expect("mock resolves every entry point")
}

pub fn proc_address(symbol: &str) -> *const c_void {
    match symbol {
        "glGetError" => get_error as *const c_void,
        "glEnable" => enable as *const c_void,
        "glDisable" => disable as *const c_void,
        "glIsEnabled" => is_enabled as *const c_void,
        "glPixelStorei" => pixel_storei as *const c_void,
        "glClearStencil" => clear_stencil as *const c_void,
        "glClearColor" => clear_color as *const c_void,
        "glClearDepthf" => clear_depthf as *const c_void,
        "glColorMask" => color_mask as *const c_void,
        "glDepthMask" => depth_mask as *const c_void,
        "glGetIntegerv" => get_integerv as *const c_void,
        "glGetFloatv" => get_floatv as *const c_void,
        "glGetBooleanv" => get_booleanv as *const c_void,
        "glGetString" => get_string as *const c_void,
        "glCreateShader" => create_shader as *const c_void,
        "glIsShader" => is_shader as *const c_void,
        "glDeleteShader" => delete_shader as *const c_void,
        "glShaderSource" => shader_source as *const c_void,
        "glGetShaderSource" => get_shader_source as *const c_void,
        "glGenBuffers" => gen_buffers as *const c_void,
        "glIsBuffer" => is_buffer as *const c_void,
        "glBindBuffer" => bind_buffer as *const c_void,
        "glBufferData" => buffer_data as *const c_void,
        "glMapBufferRange" => map_buffer_range as *const c_void,
        "glUnmapBuffer" => unmap_buffer as *const c_void,
        "glDrawElements" => draw_elements as *const c_void,
        "glVertexAttribPointer" => vertex_attrib_pointer as *const c_void,
        "glVertexAttribIPointer" => vertex_attrib_i_pointer as *const c_void,
        "glGetVertexAttribPointerv" => get_vertex_attrib_pointerv as *const c_void,
        "glGetBufferPointerv" => get_buffer_pointerv as *const c_void,
        "glDrawElementsInstanced" => draw_elements_instanced as *const c_void,
        "glDrawRangeElements" => draw_range_elements as *const c_void,
        "glTransformFeedbackVaryings" => transform_feedback_varyings as *const c_void,
        "glGetTransformFeedbackVarying" => get_transform_feedback_varying as *const c_void,
        "glGetUniformIndices" => get_uniform_indices as *const c_void,
        "glGetActiveAttrib" => get_active_attrib as *const c_void,
        "glGetActiveUniform" => get_active_uniform as *const c_void,
        "glGetProgramBinary" => get_program_binary as *const c_void,
        "glGetSynciv" => get_synciv as *const c_void,
        "glUniform3fv" => uniform_3fv as *const c_void,
        "glUniform2iv" => uniform_2iv as *const c_void,
        "glUniform4uiv" => uniform_4uiv as *const c_void,
        "glUniformMatrix4fv" => uniform_matrix_4fv as *const c_void,
        "glUniformMatrix2x3fv" => uniform_matrix_2x3fv as *const c_void,
        "glFenceSync" => fence_sync as *const c_void,
        "glClientWaitSync" => client_wait_sync as *const c_void,
        "glWaitSync" => wait_sync as *const c_void,
        _ => not_implemented as *const c_void,
    }
}

extern "system" fn not_implemented() {
    std::process::abort();
}

extern "system" fn get_error() -> GLenum {
    with(|state| std::mem::replace(&mut state.error, gl::NO_ERROR))
}

extern "system" fn enable(cap: GLenum) {
    with(|state| state.enabled.insert(cap));
}

extern "system" fn disable(cap: GLenum) {
    with(|state| state.enabled.remove(&cap));
}

extern "system" fn is_enabled(cap: GLenum) -> GLboolean {
    with(|state| if state.enabled.contains(&cap) { gl::TRUE } else { gl::FALSE })
}

extern "system" fn pixel_storei(pname: GLenum, param: GLint) {
    with(|state| match pname {
        gl::UNPACK_ALIGNMENT => state.unpack_alignment = param,
        _ => raise(state, gl::INVALID_ENUM),
    });
}

extern "system" fn clear_stencil(s: GLint) {
    with(|state| state.stencil_clear = s);
}

extern "system" fn clear_color(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
    with(|state| state.clear_color = [red, green, blue, alpha]);
}

extern "system" fn clear_depthf(depth: GLfloat) {
    with(|state| state.depth_clear = depth);
}

extern "system" fn color_mask(red: GLboolean, green: GLboolean, blue: GLboolean, alpha: GLboolean) {
    with(|state| state.color_mask = [red, green, blue, alpha]);
}

extern "system" fn depth_mask(flag: GLboolean) {
    with(|state| state.depth_mask = flag);
}

extern "system" fn get_integerv(pname: GLenum, data: *mut GLint) {
    let value = with(|state| match pname {
        gl::UNPACK_ALIGNMENT => Some(state.unpack_alignment),
        gl::STENCIL_CLEAR_VALUE => Some(state.stencil_clear),
        gl::ARRAY_BUFFER_BINDING => Some(*state.bindings.get(&gl::ARRAY_BUFFER).unwrap_or(&0) as GLint),
        _ => {
            raise(state, gl::INVALID_ENUM);
            None
        },
    });
    if let Some(value) = value {
        unsafe { *data = value };
    }
}

extern "system" fn get_floatv(pname: GLenum, data: *mut GLfloat) {
    let values = with(|state| match pname {
        gl::COLOR_CLEAR_VALUE => state.clear_color.to_vec(),
        gl::DEPTH_CLEAR_VALUE => vec![state.depth_clear],
        _ => {
            raise(state, gl::INVALID_ENUM);
            Vec::new()
        },
    });
    unsafe { ptr::copy_nonoverlapping(values.as_ptr(), data, values.len()) };
}

extern "system" fn get_booleanv(pname: GLenum, data: *mut GLboolean) {
    let values = with(|state| match pname {
        gl::COLOR_WRITEMASK => state.color_mask.to_vec(),
        gl::DEPTH_WRITEMASK => vec![state.depth_mask],
        _ => {
            raise(state, gl::INVALID_ENUM);
            Vec::new()
        },
    });
    unsafe { ptr::copy_nonoverlapping(values.as_ptr(), data, values.len()) };
}

extern "system" fn get_string(name: GLenum) -> *const GLubyte {
    match name {
        gl::VERSION => VERSION.as_ptr(),
        _ => {
            with(|state| raise(state, gl::INVALID_ENUM));
            ptr::null()
        },
    }
}

extern "system" fn create_shader(ty: GLenum) -> GLuint {
    with(|state| match ty {
        gl::VERTEX_SHADER | gl::FRAGMENT_SHADER => {
            let name = gen_name(state);
            state.shaders.insert(name, Vec::new());
            name
        },
        _ => {
            raise(state, gl::INVALID_ENUM);
            0
        },
    })
}

extern "system" fn is_shader(shader: GLuint) -> GLboolean {
    with(|state| if state.shaders.contains_key(&shader) { gl::TRUE } else { gl::FALSE })
}

extern "system" fn delete_shader(shader: GLuint) {
    with(|state| {
        if shader != 0 && state.shaders.remove(&shader).is_none() {
            raise(state, gl::INVALID_VALUE);
        }
    });
}

extern "system" fn shader_source(
    shader: GLuint,
    count: GLsizei,
    strings: *const *const GLchar,
    lengths: *const GLint,
) {
    let mut source = Vec::new();
    for i in 0..count as usize {
        let (string, length) = unsafe { (*strings.add(i), *lengths.add(i)) };
        source.extend_from_slice(unsafe { slice::from_raw_parts(string.cast::<u8>(), length as usize) });
    }

    with(|state| match state.shaders.get_mut(&shader) {
        Some(stored) => *stored = source,
        None => raise(state, gl::INVALID_VALUE),
    });
}

extern "system" fn get_shader_source(
    shader: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    source: *mut GLchar,
) {
    with(|state| {
        let Some(stored) = state.shaders.get(&shader) else {
            raise(state, gl::INVALID_VALUE);
            return;
        };
        if buf_size <= 0 {
            return;
        }

        let written = stored.len().min(buf_size as usize - 1);
        unsafe {
            ptr::copy_nonoverlapping(stored.as_ptr(), source.cast::<u8>(), written);
            *source.add(written) = 0;
            if !length.is_null() {
                *length = written as GLsizei;
            }
        }
    });
}

extern "system" fn gen_buffers(n: GLsizei, buffers: *mut GLuint) {
    with(|state| {
        for i in 0..n as usize {
            let name = gen_name(state);
            unsafe { *buffers.add(i) = name };
        }
    });
}

extern "system" fn is_buffer(buffer: GLuint) -> GLboolean {
    with(|state| if state.buffers.contains_key(&buffer) { gl::TRUE } else { gl::FALSE })
}

extern "system" fn bind_buffer(target: GLenum, buffer: GLuint) {
    with(|state| {
        state.bindings.insert(target, buffer);
        // Binding a generated name creates the object.
        state.buffers.entry(buffer).or_default();
    });
}

extern "system" fn buffer_data(target: GLenum, size: GLsizeiptr, data: *const c_void, _usage: GLenum) {
    with(|state| {
        let Some(&buffer) = state.bindings.get(&target).filter(|&&b| b != 0) else {
            raise(state, gl::INVALID_OPERATION);
            return;
        };

        let contents = if data.is_null() {
            vec![0; size as usize]
        } else {
            unsafe { slice::from_raw_parts(data.cast::<u8>(), size as usize) }.to_vec()
        };
        state.buffers.insert(buffer, contents);
    });
}

extern "system" fn map_buffer_range(
    target: GLenum,
    offset: GLintptr,
    length: GLsizeiptr,
    _access: GLbitfield,
) -> *mut c_void {
    with(|state| {
        let buffer = state.bindings.get(&target).copied().unwrap_or(0);
        let in_range = state
            .buffers
            .get(&buffer)
            .map_or(false, |contents| (offset + length) as usize <= contents.len());
        if buffer == 0 || !in_range || state.mapped.contains(&target) {
            raise(state, gl::INVALID_OPERATION);
            return ptr::null_mut();
        }

        state.mapped.insert(target);
        let contents = state.buffers.get_mut(&buffer).unwrap();
        let pointer: *mut c_void = unsafe { contents.as_mut_ptr().add(offset as usize).cast() };
        state.map_pointer = pointer as usize;
        pointer
    })
}

extern "system" fn unmap_buffer(target: GLenum) -> GLboolean {
    with(|state| {
        if state.mapped.remove(&target) {
            state.map_pointer = 0;
            gl::TRUE
        } else {
            raise(state, gl::INVALID_OPERATION);
            gl::FALSE
        }
    })
}

extern "system" fn draw_elements(_mode: GLenum, _count: GLsizei, _ty: GLenum, indices: *const c_void) {
    with(|state| state.last_indices = indices as usize);
}

extern "system" fn vertex_attrib_pointer(
    index: GLuint,
    _size: GLint,
    _ty: GLenum,
    _normalized: GLboolean,
    _stride: GLsizei,
    pointer: *const c_void,
) {
    with(|state| {
        state.last_attrib_pointer = pointer as usize;
        state.attrib_pointers.insert(index, pointer as usize);
    });
}

extern "system" fn fence_sync(condition: GLenum, flags: GLbitfield) -> GLsync {
    if condition != gl::SYNC_GPU_COMMANDS_COMPLETE || flags != 0 {
        with(|state| raise(state, gl::INVALID_ENUM));
        return ptr::null();
    }
    0x5ec0usize as GLsync
}

extern "system" fn client_wait_sync(sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum {
    with(|state| state.last_wait = Some((sync as usize, flags, timeout)));
    gl::CONDITION_SATISFIED
}

extern "system" fn wait_sync(sync: GLsync, flags: GLbitfield, timeout: GLuint64) {
    with(|state| state.last_wait = Some((sync as usize, flags, timeout)));
}

extern "system" fn vertex_attrib_i_pointer(
    index: GLuint,
    size: GLint,
    ty: GLenum,
    stride: GLsizei,
    pointer: *const c_void,
) {
    with(|state| {
        state.attrib_pointers.insert(index, pointer as usize);
        let args = [index as usize, size as usize, ty as usize, stride as usize, pointer as usize];
        record(state, "glVertexAttribIPointer", &args);
    });
}

extern "system" fn get_vertex_attrib_pointerv(index: GLuint, pname: GLenum, pointer: *mut *mut c_void) {
    with(|state| match (pname, state.attrib_pointers.get(&index)) {
        (gl::VERTEX_ATTRIB_ARRAY_POINTER, Some(&value)) => unsafe { *pointer = value as *mut c_void },
        (gl::VERTEX_ATTRIB_ARRAY_POINTER, None) => unsafe { *pointer = ptr::null_mut() },
        _ => raise(state, gl::INVALID_ENUM),
    });
}

extern "system" fn get_buffer_pointerv(_target: GLenum, pname: GLenum, params: *mut *mut c_void) {
    with(|state| match pname {
        gl::BUFFER_MAP_POINTER => unsafe { *params = state.map_pointer as *mut c_void },
        _ => raise(state, gl::INVALID_ENUM),
    });
}

extern "system" fn draw_elements_instanced(
    mode: GLenum,
    count: GLsizei,
    ty: GLenum,
    indices: *const c_void,
    instance_count: GLsizei,
) {
    let args = [mode as usize, count as usize, ty as usize, indices as usize, instance_count as usize];
    with(|state| record(state, "glDrawElementsInstanced", &args));
}

extern "system" fn draw_range_elements(
    mode: GLenum,
    start: GLuint,
    end: GLuint,
    count: GLsizei,
    ty: GLenum,
    indices: *const c_void,
) {
    let args = [
        mode as usize,
        start as usize,
        end as usize,
        count as usize,
        ty as usize,
        indices as usize,
    ];
    with(|state| record(state, "glDrawRangeElements", &args));
}

unsafe fn read_names(count: GLsizei, names: *const *const GLchar) -> Vec<String> {
    (0..count as usize)
        .map(|i| unsafe { CStr::from_ptr(*names.add(i)) }.to_string_lossy().into_owned())
        .collect()
}

extern "system" fn transform_feedback_varyings(
    program: GLuint,
    count: GLsizei,
    varyings: *const *const GLchar,
    buffer_mode: GLenum,
) {
    let names = unsafe { read_names(count, varyings) };
    with(|state| {
        state.names = names;
        let args = [program as usize, count as usize, buffer_mode as usize];
        record(state, "glTransformFeedbackVaryings", &args);
    });
}

extern "system" fn get_uniform_indices(
    program: GLuint,
    count: GLsizei,
    names: *const *const GLchar,
    indices: *mut GLuint,
) {
    let names = unsafe { read_names(count, names) };
    // Each name reports its position in the array, offset so `0` can't pass
    // by accident.
    for i in 0..names.len() {
        unsafe { *indices.add(i) = 100 + i as GLuint };
    }
    with(|state| {
        state.names = names;
        record(state, "glGetUniformIndices", &[program as usize, count as usize]);
    });
}

/// Write `name` like the driver does: truncated to `buf_size - 1` bytes plus
/// a terminator, with the written length excluding it.
unsafe fn write_name(name: &[u8], buf_size: GLsizei, length: *mut GLsizei, out: *mut GLchar) {
    let written = if buf_size > 0 { name.len().min(buf_size as usize - 1) } else { 0 };
    unsafe {
        if buf_size > 0 {
            ptr::copy_nonoverlapping(name.as_ptr(), out.cast::<u8>(), written);
            *out.add(written) = 0;
        }
        if !length.is_null() {
            *length = written as GLsizei;
        }
    }
}

/// Variable reported for every index by the active attribute and uniform
/// queries: a name, an array size of `index + 2` and a type.
pub const ACTIVE_ATTRIB: (&str, GLenum) = ("a_position", gl::FLOAT_VEC3);
pub const ACTIVE_UNIFORM: (&str, GLenum) = ("u_transform", gl::FLOAT_MAT4);
pub const VARYING: (&str, GLenum) = ("v_color", gl::FLOAT_VEC4);

extern "system" fn get_active_attrib(
    _program: GLuint,
    index: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    size: *mut GLint,
    ty: *mut GLenum,
    name: *mut GLchar,
) {
    unsafe {
        write_name(ACTIVE_ATTRIB.0.as_bytes(), buf_size, length, name);
        *size = index as GLint + 2;
        *ty = ACTIVE_ATTRIB.1;
    }
}

extern "system" fn get_active_uniform(
    _program: GLuint,
    index: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    size: *mut GLint,
    ty: *mut GLenum,
    name: *mut GLchar,
) {
    unsafe {
        write_name(ACTIVE_UNIFORM.0.as_bytes(), buf_size, length, name);
        *size = index as GLint + 2;
        *ty = ACTIVE_UNIFORM.1;
    }
}

extern "system" fn get_transform_feedback_varying(
    _program: GLuint,
    index: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    size: *mut GLsizei,
    ty: *mut GLenum,
    name: *mut GLchar,
) {
    unsafe {
        write_name(VARYING.0.as_bytes(), buf_size, length, name);
        *size = index as GLsizei + 2;
        *ty = VARYING.1;
    }
}

pub const PROGRAM_BINARY: &[u8] = &[0xde, 0xad, 0xbe, 0xef, 0x01];
pub const PROGRAM_BINARY_FORMAT: GLenum = 0x9130;

extern "system" fn get_program_binary(
    _program: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    format: *mut GLenum,
    binary: *mut c_void,
) {
    let written = PROGRAM_BINARY.len().min(buf_size.max(0) as usize);
    unsafe {
        ptr::copy_nonoverlapping(PROGRAM_BINARY.as_ptr(), binary.cast::<u8>(), written);
        *length = written as GLsizei;
        *format = PROGRAM_BINARY_FORMAT;
    }
}

extern "system" fn get_synciv(
    _sync: GLsync,
    pname: GLenum,
    buf_size: GLsizei,
    length: *mut GLsizei,
    values: *mut GLint,
) {
    let value = match pname {
        gl::OBJECT_TYPE => gl::SYNC_FENCE,
        gl::SYNC_STATUS => gl::SIGNALED,
        gl::SYNC_CONDITION => gl::SYNC_GPU_COMMANDS_COMPLETE,
        _ => {
            with(|state| raise(state, gl::INVALID_ENUM));
            return;
        },
    };

    let written = if buf_size > 0 { 1 } else { 0 };
    unsafe {
        if written > 0 {
            *values = value as GLint;
        }
        if !length.is_null() {
            *length = written;
        }
    }
}

unsafe fn uniform_array<T: Copy>(
    name: &'static str,
    location: GLint,
    count: GLsizei,
    transpose: Option<GLboolean>,
    value: *const T,
    components: usize,
    bits: fn(T) -> u32,
) {
    let data = unsafe { slice::from_raw_parts(value, count as usize * components) };
    with(|state| {
        state.uniform_data = data.iter().map(|&v| bits(v)).collect();
        let mut args = vec![location as usize, count as usize];
        args.extend(transpose.map(usize::from));
        args.push(value as usize);
        record(state, name, &args);
    });
}

extern "system" fn uniform_3fv(location: GLint, count: GLsizei, value: *const GLfloat) {
    unsafe { uniform_array("glUniform3fv", location, count, None, value, 3, f32::to_bits) }
}

extern "system" fn uniform_2iv(location: GLint, count: GLsizei, value: *const GLint) {
    unsafe { uniform_array("glUniform2iv", location, count, None, value, 2, |v| v as u32) }
}

extern "system" fn uniform_4uiv(location: GLint, count: GLsizei, value: *const GLuint) {
    unsafe { uniform_array("glUniform4uiv", location, count, None, value, 4, |v| v) }
}

extern "system" fn uniform_matrix_4fv(
    location: GLint,
    count: GLsizei,
    transpose: GLboolean,
    value: *const GLfloat,
) {
    let name = "glUniformMatrix4fv";
    unsafe { uniform_array(name, location, count, Some(transpose), value, 16, f32::to_bits) }
}

extern "system" fn uniform_matrix_2x3fv(
    location: GLint,
    count: GLsizei,
    transpose: GLboolean,
    value: *const GLfloat,
) {
    let name = "glUniformMatrix2x3fv";
    unsafe { uniform_array(name, location, count, Some(transpose), value, 6, f32::to_bits) }
}
