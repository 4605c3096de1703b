//! Generated OpenGL ES 3.0 bindings.
//!
//! The table is produced by `gl_generator` from the Khronos registry with the
//! `gles2` API at version 3.0 and no fallbacks, so every `FnPtr` in [`Gles2`]
//! either points at the symbol of the same name or reports `is_loaded() ==
//! false`.

include!(concat!(env!("OUT_DIR"), "/gles30_bindings.rs"));
