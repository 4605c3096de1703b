//! Entry points grouped by capability area.
//!
//! The split is for readability only, every file is another `impl Gles`
//! block with the same pass-through contract.

mod buffer;
mod framebuffer;
mod query;
mod shader;
mod state;
mod texture;
mod transform_feedback;
mod uniform;
mod vertex;
