//! GPU context and buffer plumbing.

pub mod frame_buffer;
pub mod render_context;
