//! WebGPU rendering module
//!
//! Reads simulation state once per frame and repaints the full playfield.
//! No simulation logic lives here.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
