//! Scene rendering.
//!
//! The layered passes in [`passes`] draw through the [`canvas::Canvas`]
//! abstraction; [`tessellator::MeshCanvas`] turns those calls into a
//! triangle mesh and [`pipeline::CanvasRenderer`] puts the mesh on
//! screen in one alpha-blended wgpu pass.

pub mod canvas;
pub mod passes;
pub mod pipeline;
pub mod tessellator;
