// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Decorative DNA double-helix animation built on wgpu.
//!
//! Helyx renders a non-interactive B-form double helix as an idle/splash
//! visual: two backbone strands of particles, stochastic hydrogen bonds
//! between base pairs, and randomized link effects, redrawn from scratch
//! at a fixed 30 Hz logical rate.
//!
//! # Key entry points
//!
//! - [`Viewer`] - standalone window running the animation (feature
//!   `viewer`)
//! - [`engine::HelixEngine`] - the animation engine behind any winit
//!   surface
//! - [`model::HelixModel`] - the parametric particle set
//! - [`options::Options`] - runtime configuration (display, colors,
//!   animation) with TOML preset support
//!
//! # Architecture
//!
//! Each logical frame the model re-evaluates every particle position
//! from the tick counter and per-entity random parameters, steps the
//! bond states, and rebuilds the transient link sets. The scene passes
//! then redraw the full frame through an immediate-mode canvas
//! abstraction, which the wgpu backend tessellates into one triangle
//! mesh and draws in a single alpha-blended pass. All randomness flows
//! through an injected generator, so seeded runs replay exactly.

pub mod engine;
pub mod error;
pub mod gpu;
pub mod model;
pub mod options;
pub mod render;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use error::HelyxError;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
