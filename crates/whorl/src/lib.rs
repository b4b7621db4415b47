//! # whorl
//!
//! Seashell spirals from a handful of genes.
//!
//! A [`GeneSet`] drives a spiral sampler that emits one box per step along
//! a coiling tube. The boxes are recentred and fitted to a canvas, then
//! each one is stroked onto a [`Surface`] either as a stretched pattern
//! outline or as a primitive ellipse. Shells breed: a child is a mutated
//! copy of its parent's genes.
//!
//! ## Rust Lesson #7: Modules
//!
//! Every module is declared explicitly here; `pub use` re-exports the
//! types most callers need so they can write `whorl::Shell` instead of
//! `whorl::shell::Shell`.

pub mod breed;
pub mod color;
pub mod draw;
pub mod error;
pub mod genes;
pub mod geometry;
pub mod layout;
pub mod patterns;
pub mod presets;
pub mod render;
pub mod shell;
pub mod spiral;
pub mod surface;
pub mod svg;

// Re-export common types at crate root for convenience.
pub use breed::{mutate, mutate_opening};
pub use color::{Gradient, Rgba};
pub use error::ShellError;
pub use genes::{GeneSet, Handedness, MutSize, MAX_SAMPLES};
pub use geometry::{BoundingBox, Point, Segment};
pub use layout::Layout;
pub use patterns::{Pattern, PatternShape};
pub use presets::{random_genes, Preset};
pub use render::DrawStats;
pub use shell::{Lineage, Shell};
pub use spiral::{generate_segments, SpiralSampler};
pub use surface::{Recording, Surface};
pub use svg::SvgSurface;
