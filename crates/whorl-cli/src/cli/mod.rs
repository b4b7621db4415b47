//! CLI command implementations.
//!
//! - `render` - Generate one shell and write it as SVG (and optionally PNG)
//! - `breed` - Breed a family of mutated shells from one parent
//! - `genes` - Print a random gene set as JSON
//! - `presets` - List shell families
//! - `patterns` - List outline patterns

pub mod common;
pub mod recipe;
pub mod render;
pub mod breed;
pub mod list;

pub use render::cmd_render;
pub use breed::cmd_breed;
pub use list::{cmd_genes, cmd_patterns, cmd_presets};
