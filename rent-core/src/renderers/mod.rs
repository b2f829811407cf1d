// rent-core/src/renderers/mod.rs
//! Concrete implementations of the `SeriesRenderer` trait.

pub mod image_renderer;
pub mod terminal_renderer;
pub mod text_backend;
