// rent/src/ui/mod.rs
//! Terminal presentation helpers: colour theme and formatted messages.

pub mod output_format;
pub mod theme;
