// rent/src/commands/mod.rs
pub mod plot;
