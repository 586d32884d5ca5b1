//! Terminal presentation layer: the precomputed sky gradient and the
//! ratatui scene renderer. Consumes simulation state, never mutates it.

pub mod background;
pub mod scene;
