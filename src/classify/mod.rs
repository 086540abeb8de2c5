//! Description analysis for the skeleton generator
//!
//! Classifies a layout description into an archetype and extracts the
//! numeric parameters embedded in it.

pub mod archetype;
pub mod lexer;
mod rules;

pub use archetype::Archetype;
pub use lexer::extract_number;
pub use rules::classify;
