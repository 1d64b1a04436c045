//! fh-layout: pipe layout synthesis for rectangular rooms.

pub mod serpentine;

pub use serpentine::generate_serpentine;
