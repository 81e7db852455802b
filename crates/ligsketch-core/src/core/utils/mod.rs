pub mod geometry;
pub mod rng;
