//! Storage primitives backing the graph representations.

pub mod matrix;

pub use matrix::DenseMatrix;
