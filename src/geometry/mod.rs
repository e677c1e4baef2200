pub mod box_gen;
pub mod error;
pub mod face;
pub mod shape;
pub mod shape_batch;
