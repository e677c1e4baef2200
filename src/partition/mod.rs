pub mod mask;
pub mod partition;
