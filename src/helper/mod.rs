pub mod anyhow_panic;
pub mod axis;
pub mod logger;
