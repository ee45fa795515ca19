pub mod demo;
pub mod errors;
pub mod logging;
