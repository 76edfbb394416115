pub mod config;
pub mod diagram;
pub mod error;
pub mod model;
pub mod schema;
pub mod startup;
