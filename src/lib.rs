pub mod alphabet;
pub mod config;
pub mod error;
pub mod mapping;
pub mod model;
pub mod optimizer;
pub mod scorer;
// cmd and reports are binary modules (in main.rs or distinct files).
