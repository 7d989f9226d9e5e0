//! Domain models and services for the vehicle hierarchy

pub mod model;
pub mod service;

pub use model::*;
