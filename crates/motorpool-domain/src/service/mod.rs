//! Domain services

pub mod hierarchy;

pub use hierarchy::{ancestry, direct_specializations};
