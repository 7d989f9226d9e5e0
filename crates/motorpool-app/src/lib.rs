//! Application service layer - config, demonstration, reports

pub mod config;
pub mod demo;
pub mod report;
