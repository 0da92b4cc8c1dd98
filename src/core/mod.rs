//! Configuration and domain types shared by the pipeline

pub mod config;
pub mod models;
