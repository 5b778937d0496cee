//! # Data Transfer Objects

pub mod solve_config;
