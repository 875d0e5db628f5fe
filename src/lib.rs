pub mod action;
pub mod commands;
pub mod config;
pub mod error;
pub mod fs;
pub mod git;
