//! Integration tests: command dispatch against real git repositories
//!
//! Each test builds its own repository (and, where needed, a bare "remote")
//! in a temp directory, so tests are independent and run in parallel.

pub mod helpers;

mod listing;
mod new;
