//! Provide some tools for proc-macro crates.
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro crate")]
#![allow(clippy::std_instead_of_core, reason = "proc-macro crate")]

extern crate proc_macro;

// -----------------------------------------------------------------------------
// Modules

mod manifest;

pub mod full_path;

// -----------------------------------------------------------------------------
// Exports

pub use manifest::Manifest;
