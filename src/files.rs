//! File path helpers for derived outputs and archive names.

pub mod filename;

pub use filename::{derive_output_path, sanitize_name};
