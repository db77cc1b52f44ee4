//! Shared primitives for the dnakit sequence toolkit.
//!
//! `dnakit-core` is the foundation the other dnakit crates build on:
//!
//! - **Error types** — [`DnakitError`] and [`Result`] for structured error handling
//! - **Traits** — Core abstractions like [`Sequence`], [`Annotated`], [`Summarizable`]

pub mod error;
pub mod traits;

pub use error::{DnakitError, Result};
pub use traits::*;
