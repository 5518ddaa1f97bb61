//! Test utilities for metric development.
//!
//! Provides non-decimal unit fixtures (see [`fixtures`]) and proptest
//! strategies producing distances in the standard units (see
//! [`strategies`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

pub use fixtures::{Fathom, Foot, Inch, Mile, Yard};
