//! Shared test utilities for chanlog integration harnesses.
//!
//! Import via `mod common; use common::*;` at the top of each harness file.
#![allow(dead_code)]

pub mod builders;
pub mod capture;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use capture::*;
