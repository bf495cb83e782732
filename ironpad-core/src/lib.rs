/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # IronPad Core
//!
//! Core traits and error definitions for the IronPad fixed-width padding library.
//!
//! This crate provides the building blocks shared by all IronPad crates:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Padder trait**: The `pad`/`unpad` capability set for text and binary data
//!
//! ## Fixed-Width Contract
//!
//! Any value whose length is at most the declared field width can be padded to
//! exactly that width, and a padded value is recovered by stripping the maximal
//! run of the pad unit from the padded side.

pub mod error;
pub mod padder;

pub use error::{FieldError, IronPadError, PadError, Result};
pub use padder::Padder;
