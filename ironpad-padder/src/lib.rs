/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # IronPad Padder
//!
//! Padder implementations for fixed-width textual and binary fields.
//!
//! ## Placements
//!
//! - [`RightPadder`]: appends the pad unit, typical for alphabetic fields
//! - [`LeftPadder`]: prepends the pad unit, typical for numeric fields
//! - [`NullPadder`]: passes data through untouched
//!
//! [`PadderConfig`] selects a placement and pad character at configuration
//! time and builds an [`AnyPadder`].

pub mod config;
pub mod left;
pub mod null;
pub mod right;

pub use config::{AnyPadder, PadderConfig, Placement};
pub use ironpad_core::{PadError, Padder};
pub use left::LeftPadder;
pub use null::NullPadder;
pub use right::RightPadder;

/// Checks that `length` fits in a field of `max_length`.
#[inline]
pub(crate) fn ensure_fits(length: usize, max_length: usize) -> Result<(), PadError> {
    if length > max_length {
        tracing::debug!(length, max_length, "data exceeds fixed field width");
        return Err(PadError::LengthExceeded { length, max_length });
    }
    Ok(())
}

/// Byte capacity of `data_len` bytes followed by `fill` copies of `pad`.
#[inline]
pub(crate) fn text_capacity(data_len: usize, fill: usize, pad: char) -> usize {
    fill.saturating_mul(pad.len_utf8()).saturating_add(data_len)
}
