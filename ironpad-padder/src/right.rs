/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Right padder.
//!
//! Pads values on the right (tail) side. This is the usual placement for
//! alphabetic fields padded with spaces.

use crate::{ensure_fits, text_capacity};
use bytes::{BufMut, Bytes, BytesMut};
use ironpad_core::{PadError, Padder};
use serde::{Deserialize, Serialize};
use std::iter;

/// Padder that appends its pad character to reach the field width.
///
/// Unpadding strips the maximal trailing run of the pad character; occurrences
/// of the pad character inside the value are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RightPadder {
    pad: char,
}

impl RightPadder {
    /// Space padder, common for alphabetic fields.
    pub const SPACE: Self = Self::new(' ');

    /// ASCII zero padder.
    pub const ZERO: Self = Self::new('0');

    /// Creates a right padder with the given pad character.
    ///
    /// # Arguments
    /// * `pad` - The pad character. Binary operations use its low-order byte.
    #[inline]
    #[must_use]
    pub const fn new(pad: char) -> Self {
        Self { pad }
    }
}

impl Default for RightPadder {
    fn default() -> Self {
        Self::SPACE
    }
}

impl Padder for RightPadder {
    #[inline]
    fn pad_char(&self) -> char {
        self.pad
    }

    fn pad(&self, data: &str, max_length: usize) -> Result<String, PadError> {
        let length = data.chars().count();
        ensure_fits(length, max_length)?;

        let fill = max_length - length;
        let mut padded = String::with_capacity(text_capacity(data.len(), fill, self.pad));
        padded.push_str(data);
        padded.extend(iter::repeat_n(self.pad, fill));
        Ok(padded)
    }

    #[inline]
    fn unpad<'a>(&self, padded: &'a str) -> &'a str {
        padded.trim_end_matches(self.pad)
    }

    fn pad_binary(&self, data: &[u8], max_length: usize) -> Result<Bytes, PadError> {
        ensure_fits(data.len(), max_length)?;

        let mut padded = BytesMut::with_capacity(max_length);
        padded.put_slice(data);
        padded.put_bytes(self.pad_byte(), max_length - data.len());
        Ok(padded.freeze())
    }

    fn unpad_binary<'a>(&self, padded: &'a [u8]) -> &'a [u8] {
        let pad = self.pad_byte();
        let end = padded
            .iter()
            .rposition(|&b| b != pad)
            .map_or(0, |last| last + 1);
        &padded[..end]
    }
}
