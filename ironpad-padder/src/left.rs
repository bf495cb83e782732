/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Left padder.
//!
//! Pads values on the left (head) side, as used for zero-filled numeric fields.

use crate::{ensure_fits, text_capacity};
use bytes::{BufMut, Bytes, BytesMut};
use ironpad_core::{PadError, Padder};
use serde::{Deserialize, Serialize};
use std::iter;

/// Padder that prepends its pad character to reach the field width.
///
/// Unpadding strips the maximal leading run of the pad character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeftPadder {
    pad: char,
}

impl LeftPadder {
    /// Space padder, for right-justified text.
    pub const SPACE: Self = Self::new(' ');

    /// ASCII zero padder, common for numeric fields.
    pub const ZERO: Self = Self::new('0');

    /// Creates a left padder with the given pad character.
    #[inline]
    #[must_use]
    pub const fn new(pad: char) -> Self {
        Self { pad }
    }
}

impl Default for LeftPadder {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Padder for LeftPadder {
    #[inline]
    fn pad_char(&self) -> char {
        self.pad
    }

    fn pad(&self, data: &str, max_length: usize) -> Result<String, PadError> {
        let length = data.chars().count();
        ensure_fits(length, max_length)?;

        let fill = max_length - length;
        let mut padded = String::with_capacity(text_capacity(data.len(), fill, self.pad));
        padded.extend(iter::repeat_n(self.pad, fill));
        padded.push_str(data);
        Ok(padded)
    }

    #[inline]
    fn unpad<'a>(&self, padded: &'a str) -> &'a str {
        padded.trim_start_matches(self.pad)
    }

    fn pad_binary(&self, data: &[u8], max_length: usize) -> Result<Bytes, PadError> {
        ensure_fits(data.len(), max_length)?;

        let mut padded = BytesMut::with_capacity(max_length);
        padded.put_bytes(self.pad_byte(), max_length - data.len());
        padded.put_slice(data);
        Ok(padded.freeze())
    }

    fn unpad_binary<'a>(&self, padded: &'a [u8]) -> &'a [u8] {
        let pad = self.pad_byte();
        let start = padded
            .iter()
            .position(|&b| b != pad)
            .unwrap_or(padded.len());
        &padded[start..]
    }
}
