/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Pass-through padder.

use bytes::Bytes;
use ironpad_core::{PadError, Padder};
use serde::{Deserialize, Serialize};

/// Padder that leaves data untouched.
///
/// Used for fields whose width is enforced by some other layer. Padding never
/// checks the length and never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NullPadder;

impl NullPadder {
    /// Creates a pass-through padder.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Padder for NullPadder {
    /// Always `'\0'`; the pass-through padder never writes it.
    #[inline]
    fn pad_char(&self) -> char {
        '\0'
    }

    fn pad(&self, data: &str, _max_length: usize) -> Result<String, PadError> {
        Ok(data.to_owned())
    }

    #[inline]
    fn unpad<'a>(&self, padded: &'a str) -> &'a str {
        padded
    }

    fn pad_binary(&self, data: &[u8], _max_length: usize) -> Result<Bytes, PadError> {
        Ok(Bytes::copy_from_slice(data))
    }

    #[inline]
    fn unpad_binary<'a>(&self, padded: &'a [u8]) -> &'a [u8] {
        padded
    }
}
