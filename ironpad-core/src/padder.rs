/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Padder trait definition.
//!
//! This module defines the capability set shared by every padding placement.

use crate::error::PadError;
use bytes::Bytes;

/// Pads and unpads fixed-width field values.
///
/// A padder is configured with a single pad character. Text operations measure
/// length in characters; binary operations measure length in bytes and use the
/// low-order byte of the pad character as the pad byte.
///
/// Padders hold no mutable state, so one instance may be shared freely across
/// threads.
pub trait Padder: Send + Sync {
    /// Returns the configured pad character.
    fn pad_char(&self) -> char;

    /// Returns the pad byte used by the binary operations.
    ///
    /// This is the pad character truncated to its low-order byte, so a
    /// non-ASCII pad character loses its upper bits.
    #[inline]
    fn pad_byte(&self) -> u8 {
        self.pad_char() as u8
    }

    /// Pads `data` to exactly `max_length` characters.
    ///
    /// # Arguments
    /// * `data` - The unpadded field value
    /// * `max_length` - The declared field width in characters
    ///
    /// # Errors
    /// Returns [`PadError::LengthExceeded`] if `data` is longer than `max_length`.
    fn pad(&self, data: &str, max_length: usize) -> Result<String, PadError>;

    /// Strips the pad character from a padded value.
    ///
    /// The returned slice borrows from `padded`. Empty input, or input made
    /// only of the pad character, yields an empty string.
    fn unpad<'a>(&self, padded: &'a str) -> &'a str;

    /// Pads `data` to exactly `max_length` bytes.
    ///
    /// # Arguments
    /// * `data` - The unpadded field bytes
    /// * `max_length` - The declared field width in bytes
    ///
    /// # Errors
    /// Returns [`PadError::LengthExceeded`] if `data` is longer than `max_length`.
    fn pad_binary(&self, data: &[u8], max_length: usize) -> Result<Bytes, PadError>;

    /// Strips the pad byte from a padded byte sequence.
    ///
    /// The returned slice borrows from `padded`. Empty input, or input made
    /// only of the pad byte, yields an empty slice.
    fn unpad_binary<'a>(&self, padded: &'a [u8]) -> &'a [u8];
}

impl<P: Padder + ?Sized> Padder for &P {
    #[inline]
    fn pad_char(&self) -> char {
        (**self).pad_char()
    }

    #[inline]
    fn pad_byte(&self) -> u8 {
        (**self).pad_byte()
    }

    #[inline]
    fn pad(&self, data: &str, max_length: usize) -> Result<String, PadError> {
        (**self).pad(data, max_length)
    }

    #[inline]
    fn unpad<'a>(&self, padded: &'a str) -> &'a str {
        (**self).unpad(padded)
    }

    #[inline]
    fn pad_binary(&self, data: &[u8], max_length: usize) -> Result<Bytes, PadError> {
        (**self).pad_binary(data, max_length)
    }

    #[inline]
    fn unpad_binary<'a>(&self, padded: &'a [u8]) -> &'a [u8] {
        (**self).unpad_binary(padded)
    }
}
