/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Fixed-width field codec.
//!
//! A [`FixedField`] owns its definition and the padder built from it, and
//! converts values to and from their fixed-width wire form.

use crate::def::FieldDef;
use bytes::Bytes;
use ironpad_core::{FieldError, PadError, Padder};
use ironpad_padder::AnyPadder;

/// A fixed-width field ready to encode and decode values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedField {
    def: FieldDef,
    padder: AnyPadder,
}

impl FixedField {
    /// Creates a field from its definition.
    #[must_use]
    pub fn new(def: FieldDef) -> Self {
        let padder = def.padder.build();
        Self { def, padder }
    }

    /// Returns the field tag.
    #[inline]
    #[must_use]
    pub fn tag(&self) -> u32 {
        self.def.tag
    }

    /// Returns the field name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.def.name
    }

    /// Returns the declared width.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.def.width
    }

    /// Returns the field definition.
    #[inline]
    #[must_use]
    pub fn def(&self) -> &FieldDef {
        &self.def
    }

    /// Returns the padder used by this field.
    #[inline]
    #[must_use]
    pub fn padder(&self) -> &AnyPadder {
        &self.padder
    }

    /// Pads a text value to the field width.
    ///
    /// # Errors
    /// Returns [`FieldError::Pad`] if the value is wider than the field.
    pub fn encode_str(&self, value: &str) -> Result<String, FieldError> {
        self.padder
            .pad(value, self.def.width)
            .map_err(|source| self.pad_error(source))
    }

    /// Strips padding from a text value.
    #[must_use]
    pub fn decode_str<'a>(&self, raw: &'a str) -> &'a str {
        self.padder.unpad(raw)
    }

    /// Pads a binary value to the field width.
    ///
    /// # Errors
    /// Returns [`FieldError::Pad`] if the value is wider than the field.
    pub fn encode_bytes(&self, value: &[u8]) -> Result<Bytes, FieldError> {
        self.padder
            .pad_binary(value, self.def.width)
            .map_err(|source| self.pad_error(source))
    }

    /// Strips padding from a binary value.
    ///
    /// An all-pad value yields the shared empty buffer without allocating.
    #[must_use]
    pub fn decode_bytes(&self, raw: &[u8]) -> Bytes {
        let value = self.padder.unpad_binary(raw);
        if value.is_empty() {
            Bytes::new()
        } else {
            Bytes::copy_from_slice(value)
        }
    }

    /// Strips padding from a binary value and decodes it as UTF-8.
    ///
    /// # Errors
    /// Returns [`FieldError::InvalidUtf8`] if the unpadded bytes are not UTF-8.
    pub fn decode_utf8(&self, raw: &[u8]) -> Result<String, FieldError> {
        let value = self.padder.unpad_binary(raw);
        std::str::from_utf8(value)
            .map(str::to_owned)
            .map_err(|_| FieldError::InvalidUtf8 { tag: self.def.tag })
    }

    /// Formats an unsigned integer and pads it to the field width.
    ///
    /// # Errors
    /// Returns [`FieldError::Pad`] if the digits do not fit the field.
    pub fn encode_uint(&self, value: u64) -> Result<String, FieldError> {
        let mut buf = itoa::Buffer::new();
        self.encode_str(buf.format(value))
    }

    /// Strips padding and parses an unsigned integer.
    ///
    /// A value that unpads to nothing, such as an all-zero numeric field,
    /// decodes to `0`.
    ///
    /// # Errors
    /// Returns [`FieldError::NotNumeric`] if the unpadded value holds anything
    /// but ASCII digits or overflows `u64`.
    pub fn decode_uint(&self, raw: &str) -> Result<u64, FieldError> {
        let value = self.decode_str(raw);
        if value.is_empty() {
            return Ok(0);
        }
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(self.not_numeric(value));
        }
        value.parse().map_err(|_| self.not_numeric(value))
    }

    fn pad_error(&self, source: PadError) -> FieldError {
        tracing::debug!(tag = self.def.tag, name = %self.def.name, %source, "field value does not fit");
        FieldError::Pad {
            tag: self.def.tag,
            source,
        }
    }

    fn not_numeric(&self, value: &str) -> FieldError {
        FieldError::NotNumeric {
            tag: self.def.tag,
            value: value.to_owned(),
        }
    }
}

impl From<FieldDef> for FixedField {
    fn from(def: FieldDef) -> Self {
        Self::new(def)
    }
}
