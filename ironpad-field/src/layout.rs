/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Fixed-width record layouts.
//!
//! A [`FixedLayout`] is an ordered list of fields. Encoding pads each value to
//! its field width and concatenates the results; decoding slices a record at
//! the field boundaries and strips each field's padding.

use crate::def::FieldDef;
use crate::field::FixedField;
use bytes::{BufMut, Bytes, BytesMut};
use ironpad_core::FieldError;

/// Ordered fixed-width fields making up a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedLayout {
    fields: Vec<FixedField>,
}

impl FixedLayout {
    /// Creates an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field to the layout.
    #[must_use]
    pub fn with_field(mut self, def: FieldDef) -> Self {
        self.push(def);
        self
    }

    /// Appends a field to the layout.
    pub fn push(&mut self, def: FieldDef) {
        self.fields.push(FixedField::new(def));
    }

    /// Returns the fields in order.
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[FixedField] {
        &self.fields
    }

    /// Returns the total record width in bytes.
    #[must_use]
    pub fn width(&self) -> usize {
        self.fields.iter().map(FixedField::width).sum()
    }

    /// Encodes one value per field into a fixed-width record.
    ///
    /// Widths are measured in bytes, so each value is padded as binary data.
    ///
    /// # Errors
    /// Returns [`FieldError::ArityMismatch`] if the number of values differs
    /// from the number of fields, [`FieldError::Pad`] if a value does not fit
    /// its field, or [`FieldError::WidthMismatch`] if an unpadded field's value
    /// is not exactly its width.
    pub fn encode(&self, values: &[&str]) -> Result<Bytes, FieldError> {
        if values.len() != self.fields.len() {
            return Err(FieldError::ArityMismatch {
                expected: self.fields.len(),
                actual: values.len(),
            });
        }

        let mut record = BytesMut::with_capacity(self.width());
        for (field, value) in self.fields.iter().zip(values) {
            let encoded = field.encode_bytes(value.as_bytes())?;
            // pass-through fields are not padded to width
            if encoded.len() != field.width() {
                tracing::debug!(
                    tag = field.tag(),
                    width = field.width(),
                    actual = encoded.len(),
                    "encoded field width mismatch"
                );
                return Err(FieldError::WidthMismatch {
                    tag: field.tag(),
                    width: field.width(),
                    actual: encoded.len(),
                });
            }
            record.put_slice(&encoded);
        }
        tracing::trace!(fields = self.fields.len(), width = record.len(), "encoded record");
        Ok(record.freeze())
    }

    /// Decodes a fixed-width record into one unpadded value per field.
    ///
    /// Bytes past the end of the last field are ignored.
    ///
    /// # Errors
    /// Returns [`FieldError::Truncated`] if the record ends inside a field, or
    /// [`FieldError::InvalidUtf8`] if a field is not UTF-8.
    pub fn decode(&self, record: &[u8]) -> Result<Vec<String>, FieldError> {
        let mut values = Vec::with_capacity(self.fields.len());
        let mut rest = record;
        for field in &self.fields {
            if rest.len() < field.width() {
                return Err(FieldError::Truncated {
                    tag: field.tag(),
                    needed: field.width(),
                    available: rest.len(),
                });
            }
            let (raw, tail) = rest.split_at(field.width());
            values.push(field.decode_utf8(raw)?);
            rest = tail;
        }
        tracing::trace!(fields = values.len(), trailing = rest.len(), "decoded record");
        Ok(values)
    }
}

impl FromIterator<FieldDef> for FixedLayout {
    fn from_iter<I: IntoIterator<Item = FieldDef>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(FixedField::new).collect(),
        }
    }
}
