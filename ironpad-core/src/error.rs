/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error types for the IronPad padding library.
//!
//! This module provides a small error hierarchy using `thiserror`: the padder
//! error raised when data does not fit its field, and the field codec errors
//! built on top of it.

use thiserror::Error;

/// Result type alias using [`IronPadError`] as the error type.
pub type Result<T> = std::result::Result<T, IronPadError>;

/// Top-level error type for all IronPad operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IronPadError {
    /// Error raised by a padder.
    #[error("pad error: {0}")]
    Pad(#[from] PadError),

    /// Error raised by the fixed-width field codec.
    #[error("field error: {0}")]
    Field(#[from] FieldError),
}

/// Errors raised by padding operations.
///
/// Unpadding never fails, so the only variant is the length check performed
/// by `pad` and `pad_binary`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PadError {
    /// Data is longer than the declared field width.
    #[error("data is too long: {length} exceeds max {max_length}")]
    LengthExceeded {
        /// Length of the offending data, in characters or bytes.
        length: usize,
        /// Declared maximum length of the field.
        max_length: usize,
    },
}

impl PadError {
    /// Returns the declared maximum length carried by the error.
    #[inline]
    #[must_use]
    pub const fn max_length(&self) -> usize {
        match self {
            Self::LengthExceeded { max_length, .. } => *max_length,
        }
    }
}

/// Errors raised while encoding or decoding fixed-width fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Padding the field value failed.
    #[error("field {tag}: {source}")]
    Pad {
        /// The field tag.
        tag: u32,
        /// The underlying padder error.
        #[source]
        source: PadError,
    },

    /// Field bytes are not valid UTF-8.
    #[error("field {tag}: invalid utf-8")]
    InvalidUtf8 {
        /// The field tag.
        tag: u32,
    },

    /// A numeric field holds something other than ASCII digits.
    #[error("field {tag}: not numeric: {value:?}")]
    NotNumeric {
        /// The field tag.
        tag: u32,
        /// The offending unpadded value.
        value: String,
    },

    /// Record ended before the field's full width was available.
    #[error("field {tag}: truncated record, need {needed} bytes, have {available}")]
    Truncated {
        /// The field tag.
        tag: u32,
        /// Bytes needed to read the field.
        needed: usize,
        /// Bytes remaining in the record.
        available: usize,
    },

    /// Encoded field does not occupy exactly its declared width.
    #[error("field {tag}: encoded width {actual} does not match declared width {width}")]
    WidthMismatch {
        /// The field tag.
        tag: u32,
        /// Declared field width.
        width: usize,
        /// Width of the encoded value.
        actual: usize,
    },

    /// Number of values does not match the number of fields in a layout.
    #[error("layout has {expected} fields, got {actual} values")]
    ArityMismatch {
        /// Fields in the layout.
        expected: usize,
        /// Values supplied.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_exceeded_display() {
        let err = PadError::LengthExceeded {
            length: 7,
            max_length: 3,
        };
        assert_eq!(err.to_string(), "data is too long: 7 exceeds max 3");
        assert_eq!(err.max_length(), 3);
    }

    #[test]
    fn test_field_error_wraps_pad_error() {
        let err = FieldError::Pad {
            tag: 41,
            source: PadError::LengthExceeded {
                length: 10,
                max_length: 8,
            },
        };
        assert_eq!(
            err.to_string(),
            "field 41: data is too long: 10 exceeds max 8"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_ironpad_error_from_pad() {
        let pad_err = PadError::LengthExceeded {
            length: 2,
            max_length: 1,
        };
        let err: IronPadError = pad_err.into();
        assert!(matches!(err, IronPadError::Pad(PadError::LengthExceeded { .. })));
    }

    #[test]
    fn test_width_mismatch_display() {
        let err = FieldError::WidthMismatch {
            tag: 1,
            width: 5,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "field 1: encoded width 2 does not match declared width 5"
        );
    }

    #[test]
    fn test_truncated_display() {
        let err = FieldError::Truncated {
            tag: 4,
            needed: 12,
            available: 5,
        };
        assert_eq!(
            err.to_string(),
            "field 4: truncated record, need 12 bytes, have 5"
        );
    }
}
