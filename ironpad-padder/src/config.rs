/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Padder configuration.
//!
//! Callers pick a placement and pad character once, usually from a field
//! definition, and get back an [`AnyPadder`] that dispatches statically.

use crate::{LeftPadder, NullPadder, RightPadder};
use bytes::Bytes;
use ironpad_core::{PadError, Padder};
use serde::{Deserialize, Serialize};

/// Side of the value the pad character is written on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Pad after the value.
    #[default]
    Right,
    /// Pad before the value.
    Left,
    /// No padding.
    None,
}

/// Configuration for a padder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PadderConfig {
    /// Where the pad character goes.
    pub placement: Placement,
    /// The pad character. Binary operations use its low-order byte.
    pub pad: char,
}

impl PadderConfig {
    /// Creates a padder configuration.
    ///
    /// # Arguments
    /// * `placement` - Side to pad on
    /// * `pad` - The pad character
    #[must_use]
    pub const fn new(placement: Placement, pad: char) -> Self {
        Self { placement, pad }
    }

    /// Right placement, space filled.
    #[must_use]
    pub const fn alpha() -> Self {
        Self::new(Placement::Right, ' ')
    }

    /// Left placement, zero filled.
    #[must_use]
    pub const fn numeric() -> Self {
        Self::new(Placement::Left, '0')
    }

    /// Sets the placement.
    #[must_use]
    pub const fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Sets the pad character.
    #[must_use]
    pub const fn with_pad(mut self, pad: char) -> Self {
        self.pad = pad;
        self
    }

    /// Builds the configured padder.
    #[must_use]
    pub const fn build(&self) -> AnyPadder {
        match self.placement {
            Placement::Right => AnyPadder::Right(RightPadder::new(self.pad)),
            Placement::Left => AnyPadder::Left(LeftPadder::new(self.pad)),
            Placement::None => AnyPadder::Null(NullPadder::new()),
        }
    }
}

impl Default for PadderConfig {
    fn default() -> Self {
        Self::alpha()
    }
}

/// Any of the built-in padders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnyPadder {
    /// Right padder.
    Right(RightPadder),
    /// Left padder.
    Left(LeftPadder),
    /// Pass-through padder.
    Null(NullPadder),
}

impl AnyPadder {
    /// Returns the placement of this padder.
    #[must_use]
    pub const fn placement(&self) -> Placement {
        match self {
            Self::Right(_) => Placement::Right,
            Self::Left(_) => Placement::Left,
            Self::Null(_) => Placement::None,
        }
    }
}

impl Default for AnyPadder {
    fn default() -> Self {
        Self::Right(RightPadder::SPACE)
    }
}

impl From<RightPadder> for AnyPadder {
    fn from(padder: RightPadder) -> Self {
        Self::Right(padder)
    }
}

impl From<LeftPadder> for AnyPadder {
    fn from(padder: LeftPadder) -> Self {
        Self::Left(padder)
    }
}

impl From<NullPadder> for AnyPadder {
    fn from(padder: NullPadder) -> Self {
        Self::Null(padder)
    }
}

impl From<PadderConfig> for AnyPadder {
    fn from(config: PadderConfig) -> Self {
        config.build()
    }
}

macro_rules! dispatch {
    ($self:ident, $padder:ident => $call:expr) => {
        match $self {
            AnyPadder::Right($padder) => $call,
            AnyPadder::Left($padder) => $call,
            AnyPadder::Null($padder) => $call,
        }
    };
}

impl Padder for AnyPadder {
    #[inline]
    fn pad_char(&self) -> char {
        dispatch!(self, p => p.pad_char())
    }

    #[inline]
    fn pad(&self, data: &str, max_length: usize) -> Result<String, PadError> {
        dispatch!(self, p => p.pad(data, max_length))
    }

    #[inline]
    fn unpad<'a>(&self, padded: &'a str) -> &'a str {
        dispatch!(self, p => p.unpad(padded))
    }

    #[inline]
    fn pad_binary(&self, data: &[u8], max_length: usize) -> Result<Bytes, PadError> {
        dispatch!(self, p => p.pad_binary(data, max_length))
    }

    #[inline]
    fn unpad_binary<'a>(&self, padded: &'a [u8]) -> &'a [u8] {
        dispatch!(self, p => p.unpad_binary(padded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let padder = PadderConfig::default().build();
        assert_eq!(padder, AnyPadder::Right(RightPadder::SPACE));
        assert_eq!(padder.pad("AB", 4).unwrap(), "AB  ");
    }

    #[test]
    fn test_numeric_config() {
        let padder = PadderConfig::numeric().build();
        assert_eq!(padder.placement(), Placement::Left);
        assert_eq!(padder.pad("7", 3).unwrap(), "007");
        assert_eq!(padder.unpad("007"), "7");
    }

    #[test]
    fn test_none_placement() {
        let padder = PadderConfig::alpha()
            .with_placement(Placement::None)
            .build();
        assert_eq!(padder.pad("TOOLONG", 3).unwrap(), "TOOLONG");
    }

    #[test]
    fn test_with_pad() {
        let padder = PadderConfig::alpha().with_pad('*').build();
        assert_eq!(padder.pad_char(), '*');
        assert_eq!(padder.pad_byte(), b'*');
        assert_eq!(&padder.pad_binary(b"A", 3).unwrap()[..], b"A**");
        assert_eq!(padder.unpad_binary(b"A**"), b"A");
    }

    #[test]
    fn test_deserialize_config() {
        let config: PadderConfig =
            serde_json::from_str(r#"{"placement":"left","pad":"0"}"#).unwrap();
        assert_eq!(config, PadderConfig::numeric());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: PadderConfig = serde_json::from_str(r#"{"pad":"_"}"#).unwrap();
        assert_eq!(config.placement, Placement::Right);
        assert_eq!(config.pad, '_');
    }

    #[test]
    fn test_error_propagates_through_dispatch() {
        let padder: AnyPadder = LeftPadder::ZERO.into();
        let err = padder.pad_binary(&[1, 2, 3, 4], 2).unwrap_err();
        assert_eq!(
            err,
            PadError::LengthExceeded {
                length: 4,
                max_length: 2
            }
        );
    }

    #[test]
    fn test_padders_are_shareable() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<AnyPadder>();
        assert_send_sync::<RightPadder>();
    }
}
