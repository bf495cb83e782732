/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Fixed-width field definitions.

use ironpad_padder::{PadderConfig, Placement};
use serde::{Deserialize, Serialize};

/// Definition of a fixed-width field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field tag number.
    pub tag: u32,
    /// Field name.
    pub name: String,
    /// Declared width, in characters for text and bytes for binary data.
    pub width: usize,
    /// Padding applied to reach the width.
    #[serde(default)]
    pub padder: PadderConfig,
}

impl FieldDef {
    /// Creates a new field definition.
    ///
    /// # Arguments
    /// * `tag` - The field tag number
    /// * `name` - The field name
    /// * `width` - The fixed field width
    /// * `padder` - The padding configuration
    #[must_use]
    pub fn new(tag: u32, name: impl Into<String>, width: usize, padder: PadderConfig) -> Self {
        Self {
            tag,
            name: name.into(),
            width,
            padder,
        }
    }

    /// Creates an alphabetic field, right padded with spaces.
    #[must_use]
    pub fn alpha(tag: u32, name: impl Into<String>, width: usize) -> Self {
        Self::new(tag, name, width, PadderConfig::alpha())
    }

    /// Creates a numeric field, left padded with zeros.
    #[must_use]
    pub fn numeric(tag: u32, name: impl Into<String>, width: usize) -> Self {
        Self::new(tag, name, width, PadderConfig::numeric())
    }

    /// Sets the pad character.
    #[must_use]
    pub fn with_pad(mut self, pad: char) -> Self {
        self.padder = self.padder.with_pad(pad);
        self
    }

    /// Sets the pad placement.
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.padder = self.padder.with_placement(placement);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_and_numeric() {
        let name = FieldDef::alpha(43, "CardAcceptorName", 40);
        assert_eq!(name.padder, PadderConfig::alpha());

        let amount = FieldDef::numeric(4, "Amount", 12);
        assert_eq!(amount.padder.placement, Placement::Left);
        assert_eq!(amount.padder.pad, '0');
    }

    #[test]
    fn test_builders() {
        let def = FieldDef::alpha(1, "Id", 4)
            .with_pad('\0')
            .with_placement(Placement::Left);
        assert_eq!(def.padder, PadderConfig::new(Placement::Left, '\0'));
    }

    #[test]
    fn test_deserialize_defaults_padder() {
        let def: FieldDef =
            serde_json::from_str(r#"{"tag":41,"name":"TerminalId","width":8}"#).unwrap();
        assert_eq!(def, FieldDef::alpha(41, "TerminalId", 8));
    }

    #[test]
    fn test_deserialize_numeric() {
        let def: FieldDef = serde_json::from_str(
            r#"{"tag":11,"name":"Stan","width":6,"padder":{"placement":"left","pad":"0"}}"#,
        )
        .unwrap();
        assert_eq!(def, FieldDef::numeric(11, "Stan", 6));
    }
}
