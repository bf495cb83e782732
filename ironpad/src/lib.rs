/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # IronPad
//!
//! Fixed-width field padding for structured message formats.
//!
//! IronPad pads textual and binary field values to an exact declared width and
//! strips that padding again on decode. It does not assemble messages or talk
//! to the network; it is the field-level building block underneath an
//! ISO 8583 or similar fixed-width codec.
//!
//! ## Quick Start
//!
//! ```rust
//! use ironpad::prelude::*;
//!
//! let padder = RightPadder::SPACE;
//! assert_eq!(padder.pad("AB", 5).unwrap(), "AB   ");
//! assert_eq!(padder.unpad("AB   "), "AB");
//!
//! let zeros = RightPadder::ZERO;
//! assert_eq!(&zeros.pad_binary(&[0x31, 0x32], 4).unwrap()[..], &[0x31, 0x32, 0x30, 0x30]);
//! assert!(zeros.unpad_binary(&[0x30, 0x30, 0x30]).is_empty());
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: The `Padder` trait and error definitions
//! - [`padder`]: Right, left, and pass-through padders
//! - [`field`]: Fixed-width field and record codec

pub mod core {
    //! The `Padder` trait and error definitions.
    pub use ironpad_core::*;
}

pub mod padder {
    //! Right, left, and pass-through padders.
    pub use ironpad_padder::*;
}

pub mod field {
    //! Fixed-width field and record codec.
    pub use ironpad_field::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use ironpad_core::{FieldError, IronPadError, PadError, Padder, Result};

    // Padders
    pub use ironpad_padder::{
        AnyPadder, LeftPadder, NullPadder, PadderConfig, Placement, RightPadder,
    };

    // Fields
    pub use ironpad_field::{FieldDef, FixedField, FixedLayout};
}
