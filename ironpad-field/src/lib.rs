/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # IronPad Field
//!
//! Fixed-width field and record codec.
//!
//! A [`FieldDef`] declares a field's tag, width, and padding. A [`FixedField`]
//! pads values to that width on encode and strips the padding on decode, and a
//! [`FixedLayout`] concatenates fields into a fixed-width record.

pub mod def;
pub mod field;
pub mod layout;

pub use def::FieldDef;
pub use field::FixedField;
pub use ironpad_core::FieldError;
pub use layout::FixedLayout;
