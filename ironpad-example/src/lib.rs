//! Examples for IronPad. See the `examples/` directory of this crate.
