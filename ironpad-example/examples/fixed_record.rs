//! Fixed-Width Record Example
//!
//! Builds a small authorization record, encodes it to its fixed-width wire
//! form, and decodes it back.
//!
//! Run with `RUST_LOG=trace` to see the codec's own tracing output.

use ironpad::prelude::*;
use tracing::{info, warn};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let layout = FixedLayout::new()
        .with_field(FieldDef::numeric(11, "Stan", 6))
        .with_field(FieldDef::alpha(41, "TerminalId", 8))
        .with_field(FieldDef::alpha(42, "MerchantId", 15))
        .with_field(FieldDef::numeric(4, "Amount", 12))
        .with_field(FieldDef::alpha(52, "PinBlock", 8).with_pad('\0'));

    info!("Record layout is {} bytes wide", layout.width());

    let record = layout.encode(&["1234", "TERM01", "MERCHANT-0042", "1050", "PIN"])?;
    info!("Encoded record: {:?}", String::from_utf8_lossy(&record));

    let values = layout.decode(&record)?;
    for (field, value) in layout.fields().iter().zip(&values) {
        info!("{:>12} ({:>2}): {:?}", field.name(), field.tag(), value);
    }

    let amount = &layout.fields()[3];
    let cents = amount.decode_uint(&values[3])?;
    info!("Amount in minor units: {}", cents);

    match layout.encode(&["1", "TERMINAL-TOO-LONG", "M", "0", ""]) {
        Ok(_) => warn!("Oversized terminal id was accepted"),
        Err(e) => info!("Rejected oversized value: {}", e),
    }

    Ok(())
}
