#![doc(test(attr(deny(warnings))))]

//! Cellfmt renders typed report values into the exact display strings
//! tabular report cells should contain, through a fixed catalog of
//! numeric, text, currency, and date-time formats.

pub mod catalog;
pub mod errors;
pub mod locale;
pub mod utils;
pub mod value;

mod datetime;
mod number;
mod text;

pub use catalog::{CellFormat, CellFormatter};
pub use errors::FormatError;
pub use locale::LocaleConfig;
pub use value::CellValue;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Cellfmt tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
