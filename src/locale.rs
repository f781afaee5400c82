use serde::{Deserialize, Serialize};

/// Digit separators applied when rendering grouped decimal amounts.
///
/// Supplied explicitly when a [`CellFormatter`](crate::CellFormatter) is
/// constructed; nothing in this crate reads the process locale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl LocaleConfig {
    pub fn new(decimal_separator: char, grouping_separator: char) -> Self {
        Self {
            decimal_separator,
            grouping_separator,
        }
    }

    /// Comma-decimal, point-grouped separators common to much of Europe.
    pub fn european() -> Self {
        Self::new(',', '.')
    }
}
