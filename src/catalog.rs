//! The formatter catalog: every display shape a report cell can take.
//!
//! The layout engine that owns columns picks one [`CellFormat`] per column
//! and routes each value through [`CellFormatter::apply`]; every operation
//! is a pure function from one value to one single-line display string.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::datetime;
use crate::errors::FormatError;
use crate::locale::LocaleConfig;
use crate::number;
use crate::text;
use crate::value::CellValue;

/// Two-space placeholder shown for blank numeric cells.
const BLANK_AMOUNT: &str = "  ";

/// Names every formatter in the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellFormat {
    Plain,
    TwoDecimals,
    PhCurrency,
    UsCurrency,
    Title,
    Dmyhm,
    Dmy,
    Mdyhm,
    Mdy,
    ReportDate,
    ReportDateIso,
}

impl CellFormat {
    /// Every catalog member, in presentation order.
    pub const ALL: [CellFormat; 11] = [
        CellFormat::Plain,
        CellFormat::TwoDecimals,
        CellFormat::PhCurrency,
        CellFormat::UsCurrency,
        CellFormat::Title,
        CellFormat::Dmyhm,
        CellFormat::Dmy,
        CellFormat::Mdyhm,
        CellFormat::Mdy,
        CellFormat::ReportDate,
        CellFormat::ReportDateIso,
    ];

    /// Stable name used for lookup and in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            CellFormat::Plain => "plain",
            CellFormat::TwoDecimals => "two_decimals",
            CellFormat::PhCurrency => "ph_currency",
            CellFormat::UsCurrency => "us_currency",
            CellFormat::Title => "title",
            CellFormat::Dmyhm => "dmyhm",
            CellFormat::Dmy => "dmy",
            CellFormat::Mdyhm => "mdyhm",
            CellFormat::Mdy => "mdy",
            CellFormat::ReportDate => "report_date",
            CellFormat::ReportDateIso => "report_date_iso",
        }
    }
}

impl fmt::Display for CellFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CellFormat {
    type Err = FormatError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        CellFormat::ALL
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| FormatError::UnknownFormat(name.to_string()))
    }
}

/// Applies catalog formats with an explicitly supplied locale.
///
/// Only the two currency formats read the locale; everything else is
/// locale-independent. The struct carries no other state, so one instance
/// can serve any number of threads.
#[derive(Debug, Clone)]
pub struct CellFormatter {
    locale: LocaleConfig,
}

impl CellFormatter {
    pub fn new(locale: LocaleConfig) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &LocaleConfig {
        &self.locale
    }

    /// Dispatches to the operation named by `format`.
    pub fn apply(&self, format: CellFormat, value: &CellValue) -> Result<String, FormatError> {
        match format {
            CellFormat::Plain => Ok(self.plain(value)),
            CellFormat::TwoDecimals => self.two_decimals(value),
            CellFormat::PhCurrency => self.ph_currency(value),
            CellFormat::UsCurrency => self.us_currency(value),
            CellFormat::Title => Ok(self.title(value)),
            CellFormat::Dmyhm => self.dmyhm(value),
            CellFormat::Dmy => self.dmy(value),
            CellFormat::Mdyhm => self.mdyhm(value),
            CellFormat::Mdy => self.mdy(value),
            CellFormat::ReportDate => self.report_date(value),
            CellFormat::ReportDateIso => self.report_date_iso(value),
        }
    }

    /// Canonical text rendering of the value; total over every variant.
    pub fn plain(&self, value: &CellValue) -> String {
        text::plain(value)
    }

    /// Two decimal places with grouped thousands. Absent and zero amounts
    /// both render as the two-space blank, so a quantity column shows
    /// nothing rather than a wall of `0.00`.
    pub fn two_decimals(&self, value: &CellValue) -> Result<String, FormatError> {
        Ok(match expect_number(CellFormat::TwoDecimals, value)? {
            None => BLANK_AMOUNT.to_string(),
            Some(amount) if amount == 0.0 => BLANK_AMOUNT.to_string(),
            // Plain numeric columns keep the fixed comma/point convention
            // no matter which locale the formatter was built with.
            Some(amount) => number::grouped_two_decimals(amount, &LocaleConfig::default()),
        })
    }

    /// `"P "` plus the amount in the configured locale. Zero stays visible
    /// as `P 0.00`; only absent input blanks the cell.
    pub fn ph_currency(&self, value: &CellValue) -> Result<String, FormatError> {
        self.currency(CellFormat::PhCurrency, "P ", value)
    }

    /// `"$ "` plus the amount in the configured locale. Zero stays visible
    /// as `$ 0.00`; only absent input blanks the cell.
    pub fn us_currency(&self, value: &CellValue) -> Result<String, FormatError> {
        self.currency(CellFormat::UsCurrency, "$ ", value)
    }

    fn currency(
        &self,
        format: CellFormat,
        prefix: &str,
        value: &CellValue,
    ) -> Result<String, FormatError> {
        Ok(match expect_number(format, value)? {
            None => String::new(),
            Some(amount) => {
                format!("{prefix}{}", number::grouped_two_decimals(amount, &self.locale))
            }
        })
    }

    /// Title-cases the plain rendering of the value.
    pub fn title(&self, value: &CellValue) -> String {
        text::title_case(&text::plain(value))
    }

    /// `DD.MM.YYYY HH:MM`, 24-hour clock.
    pub fn dmyhm(&self, value: &CellValue) -> Result<String, FormatError> {
        self.timestamp(CellFormat::Dmyhm, datetime::DMYHM, value)
    }

    /// `DD.MM.YYYY`.
    pub fn dmy(&self, value: &CellValue) -> Result<String, FormatError> {
        self.timestamp(CellFormat::Dmy, datetime::DMY, value)
    }

    /// `MM/DD/YY HH:MM`, 24-hour clock with a two-digit year.
    pub fn mdyhm(&self, value: &CellValue) -> Result<String, FormatError> {
        self.timestamp(CellFormat::Mdyhm, datetime::MDYHM, value)
    }

    /// `MM/DD/YYYY`.
    pub fn mdy(&self, value: &CellValue) -> Result<String, FormatError> {
        self.timestamp(CellFormat::Mdy, datetime::MDY, value)
    }

    /// `Mon DD, YYYY - HH:MM AM/PM`.
    pub fn report_date(&self, value: &CellValue) -> Result<String, FormatError> {
        self.timestamp(CellFormat::ReportDate, datetime::REPORT_DATE, value)
    }

    /// ISO 8601 date-time; parses back to the identical timestamp.
    pub fn report_date_iso(&self, value: &CellValue) -> Result<String, FormatError> {
        self.timestamp(CellFormat::ReportDateIso, datetime::REPORT_DATE_ISO, value)
    }

    fn timestamp(
        &self,
        format: CellFormat,
        pattern: &str,
        value: &CellValue,
    ) -> Result<String, FormatError> {
        Ok(match expect_timestamp(format, value)? {
            None => String::new(),
            Some(stamp) => datetime::layout(&stamp, pattern),
        })
    }
}

impl Default for CellFormatter {
    fn default() -> Self {
        Self::new(LocaleConfig::default())
    }
}

fn expect_number(format: CellFormat, value: &CellValue) -> Result<Option<f64>, FormatError> {
    match value {
        CellValue::Absent => Ok(None),
        CellValue::Integer(number) => Ok(Some(*number as f64)),
        CellValue::Real(number) => Ok(Some(*number)),
        other => Err(FormatError::UnsupportedValue {
            format: format.name(),
            kind: other.kind(),
        }),
    }
}

fn expect_timestamp(
    format: CellFormat,
    value: &CellValue,
) -> Result<Option<NaiveDateTime>, FormatError> {
    match value {
        CellValue::Absent => Ok(None),
        CellValue::DateTime(stamp) => Ok(Some(*stamp)),
        other => Err(FormatError::UnsupportedValue {
            format: format.name(),
            kind: other.kind(),
        }),
    }
}
