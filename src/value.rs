use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single datum routed to a report cell.
///
/// `Absent` is the documented no-data case: every formatter in the catalog
/// renders it as that formatter's blank form without touching any payload.
/// It is distinct from present-but-zero and present-but-empty values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Absent,
    Text(String),
    /// UTF-8 encoded text that has not been decoded yet.
    Bytes(Vec<u8>),
    Integer(i64),
    Real(f64),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Stable lowercase label for the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            CellValue::Absent => "absent",
            CellValue::Text(_) => "text",
            CellValue::Bytes(_) => "bytes",
            CellValue::Integer(_) => "integer",
            CellValue::Real(_) => "real",
            CellValue::DateTime(_) => "date-time",
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, CellValue::Absent)
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Absent
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        CellValue::Text(text.to_string())
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        CellValue::Text(text)
    }
}

impl From<Vec<u8>> for CellValue {
    fn from(raw: Vec<u8>) -> Self {
        CellValue::Bytes(raw)
    }
}

impl From<&[u8]> for CellValue {
    fn from(raw: &[u8]) -> Self {
        CellValue::Bytes(raw.to_vec())
    }
}

impl From<i64> for CellValue {
    fn from(number: i64) -> Self {
        CellValue::Integer(number)
    }
}

impl From<i32> for CellValue {
    fn from(number: i32) -> Self {
        CellValue::Integer(number.into())
    }
}

impl From<f64> for CellValue {
    fn from(number: f64) -> Self {
        CellValue::Real(number)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(stamp: NaiveDateTime) -> Self {
        CellValue::DateTime(stamp)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(date: NaiveDate) -> Self {
        CellValue::DateTime(date.and_time(NaiveTime::MIN))
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => CellValue::Absent,
        }
    }
}
