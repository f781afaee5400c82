//! Plain coercion and title casing for text cells.

use crate::value::CellValue;

/// Canonical text rendering of a value; the default shape for untyped
/// columns. Byte payloads go through a single UTF-8 decode branch whose
/// failure falls back to a lossy rendering instead of failing the cell.
pub(crate) fn plain(value: &CellValue) -> String {
    match value {
        CellValue::Absent => String::new(),
        CellValue::Text(text) => text.clone(),
        CellValue::Bytes(raw) => decode_utf8(raw),
        CellValue::Integer(number) => number.to_string(),
        CellValue::Real(number) => number.to_string(),
        CellValue::DateTime(stamp) => stamp.to_string(),
    }
}

fn decode_utf8(raw: &[u8]) -> String {
    match std::str::from_utf8(raw) {
        Ok(text) => text.to_string(),
        Err(_) => {
            tracing::debug!(
                bytes = raw.len(),
                "cell bytes are not valid UTF-8, rendering lossily"
            );
            String::from_utf8_lossy(raw).into_owned()
        }
    }
}

/// Uppercases the first letter of every alphabetic run and lowercases the
/// rest of it; non-alphabetic characters pass through and end the run.
pub(crate) fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut start_of_word = true;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if start_of_word {
                output.extend(ch.to_uppercase());
            } else {
                output.extend(ch.to_lowercase());
            }
            start_of_word = false;
        } else {
            output.push(ch);
            start_of_word = true;
        }
    }
    output
}
