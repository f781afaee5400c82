//! The fixed date/time layouts of the catalog.
//!
//! All six are pure projections of the same offset-free timestamp through
//! different chrono patterns; none converts timezones.

use chrono::NaiveDateTime;

pub(crate) const DMYHM: &str = "%d.%m.%Y %H:%M";
pub(crate) const DMY: &str = "%d.%m.%Y";
pub(crate) const MDYHM: &str = "%m/%d/%y %H:%M";
pub(crate) const MDY: &str = "%m/%d/%Y";
pub(crate) const REPORT_DATE: &str = "%b %d, %Y - %I:%M %p";
pub(crate) const REPORT_DATE_ISO: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub(crate) fn layout(stamp: &NaiveDateTime, pattern: &str) -> String {
    stamp.format(pattern).to_string()
}
