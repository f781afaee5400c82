use cellfmt::{CellFormat, CellFormatter, CellValue, FormatError, LocaleConfig};
use chrono::{NaiveDate, NaiveDateTime};

fn sample_stamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2008, 7, 3)
        .unwrap()
        .and_hms_opt(9, 11, 0)
        .unwrap()
}

#[test]
fn catalog_smoke() {
    cellfmt::init();
    let formatter = CellFormatter::default();
    assert_eq!(formatter.plain(&CellValue::from("ok")), "ok");
    assert_eq!(
        formatter.apply(CellFormat::UsCurrency, &CellValue::Real(5.0)).unwrap(),
        "$ 5.00"
    );
}

#[test]
fn every_format_blanks_absent_input() {
    let formatter = CellFormatter::default();
    for format in CellFormat::ALL {
        let rendered = formatter.apply(format, &CellValue::Absent).unwrap();
        let expected = match format {
            CellFormat::TwoDecimals => "  ",
            _ => "",
        };
        assert_eq!(rendered, expected, "format {format}");
    }
}

#[test]
fn two_decimals_blanks_zero_and_groups_thousands() {
    let formatter = CellFormatter::default();
    assert_eq!(formatter.two_decimals(&CellValue::Real(0.0)).unwrap(), "  ");
    assert_eq!(formatter.two_decimals(&CellValue::Real(-0.0)).unwrap(), "  ");
    assert_eq!(formatter.two_decimals(&CellValue::Integer(0)).unwrap(), "  ");
    assert_eq!(formatter.two_decimals(&CellValue::Real(1234.5)).unwrap(), "1,234.50");
    assert_eq!(
        formatter.two_decimals(&CellValue::Real(-9876543.21)).unwrap(),
        "-9,876,543.21"
    );
    assert_eq!(formatter.two_decimals(&CellValue::Integer(7)).unwrap(), "7.00");
}

#[test]
fn currency_keeps_zero_visible() {
    let formatter = CellFormatter::default();
    assert_eq!(formatter.ph_currency(&CellValue::Real(0.0)).unwrap(), "P 0.00");
    assert_eq!(formatter.us_currency(&CellValue::Integer(0)).unwrap(), "$ 0.00");
    assert_eq!(formatter.ph_currency(&CellValue::Absent).unwrap(), "");
    assert_eq!(formatter.us_currency(&CellValue::Absent).unwrap(), "");
}

#[test]
fn currency_groups_with_configured_locale() {
    let formatter = CellFormatter::new(LocaleConfig::european());
    assert_eq!(formatter.ph_currency(&CellValue::Real(1234.5)).unwrap(), "P 1.234,50");
    assert_eq!(
        formatter.us_currency(&CellValue::Real(-1234.5)).unwrap(),
        "$ -1.234,50"
    );
    // Plain numeric columns ignore the formatter locale on purpose.
    assert_eq!(formatter.two_decimals(&CellValue::Real(1234.5)).unwrap(), "1,234.50");
}

#[test]
fn title_cases_each_word() {
    let formatter = CellFormatter::default();
    assert_eq!(
        formatter.title(&CellValue::from("net income after tax")),
        "Net Income After Tax"
    );
    assert_eq!(formatter.title(&CellValue::from("4th quarter")), "4Th Quarter");
    assert_eq!(formatter.title(&CellValue::Absent), "");
    assert_eq!(formatter.title(&CellValue::Integer(12)), "12");
}

#[test]
fn date_layouts_match_their_patterns() {
    let formatter = CellFormatter::default();
    let stamp = CellValue::DateTime(sample_stamp());
    assert_eq!(formatter.dmyhm(&stamp).unwrap(), "03.07.2008 09:11");
    assert_eq!(formatter.dmy(&stamp).unwrap(), "03.07.2008");
    assert_eq!(formatter.mdyhm(&stamp).unwrap(), "07/03/08 09:11");
    assert_eq!(formatter.mdy(&stamp).unwrap(), "07/03/2008");
    assert_eq!(formatter.report_date(&stamp).unwrap(), "Jul 03, 2008 - 09:11 AM");
}

#[test]
fn iso_layout_round_trips() {
    let formatter = CellFormatter::default();
    let stamp = sample_stamp();
    let rendered = formatter
        .report_date_iso(&CellValue::DateTime(stamp))
        .unwrap();
    assert_eq!(rendered, "2008-07-03T09:11:00");
    let parsed: NaiveDateTime = rendered.parse().expect("iso output parses back");
    assert_eq!(parsed, stamp);
}

#[test]
fn plain_decodes_bytes_like_text() {
    let formatter = CellFormatter::default();
    assert_eq!(
        formatter.plain(&CellValue::from("café".as_bytes())),
        formatter.plain(&CellValue::from("café"))
    );
}

#[test]
fn plain_is_idempotent() {
    let formatter = CellFormatter::default();
    for value in [
        CellValue::Absent,
        CellValue::from("Quarterly Totals"),
        CellValue::Integer(42),
        CellValue::Real(1234.5),
        CellValue::DateTime(sample_stamp()),
    ] {
        let once = formatter.plain(&value);
        let twice = formatter.plain(&CellValue::from(once.clone()));
        assert_eq!(once, twice);
    }
}

#[test]
fn wrong_kind_is_reported_not_coerced() {
    let formatter = CellFormatter::default();
    assert_eq!(
        formatter.dmy(&CellValue::Real(20080703.0)).unwrap_err(),
        FormatError::UnsupportedValue {
            format: "dmy",
            kind: "real",
        }
    );
    assert_eq!(
        formatter
            .ph_currency(&CellValue::DateTime(sample_stamp()))
            .unwrap_err(),
        FormatError::UnsupportedValue {
            format: "ph_currency",
            kind: "date-time",
        }
    );
}

#[test]
fn values_round_trip_through_serde() {
    let value = CellValue::DateTime(sample_stamp());
    let encoded = serde_json::to_string(&value).expect("serialize value");
    let decoded: CellValue = serde_json::from_str(&encoded).expect("deserialize value");
    assert_eq!(decoded, value);

    let locale = LocaleConfig::european();
    let encoded = serde_json::to_string(&locale).expect("serialize locale");
    let decoded: LocaleConfig = serde_json::from_str(&encoded).expect("deserialize locale");
    assert_eq!(decoded, locale);
}
