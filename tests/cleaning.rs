use indimap::data::{clean_indications, parse_clock, CleanError, REQUIRED_COLUMNS};
use polars::prelude::*;

// Helper: a well-formed sheet with the full required column set
fn sample_sheet() -> DataFrame {
    DataFrame::new(vec![
        Column::new("Indication Type".into(), vec!["EC", "SCC", "EC"]),
        Column::new("Indication Number".into(), vec!["IND-1", "IND-2", "IND-3"]),
        Column::new("Axial Distance".into(), vec![10.0, 25.5, 40.0]),
        Column::new("Clock Position".into(), vec!["3:00", "6:30", "11:15"]),
        Column::new("Length".into(), vec![6.0, 12.0, 3.0]),
        Column::new("Width".into(), vec![0.5, 1.0, 0.25]),
        Column::new("Pipe Diameter".into(), vec![24.0, 24.0, 24.0]),
    ])
    .unwrap()
}

#[test]
fn parse_clock_hh_mm_text() {
    let (display, hours) = parse_clock("3:15").unwrap();
    assert_eq!(display, "03:15");
    assert!((hours - 3.25).abs() < 1e-12);

    let (display, hours) = parse_clock("11:00").unwrap();
    assert_eq!(display, "11:00");
    assert_eq!(hours, 11.0);
}

#[test]
fn parse_clock_keeps_zero_padding() {
    let (display, hours) = parse_clock("03:00").unwrap();
    assert_eq!(display, "03:00");
    assert_eq!(hours, 3.0);
}

#[test]
fn parse_clock_numeric_hour() {
    let (display, hours) = parse_clock("3").unwrap();
    assert_eq!(display, "03:00");
    assert_eq!(hours, 3.0);
}

// Fractional numeric hours are truncated to the whole hour.
#[test]
fn parse_clock_numeric_fraction_truncates() {
    let (display, hours) = parse_clock("3.7").unwrap();
    assert_eq!(display, "03:00");
    assert_eq!(hours, 3.0);
}

#[test]
fn parse_clock_rejects_out_of_range_and_garbage() {
    for bad in ["25:00", "3:75", "-1:00", "noon", ""] {
        assert!(
            matches!(parse_clock(bad), Err(CleanError::BadClock(_))),
            "expected BadClock for {:?}",
            bad
        );
    }
}

#[test]
fn clean_keeps_well_formed_rows() {
    let table = clean_indications(&sample_sheet()).unwrap();

    assert_eq!(table.indications.len(), 3);
    assert_eq!(table.pipe_diameter_in, 24.0);

    let first = &table.indications[0];
    assert_eq!(first.indication_type, "EC");
    assert_eq!(first.number, "IND-1");
    assert_eq!(first.axial_start_ft, 10.0);
    assert_eq!(first.clock_position, "03:00");
    assert_eq!(first.clock_hours, 3.0);
    assert_eq!(first.length_in, 6.0);
    assert_eq!(first.width_in, 0.5);
}

#[test]
fn clean_reports_missing_column_by_name() {
    let df = sample_sheet().drop("Clock Position").unwrap();
    let err = clean_indications(&df).unwrap_err();
    match err {
        CleanError::MissingColumn { name, available } => {
            assert_eq!(name, "Clock Position");
            assert!(available.contains("Indication Type"), "got: {}", available);
        }
        other => panic!("expected MissingColumn, got: {}", other),
    }
}

#[test]
fn every_required_column_is_checked() {
    for required in REQUIRED_COLUMNS {
        let df = sample_sheet().drop(required).unwrap();
        match clean_indications(&df).unwrap_err() {
            CleanError::MissingColumn { name, .. } => assert_eq!(name, required),
            other => panic!("expected MissingColumn for {:?}, got: {}", required, other),
        }
    }
}

#[test]
fn clean_drops_rows_with_null_fields() {
    let df = DataFrame::new(vec![
        Column::new("Indication Type".into(), vec![Some("EC"), None, Some("EC")]),
        Column::new(
            "Indication Number".into(),
            vec![Some("IND-1"), Some("IND-2"), Some("IND-3")],
        ),
        Column::new("Axial Distance".into(), vec![Some(10.0), Some(25.5), None]),
        Column::new("Clock Position".into(), vec!["3:00", "6:30", "11:15"]),
        Column::new("Length".into(), vec![6.0, 12.0, 3.0]),
        Column::new("Width".into(), vec![0.5, 1.0, 0.25]),
        Column::new("Pipe Diameter".into(), vec![24.0, 24.0, 24.0]),
    ])
    .unwrap();

    let table = clean_indications(&df).unwrap();
    assert_eq!(table.indications.len(), 1);
    assert_eq!(table.indications[0].number, "IND-1");
}

// Numeric columns arriving as text are coerced; un-coercible cells drop the row.
#[test]
fn clean_coerces_numeric_text_and_drops_garbage() {
    let df = DataFrame::new(vec![
        Column::new("Indication Type".into(), vec!["EC", "SCC"]),
        Column::new("Indication Number".into(), vec!["IND-1", "IND-2"]),
        Column::new("Axial Distance".into(), vec!["10.5", "not a number"]),
        Column::new("Clock Position".into(), vec!["3:00", "6:30"]),
        Column::new("Length".into(), vec![6.0, 12.0]),
        Column::new("Width".into(), vec![0.5, 1.0]),
        Column::new("Pipe Diameter".into(), vec![24.0, 24.0]),
    ])
    .unwrap();

    let table = clean_indications(&df).unwrap();
    assert_eq!(table.indications.len(), 1);
    assert_eq!(table.indications[0].axial_start_ft, 10.5);
}

#[test]
fn clean_rejects_bad_clock_values() {
    let df = DataFrame::new(vec![
        Column::new("Indication Type".into(), vec!["EC"]),
        Column::new("Indication Number".into(), vec!["IND-1"]),
        Column::new("Axial Distance".into(), vec![10.0]),
        Column::new("Clock Position".into(), vec!["quarter past three"]),
        Column::new("Length".into(), vec![6.0]),
        Column::new("Width".into(), vec![0.5]),
        Column::new("Pipe Diameter".into(), vec![24.0]),
    ])
    .unwrap();

    assert!(matches!(
        clean_indications(&df),
        Err(CleanError::BadClock(_))
    ));
}

#[test]
fn clean_empty_sheet_is_an_error() {
    let df = DataFrame::new(vec![
        Column::new("Indication Type".into(), Vec::<String>::new()),
        Column::new("Indication Number".into(), Vec::<String>::new()),
        Column::new("Axial Distance".into(), Vec::<f64>::new()),
        Column::new("Clock Position".into(), Vec::<String>::new()),
        Column::new("Length".into(), Vec::<f64>::new()),
        Column::new("Width".into(), Vec::<f64>::new()),
        Column::new("Pipe Diameter".into(), Vec::<f64>::new()),
    ])
    .unwrap();

    assert!(matches!(clean_indications(&df), Err(CleanError::Empty)));
}

#[test]
fn numeric_clock_column_normalizes_to_hh_mm() {
    let df = DataFrame::new(vec![
        Column::new("Indication Type".into(), vec!["EC"]),
        Column::new("Indication Number".into(), vec!["IND-1"]),
        Column::new("Axial Distance".into(), vec![10.0]),
        Column::new("Clock Position".into(), vec![3i64]),
        Column::new("Length".into(), vec![6.0]),
        Column::new("Width".into(), vec![0.5]),
        Column::new("Pipe Diameter".into(), vec![24.0]),
    ])
    .unwrap();

    let table = clean_indications(&df).unwrap();
    assert_eq!(table.indications[0].clock_position, "03:00");
    assert_eq!(table.indications[0].clock_hours, 3.0);
}
