use std::cell::RefCell;

use indimap::charts::{DiagnosticSink, PointContext, RawPoint, TooltipLabel};

// Helper: context with every optional field absent
fn empty_context() -> PointContext {
    PointContext::default()
}

fn full_raw() -> RawPoint {
    RawPoint {
        indication_number: Some("IND-1".to_string()),
        axial_start: Some(3.0),
        width: Some(0.5),
        clock_position: Some("3:00".to_string()),
    }
}

#[test]
fn empty_context_yields_empty_label() {
    assert_eq!(TooltipLabel::format(&empty_context()), "");
}

#[test]
fn dataset_label_alone_keeps_trailing_separator() {
    let ctx = PointContext {
        dataset_label: Some("Series A".to_string()),
        ..PointContext::default()
    };
    assert_eq!(TooltipLabel::format(&ctx), "Series A: ");
}

#[test]
fn empty_dataset_label_is_skipped() {
    let ctx = PointContext {
        dataset_label: Some(String::new()),
        parsed_value: Some(1.0),
        ..PointContext::default()
    };
    assert_eq!(TooltipLabel::format(&ctx), "Length: 1in, ");
}

#[test]
fn label_and_length_only() {
    let ctx = PointContext {
        dataset_label: Some("A".to_string()),
        parsed_value: Some(2.5),
        raw: RawPoint::default(),
    };
    assert_eq!(TooltipLabel::format(&ctx), "A: Length: 2.5in, ");
}

#[test]
fn raw_fields_without_label_or_length() {
    let ctx = PointContext {
        dataset_label: None,
        parsed_value: None,
        raw: full_raw(),
    };
    assert_eq!(
        TooltipLabel::format(&ctx),
        "Number: IND-1, Axial Start: 3ft, Width: 0.5in, Clock: 3:00"
    );
}

#[test]
fn all_fields_in_fixed_order() {
    let ctx = PointContext {
        dataset_label: Some("EC".to_string()),
        parsed_value: Some(2.5),
        raw: RawPoint {
            indication_number: Some("12".to_string()),
            axial_start: Some(10.25),
            width: Some(0.5),
            clock_position: Some("03:30".to_string()),
        },
    };
    assert_eq!(
        TooltipLabel::format(&ctx),
        "EC: Length: 2.5in, Number: 12, Axial Start: 10.25ft, Width: 0.5in, Clock: 03:30"
    );
}

#[test]
fn whole_numbers_render_without_decimal_point() {
    let ctx = PointContext {
        parsed_value: Some(3.0),
        ..PointContext::default()
    };
    assert_eq!(TooltipLabel::format(&ctx), "Length: 3in, ");
}

#[test]
fn zero_axial_start_is_omitted() {
    let mut raw = full_raw();
    raw.axial_start = Some(0.0);
    let ctx = PointContext {
        raw,
        ..PointContext::default()
    };
    assert_eq!(
        TooltipLabel::format(&ctx),
        "Number: IND-1, Width: 0.5in, Clock: 3:00"
    );
}

#[test]
fn zero_width_is_omitted() {
    let mut raw = full_raw();
    raw.width = Some(0.0);
    let ctx = PointContext {
        raw,
        ..PointContext::default()
    };
    assert_eq!(
        TooltipLabel::format(&ctx),
        "Number: IND-1, Axial Start: 3ft, Clock: 3:00"
    );
}

#[test]
fn empty_raw_strings_are_omitted() {
    let mut raw = full_raw();
    raw.indication_number = Some(String::new());
    raw.clock_position = Some(String::new());
    let ctx = PointContext {
        raw,
        ..PointContext::default()
    };
    assert_eq!(TooltipLabel::format(&ctx), "Axial Start: 3ft, Width: 0.5in, ");
}

// Length is null-checked, not truthiness-checked: a zero length still shows.
#[test]
fn zero_length_is_still_shown() {
    let ctx = PointContext {
        parsed_value: Some(0.0),
        ..PointContext::default()
    };
    assert_eq!(TooltipLabel::format(&ctx), "Length: 0in, ");
}

#[test]
fn format_is_idempotent_and_does_not_mutate_input() {
    let ctx = PointContext {
        dataset_label: Some("EC".to_string()),
        parsed_value: Some(2.5),
        raw: full_raw(),
    };
    let before = ctx.clone();

    let first = TooltipLabel::format(&ctx);
    let second = TooltipLabel::format(&ctx);

    assert_eq!(first, second);
    assert_eq!(ctx, before, "format must not mutate its input");
}

struct RecordingSink {
    calls: RefCell<Vec<(PointContext, String)>>,
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, context: &PointContext, label: &str) {
        self.calls
            .borrow_mut()
            .push((context.clone(), label.to_string()));
    }
}

#[test]
fn sink_sees_context_and_final_label() {
    let sink = RecordingSink {
        calls: RefCell::new(Vec::new()),
    };
    let ctx = PointContext {
        dataset_label: Some("EC".to_string()),
        parsed_value: Some(1.5),
        raw: RawPoint::default(),
    };

    let label = TooltipLabel::format_with_sink(&ctx, &sink);

    assert_eq!(label, "EC: Length: 1.5in, ");
    let calls = sink.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, ctx);
    assert_eq!(calls[0].1, label);
}

#[test]
fn sink_does_not_change_the_label() {
    let sink = RecordingSink {
        calls: RefCell::new(Vec::new()),
    };
    let ctx = PointContext {
        raw: full_raw(),
        ..PointContext::default()
    };
    assert_eq!(
        TooltipLabel::format_with_sink(&ctx, &sink),
        TooltipLabel::format(&ctx)
    );
}
