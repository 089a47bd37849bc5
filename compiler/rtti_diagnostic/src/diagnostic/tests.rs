use pretty_assertions::assert_eq;

use super::*;

#[test]
fn builder_collects_labels_and_notes() {
    let diag = Diagnostic::error(ErrorCode::E7001)
        .with_message("`TypeInfo` cannot be used")
        .with_label(Span::new(10, 14), "needs runtime type information")
        .with_secondary_label(Span::new(0, 5), "instantiated here")
        .with_note("runtime type information is disabled");

    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.primary_span(), Some(Span::new(10, 14)));
    assert_eq!(diag.notes, vec!["runtime type information is disabled"]);
}

#[test]
fn primary_span_skips_secondary_labels() {
    let diag = Diagnostic::error(ErrorCode::E7002)
        .with_secondary_label(Span::new(1, 2), "context")
        .with_label(Span::new(5, 9), "here");
    assert_eq!(diag.primary_span(), Some(Span::new(5, 9)));

    let unlabeled = Diagnostic::error(ErrorCode::E7002);
    assert_eq!(unlabeled.primary_span(), None);
}

#[test]
fn display_renders_code_labels_and_notes() {
    let diag = Diagnostic::error(ErrorCode::E7002)
        .with_message("`object.TypeInfo` could not be found, but is implicitly used")
        .with_label(Span::new(3, 8), "descriptor requested here")
        .with_secondary_label(Span::new(20, 24), "instantiated from here")
        .with_note("the runtime library's `object` module is missing or malformed");

    assert_eq!(
        diag.to_string(),
        "error [E7002]: `object.TypeInfo` could not be found, but is implicitly used\n  \
         --> 3..8: descriptor requested here\n      \
         20..24: instantiated from here\n  \
         = note: the runtime library's `object` module is missing or malformed"
    );
}
