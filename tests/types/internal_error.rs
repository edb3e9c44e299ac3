use std::error::Error;

use catch_rail::{BoxError, InternalError, INTERNAL_ERROR_MESSAGE};

#[test]
fn message_is_fixed() {
    let err = InternalError::with_detail("something specific");

    assert_eq!(err.message(), INTERNAL_ERROR_MESSAGE);
    assert_eq!(err.to_string(), "internal error");
    assert!(err.source().is_none());
}

#[test]
fn converts_into_boxed_error() {
    let boxed: BoxError = InternalError::new().into();

    assert_eq!(boxed.to_string(), "internal error");
    assert!(boxed.downcast_ref::<InternalError>().is_some());
}

#[test]
fn converts_into_string() {
    let text: String = InternalError::with_detail("ignored").into();

    assert_eq!(text, "internal error");
}

#[test]
fn equality_includes_detail() {
    assert_eq!(InternalError::new(), InternalError::default());
    assert_ne!(InternalError::new(), InternalError::with_detail("x"));
}
