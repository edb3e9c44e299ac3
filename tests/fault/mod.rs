use catch_rail::fault::{panic_message, Fault, PanicPayload};
use catch_rail::{InternalError, Options};

#[derive(Debug, PartialEq)]
enum ServiceError {
    Timeout,
    Internal(Option<String>),
    Renamed(&'static str),
}

impl From<InternalError> for ServiceError {
    fn from(err: InternalError) -> Self {
        ServiceError::Internal(err.detail().map(str::to_owned))
    }
}

#[test]
fn recognized_without_transform_passes_through() {
    let fault = Fault::from_error(ServiceError::Timeout);

    assert!(fault.is_recognized());
    assert_eq!(fault.normalize(&Options::new()), ServiceError::Timeout);
}

#[test]
fn recognized_with_transform_is_rewritten() {
    let options = Options::new().with_transform(|_: ServiceError| ServiceError::Renamed("upstream timeout"));

    let fault = Fault::from_error(ServiceError::Timeout);

    assert_eq!(fault.normalize(&options), ServiceError::Renamed("upstream timeout"));
}

#[test]
fn static_str_payload_becomes_internal_with_detail() {
    let payload: PanicPayload = Box::new("raw string");

    let fault: Fault<ServiceError> = Fault::from_panic(payload);

    assert!(!fault.is_recognized());
    assert_eq!(
        fault.normalize(&Options::new()),
        ServiceError::Internal(Some("raw string".to_string()))
    );
}

#[test]
fn opaque_payload_becomes_internal_without_detail() {
    let options = Options::new().with_transform(|_: ServiceError| ServiceError::Renamed("never"));

    let fault: Fault<ServiceError> = Fault::from_panic(Box::new(3.5_f64));

    assert_eq!(fault.normalize(&options), ServiceError::Internal(None));
}

#[test]
fn payload_of_wrapper_type_is_recognized() {
    let fault: Fault<ServiceError> = Fault::from_panic(Box::new(ServiceError::Timeout));

    assert!(matches!(fault, Fault::Recognized(ServiceError::Timeout)));
}

#[test]
fn panic_message_reads_both_string_kinds() {
    let borrowed: PanicPayload = Box::new("static");
    let owned: PanicPayload = Box::new(String::from("owned"));
    let other: PanicPayload = Box::new(1_u8);

    assert_eq!(panic_message(&borrowed), Some("static"));
    assert_eq!(panic_message(&owned), Some("owned"));
    assert_eq!(panic_message(&other), None);
}

#[test]
fn debug_shows_panic_message() {
    let fault: Fault<ServiceError> = Fault::from_panic(Box::new("boom"));

    assert_eq!(format!("{fault:?}"), "Unrecognized(\"boom\")");
}
