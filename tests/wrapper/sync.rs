use std::sync::atomic::{AtomicU32, Ordering};

use catch_rail::{InternalError, Options, Wrapper};

#[derive(Debug, Clone, PartialEq)]
enum AppError {
    NotFound(String),
    Internal,
    Wrapped(Box<AppError>),
}

impl From<InternalError> for AppError {
    fn from(_: InternalError) -> Self {
        AppError::Internal
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::NotFound(err.to_string())
    }
}

#[test]
fn returned_error_is_converted_into_wrapper_error() {
    let wrapper: Wrapper<AppError> = Wrapper::new();

    let result = wrapper.execute_sync(|| "abc".parse::<u32>());

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[test]
fn typed_panic_payload_is_recognized() {
    let wrapper: Wrapper<AppError> = Wrapper::new();

    let result = wrapper.execute_sync(|| -> Result<(), AppError> {
        std::panic::panic_any(AppError::NotFound("user 7".into()))
    });

    assert_eq!(result, Err(AppError::NotFound("user 7".into())));
}

#[test]
fn typed_panic_payload_goes_through_transform() {
    let wrapper: Wrapper<AppError> = Wrapper::with_defaults(
        Options::new().with_transform(|e: AppError| AppError::Wrapped(Box::new(e))),
    );

    let result = wrapper.execute_sync(|| -> Result<(), AppError> {
        std::panic::panic_any(AppError::NotFound("user 7".into()))
    });

    assert_eq!(result, Err(AppError::Wrapped(Box::new(AppError::NotFound("user 7".into())))));
}

#[test]
fn foreign_panic_payload_is_internal() {
    let wrapper: Wrapper<AppError> = Wrapper::new();

    let result = wrapper.execute_sync(|| -> Result<(), AppError> { std::panic::panic_any(42_i32) });

    assert_eq!(result, Err(AppError::Internal));
}

#[test]
fn producer_runs_exactly_once() {
    let calls = AtomicU32::new(0);
    let wrapper: Wrapper<AppError> = Wrapper::new();

    let result = wrapper.execute_sync(|| {
        calls.fetch_add(1, Ordering::SeqCst);
        Err::<(), _>(AppError::NotFound("gone".into()))
    });

    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn call_options_replace_defaults_entirely() {
    let wrapper: Wrapper<AppError> = Wrapper::with_defaults(
        Options::new().with_transform(|e: AppError| AppError::Wrapped(Box::new(e))),
    );

    let result =
        wrapper.execute_sync_with(|| Err::<(), _>(AppError::NotFound("x".into())), &Options::new());

    assert_eq!(result, Err(AppError::NotFound("x".into())));
}

#[test]
fn call_options_transform_overrides_default_transform() {
    let wrapper: Wrapper<AppError> = Wrapper::with_defaults(
        Options::new().with_transform(|e: AppError| AppError::Wrapped(Box::new(e))),
    );
    let call = Options::new().with_transform(|_: AppError| AppError::Internal);

    let result = wrapper.execute_sync_with(|| Err::<(), _>(AppError::NotFound("x".into())), &call);

    assert_eq!(result, Err(AppError::Internal));
}

#[test]
fn repeated_success_yields_equal_results() {
    let wrapper: Wrapper<AppError> = Wrapper::new();
    let producer = || Ok::<_, AppError>(vec![1, 2, 3]);

    let first = wrapper.execute_sync(producer);
    let second = wrapper.execute_sync(producer);

    assert_eq!(first, second);
    assert_eq!(first, Ok(vec![1, 2, 3]));
}

#[test]
fn free_function_uses_process_wide_wrapper() {
    let result = catch_rail::execute_sync(|| -> Result<u8, std::io::Error> { panic!("nope") });

    assert_eq!(result.unwrap_err().to_string(), "internal error");
}

#[test]
fn string_panic_is_internal_error_even_when_error_type_is_string() {
    let wrapper: Wrapper<String> =
        Wrapper::with_defaults(Options::new().with_transform(|e: String| format!("wrapped: {e}")));
    let code = 7;

    let formatted = wrapper.execute_sync(|| -> Result<(), String> { panic!("code {code}") });
    let literal = wrapper.execute_sync(|| -> Result<(), String> { panic!("code 7") });
    let typed = wrapper.execute_sync(|| -> Result<(), String> {
        std::panic::panic_any(String::from("code 7"))
    });

    assert_eq!(formatted, Err("internal error".to_string()));
    assert_eq!(literal, Err("internal error".to_string()));
    assert_eq!(typed, Err("internal error".to_string()));
}
