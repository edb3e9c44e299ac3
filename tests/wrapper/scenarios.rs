//! The reference scenarios, one test each.

use catch_rail::{BoxError, Options, Wrapper, WRAPPER};

#[derive(Debug, PartialEq)]
struct Message {
    message: String,
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Message {}

fn to_message(err: BoxError) -> BoxError {
    Box::new(Message { message: err.to_string() })
}

#[cfg(feature = "async")]
#[tokio::test]
async fn async_success_yields_data() {
    let result = WRAPPER.execute_async(|| async { Ok::<_, BoxError>("Mock Data") }).await;

    assert_eq!(result.unwrap(), "Mock Data");
}

#[test]
fn sync_success_yields_data() {
    let result = WRAPPER.execute_sync(|| Ok::<_, BoxError>("Mock Data"));

    assert_eq!(result.unwrap(), "Mock Data");
}

#[cfg(feature = "async")]
#[tokio::test]
async fn async_error_with_transform() {
    let options = Options::new().with_transform(to_message);

    let result = WRAPPER
        .execute_async_with(
            || async { Err::<(), _>(std::io::Error::other("Async Error")) },
            &options,
        )
        .await;

    let err = result.unwrap_err();
    let message = err.downcast_ref::<Message>().expect("transform output");
    assert_eq!(message, &Message { message: "Async Error".into() });
}

#[test]
fn sync_error_without_transform_is_the_same_value() {
    let original: BoxError = Box::new(std::io::Error::other("Sync Error"));
    let address = &*original as *const (dyn std::error::Error + Send + Sync) as *const ();

    let result = WRAPPER.execute_sync(move || Err::<(), _>(original));

    let err = result.unwrap_err();
    assert_eq!(&*err as *const (dyn std::error::Error + Send + Sync) as *const (), address);
    assert_eq!(err.to_string(), "Sync Error");
}

#[cfg(feature = "async")]
#[tokio::test]
async fn async_raw_string_panic_becomes_internal_error() {
    let result = WRAPPER
        .execute_async(|| async {
            if true {
                panic!("raw string");
            }
            Ok::<(), BoxError>(())
        })
        .await;

    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "internal error");
    let internal = err.downcast_ref::<catch_rail::InternalError>().expect("internal error");
    assert_eq!(internal.detail(), Some("raw string"));
}

#[test]
fn raw_string_panic_ignores_transform() {
    let wrapper: Wrapper = Wrapper::with_defaults(Options::new().with_transform(to_message));

    let result = wrapper.execute_sync(|| -> Result<(), BoxError> { panic!("raw string") });

    let err = result.unwrap_err();
    assert!(err.downcast_ref::<Message>().is_none());
    assert_eq!(err.to_string(), "internal error");
}
