use std::sync::Arc;
use std::thread;

use catch_rail::{create_wrapper, Options, Transform, Wrapper, WRAPPER};

#[test]
fn factory_without_defaults_passes_errors_through() {
    let wrapper: Wrapper<String> = create_wrapper(None);

    let result = wrapper.execute_sync(|| Err::<(), _>("raw".to_string()));

    assert_eq!(result, Err("raw".to_string()));
}

#[test]
fn factory_binds_defaults() {
    let wrapper = create_wrapper(Some(Options::new().with_transform(|e: String| e.to_uppercase())));

    let result = wrapper.execute_sync(|| Err::<(), _>("raw".to_string()));

    assert_eq!(result, Err("RAW".to_string()));
}

#[test]
fn defaults_share_the_transform() {
    let transform: Transform<String> = Arc::new(|e: String| format!("<{e}>"));
    let wrapper = Wrapper::with_defaults(Options::new().with_shared_transform(transform.clone()));

    let bound = wrapper.defaults().transform().expect("bound transform");
    assert!(Arc::ptr_eq(bound, &transform));

    let cloned = wrapper.clone();
    assert!(Arc::ptr_eq(cloned.defaults().transform().unwrap(), &transform));
}

#[test]
fn process_wide_wrapper_has_no_defaults() {
    assert!(!WRAPPER.defaults().has_transform());
}

#[test]
fn wrapper_is_shared_across_threads() {
    let wrapper = Arc::new(create_wrapper(Some(
        Options::new().with_transform(|e: String| format!("worker: {e}")),
    )));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let wrapper = Arc::clone(&wrapper);
            thread::spawn(move || wrapper.execute_sync(move || Err::<(), _>(i.to_string())))
        })
        .collect();

    let mut results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    results.sort();

    assert_eq!(
        results,
        vec![
            Err("worker: 0".to_string()),
            Err("worker: 1".to_string()),
            Err("worker: 2".to_string()),
            Err("worker: 3".to_string()),
        ]
    );
}
