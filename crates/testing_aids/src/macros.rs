// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// Asserts that the statement panics and returns the panic payload.
///
/// With a second argument, also asserts that the panic message contains it.
// Unwind safety is asserted: a test that panics is done with its state anyway.
#[macro_export]
macro_rules! assert_panic {
    ($stmt:stmt$(,)?) => {{
        #[allow(clippy::multi_assignments, reason = "macro untidiness")]
        #[expect(clippy::allow_attributes, reason = "macro untidiness")]
        let payload = ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| -> () { _ = { $stmt } }))
            .expect_err("assert_panic! argument did not panic");
        payload
    }};
    ($stmt:stmt, $expected:expr$(,)?) => {{
        let payload = $crate::assert_panic!($stmt);
        let message = $crate::panic_message(&*payload);
        assert!(
            message.contains($expected),
            "panic message does not contain '{}', got:\n{message}",
            $expected
        );
        payload
    }};
}

/// Extracts the message of a panic payload, or an empty string for non-text payloads.
#[must_use]
pub fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else {
        ""
    }
}
