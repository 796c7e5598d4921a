#![cfg(all(feature = "control", feature = "tracing"))]
//! Tests that failure capture and re-raise emit diagnostic events.

use rstest::rstest;
use slang::control::{Cause, Try};
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedOutput {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedOutput {
    fn contents(&self) -> String {
        String::from_utf8(self.buffer.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedOutput {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedOutput {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<F: FnOnce()>(action: F) -> String {
    let output = CapturedOutput::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(output.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, action);
    output.contents()
}

#[rstest]
fn catching_a_panic_emits_debug_event() {
    let divisor = std::hint::black_box(0);
    let logs = capture(|| {
        let outcome = Try::catching(|| 10 / divisor);
        assert!(outcome.is_failure());
    });
    assert!(logs.contains("DEBUG"));
    assert!(logs.contains("captured as failure"));
    assert!(logs.contains("attempt to divide by zero"));
}

#[rstest]
fn failing_of_emits_trace_event() {
    let logs = capture(|| {
        let outcome: Try<i32, String> = Try::of(|| Err("no".to_string()));
        assert!(outcome.is_failure());
    });
    assert!(logs.contains("TRACE"));
    assert!(logs.contains("computation returned a failure"));
}

#[rstest]
fn success_is_silent() {
    let logs = capture(|| {
        let outcome = Try::catching(|| 1 + 1);
        assert_eq!(outcome, Try::Success(2));
    });
    assert!(logs.is_empty());
}

#[rstest]
fn get_or_raise_emits_trace_event() {
    let logs = capture(|| {
        let failure: Try<i32> = Try::Failure(Cause::new("again"));
        let recaptured = Try::catching(move || failure.get_or_raise());
        assert_eq!(recaptured, Try::Failure(Cause::new("again")));
    });
    assert!(logs.contains("re-raising failure cause"));
}
