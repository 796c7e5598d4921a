//! Integration tests for Display and Debug implementations.
//!
//! Every type renders a deterministic string that names its variant and
//! payload.

#![cfg(feature = "control")]

use slang::control::{Cause, Either, ExhaustedError, IteratorState, Try, iterator};

// =============================================================================
// Either
// =============================================================================

#[test]
fn test_either_left_display() {
    let left: Either<i32, String> = Either::Left(42);
    assert_eq!(format!("{left}"), "Left(42)");
}

#[test]
fn test_either_right_display() {
    let right: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(format!("{right}"), "Right(hello)");
}

#[test]
fn test_either_debug_quotes_strings() {
    let right: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(format!("{right:?}"), "Right(\"hello\")");
}

// =============================================================================
// Try and Cause
// =============================================================================

#[test]
fn test_try_success_display() {
    let success: Try<i32> = Try::Success(5);
    assert_eq!(format!("{success}"), "Success(5)");
}

#[test]
fn test_try_failure_display_includes_cause() {
    let failure: Try<i32> = Try::Failure(Cause::panicked("attempt to divide by zero"));
    assert_eq!(format!("{failure}"), "Failure(panic: attempt to divide by zero)");
}

#[test]
fn test_try_with_custom_cause_display() {
    let failure: Try<i32, String> = Try::Failure("timeout".to_string());
    assert_eq!(failure.to_string(), "Failure(timeout)");
}

#[test]
fn test_try_debug() {
    let failure: Try<i32> = Try::Failure(Cause::new("boom"));
    assert_eq!(
        format!("{failure:?}"),
        "Failure(Cause { origin: Message, message: \"boom\" })"
    );
}

// =============================================================================
// Iterators
// =============================================================================

#[test]
fn test_iterator_debug() {
    let mut single = iterator::of(1);
    assert_eq!(format!("{single:?}"), "Single { slot: Pending(1) }");
    single.next();
    assert_eq!(format!("{single:?}"), "Single { slot: Exhausted }");
    assert_eq!(format!("{:?}", iterator::empty::<i32>()), "Empty");
    assert_eq!(format!("{:?}", IteratorState::Pending), "Pending");
}

#[test]
fn test_exhausted_error_display() {
    assert_eq!(ExhaustedError::empty().to_string(), "next() on empty iterator");
    assert_eq!(ExhaustedError::consumed().to_string(), "next() on exhausted iterator");
}
