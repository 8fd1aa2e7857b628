#![cfg(test)]

//! Unit-test logging initialization.
//!
//! Forwards to the shared test-support crate so unit tests and
//! integration tests configure logging identically.

pub fn init() {
    backend_test_support::logging::init();
}
