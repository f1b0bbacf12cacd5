#![allow(dead_code)]
use outcome::Outcome;
use std::{cell::RefCell, fmt::Debug};

pub fn assert_success<T, E>(outcome: &Outcome<T, E>, expected: T)
where
    T: Debug + PartialEq,
    E: Debug,
{
    assert!(outcome.is_success(), "expected success, got {:?}", outcome);
    assert!(!outcome.is_failure());
    assert_eq!(outcome.as_success(), Some(&expected));
}

pub fn assert_failure<T, E>(outcome: &Outcome<T, E>, expected: E)
where
    T: Debug,
    E: Debug + PartialEq,
{
    assert!(outcome.is_failure(), "expected failure, got {:?}", outcome);
    assert!(!outcome.is_success());
    assert_eq!(outcome.error(), Some(&expected));
}

/// Records every invocation of the callbacks handed out by it.
#[derive(Default)]
pub struct Recorder {
    calls: RefCell<Vec<String>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record<T: ToString>(&self, call: T) {
        self.calls.borrow_mut().push(call.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }
}
