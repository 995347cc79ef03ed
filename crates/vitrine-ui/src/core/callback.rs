//! Single-threaded callback handle shared by the engines.
//!
//! # Design
//! - Mirror Yew's `Callback` shape so engines plug into components unchanged.
//! - Stay `Rc`-backed; every engine runs inside one UI event turn.

use std::fmt;
use std::rc::Rc;

/// Cloneable caller-supplied function invoked with a value of type `T`.
pub struct Callback<T> {
    inner: Rc<dyn Fn(T)>,
}

impl<T> Callback<T> {
    /// Wrap a closure.
    pub fn new(f: impl Fn(T) + 'static) -> Self {
        Self { inner: Rc::new(f) }
    }

    /// Invoke the callback.
    pub fn emit(&self, value: T) {
        (self.inner)(value);
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for Callback<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback<_>")
    }
}

impl<T, F: Fn(T) + 'static> From<F> for Callback<T> {
    fn from(f: F) -> Self {
        Self::new(f)
    }
}
