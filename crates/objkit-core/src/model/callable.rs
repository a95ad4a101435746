use super::Value;
use std::fmt;
use std::sync::Arc;

type CallableFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// Opaque callable stored as an attribute value
///
/// Callables are compared by identity: two handles are equal only when they
/// were cloned from the same `Callable::new`.
#[derive(Clone)]
pub struct Callable {
    name: Arc<str>,
    func: Arc<CallableFn>,
}

impl Callable {
    /// Wrap a closure under a display name
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: Arc::from(name.into()),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the wrapped closure
    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }

    /// True when both handles point at the same closure
    pub fn ptr_eq(&self, other: &Callable) -> bool {
        std::ptr::eq(
            Arc::as_ptr(&self.func) as *const (),
            Arc::as_ptr(&other.func) as *const (),
        )
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Function: {}]", self.name)
    }
}
