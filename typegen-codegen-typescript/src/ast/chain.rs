//! Fluent call chains such as `z.string().trim().max(50)`.

use std::fmt;

/// An expression followed by method calls, rendered on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodChain(String);

impl MethodChain {
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into())
    }

    /// Append `.method(args)`.
    pub fn call(mut self, method: &str, args: &[&str]) -> Self {
        self.0.push('.');
        self.0.push_str(method);
        self.0.push('(');
        self.0.push_str(&args.join(", "));
        self.0.push(')');
        self
    }

    /// Append `.method()` when `condition` holds.
    pub fn call_if(self, condition: bool, method: &str) -> Self {
        if condition { self.call(method, &[]) } else { self }
    }

    /// Append `.method(arg)` when `arg` is present.
    pub fn call_with<T: fmt::Display>(self, method: &str, arg: Option<T>) -> Self {
        match arg {
            Some(arg) => self.call(method, &[&arg.to_string()]),
            None => self,
        }
    }
}

impl fmt::Display for MethodChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
