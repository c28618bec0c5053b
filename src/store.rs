//! Per-call storage for heterogeneous arguments

use std::fmt;

use crate::renderer::Argument;

/// Ordered, owned collection of type-erased arguments for one `format` call
///
/// Each element keeps the category of the type it was captured with, so a
/// `u8` stays integral and a `bool` stays boolean behind the trait object.
#[derive(Default)]
pub struct ArgumentStore<'a> {
    args: Vec<Box<dyn Argument + 'a>>,
}

impl<'a> ArgumentStore<'a> {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            args: Vec::with_capacity(capacity),
        }
    }

    /// Capture an argument at the next index
    pub fn push<A: Argument + 'a>(&mut self, arg: A) {
        self.args.push(Box::new(arg));
    }

    /// Builder form of [`ArgumentStore::push`]
    pub fn with<A: Argument + 'a>(mut self, arg: A) -> Self {
        self.push(arg);
        self
    }

    pub fn get(&self, index: usize) -> Option<&(dyn Argument + 'a)> {
        self.args.get(index).map(|arg| &**arg)
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

impl fmt::Debug for ArgumentStore<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentStore")
            .field("len", &self.args.len())
            .finish()
    }
}

impl<'a, A: Argument + 'a> FromIterator<A> for ArgumentStore<'a> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut store = Self::with_capacity(iter.size_hint().0);
        store.extend(iter);
        store
    }
}

impl<'a, A: Argument + 'a> Extend<A> for ArgumentStore<'a> {
    fn extend<I: IntoIterator<Item = A>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.args.reserve(iter.size_hint().0);
        for arg in iter {
            self.push(arg);
        }
    }
}

/// Build an [`ArgumentStore`] from a list of values of any renderable type
///
/// ```rust
/// use nps_format::args;
///
/// let store = args![1, "two", 3.0, true];
/// assert_eq!(store.len(), 4);
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut store = $crate::ArgumentStore::new();
        $(store.push($arg);)*
        store
    }};
}

/// Format a template against a list of arguments
///
/// ```rust
/// use nps_format::nps_format;
///
/// assert_eq!(nps_format!("{0} = {1:x}", "mask", 255).unwrap(), "mask = ff");
/// ```
#[macro_export]
macro_rules! nps_format {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::format($template, $crate::args![$($arg),*])
    };
}
