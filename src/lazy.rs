//! A single-assignment thunk: materialises its value on first read and caches it.
//!
//! Used for the deferred [`Reply`](crate::reply::Reply) payload inside a consumed
//! [`Consumed`](crate::reply::Consumed) and for [`Message`](crate::error::Message)'s own
//! lazy construction. Forcing is idempotent: the closure runs at most once, and every
//! subsequent read returns the cached value.

use std::cell::{OnceCell, RefCell};

/// A deferred computation of `T`, evaluated at most once.
pub struct Lazy<T> {
    cell: OnceCell<T>,
    thunk: RefCell<Option<Box<dyn FnOnce() -> T>>>,
}

impl<T> Lazy<T> {
    /// Wraps a deferred constructor; `f` runs on the first call to [`force`](Self::force).
    pub fn new(f: impl FnOnce() -> T + 'static) -> Self {
        Lazy {
            cell: OnceCell::new(),
            thunk: RefCell::new(Some(Box::new(f))),
        }
    }

    /// Wraps an already-known value; equivalent to a pre-forced thunk.
    pub fn ready(value: T) -> Self {
        let cell = OnceCell::new();
        // OnceCell::new() is always empty, so set() cannot fail here.
        let _ = cell.set(value);
        Lazy {
            cell,
            thunk: RefCell::new(None),
        }
    }

    /// Materialises the value if needed, and returns a reference to the cached result.
    pub fn force(&self) -> &T {
        self.cell.get_or_init(|| {
            let thunk = self
                .thunk
                .borrow_mut()
                .take()
                .expect("Lazy forced with no thunk and no cached value");
            thunk()
        })
    }

    /// Forces the value and consumes `self` to hand back ownership without cloning.
    pub fn into_inner(self) -> T {
        self.force();
        self.cell.into_inner().expect("force() always populates the cell")
    }
}
