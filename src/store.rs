use std::{cell::RefCell, rc::Rc};

use crate::QueryParams;


/// Navigation state that bound properties read from and write to.
///
/// In a browser this is `window.location` and `window.history`.
/// Both write operations receive the full path including the query string.
pub trait UrlStore {
    /// Returns the parameters of the current query string.
    fn query_parameters(&self) -> QueryParams;

    /// Returns the current path, without the query string.
    fn path(&self) -> String;

    /// Navigates to `path`, creating a new history entry.
    fn push_history_state(&self, path: &str);

    /// Navigates to `path`, overwriting the current history entry.
    fn replace_history_state(&self, path: &str);
}

impl<S: UrlStore + ?Sized> UrlStore for Rc<S> {
    fn query_parameters(&self) -> QueryParams {
        (**self).query_parameters()
    }
    fn path(&self) -> String {
        (**self).path()
    }
    fn push_history_state(&self, path: &str) {
        (**self).push_history_state(path)
    }
    fn replace_history_state(&self, path: &str) {
        (**self).replace_history_state(path)
    }
}

/// In-memory navigation history.
#[derive(Debug)]
pub struct MemoryUrlStore(RefCell<History>);

#[derive(Debug)]
struct History {
    entries: Vec<String>,
    index: usize,
}

impl MemoryUrlStore {
    /// Creates a history with a single entry, e.g. `"/list?page=2"`.
    pub fn new(location: impl Into<String>) -> Self {
        Self(RefCell::new(History {
            entries: vec![location.into()],
            index: 0,
        }))
    }

    /// Returns the current path including the query string.
    pub fn location(&self) -> String {
        let h = self.0.borrow();
        h.entries[h.index].clone()
    }

    pub fn history_len(&self) -> usize {
        self.0.borrow().entries.len()
    }

    /// Moves to the previous entry. Returns `false` at the first entry.
    pub fn back(&self) -> bool {
        let mut h = self.0.borrow_mut();
        if h.index == 0 {
            return false;
        }
        h.index -= 1;
        true
    }

    /// Moves to the next entry. Returns `false` at the last entry.
    pub fn forward(&self) -> bool {
        let mut h = self.0.borrow_mut();
        if h.index + 1 >= h.entries.len() {
            return false;
        }
        h.index += 1;
        true
    }
}

impl Default for MemoryUrlStore {
    fn default() -> Self {
        Self::new("/")
    }
}

fn split_location(location: &str) -> (&str, &str) {
    location.split_once('?').unwrap_or((location, ""))
}

impl UrlStore for MemoryUrlStore {
    fn query_parameters(&self) -> QueryParams {
        QueryParams::parse(split_location(&self.location()).1)
    }

    fn path(&self) -> String {
        split_location(&self.location()).0.to_owned()
    }

    fn push_history_state(&self, path: &str) {
        let mut h = self.0.borrow_mut();
        let index = h.index + 1;
        h.entries.truncate(index);
        h.entries.push(path.to_owned());
        h.index = index;
    }

    fn replace_history_state(&self, path: &str) {
        let mut h = self.0.borrow_mut();
        let index = h.index;
        h.entries[index] = path.to_owned();
    }
}
