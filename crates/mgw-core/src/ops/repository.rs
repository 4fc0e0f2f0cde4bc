//! Snapshot persistence seam
//!
//! The session loads each collection once at startup and rewrites the whole
//! snapshot after every mutation. Real storage lives in `mgw-store`; the
//! in-memory implementation here backs tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::{MgwError, Result};

/// Load/save capability for one ordered collection
pub trait Repository<T> {
    /// Read the full snapshot
    ///
    /// # Errors
    /// Returns `Persistence` or `Serialization` if the snapshot cannot be read.
    fn load(&self) -> Result<Vec<T>>;

    /// Replace the full snapshot
    ///
    /// # Errors
    /// Returns `Persistence` or `Serialization` if the snapshot cannot be written.
    fn save(&self, records: &[T]) -> Result<()>;
}

#[derive(Debug)]
struct InMemoryState<T> {
    records: Vec<T>,
    saves: usize,
    load_error: Option<String>,
    save_error: Option<String>,
}

/// Repository held in memory
///
/// Clones share the same state, so a test can keep a handle after moving
/// one into a session.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    state: Rc<RefCell<InMemoryState<T>>>,
}

impl<T> Clone for InMemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T: Clone> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            state: Rc::new(RefCell::new(InMemoryState {
                records,
                saves: 0,
                load_error: None,
                save_error: None,
            })),
        }
    }

    /// Make every load fail with `message`
    pub fn fail_loads(&self, message: impl Into<String>) {
        self.state.borrow_mut().load_error = Some(message.into());
    }

    /// Make every save fail with `message`, or succeed again with `None`
    pub fn fail_saves(&self, message: Option<String>) {
        self.state.borrow_mut().save_error = message;
    }

    /// Records as of the last successful save
    pub fn snapshot(&self) -> Vec<T> {
        self.state.borrow().records.clone()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.state.borrow().saves
    }
}

impl<T: Clone> Repository<T> for InMemoryRepository<T> {
    fn load(&self) -> Result<Vec<T>> {
        let state = self.state.borrow();
        match &state.load_error {
            Some(message) => Err(MgwError::persistence("load snapshot", message.clone())),
            None => Ok(state.records.clone()),
        }
    }

    fn save(&self, records: &[T]) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if let Some(message) = &state.save_error {
            return Err(MgwError::persistence("save snapshot", message.clone()));
        }
        state.records = records.to_vec();
        state.saves += 1;
        Ok(())
    }
}
