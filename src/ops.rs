//! The four task operations. Every mutation follows the same cycle: load the
//! whole store, change the in-memory list, save the whole store back. `list`
//! never writes.

use crate::error::Error;
use crate::store::TaskStore;
use crate::task::{Status, Task};

/// Creates a pending task and persists it. Returns the created task so the
/// caller can report its ID.
pub fn create(store: &TaskStore, description: &str) -> Result<Task, Error> {
    if description.trim().is_empty() {
        return Err(Error::EmptyDescription);
    }
    let mut tasks = store.load()?;
    let task = tasks.add(description.to_string());
    store.save(&tasks)?;
    Ok(task)
}

/// Returns tasks in store order, optionally narrowed to one status. An empty
/// or absent filter means no filtering.
pub fn list(store: &TaskStore, filter: Option<&str>) -> Result<Vec<Task>, Error> {
    let filter = parse_filter(filter)?;
    let tasks = store.load()?;
    Ok(tasks
        .iter()
        .filter(|task| filter.map_or(true, |status| task.status() == status))
        .cloned()
        .collect())
}

/// Sets the status of an existing task and persists the change.
pub fn update_status(store: &TaskStore, id: u32, status: &str) -> Result<Task, Error> {
    let status: Status = status.parse()?;
    let mut tasks = store.load()?;
    let task = tasks.set_status(id, status).ok_or(Error::NotFound(id))?.clone();
    store.save(&tasks)?;
    Ok(task)
}

/// Deletes a task by ID and persists the remaining list. The store is left
/// untouched when the ID does not exist.
pub fn delete(store: &TaskStore, id: u32) -> Result<(), Error> {
    let mut tasks = store.load()?;
    if !tasks.remove(id) {
        return Err(Error::NotFound(id));
    }
    store.save(&tasks)?;
    Ok(())
}

fn parse_filter(filter: Option<&str>) -> Result<Option<Status>, Error> {
    match filter {
        None | Some("") => Ok(None),
        Some(s) => Ok(Some(s.parse()?)),
    }
}
