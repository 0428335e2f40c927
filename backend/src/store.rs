use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{info, warn};

use shared::User;

/// Errors produced by the user store.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    /// No record matches the requested id.
    #[error("Usuário não encontrado")]
    NotFound,
    /// A required field is missing or not a usable string.
    #[error("{0}")]
    Validation(String),
}

#[derive(Debug)]
struct Inner {
    records: Vec<User>,
    next_id: u64,
}

/// In-memory user store. Cheap to clone; all clones share the same records.
///
/// Records keep insertion order, which is also the order `list` returns
/// them in. Ids are assigned from a counter that only moves forward, so an
/// id freed by a delete is never handed out again.
#[derive(Clone)]
pub struct UserStore {
    inner: Arc<Mutex<Inner>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                records: Vec::new(),
                next_id: 1,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("user store lock poisoned")
    }

    /// Create a user from the supplied fields.
    ///
    /// `name` and `email` must be present as non-blank strings. Any `id` in
    /// the input is discarded; the id is always server-assigned. A rejected
    /// create does not consume an id.
    pub fn create(&self, mut fields: Map<String, Value>) -> Result<User, StoreError> {
        let name = take_required_string(&mut fields, "name")?;
        let email = take_required_string(&mut fields, "email")?;
        fields.remove("id");

        let mut inner = self.lock();
        let user = User {
            id: inner.next_id,
            name,
            email,
            extra: fields,
        };
        inner.next_id += 1;
        inner.records.push(user.clone());

        info!("Created user {} ({})", user.id, user.name);
        Ok(user)
    }

    /// All users, in insertion order.
    pub fn list(&self) -> Vec<User> {
        self.lock().records.clone()
    }

    /// Look up a user by id.
    pub fn get(&self, id: u64) -> Result<User, StoreError> {
        self.lock()
            .records
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Shallow-merge `fields` onto the user with the given id.
    ///
    /// Fields present in the input overwrite same-named fields on the
    /// record; absent fields are untouched. A client-supplied `id` is
    /// ignored. The record keeps its position. A miss or a bad payload
    /// leaves the store unchanged.
    pub fn update(&self, id: u64, fields: Map<String, Value>) -> Result<User, StoreError> {
        for key in ["name", "email"] {
            if let Some(value) = fields.get(key) {
                ensure_nonblank_string(key, value)?;
            }
        }

        let mut inner = self.lock();
        let user = match inner.records.iter_mut().find(|u| u.id == id) {
            Some(user) => user,
            None => {
                warn!("Update of unknown user {}", id);
                return Err(StoreError::NotFound);
            }
        };

        for (key, value) in fields {
            match key.as_str() {
                // the id is server-owned
                "id" => {}
                "name" => {
                    if let Value::String(s) = value {
                        user.name = s;
                    }
                }
                "email" => {
                    if let Value::String(s) = value {
                        user.email = s;
                    }
                }
                _ => {
                    user.extra.insert(key, value);
                }
            }
        }

        info!("Updated user {}", user.id);
        Ok(user.clone())
    }

    /// Remove the user with the given id. Remaining records keep their
    /// relative order; ids are not renumbered.
    pub fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let idx = match inner.records.iter().position(|u| u.id == id) {
            Some(idx) => idx,
            None => {
                warn!("Delete of unknown user {}", id);
                return Err(StoreError::NotFound);
            }
        };
        inner.records.remove(idx);

        info!("Deleted user {}", id);
        Ok(())
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

fn take_required_string(fields: &mut Map<String, Value>, key: &str) -> Result<String, StoreError> {
    match fields.remove(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s),
        Some(_) => Err(StoreError::Validation(format!(
            "O campo '{key}' deve ser uma string não vazia"
        ))),
        None => Err(StoreError::Validation(format!(
            "O campo '{key}' é obrigatório"
        ))),
    }
}

fn ensure_nonblank_string(key: &str, value: &Value) -> Result<(), StoreError> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(StoreError::Validation(format!(
            "O campo '{key}' deve ser uma string não vazia"
        ))),
    }
}
