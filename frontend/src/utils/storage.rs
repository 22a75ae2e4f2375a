use std::{cell::RefCell, collections::HashMap, rc::Rc};
use web_sys::{Storage, Window};

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Read-only view of a key-value store holding credential markers.
pub trait CredentialStore {
    /// `None` covers both a missing key and a failed read.
    fn read(&self, key: &str) -> Option<String>;
}

pub struct BrowserStorage {
    storage: Storage,
}

impl BrowserStorage {
    pub fn local() -> Result<Self, String> {
        local_storage().map(|storage| Self { storage })
    }
}

impl CredentialStore for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }
}

/// Context value for the admin guard; `None` means the environment has no
/// storage at all.
#[derive(Clone)]
pub struct CredentialStoreHandle(Option<Rc<dyn CredentialStore>>);

impl CredentialStoreHandle {
    pub fn new(store: impl CredentialStore + 'static) -> Self {
        Self(Some(Rc::new(store)))
    }

    pub fn unavailable() -> Self {
        Self(None)
    }

    pub fn browser() -> Self {
        match BrowserStorage::local() {
            Ok(storage) => Self::new(storage),
            Err(err) => {
                log::debug!("Credential storage unavailable: {err}");
                Self::unavailable()
            }
        }
    }

    pub fn store(&self) -> Option<&dyn CredentialStore> {
        self.0.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RefCell::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    #[cfg(test)]
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.borrow_mut().insert(key.into(), value.into());
    }
}

impl CredentialStore for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}
