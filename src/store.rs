// src/store.rs
//! Options persistence and change notification.
//!
//! Stores hand back [`StoredOptions`] with unset keys left as `None`; callers
//! resolve defaults through [`Options::resolve`]. Listeners get no payload and
//! must re-read through [`OptionsStore::get`].
use std::{
    cell::{Cell, RefCell},
    error::Error,
    fs, io,
    path::{Path, PathBuf},
    rc::Rc,
};

use crate::config::{
    consts::OPTIONS_FILE,
    options::{Options, StoredOptions},
};

pub type Listener = Box<dyn Fn()>;

pub trait OptionsStore {
    /// Read whatever is currently stored.
    fn get(&self) -> Result<StoredOptions, Box<dyn Error>>;

    /// Register a change listener. Fired after every successful write.
    fn on_change(&self, listener: Listener);

    /// Read and apply defaults.
    fn options(&self) -> Result<Options, Box<dyn Error>> {
        Ok(Options::resolve(&self.get()?))
    }
}

#[derive(Default)]
struct Listeners(RefCell<Vec<Listener>>);

impl Listeners {
    fn push(&self, l: Listener) {
        self.0.borrow_mut().push(l);
    }

    fn fire(&self) {
        for l in self.0.borrow().iter() {
            l();
        }
    }
}

/* ---------------- file-backed ---------------- */

/// `key=value` options file (see `StoredOptions::parse`).
pub struct FileStore {
    path: PathBuf,
    listeners: Listeners,
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(OPTIONS_FILE)
    }
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf(), listeners: Listeners::default() }
    }

    pub fn path(&self) -> &Path { &self.path }

    /// Persist `opts` and notify listeners.
    pub fn set(&self, opts: &Options) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, opts.to_stored().to_text())?;
        logd!("Store: wrote {}", self.path.display());
        self.listeners.fire();
        Ok(())
    }
}

impl OptionsStore for FileStore {
    fn get(&self) -> Result<StoredOptions, Box<dyn Error>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(StoredOptions::parse(&text)),
            // Nothing saved yet: everything unset
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(StoredOptions::default()),
            Err(e) => Err(format!("Could not read options {}: {}", self.path.display(), e).into()),
        }
    }

    fn on_change(&self, listener: Listener) {
        self.listeners.push(listener);
    }
}

/* ---------------- in-memory ---------------- */

#[derive(Default)]
pub struct MemoryStore {
    data: RefCell<StoredOptions>,
    listeners: Listeners,
}

impl MemoryStore {
    pub fn new(data: StoredOptions) -> Self {
        Self { data: RefCell::new(data), listeners: Listeners::default() }
    }

    pub fn set(&self, data: StoredOptions) {
        *self.data.borrow_mut() = data;
        self.listeners.fire();
    }
}

impl OptionsStore for MemoryStore {
    fn get(&self) -> Result<StoredOptions, Box<dyn Error>> {
        Ok(self.data.borrow().clone())
    }

    fn on_change(&self, listener: Listener) {
        self.listeners.push(listener);
    }
}

/* ---------------- change flag ---------------- */

/// Single-slot pending-work flag. Any number of notifications between two
/// `take()` calls collapse into one.
#[derive(Clone, Default)]
pub struct ChangeFlag(Rc<Cell<bool>>);

impl ChangeFlag {
    pub fn raise(&self) { self.0.set(true); }

    pub fn is_raised(&self) -> bool { self.0.get() }

    /// Clear the flag, returning whether it was raised.
    pub fn take(&self) -> bool { self.0.replace(false) }

    /// Subscribe this flag to `store`'s change notifications.
    pub fn watch(&self, store: &dyn OptionsStore) {
        let flag = self.clone();
        store.on_change(Box::new(move || flag.raise()));
    }
}
