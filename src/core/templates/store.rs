//! Backing store port for template sources.
//!
//! The loader and the default generator only talk to the store through this
//! trait; the filesystem implementation lives in the infrastructure layer.

use std::io;

use crate::core::error::Result;

/// Named text resources that template sources are read from and written to
pub trait TemplateStore {
    /// Read the resource called `name`.
    ///
    /// Returns `Ok(None)` when it does not exist.
    fn read(&self, name: &str) -> io::Result<Option<String>>;

    /// Create the resource `name` with `contents`.
    ///
    /// Must never overwrite: fails with
    /// [`Error::AlreadyExists`](crate::core::Error::AlreadyExists) and leaves
    /// the existing resource untouched when `name` is already present.
    fn create(&self, name: &str, contents: &str) -> Result<()>;
}

impl<T: TemplateStore + ?Sized> TemplateStore for &T {
    fn read(&self, name: &str) -> io::Result<Option<String>> {
        (**self).read(name)
    }

    fn create(&self, name: &str, contents: &str) -> Result<()> {
        (**self).create(name, contents)
    }
}
