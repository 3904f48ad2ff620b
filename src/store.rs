/*
 * Copyright 2021 Wren Powell
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;
use serde_json::Value;

use crate::format::Format;

/// A set of parameters which maps keys to values.
pub type Params = BTreeMap<String, Value>;

/// A set of parameters which is persisted to a file.
///
/// A `ParamStore` holds its parameters in memory and is bound to a single file, its `source`.
/// Changes made to the parameters are not persisted until [`write`] is called, and the parameters
/// in the file are not loaded until [`read`] is called. A new store always starts out empty.
///
/// The [`Format`] of the store determines how parameters are represented in the file. Usually, a
/// store is created with [`FormatRegistry::create`], which picks the format from the extension of
/// the file.
///
/// [`write`]: crate::ParamStore::write
/// [`read`]: crate::ParamStore::read
/// [`Format`]: crate::format::Format
/// [`FormatRegistry::create`]: crate::format::FormatRegistry::create
#[derive(Debug, Clone)]
pub struct ParamStore {
    /// The path of the file the parameters are persisted to.
    source: PathBuf,

    /// The parameters in memory.
    params: Params,

    /// The format of the file at `source`.
    format: Arc<dyn Format>,
}

impl ParamStore {
    /// Return a new empty store which persists parameters to `source` using `format`.
    pub fn new(source: impl Into<PathBuf>, format: Arc<dyn Format>) -> Self {
        ParamStore {
            source: source.into(),
            params: Params::new(),
            format,
        }
    }

    /// The path of the file this store is bound to.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The format this store uses to read and write its file.
    pub fn format(&self) -> &dyn Format {
        self.format.as_ref()
    }

    /// Add a parameter with the given `key` and `value`.
    ///
    /// If there is already a parameter with the given `key`, its value is replaced.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.params.insert(key.into(), value.into());
    }

    /// Return the value of the parameter with the given `key`.
    ///
    /// This returns `None` if there is no parameter with the given `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// Return all the parameters in this store.
    pub fn get_all(&self) -> &Params {
        &self.params
    }

    /// Return whether there is a parameter with the given `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Return an iterator over the keys of all the parameters in this store.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// The number of parameters in this store.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Return whether this store contains no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Remove the parameter with the given `key` and return its value.
    ///
    /// # Errors
    /// - `Error::KeyNotFound`: There is no parameter with the given `key`. The store is unchanged.
    pub fn remove(&mut self, key: &str) -> crate::Result<Value> {
        self.params
            .remove(key)
            .ok_or_else(|| crate::Error::KeyNotFound(key.to_owned()))
    }

    /// Remove all the parameters in this store.
    pub fn remove_all(&mut self) {
        self.params.clear();
    }

    /// Load the parameters in the file at `source` into this store.
    ///
    /// The parameters in the file are merged into the parameters already in this store. Parameters
    /// in the file replace parameters in the store with the same key, and parameters which are only
    /// in the store are kept.
    ///
    /// # Errors
    /// - `Error::Deserialize`: The file is not a valid set of parameters in this store's format.
    /// The store is unchanged.
    /// - `Error::Io`: An I/O error occurred, like the file not existing. The store is unchanged.
    pub fn read(&mut self) -> crate::Result<()> {
        let data = fs::read(&self.source)?;
        let params = self.format.deserialize(&data)?;
        debug!(
            "Read {} parameters from {}",
            params.len(),
            self.source.display()
        );
        self.params.extend(params);
        Ok(())
    }

    /// Persist the parameters in this store to the file at `source`.
    ///
    /// This replaces the contents of the file, creating it if it does not exist.
    ///
    /// This is not an atomic operation. If an I/O error occurs while writing, the file may be left
    /// truncated.
    ///
    /// # Errors
    /// - `Error::Serialize`: A value could not be represented in this store's format. The file is
    /// not modified.
    /// - `Error::Io`: An I/O error occurred.
    pub fn write(&self) -> crate::Result<()> {
        let data = self.format.serialize(&self.params)?;
        let mut file = File::create(&self.source)?;
        file.write_all(&data)?;
        file.flush()?;
        debug!(
            "Wrote {} parameters to {}",
            self.params.len(),
            self.source.display()
        );
        Ok(())
    }
}
