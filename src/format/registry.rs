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

use std::collections::HashMap;
use std::path::{is_separator, Path};
use std::sync::Arc;

use log::trace;
use once_cell::sync::Lazy;

use super::format::Format;
use super::json::JsonFormat;
use super::msgpack::MessagePackFormat;
use crate::store::ParamStore;

/// The registry used by the crate-level [`create`] function.
///
/// [`create`]: crate::create
static DEFAULT_REGISTRY: Lazy<FormatRegistry> = Lazy::new(FormatRegistry::default);

/// Return the lowercase extension of `path` without the leading dot.
///
/// Only the final component of the path is considered, and a leading dot in the file name does not
/// start an extension. This returns an empty string if the path has no extension.
fn extension(path: &Path) -> String {
    path.extension()
        .map(|extension| extension.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Check that `name` is a name which an extension could match.
fn validate_name(name: &str) -> crate::Result<()> {
    if name.is_empty() {
        return Err(crate::Error::InvalidRegistration(String::from(
            "A format must have a name.",
        )));
    }

    if name.contains('.') || name.chars().any(is_separator) {
        return Err(crate::Error::InvalidRegistration(format!(
            "The format name \"{}\" contains a dot or a path separator.",
            name
        )));
    }

    if name.to_lowercase() != name {
        return Err(crate::Error::InvalidRegistration(format!(
            "The format name \"{}\" is not lowercase.",
            name
        )));
    }

    Ok(())
}

/// A collection of formats which are selected by file extension.
///
/// A `FormatRegistry` maps names to [`Format`]s. Creating a [`ParamStore`] for a path with
/// [`create`] uses the format whose name matches the extension of the path. Extensions are matched
/// case-insensitively, so `params.json` and `params.JSON` both use the `json` format.
///
/// [`FormatRegistry::new`] returns an empty registry, while [`FormatRegistry::default`] returns a
/// registry containing the built-in formats. Registries are independent of each other, so
/// registering a format in one registry does not affect any others.
///
/// [`Format`]: crate::format::Format
/// [`ParamStore`]: crate::ParamStore
/// [`create`]: crate::format::FormatRegistry::create
/// [`FormatRegistry::new`]: crate::format::FormatRegistry::new
/// [`FormatRegistry::default`]: crate::format::FormatRegistry::default
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    formats: HashMap<String, Arc<dyn Format>>,
}

impl FormatRegistry {
    /// Return a new registry which contains no formats.
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register `format` under the given `name`.
    ///
    /// The `name` is the file extension which selects this format, without the leading dot. If a
    /// format is already registered under `name`, it is replaced.
    ///
    /// # Errors
    /// - `Error::InvalidRegistration`: The `name` is empty, contains a dot or a path separator, or
    /// contains uppercase characters. No extension could ever match such a name.
    pub fn register(&mut self, name: &str, format: impl Format + 'static) -> crate::Result<()> {
        validate_name(name)?;
        trace!("Registering format {:?} as \"{}\"", format, name);
        self.formats.insert(name.to_owned(), Arc::new(format));
        Ok(())
    }

    /// Return whether a format is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// Return the format registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&dyn Format> {
        self.formats.get(name).map(|format| format.as_ref())
    }

    /// Return an iterator over the names of all registered formats.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.formats.keys().map(String::as_str)
    }

    /// Create a new `ParamStore` for the file at `source`.
    ///
    /// The format is chosen by the extension of `source`. The returned store contains no
    /// parameters and the file is not accessed; use [`ParamStore::read`] to load the parameters
    /// in the file.
    ///
    /// # Errors
    /// - `Error::UnknownFormat`: No format is registered for the extension of `source`.
    ///
    /// [`ParamStore::read`]: crate::ParamStore::read
    pub fn create(&self, source: impl AsRef<Path>) -> crate::Result<ParamStore> {
        let source = source.as_ref();
        let extension = extension(source);
        let format = self
            .formats
            .get(&extension)
            .ok_or(crate::Error::UnknownFormat(extension))?;
        Ok(ParamStore::new(source, Arc::clone(format)))
    }
}

impl Default for FormatRegistry {
    /// Return a new registry containing the built-in formats.
    ///
    /// [`JsonFormat`] is registered as `json` and [`MessagePackFormat`] is registered as
    /// `msgpack`.
    ///
    /// [`JsonFormat`]: crate::format::JsonFormat
    /// [`MessagePackFormat`]: crate::format::MessagePackFormat
    fn default() -> Self {
        let mut formats: HashMap<String, Arc<dyn Format>> = HashMap::new();
        formats.insert(String::from("json"), Arc::new(JsonFormat::default()));
        formats.insert(String::from("msgpack"), Arc::new(MessagePackFormat));
        FormatRegistry { formats }
    }
}

/// Return the registry used by [`create`].
///
/// This registry contains the built-in formats and cannot be modified. To use other formats,
/// create a [`FormatRegistry`] and register them.
///
/// [`create`]: crate::create
/// [`FormatRegistry`]: crate::format::FormatRegistry
pub fn default_registry() -> &'static FormatRegistry {
    &DEFAULT_REGISTRY
}

/// Create a new `ParamStore` for the file at `source` using the built-in formats.
///
/// See [`FormatRegistry::create`] for details.
///
/// # Errors
/// - `Error::UnknownFormat`: The extension of `source` is not `json` or `msgpack`.
///
/// [`FormatRegistry::create`]: crate::format::FormatRegistry::create
pub fn create(source: impl AsRef<Path>) -> crate::Result<ParamStore> {
    DEFAULT_REGISTRY.create(source)
}
