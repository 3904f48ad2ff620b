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

//! `param-store` is a library for storing named parameters in files.
//!
//! A [`ParamStore`] maps string keys to dynamically-typed [`Value`]s and persists them to a single
//! file. The file format is chosen from the extension of the file path, so the same code can read
//! and write parameters in any registered format.
//!
//! This library provides the following formats out of the box:
//! - [`JsonFormat`] stores parameters as a JSON object. It is registered as `json`.
//! - [`MessagePackFormat`] stores parameters in the compact MessagePack binary format. It is
//! registered as `msgpack`.
//!
//! New formats can be added by implementing [`Format`] and registering them with a
//! [`FormatRegistry`].
//!
//! # Examples
//! ```no_run
//! use param_store::json;
//!
//! fn main() -> param_store::Result<()> {
//!     // Pick a format based on the file extension.
//!     let mut params = param_store::create("params.json")?;
//!
//!     // Load the parameters which are already in the file.
//!     params.read()?;
//!
//!     params.add("retries", 3);
//!     params.add("endpoint", json!({ "host": "localhost", "port": 8080 }));
//!     assert_eq!(params.get("retries"), Some(&json!(3)));
//!
//!     // Persist the parameters.
//!     params.write()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Atomicity
//! Writes are not atomic. If `ParamStore::write` fails while writing to the file, the file may be
//! left truncated. Callers which need atomic updates should write to a temporary path and rename it.
//!
//! [`ParamStore`]: crate::ParamStore
//! [`Value`]: crate::Value
//! [`JsonFormat`]: crate::format::JsonFormat
//! [`MessagePackFormat`]: crate::format::MessagePackFormat
//! [`Format`]: crate::format::Format
//! [`FormatRegistry`]: crate::format::FormatRegistry

pub use serde_json::{json, Value};

pub use error::{Error, Result};
pub use format::{create, default_registry, FormatRegistry};
pub use store::{ParamStore, Params};

mod error;
pub mod format;
mod store;
