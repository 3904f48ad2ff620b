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

use std::io;
use std::result;

use thiserror::Error as DeriveError;

/// The error type for operations with a parameter store.
#[derive(Debug, DeriveError)]
pub enum Error {
    /// No format is registered for the extension of a source path.
    #[error("No format is registered for the extension \"{0}\".")]
    UnknownFormat(String),

    /// A format could not be registered.
    #[error("The format could not be registered: {0}")]
    InvalidRegistration(String),

    /// There is no parameter with the given key.
    #[error("There is no parameter with the key \"{0}\".")]
    KeyNotFound(String),

    /// A value could not be serialized.
    #[error("A value could not be serialized.")]
    Serialize,

    /// A value could not be deserialized.
    #[error("A value could not be deserialized.")]
    Deserialize,

    /// An I/O error occurred.
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// The result type for operations with a parameter store.
pub type Result<T> = result::Result<T, Error>;
