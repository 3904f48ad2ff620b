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

use std::fmt;

use static_assertions::assert_obj_safe;

use crate::store::Params;

/// A file format for persisting parameters.
///
/// A `Format` converts the parameters of a [`ParamStore`] to the bytes of a file and back. The
/// store takes care of opening and writing the file, so a format never touches the file system.
///
/// Formats are shared between every store created from a [`FormatRegistry`], so they should be
/// stateless apart from their configuration.
///
/// [`ParamStore`]: crate::ParamStore
/// [`FormatRegistry`]: crate::format::FormatRegistry
pub trait Format: fmt::Debug + Send + Sync {
    /// Serialize the given `params` to the contents of a file.
    ///
    /// # Errors
    /// - `Error::Serialize`: One of the values could not be represented in this format.
    fn serialize(&self, params: &Params) -> crate::Result<Vec<u8>>;

    /// Deserialize parameters from the contents of a file.
    ///
    /// # Errors
    /// - `Error::Deserialize`: The `data` is not a valid set of parameters in this format.
    fn deserialize(&self, data: &[u8]) -> crate::Result<Params>;
}

assert_obj_safe!(Format);
