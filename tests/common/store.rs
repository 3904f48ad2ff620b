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


use std::path::PathBuf;

use rstest::*;
use tempfile::{tempdir, TempDir};

use param_store::{json, Params};

/// A temporary directory and a path inside it with no extension.
pub struct TempPath {
    // Dropping this removes the directory.
    pub dir: TempDir,
    pub base: PathBuf,
}

impl TempPath {
    /// Return a path in the temporary directory with the given `extension`.
    pub fn with_extension(&self, extension: &str) -> PathBuf {
        self.base.with_extension(extension)
    }
}

#[fixture]
pub fn temp_path() -> TempPath {
    let dir = tempdir().unwrap();
    let base = dir.path().join("params");
    TempPath { dir, base }
}

/// Parameters with a value of every type.
pub fn sample_params() -> Params {
    let mut params = Params::new();
    params.insert("null".into(), json!(null));
    params.insert("bool".into(), json!(true));
    params.insert("unsigned".into(), json!(42));
    params.insert("signed".into(), json!(-7));
    params.insert("float".into(), json!(2.5));
    params.insert("string".into(), json!("two"));
    params.insert("array".into(), json!([1, "b", [null]]));
    params.insert(
        "object".into(),
        json!({ "host": "localhost", "ports": [80, 443], "nested": { "enabled": false } }),
    );
    params
}
