/*
 * Copyright 2015-2019 Ben Ashford
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

//! Implementations of specific ElasticSearch operations
//!
//! The various methods on [`Client`](../struct.Client.html) are entry points to
//! ElasticSearch's set of operations.  This module, and it's child modules are
//! the implementation of those operations.
//!
//! Operations outside the core document and search APIs are grouped by
//! namespace, e.g. `client.indices().refresh()` or `client.cat().health()`.

// Specific operations
#[macro_use]
pub mod common;

pub mod bulk;
pub mod cat;
pub mod cluster;
pub mod delete;
pub mod get;
pub mod index;
pub mod indices;
pub mod info;
pub mod ingest;
pub mod nodes;
pub mod reindex;
pub mod search;
pub mod snapshot;
pub mod tasks;
pub mod termvectors;
pub mod update;

// Common utility functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::error::EsError;

/// Characters escaped in a path parameter.  Commas, `*` and `:` stay literal so
/// lists, wildcards and task IDs pass through.
const PATH_PARAM_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

fn encode(param: &str) -> String {
    utf8_percent_encode(param, PATH_PARAM_ENCODE_SET).to_string()
}

/// A repeating convention in the ElasticSearch REST API is parameters that can
/// take multiple values
fn format_multi(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| encode(part))
        .collect::<Vec<_>>()
        .join(",")
}

/// Builds a request path one segment at a time.
///
/// Literal segments (`_doc`, `_search`) are pushed as they are.  Parameters are
/// percent-encoded; optional ones drop out when empty, required ones make
/// `build` fail.
#[derive(Debug, Default)]
struct PathBuilder {
    path: String,
    missing: Option<&'static str>,
}

impl PathBuilder {
    fn new() -> PathBuilder {
        PathBuilder::default()
    }

    fn append(&mut self, segment: &str) -> &mut PathBuilder {
        if !segment.is_empty() {
            self.path.push('/');
            self.path.push_str(segment);
        }
        self
    }

    fn push(&mut self, literal: &'static str) -> &mut PathBuilder {
        self.append(literal)
    }

    /// A required parameter
    fn param(&mut self, name: &'static str, value: &str) -> &mut PathBuilder {
        if value.is_empty() {
            self.missing.get_or_insert(name);
            return self;
        }
        self.append(&encode(value))
    }

    /// A required list parameter, at least one non-empty value
    fn param_multi(&mut self, name: &'static str, values: &[&str]) -> &mut PathBuilder {
        if values.iter().all(|value| value.is_empty()) {
            self.missing.get_or_insert(name);
            return self;
        }
        self.append(&format_multi(values))
    }

    fn push_multi(&mut self, values: &[&str]) -> &mut PathBuilder {
        self.append(&format_multi(values))
    }

    fn push_opt(&mut self, value: Option<&str>) -> &mut PathBuilder {
        match value {
            Some(value) => self.append(&encode(value)),
            None => self,
        }
    }

    fn build(&self) -> Result<String, EsError> {
        if let Some(name) = self.missing {
            return Err(EsError::EsError(format!("{} must not be empty", name)));
        }
        if self.path.is_empty() {
            Ok("/".to_owned())
        } else {
            Ok(self.path.clone())
        }
    }
}
