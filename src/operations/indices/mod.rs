/*
 * Copyright 2016-2019 Ben Ashford
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

//! Implementation of ElasticSearch's
//! [Indices API](https://www.elastic.co/guide/en/elasticsearch/reference/current/indices.html)
//!
//! All operations are reached via `client.indices()`.

use crate::Client;

/// The options controlling how index names and wildcards are resolved
macro_rules! add_index_target_options {
    () => (
        add_option!(with_allow_no_indices, "allow_no_indices");
        add_option!(with_expand_wildcards, "expand_wildcards");
        add_option!(with_ignore_unavailable, "ignore_unavailable");
    )
}

pub mod alias;
pub mod analyze;
pub mod index;
pub mod maintenance;
pub mod mapping;
pub mod rollover;
pub mod settings;
pub mod stats;
pub mod template;

/// Entry point for the Indices API
#[derive(Debug, Clone, Copy)]
pub struct Indices<'a> {
    client: &'a Client,
}

impl Client {
    pub fn indices(&self) -> Indices<'_> {
        Indices { client: self }
    }
}
