/*
 * Copyright 2019 Ben Ashford
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

//! The Explain and Field Capabilities APIs

use reqwest::Method;

use crate::{error::EsError, transport::Response, Client};

use crate::operations::common::Params;
use crate::operations::PathBuilder;

/// Explain why a document does, or does not, match a query
#[derive(Debug)]
pub struct ExplainOperation<'a, 'b> {
    client: &'a Client,
    index: &'b str,
    id: &'b str,
    params: Params,
}

impl<'a, 'b> ExplainOperation<'a, 'b> {
    pub fn new(client: &'a Client, index: &'b str, id: &'b str) -> Self {
        ExplainOperation {
            client,
            index,
            id,
            params: Params::default(),
        }
    }

    add_body!();

    add_option!(with_query, "q");
    add_option!(with_analyze_wildcard, "analyze_wildcard");
    add_option!(with_analyzer, "analyzer");
    add_option!(with_default_operator, "default_operator");
    add_option!(with_df, "df");
    add_option!(with_lenient, "lenient");
    add_option!(with_preference, "preference");
    add_option!(with_routing, "routing");
    add_option!(with_source, "_source");
    add_list_option!(with_source_excludes, "_source_excludes");
    add_list_option!(with_source_includes, "_source_includes");
    add_list_option!(with_stored_fields, "stored_fields");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .param("index", self.index)
            .push("_explain")
            .param("id", self.id)
            .build()?;
        self.params.send(self.client, Method::POST, path)
    }
}

/// The capabilities of fields across indexes
#[derive(Debug)]
pub struct FieldCapsOperation<'a, 'b> {
    client: &'a Client,
    indexes: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> FieldCapsOperation<'a, 'b> {
    pub fn new(client: &'a Client) -> Self {
        FieldCapsOperation {
            client,
            indexes: &[],
            params: Params::default(),
        }
    }

    pub fn with_indexes(&mut self, indexes: &'b [&'b str]) -> &mut Self {
        self.indexes = indexes;
        self
    }

    // An `index_filter` body
    add_body!();

    add_list_option!(with_fields, "fields");
    add_option!(with_allow_no_indices, "allow_no_indices");
    add_option!(with_expand_wildcards, "expand_wildcards");
    add_option!(with_ignore_unavailable, "ignore_unavailable");
    add_option!(with_include_unmapped, "include_unmapped");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push_multi(self.indexes)
            .push("_field_caps")
            .build()?;
        self.params.send(self.client, Method::POST, path)
    }
}

impl Client {
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/search-explain.html
    pub fn explain<'a, 'b>(&'a self, index: &'b str, id: &'b str) -> ExplainOperation<'a, 'b> {
        ExplainOperation::new(self, index, id)
    }

    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/search-field-caps.html
    pub fn field_caps<'a, 'b>(&'a self) -> FieldCapsOperation<'a, 'b> {
        FieldCapsOperation::new(self)
    }
}
