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

//! Implementation of delete operations, both Delete-By-Query and Delete-By-Id

use reqwest::Method;

use crate::{error::EsError, transport::Body, transport::Response, Client};

use super::common::Params;
use super::PathBuilder;

#[derive(Debug)]
pub struct DeleteOperation<'a, 'b> {
    /// The HTTP client
    client: &'a Client,

    /// The index
    index: &'b str,

    /// The ID
    id: &'b str,

    params: Params,
}

impl<'a, 'b> DeleteOperation<'a, 'b> {
    pub fn new(client: &'a Client, index: &'b str, id: &'b str) -> DeleteOperation<'a, 'b> {
        DeleteOperation {
            client,
            index,
            id,
            params: Params::default(),
        }
    }

    add_option!(with_if_primary_term, "if_primary_term");
    add_option!(with_if_seq_no, "if_seq_no");
    add_option!(with_refresh, "refresh");
    add_option!(with_routing, "routing");
    add_option!(with_timeout, "timeout");
    add_option!(with_version, "version");
    add_option!(with_version_type, "version_type");
    add_option!(with_wait_for_active_shards, "wait_for_active_shards");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .param("index", self.index)
            .push("_doc")
            .param("id", self.id)
            .build()?;
        self.params.send(self.client, Method::DELETE, path)
    }
}

/// Delete every document matching the query in the body
#[derive(Debug)]
pub struct DeleteByQueryOperation<'a, 'b> {
    /// The HTTP client
    client: &'a Client,

    /// The indexes to which this query applies
    indexes: &'b [&'b str],

    params: Params,
}

impl<'a, 'b> DeleteByQueryOperation<'a, 'b> {
    pub fn new<B: Into<Body>>(client: &'a Client, indexes: &'b [&'b str], body: B) -> Self {
        DeleteByQueryOperation {
            client,
            indexes,
            params: Params::with_body(body),
        }
    }

    add_option!(with_allow_no_indices, "allow_no_indices");
    add_option!(with_analyze_wildcard, "analyze_wildcard");
    add_option!(with_analyzer, "analyzer");
    add_option!(with_conflicts, "conflicts");
    add_option!(with_default_operator, "default_operator");
    add_option!(with_df, "df");
    add_option!(with_expand_wildcards, "expand_wildcards");
    add_option!(with_from, "from");
    add_option!(with_ignore_unavailable, "ignore_unavailable");
    add_option!(with_lenient, "lenient");
    add_option!(with_max_docs, "max_docs");
    add_option!(with_preference, "preference");
    add_option!(with_query, "q");
    add_option!(with_refresh, "refresh");
    add_option!(with_request_cache, "request_cache");
    add_option!(with_requests_per_second, "requests_per_second");
    add_list_option!(with_routing, "routing");
    add_option!(with_scroll, "scroll");
    add_option!(with_scroll_size, "scroll_size");
    add_option!(with_slices, "slices");
    add_list_option!(with_sort, "sort");
    add_option!(with_terminate_after, "terminate_after");
    add_option!(with_timeout, "timeout");
    add_option!(with_wait_for_active_shards, "wait_for_active_shards");
    add_option!(with_wait_for_completion, "wait_for_completion");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .param_multi("indexes", self.indexes)
            .push("_delete_by_query")
            .build()?;
        self.params.send(self.client, Method::POST, path)
    }
}

impl Client {
    /// Delete by ID
    ///
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/docs-delete.html
    pub fn delete<'a, 'b>(&'a self, index: &'b str, id: &'b str) -> DeleteOperation<'a, 'b> {
        DeleteOperation::new(self, index, id)
    }

    /// Delete by query
    ///
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/docs-delete-by-query.html
    pub fn delete_by_query<'a, 'b, B: Into<Body>>(
        &'a self,
        indexes: &'b [&'b str],
        body: B,
    ) -> DeleteByQueryOperation<'a, 'b> {
        DeleteByQueryOperation::new(self, indexes, body)
    }
}
