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

//! Implementations of the Search API and its relatives
//!
//! A search can be made by URI (`with_query` sets the `q` parameter), by
//! query DSL (`with_body`), or both.

pub mod count;
pub mod explain;
pub mod scroll;

use reqwest::Method;

use crate::{error::EsError, transport::Body, transport::Response, Client};

use super::common::Params;
use super::PathBuilder;

/// Representing a search operation
#[derive(Debug)]
pub struct SearchOperation<'a, 'b> {
    /// The HTTP client
    client: &'a Client,

    /// The indexes to which this query applies
    indexes: &'b [&'b str],

    params: Params,
}

impl<'a, 'b> SearchOperation<'a, 'b> {
    pub fn new(client: &'a Client) -> SearchOperation<'a, 'b> {
        SearchOperation {
            client,
            indexes: &[],
            params: Params::default(),
        }
    }

    pub fn with_indexes(&mut self, indexes: &'b [&'b str]) -> &mut Self {
        self.indexes = indexes;
        self
    }

    add_body!();

    // A query in the Lucene query string syntax
    add_option!(with_query, "q");

    add_option!(with_allow_no_indices, "allow_no_indices");
    add_option!(with_allow_partial_search_results, "allow_partial_search_results");
    add_option!(with_analyze_wildcard, "analyze_wildcard");
    add_option!(with_analyzer, "analyzer");
    add_option!(with_batched_reduce_size, "batched_reduce_size");
    add_option!(with_ccs_minimize_roundtrips, "ccs_minimize_roundtrips");
    add_option!(with_default_operator, "default_operator");
    add_option!(with_df, "df");
    add_list_option!(with_docvalue_fields, "docvalue_fields");
    add_option!(with_expand_wildcards, "expand_wildcards");
    add_option!(with_explain, "explain");
    add_option!(with_from, "from");
    add_option!(with_ignore_throttled, "ignore_throttled");
    add_option!(with_ignore_unavailable, "ignore_unavailable");
    add_option!(with_lenient, "lenient");
    add_option!(with_max_concurrent_shard_requests, "max_concurrent_shard_requests");
    add_option!(with_pre_filter_shard_size, "pre_filter_shard_size");
    add_option!(with_preference, "preference");
    add_option!(with_request_cache, "request_cache");
    add_option!(with_rest_total_hits_as_int, "rest_total_hits_as_int");
    add_list_option!(with_routing, "routing");
    add_option!(with_scroll, "scroll");
    add_option!(with_search_type, "search_type");
    add_option!(with_seq_no_primary_term, "seq_no_primary_term");
    add_option!(with_size, "size");
    add_list_option!(with_sort, "sort");
    add_option!(with_source, "_source");
    add_list_option!(with_source_excludes, "_source_excludes");
    add_list_option!(with_source_includes, "_source_includes");
    add_list_option!(with_stats, "stats");
    add_list_option!(with_stored_fields, "stored_fields");
    add_option!(with_suggest_field, "suggest_field");
    add_option!(with_terminate_after, "terminate_after");
    add_option!(with_timeout, "timeout");
    add_option!(with_track_scores, "track_scores");
    add_option!(with_track_total_hits, "track_total_hits");
    add_option!(with_typed_keys, "typed_keys");
    add_option!(with_version, "version");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push_multi(self.indexes)
            .push("_search")
            .build()?;
        self.params.send(self.client, Method::POST, path)
    }
}

/// Several searches in one request, the body is newline-delimited
/// header/body pairs
#[derive(Debug)]
pub struct MsearchOperation<'a, 'b> {
    client: &'a Client,
    indexes: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> MsearchOperation<'a, 'b> {
    pub fn new<B: Into<Body>>(client: &'a Client, body: B) -> Self {
        MsearchOperation {
            client,
            indexes: &[],
            params: Params::with_body(body),
        }
    }

    /// Default indexes for searches that do not name any
    pub fn with_indexes(&mut self, indexes: &'b [&'b str]) -> &mut Self {
        self.indexes = indexes;
        self
    }

    add_option!(with_ccs_minimize_roundtrips, "ccs_minimize_roundtrips");
    add_option!(with_max_concurrent_searches, "max_concurrent_searches");
    add_option!(with_max_concurrent_shard_requests, "max_concurrent_shard_requests");
    add_option!(with_pre_filter_shard_size, "pre_filter_shard_size");
    add_option!(with_rest_total_hits_as_int, "rest_total_hits_as_int");
    add_option!(with_search_type, "search_type");
    add_option!(with_typed_keys, "typed_keys");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push_multi(self.indexes)
            .push("_msearch")
            .build()?;
        self.params.send(self.client, Method::POST, path)
    }
}

impl Client {
    /// Search via a query string, a query DSL body, or both
    ///
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/search-search.html
    pub fn search<'a, 'b>(&'a self) -> SearchOperation<'a, 'b> {
        SearchOperation::new(self)
    }

    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/search-multi-search.html
    pub fn msearch<'a, 'b, B: Into<Body>>(&'a self, body: B) -> MsearchOperation<'a, 'b> {
        MsearchOperation::new(self, body)
    }
}
