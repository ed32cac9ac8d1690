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

//! Partial updates of a single document, and Update-By-Query

use reqwest::Method;

use crate::{error::EsError, transport::Body, transport::Response, Client};

use super::common::Params;
use super::PathBuilder;

#[derive(Debug)]
pub struct UpdateOperation<'a, 'b> {
    client: &'a Client,
    index: &'b str,
    id: &'b str,
    params: Params,
}

impl<'a, 'b> UpdateOperation<'a, 'b> {
    /// The body carries a partial `doc`, a `script`, or an `upsert`
    pub fn new<B: Into<Body>>(client: &'a Client, index: &'b str, id: &'b str, body: B) -> Self {
        UpdateOperation {
            client,
            index,
            id,
            params: Params::with_body(body),
        }
    }

    add_option!(with_if_primary_term, "if_primary_term");
    add_option!(with_if_seq_no, "if_seq_no");
    add_option!(with_lang, "lang");
    add_option!(with_refresh, "refresh");
    add_option!(with_require_alias, "require_alias");
    add_option!(with_retry_on_conflict, "retry_on_conflict");
    add_option!(with_routing, "routing");
    add_option!(with_source, "_source");
    add_list_option!(with_source_excludes, "_source_excludes");
    add_list_option!(with_source_includes, "_source_includes");
    add_option!(with_timeout, "timeout");
    add_option!(with_wait_for_active_shards, "wait_for_active_shards");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .param("index", self.index)
            .push("_update")
            .param("id", self.id)
            .build()?;
        self.params.send(self.client, Method::POST, path)
    }
}

/// Update every document matching a query, or simply re-index them in place
/// when no body is given
#[derive(Debug)]
pub struct UpdateByQueryOperation<'a, 'b> {
    client: &'a Client,
    indexes: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> UpdateByQueryOperation<'a, 'b> {
    pub fn new(client: &'a Client, indexes: &'b [&'b str]) -> Self {
        UpdateByQueryOperation {
            client,
            indexes,
            params: Params::default(),
        }
    }

    add_body!();

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
    add_option!(with_pipeline, "pipeline");
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
    add_option!(with_version, "version");
    add_option!(with_wait_for_active_shards, "wait_for_active_shards");
    add_option!(with_wait_for_completion, "wait_for_completion");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .param_multi("indexes", self.indexes)
            .push("_update_by_query")
            .build()?;
        self.params.send(self.client, Method::POST, path)
    }
}

impl Client {
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/docs-update.html
    pub fn update<'a, 'b, B: Into<Body>>(
        &'a self,
        index: &'b str,
        id: &'b str,
        body: B,
    ) -> UpdateOperation<'a, 'b> {
        UpdateOperation::new(self, index, id, body)
    }

    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/docs-update-by-query.html
    pub fn update_by_query<'a, 'b>(&'a self, indexes: &'b [&'b str]) -> UpdateByQueryOperation<'a, 'b> {
        UpdateByQueryOperation::new(self, indexes)
    }
}

#[cfg(test)]
pub mod tests {
    use reqwest::header::CONTENT_TYPE;
    use reqwest::Method;

    use maplit::btreemap;

    use serde_json::json;

    use crate::tests::make_client;
    use crate::transport::Body;
    use crate::units::Duration;

    #[test]
    fn test_update() {
        let (client, transport) = make_client();
        client
            .update("idx", "1", json!({"doc": {"int_field": 5}}))
            .with_retry_on_conflict(3)
            .with_timeout(Duration::seconds(30))
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!(Method::POST, req.method);
        assert_eq!("/idx/_update/1", req.path);
        assert_eq!("retry_on_conflict=3&timeout=30s", req.query);
        assert_eq!(
            Some("{\"doc\":{\"int_field\":5}}".to_owned()),
            req.body
        );
    }

    #[test]
    fn test_update_with_serialized_doc() {
        let (client, transport) = make_client();
        let doc = btreemap! {
            "doc" => btreemap! { "likes" => 10, "views" => 250 },
        };
        client
            .update("idx", "2", Body::json(&doc).unwrap())
            .send()
            .unwrap();

        assert_eq!(
            Some("{\"doc\":{\"likes\":10,\"views\":250}}".to_owned()),
            transport.last().body
        );
    }

    #[test]
    fn test_update_by_query_without_body() {
        let (client, transport) = make_client();
        client
            .update_by_query(&["idx"])
            .with_query("user:kimchy")
            .with_refresh(true)
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!("/idx/_update_by_query", req.path);
        assert_eq!("q=user%3Akimchy&refresh=true", req.query);
        assert!(req.body.is_none());
        assert!(req.headers.get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_update_by_query_with_body() {
        let (client, transport) = make_client();
        client
            .update_by_query(&["a", "b"])
            .with_body(json!({"script": {"source": "ctx._source.count++"}}))
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!("/a,b/_update_by_query", req.path);
        assert_eq!("application/json", req.headers[CONTENT_TYPE]);
    }
}
