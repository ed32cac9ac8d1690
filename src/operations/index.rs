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

//! Implementation of ElasticSearch Index operation

use reqwest::Method;

use crate::{error::EsError, transport::Body, transport::Response, Client};

use super::common::Params;
use super::PathBuilder;

/// An indexing operation
#[derive(Debug)]
pub struct IndexOperation<'a, 'b> {
    /// The HTTP client that this operation will use
    client: &'a Client,

    /// The index into which the document will be added
    index: &'b str,

    /// Optional the ID of the document.
    id: Option<&'b str>,

    params: Params,
}

impl<'a, 'b> IndexOperation<'a, 'b> {
    pub fn new<B: Into<Body>>(client: &'a Client, index: &'b str, doc: B) -> Self {
        IndexOperation {
            client,
            index,
            id: None,
            params: Params::with_body(doc),
        }
    }

    pub fn with_id(&mut self, id: &'b str) -> &mut Self {
        self.id = Some(id);
        self
    }

    add_option!(with_if_primary_term, "if_primary_term");
    add_option!(with_if_seq_no, "if_seq_no");
    add_option!(with_op_type, "op_type");
    add_option!(with_pipeline, "pipeline");
    add_option!(with_refresh, "refresh");
    add_option!(with_require_alias, "require_alias");
    add_option!(with_routing, "routing");
    add_option!(with_timeout, "timeout");
    add_option!(with_version, "version");
    add_option!(with_version_type, "version_type");
    add_option!(with_wait_for_active_shards, "wait_for_active_shards");

    add_common_options!();

    /// With an ID the document is `PUT` to that ID, otherwise it is `POST`ed
    /// and ElasticSearch generates one.
    pub fn send(&mut self) -> Result<Response, EsError> {
        let method = match self.id {
            Some(_) => Method::PUT,
            None => Method::POST,
        };
        let path = PathBuilder::new()
            .param("index", self.index)
            .push("_doc")
            .push_opt(self.id)
            .build()?;
        self.params.send(self.client, method, path)
    }
}

/// Index a document only if no document with that ID exists
#[derive(Debug)]
pub struct CreateOperation<'a, 'b> {
    client: &'a Client,
    index: &'b str,
    id: &'b str,
    params: Params,
}

impl<'a, 'b> CreateOperation<'a, 'b> {
    pub fn new<B: Into<Body>>(client: &'a Client, index: &'b str, id: &'b str, doc: B) -> Self {
        CreateOperation {
            client,
            index,
            id,
            params: Params::with_body(doc),
        }
    }

    add_option!(with_pipeline, "pipeline");
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
            .push("_create")
            .param("id", self.id)
            .build()?;
        self.params.send(self.client, Method::PUT, path)
    }
}

impl Client {
    /// An index operation to index a document in the specified index.
    ///
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/docs-index_.html
    pub fn index<'a, 'b, B: Into<Body>>(&'a self, index: &'b str, doc: B) -> IndexOperation<'a, 'b> {
        IndexOperation::new(self, index, doc)
    }

    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/docs-index_.html
    pub fn create<'a, 'b, B: Into<Body>>(
        &'a self,
        index: &'b str,
        id: &'b str,
        doc: B,
    ) -> CreateOperation<'a, 'b> {
        CreateOperation::new(self, index, id, doc)
    }
}

#[cfg(test)]
pub mod tests {
    use reqwest::header::CONTENT_TYPE;
    use reqwest::Method;

    use serde_json::json;

    use crate::tests::make_client;
    use crate::units::{OpType, Refresh};

    #[test]
    fn test_index_without_id() {
        let (client, transport) = make_client();
        client
            .index("test_index", json!({"str_field": "I am a test", "int_field": 1}))
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!(Method::POST, req.method);
        assert_eq!("/test_index/_doc", req.path);
        assert_eq!("", req.query);
        assert_eq!("application/json", req.headers[CONTENT_TYPE]);
        let body: serde_json::Value = serde_json::from_str(&req.body.unwrap()).unwrap();
        assert_eq!(json!({"str_field": "I am a test", "int_field": 1}), body);
    }

    #[test]
    fn test_index_with_id() {
        let (client, transport) = make_client();
        client
            .index("test_index", "{\"int_field\":2}")
            .with_id("TEST_INDEXING_2")
            .with_op_type(OpType::Create)
            .with_refresh(Refresh::WaitFor)
            .with_version(3)
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!(Method::PUT, req.method);
        assert_eq!("/test_index/_doc/TEST_INDEXING_2", req.path);
        assert_eq!("op_type=create&refresh=wait_for&version=3", req.query);
        assert_eq!(Some("{\"int_field\":2}".to_owned()), req.body);
    }

    #[test]
    fn test_create() {
        let (client, transport) = make_client();
        client
            .create("test_index", "1", json!({}))
            .with_wait_for_active_shards("all")
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!(Method::PUT, req.method);
        assert_eq!("/test_index/_create/1", req.path);
        assert_eq!("wait_for_active_shards=all", req.query);
    }
}
