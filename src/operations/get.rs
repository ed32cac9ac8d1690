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

//! Implementation of the Get API, and its relatives that check for existence,
//! fetch only the source, or fetch many documents at once.

use reqwest::Method;

use crate::{error::EsError, transport::Body, transport::Response, Client};

use super::common::Params;
use super::PathBuilder;

/// Values for the `preference` query parameter
#[derive(Debug, Clone, Copy)]
pub enum Preference {
    Primary,
    Local,
}

impl From<Preference> for super::common::OptionVal {
    fn from(from: Preference) -> super::common::OptionVal {
        super::common::OptionVal(
            match from {
                Preference::Primary => "_primary",
                Preference::Local => "_local",
            }
            .to_owned(),
        )
    }
}

/// The options shared by the single-document read operations
macro_rules! add_get_options {
    () => (
        add_option!(with_preference, "preference");
        add_option!(with_realtime, "realtime");
        add_option!(with_refresh, "refresh");
        add_option!(with_routing, "routing");
        add_option!(with_source, "_source");
        add_list_option!(with_source_excludes, "_source_excludes");
        add_list_option!(with_source_includes, "_source_includes");
        add_option!(with_version, "version");
        add_option!(with_version_type, "version_type");
    )
}

/// An ES GET operation, to get a document by ID
#[derive(Debug)]
pub struct GetOperation<'a, 'b> {
    /// The HTTP connection
    client: &'a Client,

    /// The index to load the document.
    index: &'b str,

    /// The ID of the document.
    id: &'b str,

    params: Params,
}

impl<'a, 'b> GetOperation<'a, 'b> {
    pub fn new(client: &'a Client, index: &'b str, id: &'b str) -> Self {
        GetOperation {
            client,
            index,
            id,
            params: Params::default(),
        }
    }

    add_get_options!();
    add_list_option!(with_stored_fields, "stored_fields");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .param("index", self.index)
            .push("_doc")
            .param("id", self.id)
            .build()?;
        self.params.send(self.client, Method::GET, path)
    }
}

/// Check whether a document exists, 200 if it does, 404 if not
#[derive(Debug)]
pub struct ExistsOperation<'a, 'b> {
    client: &'a Client,
    index: &'b str,
    id: &'b str,
    params: Params,
}

impl<'a, 'b> ExistsOperation<'a, 'b> {
    pub fn new(client: &'a Client, index: &'b str, id: &'b str) -> Self {
        ExistsOperation {
            client,
            index,
            id,
            params: Params::default(),
        }
    }

    add_get_options!();
    add_list_option!(with_stored_fields, "stored_fields");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .param("index", self.index)
            .push("_doc")
            .param("id", self.id)
            .build()?;
        self.params.send(self.client, Method::HEAD, path)
    }
}

/// Get only the `_source` of a document
#[derive(Debug)]
pub struct GetSourceOperation<'a, 'b> {
    client: &'a Client,
    index: &'b str,
    id: &'b str,
    params: Params,
}

impl<'a, 'b> GetSourceOperation<'a, 'b> {
    pub fn new(client: &'a Client, index: &'b str, id: &'b str) -> Self {
        GetSourceOperation {
            client,
            index,
            id,
            params: Params::default(),
        }
    }

    add_get_options!();

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .param("index", self.index)
            .push("_source")
            .param("id", self.id)
            .build()?;
        self.params.send(self.client, Method::GET, path)
    }
}

#[derive(Debug)]
pub struct ExistsSourceOperation<'a, 'b> {
    client: &'a Client,
    index: &'b str,
    id: &'b str,
    params: Params,
}

impl<'a, 'b> ExistsSourceOperation<'a, 'b> {
    pub fn new(client: &'a Client, index: &'b str, id: &'b str) -> Self {
        ExistsSourceOperation {
            client,
            index,
            id,
            params: Params::default(),
        }
    }

    add_get_options!();

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .param("index", self.index)
            .push("_source")
            .param("id", self.id)
            .build()?;
        self.params.send(self.client, Method::HEAD, path)
    }
}

/// Multi-get, the documents to fetch are described by the body
#[derive(Debug)]
pub struct MgetOperation<'a, 'b> {
    client: &'a Client,
    index: Option<&'b str>,
    params: Params,
}

impl<'a, 'b> MgetOperation<'a, 'b> {
    pub fn new<B: Into<Body>>(client: &'a Client, body: B) -> Self {
        MgetOperation {
            client,
            index: None,
            params: Params::with_body(body),
        }
    }

    /// The default index for documents that do not name one
    pub fn with_index(&mut self, index: &'b str) -> &mut Self {
        self.index = Some(index);
        self
    }

    add_option!(with_preference, "preference");
    add_option!(with_realtime, "realtime");
    add_option!(with_refresh, "refresh");
    add_option!(with_routing, "routing");
    add_option!(with_source, "_source");
    add_list_option!(with_source_excludes, "_source_excludes");
    add_list_option!(with_source_includes, "_source_includes");
    add_list_option!(with_stored_fields, "stored_fields");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push_opt(self.index)
            .push("_mget")
            .build()?;
        self.params.send(self.client, Method::POST, path)
    }
}

impl Client {
    /// Implementation of the ES GET API
    ///
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/docs-get.html
    pub fn get<'a, 'b>(&'a self, index: &'b str, id: &'b str) -> GetOperation<'a, 'b> {
        GetOperation::new(self, index, id)
    }

    pub fn exists<'a, 'b>(&'a self, index: &'b str, id: &'b str) -> ExistsOperation<'a, 'b> {
        ExistsOperation::new(self, index, id)
    }

    pub fn get_source<'a, 'b>(&'a self, index: &'b str, id: &'b str) -> GetSourceOperation<'a, 'b> {
        GetSourceOperation::new(self, index, id)
    }

    pub fn exists_source<'a, 'b>(
        &'a self,
        index: &'b str,
        id: &'b str,
    ) -> ExistsSourceOperation<'a, 'b> {
        ExistsSourceOperation::new(self, index, id)
    }

    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/docs-multi-get.html
    pub fn mget<'a, 'b, B: Into<Body>>(&'a self, body: B) -> MgetOperation<'a, 'b> {
        MgetOperation::new(self, body)
    }
}

#[cfg(test)]
pub mod tests {
    use reqwest::header::CONTENT_TYPE;
    use reqwest::Method;

    use serde_json::json;

    use super::Preference;
    use crate::tests::make_client;

    #[test]
    fn test_get() {
        let (client, transport) = make_client();
        client
            .get("test_get", "TEST_GETTING")
            .with_preference(Preference::Local)
            .with_realtime(false)
            .with_source_includes(&["str_field", "int_field"])
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!(Method::GET, req.method);
        assert_eq!("/test_get/_doc/TEST_GETTING", req.path);
        assert_eq!(
            "_source_includes=str_field%2Cint_field&preference=_local&realtime=false",
            req.query
        );
        assert!(req.body.is_none());
        assert!(req.headers.get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_get_without_options() {
        let (client, transport) = make_client();
        client.get("idx", "1").send().unwrap();
        assert_eq!("", transport.last().query);
    }

    #[test]
    fn test_exists() {
        let (client, transport) = make_client();
        client.exists("idx", "1").with_routing("user1").send().unwrap();

        let req = transport.last();
        assert_eq!(Method::HEAD, req.method);
        assert_eq!("/idx/_doc/1", req.path);
        assert_eq!("routing=user1", req.query);
    }

    #[test]
    fn test_source() {
        let (client, transport) = make_client();
        client.get_source("idx", "1").send().unwrap();
        assert_eq!("/idx/_source/1", transport.last().path);
        assert_eq!(Method::GET, transport.last().method);

        client.exists_source("idx", "1").send().unwrap();
        assert_eq!("/idx/_source/1", transport.last().path);
        assert_eq!(Method::HEAD, transport.last().method);
    }

    #[test]
    fn test_mget() {
        let (client, transport) = make_client();
        client
            .mget(json!({"ids": ["1", "2"]}))
            .with_index("idx")
            .with_stored_fields(&["title"])
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!(Method::POST, req.method);
        assert_eq!("/idx/_mget", req.path);
        assert_eq!("stored_fields=title", req.query);
        assert_eq!(Some("{\"ids\":[\"1\",\"2\"]}".to_owned()), req.body);

        client.mget(json!({"docs": []})).send().unwrap();
        assert_eq!("/_mget", transport.last().path);
    }

    #[test]
    fn test_get_escapes_id() {
        let (client, transport) = make_client();
        client.get("idx", "a/b").send().unwrap();
        assert_eq!("/idx/_doc/a%2Fb", transport.last().path);

        client.get_source("idx", "50%off").send().unwrap();
        assert_eq!("/idx/_source/50%25off", transport.last().path);
    }
}
