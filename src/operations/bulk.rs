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

//! Implementation of the Bulk API
//!
//! The body of a bulk request is newline-delimited JSON.  It can be supplied
//! directly, or built from a list of `Action`s with `actions_body`.

use reqwest::Method;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::{error::EsError, transport::Body, transport::Response, Client};

use super::common::Params;
use super::PathBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionType {
    Index,
    Create,
    Delete,
    Update,
}

impl ActionType {
    fn as_str(&self) -> &'static str {
        match *self {
            ActionType::Index => "index",
            ActionType::Create => "create",
            ActionType::Delete => "delete",
            ActionType::Update => "update",
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct ActionOptions {
    #[serde(rename = "_index", skip_serializing_if = "Option::is_none")]
    index: Option<String>,
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    routing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    if_seq_no: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    if_primary_term: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pipeline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    retry_on_conflict: Option<u64>,
}

/// The `{"<action>": {..options..}}` line preceding each document
struct ActionHeader<'a>(ActionType, &'a ActionOptions);

impl<'a> Serialize for ActionHeader<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.0.as_str(), self.1)?;
        map.end()
    }
}

/// One entry in a bulk request
#[derive(Debug)]
pub struct Action<X> {
    action: ActionType,
    options: ActionOptions,
    source: Option<X>,
}

macro_rules! add_action_option {
    ($n:ident, $f:ident, String) => (
        pub fn $n<T: Into<String>>(mut self, val: T) -> Self {
            self.options.$f = Some(val.into());
            self
        }
    );
    ($n:ident, $f:ident, $t:ty) => (
        pub fn $n(mut self, val: $t) -> Self {
            self.options.$f = Some(val);
            self
        }
    );
}

impl<X> Action<X>
where
    X: Serialize,
{
    /// An index action.
    ///
    /// Takes the document to be indexed, other parameters can be set as
    /// optional on the `Action` struct returned.
    pub fn index(document: X) -> Self {
        Action {
            action: ActionType::Index,
            options: Default::default(),
            source: Some(document),
        }
    }

    /// Create action
    pub fn create(document: X) -> Self {
        Action {
            action: ActionType::Create,
            options: Default::default(),
            source: Some(document),
        }
    }

    /// Update action, `body` holds the partial `doc` or a `script`
    pub fn update<A: Into<String>>(id: A, body: X) -> Self {
        Action {
            action: ActionType::Update,
            options: ActionOptions {
                id: Some(id.into()),
                ..Default::default()
            },
            source: Some(body),
        }
    }

    /// Add the serialized version of this action to the bulk buffer.
    fn add(&self, buf: &mut Vec<u8>) -> Result<(), EsError> {
        serde_json::to_writer(&mut *buf, &ActionHeader(self.action, &self.options))?;
        buf.push(b'\n');

        if let Some(ref source) = self.source {
            serde_json::to_writer(&mut *buf, source)?;
            buf.push(b'\n');
        }
        Ok(())
    }
}

impl<X> Action<X> {
    /// Delete a document based on ID.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_esapi::operations::bulk::Action;
    ///
    /// let delete_action:Action<()> = Action::delete("doc_id");
    /// let delete_with_index:Action<()> = Action::delete("doc_id").with_index("index_name");
    /// ```
    pub fn delete<A: Into<String>>(id: A) -> Self {
        Action {
            action: ActionType::Delete,
            options: ActionOptions {
                id: Some(id.into()),
                ..Default::default()
            },
            source: None,
        }
    }

    add_action_option!(with_index, index, String);
    add_action_option!(with_id, id, String);
    add_action_option!(with_routing, routing, String);
    add_action_option!(with_version, version, u64);
    add_action_option!(with_if_seq_no, if_seq_no, u64);
    add_action_option!(with_if_primary_term, if_primary_term, u64);
    add_action_option!(with_pipeline, pipeline, String);
    add_action_option!(with_retry_on_conflict, retry_on_conflict, u64);

    pub fn with_version_type(mut self, version_type: crate::units::VersionType) -> Self {
        self.options.version_type = Some(version_type.to_string());
        self
    }
}

/// The newline-delimited body for a list of actions
pub fn actions_body<X: Serialize>(actions: &[Action<X>]) -> Result<Body, EsError> {
    let mut buf = Vec::new();
    for action in actions {
        action.add(&mut buf)?;
    }
    Ok(Body::Bytes(buf))
}

#[derive(Debug)]
pub struct BulkOperation<'a, 'b> {
    client: &'a Client,
    index: Option<&'b str>,
    params: Params,
}

impl<'a, 'b> BulkOperation<'a, 'b> {
    pub fn new<B: Into<Body>>(client: &'a Client, body: B) -> Self {
        BulkOperation {
            client,
            index: None,
            params: Params::with_body(body),
        }
    }

    /// Default index for actions that do not name one
    pub fn with_index(&mut self, index: &'b str) -> &mut Self {
        self.index = Some(index);
        self
    }

    add_option!(with_pipeline, "pipeline");
    add_option!(with_refresh, "refresh");
    add_option!(with_require_alias, "require_alias");
    add_option!(with_routing, "routing");
    add_option!(with_source, "_source");
    add_list_option!(with_source_excludes, "_source_excludes");
    add_list_option!(with_source_includes, "_source_includes");
    add_option!(with_timeout, "timeout");
    add_option!(with_wait_for_active_shards, "wait_for_active_shards");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push_opt(self.index)
            .push("_bulk")
            .build()?;
        self.params.send(self.client, Method::POST, path)
    }
}

impl Client {
    /// Bulk
    ///
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/docs-bulk.html
    pub fn bulk<'a, 'b, B: Into<Body>>(&'a self, body: B) -> BulkOperation<'a, 'b> {
        BulkOperation::new(self, body)
    }
}

#[cfg(test)]
pub mod tests {
    use reqwest::Method;

    use serde::Serialize;
    use serde_json::json;

    use super::{actions_body, Action};
    use crate::tests::make_client;
    use crate::units::{Refresh, VersionType};

    #[derive(Debug, Serialize)]
    struct TestDocument {
        str_field: String,
        int_field: i64,
    }

    fn doc(s: &str, i: i64) -> TestDocument {
        TestDocument {
            str_field: s.to_owned(),
            int_field: i,
        }
    }

    fn body_string(actions: &[Action<TestDocument>]) -> String {
        let bytes = actions_body(actions).unwrap().into_bytes().unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_actions_body() {
        let actions = vec![
            Action::index(doc("A", 1)).with_id("1"),
            Action::create(doc("B", 2)).with_index("other"),
            Action::delete("3").with_version(4).with_version_type(VersionType::External),
        ];
        assert_eq!(
            concat!(
                "{\"index\":{\"_id\":\"1\"}}\n",
                "{\"str_field\":\"A\",\"int_field\":1}\n",
                "{\"create\":{\"_index\":\"other\"}}\n",
                "{\"str_field\":\"B\",\"int_field\":2}\n",
                "{\"delete\":{\"_id\":\"3\",\"version\":4,\"version_type\":\"external\"}}\n"
            ),
            body_string(&actions)
        );
    }

    #[test]
    fn test_update_action() {
        let actions = vec![Action::update("1", json!({"doc": {"a": 1}})).with_retry_on_conflict(2)];
        let bytes = actions_body(&actions).unwrap().into_bytes().unwrap();
        assert_eq!(
            "{\"update\":{\"_id\":\"1\",\"retry_on_conflict\":2}}\n{\"doc\":{\"a\":1}}\n",
            String::from_utf8(bytes).unwrap()
        );
    }

    #[test]
    fn test_bulk() {
        let (client, transport) = make_client();
        let actions = vec![Action::index(doc("A", 1))];
        client
            .bulk(actions_body(&actions).unwrap())
            .with_index("bulk_idx")
            .with_refresh(Refresh::WaitFor)
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!(Method::POST, req.method);
        assert_eq!("/bulk_idx/_bulk", req.path);
        assert_eq!("refresh=wait_for", req.query);
        assert_eq!(
            Some("{\"index\":{}}\n{\"str_field\":\"A\",\"int_field\":1}\n".to_owned()),
            req.body
        );
    }

    #[test]
    fn test_bulk_without_index() {
        let (client, transport) = make_client();
        client.bulk("").send().unwrap();
        assert_eq!("/_bulk", transport.last().path);
    }
}
