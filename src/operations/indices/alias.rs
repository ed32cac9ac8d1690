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

//! Index aliases

use reqwest::Method;

use crate::{error::EsError, transport::Body, transport::Response, Client};

use crate::operations::common::Params;
use crate::operations::PathBuilder;

use super::Indices;

#[derive(Debug)]
pub struct GetAliasOperation<'a, 'b> {
    client: &'a Client,
    indexes: &'b [&'b str],
    names: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> GetAliasOperation<'a, 'b> {
    pub fn new(client: &'a Client) -> Self {
        GetAliasOperation {
            client,
            indexes: &[],
            names: &[],
            params: Params::default(),
        }
    }

    pub fn with_indexes(&mut self, indexes: &'b [&'b str]) -> &mut Self {
        self.indexes = indexes;
        self
    }

    pub fn with_names(&mut self, names: &'b [&'b str]) -> &mut Self {
        self.names = names;
        self
    }

    add_index_target_options!();
    add_option!(with_local, "local");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push_multi(self.indexes)
            .push("_alias")
            .push_multi(self.names)
            .build()?;
        self.params.send(self.client, Method::GET, path)
    }
}

#[derive(Debug)]
pub struct PutAliasOperation<'a, 'b> {
    client: &'a Client,
    indexes: &'b [&'b str],
    name: &'b str,
    params: Params,
}

impl<'a, 'b> PutAliasOperation<'a, 'b> {
    pub fn new(client: &'a Client, indexes: &'b [&'b str], name: &'b str) -> Self {
        PutAliasOperation {
            client,
            indexes,
            name,
            params: Params::default(),
        }
    }

    // Filter and routing for the alias
    add_body!();

    add_option!(with_master_timeout, "master_timeout");
    add_option!(with_timeout, "timeout");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .param_multi("indexes", self.indexes)
            .push("_alias")
            .param("name", self.name)
            .build()?;
        self.params.send(self.client, Method::PUT, path)
    }
}

#[derive(Debug)]
pub struct DeleteAliasOperation<'a, 'b> {
    client: &'a Client,
    indexes: &'b [&'b str],
    names: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> DeleteAliasOperation<'a, 'b> {
    pub fn new(client: &'a Client, indexes: &'b [&'b str], names: &'b [&'b str]) -> Self {
        DeleteAliasOperation {
            client,
            indexes,
            names,
            params: Params::default(),
        }
    }

    add_option!(with_master_timeout, "master_timeout");
    add_option!(with_timeout, "timeout");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .param_multi("indexes", self.indexes)
            .push("_alias")
            .param_multi("names", self.names)
            .build()?;
        self.params.send(self.client, Method::DELETE, path)
    }
}

#[derive(Debug)]
pub struct AliasExistsOperation<'a, 'b> {
    client: &'a Client,
    indexes: &'b [&'b str],
    names: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> AliasExistsOperation<'a, 'b> {
    pub fn new(client: &'a Client, names: &'b [&'b str]) -> Self {
        AliasExistsOperation {
            client,
            indexes: &[],
            names,
            params: Params::default(),
        }
    }

    pub fn with_indexes(&mut self, indexes: &'b [&'b str]) -> &mut Self {
        self.indexes = indexes;
        self
    }

    add_index_target_options!();
    add_option!(with_local, "local");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push_multi(self.indexes)
            .push("_alias")
            .param_multi("names", self.names)
            .build()?;
        self.params.send(self.client, Method::HEAD, path)
    }
}

/// Atomically apply a list of alias `actions`
#[derive(Debug)]
pub struct UpdateAliasesOperation<'a> {
    client: &'a Client,
    params: Params,
}

impl<'a> UpdateAliasesOperation<'a> {
    pub fn new<B: Into<Body>>(client: &'a Client, body: B) -> Self {
        UpdateAliasesOperation {
            client,
            params: Params::with_body(body),
        }
    }

    add_option!(with_master_timeout, "master_timeout");
    add_option!(with_timeout, "timeout");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        self.params
            .send(self.client, Method::POST, "/_aliases".to_owned())
    }
}

impl<'a> Indices<'a> {
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/indices-aliases.html
    pub fn get_alias<'b>(&self) -> GetAliasOperation<'a, 'b> {
        GetAliasOperation::new(self.client)
    }

    pub fn put_alias<'b>(&self, indexes: &'b [&'b str], name: &'b str) -> PutAliasOperation<'a, 'b> {
        PutAliasOperation::new(self.client, indexes, name)
    }

    pub fn delete_alias<'b>(
        &self,
        indexes: &'b [&'b str],
        names: &'b [&'b str],
    ) -> DeleteAliasOperation<'a, 'b> {
        DeleteAliasOperation::new(self.client, indexes, names)
    }

    pub fn alias_exists<'b>(&self, names: &'b [&'b str]) -> AliasExistsOperation<'a, 'b> {
        AliasExistsOperation::new(self.client, names)
    }

    pub fn update_aliases<B: Into<Body>>(&self, body: B) -> UpdateAliasesOperation<'a> {
        UpdateAliasesOperation::new(self.client, body)
    }
}

#[cfg(test)]
pub mod tests {
    use reqwest::Method;

    use serde_json::json;

    use crate::tests::make_client;

    #[test]
    fn test_get_alias() {
        let (client, transport) = make_client();
        client.indices().get_alias().send().unwrap();
        assert_eq!("/_alias", transport.last().path);

        client
            .indices()
            .get_alias()
            .with_indexes(&["logs"])
            .with_names(&["2030"])
            .send()
            .unwrap();
        assert_eq!("/logs/_alias/2030", transport.last().path);
    }

    #[test]
    fn test_put_and_delete_alias() {
        let (client, transport) = make_client();
        client
            .indices()
            .put_alias(&["logs-1", "logs-2"], "logs")
            .with_body(json!({"filter": {"term": {"user": "kimchy"}}}))
            .send()
            .unwrap();
        let req = transport.last();
        assert_eq!(Method::PUT, req.method);
        assert_eq!("/logs-1,logs-2/_alias/logs", req.path);
        assert!(req.body.is_some());

        client
            .indices()
            .delete_alias(&["logs-1"], &["logs"])
            .send()
            .unwrap();
        assert_eq!(Method::DELETE, transport.last().method);
        assert_eq!("/logs-1/_alias/logs", transport.last().path);
    }

    #[test]
    fn test_alias_exists() {
        let (client, transport) = make_client();
        client.indices().alias_exists(&["logs"]).send().unwrap();

        let req = transport.last();
        assert_eq!(Method::HEAD, req.method);
        assert_eq!("/_alias/logs", req.path);
    }

    #[test]
    fn test_update_aliases() {
        let (client, transport) = make_client();
        client
            .indices()
            .update_aliases(json!({
                "actions": [{"add": {"index": "logs-1", "alias": "logs"}}]
            }))
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!(Method::POST, req.method);
        assert_eq!("/_aliases", req.path);
        assert_eq!("", req.query);
    }
}
