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

//! Index settings

use reqwest::Method;

use crate::{error::EsError, transport::Body, transport::Response, Client};

use crate::operations::common::Params;
use crate::operations::PathBuilder;

use super::Indices;

#[derive(Debug)]
pub struct GetSettingsOperation<'a, 'b> {
    client: &'a Client,
    indexes: &'b [&'b str],
    names: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> GetSettingsOperation<'a, 'b> {
    pub fn new(client: &'a Client) -> Self {
        GetSettingsOperation {
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

    /// Restrict to the named settings, wildcards allowed
    pub fn with_names(&mut self, names: &'b [&'b str]) -> &mut Self {
        self.names = names;
        self
    }

    add_index_target_options!();
    add_option!(with_flat_settings, "flat_settings");
    add_option!(with_include_defaults, "include_defaults");
    add_option!(with_local, "local");
    add_option!(with_master_timeout, "master_timeout");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push_multi(self.indexes)
            .push("_settings")
            .push_multi(self.names)
            .build()?;
        self.params.send(self.client, Method::GET, path)
    }
}

#[derive(Debug)]
pub struct PutSettingsOperation<'a, 'b> {
    client: &'a Client,
    indexes: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> PutSettingsOperation<'a, 'b> {
    pub fn new<B: Into<Body>>(client: &'a Client, body: B) -> Self {
        PutSettingsOperation {
            client,
            indexes: &[],
            params: Params::with_body(body),
        }
    }

    pub fn with_indexes(&mut self, indexes: &'b [&'b str]) -> &mut Self {
        self.indexes = indexes;
        self
    }

    add_index_target_options!();
    add_option!(with_flat_settings, "flat_settings");
    add_option!(with_master_timeout, "master_timeout");
    add_option!(with_preserve_existing, "preserve_existing");
    add_option!(with_timeout, "timeout");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push_multi(self.indexes)
            .push("_settings")
            .build()?;
        self.params.send(self.client, Method::PUT, path)
    }
}

impl<'a> Indices<'a> {
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/indices-get-settings.html
    pub fn get_settings<'b>(&self) -> GetSettingsOperation<'a, 'b> {
        GetSettingsOperation::new(self.client)
    }

    /// Without indexes the settings apply to every index
    ///
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/indices-update-settings.html
    pub fn put_settings<'b, B: Into<Body>>(&self, body: B) -> PutSettingsOperation<'a, 'b> {
        PutSettingsOperation::new(self.client, body)
    }
}

#[cfg(test)]
pub mod tests {
    use reqwest::Method;

    use serde_json::json;

    use crate::tests::make_client;

    #[test]
    fn test_get_settings() {
        let (client, transport) = make_client();
        client
            .indices()
            .get_settings()
            .with_indexes(&["log_2013_*"])
            .with_names(&["index.number_*"])
            .with_flat_settings(true)
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!(Method::GET, req.method);
        assert_eq!("/log_2013_*/_settings/index.number_*", req.path);
        assert_eq!("flat_settings=true", req.query);

        client.indices().get_settings().send().unwrap();
        assert_eq!("/_settings", transport.last().path);
    }

    #[test]
    fn test_put_settings() {
        let (client, transport) = make_client();
        client
            .indices()
            .put_settings(json!({"index": {"number_of_replicas": 2}}))
            .with_indexes(&["my-index"])
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!(Method::PUT, req.method);
        assert_eq!("/my-index/_settings", req.path);
        assert_eq!(
            Some("{\"index\":{\"number_of_replicas\":2}}".to_owned()),
            req.body
        );
    }
}
