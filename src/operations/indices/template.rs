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

//! Legacy index templates, under `/_template`

use reqwest::Method;

use crate::{error::EsError, transport::Body, transport::Response, Client};

use crate::operations::common::Params;
use crate::operations::PathBuilder;

use super::Indices;

#[derive(Debug)]
pub struct PutTemplateOperation<'a, 'b> {
    client: &'a Client,
    name: &'b str,
    params: Params,
}

impl<'a, 'b> PutTemplateOperation<'a, 'b> {
    pub fn new<B: Into<Body>>(client: &'a Client, name: &'b str, body: B) -> Self {
        PutTemplateOperation {
            client,
            name,
            params: Params::with_body(body),
        }
    }

    add_option!(with_create, "create");
    add_option!(with_master_timeout, "master_timeout");
    add_option!(with_order, "order");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push("_template")
            .param("name", self.name)
            .build()?;
        self.params.send(self.client, Method::PUT, path)
    }
}

#[derive(Debug)]
pub struct GetTemplateOperation<'a, 'b> {
    client: &'a Client,
    names: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> GetTemplateOperation<'a, 'b> {
    pub fn new(client: &'a Client) -> Self {
        GetTemplateOperation {
            client,
            names: &[],
            params: Params::default(),
        }
    }

    pub fn with_names(&mut self, names: &'b [&'b str]) -> &mut Self {
        self.names = names;
        self
    }

    add_option!(with_flat_settings, "flat_settings");
    add_option!(with_local, "local");
    add_option!(with_master_timeout, "master_timeout");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push("_template")
            .push_multi(self.names)
            .build()?;
        self.params.send(self.client, Method::GET, path)
    }
}

#[derive(Debug)]
pub struct DeleteTemplateOperation<'a, 'b> {
    client: &'a Client,
    name: &'b str,
    params: Params,
}

impl<'a, 'b> DeleteTemplateOperation<'a, 'b> {
    pub fn new(client: &'a Client, name: &'b str) -> Self {
        DeleteTemplateOperation {
            client,
            name,
            params: Params::default(),
        }
    }

    add_option!(with_master_timeout, "master_timeout");
    add_option!(with_timeout, "timeout");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push("_template")
            .param("name", self.name)
            .build()?;
        self.params.send(self.client, Method::DELETE, path)
    }
}

#[derive(Debug)]
pub struct TemplateExistsOperation<'a, 'b> {
    client: &'a Client,
    names: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> TemplateExistsOperation<'a, 'b> {
    pub fn new(client: &'a Client, names: &'b [&'b str]) -> Self {
        TemplateExistsOperation {
            client,
            names,
            params: Params::default(),
        }
    }

    add_option!(with_flat_settings, "flat_settings");
    add_option!(with_local, "local");
    add_option!(with_master_timeout, "master_timeout");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push("_template")
            .param_multi("names", self.names)
            .build()?;
        self.params.send(self.client, Method::HEAD, path)
    }
}

impl<'a> Indices<'a> {
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/indices-templates-v1.html
    pub fn put_template<'b, B: Into<Body>>(
        &self,
        name: &'b str,
        body: B,
    ) -> PutTemplateOperation<'a, 'b> {
        PutTemplateOperation::new(self.client, name, body)
    }

    pub fn get_template<'b>(&self) -> GetTemplateOperation<'a, 'b> {
        GetTemplateOperation::new(self.client)
    }

    pub fn delete_template<'b>(&self, name: &'b str) -> DeleteTemplateOperation<'a, 'b> {
        DeleteTemplateOperation::new(self.client, name)
    }

    pub fn template_exists<'b>(&self, names: &'b [&'b str]) -> TemplateExistsOperation<'a, 'b> {
        TemplateExistsOperation::new(self.client, names)
    }
}

#[cfg(test)]
pub mod tests {
    use reqwest::Method;

    use serde_json::json;

    use crate::tests::make_client;

    #[test]
    fn test_put_template() {
        let (client, transport) = make_client();
        client
            .indices()
            .put_template("template_1", json!({"index_patterns": ["te*"]}))
            .with_order(1)
            .with_create(true)
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!(Method::PUT, req.method);
        assert_eq!("/_template/template_1", req.path);
        assert_eq!("create=true&order=1", req.query);
    }

    #[test]
    fn test_get_template() {
        let (client, transport) = make_client();
        client.indices().get_template().send().unwrap();
        assert_eq!("/_template", transport.last().path);

        client
            .indices()
            .get_template()
            .with_names(&["template_1", "template_2"])
            .send()
            .unwrap();
        assert_eq!("/_template/template_1,template_2", transport.last().path);
    }

    #[test]
    fn test_delete_and_exists() {
        let (client, transport) = make_client();
        client.indices().delete_template("template_1").send().unwrap();
        assert_eq!(Method::DELETE, transport.last().method);
        assert_eq!("/_template/template_1", transport.last().path);

        client
            .indices()
            .template_exists(&["template_1"])
            .send()
            .unwrap();
        assert_eq!(Method::HEAD, transport.last().method);
    }
}
