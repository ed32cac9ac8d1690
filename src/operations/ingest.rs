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

//! Ingest pipelines

use reqwest::Method;

use crate::{error::EsError, transport::Body, transport::Response, Client};

use super::common::Params;
use super::PathBuilder;

#[derive(Debug, Clone, Copy)]
pub struct Ingest<'a> {
    client: &'a Client,
}

impl Client {
    pub fn ingest(&self) -> Ingest<'_> {
        Ingest { client: self }
    }
}

#[derive(Debug)]
pub struct PutPipelineOperation<'a, 'b> {
    client: &'a Client,
    id: &'b str,
    params: Params,
}

impl<'a, 'b> PutPipelineOperation<'a, 'b> {
    pub fn new<B: Into<Body>>(client: &'a Client, id: &'b str, body: B) -> Self {
        PutPipelineOperation {
            client,
            id,
            params: Params::with_body(body),
        }
    }

    add_option!(with_if_version, "if_version");
    add_option!(with_master_timeout, "master_timeout");
    add_option!(with_timeout, "timeout");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push("_ingest")
            .push("pipeline")
            .param("id", self.id)
            .build()?;
        self.params.send(self.client, Method::PUT, path)
    }
}

#[derive(Debug)]
pub struct GetPipelineOperation<'a, 'b> {
    client: &'a Client,
    ids: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> GetPipelineOperation<'a, 'b> {
    pub fn new(client: &'a Client) -> Self {
        GetPipelineOperation {
            client,
            ids: &[],
            params: Params::default(),
        }
    }

    pub fn with_ids(&mut self, ids: &'b [&'b str]) -> &mut Self {
        self.ids = ids;
        self
    }

    add_option!(with_master_timeout, "master_timeout");
    add_option!(with_summary, "summary");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push("_ingest")
            .push("pipeline")
            .push_multi(self.ids)
            .build()?;
        self.params.send(self.client, Method::GET, path)
    }
}

#[derive(Debug)]
pub struct DeletePipelineOperation<'a, 'b> {
    client: &'a Client,
    id: &'b str,
    params: Params,
}

impl<'a, 'b> DeletePipelineOperation<'a, 'b> {
    pub fn new(client: &'a Client, id: &'b str) -> Self {
        DeletePipelineOperation {
            client,
            id,
            params: Params::default(),
        }
    }

    add_option!(with_master_timeout, "master_timeout");
    add_option!(with_timeout, "timeout");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push("_ingest")
            .push("pipeline")
            .param("id", self.id)
            .build()?;
        self.params.send(self.client, Method::DELETE, path)
    }
}

/// Run a pipeline against the documents in the body.  Without an ID the
/// body must define the `pipeline` inline.
#[derive(Debug)]
pub struct SimulatePipelineOperation<'a, 'b> {
    client: &'a Client,
    id: Option<&'b str>,
    params: Params,
}

impl<'a, 'b> SimulatePipelineOperation<'a, 'b> {
    pub fn new<B: Into<Body>>(client: &'a Client, body: B) -> Self {
        SimulatePipelineOperation {
            client,
            id: None,
            params: Params::with_body(body),
        }
    }

    pub fn with_id(&mut self, id: &'b str) -> &mut Self {
        self.id = Some(id);
        self
    }

    add_option!(with_verbose, "verbose");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push("_ingest")
            .push("pipeline")
            .push_opt(self.id)
            .push("_simulate")
            .build()?;
        self.params.send(self.client, Method::POST, path)
    }
}

impl<'a> Ingest<'a> {
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/put-pipeline-api.html
    pub fn put_pipeline<'b, B: Into<Body>>(
        &self,
        id: &'b str,
        body: B,
    ) -> PutPipelineOperation<'a, 'b> {
        PutPipelineOperation::new(self.client, id, body)
    }

    pub fn get_pipeline<'b>(&self) -> GetPipelineOperation<'a, 'b> {
        GetPipelineOperation::new(self.client)
    }

    pub fn delete_pipeline<'b>(&self, id: &'b str) -> DeletePipelineOperation<'a, 'b> {
        DeletePipelineOperation::new(self.client, id)
    }

    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/simulate-pipeline-api.html
    pub fn simulate<'b, B: Into<Body>>(&self, body: B) -> SimulatePipelineOperation<'a, 'b> {
        SimulatePipelineOperation::new(self.client, body)
    }
}

#[cfg(test)]
pub mod tests {
    use reqwest::Method;

    use serde_json::json;

    use crate::tests::make_client;

    #[test]
    fn test_put_pipeline() {
        let (client, transport) = make_client();
        client
            .ingest()
            .put_pipeline(
                "my-pipeline-id",
                json!({"processors": [{"set": {"field": "foo", "value": "bar"}}]}),
            )
            .with_if_version(3)
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!(Method::PUT, req.method);
        assert_eq!("/_ingest/pipeline/my-pipeline-id", req.path);
        assert_eq!("if_version=3", req.query);
    }

    #[test]
    fn test_get_and_delete_pipeline() {
        let (client, transport) = make_client();
        client.ingest().get_pipeline().send().unwrap();
        assert_eq!("/_ingest/pipeline", transport.last().path);

        client
            .ingest()
            .get_pipeline()
            .with_ids(&["a", "b"])
            .send()
            .unwrap();
        assert_eq!("/_ingest/pipeline/a,b", transport.last().path);

        client.ingest().delete_pipeline("a").send().unwrap();
        assert_eq!(Method::DELETE, transport.last().method);
        assert_eq!("/_ingest/pipeline/a", transport.last().path);
    }

    #[test]
    fn test_simulate() {
        let (client, transport) = make_client();
        client
            .ingest()
            .simulate(json!({"docs": [{"_source": {"foo": "bar"}}]}))
            .with_id("my-pipeline-id")
            .with_verbose(true)
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!(Method::POST, req.method);
        assert_eq!("/_ingest/pipeline/my-pipeline-id/_simulate", req.path);
        assert_eq!("verbose=true", req.query);

        client
            .ingest()
            .simulate(json!({"pipeline": {}, "docs": []}))
            .send()
            .unwrap();
        assert_eq!("/_ingest/pipeline/_simulate", transport.last().path);
    }
}
