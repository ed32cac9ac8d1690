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

//! Copy documents from one index to another

use reqwest::Method;

use crate::{error::EsError, transport::Body, transport::Response, Client};

use super::common::{OptionVal, Params};
use super::PathBuilder;

#[derive(Debug)]
pub struct ReindexOperation<'a> {
    client: &'a Client,
    params: Params,
}

impl<'a> ReindexOperation<'a> {
    /// The body names the `source` and `dest`
    pub fn new<B: Into<Body>>(client: &'a Client, body: B) -> Self {
        ReindexOperation {
            client,
            params: Params::with_body(body),
        }
    }

    add_option!(with_max_docs, "max_docs");
    add_option!(with_refresh, "refresh");
    add_option!(with_requests_per_second, "requests_per_second");
    add_option!(with_require_alias, "require_alias");
    add_option!(with_scroll, "scroll");
    add_option!(with_slices, "slices");
    add_option!(with_timeout, "timeout");
    add_option!(with_wait_for_active_shards, "wait_for_active_shards");
    add_option!(with_wait_for_completion, "wait_for_completion");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        self.params
            .send(self.client, Method::POST, "/_reindex".to_owned())
    }
}

/// Change the throttling of a running reindex task
#[derive(Debug)]
pub struct ReindexRethrottleOperation<'a, 'b> {
    client: &'a Client,
    task_id: &'b str,
    params: Params,
}

impl<'a, 'b> ReindexRethrottleOperation<'a, 'b> {
    /// `requests_per_second` is required, `-1` disables throttling
    pub fn new<R: Into<OptionVal>>(client: &'a Client, task_id: &'b str, requests_per_second: R) -> Self {
        let mut params = Params::default();
        params.options.push("requests_per_second", requests_per_second);
        ReindexRethrottleOperation {
            client,
            task_id,
            params,
        }
    }

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push("_reindex")
            .param("task_id", self.task_id)
            .push("_rethrottle")
            .build()?;
        self.params.send(self.client, Method::POST, path)
    }
}

impl Client {
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/docs-reindex.html
    pub fn reindex<B: Into<Body>>(&self, body: B) -> ReindexOperation<'_> {
        ReindexOperation::new(self, body)
    }

    pub fn reindex_rethrottle<'a, 'b, R: Into<OptionVal>>(
        &'a self,
        task_id: &'b str,
        requests_per_second: R,
    ) -> ReindexRethrottleOperation<'a, 'b> {
        ReindexRethrottleOperation::new(self, task_id, requests_per_second)
    }
}

#[cfg(test)]
pub mod tests {
    use reqwest::Method;

    use serde_json::json;

    use crate::tests::make_client;

    #[test]
    fn test_reindex() {
        let (client, transport) = make_client();
        client
            .reindex(json!({"source": {"index": "a"}, "dest": {"index": "b"}}))
            .with_wait_for_completion(false)
            .with_slices(5)
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!(Method::POST, req.method);
        assert_eq!("/_reindex", req.path);
        assert_eq!("slices=5&wait_for_completion=false", req.query);
        assert!(req.body.is_some());
    }

    #[test]
    fn test_rethrottle() {
        let (client, transport) = make_client();
        client
            .reindex_rethrottle("oTUltX4IQMOUUVeiohTt8A:12345", -1)
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!("/_reindex/oTUltX4IQMOUUVeiohTt8A:12345/_rethrottle", req.path);
        assert_eq!("requests_per_second=-1", req.query);
        assert!(req.body.is_none());
    }
}
