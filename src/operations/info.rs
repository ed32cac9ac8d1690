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

//! Fetch ElasticSearch version information, or just check it is there

use reqwest::Method;

use crate::{error::EsError, transport::Response, Client};

use super::common::Params;

#[derive(Debug)]
pub struct InfoOperation<'a> {
    client: &'a Client,
    params: Params,
}

impl<'a> InfoOperation<'a> {
    pub fn new(client: &'a Client) -> Self {
        InfoOperation {
            client,
            params: Params::default(),
        }
    }

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        self.params.send(self.client, Method::GET, "/".to_owned())
    }
}

#[derive(Debug)]
pub struct PingOperation<'a> {
    client: &'a Client,
    params: Params,
}

impl<'a> PingOperation<'a> {
    pub fn new(client: &'a Client) -> Self {
        PingOperation {
            client,
            params: Params::default(),
        }
    }

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        self.params.send(self.client, Method::HEAD, "/".to_owned())
    }
}

impl Client {
    /// Calls the base ES path, returning cluster name and version information
    ///
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/index.html
    pub fn info(&self) -> InfoOperation<'_> {
        InfoOperation::new(self)
    }

    /// A `HEAD` of the base path, succeeds with 200 if the cluster is up
    pub fn ping(&self) -> PingOperation<'_> {
        PingOperation::new(self)
    }
}

#[cfg(test)]
pub mod tests {
    use reqwest::Method;

    use crate::tests::make_client;

    #[test]
    fn test_info() {
        let (client, transport) = make_client();
        client.info().with_pretty().with_human().send().unwrap();

        let req = transport.last();
        assert_eq!(Method::GET, req.method);
        assert_eq!("/", req.path);
        assert_eq!("human=true&pretty=true", req.query);
    }

    #[test]
    fn test_ping() {
        let (client, transport) = make_client();
        client.ping().send().unwrap();

        let req = transport.last();
        assert_eq!(Method::HEAD, req.method);
        assert_eq!("/", req.path);
        assert_eq!("", req.query);
    }
}
