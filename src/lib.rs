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

//! Request builders for ElasticSearch's REST API
//!
//! Each endpoint is an operation built from a `Client`: required parameters
//! are arguments, optional ones are `with_*` methods, and `send` performs the
//! request through the client's `Transport`.  The raw `Response` comes back
//! whatever its status code.
//!
//! # Examples
//!
//! ```no_run
//! use rs_esapi::Client;
//!
//! let client = Client::init("http://localhost:9200").unwrap();
//! let response = client
//!     .indices()
//!     .stats()
//!     .with_indexes(&["logs"])
//!     .with_metrics(&["docs"])
//!     .send()
//!     .unwrap();
//! assert!(!response.is_error());
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod transport;
pub mod units;

#[macro_use]
pub mod operations;

use std::fmt;
use std::sync::Arc;

use crate::config::Config;
use crate::error::EsError;
use crate::transport::{HttpTransport, Request, Response, Transport};

pub use crate::context::Context;
pub use crate::transport::Body;

// The client

/// The core of the ElasticSearch client, owns the transport that requests
/// are sent through.  Cloning is cheap, clones share the transport.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a new client talking HTTP to the given address
    pub fn init(url: &str) -> Result<Client, EsError> {
        Client::from_config(Config::new(url)?)
    }

    pub fn from_config(config: Config) -> Result<Client, EsError> {
        Ok(Client::with_transport(HttpTransport::new(&config)?))
    }

    /// Address taken from the `ELASTICSEARCH_URL` environment variable
    pub fn from_env() -> Result<Client, EsError> {
        Client::from_config(Config::from_env()?)
    }

    /// Use a custom transport
    pub fn with_transport<T: Transport + 'static>(transport: T) -> Client {
        Client {
            transport: Arc::new(transport),
        }
    }

    /// Send a fully built request.
    ///
    /// Cancelled and expired requests are refused without reaching the
    /// transport, anything the transport returns is passed back unchanged.
    pub fn perform(&self, request: Request) -> Result<Response, EsError> {
        log::info!("Doing {} on {}", request.method, request.path_and_query());
        request.context.check()?;
        let response = self.transport.perform(request)?;
        log::debug!("Response: {:?}", response);
        Ok(response)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Client")
    }
}

#[cfg(test)]
pub mod tests {
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    use reqwest::header::HeaderMap;
    use reqwest::{Method, StatusCode};

    use super::Client;
    use crate::error::EsError;
    use crate::transport::{Request, Response, Transport};

    /// What a `RecordingTransport` saw
    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub method: Method,
        pub path: String,
        pub query: String,
        pub headers: HeaderMap,
        pub body: Option<String>,
    }

    /// A transport that remembers requests and answers with a canned response
    #[derive(Debug)]
    pub struct RecordingTransport {
        requests: Mutex<Vec<RecordedRequest>>,
        status: StatusCode,
        response_body: String,
    }

    impl RecordingTransport {
        pub fn new(status: StatusCode, response_body: &str) -> RecordingTransport {
            RecordingTransport {
                requests: Mutex::new(Vec::new()),
                status,
                response_body: response_body.to_owned(),
            }
        }

        pub fn count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        pub fn last(&self) -> RecordedRequest {
            self.requests
                .lock()
                .unwrap()
                .last()
                .cloned()
                .expect("no request recorded")
        }
    }

    impl Transport for RecordingTransport {
        fn perform(&self, request: Request) -> Result<Response, EsError> {
            let query = request.query_string();
            let body = match request.body {
                Some(body) => Some(String::from_utf8(body.into_bytes()?).unwrap()),
                None => None,
            };
            self.requests.lock().unwrap().push(RecordedRequest {
                method: request.method,
                path: request.path,
                query,
                headers: request.headers,
                body,
            });
            Ok(Response::new(
                self.status,
                HeaderMap::new(),
                Box::new(Cursor::new(self.response_body.clone().into_bytes())),
            ))
        }
    }

    pub fn make_client_with(status: StatusCode, body: &str) -> (Client, Arc<RecordingTransport>) {
        let _ = env_logger::builder().is_test(true).try_init();
        let transport = Arc::new(RecordingTransport::new(status, body));
        (Client::with_transport(transport.clone()), transport)
    }

    pub fn make_client() -> (Client, Arc<RecordingTransport>) {
        make_client_with(StatusCode::OK, "{}")
    }
}
