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

//! The boundary between request building and the network
//!
//! Operations produce a `Request`, a `Transport` turns it into a `Response`.
//! `HttpTransport` is the default implementation, anything else (a test
//! double, a pooled client, a proxy) can be injected via
//! [`Client::with_transport`](../struct.Client.html#method.with_transport).

use std::fmt;
use std::io::{self, Cursor, Read};
use std::sync::Arc;

use reqwest::header::{HeaderMap, WARNING};
use reqwest::{Method, StatusCode};

use serde::de::DeserializeOwned;
use serde::Serialize;

use url::{form_urlencoded, Url};

use crate::config::Config;
use crate::error::EsError;
use crate::context::Context;

/// Performs one HTTP request, returning one HTTP response or an error.
pub trait Transport: Send + Sync {
    fn perform(&self, request: Request) -> Result<Response, EsError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn perform(&self, request: Request) -> Result<Response, EsError> {
        (**self).perform(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn perform(&self, request: Request) -> Result<Response, EsError> {
        (**self).perform(request)
    }
}

/// A request body, either already in memory or streamed from a reader
pub enum Body {
    Bytes(Vec<u8>),
    Reader(Box<dyn Read + Send>),
}

impl Body {
    /// Serialize `value` as JSON
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Body, EsError> {
        Ok(Body::Bytes(serde_json::to_vec(value)?))
    }

    /// Newline-delimited JSON, as used by the bulk and multi-search APIs.
    /// Each item becomes one line, the body always ends with a newline.
    pub fn ndjson<I, T>(lines: I) -> Result<Body, EsError>
    where
        I: IntoIterator<Item = T>,
        T: Serialize,
    {
        let mut buf = Vec::new();
        for line in lines {
            serde_json::to_writer(&mut buf, &line)?;
            buf.push(b'\n');
        }
        Ok(Body::Bytes(buf))
    }

    pub fn reader<R: Read + Send + 'static>(reader: R) -> Body {
        Body::Reader(Box::new(reader))
    }

    pub fn into_reader(self) -> Box<dyn Read + Send> {
        match self {
            Body::Bytes(bytes) => Box::new(Cursor::new(bytes)),
            Body::Reader(reader) => reader,
        }
    }

    /// Drain the body into memory
    pub fn into_bytes(self) -> io::Result<Vec<u8>> {
        match self {
            Body::Bytes(bytes) => Ok(bytes),
            Body::Reader(mut reader) => {
                let mut buf = Vec::new();
                reader.read_to_end(&mut buf)?;
                Ok(buf)
            }
        }
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Body::Bytes(bytes) => write!(f, "Body::Bytes({} bytes)", bytes.len()),
            Body::Reader(_) => write!(f, "Body::Reader"),
        }
    }
}

impl From<Vec<u8>> for Body {
    fn from(from: Vec<u8>) -> Body {
        Body::Bytes(from)
    }
}

impl From<String> for Body {
    fn from(from: String) -> Body {
        Body::Bytes(from.into_bytes())
    }
}

impl<'a> From<&'a str> for Body {
    fn from(from: &'a str) -> Body {
        Body::Bytes(from.as_bytes().to_vec())
    }
}

impl From<serde_json::Value> for Body {
    fn from(from: serde_json::Value) -> Body {
        Body::Bytes(from.to_string().into_bytes())
    }
}

impl<'a> From<&'a serde_json::Value> for Body {
    fn from(from: &'a serde_json::Value) -> Body {
        Body::Bytes(from.to_string().into_bytes())
    }
}

impl From<Body> for reqwest::blocking::Body {
    fn from(from: Body) -> reqwest::blocking::Body {
        match from {
            Body::Bytes(bytes) => reqwest::blocking::Body::from(bytes),
            Body::Reader(reader) => reqwest::blocking::Body::new(reader),
        }
    }
}

/// A fully built request, ready for a `Transport`
#[derive(Debug)]
pub struct Request {
    pub method: Method,

    /// Absolute path, always starts with `/`
    pub path: String,

    /// Query parameters, already rendered
    pub query: Vec<(String, String)>,

    pub headers: HeaderMap,

    pub body: Option<Body>,

    pub context: Context,
}

impl Request {
    pub fn new<S: Into<String>>(method: Method, path: S) -> Request {
        Request {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
            context: Context::background(),
        }
    }

    /// The form-encoded query string, without the leading `?`
    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish()
    }

    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query_string())
        }
    }
}

/// The response to a request: status, headers and the (unread) body.
///
/// Every status code, including 4xx and 5xx, arrives here; interpreting it
/// is left to the caller.
pub struct Response {
    status_code: StatusCode,
    headers: HeaderMap,
    body: Box<dyn Read + Send>,
}

impl Response {
    pub fn new(status_code: StatusCode, headers: HeaderMap, body: Box<dyn Read + Send>) -> Response {
        Response {
            status_code,
            headers,
            body,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body_mut(&mut self) -> &mut (dyn Read + Send) {
        &mut *self.body
    }

    pub fn into_body(self) -> Box<dyn Read + Send> {
        self.body
    }

    /// True for any status above 299
    pub fn is_error(&self) -> bool {
        self.status_code.as_u16() > 299
    }

    /// Deprecation and other warnings sent by ElasticSearch
    pub fn warnings(&self) -> Vec<&str> {
        self.headers
            .get_all(WARNING)
            .iter()
            .filter_map(|val| val.to_str().ok())
            .collect()
    }

    pub fn has_warnings(&self) -> bool {
        self.headers.contains_key(WARNING)
    }

    /// Deserialize the JSON body
    pub fn read_response<R>(self) -> Result<R, EsError>
    where
        R: DeserializeOwned,
    {
        Ok(serde_json::from_reader(self.body)?)
    }

    pub fn text(mut self) -> Result<String, EsError> {
        let mut s = String::new();
        self.body.read_to_string(&mut s)?;
        Ok(s)
    }

    /// Turn an error status into `EsError::EsServerError`, consuming the body
    pub fn error_for_status(self) -> Result<Response, EsError> {
        if self.is_error() {
            let status = self.status_code;
            let body = self.text()?;
            Err(EsError::EsServerError { status, body })
        } else {
            Ok(self)
        }
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Response")
            .field("status_code", &self.status_code)
            .field("headers", &self.headers)
            .finish()
    }
}

/// The default transport: one blocking `reqwest` call per request
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: reqwest::blocking::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<HttpTransport, EsError> {
        let mut builder = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(config.headers.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(HttpTransport {
            http_client: builder.build()?,
            base_url: config.url.clone(),
        })
    }

    /// The base URL with the request path appended and its query set
    pub fn full_url(&self, request: &Request) -> Url {
        let mut url = self.base_url.clone();
        let path = format!("{}{}", url.path().trim_end_matches('/'), request.path);
        url.set_path(&path);
        url.set_query(None);
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        url
    }
}

impl Transport for HttpTransport {
    fn perform(&self, request: Request) -> Result<Response, EsError> {
        request.context.check()?;

        let url = self.full_url(&request);
        let mut builder = self
            .http_client
            .request(request.method, url)
            .headers(request.headers);
        if let Some(remaining) = request.context.remaining() {
            builder = builder.timeout(remaining);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send()?;
        let status_code = response.status();
        let headers = response.headers().clone();
        Ok(Response::new(status_code, headers, Box::new(response)))
    }
}

#[cfg(test)]
pub mod tests {
    use std::io::Cursor;

    use reqwest::header::{HeaderMap, HeaderValue, WARNING};
    use reqwest::{Method, StatusCode};

    use serde_json::json;

    use super::{Body, HttpTransport, Request, Response, Transport};
    use crate::config::Config;
    use crate::context::Context;
    use crate::error::EsError;

    fn response(status: StatusCode, body: &str) -> Response {
        Response::new(
            status,
            HeaderMap::new(),
            Box::new(Cursor::new(body.as_bytes().to_vec())),
        )
    }

    #[test]
    fn test_query_string_encoding() {
        let mut request = Request::new(Method::GET, "/_search");
        assert_eq!("", request.query_string());
        assert_eq!("/_search", request.path_and_query());

        request.query.push(("filter_path".to_owned(), "a,b".to_owned()));
        request.query.push(("q".to_owned(), "title:hello world".to_owned()));
        assert_eq!(
            "filter_path=a%2Cb&q=title%3Ahello+world",
            request.query_string()
        );
        assert_eq!(
            "/_search?filter_path=a%2Cb&q=title%3Ahello+world",
            request.path_and_query()
        );
    }

    #[test]
    fn test_ndjson_body() {
        let body = Body::ndjson(vec![
            json!({"index": {"_id": "1"}}),
            json!({"field": "value"}),
        ])
        .unwrap();
        let bytes = body.into_bytes().unwrap();
        assert_eq!(
            "{\"index\":{\"_id\":\"1\"}}\n{\"field\":\"value\"}\n",
            String::from_utf8(bytes).unwrap()
        );
    }

    #[test]
    fn test_reader_body() {
        let body = Body::reader(Cursor::new(b"{}".to_vec()));
        assert_eq!(b"{}".to_vec(), body.into_bytes().unwrap());
    }

    #[test]
    fn test_response_status() {
        assert!(!response(StatusCode::OK, "").is_error());
        assert!(!response(StatusCode::CREATED, "").is_error());
        assert!(response(StatusCode::NOT_FOUND, "").is_error());
        assert!(response(StatusCode::INTERNAL_SERVER_ERROR, "").is_error());
    }

    #[test]
    fn test_read_response() {
        #[derive(serde::Deserialize)]
        struct Acknowledged {
            acknowledged: bool,
        }

        let result: Acknowledged = response(StatusCode::OK, "{\"acknowledged\":true}")
            .read_response()
            .unwrap();
        assert!(result.acknowledged);
    }

    #[test]
    fn test_error_for_status() {
        assert!(response(StatusCode::OK, "ok").error_for_status().is_ok());
        match response(StatusCode::NOT_FOUND, "missing").error_for_status() {
            Err(EsError::EsServerError { status, body }) => {
                assert_eq!(StatusCode::NOT_FOUND, status);
                assert_eq!("missing", body);
            }
            other => panic!("expected a server error, got {:?}", other),
        }
    }

    #[test]
    fn test_warnings() {
        let mut headers = HeaderMap::new();
        headers.append(WARNING, HeaderValue::from_static("299 Elasticsearch \"one\""));
        headers.append(WARNING, HeaderValue::from_static("299 Elasticsearch \"two\""));
        let resp = Response::new(StatusCode::OK, headers, Box::new(Cursor::new(Vec::new())));
        assert!(resp.has_warnings());
        assert_eq!(2, resp.warnings().len());
        assert!(!response(StatusCode::OK, "").has_warnings());
    }

    #[test]
    fn test_full_url_keeps_prefix() {
        let config = Config::new("http://localhost:9200/es/").unwrap();
        let transport = HttpTransport::new(&config).unwrap();

        let mut request = Request::new(Method::GET, "/idx/_doc/1");
        request.query.push(("routing".to_owned(), "a b".to_owned()));
        assert_eq!(
            "http://localhost:9200/es/idx/_doc/1?routing=a+b",
            transport.full_url(&request).as_str()
        );

        let root = Request::new(Method::HEAD, "/");
        assert_eq!("http://localhost:9200/es/", transport.full_url(&root).as_str());
    }

    #[test]
    fn test_cancelled_before_sending() {
        let config = Config::new("http://127.0.0.1:1").unwrap();
        let transport = HttpTransport::new(&config).unwrap();

        let (ctx, handle) = Context::cancellable();
        handle.cancel();
        let mut request = Request::new(Method::GET, "/");
        request.context = ctx;
        match transport.perform(request) {
            Err(EsError::Cancelled) => (),
            other => panic!("expected cancellation, got {:?}", other),
        }
    }

    #[test]
    fn test_transport_error_propagates() {
        let config = Config::new("http://127.0.0.1:1").unwrap();
        let transport = HttpTransport::new(&config).unwrap();
        match transport.perform(Request::new(Method::GET, "/")) {
            Err(EsError::HttpError(_)) => (),
            other => panic!("expected an HTTP error, got {:?}", other),
        }
    }
}
