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

//! Features common to all operations

use std::collections::BTreeMap;
use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;

use url::form_urlencoded;

use crate::context::Context;
use crate::error::EsError;
use crate::transport::{Body, Request, Response};
use crate::Client;

/// A rendered query-parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionVal(pub String);

impl<'a> From<&'a str> for OptionVal {
    fn from(from: &'a str) -> OptionVal {
        OptionVal(from.to_owned())
    }
}

impl From<String> for OptionVal {
    fn from(from: String) -> OptionVal {
        OptionVal(from)
    }
}

impl<'a> From<&'a String> for OptionVal {
    fn from(from: &'a String) -> OptionVal {
        OptionVal(from.clone())
    }
}

/// Durations go on the wire in whole milliseconds, or nanoseconds when
/// shorter than one millisecond.
impl From<std::time::Duration> for OptionVal {
    fn from(from: std::time::Duration) -> OptionVal {
        if from < std::time::Duration::from_millis(1) {
            OptionVal(format!("{}nanos", from.as_nanos()))
        } else {
            OptionVal(format!("{}ms", from.as_millis()))
        }
    }
}

macro_rules! from_display {
    ($($t:ty),+) => (
        $(impl From<$t> for OptionVal {
            fn from(from: $t) -> OptionVal {
                OptionVal(from.to_string())
            }
        })+
    )
}

from_display!(bool, i32, i64, u32, u64, usize, f32, f64);

/// The query parameters of an operation, keyed by wire name.
///
/// Setting a key twice replaces the earlier value, setting it to an empty
/// value removes it.  Rendering is in key order.
#[derive(Debug, Default, Clone)]
pub struct Options(BTreeMap<&'static str, OptionVal>);

impl Options {
    pub fn new() -> Options {
        Options(BTreeMap::new())
    }

    pub fn push<O: Into<OptionVal>>(&mut self, key: &'static str, val: O) {
        let val = val.into();
        if val.0.is_empty() {
            self.0.remove(key);
        } else {
            self.0.insert(key, val);
        }
    }

    /// A repeating convention in the ElasticSearch REST API is parameters
    /// that can take multiple values, these are comma separated.
    pub fn push_list<S: AsRef<str>>(&mut self, key: &'static str, vals: &[S]) {
        let joined = vals
            .iter()
            .map(|v| v.as_ref())
            .collect::<Vec<_>>()
            .join(",");
        self.push(key, joined);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|val| val.0.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.0.clone()))
            .collect()
    }
}

/// Produces a query string for a URL, including the leading `?`
impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter().map(|(k, v)| (*k, v.0.as_str())))
            .finish();
        write!(f, "?{}", encoded)
    }
}

/// Everything an operation carries besides its path parameters
#[derive(Debug, Default)]
pub struct Params {
    pub(crate) options: Options,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Option<Body>,
    pub(crate) context: Context,
}

impl Params {
    pub(crate) fn with_body<B: Into<Body>>(body: B) -> Params {
        Params {
            body: Some(body.into()),
            ..Default::default()
        }
    }

    /// Build the request and hand it to the client's transport.
    ///
    /// The body is moved into the request, so a second `send` goes without.
    pub(crate) fn send(
        &mut self,
        client: &Client,
        method: Method,
        path: String,
    ) -> Result<Response, EsError> {
        let body = self.body.take();

        let mut headers = HeaderMap::new();
        if body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        for (name, value) in self.headers.iter() {
            headers.append(name.clone(), value.clone());
        }

        client.perform(Request {
            method,
            path,
            query: self.options.to_pairs(),
            headers,
            body,
            context: self.context.clone(),
        })
    }
}

/// Adds a function to an operation to add specific options to that operations
/// builder interface.
macro_rules! add_option {
    ($n:ident, $e:expr) => (
        pub fn $n<T: Into<$crate::operations::common::OptionVal>>(&mut self, val: T) -> &mut Self {
            self.params.options.push($e, val);
            self
        }
    )
}

/// As `add_option` but for parameters that take a list of values
macro_rules! add_list_option {
    ($n:ident, $e:expr) => (
        pub fn $n<S: AsRef<str>>(&mut self, vals: &[S]) -> &mut Self {
            self.params.options.push_list($e, vals);
            self
        }
    )
}

/// For operations where a body is optional
macro_rules! add_body {
    () => (
        pub fn with_body<B: Into<$crate::transport::Body>>(&mut self, body: B) -> &mut Self {
            self.params.body = Some(body.into());
            self
        }
    )
}

/// The parameters and request settings every operation accepts
macro_rules! add_common_options {
    () => (
        /// Pretty-format the returned JSON
        pub fn with_pretty(&mut self) -> &mut Self {
            self.params.options.push("pretty", true);
            self
        }

        /// Return human readable values for statistics
        pub fn with_human(&mut self) -> &mut Self {
            self.params.options.push("human", true);
            self
        }

        /// Include the stack trace of returned errors
        pub fn with_error_trace(&mut self) -> &mut Self {
            self.params.options.push("error_trace", true);
            self
        }

        /// Filter the returned JSON down to the given paths
        pub fn with_filter_path<S: AsRef<str>>(&mut self, paths: &[S]) -> &mut Self {
            self.params.options.push_list("filter_path", paths);
            self
        }

        /// Add a header to this request, in addition to any already set
        pub fn with_header(
            &mut self,
            name: reqwest::header::HeaderName,
            value: reqwest::header::HeaderValue,
        ) -> &mut Self {
            self.params.headers.append(name, value);
            self
        }

        pub fn with_headers(&mut self, headers: reqwest::header::HeaderMap) -> &mut Self {
            for (name, value) in headers.iter() {
                self.params.headers.append(name.clone(), value.clone());
            }
            self
        }

        /// Attach a context to control cancellation and deadlines
        pub fn with_context(&mut self, context: &$crate::context::Context) -> &mut Self {
            self.params.context = context.clone();
            self
        }
    )
}

#[cfg(test)]
pub mod tests {
    use std::time::Duration;

    use super::{OptionVal, Options};

    #[test]
    fn test_empty_options_render_nothing() {
        let options = Options::new();
        assert!(options.is_empty());
        assert_eq!("", options.to_string());
    }

    #[test]
    fn test_options_sorted_and_replaced() {
        let mut options = Options::new();
        options.push("size", 10);
        options.push("from", 5);
        options.push("size", 20);
        assert_eq!(2, options.len());
        assert_eq!("?from=5&size=20", options.to_string());
    }

    #[test]
    fn test_empty_value_removes() {
        let mut options = Options::new();
        options.push("routing", "abc");
        options.push("routing", "");
        options.push_list::<&str>("stored_fields", &[]);
        assert!(options.is_empty());
        assert_eq!(None, options.get("routing"));
    }

    #[test]
    fn test_list_values() {
        let mut options = Options::new();
        options.push_list("_source_includes", &["title", "author.name"]);
        assert_eq!(Some("title,author.name"), options.get("_source_includes"));
        assert_eq!("?_source_includes=title%2Cauthor.name", options.to_string());
    }

    #[test]
    fn test_std_durations() {
        assert_eq!(
            OptionVal("500nanos".to_owned()),
            OptionVal::from(Duration::from_nanos(500))
        );
        assert_eq!(
            OptionVal("1500ms".to_owned()),
            OptionVal::from(Duration::from_millis(1500))
        );
        assert_eq!(
            OptionVal("60000ms".to_owned()),
            OptionVal::from(Duration::from_secs(60))
        );
    }

    #[test]
    fn test_scalars() {
        assert_eq!("false", OptionVal::from(false).0);
        assert_eq!("42", OptionVal::from(42u64).0);
        assert_eq!("0.5", OptionVal::from(0.5f64).0);
    }
}
