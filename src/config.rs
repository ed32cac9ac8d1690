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

//! Settings for the default HTTP transport

use std::env;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use url::Url;

use crate::error::EsError;

/// The address used when nothing else is configured
pub const DEFAULT_URL: &str = "http://localhost:9200";

/// Environment variable consulted by `Config::from_env`
pub const URL_ENV_VAR: &str = "ELASTICSEARCH_URL";

/// The `User-Agent` sent unless overridden
pub fn default_user_agent() -> String {
    format!(
        "{}/{} ({} {}; Rust)",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env::consts::OS,
        env::consts::ARCH
    )
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL, any path is kept as a prefix for every request
    pub url: Url,

    /// Overall timeout applied by the HTTP client
    pub timeout: Option<Duration>,

    /// Headers sent with every request
    pub headers: HeaderMap,

    pub user_agent: String,
}

impl Config {
    pub fn new(url: &str) -> Result<Config, EsError> {
        Ok(Config {
            url: Url::parse(url)?,
            timeout: None,
            headers: HeaderMap::new(),
            user_agent: default_user_agent(),
        })
    }

    /// Reads the address from `ELASTICSEARCH_URL`, falling back to
    /// `DEFAULT_URL`.  Only the first of a comma-separated list is used.
    pub fn from_env() -> Result<Config, EsError> {
        match env::var(URL_ENV_VAR) {
            Ok(val) => Config::new(&first_url(&val)),
            Err(_) => Config::new(DEFAULT_URL),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Config {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Config {
        self.headers.append(name, value);
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Config {
        self.user_agent = user_agent.into();
        self
    }
}

fn first_url(val: &str) -> String {
    let mut urls = val.split(',').map(str::trim).filter(|u| !u.is_empty());
    let first = urls.next().unwrap_or(DEFAULT_URL).to_owned();
    if urls.next().is_some() {
        log::warn!(
            "{} lists several addresses, only {} will be used",
            URL_ENV_VAR,
            first
        );
    }
    first
}
