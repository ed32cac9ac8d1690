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

//! Continuing and releasing scrolled searches

use reqwest::Method;

use crate::{error::EsError, transport::Response, Client};

use crate::operations::common::Params;

/// Fetch the next batch of a scrolled search
#[derive(Debug)]
pub struct ScrollOperation<'a> {
    client: &'a Client,
    params: Params,
}

impl<'a> ScrollOperation<'a> {
    pub fn new(client: &'a Client) -> ScrollOperation<'a> {
        ScrollOperation {
            client,
            params: Params::default(),
        }
    }

    // The scroll ID may be given here or as `scroll_id` in the body
    add_option!(with_scroll_id, "scroll_id");
    add_option!(with_scroll, "scroll");
    add_option!(with_rest_total_hits_as_int, "rest_total_hits_as_int");

    add_body!();

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        self.params
            .send(self.client, Method::POST, "/_search/scroll".to_owned())
    }
}

/// Release the resources held by one or more scrolls
#[derive(Debug)]
pub struct ClearScrollOperation<'a> {
    client: &'a Client,
    params: Params,
}

impl<'a> ClearScrollOperation<'a> {
    pub fn new(client: &'a Client) -> ClearScrollOperation<'a> {
        ClearScrollOperation {
            client,
            params: Params::default(),
        }
    }

    // A body of `{"scroll_id": [..]}`, without one every scroll is cleared
    add_body!();

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        self.params
            .send(self.client, Method::DELETE, "/_search/scroll".to_owned())
    }
}

impl Client {
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/scroll-api.html
    pub fn scroll(&self) -> ScrollOperation<'_> {
        ScrollOperation::new(self)
    }

    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/clear-scroll-api.html
    pub fn clear_scroll(&self) -> ClearScrollOperation<'_> {
        ClearScrollOperation::new(self)
    }
}
