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

//! Roll an alias over to a new index

use reqwest::Method;

use crate::{error::EsError, transport::Response, Client};

use crate::operations::common::Params;
use crate::operations::PathBuilder;

use super::Indices;

#[derive(Debug)]
pub struct RolloverOperation<'a, 'b> {
    client: &'a Client,
    alias: &'b str,
    new_index: Option<&'b str>,
    params: Params,
}

impl<'a, 'b> RolloverOperation<'a, 'b> {
    pub fn new(client: &'a Client, alias: &'b str) -> Self {
        RolloverOperation {
            client,
            alias,
            new_index: None,
            params: Params::default(),
        }
    }

    /// Otherwise the name is derived by incrementing the current one
    pub fn with_new_index(&mut self, new_index: &'b str) -> &mut Self {
        self.new_index = Some(new_index);
        self
    }

    // Conditions, and settings for the new index
    add_body!();

    add_option!(with_dry_run, "dry_run");
    add_option!(with_master_timeout, "master_timeout");
    add_option!(with_timeout, "timeout");
    add_option!(with_wait_for_active_shards, "wait_for_active_shards");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .param("alias", self.alias)
            .push("_rollover")
            .push_opt(self.new_index)
            .build()?;
        self.params.send(self.client, Method::POST, path)
    }
}

impl<'a> Indices<'a> {
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/indices-rollover-index.html
    pub fn rollover<'b>(&self, alias: &'b str) -> RolloverOperation<'a, 'b> {
        RolloverOperation::new(self.client, alias)
    }
}
