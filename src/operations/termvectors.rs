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

//! Term vectors for one document or many

use reqwest::Method;

use crate::{error::EsError, transport::Response, Client};

use super::common::Params;
use super::PathBuilder;

macro_rules! add_termvector_options {
    () => (
        add_option!(with_field_statistics, "field_statistics");
        add_list_option!(with_fields, "fields");
        add_option!(with_offsets, "offsets");
        add_option!(with_payloads, "payloads");
        add_option!(with_positions, "positions");
        add_option!(with_preference, "preference");
        add_option!(with_realtime, "realtime");
        add_option!(with_routing, "routing");
        add_option!(with_term_statistics, "term_statistics");
        add_option!(with_version, "version");
        add_option!(with_version_type, "version_type");
    )
}

#[derive(Debug)]
pub struct TermvectorsOperation<'a, 'b> {
    client: &'a Client,
    index: &'b str,
    id: Option<&'b str>,
    params: Params,
}

impl<'a, 'b> TermvectorsOperation<'a, 'b> {
    pub fn new(client: &'a Client, index: &'b str) -> Self {
        TermvectorsOperation {
            client,
            index,
            id: None,
            params: Params::default(),
        }
    }

    /// Without an ID the body must contain an artificial `doc`
    pub fn with_id(&mut self, id: &'b str) -> &mut Self {
        self.id = Some(id);
        self
    }

    add_body!();

    add_termvector_options!();

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .param("index", self.index)
            .push("_termvectors")
            .push_opt(self.id)
            .build()?;
        self.params.send(self.client, Method::POST, path)
    }
}

#[derive(Debug)]
pub struct MtermvectorsOperation<'a, 'b> {
    client: &'a Client,
    index: Option<&'b str>,
    params: Params,
}

impl<'a, 'b> MtermvectorsOperation<'a, 'b> {
    pub fn new(client: &'a Client) -> Self {
        MtermvectorsOperation {
            client,
            index: None,
            params: Params::default(),
        }
    }

    pub fn with_index(&mut self, index: &'b str) -> &mut Self {
        self.index = Some(index);
        self
    }

    add_body!();

    add_list_option!(with_ids, "ids");
    add_termvector_options!();

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push_opt(self.index)
            .push("_mtermvectors")
            .build()?;
        self.params.send(self.client, Method::POST, path)
    }
}

impl Client {
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/docs-termvectors.html
    pub fn termvectors<'a, 'b>(&'a self, index: &'b str) -> TermvectorsOperation<'a, 'b> {
        TermvectorsOperation::new(self, index)
    }

    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/docs-multi-termvectors.html
    pub fn mtermvectors<'a, 'b>(&'a self) -> MtermvectorsOperation<'a, 'b> {
        MtermvectorsOperation::new(self)
    }
}
