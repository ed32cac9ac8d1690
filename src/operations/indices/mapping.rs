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

//! Mapping operations: get, put, and per-field mappings

use reqwest::Method;

use crate::{error::EsError, transport::Body, transport::Response, Client};

use crate::operations::common::Params;
use crate::operations::PathBuilder;

use super::Indices;

#[derive(Debug)]
pub struct GetMappingOperation<'a, 'b> {
    client: &'a Client,
    indexes: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> GetMappingOperation<'a, 'b> {
    pub fn new(client: &'a Client) -> Self {
        GetMappingOperation {
            client,
            indexes: &[],
            params: Params::default(),
        }
    }

    pub fn with_indexes(&mut self, indexes: &'b [&'b str]) -> &mut Self {
        self.indexes = indexes;
        self
    }

    add_index_target_options!();
    add_option!(with_local, "local");
    add_option!(with_master_timeout, "master_timeout");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push_multi(self.indexes)
            .push("_mapping")
            .build()?;
        self.params.send(self.client, Method::GET, path)
    }
}

#[derive(Debug)]
pub struct PutMappingOperation<'a, 'b> {
    client: &'a Client,
    indexes: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> PutMappingOperation<'a, 'b> {
    pub fn new<B: Into<Body>>(client: &'a Client, indexes: &'b [&'b str], body: B) -> Self {
        PutMappingOperation {
            client,
            indexes,
            params: Params::with_body(body),
        }
    }

    add_index_target_options!();
    add_option!(with_master_timeout, "master_timeout");
    add_option!(with_timeout, "timeout");
    add_option!(with_write_index_only, "write_index_only");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .param_multi("indexes", self.indexes)
            .push("_mapping")
            .build()?;
        self.params.send(self.client, Method::PUT, path)
    }
}

#[derive(Debug)]
pub struct GetFieldMappingOperation<'a, 'b> {
    client: &'a Client,
    indexes: &'b [&'b str],
    fields: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> GetFieldMappingOperation<'a, 'b> {
    pub fn new(client: &'a Client, fields: &'b [&'b str]) -> Self {
        GetFieldMappingOperation {
            client,
            indexes: &[],
            fields,
            params: Params::default(),
        }
    }

    pub fn with_indexes(&mut self, indexes: &'b [&'b str]) -> &mut Self {
        self.indexes = indexes;
        self
    }

    add_index_target_options!();
    add_option!(with_include_defaults, "include_defaults");
    add_option!(with_local, "local");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push_multi(self.indexes)
            .push("_mapping")
            .push("field")
            .param_multi("fields", self.fields)
            .build()?;
        self.params.send(self.client, Method::GET, path)
    }
}

impl<'a> Indices<'a> {
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/indices-get-mapping.html
    pub fn get_mapping<'b>(&self) -> GetMappingOperation<'a, 'b> {
        GetMappingOperation::new(self.client)
    }

    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/indices-put-mapping.html
    pub fn put_mapping<'b, B: Into<Body>>(
        &self,
        indexes: &'b [&'b str],
        body: B,
    ) -> PutMappingOperation<'a, 'b> {
        PutMappingOperation::new(self.client, indexes, body)
    }

    pub fn get_field_mapping<'b>(&self, fields: &'b [&'b str]) -> GetFieldMappingOperation<'a, 'b> {
        GetFieldMappingOperation::new(self.client, fields)
    }
}
