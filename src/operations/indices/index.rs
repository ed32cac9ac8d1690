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

//! Implementation of ElasticSearch Index managemenent operations of the
//! Indices API: create, delete, exists, get, open and close.

use reqwest::Method;

use crate::{error::EsError, transport::Response, Client};

use crate::operations::common::Params;
use crate::operations::PathBuilder;

use super::Indices;

#[derive(Debug)]
pub struct CreateIndexOperation<'a, 'b> {
    client: &'a Client,
    index: &'b str,
    params: Params,
}

impl<'a, 'b> CreateIndexOperation<'a, 'b> {
    pub fn new(client: &'a Client, index: &'b str) -> Self {
        CreateIndexOperation {
            client,
            index,
            params: Params::default(),
        }
    }

    // Settings, mappings and aliases for the new index
    add_body!();

    add_option!(with_master_timeout, "master_timeout");
    add_option!(with_timeout, "timeout");
    add_option!(with_wait_for_active_shards, "wait_for_active_shards");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .param("index", self.index)
            .build()?;
        self.params.send(self.client, Method::PUT, path)
    }
}

#[derive(Debug)]
pub struct DeleteIndexOperation<'a, 'b> {
    client: &'a Client,
    indexes: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> DeleteIndexOperation<'a, 'b> {
    pub fn new(client: &'a Client, indexes: &'b [&'b str]) -> Self {
        DeleteIndexOperation {
            client,
            indexes,
            params: Params::default(),
        }
    }

    add_index_target_options!();
    add_option!(with_master_timeout, "master_timeout");
    add_option!(with_timeout, "timeout");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .param_multi("indexes", self.indexes)
            .build()?;
        self.params.send(self.client, Method::DELETE, path)
    }
}

/// 200 when every named index exists, 404 otherwise
#[derive(Debug)]
pub struct IndexExistsOperation<'a, 'b> {
    client: &'a Client,
    indexes: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> IndexExistsOperation<'a, 'b> {
    pub fn new(client: &'a Client, indexes: &'b [&'b str]) -> Self {
        IndexExistsOperation {
            client,
            indexes,
            params: Params::default(),
        }
    }

    add_index_target_options!();
    add_option!(with_flat_settings, "flat_settings");
    add_option!(with_include_defaults, "include_defaults");
    add_option!(with_local, "local");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .param_multi("indexes", self.indexes)
            .build()?;
        self.params.send(self.client, Method::HEAD, path)
    }
}

#[derive(Debug)]
pub struct GetIndexOperation<'a, 'b> {
    client: &'a Client,
    indexes: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> GetIndexOperation<'a, 'b> {
    pub fn new(client: &'a Client, indexes: &'b [&'b str]) -> Self {
        GetIndexOperation {
            client,
            indexes,
            params: Params::default(),
        }
    }

    add_index_target_options!();
    add_option!(with_flat_settings, "flat_settings");
    add_option!(with_include_defaults, "include_defaults");
    add_option!(with_local, "local");
    add_option!(with_master_timeout, "master_timeout");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .param_multi("indexes", self.indexes)
            .build()?;
        self.params.send(self.client, Method::GET, path)
    }
}

#[derive(Debug)]
pub struct OpenIndexOperation<'a, 'b> {
    client: &'a Client,
    indexes: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> OpenIndexOperation<'a, 'b> {
    pub fn new(client: &'a Client, indexes: &'b [&'b str]) -> Self {
        OpenIndexOperation {
            client,
            indexes,
            params: Params::default(),
        }
    }

    add_index_target_options!();
    add_option!(with_master_timeout, "master_timeout");
    add_option!(with_timeout, "timeout");
    add_option!(with_wait_for_active_shards, "wait_for_active_shards");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .param_multi("indexes", self.indexes)
            .push("_open")
            .build()?;
        self.params.send(self.client, Method::POST, path)
    }
}

#[derive(Debug)]
pub struct CloseIndexOperation<'a, 'b> {
    client: &'a Client,
    indexes: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> CloseIndexOperation<'a, 'b> {
    pub fn new(client: &'a Client, indexes: &'b [&'b str]) -> Self {
        CloseIndexOperation {
            client,
            indexes,
            params: Params::default(),
        }
    }

    add_index_target_options!();
    add_option!(with_master_timeout, "master_timeout");
    add_option!(with_timeout, "timeout");
    add_option!(with_wait_for_active_shards, "wait_for_active_shards");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .param_multi("indexes", self.indexes)
            .push("_close")
            .build()?;
        self.params.send(self.client, Method::POST, path)
    }
}

impl<'a> Indices<'a> {
    /// Create a specified index.
    ///
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/indices-create-index.html
    pub fn create<'b>(&self, index: &'b str) -> CreateIndexOperation<'a, 'b> {
        CreateIndexOperation::new(self.client, index)
    }

    /// Delete given indexes
    ///
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/indices-delete-index.html
    pub fn delete<'b>(&self, indexes: &'b [&'b str]) -> DeleteIndexOperation<'a, 'b> {
        DeleteIndexOperation::new(self.client, indexes)
    }

    pub fn exists<'b>(&self, indexes: &'b [&'b str]) -> IndexExistsOperation<'a, 'b> {
        IndexExistsOperation::new(self.client, indexes)
    }

    /// Get a given index
    ///
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/indices-get-index.html
    pub fn get<'b>(&self, indexes: &'b [&'b str]) -> GetIndexOperation<'a, 'b> {
        GetIndexOperation::new(self.client, indexes)
    }

    pub fn open<'b>(&self, indexes: &'b [&'b str]) -> OpenIndexOperation<'a, 'b> {
        OpenIndexOperation::new(self.client, indexes)
    }

    pub fn close<'b>(&self, indexes: &'b [&'b str]) -> CloseIndexOperation<'a, 'b> {
        CloseIndexOperation::new(self.client, indexes)
    }
}
