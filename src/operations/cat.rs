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

//! Implementation of ElasticSearch's
//! [compact and aligned text (CAT) APIs](https://www.elastic.co/guide/en/elasticsearch/reference/current/cat.html)
//!
//! These are intended for humans at a terminal, use `with_format("json")` for
//! anything that needs parsing.

use reqwest::Method;

use crate::{error::EsError, transport::Response, Client};

use super::common::Params;
use super::PathBuilder;

/// Entry point for the CAT APIs
#[derive(Debug, Clone, Copy)]
pub struct Cat<'a> {
    client: &'a Client,
}

impl Client {
    pub fn cat(&self) -> Cat<'_> {
        Cat { client: self }
    }
}

macro_rules! add_cat_options {
    () => (
        add_option!(with_format, "format");
        add_list_option!(with_h, "h");
        add_option!(with_help, "help");
        add_option!(with_local, "local");
        add_option!(with_master_timeout, "master_timeout");
        add_list_option!(with_s, "s");
        add_option!(with_v, "v");
    )
}

/// Generates a `GET /_cat/<endpoint>[/{target}]` operation.  `$target` names
/// the setter for the optional trailing path segment.
macro_rules! cat_operation {
    ($name:ident, $endpoint:expr) => {
        #[derive(Debug)]
        pub struct $name<'a, 'b> {
            client: &'a Client,
            targets: &'b [&'b str],
            params: Params,
        }

        impl<'a, 'b> $name<'a, 'b> {
            pub fn new(client: &'a Client) -> Self {
                $name {
                    client,
                    targets: &[],
                    params: Params::default(),
                }
            }

            add_cat_options!();

            add_common_options!();

            pub fn send(&mut self) -> Result<Response, EsError> {
                let path = PathBuilder::new()
                    .push("_cat")
                    .push($endpoint)
                    .push_multi(self.targets)
                    .build()?;
                self.params.send(self.client, Method::GET, path)
            }
        }
    };
    ($name:ident, $endpoint:expr, $target:ident) => {
        cat_operation!($name, $endpoint);

        impl<'a, 'b> $name<'a, 'b> {
            pub fn $target(&mut self, targets: &'b [&'b str]) -> &mut Self {
                self.targets = targets;
                self
            }
        }
    };
}

cat_operation!(CatIndicesOperation, "indices", with_indexes);
cat_operation!(CatHealthOperation, "health");
cat_operation!(CatNodesOperation, "nodes");
cat_operation!(CatShardsOperation, "shards", with_indexes);
cat_operation!(CatAliasesOperation, "aliases", with_names);
cat_operation!(CatCountOperation, "count", with_indexes);
cat_operation!(CatAllocationOperation, "allocation", with_node_ids);
cat_operation!(CatTemplatesOperation, "templates", with_names);

impl<'a, 'b> CatIndicesOperation<'a, 'b> {
    add_option!(with_bytes, "bytes");
    add_option!(with_expand_wildcards, "expand_wildcards");
    add_option!(with_health, "health");
    add_option!(with_include_unloaded_segments, "include_unloaded_segments");
    add_option!(with_pri, "pri");
}

impl<'a, 'b> CatHealthOperation<'a, 'b> {
    add_option!(with_ts, "ts");
}

impl<'a, 'b> CatNodesOperation<'a, 'b> {
    add_option!(with_bytes, "bytes");
    add_option!(with_full_id, "full_id");
}

impl<'a, 'b> CatShardsOperation<'a, 'b> {
    add_option!(with_bytes, "bytes");
}

impl<'a, 'b> CatAliasesOperation<'a, 'b> {
    add_option!(with_expand_wildcards, "expand_wildcards");
}

impl<'a, 'b> CatAllocationOperation<'a, 'b> {
    add_option!(with_bytes, "bytes");
}

impl<'a> Cat<'a> {
    pub fn indices<'b>(&self) -> CatIndicesOperation<'a, 'b> {
        CatIndicesOperation::new(self.client)
    }

    pub fn health<'b>(&self) -> CatHealthOperation<'a, 'b> {
        CatHealthOperation::new(self.client)
    }

    pub fn nodes<'b>(&self) -> CatNodesOperation<'a, 'b> {
        CatNodesOperation::new(self.client)
    }

    pub fn shards<'b>(&self) -> CatShardsOperation<'a, 'b> {
        CatShardsOperation::new(self.client)
    }

    pub fn aliases<'b>(&self) -> CatAliasesOperation<'a, 'b> {
        CatAliasesOperation::new(self.client)
    }

    pub fn count<'b>(&self) -> CatCountOperation<'a, 'b> {
        CatCountOperation::new(self.client)
    }

    pub fn allocation<'b>(&self) -> CatAllocationOperation<'a, 'b> {
        CatAllocationOperation::new(self.client)
    }

    pub fn templates<'b>(&self) -> CatTemplatesOperation<'a, 'b> {
        CatTemplatesOperation::new(self.client)
    }
}
