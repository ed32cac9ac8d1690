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

//! Index statistics

use reqwest::Method;

use crate::{error::EsError, transport::Response, Client};

use crate::operations::common::Params;
use crate::operations::PathBuilder;

use super::Indices;

#[derive(Debug)]
pub struct IndicesStatsOperation<'a, 'b> {
    client: &'a Client,
    indexes: &'b [&'b str],
    metrics: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> IndicesStatsOperation<'a, 'b> {
    pub fn new(client: &'a Client) -> Self {
        IndicesStatsOperation {
            client,
            indexes: &[],
            metrics: &[],
            params: Params::default(),
        }
    }

    pub fn with_indexes(&mut self, indexes: &'b [&'b str]) -> &mut Self {
        self.indexes = indexes;
        self
    }

    /// e.g. `docs`, `store`, `indexing`
    pub fn with_metrics(&mut self, metrics: &'b [&'b str]) -> &mut Self {
        self.metrics = metrics;
        self
    }

    add_list_option!(with_completion_fields, "completion_fields");
    add_option!(with_expand_wildcards, "expand_wildcards");
    add_list_option!(with_fielddata_fields, "fielddata_fields");
    add_list_option!(with_fields, "fields");
    add_option!(with_forbid_closed_indices, "forbid_closed_indices");
    add_list_option!(with_groups, "groups");
    add_option!(with_include_segment_file_sizes, "include_segment_file_sizes");
    add_option!(with_include_unloaded_segments, "include_unloaded_segments");
    add_option!(with_level, "level");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push_multi(self.indexes)
            .push("_stats")
            .push_multi(self.metrics)
            .build()?;
        self.params.send(self.client, Method::GET, path)
    }
}

impl<'a> Indices<'a> {
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/indices-stats.html
    pub fn stats<'b>(&self) -> IndicesStatsOperation<'a, 'b> {
        IndicesStatsOperation::new(self.client)
    }
}

#[cfg(test)]
pub mod tests {
    use reqwest::Method;

    use crate::tests::make_client;
    use crate::units::Level;

    #[test]
    fn test_stats() {
        let (client, transport) = make_client();
        client.indices().stats().send().unwrap();

        let req = transport.last();
        assert_eq!(Method::GET, req.method);
        assert_eq!("/_stats", req.path);

        client
            .indices()
            .stats()
            .with_indexes(&["index1", "index2"])
            .with_metrics(&["docs", "store"])
            .with_level(Level::Shards)
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!("/index1,index2/_stats/docs,store", req.path);
        assert_eq!("level=shards", req.query);
    }
}
