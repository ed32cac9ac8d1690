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

//! Node information, statistics and hot threads

use reqwest::Method;

use crate::{error::EsError, transport::Response, Client};

use super::common::Params;
use super::PathBuilder;

#[derive(Debug, Clone, Copy)]
pub struct Nodes<'a> {
    client: &'a Client,
}

impl Client {
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes { client: self }
    }
}

#[derive(Debug)]
pub struct NodesInfoOperation<'a, 'b> {
    client: &'a Client,
    node_ids: &'b [&'b str],
    metrics: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> NodesInfoOperation<'a, 'b> {
    pub fn new(client: &'a Client) -> Self {
        NodesInfoOperation {
            client,
            node_ids: &[],
            metrics: &[],
            params: Params::default(),
        }
    }

    pub fn with_node_ids(&mut self, node_ids: &'b [&'b str]) -> &mut Self {
        self.node_ids = node_ids;
        self
    }

    /// e.g. `os`, `process`, `jvm`, `plugins`
    pub fn with_metrics(&mut self, metrics: &'b [&'b str]) -> &mut Self {
        self.metrics = metrics;
        self
    }

    add_option!(with_flat_settings, "flat_settings");
    add_option!(with_timeout, "timeout");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push("_nodes")
            .push_multi(self.node_ids)
            .push_multi(self.metrics)
            .build()?;
        self.params.send(self.client, Method::GET, path)
    }
}

#[derive(Debug)]
pub struct NodesStatsOperation<'a, 'b> {
    client: &'a Client,
    node_ids: &'b [&'b str],
    metrics: &'b [&'b str],
    index_metrics: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> NodesStatsOperation<'a, 'b> {
    pub fn new(client: &'a Client) -> Self {
        NodesStatsOperation {
            client,
            node_ids: &[],
            metrics: &[],
            index_metrics: &[],
            params: Params::default(),
        }
    }

    pub fn with_node_ids(&mut self, node_ids: &'b [&'b str]) -> &mut Self {
        self.node_ids = node_ids;
        self
    }

    pub fn with_metrics(&mut self, metrics: &'b [&'b str]) -> &mut Self {
        self.metrics = metrics;
        self
    }

    /// Only used when the `indices` metric is requested
    pub fn with_index_metrics(&mut self, index_metrics: &'b [&'b str]) -> &mut Self {
        self.index_metrics = index_metrics;
        self
    }

    add_list_option!(with_completion_fields, "completion_fields");
    add_list_option!(with_fielddata_fields, "fielddata_fields");
    add_list_option!(with_fields, "fields");
    add_list_option!(with_groups, "groups");
    add_option!(with_include_segment_file_sizes, "include_segment_file_sizes");
    add_option!(with_level, "level");
    add_option!(with_timeout, "timeout");
    add_list_option!(with_types, "types");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let mut path = PathBuilder::new();
        path.push("_nodes").push_multi(self.node_ids).push("stats");
        if !self.metrics.is_empty() {
            path.push_multi(self.metrics).push_multi(self.index_metrics);
        }
        self.params.send(self.client, Method::GET, path.build()?)
    }
}

#[derive(Debug)]
pub struct HotThreadsOperation<'a, 'b> {
    client: &'a Client,
    node_ids: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> HotThreadsOperation<'a, 'b> {
    pub fn new(client: &'a Client) -> Self {
        HotThreadsOperation {
            client,
            node_ids: &[],
            params: Params::default(),
        }
    }

    pub fn with_node_ids(&mut self, node_ids: &'b [&'b str]) -> &mut Self {
        self.node_ids = node_ids;
        self
    }

    add_option!(with_ignore_idle_threads, "ignore_idle_threads");
    add_option!(with_interval, "interval");
    add_option!(with_snapshots, "snapshots");
    add_option!(with_threads, "threads");
    add_option!(with_timeout, "timeout");
    add_option!(with_type, "type");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push("_nodes")
            .push_multi(self.node_ids)
            .push("hot_threads")
            .build()?;
        self.params.send(self.client, Method::GET, path)
    }
}

impl<'a> Nodes<'a> {
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/cluster-nodes-info.html
    pub fn info<'b>(&self) -> NodesInfoOperation<'a, 'b> {
        NodesInfoOperation::new(self.client)
    }

    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/cluster-nodes-stats.html
    pub fn stats<'b>(&self) -> NodesStatsOperation<'a, 'b> {
        NodesStatsOperation::new(self.client)
    }

    pub fn hot_threads<'b>(&self) -> HotThreadsOperation<'a, 'b> {
        HotThreadsOperation::new(self.client)
    }
}

#[cfg(test)]
pub mod tests {
    use reqwest::Method;

    use crate::tests::make_client;
    use crate::units::{Duration, ThreadType};

    #[test]
    fn test_info() {
        let (client, transport) = make_client();
        client.nodes().info().send().unwrap();
        assert_eq!("/_nodes", transport.last().path);

        client
            .nodes()
            .info()
            .with_node_ids(&["_local"])
            .with_metrics(&["jvm", "os"])
            .send()
            .unwrap();
        assert_eq!(Method::GET, transport.last().method);
        assert_eq!("/_nodes/_local/jvm,os", transport.last().path);
    }

    #[test]
    fn test_stats() {
        let (client, transport) = make_client();
        client.nodes().stats().send().unwrap();
        assert_eq!("/_nodes/stats", transport.last().path);

        client
            .nodes()
            .stats()
            .with_metrics(&["indices"])
            .with_index_metrics(&["fielddata"])
            .with_fields(&["field1", "field2"])
            .send()
            .unwrap();
        let req = transport.last();
        assert_eq!("/_nodes/stats/indices/fielddata", req.path);
        assert_eq!("fields=field1%2Cfield2", req.query);

        client
            .nodes()
            .stats()
            .with_index_metrics(&["fielddata"])
            .send()
            .unwrap();
        assert_eq!("/_nodes/stats", transport.last().path);
    }

    #[test]
    fn test_hot_threads() {
        let (client, transport) = make_client();
        client
            .nodes()
            .hot_threads()
            .with_node_ids(&["node1"])
            .with_type(ThreadType::Wait)
            .with_interval(Duration::milliseconds(500))
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!("/_nodes/node1/hot_threads", req.path);
        assert_eq!("interval=500ms&type=wait", req.query);
    }
}
