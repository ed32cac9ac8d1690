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
//! [Cluster APIs](https://www.elastic.co/guide/en/elasticsearch/reference/current/cluster.html)

use reqwest::Method;

use crate::{error::EsError, transport::Body, transport::Response, Client};

use super::common::Params;
use super::PathBuilder;

/// Entry point for the Cluster APIs
#[derive(Debug, Clone, Copy)]
pub struct Cluster<'a> {
    client: &'a Client,
}

impl Client {
    pub fn cluster(&self) -> Cluster<'_> {
        Cluster { client: self }
    }
}

#[derive(Debug)]
pub struct ClusterHealthOperation<'a, 'b> {
    client: &'a Client,
    indexes: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> ClusterHealthOperation<'a, 'b> {
    pub fn new(client: &'a Client) -> Self {
        ClusterHealthOperation {
            client,
            indexes: &[],
            params: Params::default(),
        }
    }

    pub fn with_indexes(&mut self, indexes: &'b [&'b str]) -> &mut Self {
        self.indexes = indexes;
        self
    }

    add_option!(with_expand_wildcards, "expand_wildcards");
    add_option!(with_level, "level");
    add_option!(with_local, "local");
    add_option!(with_master_timeout, "master_timeout");
    add_option!(with_timeout, "timeout");
    add_option!(with_wait_for_active_shards, "wait_for_active_shards");
    add_option!(with_wait_for_events, "wait_for_events");
    add_option!(with_wait_for_no_initializing_shards, "wait_for_no_initializing_shards");
    add_option!(with_wait_for_no_relocating_shards, "wait_for_no_relocating_shards");
    add_option!(with_wait_for_nodes, "wait_for_nodes");
    add_option!(with_wait_for_status, "wait_for_status");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push("_cluster")
            .push("health")
            .push_multi(self.indexes)
            .build()?;
        self.params.send(self.client, Method::GET, path)
    }
}

#[derive(Debug)]
pub struct ClusterStateOperation<'a, 'b> {
    client: &'a Client,
    metrics: &'b [&'b str],
    indexes: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> ClusterStateOperation<'a, 'b> {
    pub fn new(client: &'a Client) -> Self {
        ClusterStateOperation {
            client,
            metrics: &[],
            indexes: &[],
            params: Params::default(),
        }
    }

    /// e.g. `metadata`, `routing_table`, `nodes`
    pub fn with_metrics(&mut self, metrics: &'b [&'b str]) -> &mut Self {
        self.metrics = metrics;
        self
    }

    pub fn with_indexes(&mut self, indexes: &'b [&'b str]) -> &mut Self {
        self.indexes = indexes;
        self
    }

    add_option!(with_allow_no_indices, "allow_no_indices");
    add_option!(with_expand_wildcards, "expand_wildcards");
    add_option!(with_flat_settings, "flat_settings");
    add_option!(with_ignore_unavailable, "ignore_unavailable");
    add_option!(with_local, "local");
    add_option!(with_master_timeout, "master_timeout");
    add_option!(with_wait_for_metadata_version, "wait_for_metadata_version");
    add_option!(with_wait_for_timeout, "wait_for_timeout");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let mut path = PathBuilder::new();
        path.push("_cluster").push("state");
        if !self.metrics.is_empty() {
            path.push_multi(self.metrics);
        } else if !self.indexes.is_empty() {
            path.push("_all");
        }
        path.push_multi(self.indexes);
        self.params.send(self.client, Method::GET, path.build()?)
    }
}

#[derive(Debug)]
pub struct ClusterStatsOperation<'a, 'b> {
    client: &'a Client,
    node_ids: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> ClusterStatsOperation<'a, 'b> {
    pub fn new(client: &'a Client) -> Self {
        ClusterStatsOperation {
            client,
            node_ids: &[],
            params: Params::default(),
        }
    }

    /// Node filters, e.g. `_local` or `data:true`
    pub fn with_node_ids(&mut self, node_ids: &'b [&'b str]) -> &mut Self {
        self.node_ids = node_ids;
        self
    }

    add_option!(with_flat_settings, "flat_settings");
    add_option!(with_timeout, "timeout");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let mut path = PathBuilder::new();
        path.push("_cluster").push("stats");
        if !self.node_ids.is_empty() {
            path.push("nodes").push_multi(self.node_ids);
        }
        self.params.send(self.client, Method::GET, path.build()?)
    }
}

#[derive(Debug)]
pub struct ClusterGetSettingsOperation<'a> {
    client: &'a Client,
    params: Params,
}

impl<'a> ClusterGetSettingsOperation<'a> {
    pub fn new(client: &'a Client) -> Self {
        ClusterGetSettingsOperation {
            client,
            params: Params::default(),
        }
    }

    add_option!(with_flat_settings, "flat_settings");
    add_option!(with_include_defaults, "include_defaults");
    add_option!(with_master_timeout, "master_timeout");
    add_option!(with_timeout, "timeout");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        self.params
            .send(self.client, Method::GET, "/_cluster/settings".to_owned())
    }
}

/// Update `persistent` or `transient` cluster settings
#[derive(Debug)]
pub struct ClusterPutSettingsOperation<'a> {
    client: &'a Client,
    params: Params,
}

impl<'a> ClusterPutSettingsOperation<'a> {
    pub fn new<B: Into<Body>>(client: &'a Client, body: B) -> Self {
        ClusterPutSettingsOperation {
            client,
            params: Params::with_body(body),
        }
    }

    add_option!(with_flat_settings, "flat_settings");
    add_option!(with_master_timeout, "master_timeout");
    add_option!(with_timeout, "timeout");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        self.params
            .send(self.client, Method::PUT, "/_cluster/settings".to_owned())
    }
}

#[derive(Debug)]
pub struct PendingTasksOperation<'a> {
    client: &'a Client,
    params: Params,
}

impl<'a> PendingTasksOperation<'a> {
    pub fn new(client: &'a Client) -> Self {
        PendingTasksOperation {
            client,
            params: Params::default(),
        }
    }

    add_option!(with_local, "local");
    add_option!(with_master_timeout, "master_timeout");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        self.params.send(
            self.client,
            Method::GET,
            "/_cluster/pending_tasks".to_owned(),
        )
    }
}

#[derive(Debug)]
pub struct AllocationExplainOperation<'a> {
    client: &'a Client,
    params: Params,
}

impl<'a> AllocationExplainOperation<'a> {
    pub fn new(client: &'a Client) -> Self {
        AllocationExplainOperation {
            client,
            params: Params::default(),
        }
    }

    // The shard to explain, otherwise the first unassigned shard
    add_body!();

    add_option!(with_include_disk_info, "include_disk_info");
    add_option!(with_include_yes_decisions, "include_yes_decisions");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        self.params.send(
            self.client,
            Method::POST,
            "/_cluster/allocation/explain".to_owned(),
        )
    }
}

#[derive(Debug)]
pub struct RerouteOperation<'a> {
    client: &'a Client,
    params: Params,
}

impl<'a> RerouteOperation<'a> {
    pub fn new(client: &'a Client) -> Self {
        RerouteOperation {
            client,
            params: Params::default(),
        }
    }

    // The `commands` to apply
    add_body!();

    add_option!(with_dry_run, "dry_run");
    add_option!(with_explain, "explain");
    add_list_option!(with_metric, "metric");
    add_option!(with_master_timeout, "master_timeout");
    add_option!(with_retry_failed, "retry_failed");
    add_option!(with_timeout, "timeout");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        self.params
            .send(self.client, Method::POST, "/_cluster/reroute".to_owned())
    }
}

impl<'a> Cluster<'a> {
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/cluster-health.html
    pub fn health<'b>(&self) -> ClusterHealthOperation<'a, 'b> {
        ClusterHealthOperation::new(self.client)
    }

    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/cluster-state.html
    pub fn state<'b>(&self) -> ClusterStateOperation<'a, 'b> {
        ClusterStateOperation::new(self.client)
    }

    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/cluster-stats.html
    pub fn stats<'b>(&self) -> ClusterStatsOperation<'a, 'b> {
        ClusterStatsOperation::new(self.client)
    }

    pub fn get_settings(&self) -> ClusterGetSettingsOperation<'a> {
        ClusterGetSettingsOperation::new(self.client)
    }

    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/cluster-update-settings.html
    pub fn put_settings<B: Into<Body>>(&self, body: B) -> ClusterPutSettingsOperation<'a> {
        ClusterPutSettingsOperation::new(self.client, body)
    }

    pub fn pending_tasks(&self) -> PendingTasksOperation<'a> {
        PendingTasksOperation::new(self.client)
    }

    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/cluster-allocation-explain.html
    pub fn allocation_explain(&self) -> AllocationExplainOperation<'a> {
        AllocationExplainOperation::new(self.client)
    }

    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/cluster-reroute.html
    pub fn reroute(&self) -> RerouteOperation<'a> {
        RerouteOperation::new(self.client)
    }
}

#[cfg(test)]
pub mod tests {
    use reqwest::Method;

    use serde_json::json;

    use crate::tests::make_client;
    use crate::units::{Duration, HealthStatus, Level};

    #[test]
    fn test_health() {
        let (client, transport) = make_client();
        client
            .cluster()
            .health()
            .with_wait_for_status(HealthStatus::Yellow)
            .with_timeout(Duration::seconds(50))
            .with_level(Level::Indices)
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!(Method::GET, req.method);
        assert_eq!("/_cluster/health", req.path);
        assert_eq!("level=indices&timeout=50s&wait_for_status=yellow", req.query);

        client
            .cluster()
            .health()
            .with_indexes(&["idx1", "idx2"])
            .send()
            .unwrap();
        assert_eq!("/_cluster/health/idx1,idx2", transport.last().path);
    }

    #[test]
    fn test_state() {
        let (client, transport) = make_client();
        client.cluster().state().send().unwrap();
        assert_eq!("/_cluster/state", transport.last().path);

        client
            .cluster()
            .state()
            .with_metrics(&["metadata", "routing_table"])
            .with_indexes(&["foo"])
            .send()
            .unwrap();
        assert_eq!(
            "/_cluster/state/metadata,routing_table/foo",
            transport.last().path
        );

        client
            .cluster()
            .state()
            .with_indexes(&["foo", "bar"])
            .send()
            .unwrap();
        assert_eq!("/_cluster/state/_all/foo,bar", transport.last().path);
    }

    #[test]
    fn test_stats() {
        let (client, transport) = make_client();
        client.cluster().stats().send().unwrap();
        assert_eq!("/_cluster/stats", transport.last().path);

        client
            .cluster()
            .stats()
            .with_node_ids(&["node1", "node2"])
            .send()
            .unwrap();
        assert_eq!("/_cluster/stats/nodes/node1,node2", transport.last().path);
    }

    #[test]
    fn test_settings() {
        let (client, transport) = make_client();
        client
            .cluster()
            .get_settings()
            .with_include_defaults(true)
            .send()
            .unwrap();
        assert_eq!(Method::GET, transport.last().method);
        assert_eq!("/_cluster/settings", transport.last().path);
        assert_eq!("include_defaults=true", transport.last().query);

        client
            .cluster()
            .put_settings(json!({"persistent": {"indices.recovery.max_bytes_per_sec": "50mb"}}))
            .send()
            .unwrap();
        let req = transport.last();
        assert_eq!(Method::PUT, req.method);
        assert_eq!("/_cluster/settings", req.path);
        assert!(req.body.is_some());
    }

    #[test]
    fn test_pending_tasks_and_reroute() {
        let (client, transport) = make_client();
        client.cluster().pending_tasks().send().unwrap();
        assert_eq!("/_cluster/pending_tasks", transport.last().path);

        client
            .cluster()
            .reroute()
            .with_retry_failed(true)
            .with_metric(&["none"])
            .send()
            .unwrap();
        let req = transport.last();
        assert_eq!(Method::POST, req.method);
        assert_eq!("/_cluster/reroute", req.path);
        assert_eq!("metric=none&retry_failed=true", req.query);
    }

    #[test]
    fn test_allocation_explain() {
        let (client, transport) = make_client();
        client
            .cluster()
            .allocation_explain()
            .with_body(json!({"index": "my-index", "shard": 0, "primary": false}))
            .with_include_disk_info(true)
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!("/_cluster/allocation/explain", req.path);
        assert_eq!("include_disk_info=true", req.query);
    }
}
