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
//! [Snapshot and restore APIs](https://www.elastic.co/guide/en/elasticsearch/reference/current/snapshot-restore-apis.html)

use reqwest::Method;

use crate::{error::EsError, transport::Body, transport::Response, Client};

use super::common::Params;
use super::PathBuilder;

#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    client: &'a Client,
}

impl Client {
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot { client: self }
    }
}

#[derive(Debug)]
pub struct CreateRepositoryOperation<'a, 'b> {
    client: &'a Client,
    repository: &'b str,
    params: Params,
}

impl<'a, 'b> CreateRepositoryOperation<'a, 'b> {
    pub fn new<B: Into<Body>>(client: &'a Client, repository: &'b str, body: B) -> Self {
        CreateRepositoryOperation {
            client,
            repository,
            params: Params::with_body(body),
        }
    }

    add_option!(with_master_timeout, "master_timeout");
    add_option!(with_timeout, "timeout");
    add_option!(with_verify, "verify");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push("_snapshot")
            .param("repository", self.repository)
            .build()?;
        self.params.send(self.client, Method::PUT, path)
    }
}

#[derive(Debug)]
pub struct GetRepositoryOperation<'a, 'b> {
    client: &'a Client,
    repositories: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> GetRepositoryOperation<'a, 'b> {
    pub fn new(client: &'a Client) -> Self {
        GetRepositoryOperation {
            client,
            repositories: &[],
            params: Params::default(),
        }
    }

    pub fn with_repositories(&mut self, repositories: &'b [&'b str]) -> &mut Self {
        self.repositories = repositories;
        self
    }

    add_option!(with_local, "local");
    add_option!(with_master_timeout, "master_timeout");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push("_snapshot")
            .push_multi(self.repositories)
            .build()?;
        self.params.send(self.client, Method::GET, path)
    }
}

#[derive(Debug)]
pub struct DeleteRepositoryOperation<'a, 'b> {
    client: &'a Client,
    repositories: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> DeleteRepositoryOperation<'a, 'b> {
    pub fn new(client: &'a Client, repositories: &'b [&'b str]) -> Self {
        DeleteRepositoryOperation {
            client,
            repositories,
            params: Params::default(),
        }
    }

    add_option!(with_master_timeout, "master_timeout");
    add_option!(with_timeout, "timeout");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push("_snapshot")
            .param_multi("repositories", self.repositories)
            .build()?;
        self.params.send(self.client, Method::DELETE, path)
    }
}

#[derive(Debug)]
pub struct CreateSnapshotOperation<'a, 'b> {
    client: &'a Client,
    repository: &'b str,
    snapshot: &'b str,
    params: Params,
}

impl<'a, 'b> CreateSnapshotOperation<'a, 'b> {
    pub fn new(client: &'a Client, repository: &'b str, snapshot: &'b str) -> Self {
        CreateSnapshotOperation {
            client,
            repository,
            snapshot,
            params: Params::default(),
        }
    }

    // Indexes, feature states and metadata to include
    add_body!();

    add_option!(with_master_timeout, "master_timeout");
    add_option!(with_wait_for_completion, "wait_for_completion");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push("_snapshot")
            .param("repository", self.repository)
            .param("snapshot", self.snapshot)
            .build()?;
        self.params.send(self.client, Method::PUT, path)
    }
}

#[derive(Debug)]
pub struct GetSnapshotOperation<'a, 'b> {
    client: &'a Client,
    repository: &'b str,
    snapshots: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> GetSnapshotOperation<'a, 'b> {
    pub fn new(client: &'a Client, repository: &'b str, snapshots: &'b [&'b str]) -> Self {
        GetSnapshotOperation {
            client,
            repository,
            snapshots,
            params: Params::default(),
        }
    }

    add_option!(with_ignore_unavailable, "ignore_unavailable");
    add_option!(with_include_repository, "include_repository");
    add_option!(with_index_details, "index_details");
    add_option!(with_master_timeout, "master_timeout");
    add_option!(with_verbose, "verbose");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push("_snapshot")
            .param("repository", self.repository)
            .param_multi("snapshots", self.snapshots)
            .build()?;
        self.params.send(self.client, Method::GET, path)
    }
}

#[derive(Debug)]
pub struct DeleteSnapshotOperation<'a, 'b> {
    client: &'a Client,
    repository: &'b str,
    snapshot: &'b str,
    params: Params,
}

impl<'a, 'b> DeleteSnapshotOperation<'a, 'b> {
    pub fn new(client: &'a Client, repository: &'b str, snapshot: &'b str) -> Self {
        DeleteSnapshotOperation {
            client,
            repository,
            snapshot,
            params: Params::default(),
        }
    }

    add_option!(with_master_timeout, "master_timeout");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push("_snapshot")
            .param("repository", self.repository)
            .param("snapshot", self.snapshot)
            .build()?;
        self.params.send(self.client, Method::DELETE, path)
    }
}

#[derive(Debug)]
pub struct RestoreOperation<'a, 'b> {
    client: &'a Client,
    repository: &'b str,
    snapshot: &'b str,
    params: Params,
}

impl<'a, 'b> RestoreOperation<'a, 'b> {
    pub fn new(client: &'a Client, repository: &'b str, snapshot: &'b str) -> Self {
        RestoreOperation {
            client,
            repository,
            snapshot,
            params: Params::default(),
        }
    }

    // Which indexes to restore and how to rename them
    add_body!();

    add_option!(with_master_timeout, "master_timeout");
    add_option!(with_wait_for_completion, "wait_for_completion");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push("_snapshot")
            .param("repository", self.repository)
            .param("snapshot", self.snapshot)
            .push("_restore")
            .build()?;
        self.params.send(self.client, Method::POST, path)
    }
}

/// Status of running snapshots, or of the named ones
#[derive(Debug)]
pub struct SnapshotStatusOperation<'a, 'b> {
    client: &'a Client,
    repository: Option<&'b str>,
    snapshots: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> SnapshotStatusOperation<'a, 'b> {
    pub fn new(client: &'a Client) -> Self {
        SnapshotStatusOperation {
            client,
            repository: None,
            snapshots: &[],
            params: Params::default(),
        }
    }

    pub fn with_repository(&mut self, repository: &'b str) -> &mut Self {
        self.repository = Some(repository);
        self
    }

    /// Ignored unless a repository is also given
    pub fn with_snapshots(&mut self, snapshots: &'b [&'b str]) -> &mut Self {
        self.snapshots = snapshots;
        self
    }

    add_option!(with_ignore_unavailable, "ignore_unavailable");
    add_option!(with_master_timeout, "master_timeout");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let mut path = PathBuilder::new();
        path.push("_snapshot");
        if let Some(repository) = self.repository {
            path.push_opt(Some(repository)).push_multi(self.snapshots);
        }
        path.push("_status");
        self.params.send(self.client, Method::GET, path.build()?)
    }
}

impl<'a> Snapshot<'a> {
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/put-snapshot-repo-api.html
    pub fn create_repository<'b, B: Into<Body>>(
        &self,
        repository: &'b str,
        body: B,
    ) -> CreateRepositoryOperation<'a, 'b> {
        CreateRepositoryOperation::new(self.client, repository, body)
    }

    pub fn get_repository<'b>(&self) -> GetRepositoryOperation<'a, 'b> {
        GetRepositoryOperation::new(self.client)
    }

    pub fn delete_repository<'b>(
        &self,
        repositories: &'b [&'b str],
    ) -> DeleteRepositoryOperation<'a, 'b> {
        DeleteRepositoryOperation::new(self.client, repositories)
    }

    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/create-snapshot-api.html
    pub fn create<'b>(&self, repository: &'b str, snapshot: &'b str) -> CreateSnapshotOperation<'a, 'b> {
        CreateSnapshotOperation::new(self.client, repository, snapshot)
    }

    pub fn get<'b>(&self, repository: &'b str, snapshots: &'b [&'b str]) -> GetSnapshotOperation<'a, 'b> {
        GetSnapshotOperation::new(self.client, repository, snapshots)
    }

    pub fn delete<'b>(&self, repository: &'b str, snapshot: &'b str) -> DeleteSnapshotOperation<'a, 'b> {
        DeleteSnapshotOperation::new(self.client, repository, snapshot)
    }

    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/restore-snapshot-api.html
    pub fn restore<'b>(&self, repository: &'b str, snapshot: &'b str) -> RestoreOperation<'a, 'b> {
        RestoreOperation::new(self.client, repository, snapshot)
    }

    pub fn status<'b>(&self) -> SnapshotStatusOperation<'a, 'b> {
        SnapshotStatusOperation::new(self.client)
    }
}

#[cfg(test)]
pub mod tests {
    use reqwest::Method;

    use serde_json::json;

    use crate::error::EsError;
    use crate::tests::make_client;

    #[test]
    fn test_repositories() {
        let (client, transport) = make_client();
        client
            .snapshot()
            .create_repository(
                "my_backup",
                json!({"type": "fs", "settings": {"location": "my_backup_location"}}),
            )
            .with_verify(false)
            .send()
            .unwrap();
        let req = transport.last();
        assert_eq!(Method::PUT, req.method);
        assert_eq!("/_snapshot/my_backup", req.path);
        assert_eq!("verify=false", req.query);

        client.snapshot().get_repository().send().unwrap();
        assert_eq!("/_snapshot", transport.last().path);

        client
            .snapshot()
            .delete_repository(&["a", "b"])
            .send()
            .unwrap();
        assert_eq!(Method::DELETE, transport.last().method);
        assert_eq!("/_snapshot/a,b", transport.last().path);
    }

    #[test]
    fn test_snapshots() {
        let (client, transport) = make_client();
        client
            .snapshot()
            .create("my_backup", "snapshot_1")
            .with_wait_for_completion(true)
            .send()
            .unwrap();
        let req = transport.last();
        assert_eq!(Method::PUT, req.method);
        assert_eq!("/_snapshot/my_backup/snapshot_1", req.path);
        assert_eq!("wait_for_completion=true", req.query);
        assert!(req.body.is_none());

        client
            .snapshot()
            .get("my_backup", &["snapshot_*"])
            .with_verbose(false)
            .send()
            .unwrap();
        assert_eq!("/_snapshot/my_backup/snapshot_*", transport.last().path);

        client
            .snapshot()
            .delete("my_backup", "snapshot_1")
            .send()
            .unwrap();
        assert_eq!(Method::DELETE, transport.last().method);
    }

    #[test]
    fn test_restore() {
        let (client, transport) = make_client();
        client
            .snapshot()
            .restore("my_backup", "snapshot_1")
            .with_body(json!({"indices": "index_1"}))
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!(Method::POST, req.method);
        assert_eq!("/_snapshot/my_backup/snapshot_1/_restore", req.path);
        assert!(req.body.is_some());
    }

    #[test]
    fn test_status() {
        let (client, transport) = make_client();
        client.snapshot().status().send().unwrap();
        assert_eq!("/_snapshot/_status", transport.last().path);

        client
            .snapshot()
            .status()
            .with_snapshots(&["ignored"])
            .send()
            .unwrap();
        assert_eq!("/_snapshot/_status", transport.last().path);

        client
            .snapshot()
            .status()
            .with_repository("my_backup")
            .with_snapshots(&["snapshot_1"])
            .send()
            .unwrap();
        assert_eq!(
            "/_snapshot/my_backup/snapshot_1/_status",
            transport.last().path
        );
    }

    #[test]
    fn test_delete_requires_snapshot() {
        let (client, transport) = make_client();
        match client.snapshot().delete("backups", "").send() {
            Err(EsError::EsError(msg)) => assert_eq!("snapshot must not be empty", msg),
            other => panic!("unexpected: {:?}", other),
        }

        let result = client.snapshot().delete_repository(&[]).send();
        assert!(matches!(result, Err(EsError::EsError(_))));
        assert_eq!(0, transport.count());

        client
            .snapshot()
            .delete("backups", "nightly-2030.01.01")
            .send()
            .unwrap();
        assert_eq!(1, transport.count());
        assert_eq!(
            "/_snapshot/backups/nightly-2030.01.01",
            transport.last().path
        );
    }
}
