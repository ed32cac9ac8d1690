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

//! The task management API.  Task IDs take the form `node_id:task_number`.

use reqwest::Method;

use crate::{error::EsError, transport::Response, Client};

use super::common::Params;
use super::PathBuilder;

#[derive(Debug, Clone, Copy)]
pub struct Tasks<'a> {
    client: &'a Client,
}

impl Client {
    pub fn tasks(&self) -> Tasks<'_> {
        Tasks { client: self }
    }
}

#[derive(Debug)]
pub struct ListTasksOperation<'a> {
    client: &'a Client,
    params: Params,
}

impl<'a> ListTasksOperation<'a> {
    pub fn new(client: &'a Client) -> Self {
        ListTasksOperation {
            client,
            params: Params::default(),
        }
    }

    add_list_option!(with_actions, "actions");
    add_option!(with_detailed, "detailed");
    add_option!(with_group_by, "group_by");
    add_list_option!(with_nodes, "nodes");
    add_option!(with_parent_task_id, "parent_task_id");
    add_option!(with_timeout, "timeout");
    add_option!(with_wait_for_completion, "wait_for_completion");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        self.params
            .send(self.client, Method::GET, "/_tasks".to_owned())
    }
}

#[derive(Debug)]
pub struct GetTaskOperation<'a, 'b> {
    client: &'a Client,
    task_id: &'b str,
    params: Params,
}

impl<'a, 'b> GetTaskOperation<'a, 'b> {
    pub fn new(client: &'a Client, task_id: &'b str) -> Self {
        GetTaskOperation {
            client,
            task_id,
            params: Params::default(),
        }
    }

    add_option!(with_timeout, "timeout");
    add_option!(with_wait_for_completion, "wait_for_completion");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push("_tasks")
            .param("task_id", self.task_id)
            .build()?;
        self.params.send(self.client, Method::GET, path)
    }
}

/// Cancel one task, or every task matching the filters
#[derive(Debug)]
pub struct CancelTaskOperation<'a, 'b> {
    client: &'a Client,
    task_id: Option<&'b str>,
    params: Params,
}

impl<'a, 'b> CancelTaskOperation<'a, 'b> {
    pub fn new(client: &'a Client) -> Self {
        CancelTaskOperation {
            client,
            task_id: None,
            params: Params::default(),
        }
    }

    pub fn with_task_id(&mut self, task_id: &'b str) -> &mut Self {
        self.task_id = Some(task_id);
        self
    }

    add_list_option!(with_actions, "actions");
    add_list_option!(with_nodes, "nodes");
    add_option!(with_parent_task_id, "parent_task_id");
    add_option!(with_wait_for_completion, "wait_for_completion");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push("_tasks")
            .push_opt(self.task_id)
            .push("_cancel")
            .build()?;
        self.params.send(self.client, Method::POST, path)
    }
}

impl<'a> Tasks<'a> {
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/tasks.html
    pub fn list(&self) -> ListTasksOperation<'a> {
        ListTasksOperation::new(self.client)
    }

    pub fn get<'b>(&self, task_id: &'b str) -> GetTaskOperation<'a, 'b> {
        GetTaskOperation::new(self.client, task_id)
    }

    pub fn cancel<'b>(&self) -> CancelTaskOperation<'a, 'b> {
        CancelTaskOperation::new(self.client)
    }
}

#[cfg(test)]
pub mod tests {
    use reqwest::Method;

    use crate::tests::make_client;
    use crate::units::GroupBy;

    #[test]
    fn test_list() {
        let (client, transport) = make_client();
        client
            .tasks()
            .list()
            .with_actions(&["*search"])
            .with_detailed(true)
            .with_group_by(GroupBy::Parents)
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!(Method::GET, req.method);
        assert_eq!("/_tasks", req.path);
        assert_eq!("actions=*search&detailed=true&group_by=parents", req.query);
    }

    #[test]
    fn test_get() {
        let (client, transport) = make_client();
        client
            .tasks()
            .get("oTUltX4IQMOUUVeiohTt8A:124")
            .with_wait_for_completion(true)
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!("/_tasks/oTUltX4IQMOUUVeiohTt8A:124", req.path);
        assert_eq!("wait_for_completion=true", req.query);
    }

    #[test]
    fn test_cancel() {
        let (client, transport) = make_client();
        client
            .tasks()
            .cancel()
            .with_task_id("oTUltX4IQMOUUVeiohTt8A:12345")
            .send()
            .unwrap();
        assert_eq!(Method::POST, transport.last().method);
        assert_eq!(
            "/_tasks/oTUltX4IQMOUUVeiohTt8A:12345/_cancel",
            transport.last().path
        );

        client
            .tasks()
            .cancel()
            .with_nodes(&["nodeId1", "nodeId2"])
            .with_actions(&["*reindex"])
            .send()
            .unwrap();
        let req = transport.last();
        assert_eq!("/_tasks/_cancel", req.path);
        assert_eq!("actions=*reindex&nodes=nodeId1%2CnodeId2", req.query);
    }
}
