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

//! Refresh, flush, force-merge and clear cache.  Each one optionally targets
//! a set of indexes, and applies to all indexes if none are given.

use reqwest::Method;

use crate::{error::EsError, transport::Response, Client};

use crate::operations::common::Params;
use crate::operations::PathBuilder;

use super::Indices;

/// Generates an operation of the form `POST [/{index}]/<endpoint>`
macro_rules! maintenance_operation {
    ($name:ident, [$($seg:expr),+]) => {
        #[derive(Debug)]
        pub struct $name<'a, 'b> {
            client: &'a Client,
            indexes: &'b [&'b str],
            params: Params,
        }

        impl<'a, 'b> $name<'a, 'b> {
            pub fn new(client: &'a Client) -> Self {
                $name {
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

            add_common_options!();

            pub fn send(&mut self) -> Result<Response, EsError> {
                let path = PathBuilder::new()
                    .push_multi(self.indexes)
                    $(.push($seg))+
                    .build()?;
                self.params.send(self.client, Method::POST, path)
            }
        }
    };
}

maintenance_operation!(RefreshOperation, ["_refresh"]);
maintenance_operation!(FlushOperation, ["_flush"]);
maintenance_operation!(ForcemergeOperation, ["_forcemerge"]);
maintenance_operation!(ClearCacheOperation, ["_cache", "clear"]);

impl<'a, 'b> FlushOperation<'a, 'b> {
    add_option!(with_force, "force");
    add_option!(with_wait_if_ongoing, "wait_if_ongoing");
}

impl<'a, 'b> ForcemergeOperation<'a, 'b> {
    add_option!(with_flush, "flush");
    add_option!(with_max_num_segments, "max_num_segments");
    add_option!(with_only_expunge_deletes, "only_expunge_deletes");
}

impl<'a, 'b> ClearCacheOperation<'a, 'b> {
    add_list_option!(with_fields, "fields");
    add_option!(with_fielddata, "fielddata");
    add_option!(with_query, "query");
    add_option!(with_request, "request");
}

impl<'a> Indices<'a> {
    /// Refresh
    ///
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/indices-refresh.html
    pub fn refresh<'b>(&self) -> RefreshOperation<'a, 'b> {
        RefreshOperation::new(self.client)
    }

    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/indices-flush.html
    pub fn flush<'b>(&self) -> FlushOperation<'a, 'b> {
        FlushOperation::new(self.client)
    }

    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/indices-forcemerge.html
    pub fn forcemerge<'b>(&self) -> ForcemergeOperation<'a, 'b> {
        ForcemergeOperation::new(self.client)
    }

    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/indices-clearcache.html
    pub fn clear_cache<'b>(&self) -> ClearCacheOperation<'a, 'b> {
        ClearCacheOperation::new(self.client)
    }
}

#[cfg(test)]
pub mod tests {
    use reqwest::Method;

    use crate::tests::make_client;

    #[test]
    fn test_refresh() {
        let (client, transport) = make_client();
        client.indices().refresh().send().unwrap();

        let req = transport.last();
        assert_eq!(Method::POST, req.method);
        assert_eq!("/_refresh", req.path);
        assert!(req.body.is_none());

        client
            .indices()
            .refresh()
            .with_indexes(&["test_idx", "other_idx"])
            .send()
            .unwrap();
        assert_eq!("/test_idx,other_idx/_refresh", transport.last().path);
    }

    #[test]
    fn test_flush() {
        let (client, transport) = make_client();
        client
            .indices()
            .flush()
            .with_indexes(&["idx"])
            .with_wait_if_ongoing(true)
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!("/idx/_flush", req.path);
        assert_eq!("wait_if_ongoing=true", req.query);
    }

    #[test]
    fn test_forcemerge() {
        let (client, transport) = make_client();
        client
            .indices()
            .forcemerge()
            .with_max_num_segments(1)
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!("/_forcemerge", req.path);
        assert_eq!("max_num_segments=1", req.query);
    }

    #[test]
    fn test_clear_cache() {
        let (client, transport) = make_client();
        client
            .indices()
            .clear_cache()
            .with_indexes(&["idx"])
            .with_fields(&["foo", "bar"])
            .with_fielddata(true)
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!("/idx/_cache/clear", req.path);
        assert_eq!("fielddata=true&fields=foo%2Cbar", req.query);
    }
}
