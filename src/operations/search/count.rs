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

//! Implementations of the Count API

use reqwest::Method;

use crate::{error::EsError, transport::Response, Client};

use crate::operations::common::Params;
use crate::operations::PathBuilder;

/// Representing a count operation
#[derive(Debug)]
pub struct CountOperation<'a, 'b> {
    client: &'a Client,
    indexes: &'b [&'b str],
    params: Params,
}

impl<'a, 'b> CountOperation<'a, 'b> {
    pub fn new(client: &'a Client) -> CountOperation<'a, 'b> {
        CountOperation {
            client,
            indexes: &[],
            params: Params::default(),
        }
    }

    pub fn with_indexes(&mut self, indexes: &'b [&'b str]) -> &mut Self {
        self.indexes = indexes;
        self
    }

    add_body!();

    add_option!(with_query, "q");

    add_option!(with_allow_no_indices, "allow_no_indices");
    add_option!(with_analyze_wildcard, "analyze_wildcard");
    add_option!(with_analyzer, "analyzer");
    add_option!(with_default_operator, "default_operator");
    add_option!(with_df, "df");
    add_option!(with_expand_wildcards, "expand_wildcards");
    add_option!(with_ignore_throttled, "ignore_throttled");
    add_option!(with_ignore_unavailable, "ignore_unavailable");
    add_option!(with_lenient, "lenient");
    add_option!(with_min_score, "min_score");
    add_option!(with_preference, "preference");
    add_list_option!(with_routing, "routing");
    add_option!(with_terminate_after, "terminate_after");

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push_multi(self.indexes)
            .push("_count")
            .build()?;
        self.params.send(self.client, Method::POST, path)
    }
}

impl Client {
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/search-count.html
    pub fn count<'a, 'b>(&'a self) -> CountOperation<'a, 'b> {
        CountOperation::new(self)
    }
}

#[cfg(test)]
pub mod tests {
    use reqwest::Method;

    use crate::tests::make_client;
    use crate::units::DefaultOperator;

    #[test]
    fn test_count() {
        let (client, transport) = make_client();
        client
            .count()
            .with_indexes(&["test_count"])
            .with_query("str_field:B456")
            .with_default_operator(DefaultOperator::And)
            .with_min_score(0.5)
            .send()
            .unwrap();

        let req = transport.last();
        assert_eq!(Method::POST, req.method);
        assert_eq!("/test_count/_count", req.path);
        assert_eq!(
            "default_operator=AND&min_score=0.5&q=str_field%3AB456",
            req.query
        );
    }
}
