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

//! Implementation of ElasticSearch Analyze operation

use reqwest::Method;

use crate::{error::EsError, transport::Response, Client};

use crate::operations::common::Params;
use crate::operations::PathBuilder;

use super::Indices;

#[derive(Debug)]
pub struct AnalyzeOperation<'a, 'b> {
    client: &'a Client,
    index: Option<&'b str>,
    params: Params,
}

impl<'a, 'b> AnalyzeOperation<'a, 'b> {
    pub fn new(client: &'a Client) -> Self {
        AnalyzeOperation {
            client,
            index: None,
            params: Params::default(),
        }
    }

    /// Analyzers and normalizers are resolved against this index
    pub fn with_index(&mut self, index: &'b str) -> &mut Self {
        self.index = Some(index);
        self
    }

    // The `text` to analyze and the analyzer, tokenizer or filters to use
    add_body!();

    add_common_options!();

    pub fn send(&mut self) -> Result<Response, EsError> {
        let path = PathBuilder::new()
            .push_opt(self.index)
            .push("_analyze")
            .build()?;
        self.params.send(self.client, Method::POST, path)
    }
}

impl<'a> Indices<'a> {
    /// See: https://www.elastic.co/guide/en/elasticsearch/reference/current/indices-analyze.html
    pub fn analyze<'b>(&self) -> AnalyzeOperation<'a, 'b> {
        AnalyzeOperation::new(self.client)
    }
}
