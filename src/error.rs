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

//! Errors and error conversion code for the `rs_esapi` crate

use std::io;

use reqwest::StatusCode;

// Error handling

/// Errors that can occur include IO and parsing errors, transport errors,
/// cancellation, as well as logic errors from this library.
///
/// A non-2xx response from ElasticSearch is *not* an error at this layer, see
/// [`Response::error_for_status`](../transport/struct.Response.html#method.error_for_status)
/// for opting in to that behaviour.
#[derive(Debug, thiserror::Error)]
pub enum EsError {
    /// An internal error from this library
    #[error("{0}")]
    EsError(String),

    /// A non-2xx response, only produced on request
    #[error("{status} - {body}")]
    EsServerError { status: StatusCode, body: String },

    /// The request's context was cancelled
    #[error("request cancelled")]
    Cancelled,

    /// The request's context deadline passed
    #[error("deadline exceeded")]
    DeadlineExceeded,

    /// Miscellaneous error from the HTTP library
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),

    /// Miscellaneous IO error
    #[error(transparent)]
    IoError(#[from] io::Error),

    /// Miscellaneous JSON decoding error
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    /// A malformed ElasticSearch URL
    #[error(transparent)]
    UrlError(#[from] url::ParseError),
}
