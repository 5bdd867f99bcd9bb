// Licensed to the Apache Software Foundation (ASF) under one or more
// contributor license agreements.  See the NOTICE file distributed with
// this work for additional information regarding copyright ownership.
// The ASF licenses this file to You under the Apache License, Version 2.0
// (the "License"); you may not use this file except in compliance with
// the License.  You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

/// Registration Client Sdk Result.
pub type Result<T> = std::result::Result<T, Error>;

/// Registration Client Sdk Error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Deserialization failed: {0}")]
    Deserialization(String),

    /// JSON field present but not of the declared type.
    #[error("field type mismatch: field {0} expects {1}")]
    FieldTypeMismatch(&'static str, &'static str),

    /// Multipart part required by the caller but absent from the form.
    #[error("multipart form has no part named: {0}")]
    MissingPart(String),

    #[error("invalid server address: {0}")]
    InvalidServerAddr(#[from] url::ParseError),

    #[error("http request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("registration server request failed: status:{0}, body:{1}")]
    RegistryRequestFailed(u16, String),

    #[error("no available endpoint for service: {0}")]
    NoAvailableEndpoint(String),
}
