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

#![deny(rust_2018_idioms, clippy::disallowed_methods, clippy::disallowed_types)]

//! # Registration client in Rust
//!
//! Client for the registration server: register this instance and look up
//! the endpoints of services it can talk to.
//!
//! ## Add Dependency
//!
//! Add the dependency in `Cargo.toml`:
//! - If you need sync API, maybe `futures::executor::block_on(future_fn)`
//! ```toml
//! [dependencies]
//! registration-client-sdk = { version = "0.1" }
//! ```
//!
//! ## General Configurations and Initialization
//!
//! ### Example of Registry
//!
//! ```ignore
//!  let registry_service = registration_client_sdk::api::registry::RegistryServiceBuilder::new(
//!        registration_client_sdk::api::props::ClientProps::new()
//!           .server_addr("127.0.0.1:8761")
//!           .app_name("todo-your-app-name"),
//!   )
//!   .build()?;
//! ```
//!

/// Registration client API
pub mod api;

mod common;
mod registry;

#[cfg(test)]
mod test_log {
    use std::sync::Once;

    use tracing::metadata::LevelFilter;

    static LOGGER_INIT: Once = Once::new();

    pub(crate) fn setup_log() {
        LOGGER_INIT.call_once(|| {
            tracing_subscriber::fmt()
                .with_thread_names(true)
                .with_file(true)
                .with_level(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_max_level(LevelFilter::DEBUG)
                .init()
        });
    }
}
