use std::collections::HashMap;
use std::time::Duration;

use lazy_static::lazy_static;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::api::error::Error::Deserialization;
use crate::api::error::Error::NoAvailableEndpoint;
use crate::api::error::Error::RegistryRequestFailed;
use crate::api::error::Result;
use crate::api::model::{Endpoint, Model};
use crate::api::props::ClientProps;
use crate::api::registry::{AsyncFuture, EndpointChooser, RegistryService};
use crate::common::executor;
use crate::registry::chooser::RandomEndpointChooser;

mod chooser;
mod heartbeat;

pub(self) mod constants {

    pub const HEADER_CLIENT_VERSION: &str = "Client-Version";

    pub const HEADER_CONTENT_TYPE: &str = "Content-Type";

    pub const CONTENT_TYPE_JSON: &str = "application/json";

    pub mod paths {
        pub const REGISTER: &str = "api/register";

        pub fn service_endpoint(service_name: &str) -> String {
            format!("api/services/{service_name}/endpoint")
        }

        pub fn service_endpoints(service_name: &str) -> String {
            format!("api/services/{service_name}/endpoints")
        }
    }
}

lazy_static! {
    static ref LOCAL_IP: String =
        local_ipaddress::get().unwrap_or_else(|| String::from("127.0.0.1"));
}

#[derive(Clone)]
pub(crate) struct RestRegistryService {
    http_client: Client,
    base_url: Url,
    app_name: String,
    port: u16,
    client_version: String,
    labels: HashMap<String, String>,
}

impl RestRegistryService {
    pub(crate) fn new(client_props: ClientProps) -> Result<Self> {
        let base_url = Url::parse(&format!("http://{}/", client_props.server_addr))?;
        Ok(RestRegistryService {
            http_client: Client::new(),
            base_url,
            app_name: client_props.app_name,
            port: client_props.port,
            client_version: client_props.client_version,
            labels: client_props.labels,
        })
    }

    /// Fills the defaults the registration server expects: `<ip>:<port>` as
    /// the endpoint address and `<app>_<ip>_<port>` as the instance id.
    fn filled_endpoint(&self, mut endpoint: Endpoint) -> Endpoint {
        if !endpoint.endpoint_is_set() {
            endpoint.set_endpoint(format!("{}:{}", *LOCAL_IP, self.port));
        }
        if !endpoint.instance_id_is_set() {
            endpoint.set_instance_id(format!("{}_{}_{}", self.app_name, *LOCAL_IP, self.port));
        }
        endpoint
    }

    fn get_task(&self, path: String) -> AsyncFuture<String> {
        let http_client = self.http_client.clone();
        let client_version = self.client_version.clone();
        let url = self.base_url.join(&path);

        let task = async move {
            let url = url?;
            debug!("registry GET {url}");
            let response = http_client
                .get(url)
                .header(constants::HEADER_CLIENT_VERSION, client_version)
                .send()
                .await?;
            let status = response.status();
            let body = response.text().await?;
            if !status.is_success() {
                return Err(RegistryRequestFailed(status.as_u16(), body));
            }
            Ok(body)
        };
        Box::new(Box::pin(task))
    }
}

impl RegistryService for RestRegistryService {
    fn register_endpoint(&self, endpoint: Endpoint) -> Result<()> {
        let future = self.register_endpoint_async(endpoint);
        executor::block_on(future)
    }

    fn register_endpoint_async(&self, endpoint: Endpoint) -> AsyncFuture<()> {
        let endpoint = self.filled_endpoint(endpoint);
        let http_client = self.http_client.clone();
        let client_version = self.client_version.clone();
        let labels = self.labels.clone();
        let url = self.base_url.join(constants::paths::REGISTER);

        Box::new(Box::pin(async move {
            endpoint.validate()?;
            let body = serde_json::to_string(&endpoint)?;

            let url = url?;
            debug!("registry POST {url} body={body}");
            let mut request = http_client
                .post(url)
                .header(constants::HEADER_CLIENT_VERSION, client_version)
                .header(constants::HEADER_CONTENT_TYPE, constants::CONTENT_TYPE_JSON)
                .body(body);
            for (name, value) in labels.iter() {
                request = request.header(name.as_str(), value.as_str());
            }
            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                let body = response.text().await?;
                return Err(RegistryRequestFailed(status.as_u16(), body));
            }

            info!(
                "instance registered as {}",
                endpoint.instance_id().map(String::as_str).unwrap_or("")
            );
            Ok(())
        }))
    }

    fn register_endpoint_with_heartbeat(&self, endpoint: Endpoint, period: Duration) -> Result<()> {
        let endpoint = self.filled_endpoint(endpoint);
        let future = self.register_endpoint_async(endpoint.clone());
        executor::block_on(future)?;
        // detached, stops itself after repeated failures
        let _ = heartbeat::schedule(self.clone(), endpoint, period);
        Ok(())
    }

    fn deregister_endpoint(&self, endpoint: Endpoint) -> Result<()> {
        let future = self.deregister_endpoint_async(endpoint);
        executor::block_on(future)
    }

    fn deregister_endpoint_async(&self, endpoint: Endpoint) -> AsyncFuture<()> {
        let endpoint = self.filled_endpoint(endpoint);
        let http_client = self.http_client.clone();
        let client_version = self.client_version.clone();
        let url = self.base_url.join(constants::paths::REGISTER);

        Box::new(Box::pin(async move {
            let body = serde_json::to_string(&endpoint)?;

            let url = url?;
            debug!("registry DELETE {url} body={body}");
            let response = http_client
                .delete(url)
                .header(constants::HEADER_CLIENT_VERSION, client_version)
                .header(constants::HEADER_CONTENT_TYPE, constants::CONTENT_TYPE_JSON)
                .body(body)
                .send()
                .await?;
            let status = response.status();
            if !status.is_success() {
                let body = response.text().await?;
                return Err(RegistryRequestFailed(status.as_u16(), body));
            }

            info!(
                "instance deregistered as {}",
                endpoint.instance_id().map(String::as_str).unwrap_or("")
            );
            Ok(())
        }))
    }

    fn get_endpoint(&self, service_name: String) -> Result<Endpoint> {
        let future = self.get_endpoint_async(service_name);
        executor::block_on(future)
    }

    fn get_endpoint_async(&self, service_name: String) -> AsyncFuture<Endpoint> {
        let get_task = self.get_task(constants::paths::service_endpoint(&service_name));

        Box::new(Box::pin(async move {
            let body = get_task.await?;
            let json = serde_json::from_str(&body)?;
            Endpoint::from_json(&json)
        }))
    }

    fn get_endpoints(&self, service_name: String) -> Result<Vec<Endpoint>> {
        let future = self.get_endpoints_async(service_name);
        executor::block_on(future)
    }

    fn get_endpoints_async(&self, service_name: String) -> AsyncFuture<Vec<Endpoint>> {
        let get_task = self.get_task(constants::paths::service_endpoints(&service_name));

        Box::new(Box::pin(async move {
            let body = get_task.await?;
            let json: serde_json::Value = serde_json::from_str(&body)?;
            let values = match json.as_array() {
                Some(values) => values,
                None => {
                    return Err(Deserialization(format!(
                        "expected a json array of endpoints, got: {json}"
                    )))
                }
            };
            values.iter().map(Endpoint::from_json).collect()
        }))
    }

    fn select_one_endpoint(&self, service_name: String) -> Result<Endpoint> {
        let future = self.select_one_endpoint_async(service_name);
        executor::block_on(future)
    }

    fn select_one_endpoint_async(&self, service_name: String) -> AsyncFuture<Endpoint> {
        let get_endpoints_task = self.get_endpoints_async(service_name.clone());

        Box::new(Box::pin(async move {
            let endpoints = get_endpoints_task.await?;
            let chooser = RandomEndpointChooser::new(service_name.clone(), endpoints)?;
            chooser.choose().ok_or(NoAvailableEndpoint(service_name))
        }))
    }
}
