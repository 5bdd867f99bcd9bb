use std::time::Duration;

use futures::Future;

use crate::api::error::Result;
use crate::api::model::Endpoint;
use crate::api::props::ClientProps;
use crate::registry::RestRegistryService;

pub type AsyncFuture<T> = Box<dyn Future<Output = Result<T>> + Send + Unpin + 'static>;

pub trait EndpointChooser {
    fn choose(self) -> Option<Endpoint>;
}

/// Talks to the registration server: registers this instance and looks up
/// the endpoints of services it can communicate with.
pub trait RegistryService {
    /// Registers `endpoint` as this instance's record. An unset endpoint
    /// address is filled in from the local IP before sending.
    fn register_endpoint(&self, endpoint: Endpoint) -> Result<()>;

    fn register_endpoint_async(&self, endpoint: Endpoint) -> AsyncFuture<()>;

    /// Registers `endpoint`, then keeps the registration alive by re-sending
    /// it every `period` from a background task. After too many consecutive
    /// failures the task deregisters the instance and stops.
    fn register_endpoint_with_heartbeat(&self, endpoint: Endpoint, period: Duration) -> Result<()>;

    /// Removes `endpoint` from the registration server, e.g. before this
    /// instance shuts down.
    fn deregister_endpoint(&self, endpoint: Endpoint) -> Result<()>;

    fn deregister_endpoint_async(&self, endpoint: Endpoint) -> AsyncFuture<()>;

    /// One endpoint of `service_name`, chosen by the server.
    fn get_endpoint(&self, service_name: String) -> Result<Endpoint>;

    fn get_endpoint_async(&self, service_name: String) -> AsyncFuture<Endpoint>;

    /// All known endpoints of `service_name`.
    fn get_endpoints(&self, service_name: String) -> Result<Vec<Endpoint>>;

    fn get_endpoints_async(&self, service_name: String) -> AsyncFuture<Vec<Endpoint>>;

    /// One endpoint of `service_name`, chosen client-side at random.
    fn select_one_endpoint(&self, service_name: String) -> Result<Endpoint>;

    fn select_one_endpoint_async(&self, service_name: String) -> AsyncFuture<Endpoint>;
}

pub struct RegistryServiceBuilder {
    client_props: ClientProps,
}

impl RegistryServiceBuilder {
    pub fn new(client_props: ClientProps) -> Self {
        RegistryServiceBuilder { client_props }
    }

    pub fn build(self) -> Result<impl RegistryService> {
        RestRegistryService::new(self.client_props)
    }

    pub async fn build_async(self) -> Result<impl RegistryService> {
        RestRegistryService::new(self.client_props)
    }
}

impl Default for RegistryServiceBuilder {
    fn default() -> Self {
        RegistryServiceBuilder {
            client_props: ClientProps::new(),
        }
    }
}
