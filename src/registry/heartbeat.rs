use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::api::model::Endpoint;
use crate::api::registry::RegistryService;
use crate::common::executor;
use crate::registry::RestRegistryService;

const MAX_HEARTBEAT_TRIES: u32 = 5;

/// Keeps `endpoint` registered by re-sending the registration every
/// `period`. Consecutive failures are counted; any success resets the
/// count. After `MAX_HEARTBEAT_TRIES` consecutive failures the task
/// deregisters the instance and stops.
pub(crate) fn schedule(
    service: RestRegistryService,
    endpoint: Endpoint,
    period: Duration,
) -> JoinHandle<()> {
    let failures = Arc::new(AtomicU32::new(0));

    executor::schedule_at_fixed_delay(
        move || {
            if failures.load(Ordering::Relaxed) >= MAX_HEARTBEAT_TRIES {
                return None;
            }

            let register_task = service.register_endpoint_async(endpoint.clone());
            let deregister_task = service.deregister_endpoint_async(endpoint.clone());
            let failures = failures.clone();
            Some(async move {
                match register_task.await {
                    Ok(()) => {
                        failures.store(0, Ordering::Relaxed);
                        debug!("heartbeat sent to registration server");
                    }
                    Err(e) => {
                        let tries = failures.fetch_add(1, Ordering::Relaxed) + 1;
                        error!("heartbeat error: {e:?}, retry #{tries}");
                        if tries >= MAX_HEARTBEAT_TRIES {
                            warn!(
                                "heartbeat giving up after {tries} consecutive failures, \
                                 deregistering instance"
                            );
                            if let Err(e) = deregister_task.await {
                                error!("deregister on heartbeat give-up error: {e:?}");
                            }
                        }
                    }
                }
            })
        },
        period,
    )
}
