use futures::Future;
use lazy_static::lazy_static;
use tokio::{
    runtime::{Builder, Runtime},
    task::JoinHandle,
    time::{interval, Duration},
};

use std::thread::available_parallelism;

lazy_static! {
    static ref RT: Runtime = Builder::new_multi_thread()
        .enable_all()
        .worker_threads(available_parallelism().unwrap().get() * 2 + 1)
        .thread_name("registration-client-thread-pool")
        .build()
        .unwrap();
}

pub fn block_on<F>(future: F) -> F::Output
where
    F: Future,
{
    RT.block_on(future)
}

pub fn schedule_at_fixed_delay<Fut>(
    func: impl Fn() -> Option<Fut> + Send + 'static,
    duration: Duration,
) -> JoinHandle<()>
where
    Fut: Future + Send + 'static,
{
    RT.spawn(async move {
        let mut interval = interval(duration);
        loop {
            interval.tick().await;
            let future = func();
            if future.is_none() {
                break;
            }
            let future = future.unwrap();
            future.await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_on() {
        let ret = block_on(async move { 5 });
        assert_eq!(ret, 5);
    }

    #[test]
    fn test_schedule_at_fixed_delay() {
        let handler = schedule_at_fixed_delay(
            || {
                Some(async move {
                    println!("test schedule at fixed delay");
                })
            },
            Duration::from_millis(100),
        );

        std::thread::sleep(core::time::Duration::from_millis(300));
        handler.abort();
        println!("task has been canceled!")
    }
}
