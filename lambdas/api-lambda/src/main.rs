use lambda_http::{run, service_fn, tracing, Error};
use std::sync::Arc;

mod http_handler;
use http_handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // One app state for the process lifetime - clients are built exactly once
    let state = Arc::new(pawtrack_shared::init_state().await);

    run(service_fn(move |event| {
        let state = state.clone();
        async move { function_handler(event, state).await }
    }))
    .await
}
