/// An earlier revision of the greeting lambda. It takes whatever JSON the
/// runtime hands over, ignores it and replies with the same line every time.
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::debug;

const GREETING: &str = "Hello from Lambda!";

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_ansi(false)
        .without_time()
        .compact()
        .init();

    if let Err(e) = lambda_runtime::run(service_fn(my_handler)).await {
        debug!("Runtime error: {:?}", e);
        return Err(e);
    }

    Ok(())
}

async fn my_handler(event: LambdaEvent<Value>) -> Result<String, Error> {
    debug!("Event: {:?}", event.payload);

    Ok(GREETING.to_string())
}
