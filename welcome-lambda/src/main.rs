/// A revision of the greeting lambda that was used for local testing.
/// The event content does not matter - the reply is always the same.
use lambda_runtime::{service_fn, Error, LambdaEvent, Runtime};
use serde_json::Value;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // minimal logging to keep it simple
    // intended to run locally only
    tracing_subscriber::fmt()
        .without_time()
        .with_ansi(true) // the color codes work in the terminal only
        .with_target(false)
        .init();

    // init the runtime directly to avoid the extra logging layer
    let runtime = Runtime::new(service_fn(my_handler));
    runtime.run().await?;

    Ok(())
}

pub(crate) async fn my_handler(event: LambdaEvent<Value>) -> Result<String, Error> {
    info!("Handler invoked, request ID: {}", event.context.request_id);

    Ok("Hello; We are delighted to have you".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use serde_json::json;

    #[tokio::test]
    async fn greeting_is_fixed_regardless_of_event() {
        for payload in [Value::Null, json!({}), json!({"name": "Ada"})] {
            let event = LambdaEvent::new(payload, Context::default());
            assert_eq!(
                my_handler(event).await.unwrap(),
                "Hello; We are delighted to have you"
            );
        }
    }
}
