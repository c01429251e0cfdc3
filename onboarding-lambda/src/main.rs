/// A revision of the greeting lambda from before the per-name greeting
/// landed. The request record is still declared, but nothing reads it.
use lambda_runtime::{service_fn, tracing, Error, LambdaEvent};
use serde::Deserialize;
use tracing::info;

#[derive(Deserialize, Debug, Default)]
struct Request {
    #[serde(default)]
    #[allow(dead_code)]
    name: String,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // required to enable CloudWatch error logging by the runtime
    tracing::init_default_subscriber();

    lambda_runtime::run(service_fn(my_handler)).await?;
    Ok(())
}

pub(crate) async fn my_handler(event: LambdaEvent<Option<Request>>) -> Result<String, Error> {
    info!("Handler invoked, request ID: {}", event.context.request_id);

    Ok(format!(
        "Hello, World; We are delighted to have you in Version {}",
        env!("CARGO_PKG_VERSION")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;

    #[tokio::test]
    async fn event_content_does_not_change_the_greeting() {
        let with_name: Option<Request> = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        let without: Option<Request> = serde_json::from_str("null").unwrap();

        let a = my_handler(LambdaEvent::new(with_name, Context::default()))
            .await
            .unwrap();
        let b = my_handler(LambdaEvent::new(without, Context::default()))
            .await
            .unwrap();

        assert_eq!(a, b);
        assert_eq!(a, "Hello, World; We are delighted to have you in Version 1.1.0");
    }
}
