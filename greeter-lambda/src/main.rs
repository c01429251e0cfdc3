/// The current revision of the greeting lambda: validates the event and
/// greets the caller by name. The logic lives in the `greeter` crate.
use greeter::handle_request;
use lambda_runtime::{service_fn, tracing, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // required to enable CloudWatch error logging by the runtime
    tracing::init_default_subscriber();

    let func = service_fn(handle_request);
    lambda_runtime::run(func).await?;
    Ok(())
}
