//! Shared types and greeting logic for the greeting lambdas.
//!
//! The runtime bootstrap lives in the binary crates; everything here is
//! plain, synchronous-friendly logic that can be unit tested without a
//! running Lambda environment.

use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use tracing::info;

/// The release version stamped into the greeting.
pub const RELEASE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The structured input record delivered by the runtime per invocation.
///
/// The whole event may be JSON `null`, which is why handlers take
/// `Option<Event>`.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Event {
    /// Name of the person to greet. An absent field becomes an empty string.
    #[serde(default)]
    pub name: String,
}

/// The only failure this handler can produce on its own.
/// Everything else (deserialization, transport) is the runtime's problem.
#[derive(thiserror::Error, Debug)]
pub enum HandlerError {
    /// The runtime delivered a null event where one was required.
    #[error("received nil event")]
    MissingInput,
}

/// Formats the greeting for the given name.
pub fn greeting(name: &str) -> String {
    format!(
        "Hello, {}; We are delighted to have you in Version {}",
        name, RELEASE_VERSION
    )
}

/// The validating handler: fails on a null event, greets otherwise.
///
/// Stateless and free of side effects apart from logging, so concurrent
/// invocations by the runtime need no coordination. The deadline in the
/// context is not observed - the greeting is too cheap to time out.
pub async fn handle_request(event: LambdaEvent<Option<Event>>) -> Result<String, Error> {
    let (payload, ctx) = event.into_parts();

    info!("Handler invoked, request ID: {}", ctx.request_id);

    let event = match payload {
        Some(v) => v,
        None => return Err(HandlerError::MissingInput.into()),
    };

    let message = greeting(&event.name);
    info!("Responding with: {}", message);

    Ok(message)
}
