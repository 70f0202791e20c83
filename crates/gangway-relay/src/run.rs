//! The subscription loop.

use futures::{Stream, StreamExt};
use gangway_common::error::{GangwayError, Result};
use gangway_common::types::RuntimeEvent;

use crate::dispatch::Dispatcher;
use crate::sink::EventSink;

/// Drives the relay: one dispatch per event on `events`, until the
/// stream fails or `shutdown` resolves.
///
/// Events are dispatched one at a time in stream order. Recoverable
/// per-event errors (malformed payloads) are logged and skipped; a
/// transport failure or unexpected end of stream is fatal and returned
/// to the caller. A resolved `shutdown` future ends the loop cleanly so
/// the caller can release the sink.
///
/// # Errors
///
/// Returns [`GangwayError::EventStream`] (or the stream's own fatal
/// error) if the subscription breaks; never returns an error for a
/// failed delivery.
pub async fn run<St, S>(
    mut events: St,
    dispatcher: &Dispatcher<S>,
    shutdown: impl Future<Output = ()>,
) -> Result<()>
where
    St: Stream<Item = Result<RuntimeEvent>> + Unpin,
    S: EventSink,
{
    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            () = &mut shutdown => {
                tracing::info!("shutdown signal received, stopping relay");
                return Ok(());
            }
            item = events.next() => match item {
                Some(Ok(event)) => dispatcher.dispatch(&event).await,
                Some(Err(err)) if err.is_recoverable() => {
                    tracing::warn!(error = %err, "skipping undeliverable runtime event");
                }
                Some(Err(err)) => return Err(err),
                None => {
                    return Err(GangwayError::EventStream {
                        message: "event stream ended unexpectedly".to_owned(),
                    });
                }
            }
        }
    }
}
