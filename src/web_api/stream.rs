//! Alert push channel (server-sent events)
//!
//! Each open connection holds one alert-bus subscription. Published alerts
//! arrive as named `alerta` events; a named `ping` event with an empty
//! object payload goes out every 25 seconds so intermediaries don't drop
//! the idle connection. There is no replay: clients that want history poll
//! `GET /api/alertas`.

use crate::alert_bus::AlertBus;
use crate::alerta::Alerta;
use crate::auth::AuthUser;
use crate::state::AppState;
use axum::extract::State;
use axum::response::sse::{Event, Sse};
use futures::stream::Stream;
use futures::StreamExt;
use std::convert::Infallible;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_stream::wrappers::IntervalStream;
use uuid::Uuid;

/// Keep-alive ping cadence
const PING_INTERVAL: Duration = Duration::from_secs(25);

/// One client's bus subscription, deregistered when the connection drops
struct AlertSubscription {
    bus: Arc<AlertBus>,
    id: Uuid,
    rx: mpsc::UnboundedReceiver<Alerta>,
}

impl Stream for AlertSubscription {
    type Item = Alerta;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().rx.poll_recv(cx)
    }
}

impl Drop for AlertSubscription {
    fn drop(&mut self) {
        // The SSE body is dropped by the transport when the client goes
        // away, possibly mid-broadcast; the bus mutation happens on a
        // spawned task since Drop cannot await.
        let bus = self.bus.clone();
        let id = self.id;
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                bus.unsubscribe(&id).await;
            });
        }
    }
}

/// `GET /api/alertas/stream`
pub async fn alert_stream(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let (id, rx) = state.alert_bus.subscribe().await;
    let subscription = AlertSubscription {
        bus: state.alert_bus.clone(),
        id,
        rx,
    };

    let alertas = subscription.filter_map(|alerta| async move {
        match Event::default().event("alerta").json_data(&alerta) {
            Ok(event) => Some(Ok(event)),
            Err(e) => {
                tracing::error!(alerta_id = alerta.id, error = %e, "Failed to serialize alert event");
                None
            }
        }
    });

    let start = tokio::time::Instant::now() + PING_INTERVAL;
    let pings = IntervalStream::new(tokio::time::interval_at(start, PING_INTERVAL))
        .map(|_| Ok(Event::default().event("ping").data("{}")));

    Sse::new(futures::stream::select(alertas, pings))
}
