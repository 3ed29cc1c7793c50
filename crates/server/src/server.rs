use axum::{
    Router,
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, post},
};
use axum_extra::{
    TypedHeader,
    headers::{Error as AxumError, Header},
    typed_header::TypedHeaderRejection,
};
use ledger::{LedgerStore, ResultLedger};
use tokio::sync::Mutex;

use std::sync::Arc;

use crate::{ServerError, categories, expenses};

static OWNER_HEADER: axum::http::HeaderName =
    axum::http::HeaderName::from_static(api_types::OWNER_HEADER);

#[derive(Clone)]
pub struct ServerState {
    ledger: Arc<Mutex<LedgerStore>>,
}

impl ServerState {
    /// Run `op` against the ledger on the blocking pool.
    ///
    /// Requests of this process are serialized on the mutex; other processes
    /// writing the same file are not.
    pub async fn with_ledger<T, F>(&self, op: F) -> Result<T, ServerError>
    where
        F: FnOnce(&LedgerStore) -> ResultLedger<T> + Send + 'static,
        T: Send + 'static,
    {
        let ledger = self.ledger.clone().lock_owned().await;
        tokio::task::spawn_blocking(move || op(&ledger))
            .await
            .map_err(|err| ServerError::Task(err.to_string()))?
            .map_err(ServerError::from)
    }
}

/// Owner identifier of the caller, inserted by the [`owner`] middleware.
#[derive(Clone, Debug)]
pub struct Owner(pub String);

/// `TypedHeader` for the owner identifier.
///
/// Requests to the expense routes must contain a "ledger-owner" entry in the
/// header. The value is any UTF-8 string and is compared as plaintext.
#[derive(Debug)]
struct OwnerHeader(String);

impl Header for OwnerHeader {
    fn name() -> &'static axum::http::HeaderName {
        &OWNER_HEADER
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, AxumError>
    where
        Self: Sized,
        I: Iterator<Item = &'i axum::http::HeaderValue>,
    {
        let value = values.next().ok_or_else(AxumError::invalid)?;
        let Ok(value) = std::str::from_utf8(value.as_bytes()) else {
            return Err(AxumError::invalid());
        };

        Ok(OwnerHeader(value.to_string()))
    }

    fn encode<E: Extend<axum::http::HeaderValue>>(&self, values: &mut E) {
        match axum::http::HeaderValue::from_bytes(self.0.as_bytes()) {
            Ok(value) => values.extend(std::iter::once(value)),
            Err(_) => tracing::error!("failed to encode ledger-owner header"),
        }
    }
}

async fn owner(
    owner_header: Result<TypedHeader<OwnerHeader>, TypedHeaderRejection>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Ok(TypedHeader(OwnerHeader(owner))) = owner_header else {
        return Err(StatusCode::UNAUTHORIZED);
    };
    if owner.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    request.extensions_mut().insert(Owner(owner));
    Ok(next.run(request).await)
}

/// Build the application router around `ledger`.
pub fn router(ledger: LedgerStore) -> Router {
    let state = ServerState {
        ledger: Arc::new(Mutex::new(ledger)),
    };

    Router::new()
        .route("/expenses", post(expenses::add).get(expenses::list))
        .route("/expenses/export", get(expenses::export))
        .route("/expenses/{index}", delete(expenses::remove))
        .route_layer(middleware::from_fn(owner))
        .route("/categories", get(categories::list))
        .with_state(state)
}

pub async fn run_with_listener(
    ledger: LedgerStore,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!(
        "Server listening on {}, ledger at {}",
        addr,
        ledger.path().display()
    );

    axum::serve(listener, router(ledger)).await
}

pub fn spawn_with_listener(
    ledger: LedgerStore,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(ledger, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
