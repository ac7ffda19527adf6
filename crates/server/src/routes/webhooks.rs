//! Customer lifecycle webhook handlers.
//!
//! Each delivery is handled to completion before responding:
//!
//! 1. Verify the HMAC signature over the raw body
//! 2. Read the customer ID from the JSON body
//! 3. Skip deliveries already processed (platform retries reuse the ID)
//! 4. Hand the event to the lifecycle adapter
//! 5. Remember the delivery ID on success

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use wishlist::{CustomerEvent, LifecycleOutcome};
use wishlist_core::CustomerId;

use crate::error::AppError;
use crate::state::AppState;
use crate::webhook::{self, SIGNATURE_HEADER, WEBHOOK_ID_HEADER};

/// The part of the customer payload this service reads.
#[derive(Debug, Deserialize)]
struct CustomerPayload {
    id: Option<CustomerId>,
    admin_graphql_api_id: Option<String>,
}

impl CustomerPayload {
    /// The numeric `id`, or the global ID when only that is present.
    fn customer_id(&self) -> Option<CustomerId> {
        self.id.or_else(|| {
            self.admin_graphql_api_id
                .as_deref()
                .and_then(|gid| gid.parse().ok())
        })
    }
}

/// Which lifecycle change a webhook reports.
#[derive(Debug, Clone, Copy)]
enum Topic {
    CustomersCreate,
    CustomersDelete,
}

impl Topic {
    const fn event(self, customer_id: CustomerId) -> CustomerEvent {
        match self {
            Self::CustomersCreate => CustomerEvent::Created { customer_id },
            Self::CustomersDelete => CustomerEvent::Deleted { customer_id },
        }
    }
}

/// Handle `customers/create`.
pub async fn customer_created(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    handle_delivery(&state, &headers, &body, Topic::CustomersCreate).await
}

/// Handle `customers/delete`.
pub async fn customer_deleted(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    handle_delivery(&state, &headers, &body, Topic::CustomersDelete).await
}

#[instrument(skip(state, headers, body))]
async fn handle_delivery(
    state: &AppState,
    headers: &HeaderMap,
    body: &[u8],
    topic: Topic,
) -> Result<StatusCode, AppError> {
    let signature = header_str(headers, SIGNATURE_HEADER)
        .ok_or_else(|| AppError::BadRequest("Missing signature header".into()))?;

    webhook::verify(state.webhook_secret(), body, signature).map_err(|e| {
        warn!(error = %e, "Rejected webhook signature");
        AppError::Unauthorized(e.to_string())
    })?;

    let payload: CustomerPayload = serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Failed to parse payload: {e}")))?;
    let customer_id = payload
        .customer_id()
        .ok_or_else(|| AppError::BadRequest("Payload has no customer id".into()))?;

    let delivery_id = header_str(headers, WEBHOOK_ID_HEADER);
    if let Some(id) = delivery_id
        && state.is_processed(id)
    {
        debug!(delivery_id = id, "Delivery already processed");
        return Ok(StatusCode::OK);
    }

    let event = topic.event(customer_id);
    match state.adapter().handle(&event).await? {
        LifecycleOutcome::Created(wishlist) => {
            info!(customer_id = %customer_id, wishlist_id = %wishlist.id, "Default wishlist created");
        }
        LifecycleOutcome::Deleted { count } => {
            info!(customer_id = %customer_id, count, "Customer wishlists deleted");
        }
    }

    if let Some(id) = delivery_id {
        state.mark_processed(id).await;
    }

    Ok(StatusCode::OK)
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_topic_maps_to_event() {
        let id = CustomerId::new(5);
        assert_eq!(
            Topic::CustomersCreate.event(id),
            CustomerEvent::Created { customer_id: id }
        );
        assert_eq!(
            Topic::CustomersDelete.event(id),
            CustomerEvent::Deleted { customer_id: id }
        );
    }

    #[test]
    fn test_payload_ignores_other_fields() {
        let payload: CustomerPayload =
            serde_json::from_str(r#"{"id": 706405506930370084, "email": "bob@example.com"}"#)
                .unwrap();
        assert_eq!(
            payload.customer_id(),
            Some(CustomerId::new(706_405_506_930_370_084))
        );
    }

    #[test]
    fn test_payload_falls_back_to_global_id() {
        let payload: CustomerPayload = serde_json::from_str(
            r#"{"admin_graphql_api_id": "gid://shopify/Customer/42"}"#,
        )
        .unwrap();
        assert_eq!(payload.customer_id(), Some(CustomerId::new(42)));

        let payload: CustomerPayload =
            serde_json::from_str(r#"{"admin_graphql_api_id": "gid://shopify/Order/42"}"#).unwrap();
        assert_eq!(payload.customer_id(), None);
    }

    #[test]
    fn test_header_str_skips_blank() {
        let mut headers = HeaderMap::new();
        headers.insert(WEBHOOK_ID_HEADER, HeaderValue::from_static("  "));
        assert_eq!(header_str(&headers, WEBHOOK_ID_HEADER), None);
    }
}
