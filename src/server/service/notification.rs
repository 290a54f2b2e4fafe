//! Shipment notifications.
//!
//! When an order ships, the owners of its recipients are told about it. With a webhook
//! configured the notification is POSTed as JSON on a background task; otherwise it is
//! only logged. Delivery failures are logged and never affect the order.

use serde::Serialize;
use url::Url;

use crate::server::model::order::Order;

/// Body POSTed to the shipment webhook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipmentPayload {
    pub order_id: i32,
    pub status: String,
    pub gift_type: String,
    pub recipient_ids: Vec<i32>,
    pub emails: Vec<String>,
}

impl ShipmentPayload {
    pub fn new(order: &Order, emails: Vec<String>) -> Self {
        Self {
            order_id: order.id,
            status: order.status.as_str().to_string(),
            gift_type: order.gift_type.as_str().to_string(),
            recipient_ids: order.recipient_ids.clone(),
            emails,
        }
    }
}

#[derive(Clone)]
pub struct ShipmentNotifier {
    http_client: reqwest::Client,
    webhook: Option<Url>,
}

impl ShipmentNotifier {
    pub fn new(http_client: reqwest::Client, webhook: Option<Url>) -> Self {
        Self {
            http_client,
            webhook,
        }
    }

    /// Notifies `emails` that `order` has shipped.
    ///
    /// Returns immediately; webhook delivery happens on a spawned task.
    pub fn order_shipped(&self, order: &Order, emails: Vec<String>) {
        let payload = ShipmentPayload::new(order, emails);

        let Some(webhook) = self.webhook.clone() else {
            tracing::info!(
                "Order {} shipped, notifying {}",
                payload.order_id,
                payload.emails.join(", ")
            );
            return;
        };

        let http_client = self.http_client.clone();
        tokio::spawn(async move {
            let order_id = payload.order_id;
            let result = http_client
                .post(webhook)
                .json(&payload)
                .send()
                .await
                .and_then(|response| response.error_for_status());

            match result {
                Ok(_) => tracing::debug!("Delivered shipment notification for order {}", order_id),
                Err(e) => tracing::error!(
                    "Failed to deliver shipment notification for order {}: {}",
                    order_id,
                    e
                ),
            }
        });
    }
}
