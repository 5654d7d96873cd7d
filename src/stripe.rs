//! Payment processor client.
//!
//! The processor is consumed through a single operation: create a payment
//! intent for an amount in minor units. [`StripeClient`] is the thin
//! form-encoded HTTP client used in production; the mock behind
//! `test-utils` records requested amounts for the tests.

use anyhow::anyhow;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::config::stripe::StripeConfig;
use crate::utils::errors::AppError;

/// Processor-side object representing a pending charge. `client_secret` is
/// the only field the API exposes to callers.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
    pub amount: i64,
    pub currency: String,
}

#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Creates a payment intent for `amount` minor units of `currency`.
    async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentIntent, AppError>;
}

#[derive(Clone)]
pub struct StripeClient {
    http: reqwest::Client,
    secret_key: String,
    api_base: String,
}

impl StripeClient {
    pub fn new(config: &StripeConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key: config.secret_key.clone(),
            api_base: config.api_base.clone(),
        }
    }
}

#[async_trait]
impl PaymentProvider for StripeClient {
    async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentIntent, AppError> {
        let url = format!("{}/v1/payment_intents", self.api_base);

        let form = [
            ("amount", amount.to_string()),
            ("currency", currency.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await
            .map_err(|e| AppError::upstream(anyhow!("payment processor unreachable: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Payment processor rejected the request");
            return Err(AppError::upstream(anyhow!(
                "payment processor rejected the request"
            )));
        }

        response
            .json::<PaymentIntent>()
            .await
            .map_err(|e| AppError::upstream(anyhow!("invalid payment processor response: {}", e)))
    }
}

/// Deterministic provider for tests: never touches the network and keeps
/// every requested amount.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Default)]
pub struct MockPaymentProvider {
    requests: std::sync::Mutex<Vec<(i64, String)>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockPaymentProvider {
    pub fn amounts(&self) -> Vec<i64> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(amount, _)| *amount)
            .collect()
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn create_payment_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentIntent, AppError> {
        self.requests
            .lock()
            .unwrap()
            .push((amount, currency.to_string()));

        Ok(PaymentIntent {
            id: format!("pi_test_{amount}"),
            client_secret: format!("pi_test_{amount}_secret_test"),
            amount,
            currency: currency.to_string(),
        })
    }
}
