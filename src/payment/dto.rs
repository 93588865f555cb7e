use serde::{Deserialize, Serialize};

/// Request body for payment verification. Only the amount is checked; the
/// rest is carried for wire compatibility with a real gateway.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentRequest {
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub payment_method_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentResponse {
    pub success: bool,
    pub transaction_id: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_accepts_camel_case_method_id() {
        let body: VerifyPaymentRequest = serde_json::from_value(serde_json::json!({
            "amount": 9.99,
            "currency": "USD",
            "paymentMethodId": "pm_123"
        }))
        .unwrap();
        assert_eq!(body.amount, Some(9.99));
        assert_eq!(body.payment_method_id.as_deref(), Some("pm_123"));
    }

    #[test]
    fn response_serializes_camel_case() {
        let response = VerifyPaymentResponse {
            success: true,
            transaction_id: "mock_abc".into(),
            message: "Payment successful".into(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("transactionId"));
    }
}
