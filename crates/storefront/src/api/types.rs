//! Request and response payloads for the checkout endpoint.

use serde::{Deserialize, Serialize};

use crate::cart::CartLineItem;

/// Body of `POST /api/checkout`.
///
/// The items are the cart's line items verbatim; totals are recomputed
/// server-side from the same data.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutRequest {
    pub items: Vec<CartLineItem>,
    pub shipping: ShippingContact,
}

/// Buyer contact details forwarded to the payment provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingContact {
    pub name: String,
    pub email: String,
}

/// Response from checkout session creation; the session id is handed to
/// the payment redirect layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    pub session_id: String,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use vapemart_core::ProductId;

    use super::*;

    #[test]
    fn test_checkout_request_wire_shape() {
        let request = CheckoutRequest {
            items: vec![CartLineItem {
                id: ProductId::from("p-1"),
                name: "Pod System Y".to_owned(),
                price: dec!(29.99),
                image: String::new(),
                category: "Pod Systems".to_owned(),
                quantity: 2,
            }],
            shipping: ShippingContact {
                name: "Ada Lovelace".to_owned(),
                email: "ada@example.com".to_owned(),
            },
        };

        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["items"][0]["id"], "p-1");
        assert_eq!(json["items"][0]["quantity"], 2);
        assert_eq!(json["shipping"]["email"], "ada@example.com");
    }

    #[test]
    fn test_checkout_session_decodes_camel_case() {
        let session: CheckoutSession =
            serde_json::from_str(r#"{"sessionId": "cs_test_123"}"#).expect("deserialize");
        assert_eq!(session.session_id, "cs_test_123");
    }
}
