//! Payment cards used for orders.

use serde::{Deserialize, Serialize};

use crate::service::{ServiceBase, impl_paginated, impl_service_base};
use crate::{Paged, Result};

/// A stored card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentCard {
    pub card_id: i64,
    pub last4: String,
    pub brand: String,
    pub created_at: String,
    pub created_at_timestamp: i64,
}

/// Page of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaymentCardsResponse {
    #[serde(skip)]
    pub paged: Paged,
    pub user_id: i64,
    pub payment_cards: Vec<PaymentCard>,
}

impl_paginated!(PaymentCardsResponse);

/// Reply of [`PaymentCardService::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaymentCardDeleted {
    pub card_id: i64,
    pub card_deleted: bool,
}

/// Card registration payload.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewPaymentCard {
    pub number: String,
    pub cvc: String,
    pub exp_month: u8,
    pub exp_year: u16,
}

impl std::fmt::Debug for NewPaymentCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewPaymentCard")
            .field("number", &"***")
            .field("cvc", &"***")
            .field("exp_month", &self.exp_month)
            .field("exp_year", &self.exp_year)
            .finish()
    }
}

/// Payment cards service.
#[derive(Debug, Clone)]
pub struct PaymentCardService {
    base: ServiceBase,
}

impl_service_base!(PaymentCardService);

impl PaymentCardService {
    pub(crate) fn new(base: ServiceBase) -> Self {
        Self { base }
    }

    /// List the cards of the token owner.
    pub async fn list(&self) -> Result<PaymentCardsResponse> {
        self.base.list(&["payment_cards"], &[]).await
    }

    /// Register a card.
    pub async fn create(&self, card: &NewPaymentCard) -> Result<PaymentCard> {
        self.base.post(&["payment_cards"], card).await
    }

    /// Retrieve a card.
    pub async fn retrieve(&self, card_id: i64) -> Result<PaymentCard> {
        self.base
            .get(&["payment_cards", &card_id.to_string()], &[])
            .await
    }

    /// Delete a card.
    pub async fn delete(&self, card_id: i64) -> Result<PaymentCardDeleted> {
        self.base
            .delete(&["payment_cards", &card_id.to_string()])
            .await
    }
}
