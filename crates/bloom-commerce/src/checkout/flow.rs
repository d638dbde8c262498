//! Checkout flow state machine.

use crate::cart::Cart;
use crate::checkout::{ContactInfo, DeliveryInfo, Order};
use crate::error::CommerceError;
use crate::ids::CheckoutId;
use serde::{Deserialize, Serialize};

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutStep {
    /// Contact information.
    Contact,
    /// Delivery address, date, and window.
    Delivery,
    /// Payment details.
    Payment,
    /// Order review before submission.
    Review,
    /// Checkout complete.
    Complete,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Contact => "contact",
            CheckoutStep::Delivery => "delivery",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Review => "review",
            CheckoutStep::Complete => "complete",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Contact => "Contact",
            CheckoutStep::Delivery => "Delivery",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Review => "Review",
            CheckoutStep::Complete => "Complete",
        }
    }

    /// Step number shown in the progress indicator (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Contact => 1,
            CheckoutStep::Delivery => 2,
            CheckoutStep::Payment => 3,
            CheckoutStep::Review => 4,
            CheckoutStep::Complete => 5,
        }
    }

    fn next(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Contact => Some(CheckoutStep::Delivery),
            CheckoutStep::Delivery => Some(CheckoutStep::Payment),
            CheckoutStep::Payment => Some(CheckoutStep::Review),
            CheckoutStep::Review | CheckoutStep::Complete => None,
        }
    }

    fn previous(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Contact | CheckoutStep::Complete => None,
            CheckoutStep::Delivery => Some(CheckoutStep::Contact),
            CheckoutStep::Payment => Some(CheckoutStep::Delivery),
            CheckoutStep::Review => Some(CheckoutStep::Payment),
        }
    }
}

/// Checkout flow state.
///
/// Collects information step by step and produces an `Order` once review is
/// confirmed. Payment details are captured as an opaque reference only; no
/// payment is processed here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutFlow {
    /// Unique checkout identifier.
    pub id: CheckoutId,
    /// Current step.
    pub step: CheckoutStep,
    /// Customer contact details.
    pub contact: Option<ContactInfo>,
    /// Delivery details.
    pub delivery: Option<DeliveryInfo>,
    /// Opaque payment method reference.
    pub payment_reference: Option<String>,
}

impl CheckoutFlow {
    /// Start a new checkout at the contact step.
    pub fn new() -> Self {
        Self {
            id: CheckoutId::generate(),
            step: CheckoutStep::Contact,
            contact: None,
            delivery: None,
            payment_reference: None,
        }
    }

    /// Record contact details.
    pub fn set_contact(&mut self, contact: ContactInfo) {
        self.contact = Some(contact);
    }

    /// Record delivery details.
    pub fn set_delivery(&mut self, delivery: DeliveryInfo) {
        self.delivery = Some(delivery);
    }

    /// Record the payment method reference.
    pub fn set_payment_reference(&mut self, reference: impl Into<String>) {
        self.payment_reference = Some(reference.into());
    }

    /// Check whether the flow may move to a step.
    ///
    /// Going backwards is always allowed; each forward step requires the
    /// previous steps' information to be complete.
    pub fn can_advance_to(&self, step: CheckoutStep) -> bool {
        match step {
            CheckoutStep::Contact => true,
            CheckoutStep::Delivery => self.contact_complete(),
            CheckoutStep::Payment => self.contact_complete() && self.delivery_complete(),
            CheckoutStep::Review => {
                self.contact_complete()
                    && self.delivery_complete()
                    && self.payment_reference.is_some()
            }
            // Complete is only reached through place_order.
            CheckoutStep::Complete => false,
        }
    }

    /// Move to the next step.
    pub fn advance(&mut self) -> Result<CheckoutStep, CommerceError> {
        let next = self
            .step
            .next()
            .ok_or(CommerceError::InvalidCheckoutTransition {
                from: self.step.as_str(),
                to: "next",
            })?;
        self.advance_to(next)
    }

    /// Move to a specific step, validating the transition.
    pub fn advance_to(&mut self, step: CheckoutStep) -> Result<CheckoutStep, CommerceError> {
        if !self.can_advance_to(step) {
            return Err(CommerceError::InvalidCheckoutTransition {
                from: self.step.as_str(),
                to: step.as_str(),
            });
        }
        self.step = step;
        Ok(self.step)
    }

    /// Move back one step, stopping at the first.
    pub fn back(&mut self) -> CheckoutStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Confirm the review and produce an order from the cart.
    ///
    /// The cart itself is left untouched; the caller clears it once the order
    /// is accepted.
    pub fn place_order(&mut self, cart: &Cart) -> Result<Order, CommerceError> {
        if self.step != CheckoutStep::Review {
            return Err(CommerceError::InvalidCheckoutTransition {
                from: self.step.as_str(),
                to: CheckoutStep::Complete.as_str(),
            });
        }
        if cart.is_empty() {
            return Err(CommerceError::CheckoutIncomplete("cart items"));
        }
        let contact = self
            .contact
            .clone()
            .filter(ContactInfo::is_complete)
            .ok_or(CommerceError::CheckoutIncomplete("contact information"))?;
        let delivery = self
            .delivery
            .clone()
            .filter(DeliveryInfo::is_complete)
            .ok_or(CommerceError::CheckoutIncomplete("delivery information"))?;

        self.step = CheckoutStep::Complete;
        Ok(Order::from_cart(cart, contact, delivery))
    }

    fn contact_complete(&self) -> bool {
        self.contact.as_ref().is_some_and(ContactInfo::is_complete)
    }

    fn delivery_complete(&self) -> bool {
        self.delivery.as_ref().is_some_and(DeliveryInfo::is_complete)
    }
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}
