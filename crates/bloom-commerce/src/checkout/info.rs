//! Information collected during checkout.

use serde::{Deserialize, Serialize};

/// Customer contact details (step 1).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContactInfo {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
}

impl ContactInfo {
    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check that every required field is filled in.
    pub fn is_complete(&self) -> bool {
        !self.first_name.is_empty() && !self.last_name.is_empty() && !self.email.is_empty()
    }
}

/// Preferred time window for delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DeliveryWindow {
    #[default]
    Morning,
    Afternoon,
    Evening,
}

impl DeliveryWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryWindow::Morning => "morning",
            DeliveryWindow::Afternoon => "afternoon",
            DeliveryWindow::Evening => "evening",
        }
    }

    /// The time range shown to customers.
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryWindow::Morning => "9:00 AM - 12:00 PM",
            DeliveryWindow::Afternoon => "12:00 PM - 5:00 PM",
            DeliveryWindow::Evening => "5:00 PM - 8:00 PM",
        }
    }
}

/// Delivery details (step 2).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeliveryInfo {
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// ZIP code.
    pub zip: String,
    /// Requested delivery date (ISO date string, as entered by the customer).
    pub delivery_date: String,
    /// Requested time window.
    pub delivery_window: DeliveryWindow,
    /// Special delivery instructions.
    pub special_instructions: Option<String>,
}

impl DeliveryInfo {
    /// Check that every required field is filled in.
    pub fn is_complete(&self) -> bool {
        !self.address.is_empty()
            && !self.city.is_empty()
            && !self.state.is_empty()
            && !self.zip.is_empty()
            && !self.delivery_date.is_empty()
    }

    /// Format the destination as a single line.
    pub fn one_line(&self) -> String {
        format!("{}, {}, {} {}", self.address, self.city, self.state, self.zip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_completeness() {
        let mut contact = ContactInfo {
            first_name: "Rosa".into(),
            last_name: "Bloom".into(),
            email: "rosa@example.com".into(),
            phone: None,
        };
        assert!(contact.is_complete());
        assert_eq!(contact.full_name(), "Rosa Bloom");

        contact.email.clear();
        assert!(!contact.is_complete());
    }

    #[test]
    fn test_delivery_completeness() {
        let delivery = DeliveryInfo {
            address: "12 Petal Lane".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            zip: "62704".into(),
            delivery_date: "2026-09-01".into(),
            delivery_window: DeliveryWindow::Afternoon,
            special_instructions: None,
        };
        assert!(delivery.is_complete());
        assert_eq!(delivery.one_line(), "12 Petal Lane, Springfield, IL 62704");

        assert!(!DeliveryInfo::default().is_complete());
    }

    #[test]
    fn test_window_labels() {
        assert_eq!(DeliveryWindow::Morning.label(), "9:00 AM - 12:00 PM");
        assert_eq!(DeliveryWindow::Evening.as_str(), "evening");
    }
}
