//! One person's share of the pizza order.
//!
//! Orders come into the system as an untrusted [`OrderForm`], are checked into an
//! [`OrderDraft`], and only become an [`Order`] once the book assigns them an
//! [`OrderId`].

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
///
/// Serialized as a bare integer so stored orders look like `{"id": 3, ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub name: String,
    pub cheese_slices: u32,
    pub pepperoni_slices: u32,
    #[serde(default)]
    pub paid: bool,
}

impl Order {
    /// Slices of both toppings combined.
    pub fn total_slices(&self) -> u64 {
        u64::from(self.cheese_slices) + u64::from(self.pepperoni_slices)
    }
}

/// Raw order submission, exactly as it arrived.
///
/// Every field is optional and slice counts are signed so that missing or
/// negative input can be reported instead of silently coerced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cheese_slices: Option<i64>,
    #[serde(default)]
    pub pepperoni_slices: Option<i64>,
    #[serde(default)]
    pub paid: Option<bool>,
}

impl OrderForm {
    /// Convenience constructor for a fully populated form.
    pub fn new(name: impl Into<String>, cheese_slices: i64, pepperoni_slices: i64, paid: bool) -> Self {
        Self {
            name: Some(name.into()),
            cheese_slices: Some(cheese_slices),
            pepperoni_slices: Some(pepperoni_slices),
            paid: Some(paid),
        }
    }

    /// Checks the submission and turns it into an [`OrderDraft`].
    ///
    /// # Errors
    /// - [`ValidationError::MissingName`] if the name is absent or blank
    /// - [`ValidationError::MissingField`] if a slice count is absent
    /// - [`ValidationError::NegativeSlices`] / [`ValidationError::TooManySlices`] for out-of-range counts
    /// - [`ValidationError::NoSlices`] if both counts are zero
    pub fn validate(&self) -> Result<OrderDraft, ValidationError> {
        let name = self.name.as_deref().unwrap_or_default();
        let cheese = slice_count("cheese_slices", self.cheese_slices)?;
        let pepperoni = slice_count("pepperoni_slices", self.pepperoni_slices)?;
        OrderDraft::new(name, cheese, pepperoni, self.paid.unwrap_or(false))
    }
}

fn slice_count(field: &'static str, value: Option<i64>) -> Result<u32, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField(field))?;
    if value < 0 {
        return Err(ValidationError::NegativeSlices { field, value });
    }
    u32::try_from(value).map_err(|_| ValidationError::TooManySlices { field, value })
}

/// A validated order that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    name: String,
    cheese_slices: u32,
    pepperoni_slices: u32,
    paid: bool,
}

impl OrderDraft {
    /// Builds a draft, applying the same rules as [`OrderForm::validate`].
    pub fn new(
        name: impl AsRef<str>,
        cheese_slices: u32,
        pepperoni_slices: u32,
        paid: bool,
    ) -> Result<Self, ValidationError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if cheese_slices == 0 && pepperoni_slices == 0 {
            return Err(ValidationError::NoSlices);
        }
        Ok(Self {
            name: name.to_string(),
            cheese_slices,
            pepperoni_slices,
            paid,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cheese_slices(&self) -> u32 {
        self.cheese_slices
    }

    pub fn pepperoni_slices(&self) -> u32 {
        self.pepperoni_slices
    }

    pub fn paid(&self) -> bool {
        self.paid
    }

    pub fn into_order(self, id: OrderId) -> Order {
        Order {
            id,
            name: self.name,
            cheese_slices: self.cheese_slices,
            pepperoni_slices: self.pepperoni_slices,
            paid: self.paid,
        }
    }

    /// Overwrites every field of `order` except its id.
    pub fn apply_to(self, order: &mut Order) {
        order.name = self.name;
        order.cheese_slices = self.cheese_slices;
        order.pepperoni_slices = self.pepperoni_slices;
        order.paid = self.paid;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_validates_into_trimmed_draft() {
        let draft = OrderForm::new("  Ada ", 3, 0, true).validate().unwrap();
        assert_eq!(draft.name(), "Ada");
        assert_eq!(draft.cheese_slices(), 3);
        assert_eq!(draft.pepperoni_slices(), 0);
        assert!(draft.paid());
    }

    #[test]
    fn test_form_rejects_blank_name() {
        let form = OrderForm::new("   ", 2, 2, false);
        assert_eq!(form.validate(), Err(ValidationError::MissingName));

        let form = OrderForm {
            name: None,
            ..OrderForm::new("x", 1, 1, false)
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingName));
    }

    #[test]
    fn test_form_rejects_missing_slice_fields() {
        let form = OrderForm {
            cheese_slices: None,
            ..OrderForm::new("Ada", 1, 1, false)
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingField("cheese_slices"))
        );

        let form = OrderForm {
            pepperoni_slices: None,
            ..OrderForm::new("Ada", 1, 1, false)
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingField("pepperoni_slices"))
        );
    }

    #[test]
    fn test_form_rejects_negative_and_oversized_counts() {
        assert_eq!(
            OrderForm::new("Ada", -1, 4, false).validate(),
            Err(ValidationError::NegativeSlices {
                field: "cheese_slices",
                value: -1
            })
        );
        let huge = i64::from(u32::MAX) + 1;
        assert_eq!(
            OrderForm::new("Ada", 0, huge, false).validate(),
            Err(ValidationError::TooManySlices {
                field: "pepperoni_slices",
                value: huge
            })
        );
    }

    #[test]
    fn test_form_rejects_zero_slices() {
        assert_eq!(
            OrderForm::new("Ada", 0, 0, false).validate(),
            Err(ValidationError::NoSlices)
        );
    }

    #[test]
    fn test_paid_defaults_to_false() {
        let form: OrderForm =
            serde_json::from_str(r#"{"name":"Bo","cheese_slices":2,"pepperoni_slices":0}"#).unwrap();
        assert!(!form.validate().unwrap().paid());
    }

    #[test]
    fn test_order_json_shape() {
        let order = OrderDraft::new("Bo", 2, 3, true)
            .unwrap()
            .into_order(OrderId(1700000000));
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1700000000u64,
                "name": "Bo",
                "cheese_slices": 2,
                "pepperoni_slices": 3,
                "paid": true
            })
        );
        assert_eq!(order.total_slices(), 5);
    }

    #[test]
    fn test_apply_to_keeps_id() {
        let mut order = OrderDraft::new("Bo", 2, 3, false)
            .unwrap()
            .into_order(OrderId(9));
        OrderDraft::new("Bea", 0, 7, true).unwrap().apply_to(&mut order);
        assert_eq!(order.id, OrderId(9));
        assert_eq!(order.name, "Bea");
        assert_eq!(order.total_slices(), 7);
        assert!(order.paid);
    }
}
