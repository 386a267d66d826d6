//! Input validation for item writes.
//!
//! One pure function shared by every write path: front-ends call it to
//! reject bad input at the boundary, and stores call it again before
//! touching the database, so no caller can drive a backend into a bad
//! write.

use thiserror::Error;

use crate::item::NewItem;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("item name cannot be empty")]
  EmptyName,

  #[error("bought quantity cannot be negative (got {0})")]
  NegativeBought(i64),

  #[error("sold quantity cannot be negative (got {0})")]
  NegativeSold(i64),

  #[error("sold quantity ({sold}) cannot exceed bought quantity ({bought})")]
  SoldExceedsBought { sold: i64, bought: i64 },
}

/// Check an item write against the inventory rules.
///
/// The name check applies after trimming; stores persist the trimmed name.
pub fn validate(input: &NewItem) -> Result<(), ValidationError> {
  if input.name.trim().is_empty() {
    return Err(ValidationError::EmptyName);
  }
  if input.bought < 0 {
    return Err(ValidationError::NegativeBought(input.bought));
  }
  if input.sold < 0 {
    return Err(ValidationError::NegativeSold(input.sold));
  }
  if input.sold > input.bought {
    return Err(ValidationError::SoldExceedsBought {
      sold:   input.sold,
      bought: input.bought,
    });
  }
  Ok(())
}
