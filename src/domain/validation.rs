use crate::domain::amount::{parse_amount, parse_purchase_date, parse_purchase_time};
use crate::domain::ValidationError;
use crate::models::Receipt;

/// Check that a receipt is well formed enough to be scored
///
/// Rules run in a fixed order and the first failure is returned:
/// 1. retailer, date, time and total are non-empty and there is at least one item
/// 2. purchase date is a real `YYYY-MM-DD` date
/// 3. purchase time is a valid `HH:MM`
/// 4. total is a non-negative decimal
/// 5. each item has a description and a non-negative decimal price
pub fn validate(receipt: &Receipt) -> Result<(), ValidationError> {
    if receipt.retailer.is_empty()
        || receipt.purchase_date.is_empty()
        || receipt.purchase_time.is_empty()
        || receipt.total.is_empty()
        || receipt.items.is_empty()
    {
        return Err(ValidationError::MissingFields);
    }

    if parse_purchase_date(&receipt.purchase_date).is_none() {
        return Err(ValidationError::InvalidDate(receipt.purchase_date.clone()));
    }

    if parse_purchase_time(&receipt.purchase_time).is_none() {
        return Err(ValidationError::InvalidTime(receipt.purchase_time.clone()));
    }

    if parse_amount(&receipt.total).is_none() {
        return Err(ValidationError::InvalidTotal(receipt.total.clone()));
    }

    for (index, item) in receipt.items.iter().enumerate() {
        if item.short_description.is_empty() {
            return Err(ValidationError::InvalidItem {
                index,
                reason: "missing short description".to_string(),
            });
        }
        if parse_amount(&item.price).is_none() {
            return Err(ValidationError::InvalidItem {
                index,
                reason: format!("invalid price '{}'", item.price),
            });
        }
    }

    Ok(())
}
