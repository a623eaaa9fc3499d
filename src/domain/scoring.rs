use chrono::{Datelike, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::domain::amount::{parse_amount, parse_purchase_date, parse_purchase_time};
use crate::models::{Item, Receipt};

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// Description lengths divisible by this earn a share of the item price
const DESCRIPTION_LENGTH_DIVISOR: usize = 3;
const DESCRIPTION_PRICE_MULTIPLIER: Decimal = dec!(0.2);
const QUARTER: Decimal = dec!(0.25);

/// First and last hour of the afternoon window, both inclusive for every minute
const AFTERNOON_START_HOUR: u32 = 14;
const AFTERNOON_END_HOUR: u32 = 15;

/// Points earned from each rule, kept apart so a total can be explained
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub retailer_name: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    pub fn total(&self) -> u64 {
        [
            self.retailer_name,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0u64, u64::saturating_add)
    }
}

/// Score a receipt that has already passed validation
pub fn score(receipt: &Receipt) -> u64 {
    score_breakdown(receipt).total()
}

/// Apply every scoring rule to a receipt
///
/// The function is total: a field that fails to parse simply earns nothing
/// from the rules that depend on it. Callers are expected to run
/// [`crate::domain::validate`] first.
pub fn score_breakdown(receipt: &Receipt) -> PointsBreakdown {
    let total = parse_amount(&receipt.total);

    PointsBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        round_dollar: round_dollar_points(&receipt.total),
        quarter_multiple: total.map_or(0, quarter_multiple_points),
        item_pairs: item_pair_points(receipt.items.len()),
        item_descriptions: receipt
            .items
            .iter()
            .map(item_description_points)
            .fold(0, u64::saturating_add),
        odd_day: odd_day_points(&receipt.purchase_date),
        afternoon: afternoon_points(&receipt.purchase_time),
    }
}

/// One point per ASCII letter or digit
fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

// Suffix check on the submitted text, so "35.0" does not count
fn round_dollar_points(total_text: &str) -> u64 {
    if total_text.ends_with(".00") {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

fn quarter_multiple_points(total: Decimal) -> u64 {
    if (total % QUARTER).is_zero() {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_POINTS
}

fn item_description_points(item: &Item) -> u64 {
    let length = item.short_description.trim().chars().count();
    if length % DESCRIPTION_LENGTH_DIVISOR != 0 {
        return 0;
    }

    // Prices too large for u64 saturate rather than earn nothing
    parse_amount(&item.price)
        .map(|price| (price * DESCRIPTION_PRICE_MULTIPLIER).ceil())
        .map_or(0, |points| points.to_u64().unwrap_or(u64::MAX))
}

fn odd_day_points(purchase_date: &str) -> u64 {
    match parse_purchase_date(purchase_date) {
        Some(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

// 14:00 through 15:59. The 15:xx hour counts in full.
fn afternoon_points(purchase_time: &str) -> u64 {
    match parse_purchase_time(purchase_time) {
        Some(time) if (AFTERNOON_START_HOUR..=AFTERNOON_END_HOUR).contains(&time.hour()) => {
            AFTERNOON_POINTS
        }
        _ => 0,
    }
}
