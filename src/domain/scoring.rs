//! The points calculation.
//!
//! A receipt's score is the sum of seven independent rules. Every rule is a
//! pure function of the receipt; none of them can fail. Fields a rule cannot
//! interpret (an unparseable date, say) make that rule contribute nothing.

use super::points::Points;
use super::receipt::{Item, Receipt};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use std::fmt;
use tracing::{debug, warn};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";
const DATE_LAYOUT: &str = "9999-99-99";
const TIME_LAYOUTS: [&str; 2] = ["99:99", "9:99"];

const ROUND_TOTAL_POINTS: Points = Points(50);
const QUARTER_TOTAL_POINTS: Points = Points(25);
const QUARTER: Decimal = dec!(0.25);
const POINTS_PER_ITEM_PAIR: u64 = 5;
const DESCRIPTION_LENGTH_DIVISOR: usize = 3;
const ITEM_PRICE_MULTIPLIER: Decimal = dec!(0.2);
const ODD_DAY_POINTS: Points = Points(6);
const AFTERNOON_POINTS: Points = Points(10);
// Exclusive bounds, in seconds from midnight.
const AFTERNOON_START: u32 = 14 * 3600;
const AFTERNOON_END: u32 = 16 * 3600;

/// One of the scoring rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// One point per ASCII letter or digit in the retailer name.
    RetailerName,
    /// 50 points if the total has no cents.
    RoundTotal,
    /// 25 points if the total is a multiple of 0.25.
    QuarterTotal,
    /// 5 points for every two items.
    ItemPairs,
    /// `ceil(price * 0.2)` for each item whose trimmed description length is
    /// a multiple of 3.
    ItemDescriptions,
    /// 6 points if the day of the purchase date is odd.
    OddDay,
    /// 10 points if the purchase time is after 14:00 and before 16:00.
    Afternoon,
}

impl Rule {
    pub const ALL: [Rule; 7] = [
        Rule::RetailerName,
        Rule::RoundTotal,
        Rule::QuarterTotal,
        Rule::ItemPairs,
        Rule::ItemDescriptions,
        Rule::OddDay,
        Rule::Afternoon,
    ];

    /// Stable machine-readable name, used for column headers and logs.
    pub fn name(self) -> &'static str {
        match self {
            Rule::RetailerName => "retailer_name",
            Rule::RoundTotal => "round_total",
            Rule::QuarterTotal => "quarter_total",
            Rule::ItemPairs => "item_pairs",
            Rule::ItemDescriptions => "item_descriptions",
            Rule::OddDay => "odd_day",
            Rule::Afternoon => "afternoon",
        }
    }

    /// Evaluates this rule alone against `receipt`.
    pub fn points(self, receipt: &Receipt) -> Points {
        match self {
            Rule::RetailerName => retailer_name_points(&receipt.retailer),
            Rule::RoundTotal => award_if(receipt.total.value().fract().is_zero(), ROUND_TOTAL_POINTS),
            Rule::QuarterTotal => {
                award_if((receipt.total.value() % QUARTER).is_zero(), QUARTER_TOTAL_POINTS)
            }
            Rule::ItemPairs => item_pairs_points(receipt.items.len()),
            Rule::ItemDescriptions => receipt.items.iter().map(item_points).sum(),
            Rule::OddDay => award_if(is_odd_day(&receipt.purchase_date), ODD_DAY_POINTS),
            Rule::Afternoon => award_if(is_afternoon(&receipt.purchase_time), AFTERNOON_POINTS),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Computes the total points for a receipt.
pub fn compute(receipt: &Receipt) -> Points {
    Rule::ALL.iter().map(|rule| rule.points(receipt)).sum()
}

/// Per-rule contributions, in [`Rule::ALL`] order. They add up to
/// [`compute`].
pub fn breakdown(receipt: &Receipt) -> [(Rule, Points); 7] {
    Rule::ALL.map(|rule| (rule, rule.points(receipt)))
}

fn award_if(condition: bool, points: Points) -> Points {
    if condition { points } else { Points::ZERO }
}

fn retailer_name_points(retailer: &str) -> Points {
    let count = retailer.bytes().filter(u8::is_ascii_alphanumeric).count();
    Points(count as u64)
}

fn item_pairs_points(item_count: usize) -> Points {
    Points((item_count as u64 / 2).saturating_mul(POINTS_PER_ITEM_PAIR))
}

fn item_points(item: &Item) -> Points {
    // Length in bytes of the trimmed description; an empty one qualifies.
    if item.short_description.trim().len() % DESCRIPTION_LENGTH_DIVISOR != 0 {
        return Points::ZERO;
    }
    let scaled = (item.price.value() * ITEM_PRICE_MULTIPLIER).ceil();
    if scaled.is_sign_negative() {
        return Points::ZERO;
    }
    scaled.to_u64().map_or(Points(u64::MAX), Points)
}

/// Checks `value` against a layout in which `9` stands for one ASCII digit
/// and every other byte must match literally.
fn matches_layout(value: &str, layout: &str) -> bool {
    value.len() == layout.len()
        && value
            .bytes()
            .zip(layout.bytes())
            .all(|(v, l)| if l == b'9' { v.is_ascii_digit() } else { v == l })
}

fn is_odd_day(purchase_date: &str) -> bool {
    if !matches_layout(purchase_date, DATE_LAYOUT) {
        warn!(purchase_date, "Malformed purchase date, skipping odd day rule");
        return false;
    }
    match NaiveDate::parse_from_str(purchase_date, DATE_FORMAT) {
        Ok(date) => date.day() % 2 == 1,
        Err(e) => {
            warn!(purchase_date, error = %e, "Unparseable purchase date, skipping odd day rule");
            false
        }
    }
}

fn is_afternoon(purchase_time: &str) -> bool {
    // The hour may have one or two digits, the minute always has two.
    if !TIME_LAYOUTS
        .iter()
        .any(|layout| matches_layout(purchase_time, layout))
    {
        debug!(purchase_time, "Malformed purchase time");
        return false;
    }
    match NaiveTime::parse_from_str(purchase_time, TIME_FORMAT) {
        Ok(time) => {
            let seconds = time.num_seconds_from_midnight();
            seconds > AFTERNOON_START && seconds < AFTERNOON_END
        }
        Err(e) => {
            debug!(purchase_time, error = %e, "Unparseable purchase time");
            false
        }
    }
}
