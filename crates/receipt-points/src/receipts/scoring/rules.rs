use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::super::domain::{Item, Receipt};
use super::{ScoreComponent, ScoringRule};

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;
const DESCRIPTION_LENGTH_MULTIPLE: usize = 3;
const AFTERNOON_START_HOUR: u32 = 14;
const AFTERNOON_END_HOUR: u32 = 16;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

pub(crate) fn score_receipt(receipt: &Receipt) -> Vec<ScoreComponent> {
    let total = parse_amount(&receipt.total);

    vec![
        retailer_name(&receipt.retailer),
        round_dollar_total(&receipt.total, total),
        quarter_multiple_total(&receipt.total, total),
        item_descriptions(&receipt.items),
        item_pairs(receipt.items.len()),
        odd_purchase_day(&receipt.purchase_date),
        afternoon_purchase(&receipt.purchase_time),
    ]
}

/// Plain decimal text. Digit-group underscores are not amounts.
pub(crate) fn parse_amount(raw: &str) -> Option<Decimal> {
    if raw.contains('_') {
        return None;
    }
    Decimal::from_str(raw).ok()
}

/// `YYYY-MM-DD` with zero padding and no sign; chrono alone would take `2022-1-1`.
fn parse_purchase_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == raw)
}

/// 24-hour `HH:MM` with zero padding.
fn parse_purchase_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, TIME_FORMAT)
        .ok()
        .filter(|time| time.format(TIME_FORMAT).to_string() == raw)
}

fn retailer_name(retailer: &str) -> ScoreComponent {
    let count = retailer
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .count() as u64;

    ScoreComponent {
        rule: ScoringRule::RetailerName,
        points: count,
        notes: format!("{count} alphanumeric character(s) in '{retailer}'"),
    }
}

fn round_dollar_total(raw: &str, total: Option<Decimal>) -> ScoreComponent {
    let (points, notes) = match total {
        Some(amount) if amount.fract().is_zero() => {
            (ROUND_DOLLAR_POINTS, format!("total {raw} is a round dollar amount"))
        }
        Some(_) => (0, format!("total {raw} has cents")),
        None => (0, format!("total '{raw}' is not a decimal amount")),
    };

    ScoreComponent {
        rule: ScoringRule::RoundDollarTotal,
        points,
        notes,
    }
}

fn quarter_multiple_total(raw: &str, total: Option<Decimal>) -> ScoreComponent {
    let quarter = Decimal::new(25, 2);
    let (points, notes) = match total {
        Some(amount) if (amount % quarter).is_zero() => (
            QUARTER_MULTIPLE_POINTS,
            format!("total {raw} is a multiple of 0.25"),
        ),
        Some(_) => (0, format!("total {raw} is not a multiple of 0.25")),
        None => (0, format!("total '{raw}' is not a decimal amount")),
    };

    ScoreComponent {
        rule: ScoringRule::QuarterMultipleTotal,
        points,
        notes,
    }
}

fn item_descriptions(items: &[Item]) -> ScoreComponent {
    let mut points: u64 = 0;
    let mut qualifying = 0usize;

    for item in items {
        if let Some(bonus) = description_bonus(item) {
            qualifying += 1;
            points = points.saturating_add(bonus);
        }
    }

    ScoreComponent {
        rule: ScoringRule::ItemDescriptions,
        points,
        notes: format!(
            "{qualifying} of {} item(s) have a description length divisible by {DESCRIPTION_LENGTH_MULTIPLE} and a readable price",
            items.len()
        ),
    }
}

/// `ceil(price * 0.2)` for items whose trimmed description length is a multiple of three.
/// An empty description has length zero and qualifies.
pub(crate) fn description_bonus(item: &Item) -> Option<u64> {
    if item.short_description.trim().len() % DESCRIPTION_LENGTH_MULTIPLE != 0 {
        return None;
    }

    let price = parse_amount(&item.price)?;
    let bonus = price.checked_mul(Decimal::new(2, 1))?.ceil();
    if bonus.is_sign_negative() || bonus.is_zero() {
        return Some(0);
    }

    Some(bonus.to_u64().unwrap_or(u64::MAX))
}

fn item_pairs(count: usize) -> ScoreComponent {
    let pairs = (count / 2) as u64;

    ScoreComponent {
        rule: ScoringRule::ItemPairs,
        points: pairs.saturating_mul(POINTS_PER_ITEM_PAIR),
        notes: format!("{pairs} pair(s) across {count} item(s)"),
    }
}

fn odd_purchase_day(raw: &str) -> ScoreComponent {
    let (points, notes) = match parse_purchase_date(raw) {
        Some(date) if date.day() % 2 == 1 => {
            (ODD_DAY_POINTS, format!("purchased on odd day {}", date.day()))
        }
        Some(date) => (0, format!("purchased on even day {}", date.day())),
        None => (0, format!("purchase date '{raw}' is not YYYY-MM-DD")),
    };

    ScoreComponent {
        rule: ScoringRule::OddPurchaseDay,
        points,
        notes,
    }
}

fn afternoon_purchase(raw: &str) -> ScoreComponent {
    let (points, notes) = match parse_purchase_time(raw) {
        Some(time) if (AFTERNOON_START_HOUR..AFTERNOON_END_HOUR).contains(&time.hour()) => (
            AFTERNOON_POINTS,
            format!("purchased at {raw}, between 14:00 and 16:00"),
        ),
        Some(_) => (0, format!("purchased at {raw}, outside 14:00-16:00")),
        None => (0, format!("purchase time '{raw}' is not HH:MM")),
    };

    ScoreComponent {
        rule: ScoringRule::AfternoonPurchase,
        points,
        notes,
    }
}
