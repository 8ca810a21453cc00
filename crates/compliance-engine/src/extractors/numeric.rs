// Numeric extraction utilities for threshold rules
use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::patterns::keyword_alternation;

/// Maximum number of characters allowed between a topic keyword and its
/// quantity. Keeps the number attached to the topic it follows.
pub const TOPIC_WINDOW: usize = 40;

/// Closed set of units every bilingual synonym normalizes into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Day,
    Month,
    Year,
    Hour,
    Percent,
}

impl Unit {
    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            Unit::Day => &["days", "day", "أيام", "يوماً", "يوما", "يوم"],
            Unit::Month => &["months", "month", "أشهر", "شهور", "شهرا", "شهر"],
            Unit::Year => &["years", "year", "سنوات", "سنة", "أعوام", "عام"],
            Unit::Hour => &["hours", "hour", "ساعات", "ساعة"],
            Unit::Percent => &["%", "percent", "per cent", "بالمائة", "في المائة"],
        }
    }

    /// Map a matched unit token back to its unit
    pub fn from_token(token: &str) -> Option<Unit> {
        let token = token.trim();
        [Unit::Day, Unit::Month, Unit::Year, Unit::Hour, Unit::Percent]
            .into_iter()
            .find(|unit| unit.synonyms().contains(&token))
    }

    /// English label, pluralized for `value`
    pub fn label(&self, value: f64) -> &'static str {
        match (self, value == 1.0) {
            (Unit::Day, true) => "day",
            (Unit::Day, false) => "days",
            (Unit::Month, true) => "month",
            (Unit::Month, false) => "months",
            (Unit::Year, true) => "year",
            (Unit::Year, false) => "years",
            (Unit::Hour, true) => "hour",
            (Unit::Hour, false) => "hours",
            (Unit::Percent, _) => "%",
        }
    }
}

/// A number with its normalized unit. Decimal values such as `12.5%` keep
/// their fraction so threshold comparisons stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Percent => write!(f, "{}%", self.value),
            unit => write!(f, "{} {}", self.value, unit.label(self.value)),
        }
    }
}

/// Contract provisions that carry a numeric limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    WorkingHours,
    Probation,
    NonCompete,
    SecurityDeposit,
}

impl Topic {
    pub const ALL: [Topic; 4] = [
        Topic::WorkingHours,
        Topic::Probation,
        Topic::NonCompete,
        Topic::SecurityDeposit,
    ];

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Topic::WorkingHours => &[
                "working hours",
                "work hours",
                "hours of work",
                "ساعات العمل",
                "ساعات الدوام",
            ],
            Topic::Probation => &[
                "probation",
                "trial period",
                "فترة التجربة",
                "فترة تجربة",
                "فترة الاختبار",
            ],
            Topic::NonCompete => &[
                "non-compete",
                "non compete",
                "noncompete",
                "عدم المنافسة",
            ],
            Topic::SecurityDeposit => &[
                "security deposit",
                "damage deposit",
                "تأمين",
                "ضمان",
            ],
        }
    }

    /// Units a quantity must carry to count for this topic
    pub fn units(&self) -> &'static [Unit] {
        match self {
            Topic::WorkingHours => &[Unit::Hour],
            Topic::Probation => &[Unit::Day, Unit::Month],
            Topic::NonCompete => &[Unit::Year, Unit::Month],
            Topic::SecurityDeposit => &[Unit::Percent],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Topic::WorkingHours => "working hours",
            Topic::Probation => "probation period",
            Topic::NonCompete => "non-compete duration",
            Topic::SecurityDeposit => "security deposit",
        }
    }

    fn pattern(&self) -> String {
        let mut units: Vec<&str> = self
            .units()
            .iter()
            .flat_map(|unit| unit.synonyms().iter().copied())
            .collect();
        // Longest first so "months" is captured whole rather than "month"
        units.sort_by_key(|u| std::cmp::Reverse(u.chars().count()));

        // The window may cross line breaks and must end on a character that
        // cannot belong to a number, so "12.5" is never read as "5"
        format!(
            r"(?s)(?:{})(?:.{{0,{}}}?[^0-9.])?([0-9]+(?:\.[0-9]+)?)\s*({})",
            keyword_alternation(self.keywords()),
            TOPIC_WINDOW - 1,
            keyword_alternation(&units)
        )
    }
}

lazy_static! {
    static ref TOPIC_PATTERNS: HashMap<Topic, Regex> = Topic::ALL
        .iter()
        .map(|topic| (*topic, Regex::new(&topic.pattern()).unwrap()))
        .collect();
}

/// Find the first quantity attached to `topic` in normalized text.
///
/// Returns `None` when the topic is not addressed with a number and a unit
/// of the topic's unit class.
pub fn extract_quantity(text: &str, topic: Topic) -> Option<Quantity> {
    let re = TOPIC_PATTERNS.get(&topic)?;
    let caps = re.captures(text)?;

    let value = caps.get(1)?.as_str().parse::<f64>().ok()?;
    let unit = caps.get(2).and_then(|m| Unit::from_token(m.as_str()))?;

    Some(Quantity { value, unit })
}
