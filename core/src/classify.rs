//! Classification rules: month names, seasons and derived customer types.
//!
//! All functions here are pure and total over their inputs. Month names
//! outside the canonical twelve are rejected at parse time.

use crate::error::{ReportError, ReportResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Calendar number, 1 = January.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn from_number(n: u32) -> Option<Month> {
        n.checked_sub(1)
            .and_then(|i| Month::ALL.get(i as usize))
            .copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Fixed 12-way season table.
    pub fn season(self) -> Season {
        match self {
            Month::December | Month::January | Month::February => Season::Winter,
            Month::March | Month::April | Month::May => Season::Spring,
            Month::June | Month::July | Month::August => Season::Summer,
            Month::September | Month::October | Month::November => Season::Autumn,
        }
    }
}

impl FromStr for Month {
    type Err = ReportError;

    fn from_str(s: &str) -> ReportResult<Self> {
        Month::ALL
            .into_iter()
            .find(|m| m.name() == s.trim())
            .ok_or_else(|| ReportError::UnknownMonth {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Autumn];

    pub fn name(self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Map an arrival month name to its season.
pub fn season_for_month(month: &str) -> ReportResult<Season> {
    Ok(month.parse::<Month>()?.season())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CustomerType {
    Family,
    Couple,
    #[serde(rename = "Solo Traveler")]
    SoloTraveler,
    Other,
}

impl CustomerType {
    /// The labels that take part in customer-type summaries.
    pub const RANKED: [CustomerType; 3] = [
        CustomerType::Family,
        CustomerType::Couple,
        CustomerType::SoloTraveler,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CustomerType::Family => "Family",
            CustomerType::Couple => "Couple",
            CustomerType::SoloTraveler => "Solo Traveler",
            CustomerType::Other => "Other",
        }
    }
}

impl fmt::Display for CustomerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a party by its adult count and dependants.
///
/// `children` and `babies` are `None` when the source value was missing.
/// A party with unknown dependants matches none of the named rules and
/// falls through to `Other`.
pub fn classify_customer(adults: u32, children: Option<u32>, babies: Option<u32>) -> CustomerType {
    let dependants = match (children, babies) {
        (Some(c), Some(b)) => c.saturating_add(b),
        _ => return CustomerType::Other,
    };
    match (adults, dependants) {
        (a, d) if a > 1 && d > 0 => CustomerType::Family,
        (a, 0) if a > 1 => CustomerType::Couple,
        (1, 0) => CustomerType::SoloTraveler,
        _ => CustomerType::Other,
    }
}
