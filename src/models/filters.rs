use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

/// What a numeric input that parses to exactly zero turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroInputPolicy {
    /// `0` is treated like an empty field and replaced by the fallback.
    UseFallback,
    /// `0` is kept as entered.
    Accept,
}

/// Parses the raw text of a numeric input.
///
/// Empty or non-numeric text yields `fallback`. Zero is resolved by `policy`.
pub fn parse_numeric_input(raw: &str, fallback: f64, policy: ZeroInputPolicy) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return fallback;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if !value.is_finite() => fallback,
        Ok(value) if value == 0.0 => match policy {
            ZeroInputPolicy::UseFallback => fallback,
            ZeroInputPolicy::Accept => 0.0,
        },
        Ok(value) => value,
        Err(_) => fallback,
    }
}

/// Like [`parse_numeric_input`], for whole-number fields (limits, days, passenger count).
///
/// Fractions are truncated; negative values yield `fallback`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_count_input(raw: &str, fallback: u32, policy: ZeroInputPolicy) -> u32 {
    let value = parse_numeric_input(raw, f64::from(fallback), policy).trunc();
    if value < 0.0 || value > f64::from(u32::MAX) {
        fallback
    } else if value == 0.0 && policy == ZeroInputPolicy::UseFallback {
        // "0.4" truncates to zero after the zero check above
        fallback
    } else {
        value as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternsFilter {
    pub limit: u32,
}

impl Default for PatternsFilter {
    fn default() -> Self {
        Self { limit: 10 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotspotsFilter {
    pub limit: u32,
    pub days: u32,
}

impl Default for HotspotsFilter {
    fn default() -> Self {
        Self { limit: 10, days: 30 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PremiumFilter {
    pub limit: u32,
    pub min_fare: f64,
    pub min_distance: f64,
}

impl Default for PremiumFilter {
    fn default() -> Self {
        Self {
            limit: 100,
            min_fare: 50.0,
            min_distance: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassengerFilter {
    pub passenger_count: u32,
    pub limit: u32,
}

impl Default for PassengerFilter {
    fn default() -> Self {
        Self {
            passenger_count: 1,
            limit: 100,
        }
    }
}

/// Filter configuration for every chart. Replaced wholesale on each update.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Filters {
    #[serde(default)]
    pub patterns: PatternsFilter,
    #[serde(default)]
    pub hotspots: HotspotsFilter,
    #[serde(default)]
    pub premium: PremiumFilter,
    #[serde(default)]
    pub passenger: PassengerFilter,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterAction {
    SetPatternsLimit(u32),
    SetHotspotsLimit(u32),
    SetHotspotsDays(u32),
    SetPremiumLimit(u32),
    SetMinFare(f64),
    SetMinDistance(f64),
    SetPassengerCount(u32),
    SetPassengerLimit(u32),
    Reset,
}

impl Filters {
    /// Returns a copy with `action` applied.
    pub fn apply(self, action: FilterAction) -> Self {
        let mut next = self;
        match action {
            FilterAction::SetPatternsLimit(limit) => next.patterns.limit = limit,
            FilterAction::SetHotspotsLimit(limit) => next.hotspots.limit = limit,
            FilterAction::SetHotspotsDays(days) => next.hotspots.days = days,
            FilterAction::SetPremiumLimit(limit) => next.premium.limit = limit,
            FilterAction::SetMinFare(fare) => next.premium.min_fare = fare,
            FilterAction::SetMinDistance(distance) => next.premium.min_distance = distance,
            FilterAction::SetPassengerCount(count) => next.passenger.passenger_count = count,
            FilterAction::SetPassengerLimit(limit) => next.passenger.limit = limit,
            FilterAction::Reset => next = Self::default(),
        }
        next
    }

    /// Re-reads every field as if it had been typed into the panel.
    ///
    /// Used on values restored from storage, which never went through input parsing.
    pub fn normalized(self, policy: ZeroInputPolicy) -> Self {
        FilterField::all().iter().fold(self, |filters, field| {
            let raw = field.value(&filters).to_string();
            filters.apply(field.action(&raw, policy))
        })
    }
}

impl Reducible for Filters {
    type Action = FilterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self { self } else { Rc::new(next) }
    }
}

/// One numeric input of the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    PatternsLimit,
    HotspotsLimit,
    HotspotsDays,
    PremiumLimit,
    MinFare,
    MinDistance,
    PassengerCount,
    PassengerLimit,
}

impl FilterField {
    pub const fn all() -> &'static [Self] {
        &[
            Self::PatternsLimit,
            Self::HotspotsLimit,
            Self::HotspotsDays,
            Self::PremiumLimit,
            Self::MinFare,
            Self::MinDistance,
            Self::PassengerCount,
            Self::PassengerLimit,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PatternsLimit | Self::HotspotsLimit | Self::PremiumLimit | Self::PassengerLimit => {
                "Limit"
            }
            Self::HotspotsDays => "Days",
            Self::MinFare => "Min Fare ($)",
            Self::MinDistance => "Min Distance (mi)",
            Self::PassengerCount => "Passengers",
        }
    }

    /// Value used when the input is empty or not a number.
    pub const fn fallback(self) -> f64 {
        match self {
            Self::MinFare | Self::MinDistance => 0.0,
            _ => 1.0,
        }
    }

    /// Smallest value the input offers.
    pub const fn min(self) -> f64 {
        match self {
            Self::MinFare | Self::MinDistance | Self::PassengerCount => 0.0,
            _ => 1.0,
        }
    }

    pub const fn step(self) -> f64 {
        match self {
            Self::MinDistance => 0.1,
            _ => 1.0,
        }
    }

    /// Current value of this field.
    pub fn value(self, filters: &Filters) -> f64 {
        match self {
            Self::PatternsLimit => f64::from(filters.patterns.limit),
            Self::HotspotsLimit => f64::from(filters.hotspots.limit),
            Self::HotspotsDays => f64::from(filters.hotspots.days),
            Self::PremiumLimit => f64::from(filters.premium.limit),
            Self::MinFare => filters.premium.min_fare,
            Self::MinDistance => filters.premium.min_distance,
            Self::PassengerCount => f64::from(filters.passenger.passenger_count),
            Self::PassengerLimit => f64::from(filters.passenger.limit),
        }
    }

    /// Turns the raw input text into the update for this field.
    pub fn action(self, raw: &str, policy: ZeroInputPolicy) -> FilterAction {
        let count = || parse_count_input(raw, 1, policy);
        let amount = || parse_numeric_input(raw, self.fallback(), policy);

        match self {
            Self::PatternsLimit => FilterAction::SetPatternsLimit(count()),
            Self::HotspotsLimit => FilterAction::SetHotspotsLimit(count()),
            Self::HotspotsDays => FilterAction::SetHotspotsDays(count()),
            Self::PremiumLimit => FilterAction::SetPremiumLimit(count()),
            Self::MinFare => FilterAction::SetMinFare(amount()),
            Self::MinDistance => FilterAction::SetMinDistance(amount()),
            Self::PassengerCount => FilterAction::SetPassengerCount(count()),
            Self::PassengerLimit => FilterAction::SetPassengerLimit(count()),
        }
    }
}
