use super::error::AppError;

/// The charts the dashboard can show, one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartId {
    #[default]
    CorporatePatterns,
    TopPickups,
    PremiumTrips,
    TripsByPassenger,
}

impl ChartId {
    /// Stable identifier used in storage and DOM ids.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::CorporatePatterns => "corporatePatterns",
            Self::TopPickups => "topPickups",
            Self::PremiumTrips => "premiumTrips",
            Self::TripsByPassenger => "tripsByPassenger",
        }
    }

    /// Navigation label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CorporatePatterns => "Corporate Patterns",
            Self::TopPickups => "Top Pickups",
            Self::PremiumTrips => "Premium Trips",
            Self::TripsByPassenger => "Trips by Passenger Count",
        }
    }

    /// All charts in navigation order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::CorporatePatterns,
            Self::TopPickups,
            Self::PremiumTrips,
            Self::TripsByPassenger,
        ]
    }
}

/// Writes the storage key; `FromStr` reads it back.
impl std::fmt::Display for ChartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for ChartId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|id| id.key() == s)
            .copied()
            .ok_or_else(|| AppError::Config(format!("Unknown chart: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_keys() {
        for id in ChartId::all() {
            assert_eq!(id.key().parse::<ChartId>().unwrap(), *id);
        }
        assert!("hotspots".parse::<ChartId>().is_err());
    }

    #[test]
    fn test_display_writes_storage_key() {
        assert_eq!(ChartId::PremiumTrips.to_string(), "premiumTrips");
        assert_eq!(
            ChartId::TripsByPassenger.to_string().parse::<ChartId>().unwrap(),
            ChartId::TripsByPassenger
        );
    }

    #[test]
    fn test_default_is_first_nav_entry() {
        assert_eq!(ChartId::default(), ChartId::all()[0]);
    }
}
