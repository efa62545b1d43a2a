//! Read-only views exposed to clients
//!
//! Only the names in [`ViewName::ALL`] may ever reach the database; the
//! allow-list is checked before the gateway is involved.

use std::str::FromStr;

use crate::shared::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewName {
    FlightsInTheAir,
    FlightsOnTheGround,
    PeopleInTheAir,
    PeopleOnTheGround,
    RouteSummary,
    AlternativeAirports,
}

impl ViewName {
    pub const ALL: [ViewName; 6] = [
        ViewName::FlightsInTheAir,
        ViewName::FlightsOnTheGround,
        ViewName::PeopleInTheAir,
        ViewName::PeopleOnTheGround,
        ViewName::RouteSummary,
        ViewName::AlternativeAirports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewName::FlightsInTheAir => "flights_in_the_air",
            ViewName::FlightsOnTheGround => "flights_on_the_ground",
            ViewName::PeopleInTheAir => "people_in_the_air",
            ViewName::PeopleOnTheGround => "people_on_the_ground",
            ViewName::RouteSummary => "route_summary",
            ViewName::AlternativeAirports => "alternative_airports",
        }
    }
}

impl FromStr for ViewName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewName::ALL
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| AppError::InvalidView(s.to_string()))
    }
}

impl std::fmt::Display for ViewName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
