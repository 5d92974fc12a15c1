use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShowcaseError;

/// Identifier selecting which preview is shown on the get-started page.
///
/// `GetStarted` is the non-rendering intro placeholder; every other variant
/// maps to exactly one widget constructor of the charting library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    GetStarted,
    Bar,
    Line,
    Pie,
    World,
    Radar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 6] = [
        ChartKind::GetStarted,
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Pie,
        ChartKind::World,
        ChartKind::Radar,
    ];

    pub const RENDERABLE: [ChartKind; 5] = [
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Pie,
        ChartKind::World,
        ChartKind::Radar,
    ];

    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::GetStarted => "get-started",
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::World => "world",
            Self::Radar => "radar",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::GetStarted => "Get Started",
            Self::Bar => "Bar Chart",
            Self::Line => "Line Chart",
            Self::Pie => "Pie Chart",
            Self::World => "World Map",
            Self::Radar => "Radar Chart",
        }
    }

    #[must_use]
    pub const fn is_renderable(self) -> bool {
        !matches!(self, Self::GetStarted)
    }

    /// Whether the widget has to be redrawn when its container is resized.
    ///
    /// Line and pie previews are drawn at a fixed size.
    #[must_use]
    pub const fn is_responsive_by_default(self) -> bool {
        matches!(self, Self::Bar | Self::World | Self::Radar)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for ChartKind {
    type Err = ShowcaseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.identifier() == input)
            .ok_or_else(|| ShowcaseError::UnknownIdentifier(input.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip_through_from_str() {
        for kind in ChartKind::ALL {
            assert_eq!(kind.identifier().parse::<ChartKind>().ok(), Some(kind));
        }
    }

    #[test]
    fn serde_uses_kebab_case_identifier() {
        let json = serde_json::to_string(&ChartKind::GetStarted).expect("serialize");
        assert_eq!(json, "\"get-started\"");
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let err = "scatter".parse::<ChartKind>().expect_err("unknown kind");
        assert!(matches!(err, ShowcaseError::UnknownIdentifier(id) if id == "scatter"));
    }
}
