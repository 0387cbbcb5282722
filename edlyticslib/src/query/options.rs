//! Ordering options for the platform table.
//!
//! This module contains the configuration types that control how table rows
//! are ordered, plus the header-click state machine that drives them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DashboardError;

/// Column of the platform table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    /// Platform name
    Platform,
    /// Respondent count
    Users,
    /// Market share percentage
    MarketShare,
    /// Engagement tier label
    Engagement,
}

impl SortColumn {
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Platform,
        SortColumn::Users,
        SortColumn::MarketShare,
        SortColumn::Engagement,
    ];

    /// Key used in table headers and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            SortColumn::Platform => "platform",
            SortColumn::Users => "users",
            SortColumn::MarketShare => "market_share",
            SortColumn::Engagement => "engagement",
        }
    }

    /// Human-readable header.
    pub fn header(&self) -> &'static str {
        match self {
            SortColumn::Platform => "Platform",
            SortColumn::Users => "Users",
            SortColumn::MarketShare => "Market Share",
            SortColumn::Engagement => "Engagement",
        }
    }
}

impl FromStr for SortColumn {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "platform" | "name" => Ok(SortColumn::Platform),
            "users" | "user" => Ok(SortColumn::Users),
            "market_share" | "share" => Ok(SortColumn::MarketShare),
            "engagement" => Ok(SortColumn::Engagement),
            _ => Err(DashboardError::UnknownColumn(s.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Ascending (A-Z, smallest first)
    #[default]
    Ascending,
    /// Descending (Z-A, largest first)
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "\u{25b2}",
            SortDirection::Descending => "\u{25bc}",
        }
    }
}

/// Which column the table is currently sorted by, if any.
///
/// Clicking the sorted column again flips the direction; clicking any other
/// column sorts by it ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub direction: SortDirection,
}

impl SortState {
    /// Unsorted state (source order)
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorted by `column` ascending
    pub fn by(column: SortColumn) -> Self {
        Self {
            column: Some(column),
            direction: SortDirection::Ascending,
        }
    }

    /// Builder: set direction
    pub fn descending(mut self) -> Self {
        self.direction = SortDirection::Descending;
        self
    }

    /// Apply a header click and return the resulting direction.
    pub fn click(&mut self, column: SortColumn) -> SortDirection {
        self.direction = if self.column == Some(column) {
            self.direction.toggled()
        } else {
            SortDirection::Ascending
        };
        self.column = Some(column);
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_state_default() {
        let state = SortState::default();
        assert_eq!(state.column, None);
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_click_same_column_toggles() {
        let mut state = SortState::new();
        assert_eq!(state.click(SortColumn::Users), SortDirection::Ascending);
        assert_eq!(state.click(SortColumn::Users), SortDirection::Descending);
        assert_eq!(state.click(SortColumn::Users), SortDirection::Ascending);
    }

    #[test]
    fn test_click_other_column_resets() {
        let mut state = SortState::by(SortColumn::Users).descending();
        assert_eq!(state.click(SortColumn::Platform), SortDirection::Ascending);
        assert_eq!(state.column, Some(SortColumn::Platform));
    }

    #[test]
    fn test_column_from_str() {
        assert_eq!(SortColumn::from_str("users").unwrap(), SortColumn::Users);
        assert_eq!(
            SortColumn::from_str("market-share").unwrap(),
            SortColumn::MarketShare
        );
        assert_eq!(
            SortColumn::from_str("Platform").unwrap(),
            SortColumn::Platform
        );
        assert!(matches!(
            SortColumn::from_str("revenue"),
            Err(DashboardError::UnknownColumn(_))
        ));
    }

    #[test]
    fn test_column_keys_parse_back() {
        for column in SortColumn::ALL {
            assert_eq!(SortColumn::from_str(column.key()).unwrap(), column);
        }
    }
}
