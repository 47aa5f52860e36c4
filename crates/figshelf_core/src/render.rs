//! Plain-text rendering of figures for terminal output.
//!
//! # Responsibility
//! - Produce uncolored, structured renderings of stored figures.
//! - Bucket market values into display tiers.
//!
//! # Invariants
//! - Tiers are presentation-only and are never persisted.
//! - Rendering carries no color codes; callers style it at the boundary.

use crate::model::figure::{Figure, MARKET_VALUE_LABEL};
use std::fmt::{Display, Formatter};

/// Display bucket for a market value.
///
/// Boundaries use strict comparisons: `> 200`, `> 100`, `> 50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTier {
    Top,
    MidHigh,
    MidLow,
    Bottom,
}

impl ValueTier {
    pub fn from_value(market_value: f64) -> Self {
        if market_value > 200.0 {
            Self::Top
        } else if market_value > 100.0 {
            Self::MidHigh
        } else if market_value > 50.0 {
            Self::MidLow
        } else {
            Self::Bottom
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Top => "alto",
            Self::MidHigh => "medio-alto",
            Self::MidLow => "medio-bajo",
            Self::Bottom => "bajo",
        }
    }
}

/// Rendered figure ready for output.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureView {
    pub id: String,
    pub fields: Vec<(&'static str, String)>,
    pub market_value: String,
    pub tier: ValueTier,
}

impl FigureView {
    pub fn from_figure(figure: &Figure) -> Self {
        Self {
            id: figure.id.clone(),
            fields: figure.labeled_fields(),
            market_value: figure.market_value_text(),
            tier: ValueTier::from_value(figure.market_value),
        }
    }

    /// The market value line with its tier tag, e.g. `Valor de mercado: 250€ [alto]`.
    pub fn market_value_line(&self) -> String {
        format!(
            "{MARKET_VALUE_LABEL}: {} [{}]",
            self.market_value,
            self.tier.label()
        )
    }
}

impl Display for FigureView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (label, value) in &self.fields {
            writeln!(f, "{label}: {value}")?;
        }
        write!(f, "{}", self.market_value_line())
    }
}
