//! Mutation helpers for brief edits.

use super::Brief;
use crate::error::{MercatoError, Result};
use crate::focus::FocusToken;
use chrono::Utc;

/// Field names accepted by `set_field`, for error messages and `show`.
pub const FIELD_NAMES: &[&str] = &[
    "industry",
    "target_market",
    "geography",
    "objective",
    "stage",
    "budget",
    "timeframe",
    "products_services",
    "competitive_advantage",
    "available_data",
    "constraints",
    "methodologies",
    "languages",
    "tone",
    "detail",
    "format",
];

impl Brief {
    /// Set one field by name.
    ///
    /// Free-text fields accept any value including the empty string. Closed
    /// enum fields reject out-of-set values with a configuration error. The
    /// focus selection is not settable here; it goes through `toggle_focus`
    /// so the non-empty invariant cannot be bypassed.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "industry" => self.industry = value.to_string(),
            "target_market" => self.target_market = value.to_string(),
            "geography" => self.geography = value.to_string(),
            "objective" => self.objective = value.to_string(),
            "stage" => self.stage = value.parse()?,
            "budget" => self.budget = value.to_string(),
            "timeframe" => self.timeframe = value.to_string(),
            "products_services" => self.products_services = value.to_string(),
            "competitive_advantage" => self.competitive_advantage = value.to_string(),
            "available_data" => self.available_data = value.to_string(),
            "constraints" => self.constraints = value.to_string(),
            "methodologies" => self.methodologies = value.to_string(),
            "languages" => self.languages = value.to_string(),
            "tone" => self.tone = value.parse()?,
            "detail" => self.detail = value.parse()?,
            "format" => self.format = value.parse()?,
            "focus" => {
                return Err(MercatoError::UserError(
                    "focus is managed with `mercato focus toggle <id>`".to_string(),
                ));
            }
            other => {
                return Err(MercatoError::ConfigError(format!(
                    "unknown field '{}' (expected one of: {})",
                    other,
                    FIELD_NAMES.join(", ")
                )));
            }
        }
        self.touch();
        Ok(())
    }

    /// Apply one focus toggle event.
    pub fn toggle_focus(&mut self, token: FocusToken) {
        self.focus = self.focus.clone().toggle(token);
        self.touch();
    }

    /// Refresh the `updated` timestamp.
    pub fn touch(&mut self) {
        self.updated = Some(Utc::now());
    }
}
