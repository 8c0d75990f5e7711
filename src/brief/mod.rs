//! Brief model for mercato.
//!
//! A brief is the structured description of the business context and the
//! desired output shape. It lives in a YAML file owned by the CLI; the prompt
//! assembler only ever sees the in-memory record and recomputes the full
//! document from it on every call.
//!
//! # Brief File Format
//!
//! ```text
//! industry: SaaS HR
//! target_market: PMI
//! geography: Italia
//! stage: unset
//! tone: consulenziale
//! focus:
//! - all
//! ```
//!
//! Missing fields fall back to the defaults below, so hand-edited files stay
//! loadable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::focus::FocusSelection;

mod io;
mod mutations;

pub mod types;
pub use types::{Detail, OutputFormat, Stage, Tone};

/// The structured input record for prompt assembly.
///
/// Free-text fields accept any string including the empty string; empty
/// values render as the `n/d` placeholder at assembly time, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brief {
    // =========================================================================
    // Business context
    // =========================================================================
    /// Industry or sector (e.g., "SaaS HR", "FoodTech").
    pub industry: String,

    /// Target market (e.g., "PMI", "Enterprise", "Consumer").
    pub target_market: String,

    /// Geographic area of interest.
    pub geography: String,

    /// What the analysis should achieve.
    pub objective: String,

    /// Company stage.
    pub stage: Stage,

    /// Indicative budget (e.g., "50k-100k EUR").
    pub budget: String,

    /// Time horizon for the analysis.
    pub timeframe: String,

    /// Description of the offering.
    pub products_services: String,

    /// Moat, IP, network effects, cost structure, UX.
    pub competitive_advantage: String,

    /// Internal data, research, current metrics available to the analyst.
    pub available_data: String,

    /// Legal, budget, or timing constraints.
    pub constraints: String,

    /// Preferred sources and methodologies.
    pub methodologies: String,

    // =========================================================================
    // Presentation
    // =========================================================================
    /// Output language(s) for the analysis.
    pub languages: String,

    /// Writing tone.
    pub tone: Tone,

    /// Depth of the analysis.
    pub detail: Detail,

    /// Document shape.
    pub format: OutputFormat,

    // =========================================================================
    // Focus selection
    // =========================================================================
    /// Selected analytical lenses. Never empty; see the focus module.
    pub focus: FocusSelection,

    // =========================================================================
    // Lifecycle timestamps
    // =========================================================================
    /// When the brief file was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// When the brief was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Default for Brief {
    fn default() -> Self {
        Self {
            industry: String::new(),
            target_market: String::new(),
            geography: "Italia".to_string(),
            objective: "Valutare l'opportunità e definire le priorità operative".to_string(),
            stage: Stage::default(),
            budget: String::new(),
            timeframe: "Q4 2025".to_string(),
            products_services: String::new(),
            competitive_advantage: String::new(),
            available_data: String::new(),
            constraints: String::new(),
            methodologies:
                "TAM SAM SOM, 5 Forze di Porter, SWOT, JTBD, PESTLE, Analisi Canali".to_string(),
            languages: "Italiano".to_string(),
            tone: Tone::default(),
            detail: Detail::default(),
            format: OutputFormat::default(),
            focus: FocusSelection::default(),
            created: None,
            updated: None,
        }
    }
}
