//! Analysis focus catalog and selection set.
//!
//! A brief selects one or more analytical lenses ("focuses") for the prompt.
//! The catalog is a closed set of ten lenses, each mapped to one instruction
//! sentence. Selection is either the `all` sentinel or a non-empty set of
//! explicit lenses; the toggle rule below keeps the set non-empty and the
//! sentinel exclusive.
//!
//! Rendering order is always catalog declaration order, never toggle order,
//! so the assembled prompt is stable regardless of how the user clicked
//! through the selection.

use crate::error::MercatoError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// One analytical lens from the closed catalog.
///
/// Variant order IS catalog order; `Ord` derives from it, which is what keeps
/// `FocusSelection` iteration stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Focus {
    GoToMarket,
    Competitive,
    Sizing,
    Pricing,
    Persona,
    Swot,
    Trend,
    Porters,
    Channels,
    Positioning,
}

impl Focus {
    /// All catalog entries, in catalog order.
    pub const ALL: [Focus; 10] = [
        Focus::GoToMarket,
        Focus::Competitive,
        Focus::Sizing,
        Focus::Pricing,
        Focus::Persona,
        Focus::Swot,
        Focus::Trend,
        Focus::Porters,
        Focus::Channels,
        Focus::Positioning,
    ];

    /// The instruction sentence for this lens.
    ///
    /// Exhaustive by construction: adding a catalog entry without a sentence
    /// fails to compile.
    pub fn instruction(self) -> &'static str {
        match self {
            Focus::GoToMarket => {
                "Definisci segmento prioritario, proposta di valore, pricing iniziale, canali e roadmap GTM."
            }
            Focus::Competitive => {
                "Mappa top 10 competitor (diretti/indiretti), share of voice, feature matrix e barriere all'ingresso."
            }
            Focus::Sizing => {
                "Stima TAM, SAM, SOM con ipotesi esplicite, fonti e sensibilità scenari (best/base/worst)."
            }
            Focus::Pricing => {
                "Analizza modelli di monetizzazione, willingness-to-pay, elasticità, benchmark e suggerisci struttura prezzi."
            }
            Focus::Persona => {
                "Definisci 2-4 buyer persona con pain, gain, jobs-to-be-done, criteri di acquisto e obiezioni."
            }
            Focus::Swot => "SWOT completa con implicazioni strategiche e 3-5 mosse prioritarie.",
            Focus::Trend => {
                "Analizza trend macro PESTLE, tecnologie emergenti e rischi normativi con impatti a 12-24 mesi."
            }
            Focus::Porters => {
                "Applica 5 Forze di Porter con esempi specifici di fornitori, clienti, entranti, sostituti e rivalità."
            }
            Focus::Channels => {
                "Valuta canali (SEO, SEM, social, partnership, field, marketplace) con CPA stimato, ramp time e rischi."
            }
            Focus::Positioning => {
                "Posiziona il brand su mappa percettiva, differenziatori chiave e messaggi per segmento."
            }
        }
    }

    /// The stable identifier used on the CLI and in brief files.
    pub fn slug(self) -> &'static str {
        match self {
            Focus::GoToMarket => "go-to-market",
            Focus::Competitive => "competitive",
            Focus::Sizing => "sizing",
            Focus::Pricing => "pricing",
            Focus::Persona => "persona",
            Focus::Swot => "swot",
            Focus::Trend => "trend",
            Focus::Porters => "porters",
            Focus::Channels => "channels",
            Focus::Positioning => "positioning",
        }
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Focus {
    type Err = MercatoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Focus::ALL
            .iter()
            .copied()
            .find(|focus| focus.slug() == s)
            .ok_or_else(|| {
                MercatoError::ConfigError(format!(
                    "unknown focus '{}' (expected one of: all, {})",
                    s,
                    Focus::ALL.map(Focus::slug).join(", ")
                ))
            })
    }
}

/// A toggle target: the `all` sentinel or one explicit lens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusToken {
    All,
    Lens(Focus),
}

impl FromStr for FocusToken {
    type Err = MercatoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(FocusToken::All)
        } else {
            s.parse().map(FocusToken::Lens)
        }
    }
}

/// The brief's focus selection.
///
/// Invariant: never empty. `Chosen` always holds at least one lens; removing
/// the last one resets to `All`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub enum FocusSelection {
    /// The sentinel: every catalog entry.
    All,
    /// An explicit non-empty subset, ordered by catalog order.
    Chosen(BTreeSet<Focus>),
}

impl Default for FocusSelection {
    fn default() -> Self {
        FocusSelection::All
    }
}

impl FocusSelection {
    /// Apply one toggle event and return the new selection.
    ///
    /// Rules:
    /// - toggling `all` always yields `All`;
    /// - toggling a lens while `All` is active selects just that lens;
    /// - toggling an active lens removes it; an emptied set resets to `All`;
    /// - toggling an inactive lens adds it.
    pub fn toggle(self, token: FocusToken) -> Self {
        let lens = match token {
            FocusToken::All => return FocusSelection::All,
            FocusToken::Lens(lens) => lens,
        };

        match self {
            FocusSelection::All => FocusSelection::Chosen(BTreeSet::from([lens])),
            FocusSelection::Chosen(mut set) => {
                if !set.remove(&lens) {
                    set.insert(lens);
                }
                if set.is_empty() {
                    FocusSelection::All
                } else {
                    FocusSelection::Chosen(set)
                }
            }
        }
    }

    /// The lenses to render, in catalog order.
    ///
    /// The `all` sentinel expands to the full catalog.
    pub fn resolved(&self) -> Vec<Focus> {
        match self {
            FocusSelection::All => Focus::ALL.to_vec(),
            FocusSelection::Chosen(set) => set.iter().copied().collect(),
        }
    }

    /// Whether the sentinel is active.
    pub fn is_all(&self) -> bool {
        matches!(self, FocusSelection::All)
    }

    /// Whether a lens would render (explicitly selected or via the sentinel).
    pub fn contains(&self, focus: Focus) -> bool {
        match self {
            FocusSelection::All => true,
            FocusSelection::Chosen(set) => set.contains(&focus),
        }
    }
}

impl TryFrom<Vec<String>> for FocusSelection {
    type Error = MercatoError;

    /// Brief files store the selection as a slug list. An empty list and a
    /// list containing `all` both normalize to the sentinel.
    fn try_from(slugs: Vec<String>) -> Result<Self, Self::Error> {
        if slugs.is_empty() || slugs.iter().any(|s| s == "all") {
            return Ok(FocusSelection::All);
        }
        let set = slugs
            .iter()
            .map(|s| s.parse())
            .collect::<Result<BTreeSet<Focus>, _>>()?;
        Ok(FocusSelection::Chosen(set))
    }
}

impl From<FocusSelection> for Vec<String> {
    fn from(selection: FocusSelection) -> Self {
        match selection {
            FocusSelection::All => vec!["all".to_string()],
            FocusSelection::Chosen(set) => {
                set.iter().map(|f| f.slug().to_string()).collect()
            }
        }
    }
}
