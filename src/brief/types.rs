//! Closed-set field types for the brief.
//!
//! Each enum carries the label that appears both in brief files and in the
//! rendered prompt. Labels are Italian because the rendered prompt is.

use crate::error::MercatoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// The label used in brief files and prompt output.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// All values, in declaration order.
            pub const VALUES: &'static [$name] = &[$($name::$variant,)+];
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = MercatoError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::VALUES
                    .iter()
                    .copied()
                    .find(|v| v.label() == s)
                    .ok_or_else(|| {
                        MercatoError::ConfigError(format!(
                            "unknown {} '{}' (expected one of: {})",
                            stringify!($name).to_lowercase(),
                            s,
                            Self::VALUES
                                .iter()
                                .map(|v| v.label())
                                .collect::<Vec<_>>()
                                .join(", ")
                        ))
                    })
            }
        }
    };
}

closed_set! {
    /// Company stage. `Unset` renders as the placeholder.
    Stage {
        Idea => "idea",
        PreSeed => "pre-seed",
        Seed => "seed",
        Growth => "growth",
        Scale => "scale",
        Unset => "unset",
    }
}

closed_set! {
    /// Writing tone for the requested analysis.
    Tone {
        Formale => "formale",
        Consulenziale => "consulenziale",
        Accademico => "accademico",
        Pratico => "pratico",
        Persuasivo => "persuasivo",
        Neutro => "neutro",
    }
}

closed_set! {
    /// How deep the analysis should go.
    Detail {
        Sintetico => "sintetico",
        Standard => "standard",
        Approfondito => "approfondito",
    }
}

closed_set! {
    /// Shape of the requested document.
    OutputFormat {
        Report => "report",
        Bullet => "bullet",
        Tabella => "tabella",
    }
}

impl Default for Stage {
    fn default() -> Self {
        Stage::Unset
    }
}

impl Default for Tone {
    fn default() -> Self {
        Tone::Consulenziale
    }
}

impl Default for Detail {
    fn default() -> Self {
        Detail::Approfondito
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Report
    }
}
