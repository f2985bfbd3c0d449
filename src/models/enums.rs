use serde::{Deserialize, Serialize};

/// Returned when a stored string does not name any variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field} value: {value:?}")]
pub struct ParseEnumError {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ParseEnumError {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// Status is asserted by the exam report, never derived from value vs. range.
str_enum!(LabStatus {
    Normal => "Normal",
    High => "High",
    Low => "Low",
});

str_enum!(Priority {
    High => "High",
    Medium => "Medium",
    Low => "Low",
});

str_enum!(Confidence {
    High => "High",
    Medium => "Medium",
    Low => "Low",
});

str_enum!(LabPanel {
    Biochemistry => "biochemistry",
    Hematology => "hematology",
});

impl LabPanel {
    /// CSV artifact holding this panel's rows.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Biochemistry => crate::config::BIOCHEMISTRY_FILE,
            Self::Hematology => crate::config::HEMATOLOGY_FILE,
        }
    }

    pub fn title_pt(&self) -> &'static str {
        match self {
            Self::Biochemistry => "Painel Bioquímico",
            Self::Hematology => "Painel Hematológico",
        }
    }
}

/// Language used for bilingual display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pt,
    En,
}

impl Language {
    /// Parse a `?lang=` query value.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pt" => Some(Self::Pt),
            "en" => Some(Self::En),
            _ => None,
        }
    }
}
