//! Domain value objects - Immutable values describing a greeting

use serde::{Deserialize, Serialize};

/// A fixed greeting text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Greeting(&'static str);

impl Greeting {
    pub const fn new(text: &'static str) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Greeting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Greeting {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Language a greeter speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    French,
    Norwegian,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::French, Language::Norwegian];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::French => "french",
            Language::Norwegian => "norwegian",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
