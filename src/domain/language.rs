use std::fmt;
use std::str::FromStr;

/// Target languages a summary can be translated into. The set is closed:
/// anything outside it is rejected before the provider is ever contacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Language {
    Hindi,
    Bengali,
    Telugu,
    Tamil,
    Marathi,
    Gujarati,
    Kannada,
    Malayalam,
    Punjabi,
    Urdu,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::Hindi,
        Language::Bengali,
        Language::Telugu,
        Language::Tamil,
        Language::Marathi,
        Language::Gujarati,
        Language::Kannada,
        Language::Malayalam,
        Language::Punjabi,
        Language::Urdu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Hindi => "Hindi",
            Language::Bengali => "Bengali",
            Language::Telugu => "Telugu",
            Language::Tamil => "Tamil",
            Language::Marathi => "Marathi",
            Language::Gujarati => "Gujarati",
            Language::Kannada => "Kannada",
            Language::Malayalam => "Malayalam",
            Language::Punjabi => "Punjabi",
            Language::Urdu => "Urdu",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    // Identifiers are case-sensitive on purpose: the set is part of the API
    // contract, not free text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hindi" => Ok(Language::Hindi),
            "Bengali" => Ok(Language::Bengali),
            "Telugu" => Ok(Language::Telugu),
            "Tamil" => Ok(Language::Tamil),
            "Marathi" => Ok(Language::Marathi),
            "Gujarati" => Ok(Language::Gujarati),
            "Kannada" => Ok(Language::Kannada),
            "Malayalam" => Ok(Language::Malayalam),
            "Punjabi" => Ok(Language::Punjabi),
            "Urdu" => Ok(Language::Urdu),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
