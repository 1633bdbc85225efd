//! Voice catalog.
//!
//! The service identifies a voice by three numeric ids: engine, language and
//! voice. Callers normally pick one from the built-in catalog with
//! [`Voice::find`]; custom catalogs can be deserialized from YAML with
//! [`Voice::parse_catalog`].

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Speaker gender, as listed in the service's voice tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

/// A single voice the service can render audio with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    /// Language code, e.g. `"en"`.
    pub language: String,
    /// Display name, e.g. `"Susan"`.
    pub name: String,
    pub gender: Gender,
    /// Engine id (`EID` query parameter).
    pub engine_id: u32,
    /// Language id (`LID`).
    pub language_id: u32,
    /// Voice id (`VID`).
    pub voice_id: u32,
}

impl Voice {
    pub fn new(
        language: impl Into<String>,
        name: impl Into<String>,
        gender: Gender,
        engine_id: u32,
        language_id: u32,
        voice_id: u32,
    ) -> Self {
        Self {
            language: language.into(),
            name: name.into(),
            gender,
            engine_id,
            language_id,
            voice_id,
        }
    }

    /// Look up a built-in voice by language code and name, case-insensitively.
    pub fn find(language: &str, name: &str) -> Option<&'static Voice> {
        CATALOG.iter().find(|voice| {
            voice.language.eq_ignore_ascii_case(language) && voice.name.eq_ignore_ascii_case(name)
        })
    }

    /// All built-in voices.
    pub fn all() -> &'static [Voice] {
        &CATALOG
    }

    /// Parse a YAML list of voices into a catalog.
    ///
    /// Each entry carries the same fields as [`Voice`]:
    ///
    /// ```yaml
    /// - language: en
    ///   name: Susan
    ///   gender: female
    ///   engine_id: 2
    ///   language_id: 1
    ///   voice_id: 1
    /// ```
    pub fn parse_catalog(yaml: &str) -> Result<Vec<Voice>> {
        serde_yaml::from_str(yaml)
            .map_err(|e| Error::configuration(format!("invalid voice catalog: {e}")))
    }
}

static CATALOG: Lazy<Vec<Voice>> = Lazy::new(|| {
    use Gender::{Female, Male};
    vec![
        Voice::new("en", "Susan", Female, 2, 1, 1),
        Voice::new("en", "Dave", Male, 2, 1, 2),
        Voice::new("en", "Kenneth", Male, 2, 1, 3),
        Voice::new("en", "Elizabeth", Female, 2, 1, 4),
        Voice::new("en", "Simon", Male, 2, 1, 5),
        Voice::new("en", "Catherine", Female, 2, 1, 6),
        Voice::new("en", "Julie", Female, 3, 1, 1),
        Voice::new("en", "Paul", Male, 3, 1, 2),
        Voice::new("es", "Diego", Male, 2, 2, 1),
        Voice::new("es", "Francisca", Female, 2, 2, 2),
        Voice::new("es", "Esperanza", Female, 2, 2, 3),
        Voice::new("es", "Carlos", Male, 2, 2, 4),
        Voice::new("de", "Katrin", Female, 2, 3, 1),
        Voice::new("de", "Reiner", Male, 2, 3, 2),
        Voice::new("fr", "Bernard", Male, 2, 4, 1),
        Voice::new("fr", "Jolie", Female, 2, 4, 2),
        Voice::new("fr", "Florence", Female, 2, 4, 3),
        Voice::new("it", "Giovanni", Male, 2, 5, 1),
        Voice::new("it", "Paola", Female, 2, 5, 2),
        Voice::new("pt", "Gabriela", Female, 2, 6, 1),
        Voice::new("pt", "Felipe", Male, 2, 6, 2),
        Voice::new("nl", "Willem", Male, 2, 7, 1),
        Voice::new("nl", "Saskia", Female, 2, 7, 2),
        Voice::new("ru", "Boris", Male, 2, 8, 1),
        Voice::new("ru", "Olga", Female, 2, 8, 2),
        Voice::new("ja", "Show", Male, 2, 9, 1),
        Voice::new("ja", "Misaki", Female, 2, 9, 2),
        Voice::new("ko", "Junwoo", Male, 2, 10, 1),
        Voice::new("ko", "Yumi", Female, 2, 10, 2),
        Voice::new("zh", "Linlin", Female, 2, 11, 1),
        Voice::new("zh", "Lisheng", Male, 2, 11, 2),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_matches_language_and_name() {
        let voice = Voice::find("en", "Susan").expect("Susan is built in");
        assert_eq!(voice.engine_id, 2);
        assert_eq!(voice.language_id, 1);
        assert_eq!(voice.voice_id, 1);
        assert_eq!(voice.gender, Gender::Female);
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(Voice::find("EN", "susan"), Voice::find("en", "Susan"));
        assert!(Voice::find("ES", "DIEGO").is_some());
    }

    #[test]
    fn find_returns_none_for_unknown_voices() {
        assert!(Voice::find("en", "Nobody").is_none());
        assert!(Voice::find("xx", "Susan").is_none());
    }

    #[test]
    fn catalog_has_no_duplicate_identities() {
        let mut seen = std::collections::HashSet::new();
        for voice in Voice::all() {
            assert!(
                seen.insert((voice.engine_id, voice.language_id, voice.voice_id)),
                "duplicate ids for {}/{}",
                voice.language,
                voice.name
            );
        }
    }

    #[test]
    fn parse_catalog_reads_yaml_lists() {
        let yaml = r#"
- language: en
  name: Hal
  gender: male
  engine_id: 4
  language_id: 1
  voice_id: 9
"#;
        let voices = Voice::parse_catalog(yaml).unwrap();
        assert_eq!(voices.len(), 1);
        assert_eq!(voices[0], Voice::new("en", "Hal", Gender::Male, 4, 1, 9));
    }

    #[test]
    fn parse_catalog_rejects_malformed_entries() {
        let err = Voice::parse_catalog("- language: en\n  name: 3\n  bogus: true\n").unwrap_err();
        assert!(err.to_string().contains("invalid voice catalog"));
    }
}
