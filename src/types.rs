//! Core request and response types.

use std::fmt;

use bytes::Bytes;

/// Audio container the service is asked to produce (`EXT` query parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioExtension {
    Mp3,
    Swf,
}

impl AudioExtension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Swf => "swf",
        }
    }
}

impl fmt::Display for AudioExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// URL scheme used to reach the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    pub fn scheme(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme())
    }
}

/// Synthesized audio returned by a successful request.
#[derive(Debug, Clone)]
pub struct AudioResult {
    /// Raw audio payload, exactly as returned by the service.
    pub data: Bytes,
    /// Content type that justified accepting the payload as audio.
    pub content_type: String,
}

/// Content types the service uses for audio payloads. Anything else in a
/// 2xx response is an error message, not audio.
const AUDIO_CONTENT_TYPES: [&str; 2] = ["audio/mpeg", "application/x-shockwave-flash"];

/// Matches the media-type essence only; parameters after `;` are ignored.
pub(crate) fn is_audio_content_type(value: &str) -> bool {
    let essence = value.split(';').next().unwrap_or(value).trim();
    AUDIO_CONTENT_TYPES
        .iter()
        .any(|accepted| essence.eq_ignore_ascii_case(accepted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_content_types_are_recognized() {
        assert!(is_audio_content_type("audio/mpeg"));
        assert!(is_audio_content_type("application/x-shockwave-flash"));
        assert!(!is_audio_content_type("text/html"));
        assert!(!is_audio_content_type("application/json"));
    }

    #[test]
    fn content_type_matching_ignores_parameters_and_case() {
        assert!(is_audio_content_type("audio/mpeg; charset=binary"));
        assert!(is_audio_content_type("Audio/MPEG"));
        assert!(!is_audio_content_type("text/html; charset=utf-8"));
    }

    #[test]
    fn extensions_render_as_query_values() {
        assert_eq!(AudioExtension::Mp3.as_str(), "mp3");
        assert_eq!(AudioExtension::Swf.to_string(), "swf");
    }
}
