//! Text-to-speech for narrated recommendations.
//!
//! Handlers only see `Arc<dyn SpeechSynthesizer>`; the HTTP-backed
//! implementation lives in `client`.

pub mod client;

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use client::SpeechClient;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Input is {len} characters, the limit is {limit}")]
    InputTooLong { len: usize, limit: usize },

    #[error("Speech API returned no audio")]
    EmptyAudio,
}

/// Voices offered by the speech API.
///
/// Serialized lowercase. Parsing, from JSON or the environment, ignores case
/// and surrounding whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Voice {
    Alloy,
    Echo,
    Fable,
    Onyx,
    #[default]
    Nova,
    Shimmer,
}

impl Voice {
    pub const ALL: [Voice; 6] = [
        Voice::Alloy,
        Voice::Echo,
        Voice::Fable,
        Voice::Onyx,
        Voice::Nova,
        Voice::Shimmer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::Alloy => "alloy",
            Voice::Echo => "echo",
            Voice::Fable => "fable",
            Voice::Onyx => "onyx",
            Voice::Nova => "nova",
            Voice::Shimmer => "shimmer",
        }
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown voice '{0}', expected one of alloy, echo, fable, onyx, nova, shimmer")]
pub struct UnknownVoice(String);

impl FromStr for Voice {
    type Err = UnknownVoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Voice::ALL
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| UnknownVoice(s.to_string()))
    }
}

impl TryFrom<String> for Voice {
    type Error = UnknownVoice;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Turns narration text into audio bytes (MP3).
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, voice: Voice) -> Result<Bytes, SpeechError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_default_is_nova() {
        assert_eq!(Voice::default(), Voice::Nova);
    }

    #[test]
    fn test_voice_from_str_is_case_insensitive() {
        assert_eq!("Shimmer".parse::<Voice>().unwrap(), Voice::Shimmer);
        assert_eq!(" echo ".parse::<Voice>().unwrap(), Voice::Echo);
        assert!("robot".parse::<Voice>().is_err());
    }

    #[test]
    fn test_voice_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Voice::Fable).unwrap(), r#""fable""#);
        let voice: Voice = serde_json::from_str(r#""alloy""#).unwrap();
        assert_eq!(voice, Voice::Alloy);
    }

    #[test]
    fn test_voice_json_accepts_same_spellings_as_env() {
        let voice: Voice = serde_json::from_str(r#""Shimmer""#).unwrap();
        assert_eq!(voice, Voice::Shimmer);
        let voice: Voice = serde_json::from_str(r#"" ONYX ""#).unwrap();
        assert_eq!(voice, Voice::Onyx);

        let err = serde_json::from_str::<Voice>(r#""robot""#).unwrap_err();
        assert!(err.to_string().contains("unknown voice 'robot'"));
    }

    #[test]
    fn test_every_voice_round_trips_through_its_name() {
        for voice in Voice::ALL {
            assert_eq!(voice.to_string().parse::<Voice>().unwrap(), voice);
        }
    }
}
