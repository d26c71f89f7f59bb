use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};

use crate::speech::{SpeechError, SpeechSynthesizer, Voice};

pub const SPEECH_MODEL: &str = "tts-1";
/// Provider limit on the `input` field.
pub const MAX_INPUT_CHARS: usize = 4096;

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: Voice,
    response_format: &'a str,
}

/// Speech synthesizer backed by the OpenAI-compatible `/audio/speech` endpoint.
#[derive(Clone)]
pub struct SpeechClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SpeechClient {
    /// Shares the HTTP connection pool of the chat client.
    pub fn new(client: Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for SpeechClient {
    async fn synthesize(&self, text: &str, voice: Voice) -> Result<Bytes, SpeechError> {
        check_input_length(text)?;

        let response = self
            .client
            .post(format!("{}/audio/speech", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&SpeechRequest {
                model: SPEECH_MODEL,
                input: text,
                voice,
                response_format: "mp3",
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Speech API returned {}: {}", status, body);
            return Err(SpeechError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let audio = response.bytes().await?;
        if audio.is_empty() {
            return Err(SpeechError::EmptyAudio);
        }

        debug!("Synthesized {} bytes of audio with voice {}", audio.len(), voice);
        Ok(audio)
    }
}

fn check_input_length(text: &str) -> Result<(), SpeechError> {
    let len = text.chars().count();
    if len > MAX_INPUT_CHARS {
        return Err(SpeechError::InputTooLong {
            len,
            limit: MAX_INPUT_CHARS,
        });
    }
    Ok(())
}
