//! TTS client: configuration, validation, and the request/response cycle.

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{Error, ResponseDetails};
use crate::request::RequestParams;
use crate::types::{is_audio_content_type, AudioExtension, AudioResult, Protocol};
use crate::voice::Voice;
use crate::Result;

const DEFAULT_HOST: &str = "www.vocalware.com";
const DEFAULT_PATH: &str = "/tts/gen.php";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the service's synthesis endpoint.
///
/// Configuration is validated when the client is built and immutable
/// afterwards, so a `Client` can be shared freely between tasks. Individual
/// calls can override any configured field through [`GenerateOptions`]
/// without touching the stored configuration.
#[derive(Debug)]
pub struct Client {
    http_client: reqwest::Client,
    account_id: String,
    api_id: String,
    secret_phrase: String,
    voice: Voice,
    extension: AudioExtension,
    protocol: Protocol,
    host: String,
    port: Option<u16>,
    path: String,
    fx_type: Option<String>,
    fx_level: Option<u8>,
    session: Option<String>,
}

/// Per-call overrides for [`Client::generate`]. Fields left `None` fall
/// back to the client configuration.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub account_id: Option<String>,
    pub api_id: Option<String>,
    pub secret_phrase: Option<String>,
    pub voice: Option<Voice>,
    pub audio_extension: Option<AudioExtension>,
    pub protocol: Option<Protocol>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: Option<String>,
    pub fx_type: Option<String>,
    pub fx_level: Option<u8>,
    pub session: Option<String>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Synthesize `text` and return the raw audio bytes.
    ///
    /// Leading and trailing whitespace is stripped from `text` before the
    /// request is built; an empty remainder is still sent, the service
    /// decides what that means.
    ///
    /// The service reports its own failures inside successful HTTP
    /// responses: a 2xx answer whose content type is not audio carries a
    /// textual error message as its body. Classification therefore checks
    /// both the status and the content type before accepting a payload.
    /// One GET per call, no retries.
    pub async fn generate(&self, text: &str, options: &GenerateOptions) -> Result<AudioResult> {
        let params = self.request_params(text, options);
        let url = params.to_url()?;
        debug!(url = %url, voice = %params.voice.name, "requesting synthesis");

        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::service(url.as_str(), format!("request failed: {e}")))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::service(url.as_str(), format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            warn!(status = %status, url = %url, "unexpected response status");
            return Err(Error::service_with_details(
                url.as_str(),
                "unexpected response status",
                ResponseDetails {
                    status: status.as_u16(),
                    content_type,
                    body: String::from_utf8_lossy(&body).into_owned(),
                },
            ));
        }

        if let Some(ct) = content_type.as_deref() {
            if is_audio_content_type(ct) {
                return Ok(AudioResult {
                    data: body,
                    content_type: ct.to_owned(),
                });
            }
        }

        // 2xx without an audio content type: the body is the service's
        // error message.
        let body_text = String::from_utf8_lossy(&body).into_owned();
        let cause = body_text.trim().to_string();
        warn!(url = %url, "service returned an error body");
        Err(Error::service_with_details(
            url.as_str(),
            cause,
            ResponseDetails {
                status: status.as_u16(),
                content_type,
                body: body_text,
            },
        ))
    }

    pub fn voice(&self) -> &Voice {
        &self.voice
    }

    pub fn audio_extension(&self) -> AudioExtension {
        self.extension
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Merge the stored configuration with per-call overrides into a fresh
    /// parameter set. The stored configuration is never modified.
    fn request_params(&self, text: &str, options: &GenerateOptions) -> RequestParams {
        RequestParams {
            account_id: options
                .account_id
                .clone()
                .unwrap_or_else(|| self.account_id.clone()),
            api_id: options.api_id.clone().unwrap_or_else(|| self.api_id.clone()),
            secret_phrase: options
                .secret_phrase
                .clone()
                .unwrap_or_else(|| self.secret_phrase.clone()),
            voice: options.voice.clone().unwrap_or_else(|| self.voice.clone()),
            extension: options.audio_extension.unwrap_or(self.extension),
            protocol: options.protocol.unwrap_or(self.protocol),
            host: options.host.clone().unwrap_or_else(|| self.host.clone()),
            port: options.port.or(self.port),
            path: options.path.clone().unwrap_or_else(|| self.path.clone()),
            fx_type: options.fx_type.clone().or_else(|| self.fx_type.clone()),
            fx_level: options.fx_level.or(self.fx_level),
            session: options.session.clone().or_else(|| self.session.clone()),
            text: text.trim().to_string(),
        }
    }
}

/// Builder for [`Client`].
///
/// Credentials left unset fall back to the `VOCALWARE_ACCOUNT_ID`,
/// `VOCALWARE_API_ID` and `VOCALWARE_SECRET_PHRASE` environment variables
/// before validation.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    account_id: Option<String>,
    api_id: Option<String>,
    secret_phrase: Option<String>,
    voice: Option<Voice>,
    extension: Option<AudioExtension>,
    protocol: Option<Protocol>,
    host: Option<String>,
    port: Option<u16>,
    path: Option<String>,
    fx_type: Option<String>,
    fx_level: Option<u8>,
    session: Option<String>,
    timeout_secs: u64,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            account_id: None,
            api_id: None,
            secret_phrase: None,
            voice: None,
            extension: None,
            protocol: None,
            host: None,
            port: None,
            path: None,
            fx_type: None,
            fx_level: None,
            session: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    pub fn api_id(mut self, api_id: impl Into<String>) -> Self {
        self.api_id = Some(api_id.into());
        self
    }

    pub fn secret_phrase(mut self, secret_phrase: impl Into<String>) -> Self {
        self.secret_phrase = Some(secret_phrase.into());
        self
    }

    pub fn voice(mut self, voice: Voice) -> Self {
        self.voice = Some(voice);
        self
    }

    pub fn audio_extension(mut self, extension: AudioExtension) -> Self {
        self.extension = Some(extension);
        self
    }

    pub fn protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = Some(protocol);
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn fx_type(mut self, fx_type: impl Into<String>) -> Self {
        self.fx_type = Some(fx_type.into());
        self
    }

    pub fn fx_level(mut self, fx_level: u8) -> Self {
        self.fx_level = Some(fx_level);
        self
    }

    pub fn session(mut self, session: impl Into<String>) -> Self {
        self.session = Some(session.into());
        self
    }

    /// Timeout applied to the underlying HTTP client; the transport owns
    /// timeout enforcement, there is no per-call budget.
    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Validate the configuration and construct the client.
    ///
    /// Missing required fields are reported in a fixed order: secret
    /// phrase, API id, account id, voice.
    pub fn build(self) -> Result<Client> {
        let secret_phrase = self
            .secret_phrase
            .or_else(|| std::env::var("VOCALWARE_SECRET_PHRASE").ok())
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| Error::configuration("secret phrase is required"))?;
        let api_id = self
            .api_id
            .or_else(|| std::env::var("VOCALWARE_API_ID").ok())
            .ok_or_else(|| Error::configuration("API id is required"))?;
        let account_id = self
            .account_id
            .or_else(|| std::env::var("VOCALWARE_ACCOUNT_ID").ok())
            .ok_or_else(|| Error::configuration("account id is required"))?;
        let voice = self
            .voice
            .ok_or_else(|| Error::configuration("voice is required"))?;

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
            .map_err(|e| Error::configuration(format!("failed to create HTTP client: {e}")))?;

        Ok(Client {
            http_client,
            account_id,
            api_id,
            secret_phrase,
            voice,
            extension: self.extension.unwrap_or(AudioExtension::Mp3),
            protocol: self.protocol.unwrap_or(Protocol::Http),
            host: self.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: self.port,
            path: self.path.unwrap_or_else(|| DEFAULT_PATH.to_string()),
            fx_type: self.fx_type,
            fx_level: self.fx_level,
            session: self.session,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
