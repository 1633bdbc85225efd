//! Construction and signing of synthesis request URLs.
//!
//! The service authenticates each GET with a `CS` query parameter: the MD5
//! digest of every request parameter concatenated in a fixed order, followed
//! by the account's secret phrase. Optional parameters that are unset
//! contribute an empty string to the digest and are omitted from the query
//! string entirely.

use url::Url;

use crate::error::Error;
use crate::types::{AudioExtension, Protocol};
use crate::voice::Voice;
use crate::Result;

/// Fully merged attribute set for one synthesis request.
#[derive(Debug, Clone)]
pub(crate) struct RequestParams {
    pub account_id: String,
    pub api_id: String,
    pub secret_phrase: String,
    pub voice: Voice,
    pub extension: AudioExtension,
    pub protocol: Protocol,
    pub host: String,
    pub port: Option<u16>,
    pub path: String,
    pub fx_type: Option<String>,
    pub fx_level: Option<u8>,
    pub session: Option<String>,
    pub text: String,
}

impl RequestParams {
    /// Signed request URL for this parameter set.
    pub fn to_url(&self) -> Result<Url> {
        let authority = match self.port {
            Some(port) => format!("{}:{}", self.host, port),
            None => self.host.clone(),
        };
        let base = format!("{}://{}{}", self.protocol.scheme(), authority, self.path);
        let mut url = Url::parse(&base)
            .map_err(|e| Error::configuration(format!("invalid request URL {base:?}: {e}")))?;

        let checksum = self.checksum();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("EID", &self.voice.engine_id.to_string())
                .append_pair("LID", &self.voice.language_id.to_string())
                .append_pair("VID", &self.voice.voice_id.to_string())
                .append_pair("TXT", &self.text)
                .append_pair("EXT", self.extension.as_str());
            if let Some(fx_type) = &self.fx_type {
                query.append_pair("FX_TYPE", fx_type);
            }
            if let Some(fx_level) = self.fx_level {
                query.append_pair("FX_LEVEL", &fx_level.to_string());
            }
            query
                .append_pair("ACC", &self.account_id)
                .append_pair("API", &self.api_id);
            if let Some(session) = &self.session {
                query.append_pair("SESSION", session);
            }
            query.append_pair("CS", &checksum);
        }
        Ok(url)
    }

    /// Lowercase hex MD5 over the concatenated parameter values and the
    /// secret phrase, in the service's mandated order.
    fn checksum(&self) -> String {
        let mut input = String::with_capacity(64 + self.text.len());
        input.push_str(&self.voice.engine_id.to_string());
        input.push_str(&self.voice.language_id.to_string());
        input.push_str(&self.voice.voice_id.to_string());
        input.push_str(&self.text);
        input.push_str(self.extension.as_str());
        if let Some(fx_type) = &self.fx_type {
            input.push_str(fx_type);
        }
        if let Some(fx_level) = self.fx_level {
            input.push_str(&fx_level.to_string());
        }
        input.push_str(&self.account_id);
        input.push_str(&self.api_id);
        if let Some(session) = &self.session {
            input.push_str(session);
        }
        input.push_str(&self.secret_phrase);
        format!("{:x}", md5::compute(input.as_bytes()))
    }
}
