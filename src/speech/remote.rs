//! MP3 export through the network-backed synthesis service
//!
//! Live playback never touches the network; saving an MP3 does. The service
//! is the translate_tts endpoint: one HTTP GET per text chunk, each response
//! a raw MP3 stream. Successive MP3 streams concatenate into a single
//! playable file.
//!
//! Export support is compiled in by the `cloud` feature (on by default).
//! Callers should check [`is_available`] before prompting the user for a
//! destination; the compiled-out stub below is only a backstop.

use crate::Result;
use std::path::Path;

/// Whether MP3 export support was compiled into this build
pub const fn is_available() -> bool {
    cfg!(feature = "cloud")
}

/// Synthesize `text` in `language` and write the MP3 to `path`
#[cfg(feature = "cloud")]
pub fn export_mp3(text: &str, language: &str, path: &Path) -> Result<()> {
    RemoteSynth::new(language)?.save_mp3(text, path)
}

/// Stub for builds without the `cloud` feature
#[cfg(not(feature = "cloud"))]
pub fn export_mp3(_text: &str, _language: &str, _path: &Path) -> Result<()> {
    Err(crate::TtscError::CloudMissing)
}

#[cfg(feature = "cloud")]
pub use cloud::RemoteSynth;

#[cfg(feature = "cloud")]
mod cloud {
    use crate::speech::chunker::{split_text, MAX_CHUNK_CHARS};
    use crate::{Result, TtscError};
    use log::{debug, info};
    use std::path::Path;
    use std::time::Duration;

    const ENDPOINT: &str = "https://translate.google.com/translate_tts";

    /// The endpoint refuses requests without a browser user agent
    const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                              (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

    const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Client for the hosted synthesis service
    pub struct RemoteSynth {
        client: reqwest::blocking::Client,
        language: String,
    }

    impl RemoteSynth {
        /// Build a client speaking `language` (an IETF tag such as "en")
        pub fn new(language: &str) -> Result<Self> {
            let client = reqwest::blocking::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(REQUEST_TIMEOUT)
                .build()
                .map_err(|e| TtscError::Export(format!("failed to build HTTP client: {e}")))?;

            Ok(Self {
                client,
                language: language.to_string(),
            })
        }

        /// Fetch the MP3 rendition of `text` as raw bytes
        pub fn fetch_mp3(&self, text: &str) -> Result<Vec<u8>> {
            let chunks = split_text(text, MAX_CHUNK_CHARS);
            if chunks.is_empty() {
                return Err(TtscError::NothingToSave);
            }

            let total = chunks.len();
            let total_s = total.to_string();
            let mut audio = Vec::new();

            for (idx, chunk) in chunks.iter().enumerate() {
                debug!(
                    "Fetching chunk {}/{} ({} chars)",
                    idx + 1,
                    total,
                    chunk.chars().count()
                );

                let idx_s = idx.to_string();
                let textlen = chunk.chars().count().to_string();
                let params: [(&str, &str); 7] = [
                    ("ie", "UTF-8"),
                    ("client", "tw-ob"),
                    ("tl", &self.language),
                    ("q", chunk),
                    ("total", &total_s),
                    ("idx", &idx_s),
                    ("textlen", &textlen),
                ];

                let response = self
                    .client
                    .get(ENDPOINT)
                    .query(&params)
                    .send()
                    .map_err(|e| TtscError::Export(format!("network request failed: {e}")))?;

                let response = response.error_for_status().map_err(|e| {
                    TtscError::Export(format!("synthesis service rejected request: {e}"))
                })?;

                let bytes = response
                    .bytes()
                    .map_err(|e| TtscError::Export(format!("failed to read audio data: {e}")))?;

                audio.extend_from_slice(&bytes);
            }

            Ok(audio)
        }

        /// Fetch and write the MP3 to `path`
        ///
        /// The bytes are fully collected before anything is written, so a
        /// mid-transfer failure leaves no partial file behind.
        pub fn save_mp3(&self, text: &str, path: &Path) -> Result<()> {
            let audio = self.fetch_mp3(text)?;
            std::fs::write(path, &audio)?;
            info!("Wrote {} bytes of MP3 audio to {}", audio.len(), path.display());
            Ok(())
        }
    }
}
