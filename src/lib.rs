//! Client for the Vocalware text-to-speech HTTP API.
//!
//! Vocalware renders text into MP3 or Flash audio through a single signed
//! GET endpoint. The protocol has one sharp edge this crate exists to
//! handle: the service reports its own failures inside HTTP 2xx responses,
//! distinguishable from audio only by the content type. [`Client::generate`]
//! therefore classifies every response by status *and* content type, so an
//! error page is never handed back to the caller as audio bytes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vocalware::{Client, GenerateOptions, Voice};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let voice = Voice::find("en", "Susan").cloned().expect("built-in voice");
//!     let client = Client::builder()
//!         .account_id("1234567")
//!         .api_id("7654321")
//!         .secret_phrase("top-secret")
//!         .voice(voice)
//!         .build()?;
//!
//!     let audio = client
//!         .generate("Hello from Rust!", &GenerateOptions::default())
//!         .await?;
//!     std::fs::write("hello.mp3", &audio.data)?;
//!     Ok(())
//! }
//! ```
//!
//! Configuration is validated once at construction and immutable afterwards;
//! any field can still be overridden for a single call through
//! [`GenerateOptions`] without touching the stored configuration.

pub mod client;
pub mod error;
mod request;
pub mod types;
pub mod voice;

pub use client::{Client, ClientBuilder, GenerateOptions};
pub use error::{Error, ResponseDetails};
pub use types::{AudioExtension, AudioResult, Protocol};
pub use voice::{Gender, Voice};

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
