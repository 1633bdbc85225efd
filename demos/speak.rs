//! Synthesize a phrase and write the audio to disk.
//!
//! Credentials come from the environment:
//!
//! ```text
//! VOCALWARE_ACCOUNT_ID=... VOCALWARE_API_ID=... VOCALWARE_SECRET_PHRASE=... \
//!     cargo run --example speak -- "Hello from Rust" hello.mp3
//! ```

use vocalware::{Client, GenerateOptions, Voice};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let text = args.next().unwrap_or_else(|| "Hello from Rust!".to_string());
    let output = args.next().unwrap_or_else(|| "speech.mp3".to_string());

    let voice = Voice::find("en", "Susan").cloned().expect("built-in voice");
    let client = Client::builder().voice(voice).build()?;

    let audio = client.generate(&text, &GenerateOptions::default()).await?;
    std::fs::write(&output, &audio.data)?;
    println!(
        "wrote {} bytes ({}) to {}",
        audio.data.len(),
        audio.content_type,
        output
    );
    Ok(())
}
