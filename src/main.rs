use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::info;

use tiktok_tts::{Synthesizer, voice};

/// Long-form text-to-speech with chunking and backend failover
#[derive(Parser, Debug)]
#[command(name = "tiktok-tts")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Pass text in instead of reading from stdin
    #[arg(long = "in", value_name = "TEXT")]
    text: Option<String>,

    /// The voice to use (blank means random)
    #[arg(long)]
    voice: Option<String>,

    /// Print the available voices and exit
    #[arg(long = "voices")]
    list_voices: bool,

    /// Write the audio to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log the chunking details; helps when the audio sounds cut off
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // All diagnostics go to stderr; stdout carries the audio bytes.
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if cli.list_voices {
        eprintln!("Voices:");
        for v in voice::VOICES {
            eprintln!("\t{v}");
        }
        return Ok(());
    }

    let voice = match cli.voice {
        Some(v) => v,
        None => {
            let picked = voice::random_voice(&mut rand::thread_rng());
            info!(voice = picked, "selected random voice");
            picked.to_string()
        }
    };

    let text = match cli.text {
        Some(t) => t,
        None => {
            info!("reading from stdin");
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("failed to read text from stdin")?;
            info!("done reading from stdin");
            buf
        }
    };

    let synthesizer = Synthesizer::default();
    let audio = synthesizer
        .synthesize(&text, &voice)
        .await
        .context("failed to generate voice")?;

    match cli.output {
        Some(path) => {
            tokio::fs::write(&path, &audio)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = audio.len(), "audio written");
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(&audio).await?;
            stdout.flush().await?;
        }
    }

    info!("finished");
    Ok(())
}
