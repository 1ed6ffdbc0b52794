use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use conversation_tree::{ClientConfig, Config, RecordingClient, RecordingId};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "conversation-tree", about = "Talk to the conversation tree data store")]
struct Cli {
    /// Config file (without extension)
    #[arg(long, default_value = "config/conversation-tree")]
    config: String,

    /// Overrides the configured data store address
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Register a new recording
    Create {
        audio_file_path: String,
        /// Recording this one branches off
        #[arg(long)]
        parent: Option<RecordingId>,
        /// Seconds into the parent where the branch starts
        #[arg(long)]
        parent_time: Option<f64>,
    },
    /// Print a recording and all of its descendants
    Tree { recording_id: RecordingId },
    /// Replace a recording's transcription
    Transcription {
        recording_id: RecordingId,
        text: String,
    },
    /// Replace a recording's image prompts
    Prompts {
        recording_id: RecordingId,
        #[arg(required = true)]
        prompts: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    let mut client_config = ClientConfig::from(&cfg.data_store);
    if let Some(base_url) = cli.base_url {
        client_config.base_url = base_url;
    }
    info!("Using data store at {}", client_config.base_url);

    let client = RecordingClient::new(client_config).context("Failed to build data store client")?;

    match cli.command {
        Command::Create {
            audio_file_path,
            parent,
            parent_time,
        } => {
            let recording = client
                .create_recording(&audio_file_path, parent, parent_time)
                .await
                .context("Failed to create recording")?;
            print_json(&recording)
        }
        Command::Tree { recording_id } => {
            let tree = client
                .get_recording_tree(recording_id)
                .await
                .with_context(|| format!("Failed to fetch tree of recording {}", recording_id))?;
            print_json(&tree)
        }
        Command::Transcription { recording_id, text } => {
            let reply = client
                .update_transcription(recording_id, &text)
                .await
                .context("Failed to update transcription")?;
            print_json(&reply)
        }
        Command::Prompts {
            recording_id,
            prompts,
        } => {
            let reply = client
                .update_prompts(recording_id, &prompts)
                .await
                .context("Failed to update prompts")?;
            print_json(&reply)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
