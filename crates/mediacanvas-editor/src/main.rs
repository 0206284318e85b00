use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::mpsc;
use tracing::info;

use mediacanvas_core::clip::ClipId;
use mediacanvas_core::config::EditorConfig;
use mediacanvas_editor::app::Editor;
use mediacanvas_editor::message::Message;
use mediacanvas_media::classify::media_file_from_path;

#[derive(Parser)]
#[command(name = "mediacanvas")]
#[command(about = "Headless media canvas session: place files, play the timeline, print the scene")]
#[command(version)]
struct Cli {
    /// Media files to place on the canvas
    files: Vec<PathBuf>,

    /// JSON editor configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seconds of real time to let playback run
    #[arg(long, default_value = "2")]
    seconds: f64,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => EditorConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EditorConfig::default(),
    };
    let run_for = Duration::try_from_secs_f64(cli.seconds)
        .with_context(|| format!("invalid --seconds {}", cli.seconds))?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut editor = Editor::with_channel(config, tx);

    let files = cli.files.iter().map(|p| media_file_from_path(p)).collect();
    editor.update(Message::FilesDropped(files));
    editor.update(Message::Play);

    let deadline = tokio::time::sleep(run_for);
    tokio::pin!(deadline);
    let mut shown = visible_clips(&editor);
    loop {
        tokio::select! {
            _ = &mut deadline => break,
            Some(message) = rx.recv() => {
                editor.update(message);
                let now = visible_clips(&editor);
                if now != shown {
                    info!(at = %editor.clock.current(), visible = now.len(), "visibility changed");
                    shown = now;
                }
            }
        }
    }

    if !editor.status_message.is_empty() {
        info!(status = %editor.status_message, "session finished");
    }
    let scene = editor.scene();
    editor.update(Message::Dispose);

    println!("{}", serde_json::to_string_pretty(&scene)?);
    Ok(())
}

fn visible_clips(editor: &Editor) -> BTreeSet<ClipId> {
    editor.store.clips().iter().filter(|c| c.visible).map(|c| c.id).collect()
}
