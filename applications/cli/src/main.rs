/// Cadence - headless playlist player
use anyhow::Context;
use cadence_cli::{load_library, run, CliConfig, Library, Renderer, Shell, SimulatedMedia};
use cadence_core::PlaylistId;
use cadence_playback::Transport;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cadence")]
#[command(about = "Cadence headless playlist player", version, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every playlist and its songs
    List,
    /// Start the interactive player
    Play {
        /// Playlist to start with (defaults to `default_playlist`)
        #[arg(short, long)]
        playlist: Option<String>,
        /// Read commands from a file instead of stdin
        #[arg(short, long)]
        script: Option<PathBuf>,
    },
    /// Print the effective configuration
    Config,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout belongs to the player
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cadence=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::List => {
            list(&config).await?;
        }
        Commands::Play { playlist, script } => {
            play(&config, playlist, script).await?;
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

async fn load(config: &CliConfig) -> anyhow::Result<Library> {
    let source = config.source()?;
    tracing::info!(
        "Loading {} playlists from {}",
        config.playlists.len(),
        config.manifest_base
    );
    Ok(load_library(source.as_ref(), &config.catalog(), config.strict_loading).await)
}

async fn list(config: &CliConfig) -> anyhow::Result<()> {
    let library = load(config).await?;

    let mut renderer = Renderer::new(std::io::stdout());
    for notification in &library.notifications {
        renderer.notification(notification)?;
    }
    renderer.library(&library.store)?;

    Ok(())
}

async fn play(
    config: &CliConfig,
    playlist: Option<String>,
    script: Option<PathBuf>,
) -> anyhow::Result<()> {
    let library = load(config).await?;

    let (media, media_events) = SimulatedMedia::new(config.track_length());
    let transport = Transport::new(media, config.player.clone());
    let mut shell = Shell::new(library.store, transport, std::io::stdout());

    for notification in &library.notifications {
        shell.notify(notification)?;
    }

    let id = playlist.map_or_else(|| config.default_playlist.clone(), PlaylistId::from);
    shell.switch(&id)?;

    let input: Box<dyn AsyncBufRead + Unpin> = match script {
        Some(path) => {
            let file = tokio::fs::File::open(&path)
                .await
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };

    run(shell, input, media_events, config.tick()).await?;
    tracing::info!("Goodbye");

    Ok(())
}
