use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use meowy_library::config::{AppConfig, CliConfig, FileConfig};
use meowy_library::query::{filter_by_title, sort_albums, AlbumOrder};
use meowy_library::{LibraryManager, Music};
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file. Its values override the CLI ones.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Library directory, holding `album/` and `music/`.
    #[clap(long, value_parser = parse_path)]
    pub root: Option<PathBuf>,

    /// Fail when a track's audio file is missing instead of reporting it.
    #[clap(long)]
    pub strict_media_check: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List albums.
    List {
        /// Only show albums whose title contains this text.
        #[clap(long, default_value = "")]
        filter: String,

        #[clap(long, value_enum, default_value_t = AlbumOrder::Date)]
        order: AlbumOrder,

        #[clap(long)]
        reverse: bool,
    },
    /// List the music of an album.
    Show { album: String },
    /// Add an album with a placeholder title and cover.
    AddAlbum,
    DeleteAlbum { album: String },
    RenameAlbum { album: String, title: String },
    /// Replace an album cover with the given image file.
    SetCover {
        album: String,
        #[clap(value_parser = parse_path)]
        image: PathBuf,
    },
    /// Copy an audio file into the library and add it to an album.
    AddMusic {
        album: String,
        #[clap(value_parser = parse_path)]
        file: PathBuf,
    },
    DeleteMusic { album: String, music: String },
    /// Report catalog entries whose files are missing.
    Check,
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = cli_args
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;
    let cli_config = CliConfig {
        library_root: cli_args.root.clone(),
        strict_media_check: cli_args.strict_media_check,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    info!("Opening library at {:?}...", config.library_root);
    let mut manager = LibraryManager::from_config(&config)?;

    run_command(&mut manager, cli_args.command)
}

fn run_command(manager: &mut LibraryManager, command: Command) -> Result<()> {
    match command {
        Command::List {
            filter,
            order,
            reverse,
        } => {
            let mut albums = filter_by_title(&manager.collection().albums, &filter);
            sort_albums(&mut albums, order, reverse);
            for album in albums {
                println!("{}", album.description());
            }
        }
        Command::Show { album } => {
            let album = manager.album(&album)?;
            for music in album.music.iter() {
                match music.file_size {
                    Some(size) => println!("{} ({:#})", music.title, byte_unit::Byte::from(size)),
                    None => println!("{} (missing)", music.title),
                }
            }
        }
        Command::AddAlbum => {
            let title = manager.add_album()?;
            println!("Added \"{}\"", title);
        }
        Command::DeleteAlbum { album } => {
            let album = manager.album(&album)?;
            manager.delete_album(&album)?;
        }
        Command::RenameAlbum { album, title } => {
            let album = manager.album(&album)?;
            manager.rename_album(&album, &title)?;
        }
        Command::SetCover { album, image } => {
            let album = manager.album(&album)?;
            manager.update_album_cover(&album, &image)?;
        }
        Command::AddMusic { album, file } => {
            let album = manager.album(&album)?;
            let album = manager.add_music(&album, &file)?;
            println!("{}", album.description());
        }
        Command::DeleteMusic { album, music } => {
            let album = manager.album(&album)?;
            let album = manager.delete_music(&album, &Music::new(music, Utc::now()))?;
            println!("{}", album.description());
        }
        Command::Check => {
            let problems = manager.load_problems();
            if problems.is_empty() {
                println!("Library checked, no issues found.");
            } else {
                println!("Found {} problems:", problems.len());
                for problem in problems.iter() {
                    println!("- {:?}", problem);
                }
            }
        }
    }
    Ok(())
}
