//! CLI entry point for nib

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nib::commands::list::ListKind;
use nib::Site;

#[derive(Parser)]
#[command(name = "nib")]
#[command(version = "0.1.0")]
#[command(about = "A small static site engine for a personal blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate static files
    #[command(alias = "b")]
    Build,

    /// Start a local server with live reload
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Serve without watching for changes
        #[arg(long)]
        r#static: bool,
    },

    /// Create a new draft post
    New {
        /// Title of the new post
        title: String,
    },

    /// List posts or tags
    List {
        /// What to list (posts, tags)
        #[arg(default_value = "posts")]
        r#type: String,
    },

    /// Remove the public directory
    Clean,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "nib=debug,info"
    } else {
        "nib=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let site = Site::new(&base_dir)?;

    match cli.command {
        Commands::Build => {
            site.build()?;
            println!("Generated successfully!");
        }

        Commands::Serve {
            port,
            ip,
            open,
            r#static,
        } => {
            // Generate first so there is something to serve
            site.build()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            nib::server::start(&site, &ip, port, !r#static, open).await?;
        }

        Commands::New { title } => {
            nib::commands::new::run(&site, &title)?;
        }

        Commands::List { r#type } => {
            let kind = match r#type.as_str() {
                "posts" | "post" => ListKind::Posts,
                "tags" | "tag" => ListKind::Tags,
                other => anyhow::bail!("Unknown list type: {} (expected posts or tags)", other),
            };
            nib::commands::list::run(&site, kind)?;
        }

        Commands::Clean => {
            site.clean()?;
        }
    }

    Ok(())
}
