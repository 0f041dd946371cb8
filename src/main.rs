//! CLI entry point for devblog-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use devblog_rs::commands;

#[derive(Parser)]
#[command(name = "devblog")]
#[command(author = "Roshan Jha")]
#[command(version)]
#[command(about = "Query, render and publish posts of a developer blog", long_about = None)]
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
    /// List site information
    List {
        /// Type of content to list (post, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Show the featured post
    Featured,

    /// Show the most recent posts
    Recent {
        /// Id of a post to leave out
        #[arg(short, long)]
        exclude: Option<u32>,
    },

    /// List posts with a tag
    Tag {
        /// Tag to filter by (exact match)
        tag: String,
    },

    /// Render a post
    Show {
        /// Slug of the post
        slug: String,

        /// Output an HTML fragment instead of text
        #[arg(long)]
        html: bool,
    },

    /// Publish a new post (kept in memory for this run only)
    New {
        /// Title of the new post
        #[arg(short, long)]
        title: String,

        /// Short summary
        #[arg(short, long)]
        excerpt: String,

        /// Cover image URL
        #[arg(long)]
        cover: String,

        /// Post body
        #[arg(long, conflicts_with = "content_file")]
        content: Option<String>,

        /// Read the post body from a file
        #[arg(long)]
        content_file: Option<PathBuf>,

        /// Tag to attach (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Estimated read time in minutes
        #[arg(short, long)]
        read_time: Option<u32>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "devblog_rs=debug,info"
    } else {
        "devblog_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    if let Commands::Version = cli.command {
        println!("devblog-rs version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut blog = devblog_rs::Blog::new(&base_dir)?;
    tracing::debug!("Loaded {} posts", blog.store.len());

    match cli.command {
        Commands::List { r#type } => commands::list::run(&blog, &r#type)?,

        Commands::Featured => commands::query::featured(&blog)?,

        Commands::Recent { exclude } => commands::query::recent(&blog, exclude)?,

        Commands::Tag { tag } => commands::query::by_tag(&blog, &tag)?,

        Commands::Show { slug, html } => commands::show::run(&blog, &slug, html)?,

        Commands::New {
            title,
            excerpt,
            cover,
            content,
            content_file,
            tags,
            read_time,
        } => {
            tracing::info!("Publishing new post: {}", title);
            let new_post = commands::new::NewPost {
                title,
                excerpt,
                cover_image_url: cover,
                content,
                content_file,
                tags,
                read_time,
            };
            commands::new::run(&mut blog, new_post)?;
        }

        Commands::Version => {}
    }

    Ok(())
}
