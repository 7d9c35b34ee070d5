use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::Level;

use booknav_engine::{SidebarConfig, SidebarNavigator, render_markup};
use booknav_types::NavTree;
use booknav_util::session::{FileSessionStore, MemorySessionStore, SessionStore};

#[derive(Parser)]
#[command(name = "booknav", about = "Sidebar navigator for generated documentation books", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the sidebar markup for the given page.
    Render(NavigateArgs),
    /// Print the entry resolved as active for the given page.
    Active(NavigateArgs),
}

#[derive(Args)]
struct NavigateArgs {
    /// Path to the navigation tree JSON emitted by the book generator.
    #[arg(long)]
    toc: PathBuf,
    /// Resolved URL of the currently displayed page.
    #[arg(long)]
    location: String,
    /// Relative path from the current page back to the book root.
    #[arg(long, default_value = "")]
    path_to_root: String,
    /// Session file carrying scroll state across invocations; omitted means
    /// an in-memory (single-load) session.
    #[arg(long)]
    session: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Render(args) => render(&args),
        Command::Active(args) => active(&args),
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .try_init();
}

fn render(args: &NavigateArgs) -> Result<()> {
    let navigator = attach_navigator(args)?;
    println!("{}", render_markup(navigator.state()));
    Ok(())
}

fn active(args: &NavigateArgs) -> Result<()> {
    let navigator = attach_navigator(args)?;
    match navigator.active_entry() {
        Some(entry) => println!("{}\t{}", entry.title, entry.target),
        None => println!("no entry matches the current page"),
    }
    Ok(())
}

fn attach_navigator(args: &NavigateArgs) -> Result<SidebarNavigator> {
    let data = fs::read_to_string(&args.toc).with_context(|| format!("failed to read {}", args.toc.display()))?;
    let tree = NavTree::from_json(&data).with_context(|| format!("failed to parse {}", args.toc.display()))?;

    let store: Box<dyn SessionStore> = match &args.session {
        Some(path) => Box::new(FileSessionStore::open(path)?),
        None => Box::new(MemorySessionStore::new()),
    };

    let config = SidebarConfig::new(&args.location, &args.path_to_root);
    let mut navigator = SidebarNavigator::new(&tree, config, store);
    navigator.attach().context("failed to attach the sidebar navigator")?;
    Ok(navigator)
}
