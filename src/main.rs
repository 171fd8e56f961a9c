//! Gump layout inspector.
//!
//! Usage:
//!   gump-cli dump layout.txt --lines lines.txt     # print the control tree
//!   gump-cli dump layout.txt --page 2 --visible-only
//!   gump-cli draw layout.txt                       # print the draw commands

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gump_ui::assets::StaticAssets;
use gump_ui::config::UiConfig;
use gump_ui::dump::print_tree;
use gump_ui::render::RecordingTarget;
use gump_ui::{ControlId, Result, UiManager};

#[derive(Parser)]
#[command(name = "gump-cli")]
#[command(about = "Build server gump layouts offline and inspect the result")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GumpArgs {
    /// File holding the layout command string
    layout: PathBuf,

    /// Text lines referenced by the layout, one per line
    #[arg(long)]
    lines: Option<PathBuf>,

    #[arg(long, default_value_t = 0)]
    x: i32,

    #[arg(long, default_value_t = 0)]
    y: i32,

    /// Page to activate after building
    #[arg(long)]
    page: Option<u32>,

    /// Size reported for every gump and art graphic
    #[arg(long, default_value_t = 32)]
    graphic_size: i32,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the control tree built from a layout
    Dump {
        #[command(flatten)]
        gump: GumpArgs,

        /// Filter by control kind (substring match)
        #[arg(short, long)]
        filter: Option<String>,

        /// Leave out hidden controls and inactive pages
        #[arg(long)]
        visible_only: bool,
    },

    /// Print the draw commands one frame of the gump submits
    Draw {
        #[command(flatten)]
        gump: GumpArgs,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Dump { gump, filter, visible_only } => run_dump(&gump, filter.as_deref(), visible_only),
        Commands::Draw { gump } => run_draw(&gump),
    };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn read_lines(path: Option<&Path>) -> Result<Vec<String>> {
    let Some(path) = path else { return Ok(Vec::new()) };
    Ok(fs::read_to_string(path)?.lines().map(str::to_string).collect())
}

fn build(args: &GumpArgs) -> Result<(UiManager, ControlId)> {
    let layout = fs::read_to_string(&args.layout)?;
    let lines = read_lines(args.lines.as_deref())?;
    let assets = StaticAssets::new()
        .with_default_size(args.graphic_size, args.graphic_size)
        .with_glyph_size(7, 14);
    let mut ui = UiManager::new(UiConfig::load(), Box::new(assets));
    let gump = ui.create_from_layout(0, 0, args.x, args.y, layout.trim(), &lines)?;
    if let Some(page) = args.page {
        ui.switch_page(gump, page);
    }
    ui.update(0.0, 0.0);
    Ok((ui, gump))
}

fn run_dump(args: &GumpArgs, filter: Option<&str>, visible_only: bool) -> Result<()> {
    let (ui, gump) = build(args)?;
    print_tree(ui.tree(), gump, filter, visible_only);
    Ok(())
}

fn run_draw(args: &GumpArgs) -> Result<()> {
    let (mut ui, _) = build(args)?;
    let mut target = RecordingTarget::new();
    let ready = ui.draw(&mut target);
    for command in &target.commands {
        println!("{:?}", command);
    }
    if !ready {
        eprintln!("Some resources were not ready");
    }
    Ok(())
}
