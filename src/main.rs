mod core;
mod map;
mod platform;
mod route;
mod store;

use crate::core::command_parser::{Command, CommandParser, QueryMode};
use crate::core::config;
use crate::core::planner::RoutePlanner;
use crate::core::types::Network;
use crate::map::map_view::MapView;
use crate::map::viewport::Viewport;
use crate::platform::renderer_cairo::RendererCairo;
use crate::store::network_store::NetworkStore;
use std::io::Read;

struct Args {
    db_path: String,
    start: Option<String>,
    end: Option<String>,
    all: bool,
    pipe_mode: bool,
    script_path: Option<String>,
    out_path: String,
    width: i32,
    height: i32,
}

fn parse_args() -> Args {
    let mut args = Args {
        db_path: config::DEFAULT_DB_PATH.to_string(),
        start: None,
        end: None,
        all: false,
        pipe_mode: false,
        script_path: None,
        out_path: config::DEFAULT_PNG_PATH.to_string(),
        width: config::CANVAS_WIDTH,
        height: config::CANVAS_HEIGHT,
    };

    let argv: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "--db" if i + 1 < argv.len() => {
                i += 1;
                args.db_path = argv[i].clone();
            }
            "--start" if i + 1 < argv.len() => {
                i += 1;
                args.start = Some(argv[i].clone());
            }
            "--end" if i + 1 < argv.len() => {
                i += 1;
                args.end = Some(argv[i].clone());
            }
            "--script" if i + 1 < argv.len() => {
                i += 1;
                args.script_path = Some(argv[i].clone());
            }
            "--out" if i + 1 < argv.len() => {
                i += 1;
                args.out_path = argv[i].clone();
            }
            "--width" if i + 1 < argv.len() => {
                i += 1;
                args.width = argv[i].parse().unwrap_or(config::CANVAS_WIDTH);
            }
            "--height" if i + 1 < argv.len() => {
                i += 1;
                args.height = argv[i].parse().unwrap_or(config::CANVAS_HEIGHT);
            }
            "--all" => args.all = true,
            "--pipe" => args.pipe_mode = true,
            other => log::warn!("ignoring argument '{}'", other),
        }
        i += 1;
    }

    args
}

/// Load the network, falling back to an empty one so the session still runs.
fn load_network(db_path: &str) -> Network {
    let loaded = NetworkStore::open(db_path).and_then(|store| store.load_network());
    match loaded {
        Ok(network) => network,
        Err(e) => {
            log::error!("Error loading locations from {}: {}", db_path, e);
            eprintln!("Loading Error: {}", e);
            Network::default()
        }
    }
}

fn read_script(args: &Args) -> String {
    let mut script = String::new();
    if args.pipe_mode {
        if let Err(e) = std::io::stdin().read_to_string(&mut script) {
            log::error!("failed to read script from stdin: {}", e);
        }
    } else if let Some(path) = &args.script_path {
        match std::fs::read_to_string(path) {
            Ok(s) => script = s,
            Err(e) => log::error!("failed to read script {}: {}", path, e),
        }
    }

    // A start/end pair on the command line is a one-shot query.
    if let (Some(start), Some(end)) = (&args.start, &args.end) {
        let mode = if args.all { "all" } else { "best" };
        script.push_str(&format!("\n{} {} -> {}\n", mode, start, end));
    }

    script
}

fn render(planner: &RoutePlanner, viewport: &Viewport, args: &Args, path: &str) {
    let mut renderer = match RendererCairo::new(args.width, args.height) {
        Ok(r) => r,
        Err(e) => {
            log::error!("failed to create drawing surface: {}", e);
            return;
        }
    };

    log::debug!(
        "rendering at zoom {:.2}, pan ({:.1}, {:.1})",
        viewport.zoom(),
        viewport.pan().x,
        viewport.pan().y
    );
    MapView::new().render(
        &mut renderer,
        planner.network(),
        viewport,
        planner.current_path(),
        args.width,
        args.height,
    );

    if let Err(e) = renderer.write_png(path) {
        log::error!("failed to write {}: {}", path, e);
    }
}

fn main() {
    env_logger::init();

    let args = parse_args();
    let script = read_script(&args);

    if script.trim().is_empty() {
        eprintln!("Usage: route-planner [--db <file>] --start <spot> --end <spot> [--all] [--out <png>]");
        eprintln!("       route-planner [--db <file>] --script <file> | --pipe");
        std::process::exit(1);
    }

    let network = load_network(&args.db_path);
    if network.is_empty() {
        log::warn!("no spots loaded from {}", args.db_path);
    }
    let mut viewport = Viewport::for_network(&network);
    let mut planner = RoutePlanner::new(network);

    let parser = CommandParser::new();
    let mut dirty = true;

    for command in parser.parse(&script) {
        match command {
            Command::Query { mode, start, end } => match planner.query(mode, &start, &end) {
                Ok(answer) => {
                    println!("{}\n", answer.describe());
                    dirty |= mode == QueryMode::Best;
                }
                Err(e) => eprintln!("Route Error: {}", e),
            },
            Command::Pointer(event) => {
                dirty |= viewport.handle_pointer(&event);
            }
            Command::Render { path } => {
                render(&planner, &viewport, &args, &path);
                dirty = false;
            }
        }
    }

    if dirty {
        render(&planner, &viewport, &args, &args.out_path);
    }
}
