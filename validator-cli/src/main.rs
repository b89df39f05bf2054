// Thin shell around the validators: loads the JSON documents, runs the
// requested check, prints the report, and exits 0 or 1.

mod loader;
mod reporter;

use board_validator::board::BoardDefinition;
use board_validator::board_validator::validate_board;
use board_validator::report::ValidationReport;
use board_validator::route_validator::validate_routes;
use board_validator::state_validator::validate_board_state;

use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "validator-cli", version)]
struct Cli {
    /// Print the report as JSON instead of a human-readable summary.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a board-definition document (cities and connections).
    Board(BoardArgs),
    /// Validate a per-player board state against a base board.
    State(StateArgs),
    /// Validate a route list against a base board.
    Routes(RoutesArgs),
}

#[derive(Parser, Debug)]
struct BoardArgs {
    /// Board-definition JSON.
    board: PathBuf,
}

#[derive(Parser, Debug)]
struct StateArgs {
    /// Board-state JSON, mapping player colors to claimed connection ids.
    state: PathBuf,

    /// Base board-definition JSON.
    board: PathBuf,
}

#[derive(Parser, Debug)]
struct RoutesArgs {
    /// Routes JSON: a list of `{city1, city2, points}` records.
    routes: PathBuf,

    /// Base board-definition JSON.
    board: PathBuf,
}

fn main() -> ExitCode {
    // Informational output goes to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let report = match cli.cmd {
        Command::Board(args) => cmd_board(args),
        Command::State(args) => cmd_state(args),
        Command::Routes(args) => cmd_routes(args),
    };

    reporter::print(&report, cli.json);

    if report.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_board(args: BoardArgs) -> ValidationReport {
    let board: BoardDefinition = match loader::read_json(&args.board) {
        Ok(board) => board,
        Err(error) => return ValidationReport::from_error(format!("{error:#}")),
    };

    info!(
        cities = board.cities.len(),
        connections = board.connections.len(),
        "loaded board definition"
    );

    validate_board(&board)
}

fn cmd_state(args: StateArgs) -> ValidationReport {
    let state: Map<String, Value> = match loader::read_json(&args.state) {
        Ok(state) => state,
        Err(error) => return ValidationReport::from_error(format!("{error:#}")),
    };
    let board: BoardDefinition = match loader::read_json(&args.board) {
        Ok(board) => board,
        Err(error) => return ValidationReport::from_error(format!("{error:#}")),
    };

    let valid_connection_ids = board.connection_ids();
    info!(
        players = state.len(),
        connections = valid_connection_ids.len(),
        "loaded board state and base board"
    );

    let empty_players: Vec<&str> = state
        .iter()
        .filter(|(_, edges)| edges.as_array().map_or(false, Vec::is_empty))
        .map(|(player, _)| player.as_str())
        .collect();
    if !empty_players.is_empty() {
        info!(?empty_players, "players with no claimed edges");
    }

    validate_board_state(&state, &valid_connection_ids)
}

fn cmd_routes(args: RoutesArgs) -> ValidationReport {
    let routes: Vec<Value> = match loader::read_json(&args.routes) {
        Ok(routes) => routes,
        Err(error) => return ValidationReport::from_error(format!("{error:#}")),
    };
    let board: BoardDefinition = match loader::read_json(&args.board) {
        Ok(board) => board,
        Err(error) => return ValidationReport::from_error(format!("{error:#}")),
    };

    let valid_cities = board.city_names();
    info!(
        routes = routes.len(),
        cities = valid_cities.len(),
        "loaded routes and base board"
    );

    validate_routes(&routes, &valid_cities)
}
