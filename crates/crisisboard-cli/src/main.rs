//! Crisisboard CLI — interactive text client for the coordination engine.
//!
//! Renders the engine's projections as text and maps the dashboard actions
//! onto prompt commands. Run with `--help` for flags; type `help` at the
//! prompt for commands.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chrono::Duration;
use clap::Parser;

use crisisboard_core::prelude::*;

mod display;

#[derive(Parser)]
#[command(
    name = "crisisboard",
    about = "Crisis coordination dashboard (text client)",
    version
)]
struct Args {
    /// Directory containing the reference CSVs.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Seed for scenario generation (omit to seed from entropy).
    #[arg(long)]
    seed: Option<u64>,

    /// Dataset staleness bound in seconds; 0 disables expiry.
    #[arg(long, default_value_t = 1800)]
    ttl_secs: i64,

    /// Region selected at startup.
    #[arg(long, default_value = "Telangana")]
    region: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let coords = CoordinateTable::load(args.data_dir.join("state_district_coordinates.csv"))?;
    let catalog = DistrictCatalog::load(args.data_dir.join("state_districts.csv"))?;
    let config = EngineConfig {
        seed: args.seed,
        dataset_ttl: (args.ttl_secs > 0).then(|| Duration::seconds(args.ttl_secs)),
        ..EngineConfig::default()
    };
    let mut engine = DashboardEngine::new(coords, catalog, config);

    let mut region = args.region.clone();
    engine.select_region(&region);
    println!("Crisis Coordination Dashboard");
    println!("Region: {region}  (type 'help' for commands)");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("{region}> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if !dispatch(&mut engine, &mut region, line.trim()) {
            break;
        }
    }
    Ok(())
}

/// Handle one prompt line. Returns false to exit.
fn dispatch(engine: &mut DashboardEngine, region: &mut String, line: &str) -> bool {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return true;
    };
    let rest: Vec<&str> = parts.collect();

    match command {
        "help" => print_help(),
        "regions" => {
            for r in engine.regions() {
                println!("  {r}");
            }
        }
        "region" => {
            if rest.is_empty() {
                println!("usage: region <name>");
            } else {
                *region = rest.join(" ");
                let dataset = engine.select_region(region);
                println!(
                    "{} districts loaded, last updated {}",
                    dataset.records.len(),
                    dataset.last_updated()
                );
            }
        }
        "refresh" => {
            let dataset = engine.refresh(region);
            println!(
                "regenerated {} districts at {}",
                dataset.records.len(),
                dataset.last_updated()
            );
        }
        "filter" => match rest.first().copied().and_then(parse_filter) {
            Some(filter) => {
                engine.set_tier_filter(filter);
                println!("filter: {}", filter.label());
            }
            None => println!("usage: filter <all|immediate|urgent|monitor>"),
        },
        "table" => match engine.table_view(region) {
            Some(table) => display::print_table(&table),
            None => println!("no dataset loaded for {region}"),
        },
        "needs" => match engine.priority_view(region) {
            Some(table) => display::print_priority(&table),
            None => println!("no dataset loaded for {region}"),
        },
        "chart" => match engine.chart_view(region) {
            Some(chart) => display::print_chart(&chart),
            None => println!("no dataset loaded for {region}"),
        },
        "map" => match engine.map_view(region) {
            Some(map) => display::print_map(&map),
            None => println!("no dataset loaded for {region}"),
        },
        "heatmap" => match engine.heatmap_view(region) {
            Some(heatmap) => display::print_heatmap(&heatmap),
            None => println!("no dataset loaded for {region}"),
        },
        "requests" => display::print_requests(engine.requests_view(), &engine.pending_requests()),
        "json" => match rest.first().copied() {
            Some("table") => display::print_json(&engine.table_view(region)),
            Some("needs") => display::print_json(&engine.priority_view(region)),
            Some("chart") => display::print_json(&engine.chart_view(region)),
            Some("map") => display::print_json(&engine.map_view(region)),
            Some("heatmap") => display::print_json(&engine.heatmap_view(region)),
            Some("requests") => display::print_json(&engine.requests_view()),
            _ => println!("usage: json <table|needs|chart|map|heatmap|requests>"),
        },
        "submit" => {
            if rest.len() < 2 {
                println!("usage: submit <aid-type> <district>");
            } else {
                let aid_type = rest[0];
                let district = rest[1..].join(" ");
                match engine.submit_request(region, &district, aid_type) {
                    SubmitOutcome::Submitted { index } => {
                        println!("aid request #{index} submitted for {district}");
                    }
                    SubmitOutcome::EmptyAidType => println!("aid type must not be empty"),
                    SubmitOutcome::UnknownDistrict => {
                        println!("{district} is not a district of the {region} dataset");
                    }
                }
            }
        }
        "approve" => match rest.first().and_then(|s| s.parse::<usize>().ok()) {
            Some(index) => match engine.approve_request(index) {
                ApproveOutcome::Approved => println!("request #{index} approved"),
                ApproveOutcome::AlreadyApproved => println!("request #{index} already approved"),
                ApproveOutcome::NotLoggedIn => {
                    println!("login as a government official to approve")
                }
                ApproveOutcome::NotFound => println!("no request #{index}"),
            },
            None => println!("usage: approve <index>"),
        },
        "login" => {
            if rest.len() != 2 {
                println!("usage: login <username> <password>");
            } else {
                match engine.login(rest[0], rest[1]) {
                    LoginOutcome::LoggedIn { username } => println!("Logged in as: {username}"),
                    LoginOutcome::MissingCredentials => {
                        println!("username and password must not be empty")
                    }
                }
            }
        }
        "quit" | "exit" => return false,
        other => println!("unknown command '{other}' (type 'help')"),
    }
    true
}

fn parse_filter(s: &str) -> Option<TierFilter> {
    match s.to_ascii_lowercase().as_str() {
        "all" => Some(TierFilter::All),
        "immediate" => Some(TierFilter::Immediate),
        "urgent" => Some(TierFilter::Urgent),
        "monitor" => Some(TierFilter::Monitor),
        _ => None,
    }
}

fn print_help() {
    println!("  regions                      list known regions");
    println!("  region <name>                select a region (generates if needed)");
    println!("  refresh                      regenerate the selected region's data");
    println!("  filter <all|immediate|urgent|monitor>");
    println!("  table                        district table");
    println!("  needs                        resource prioritization");
    println!("  chart                        urgency bars and tier summary");
    println!("  map                          map points by tier");
    println!("  heatmap                      urgency heatmap rows");
    println!("  requests                     aid request ledger");
    println!("  json <view>                  dump a projection as JSON");
    println!("  submit <aid-type> <district> submit an aid request");
    println!("  approve <index>              approve a pending request (login first)");
    println!("  login <username> <password>  government login");
    println!("  quit");
}
