use std::fs;
use std::path::PathBuf;

use shotmap_rs::api::{League, Season, ShotMap, ShotMapConfig, ShotMapSelection, build_render_frame};
use shotmap_rs::core::parse_raw_shots;
use shotmap_rs::render::{NullRenderer, Renderer};
use shotmap_rs::telemetry::init_default_tracing;

#[derive(Debug)]
struct CliArgs {
    shots_path: PathBuf,
    config_path: Option<PathBuf>,
    league: League,
    season: Season,
    player: String,
    json: bool,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let raw = fs::read_to_string(&args.shots_path)
        .map_err(|err| format!("failed to read `{}`: {err}", args.shots_path.display()))?;
    let shots = parse_raw_shots(&raw).map_err(|err| err.to_string())?;

    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ShotMapConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ShotMapConfig::default(),
    };

    let selection = ShotMapSelection::new(args.league, args.season, args.player);
    let map = ShotMap::build(selection, &shots, &config).map_err(|err| err.to_string())?;

    // Validate the frame even though nothing is drawn.
    let frame = build_render_frame(&map, &config).map_err(|err| err.to_string())?;
    NullRenderer::default()
        .render(&frame)
        .map_err(|err| err.to_string())?;

    if args.json {
        let payload = map
            .to_json_contract_v1_pretty()
            .map_err(|err| err.to_string())?;
        println!("{payload}");
        return Ok(());
    }

    println!("{}", map.selection.player_name);
    println!("{}", map.selection.subtitle());
    println!();
    for line in map.stats.summary_lines() {
        println!("{line}");
    }
    if map.dropped_records > 0 {
        println!("Dropped malformed records: {}", map.dropped_records);
    }
    println!();
    println!("Observations");
    for remark in &map.commentary.observations {
        println!("- {}", remark.text);
    }
    println!();
    println!("Recommendations");
    for remark in &map.commentary.recommendations {
        println!("- {}", remark.text);
    }
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut shots_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut league: Option<League> = None;
    let mut season: Option<Season> = None;
    let mut player: Option<String> = None;
    let mut json = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match arg.as_str() {
            "--shots" => shots_path = Some(PathBuf::from(value("--shots")?)),
            "--config" => config_path = Some(PathBuf::from(value("--config")?)),
            "--league" => {
                league = Some(value("--league")?.parse().map_err(|e| format!("{e}"))?);
            }
            "--season" => {
                season = Some(value("--season")?.parse().map_err(|e| format!("{e}"))?);
            }
            "--player" => player = Some(value("--player")?),
            "--json" => json = true,
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --bin shot_map_report -- --shots <file.json> --league <league> --season <season> --player <name> [--config <file.json>] [--json]"
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(CliArgs {
        shots_path: shots_path.ok_or_else(|| "missing --shots".to_owned())?,
        config_path,
        league: league.ok_or_else(|| "missing --league".to_owned())?,
        season: season.ok_or_else(|| "missing --season".to_owned())?,
        player: player.unwrap_or_default(),
        json,
    })
}
