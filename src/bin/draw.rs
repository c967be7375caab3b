//! Command-line draw: load teams, draw, save JSON results and a text document.
//! Run with: cargo run --bin draw
//! Env: TEAMS_FILE (json or csv), RESULTS_FILE, REPORT_FILE, DRAW_SEED (u64, optional).

use league_phase_draw::{
    audit_draw, load_participants, make_draw, render_text, save_results, DrawConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;

fn default_teams_file() -> String {
    "data/teams.json".to_string()
}

fn default_results_file() -> String {
    "tournament_results.json".to_string()
}

fn default_report_file() -> String {
    "draw_results.txt".to_string()
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let teams_file = std::env::var("TEAMS_FILE").unwrap_or_else(|_| default_teams_file());
    let results_file = std::env::var("RESULTS_FILE").unwrap_or_else(|_| default_results_file());
    let report_file = std::env::var("REPORT_FILE").unwrap_or_else(|_| default_report_file());
    let seed: Option<u64> = std::env::var("DRAW_SEED").ok().and_then(|s| s.parse().ok());

    let participants = load_participants(&teams_file)?;
    let config = DrawConfig::default();

    let mut rng = match seed {
        Some(s) => {
            log::info!("Using seed {}", s);
            StdRng::seed_from_u64(s)
        }
        None => StdRng::from_entropy(),
    };
    let result = make_draw(&participants, config, &mut rng)?;

    let audit = audit_draw(&result, &config);
    for short in &audit.short_fixtures {
        log::warn!(
            "{} has {} of {} opponents",
            short.name,
            short.actual,
            short.expected
        );
    }
    for v in &audit.violations {
        log::error!("{}", v);
    }
    log::info!("{} asymmetric pairings", audit.asymmetric_pairings);

    save_results(&result, &results_file)?;
    std::fs::write(&report_file, render_text(&result))?;
    log::info!("Report written to {}", report_file);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
