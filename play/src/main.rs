#![cfg_attr(feature = "strict", deny(warnings))]

use clap::Parser;
use common::host::SharedHost;
use scenarios::{
    registry, Outcome, Recorder, Scenario, ScenarioConfiguration, ScenarioManager, ScenarioOptions,
};
use simulate::{LaneMap, SimWorld};
use std::{
    error::Error,
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
    process,
    sync::{Arc, Mutex},
};

mod built {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
mod logging;

/// Run a leaderboard scenario in the kinematic simulator.
#[derive(Parser, Debug)]
#[command(name = "play")]
struct Args {
    /// LeaderboardVideo or LeaderboardXavi
    scenario: String,

    /// CSV of actors (role,model,x,y,z,pitch,yaw,roll,speed,autopilot).
    /// Defaults to the scenario's demo setup.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seconds until the scenario is cut short
    #[arg(long, default_value = "60", value_parser = positive_seconds)]
    timeout: f32,

    /// Print the behavior tree before running
    #[arg(long)]
    debug: bool,

    /// Write every actor's state to this CSV file, once per tick
    #[arg(long)]
    record: Option<PathBuf>,

    /// Skip the scenario's test criteria
    #[arg(long)]
    no_criteria: bool,

    /// Seconds per tick
    #[arg(long, default_value = "0.05", value_parser = positive_seconds)]
    dt: f32,
}

/// A zero or negative step would never let the world clock reach the
/// timeout.
fn positive_seconds(text: &str) -> Result<f32, String> {
    let seconds: f32 = text
        .parse()
        .map_err(|_| format!("{:?} is not a number", text))?;
    if seconds.is_finite() && seconds > 0.0 {
        Ok(seconds)
    } else {
        Err(format!("{} is not a positive number of seconds", text))
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(logging::format)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(Outcome::Failure) => process::exit(1),
        Ok(_) => {}
        Err(err) => {
            log::error!("{}", err);
            process::exit(2);
        }
    }
}

fn run(args: &Args) -> Result<Outcome, Box<dyn Error>> {
    log::info!("play {} built {}", built::VERSION, built::BUILD_DATE);

    let mut definition = registry::build(&args.scenario)?;
    let config = match &args.config {
        Some(path) => ScenarioConfiguration::from_path("cli", args.scenario.as_str(), path)?,
        None => registry::demo_configuration(&args.scenario)?,
    };
    let options = ScenarioOptions {
        randomize: false,
        debug_mode: args.debug,
        criteria_enable: !args.no_criteria,
        timeout: args.timeout,
    };

    let mut world = SimWorld::new(LaneMap::leaderboard_demo());
    let mut ego_vehicles = Vec::new();
    for ego in &config.ego_vehicles {
        let id = world.spawn_ego(&ego.model, &ego.transform)?;
        if ego.autopilot {
            world.set_autopilot(id, Some(ego.speed))?;
        }
        ego_vehicles.push(id);
    }
    let host: SharedHost = Arc::new(Mutex::new(world));

    let scenario = Scenario::new(&mut *definition, host, ego_vehicles, &config, options)?;
    let mut manager = ScenarioManager::new(scenario);
    if let Some(path) = &args.record {
        let file: Box<dyn Write> = Box::new(BufWriter::new(File::create(path)?));
        manager = manager.with_recorder(Recorder::new(file));
    }

    // Leave room for the scenario's own timeout to fire.
    let max_ticks = ((args.timeout + 1.0) / args.dt).ceil() as usize;
    while manager.outcome().is_none() && manager.result().ticks < max_ticks {
        manager.tick(args.dt)?;
        logging::set_game_time(manager.result().game_duration);
    }
    let result = manager.run_for(args.dt, max_ticks)?;

    println!(
        "{}: {:?} after {:.2}s ({} ticks)",
        result.name, result.outcome, result.game_duration, result.ticks,
    );
    Ok(result.outcome)
}
