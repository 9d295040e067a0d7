//! CricScore entry point
//!
//! Native builds run a terminal scorer; the browser build drives the core
//! through `cricscore::wasm` instead.

#[cfg(not(target_arch = "wasm32"))]
mod terminal {
    use std::io::{self, BufRead, Write};
    use std::path::PathBuf;
    use std::process::ExitCode;

    use clap::Parser;

    use cricscore::feed::DeliveryFeed;
    use cricscore::{Command, MatchEngine, Outcome, Result, Scoreboard, Settings, ValidationMode};

    const HELP: &str = "Commands: 0-6 runs | wd wide | nb no-ball | w wicket | undo | reset | show | quit";

    /// Live ball-by-ball cricket scorer.
    #[derive(Parser, Debug)]
    #[command(name = "cricscore", author, version, about)]
    struct Cli {
        /// Batting team name.
        #[arg(long, env = "CRICSCORE_TEAM")]
        team: Option<String>,

        /// Runs to chase.
        #[arg(long)]
        target: Option<u32>,

        /// JSON settings file (flags override its values).
        #[arg(short, long, env = "CRICSCORE_CONFIG")]
        config: Option<PathBuf>,

        /// Delivery validation: "permissive" or "strict".
        #[arg(long, value_name = "MODE", value_parser = parse_validation)]
        validation: Option<ValidationMode>,

        /// Keep at most this many undo steps.
        #[arg(long)]
        history_limit: Option<usize>,

        /// Bowl this many random deliveries instead of reading stdin.
        #[arg(long, value_name = "BALLS")]
        simulate: Option<usize>,

        /// Seed for --simulate.
        #[arg(long, default_value_t = 1)]
        seed: u64,

        /// Print the scoreboard as JSON.
        #[arg(long)]
        json: bool,
    }

    fn parse_validation(s: &str) -> std::result::Result<ValidationMode, String> {
        ValidationMode::from_str(s).ok_or_else(|| format!("unknown validation mode {s:?}"))
    }

    fn build_settings(cli: &Cli) -> Result<Settings> {
        let mut settings = match &cli.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(team) = &cli.team {
            settings.team_name = team.clone();
        }
        if cli.target.is_some() {
            settings.target = cli.target;
        }
        if let Some(mode) = cli.validation {
            settings.validation = mode;
        }
        if cli.history_limit.is_some() {
            settings.history_limit = cli.history_limit;
        }
        settings.validate()?;
        Ok(settings)
    }

    fn render(engine: &MatchEngine, json: bool) -> Result<String> {
        let board = Scoreboard::from_engine(engine);
        if json {
            Ok(serde_json::to_string(&board)?)
        } else {
            Ok(board.to_string())
        }
    }

    fn simulate(engine: &mut MatchEngine, balls: usize, seed: u64) {
        let mut feed = DeliveryFeed::new(seed);
        log::info!("Simulating {} deliveries with seed {}", balls, feed.seed());
        for event in feed.take(balls) {
            if let Err(err) = engine.try_apply_ball(event) {
                // Strict mode ends the innings at ten wickets
                log::info!("Simulation stopped: {err}");
                break;
            }
        }
    }

    fn interactive(engine: &mut MatchEngine, json: bool) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", render(engine, json)?)?;
        writeln!(stdout, "{HELP}")?;

        for line in stdin.lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(err) => {
                    eprintln!("{err}");
                    eprintln!("{HELP}");
                    continue;
                }
            };
            let undo = command == Command::Undo;
            match engine.execute(command) {
                Ok(Outcome::Quit) => break,
                Ok(Outcome::Unchanged) if undo => writeln!(stdout, "Nothing to undo")?,
                Ok(_) => writeln!(stdout, "{}", render(engine, json)?)?,
                Err(err) => eprintln!("{err}"),
            }
            stdout.flush()?;
        }
        Ok(())
    }

    fn run(cli: Cli) -> Result<()> {
        let settings = build_settings(&cli)?;
        log::info!(
            "Scoring for {} ({} mode)",
            settings.team_name,
            settings.validation.as_str()
        );
        let mut engine = MatchEngine::with_settings(settings);

        match cli.simulate {
            Some(balls) => {
                simulate(&mut engine, balls, cli.seed);
                println!("{}", render(&engine, cli.json)?);
                Ok(())
            }
            None => interactive(&mut engine, cli.json),
        }
    }


    pub fn main() -> ExitCode {
        env_logger::init();
        let cli = Cli::parse();
        match run(cli) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                log::error!("{err}");
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    terminal::main()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is cricscore::wasm::start, this is just to satisfy the compiler
}
