//! Terminal frontend for STRONGHOLD.
//!
//! Thin I/O shell around the simulation engine: decodes raw keys into player
//! commands, ticks the engine on a fixed cadence, and draws snapshots as a
//! glyph grid. All game decisions live in stronghold-sim.

mod input;
mod render;

use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{cursor, execute, terminal};

use stronghold_sim::{GameEngine, SimConfig};

#[derive(Parser, Debug)]
#[command(name = "stronghold", about = "Terminal base-defense simulation")]
struct Args {
    /// RNG seed; the same seed replays the same assault.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Milliseconds per simulation tick.
    #[arg(long, default_value_t = 120)]
    tick_ms: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    tracing::info!(seed = args.seed, "stronghold starting");
    let mut engine = GameEngine::new(SimConfig { seed: args.seed });

    terminal::enable_raw_mode()?;
    execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
    let result = run(&mut engine, Duration::from_millis(args.tick_ms));
    execute!(stdout(), cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(engine: &mut GameEngine, tick_period: Duration) -> Result<()> {
    let mut out = stdout();
    render::draw(&mut out, &engine.snapshot())?;
    let mut next_tick = Instant::now() + tick_period;

    loop {
        let timeout = next_tick.saturating_duration_since(Instant::now());
        match input::poll_intent(timeout)? {
            Some(input::Intent::Quit) => return Ok(()),
            Some(input::Intent::Command(command)) => {
                let _ = engine.execute(command);
            }
            None => {}
        }
        if Instant::now() >= next_tick {
            let snapshot = engine.tick();
            render::draw(&mut out, &snapshot)?;
            next_tick += tick_period;
        }
    }
}
