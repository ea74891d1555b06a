//! Terminal Snake runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout). The core simulation ticks on its own clock;
//! this loop only samples keys, feeds frame deltas and draws.

use std::fs::File;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};
use simplelog::{Config, WriteLogger};

use tui_snake::cli::{parse_args, CliArgs, LOG_ENV, USAGE};
use tui_snake::core::{FrameClock, GameConfig, GameEvent, GameLoopController};
use tui_snake::input::{should_quit, HeldKeys};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::{DrawCommand, FRAME_MS};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let env_level = std::env::var(LOG_ENV).ok();
    let cli = parse_args(&args, env_level.as_deref())?;
    if cli.help {
        println!("{}", USAGE);
        return Ok(());
    }

    init_logging(&cli)?;
    let config = resolve_config(&cli)?;
    info!("starting tui-snake with {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("exiting with error: {:#}", e);
    }
    info!("bye");
    result
}

fn init_logging(cli: &CliArgs) -> Result<()> {
    let file = File::create(&cli.log_file)
        .with_context(|| format!("failed to create log file {}", cli.log_file.display()))?;
    WriteLogger::init(cli.log_level, Config::default(), file).context("failed to init logger")?;
    Ok(())
}

fn resolve_config(cli: &CliArgs) -> Result<GameConfig> {
    let config = cli.game_config()?;
    if config.seed.is_some() {
        return Ok(config);
    }
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1);
    Ok(config.with_seed(seed))
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let view = GameView::new(&config);
    let mut game = GameLoopController::new(config);
    let mut held = HeldKeys::new();

    let started = Instant::now();
    let mut frame_clock = FrameClock::new();
    let mut last_frame = Instant::now();
    let frame = Duration::from_millis(FRAME_MS);

    let mut commands: Vec<DrawCommand> = Vec::with_capacity(512);
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_size = (0u16, 0u16);

    loop {
        // Input until the next frame is due.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        while event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            info!("quit key pressed");
                            return Ok(());
                        }
                        held.handle_key_press(key);
                    }
                    KeyEventKind::Repeat => {
                        // Ignore terminal auto-repeat; the core is edge-triggered.
                    }
                    KeyEventKind::Release => held.handle_key_release(key),
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
            if last_frame.elapsed() >= frame {
                break;
            }
        }

        let elapsed_ms = last_frame.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last_frame = Instant::now();
        held.update(elapsed_ms);

        // Simulate.
        let dt = frame_clock.advance(started.elapsed().as_secs_f64());
        for ev in game.update(held.sample(), dt) {
            log_event(ev);
        }
        if game.should_exit() {
            return Ok(());
        }

        // Render.
        let size = crossterm::terminal::size().unwrap_or((80, 24));
        if size != last_size {
            debug!("viewport {}x{}", size.0, size.1);
            last_size = size;
        }
        game.render_into(&mut commands);
        view.render_into(&commands, Viewport::new(size.0, size.1), &mut fb);
        term.draw_swap(&mut fb)?;
    }
}

fn log_event(ev: GameEvent) {
    match ev {
        GameEvent::Ticked => {}
        GameEvent::ExitRequested => info!("exit requested"),
        other => debug!("event {:?}", other),
    }
}
