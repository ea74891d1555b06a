//! Command-line arguments for the terminal runner.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use log::LevelFilter;

use crate::core::GameConfig;

/// Environment variable consulted for the log level when `--log-level` is absent.
pub const LOG_ENV: &str = "TUI_SNAKE_LOG";

pub const DEFAULT_LOG_FILE: &str = "tui-snake.log";

pub const USAGE: &str = "\
usage: tui-snake [options]

options:
  --config <path>      load game settings from a JSON file
  --seed <u32>         pin the food RNG seed
  --log-file <path>    log destination (default: tui-snake.log)
  --log-level <level>  off|error|warn|info|debug|trace (env: TUI_SNAKE_LOG)
  -h, --help           print this help

keys:
  arrows / wasd / hjkl  move, navigate menu
  enter / space         select
  backspace / b         back
  esc                   menu / quit
  q, ctrl+c             quit immediately";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub seed: Option<u32>,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub help: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            config: None,
            seed: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: LevelFilter::Info,
            help: false,
        }
    }
}

/// Parse arguments (without the program name).
///
/// `env_level` is the value of [`LOG_ENV`], if set; an explicit `--log-level`
/// wins over it.
pub fn parse_args(args: &[String], env_level: Option<&str>) -> Result<CliArgs> {
    let mut out = CliArgs::default();
    if let Some(v) = env_level {
        out.log_level = parse_level(v).with_context(|| format!("invalid {}", LOG_ENV))?;
    }

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                out.config = Some(PathBuf::from(value(args, &mut i, "--config")?));
            }
            "--seed" => {
                let v = value(args, &mut i, "--seed")?;
                out.seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--log-file" => {
                out.log_file = PathBuf::from(value(args, &mut i, "--log-file")?);
            }
            "--log-level" => {
                out.log_level = parse_level(value(args, &mut i, "--log-level")?)?;
            }
            "-h" | "--help" => out.help = true,
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(out)
}

fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

fn parse_level(v: &str) -> Result<LevelFilter> {
    v.parse::<LevelFilter>()
        .map_err(|_| anyhow!("invalid log level: {}", v))
}

impl CliArgs {
    /// Resolve the game configuration: file (or defaults), then `--seed`.
    pub fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config.validate()?;
        Ok(config)
    }
}
