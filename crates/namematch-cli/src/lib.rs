// namematch-cli: shared utilities for CLI tools.

use std::io::Read;
use std::path::PathBuf;
use std::process;

use namematch_engine::{EngineConfig, NameMatcher, StrategyKind, Vocabulary};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable naming a config file.
const CONFIG_ENV: &str = "NAMEMATCH_CONFIG";

/// Environment variable holding the log filter.
const LOG_ENV: &str = "NAMEMATCH_LOG";

/// Config file name inside `~/.namematch`.
const HOME_CONFIG: &str = "config.json";

/// Config file name looked up in the working directory.
const LOCAL_CONFIG: &str = "namematch.json";

/// Flags shared by every tool.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonOptions {
    pub config_path: Option<String>,
    pub vocabulary_path: Option<String>,
    pub min_score: Option<f64>,
    pub strategy: Option<StrategyKind>,
    pub max_variations: Option<usize>,
    pub verbose: bool,
}

/// Pull the shared flags out of `args`.
///
/// Accepts both `--flag VALUE` and `--flag=VALUE`. Returns the options and
/// the arguments that were not consumed.
pub fn parse_common_flags(args: &[String]) -> Result<(CommonOptions, Vec<String>), String> {
    let mut opts = CommonOptions::default();
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((f, v)) if f.starts_with("--") => (f, Some(v.to_string())),
            _ => (arg.as_str(), None),
        };
        let mut value = |name: &str| -> Result<String, String> {
            match &inline {
                Some(v) => Ok(v.clone()),
                None => iter
                    .next()
                    .cloned()
                    .ok_or_else(|| format!("{name} requires a value")),
            }
        };
        match flag {
            "--config" | "-c" => opts.config_path = Some(value("--config")?),
            "--vocabulary" => opts.vocabulary_path = Some(value("--vocabulary")?),
            "--min-score" => {
                let raw = value("--min-score")?;
                opts.min_score = Some(
                    raw.parse()
                        .map_err(|_| format!("invalid number for --min-score: {raw}"))?,
                );
            }
            "--strategy" => {
                let raw = value("--strategy")?;
                opts.strategy = Some(StrategyKind::parse(&raw).ok_or_else(|| {
                    format!("unknown strategy {raw:?} (expected broad or strict)")
                })?);
            }
            "--max-variations" => {
                let raw = value("--max-variations")?;
                opts.max_variations = Some(
                    raw.parse()
                        .map_err(|_| format!("invalid number for --max-variations: {raw}"))?,
                );
            }
            "-v" | "--verbose" => opts.verbose = true,
            _ => remaining.push(arg.clone()),
        }
    }

    Ok((opts, remaining))
}

/// Install the stderr log subscriber.
///
/// The filter comes from `NAMEMATCH_LOG`, defaulting to `warn`; `verbose`
/// raises the engine to `debug`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "namematch_engine=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Find the config file, apply flag overrides and create a NameMatcher.
///
/// Search order:
/// 1. `--config` argument (if provided)
/// 2. `NAMEMATCH_CONFIG` environment variable
/// 3. `~/.namematch/config.json`
/// 4. `namematch.json` in the current directory
///
/// Without any file the built-in defaults are used. An explicitly named
/// file that does not exist is an error.
pub fn load_matcher(opts: &CommonOptions) -> Result<NameMatcher, String> {
    let mut config = match find_config(opts)? {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            let json = read_file(&path)?;
            EngineConfig::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))?
        }
        None => EngineConfig::default(),
    };

    if let Some(min_score) = opts.min_score {
        config = config.with_min_score(min_score);
    }
    if let Some(strategy) = opts.strategy {
        config = config.with_strategy(strategy);
    }
    if let Some(max) = opts.max_variations {
        config = config.with_max_variations(max);
    }

    let vocabulary = match &opts.vocabulary_path {
        Some(p) => {
            let path = PathBuf::from(p);
            let json = read_file(&path)?;
            Vocabulary::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))?
        }
        None => Vocabulary::default(),
    };

    NameMatcher::new(config, vocabulary).map_err(|e| format!("failed to create NameMatcher: {e}"))
}

fn find_config(opts: &CommonOptions) -> Result<Option<PathBuf>, String> {
    if let Some(p) = &opts.config_path {
        let path = PathBuf::from(p);
        if !path.is_file() {
            return Err(format!("config file not found: {}", path.display()));
        }
        return Ok(Some(path));
    }
    Ok(config_search_paths().into_iter().find(|p| p.is_file()))
}

/// Candidate config locations after an explicit `--config`, in order.
pub fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".namematch").join(HOME_CONFIG));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(LOCAL_CONFIG));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

fn read_file(path: &PathBuf) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path.display(), e))
}

/// Read a whole file, or stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&str>) -> Result<String, String> {
    match path {
        Some(p) if p != "-" => read_file(&PathBuf::from(p)),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("error reading stdin: {e}"))?;
            Ok(buf)
        }
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Help text for the shared flags.
pub const COMMON_OPTIONS_HELP: &str = "\
  -c, --config PATH        Engine config JSON (default: search NAMEMATCH_CONFIG,
                           ~/.namematch/config.json, ./namematch.json)
      --vocabulary PATH    Vocabulary JSON replacing or extending the built-in tables
      --min-score X        Minimum score for a match (default: 0.65)
      --strategy NAME      Variation strategy: broad or strict (default: broad)
      --max-variations N   Cap on query variations (default: 24)
  -v, --verbose            Log engine decisions to stderr
  -h, --help               Print this help";
