use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::config::{parse_amount, parse_timeout};
use services::{ConfigError, OpenTdbClient, QuestionSource, QuizConfig, QuizLoopService, StaticQuestionSource};
use tracing::info;
use ui::{App, DEFAULT_REVEAL_DELAY, UiApp, build_app_context};

mod telemetry;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidRevealMs { raw: String },
    Config(ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidRevealMs { raw } => write!(f, "invalid reveal delay: {raw}"),
            ArgsError::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<ConfigError> for ArgsError {
    fn from(err: ConfigError) -> Self {
        ArgsError::Config(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    quiz_loop: Arc<QuizLoopService>,
    reveal_delay: Duration,
}

impl UiApp for DesktopApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn reveal_delay(&self) -> Duration {
        self.reveal_delay
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --api-url <url>        question source base URL (default https://opentdb.com/)");
    eprintln!("  --amount <n>           questions per quiz, 1-50 (default 10)");
    eprintln!("  --type <kind>          multiple | boolean (default multiple)");
    eprintln!("  --timeout-secs <n>     HTTP request timeout (default 10)");
    eprintln!("  --reveal-ms <n>        answer highlight before advancing (default 2000)");
    eprintln!("  --offline              use the bundled sample questions");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRIVIA_API_URL, TRIVIA_AMOUNT, TRIVIA_TYPE, TRIVIA_TIMEOUT_SECS, TRIVIA_REVEAL_MS");
    eprintln!("  TRIVIA_LOG (filter, default info), TRIVIA_LOG_FORMAT=json");
}

#[derive(Debug)]
struct Args {
    config: QuizConfig,
    reveal_delay: Duration,
    offline: bool,
    help: bool,
}

impl Args {
    /// Environment first, then flags on top.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut config = QuizConfig::from_lookup(&lookup)?;
        let mut reveal_delay = match lookup("TRIVIA_REVEAL_MS").filter(|v| !v.trim().is_empty()) {
            Some(raw) => parse_reveal_ms(&raw)?,
            None => DEFAULT_REVEAL_DELAY,
        };
        let mut offline = false;
        let mut help = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    config = config.with_api_base_url(&value)?;
                }
                "--amount" => {
                    let value = require_value(args, "--amount")?;
                    config = config.with_amount(parse_amount(&value)?)?;
                }
                "--type" => {
                    let value = require_value(args, "--type")?;
                    config = config.with_kind(value.parse()?);
                }
                "--timeout-secs" => {
                    let value = require_value(args, "--timeout-secs")?;
                    config = config.with_timeout(parse_timeout(&value)?);
                }
                "--reveal-ms" => {
                    let value = require_value(args, "--reveal-ms")?;
                    reveal_delay = parse_reveal_ms(&value)?;
                }
                "--offline" => offline = true,
                "--help" | "-h" => help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            config,
            reveal_delay,
            offline,
            help,
        })
    }
}

fn parse_reveal_ms(raw: &str) -> Result<Duration, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ArgsError::InvalidRevealMs {
            raw: raw.to_string(),
        })
}

fn build_source(args: &Args) -> Result<Arc<dyn QuestionSource>, Box<dyn std::error::Error>> {
    if args.offline {
        info!("using bundled sample questions");
        return Ok(Arc::new(StaticQuestionSource::sample()?));
    }
    info!(
        api_url = %args.config.api_base_url(),
        amount = args.config.amount(),
        kind = %args.config.kind(),
        "using Open Trivia DB"
    );
    Ok(Arc::new(OpenTdbClient::new(&args.config)?))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if args.help {
        print_usage();
        return Ok(());
    }

    telemetry::init_tracing();

    let source = build_source(&args)?;
    let quiz_loop = Arc::new(QuizLoopService::new(source, args.config.clone()));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz_loop,
        reveal_delay: args.reveal_delay,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Trivia")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::QuestionKind;

    fn parse(args: &[&str], env: &[(&str, &str)]) -> Result<Args, ArgsError> {
        let env: Vec<(String, String)> = env
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse(&mut iter, |key: &str| {
            env.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
        })
    }

    #[test]
    fn defaults_without_flags() {
        let args = parse(&[], &[]).unwrap();
        assert_eq!(args.config, QuizConfig::default());
        assert_eq!(args.reveal_delay, Duration::from_millis(2000));
        assert!(!args.offline);
    }

    #[test]
    fn flags_override_environment() {
        let args = parse(
            &["--amount", "5", "--type", "boolean", "--reveal-ms", "0", "--offline"],
            &[("TRIVIA_AMOUNT", "20"), ("TRIVIA_REVEAL_MS", "500")],
        )
        .unwrap();
        assert_eq!(args.config.amount(), 5);
        assert_eq!(args.config.kind(), QuestionKind::Boolean);
        assert_eq!(args.reveal_delay, Duration::ZERO);
        assert!(args.offline);
    }

    #[test]
    fn environment_applies_without_flags() {
        let args = parse(&[], &[("TRIVIA_REVEAL_MS", "750"), ("TRIVIA_TYPE", "boolean")]).unwrap();
        assert_eq!(args.reveal_delay, Duration::from_millis(750));
        assert_eq!(args.config.kind(), QuestionKind::Boolean);
    }

    #[test]
    fn bad_input_is_reported() {
        assert!(matches!(
            parse(&["--amount"], &[]),
            Err(ArgsError::MissingValue { flag: "--amount" })
        ));
        assert!(matches!(
            parse(&["--amount", "99"], &[]),
            Err(ArgsError::Config(ConfigError::InvalidAmount { .. }))
        ));
        assert!(matches!(
            parse(&["--reveal-ms", "soon"], &[]),
            Err(ArgsError::InvalidRevealMs { .. })
        ));
        assert!(matches!(
            parse(&["--verbose"], &[]),
            Err(ArgsError::UnknownArg(_))
        ));
    }
}
