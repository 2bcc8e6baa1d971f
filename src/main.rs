use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::str::FromStr;

use chrono_tz::Tz;
use clap::Parser;
use tracing::{Level, debug};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use datefield::{DateFieldState, DateTimeValue, Granularity, SegmentType, StateOptions};

#[derive(Parser)]
#[command(name = "datefield", version, about = "Show and edit the segments of a date/time field")]
struct Cli {
    /// Initial value: HH:MM[:SS[.fff]] or YYYY-MM-DD[THH:MM[:SS[.fff]]][Zone/Name]
    #[arg(long)]
    value: Option<String>,

    /// Value used for segments that are not filled in yet
    #[arg(long)]
    placeholder: Option<String>,

    #[arg(short, long, default_value = "minute")]
    granularity: String,

    #[arg(short, long, default_value = "en-US")]
    locale: String,

    /// Force a 12- or 24-hour clock
    #[arg(long, value_parser = ["12", "24"])]
    hour_cycle: Option<String>,

    /// IANA zone name, or `local` for the system zone
    #[arg(long)]
    zone: Option<String>,

    /// Show the era next to the year
    #[arg(long)]
    era: bool,

    /// Show the time-zone name
    #[arg(long)]
    show_zone: bool,

    /// Edit to apply, in order: <op>:<segment>[=<text>] or `confirm`.
    /// Ops: increment, decrement, page-up, page-down, set, type, clear,
    /// backspace
    #[arg(long = "op")]
    ops: Vec<String>,

    /// Read edits from stdin, one per line
    #[arg(short, long)]
    interactive: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Field(#[from] datefield::Error),

    #[error("invalid edit `{0}`: expected <op>:<segment>[=<text>]")]
    InvalidOp(String),

    #[error("cannot determine the local time zone: {0}")]
    LocalZone(#[from] iana_time_zone::GetTimezoneError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Op {
    Increment(SegmentType),
    Decrement(SegmentType),
    PageUp(SegmentType),
    PageDown(SegmentType),
    Set(SegmentType, String),
    Type(SegmentType, String),
    Clear(SegmentType),
    Backspace(SegmentType),
    Confirm,
}

impl FromStr for Op {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CliError::InvalidOp(s.to_string());
        let s = s.trim();
        if s == "confirm" {
            return Ok(Op::Confirm);
        }
        let (op, rest) = s.split_once(':').ok_or_else(invalid)?;
        let (segment, text) = match rest.split_once('=') {
            Some((segment, text)) => (segment, Some(text.to_string())),
            None => (rest, None),
        };
        let ty = SegmentType::from_name(segment).ok_or_else(invalid)?;
        let parsed = match (op, text) {
            ("increment", None) => Op::Increment(ty),
            ("decrement", None) => Op::Decrement(ty),
            ("page-up", None) => Op::PageUp(ty),
            ("page-down", None) => Op::PageDown(ty),
            ("clear", None) => Op::Clear(ty),
            ("backspace", None) => Op::Backspace(ty),
            ("set", Some(text)) => Op::Set(ty, text),
            ("type", Some(text)) => Op::Type(ty, text),
            _ => return Err(invalid()),
        };
        Ok(parsed)
    }
}

fn init_logging(verbose: bool) -> Result<(), CliError> {
    let filter = if verbose {
        EnvFilter::new(format!("datefield={}", Level::TRACE))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("datefield={}", Level::WARN)))
    };
    let stderr_layer = tracing_subscriber::Layer::with_filter(
        tracing_subscriber::fmt::layer().compact().with_writer(io::stderr),
        filter,
    );
    tracing_subscriber::registry().with(stderr_layer).try_init()?;
    Ok(())
}

fn resolve_zone(name: &str) -> Result<Tz, CliError> {
    let name = if name == "local" {
        iana_time_zone::get_timezone()?
    } else {
        name.to_string()
    };
    name.parse::<Tz>()
        .map_err(|_| datefield::Error::InvalidTimeZone(name).into())
}

fn build_state(cli: &Cli) -> Result<DateFieldState, CliError> {
    let granularity: Granularity = cli.granularity.parse()?;
    let zone = cli.zone.as_deref().map(resolve_zone).transpose()?;
    let parse_value = |s: &str| -> Result<DateTimeValue, CliError> {
        let value: DateTimeValue = s.parse()?;
        Ok(match zone {
            Some(tz) => value.in_zone(tz),
            None => value,
        })
    };

    let mut options = StateOptions::new(cli.locale.clone()).granularity(granularity);
    options.hour12 = cli.hour_cycle.as_deref().map(|hc| hc == "12");
    options.time_zone = zone;
    options.show_era = cli.era;
    options.show_time_zone = cli.show_zone;
    options.value = cli.value.as_deref().map(parse_value).transpose()?;
    options.placeholder_value = cli.placeholder.as_deref().map(parse_value).transpose()?;
    Ok(DateFieldState::new(options)?)
}

fn apply(state: &mut DateFieldState, op: &Op) -> Result<(), CliError> {
    debug!(?op, "applying edit");
    match op {
        Op::Increment(ty) => state.increment(*ty)?,
        Op::Decrement(ty) => state.decrement(*ty)?,
        Op::PageUp(ty) => state.increment_page(*ty)?,
        Op::PageDown(ty) => state.decrement_page(*ty)?,
        Op::Set(ty, text) => state.set_segment(*ty, text)?,
        Op::Type(ty, text) => {
            for ch in text.chars() {
                state.enter_digit(*ty, ch)?;
            }
        }
        Op::Clear(ty) => state.clear_segment(*ty)?,
        Op::Backspace(ty) => state.backspace(*ty)?,
        Op::Confirm => {
            state.confirm_placeholder();
        }
    }
    Ok(())
}

fn print_segments(state: &DateFieldState, out: &mut impl Write) -> io::Result<()> {
    for segment in state.segments() {
        let range = match (segment.min_value, segment.max_value) {
            (Some(min), Some(max)) => format!("{min}..={max}"),
            _ => String::new(),
        };
        let value = segment.value.map(|v| v.to_string()).unwrap_or_default();
        let label = state.segment_label(segment.segment_type).unwrap_or_default();
        let flag = if segment.is_placeholder { "placeholder" } else { "" };
        writeln!(
            out,
            "{:<13} {:<8} {:>5} {:<9} {:<12} {}",
            segment.segment_type.as_str(),
            format!("{:?}", segment.text),
            value,
            range,
            label,
            flag
        )?;
    }
    match state.value() {
        Some(value) => writeln!(out, "value: {value}")?,
        None => writeln!(out, "value: (incomplete) showing {}", state.display_value())?,
    }
    Ok(())
}

fn run_interactive(state: &mut DateFieldState) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let result = trimmed.parse::<Op>().and_then(|op| apply(state, &op));
        match result {
            Ok(()) => print_segments(state, &mut stdout)?,
            Err(e) => eprintln!("error: {e}"),
        }
    }
    println!();
    Ok(())
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let mut state = build_state(cli)?;
    let mut stdout = io::stdout();
    print_segments(&state, &mut stdout)?;

    for raw in &cli.ops {
        let op: Op = raw.parse()?;
        apply(&mut state, &op)?;
        writeln!(stdout, "\n# {raw}")?;
        print_segments(&state, &mut stdout)?;
    }

    if cli.interactive {
        run_interactive(&mut state)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("error: {e}");
        return ExitCode::from(1);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}
