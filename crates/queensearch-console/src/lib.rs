//! Colorful console output for search runs.
//!
//! Provides a custom `tracing` layer that formats engine events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Solve start and end with final counters
//! - **DEBUG**: Each solution found, early termination
//! - **TRACE**: Individual expansions

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "queensearch_solver=info";

/// Initializes the search console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SearchConsoleLayer)
            .try_init();
    });
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since solve start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
  ___                            ____                      _
 / _ \ _   _  ___  ___ _ __  ___/ ___|  ___  __ _ _ __ ___| |__
| | | | | | |/ _ \/ _ \ '_ \/ __\___ \ / _ \/ _` | '__/ __| '_ \
| |_| | |_| |  __/  __/ | | \__ \___) |  __/ (_| | | | (__| | | |
 \__\_\\__,_|\___|\___|_| |_|___/____/ \___|\__,_|_|  \___|_| |_|
"#;

    let version_line = format!("                     v{} - N-Queens State-Space Search\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats search engine events with colors.
pub struct SearchConsoleLayer;

impl<S: Subscriber> Layer<S> for SearchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        if !accepts_target(target) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let level = *metadata.level();
        let output = format_event(&visitor, level);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

// Only the engine emits search events.
fn accepts_target(target: &str) -> bool {
    target.starts_with("queensearch_solver")
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    strategy: Option<String>,
    pruning: Option<String>,
    mode: Option<String>,
    frontier: Option<String>,
    outcome: Option<String>,
    state: Option<String>,
    board_size: Option<u64>,
    solutions: Option<u64>,
    max_open: Option<u64>,
    enqueued: Option<u64>,
    closed: Option<u64>,
    duration_ms: Option<u64>,
    speed: Option<u64>,
    index: Option<u64>,
    steps: Option<u64>,
    open: Option<u64>,
    depth: Option<u64>,
    children: Option<u64>,
}

impl EventVisitor {
    fn set_text(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "strategy" => self.strategy = Some(value),
            "pruning" => self.pruning = Some(value),
            "mode" => self.mode = Some(value),
            "frontier" => self.frontier = Some(value),
            "outcome" => self.outcome = Some(value),
            "state" => self.state = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field.name(), s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "board_size" => self.board_size = Some(value),
            "solutions" => self.solutions = Some(value),
            "max_open" => self.max_open = Some(value),
            "enqueued" => self.enqueued = Some(value),
            "closed" => self.closed = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "speed" => self.speed = Some(value),
            "index" => self.index = Some(value),
            "steps" => self.steps = Some(value),
            "open" => self.open = Some(value),
            "depth" => self.depth = Some(value),
            "children" => self.children = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field.name(), value.to_string());
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "solution" => format_solution(v),
        "terminated" => format_terminated(v),
        "expand" => format_expand(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let n = v.board_size.unwrap_or(0);

    format!(
        "{} {} Solving │ {}×{} board │ {} │ {} pruning │ {} │ scale {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        n.bright_yellow(),
        n.bright_yellow(),
        v.strategy.as_deref().unwrap_or("?").white().bold(),
        v.pruning.as_deref().unwrap_or("?").bright_yellow(),
        format_mode(v.mode.as_deref()),
        calculate_problem_scale(n as usize).bright_magenta()
    )
}

fn format_mode(mode: Option<&str>) -> String {
    match mode {
        Some(m) if m.eq_ignore_ascii_case("first") => "first solution".to_string(),
        Some(m) if m.eq_ignore_ascii_case("all") => "all solutions".to_string(),
        Some(m) => m.to_string(),
        None => "?".to_string(),
    }
}

fn format_solve_end(v: &EventVisitor) -> String {
    let outcome = v.outcome.as_deref().unwrap_or("Unknown");
    let solutions = v.solutions.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    let status = format_outcome(outcome, solutions);

    let mut output = format!(
        "{} {} Search complete │ {} │ {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(duration).yellow(),
        format_solutions(solutions),
        status
    );

    // Summary box
    let inner_width: usize = 58;
    let border = "═".repeat(inner_width);
    output.push_str("\n\n");
    output.push_str(&format!("╔{}╗", border).bright_cyan().to_string());
    output.push('\n');

    let headline = summary_headline(outcome, solutions);
    let total_pad = inner_width.saturating_sub(headline.chars().count());
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    output.push_str(&format!(
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left_pad),
        headline.white().bold(),
        " ".repeat(right_pad),
        "║".bright_cyan()
    ));
    output.push('\n');
    output.push_str(&format!("╠{}╣", border).bright_cyan().to_string());
    output.push('\n');

    let rows = [
        ("Solutions:", solutions),
        ("Max open:", v.max_open.unwrap_or(0)),
        ("Total enqueued:", v.enqueued.unwrap_or(0)),
        ("Closed:", v.closed.unwrap_or(0)),
        ("States/s:", v.speed.unwrap_or(0)),
    ];
    for (label, value) in rows {
        output.push_str(&format_summary_row(label, &format_count(value)));
        output.push('\n');
    }

    output.push_str(&format!("╚{}╝", border).bright_cyan().to_string());
    output.push('\n');

    output
}

fn format_summary_row(label: &str, value: &str) -> String {
    format!(
        "{}  {:<18}{:>36}  {}",
        "║".bright_cyan(),
        label,
        value,
        "║".bright_cyan()
    )
}

fn summary_headline(outcome: &str, solutions: u64) -> &'static str {
    match (outcome, solutions) {
        ("Terminated", _) => "SEARCH TERMINATED EARLY",
        (_, 0) => "NO SOLUTION EXISTS",
        ("FoundFirst", _) => "FIRST SOLUTION FOUND",
        _ => "SEARCH SPACE EXHAUSTED",
    }
}

fn format_outcome(outcome: &str, solutions: u64) -> String {
    match (outcome, solutions) {
        ("Terminated", _) => outcome.bright_yellow().bold().to_string(),
        (_, 0) => outcome.bright_red().bold().to_string(),
        _ => outcome.bright_green().bold().to_string(),
    }
}

fn format_solutions(solutions: u64) -> String {
    let label = if solutions == 1 {
        "solution"
    } else {
        "solutions"
    };
    let count = format_count(solutions);
    if solutions == 0 {
        format!("{} {}", count.bright_red(), label)
    } else {
        format!("{} {}", count.bright_green().bold(), label)
    }
}

fn format_solution(v: &EventVisitor) -> String {
    let index = v.index.unwrap_or(0);
    let steps = v.steps.unwrap_or(0);
    let state = v.state.as_deref().unwrap_or("[]");

    format!(
        "{} {} Solution #{:<5} │ {:>10} steps │ {}",
        format_elapsed(),
        "♛".bright_green(),
        format_count(index + 1),
        format_count(steps).white(),
        state.bright_green()
    )
}

fn format_terminated(v: &EventVisitor) -> String {
    let steps = v.steps.unwrap_or(0);
    let open = v.open.unwrap_or(0);

    format!(
        "{} {} Terminated │ {} steps │ {} open",
        format_elapsed(),
        "⏹".bright_yellow(),
        format_count(steps).white(),
        format_count(open).white()
    )
}

fn format_expand(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    let depth = v.depth.unwrap_or(0);
    let children = v.children.unwrap_or(0);
    let open = v.open.unwrap_or(0);

    let icon = if children > 0 {
        "✓".bright_green().to_string()
    } else {
        "✗".bright_red().to_string()
    };

    format!(
        "{} {} Depth {:>4} │ {:>4} children │ {:>10} open",
        format_elapsed(),
        icon,
        depth.bright_black(),
        children.bright_black(),
        format_count(open).bright_black()
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

// Size of the unpruned placement space, N^N, as mantissa x 10^exponent.
fn calculate_problem_scale(board_size: usize) -> String {
    if board_size == 0 {
        return "0".to_string();
    }

    let log_scale = (board_size as f64) * (board_size as f64).log10();
    let exponent = log_scale.floor() as i32;
    let mantissa = 10f64.powf(log_scale - exponent as f64);

    format!("{:.3} x 10^{}", mantissa, exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_engine_targets_only() {
        assert!(accepts_target("queensearch_solver::engine"));
        assert!(!accepts_target("queensearch"));
        assert!(!accepts_target("hyper::proto"));
    }

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_problem_scale() {
        assert_eq!(calculate_problem_scale(0), "0");
        assert_eq!(calculate_problem_scale(1), "1.000 x 10^0");
        // 8^8 = 16,777,216
        assert_eq!(calculate_problem_scale(8), "1.678 x 10^7");
    }

    #[test]
    fn test_summary_headline() {
        assert_eq!(summary_headline("Exhausted", 92), "SEARCH SPACE EXHAUSTED");
        assert_eq!(summary_headline("Exhausted", 0), "NO SOLUTION EXISTS");
        assert_eq!(summary_headline("FoundFirst", 1), "FIRST SOLUTION FOUND");
        assert_eq!(summary_headline("Terminated", 0), "SEARCH TERMINATED EARLY");
    }

    #[test]
    fn test_format_mode() {
        assert_eq!(format_mode(Some("First")), "first solution");
        assert_eq!(format_mode(Some("All")), "all solutions");
        assert_eq!(format_mode(None), "?");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let visitor = EventVisitor {
            event: Some("progress".to_string()),
            ..Default::default()
        };
        assert!(format_event(&visitor, Level::INFO).is_empty());
    }

    #[test]
    fn test_expand_only_at_trace() {
        let visitor = EventVisitor {
            event: Some("expand".to_string()),
            depth: Some(2),
            children: Some(3),
            ..Default::default()
        };
        assert!(format_event(&visitor, Level::DEBUG).is_empty());
        assert!(!format_event(&visitor, Level::TRACE).is_empty());
    }

    #[test]
    fn test_solution_line_contains_state() {
        let visitor = EventVisitor {
            event: Some("solution".to_string()),
            index: Some(0),
            steps: Some(9),
            state: Some("[(0,1),(1,3),(2,0),(3,2)]".to_string()),
            ..Default::default()
        };
        let line = format_event(&visitor, Level::DEBUG);
        assert!(line.contains("(0,1),(1,3)"));
        assert!(line.contains("Solution #1"));
    }

    #[test]
    fn test_solve_end_summary_rows() {
        let visitor = EventVisitor {
            event: Some("solve_end".to_string()),
            outcome: Some("Exhausted".to_string()),
            solutions: Some(92),
            enqueued: Some(2057),
            ..Default::default()
        };
        let output = format_event(&visitor, Level::INFO);
        assert!(output.contains("SEARCH SPACE EXHAUSTED"));
        assert!(output.contains("2,057"));
    }
}
