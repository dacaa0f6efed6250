use std::time::Instant;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use split_slice::{adapters::sentence::wrap_lines, Partition, SplitError, Splitter};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};
use tracing_subscriber::EnvFilter;

/// Scaling probe for the branch-and-bound splitter.
///
/// Runs the splitter over growing inputs, records wall-clock time and RSS
/// growth, and checks the worst part against a dynamic-programming baseline
/// for inputs up to `--verify-limit` elements.
#[derive(Parser, Debug)]
#[command(name = "scale_probe", version)]
struct Options {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Maximum sequence length to verify via the baseline.
    #[arg(long, default_value_t = 512)]
    verify_limit: usize,

    /// Number of parts to split into.
    #[arg(long, default_value_t = 3)]
    parts: usize,

    /// Search the reversed sequence.
    #[arg(long)]
    greedy: bool,

    /// Abort each search after this many nodes.
    #[arg(long)]
    node_limit: Option<u64>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

#[derive(Clone, Serialize)]
struct Measurement {
    scenario: &'static str,
    size_desc: String,
    worst_part: u64,
    nodes: u64,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

const SIZES: &[usize] = &[64, 128, 256, 512, 1024, 2048, 4096];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let options = Options::parse();
    let mut builder = Splitter::builder(options.parts).with_greedy(options.greedy);
    if let Some(limit) = options.node_limit {
        builder = builder.with_node_limit(limit);
    }
    let splitter = builder.build();
    tracing::info!(
        parts = splitter.parts(),
        greedy = options.greedy,
        verify_limit = options.verify_limit,
        "starting scale probe"
    );

    let mut sys = System::new();
    let mut measurements = Vec::new();
    let scenarios: [(&'static str, fn(usize) -> Vec<u64>); 3] = [
        ("uniform", uniform_weights),
        ("sawtooth", sawtooth_weights),
        ("skewed", skewed_weights),
    ];

    for (scenario, make) in scenarios {
        tracing::info!(scenario, "running scenario");
        for &len in SIZES {
            let weights = make(len);
            match measure(scenario, &weights, &splitter, &options, &mut sys) {
                Ok(m) => measurements.push(m),
                Err(err) => {
                    tracing::error!(scenario, len, %err, "split failed");
                    std::process::exit(1);
                }
            }
        }
    }

    match measure_sentences(&options, &mut sys) {
        Ok(m) => measurements.extend(m),
        Err(err) => {
            tracing::error!(%err, "sentence wrapping failed");
            std::process::exit(1);
        }
    }

    if let Err(err) = write(options.format, &measurements) {
        tracing::error!(%err, "could not write measurements");
        std::process::exit(1);
    }

    if measurements
        .iter()
        .any(|m| matches!(m.verification_status, VerificationStatus::Failed))
    {
        std::process::exit(1);
    }
}

fn measure(
    scenario: &'static str,
    weights: &[u64],
    splitter: &Splitter,
    options: &Options,
    sys: &mut System,
) -> Result<Measurement, SplitError> {
    let before = rss_kib(sys);
    let start = Instant::now();
    let partition = splitter.split(weights)?;
    let wall_s = start.elapsed().as_secs_f64();
    let after = rss_kib(sys);

    let (status, detail) = verify(weights, &partition, options);
    tracing::info!(
        scenario,
        len = weights.len(),
        worst = partition.worst_part(),
        nodes = partition.stats().nodes,
        wall_s,
        status = status.icon(),
        "measured"
    );

    Ok(Measurement {
        scenario,
        size_desc: format!("len={}", weights.len()),
        worst_part: partition.worst_part(),
        nodes: partition.stats().nodes,
        wall_s,
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    })
}

fn measure_sentences(options: &Options, sys: &mut System) -> Result<Vec<Measurement>, SplitError> {
    const WORDS: &[&str] = &["the", "sun", "shines", "blight", "on", "old", "kentucky", "home"];
    let mut out = Vec::new();
    for &count in &[16usize, 64, 256] {
        let sentence: Vec<&str> = (0..count).map(|i| WORDS[(i * 5) % WORDS.len()]).collect();
        let sentence = sentence.join(" ");
        let before = rss_kib(sys);
        let start = Instant::now();
        let lines = wrap_lines(&sentence, options.parts, options.greedy)?;
        let wall_s = start.elapsed().as_secs_f64();
        let after = rss_kib(sys);

        let worst_part = lines.iter().map(|l| line_weight(l)).max().unwrap_or(0);
        let (status, detail) = if lines.join(" ") == sentence {
            (VerificationStatus::Passed, None)
        } else {
            (
                VerificationStatus::Failed,
                Some("wrapped lines do not rejoin to the input".to_string()),
            )
        };
        out.push(Measurement {
            scenario: "sentence",
            size_desc: format!("words={count}"),
            worst_part,
            nodes: 0,
            wall_s,
            rss_delta_kib: after.saturating_sub(before),
            verification_status: status,
            verification_detail: detail,
        });
    }
    Ok(out)
}

/// Weight the search minimised for one line: every word costs its length plus one.
fn line_weight(line: &str) -> u64 {
    line.split(' ').map(|word| word.len() as u64 + 1).sum()
}

fn verify(weights: &[u64], partition: &Partition, options: &Options) -> (VerificationStatus, Option<String>) {
    if weights.len() > options.verify_limit || !partition.is_exhaustive() {
        return (VerificationStatus::NotChecked, None);
    }
    let baseline = full_dp_worst(weights, options.parts);
    if baseline == partition.worst_part() {
        (VerificationStatus::Passed, None)
    } else {
        (
            VerificationStatus::Failed,
            Some(format!("expected {baseline}, got {}", partition.worst_part())),
        )
    }
}

/// Classic O(k n^2) table for the minimax contiguous partition.
fn full_dp_worst(weights: &[u64], parts: usize) -> u64 {
    let n = weights.len();
    if n == 0 {
        return 0;
    }
    let parts = parts.clamp(1, n);
    let mut prefix = vec![0u64; n + 1];
    for (i, w) in weights.iter().enumerate() {
        prefix[i + 1] = prefix[i] + w;
    }
    // dp[i] = best worst part covering the first i elements with j parts
    let mut dp: Vec<u64> = (0..=n).map(|i| prefix[i]).collect();
    for j in 2..=parts {
        let mut next = vec![u64::MAX; n + 1];
        for i in j..=n {
            for p in (j - 1)..i {
                let cand = dp[p].max(prefix[i] - prefix[p]);
                if cand < next[i] {
                    next[i] = cand;
                }
            }
        }
        dp = next;
    }
    dp[n]
}

fn uniform_weights(len: usize) -> Vec<u64> {
    vec![7; len]
}

fn sawtooth_weights(len: usize) -> Vec<u64> {
    (0..len as u64).map(|i| i % 17 + 1).collect()
}

fn skewed_weights(len: usize) -> Vec<u64> {
    (0..len as u64)
        .map(|i| if i % 97 == 0 { 500 } else { (i * 31 + 7) % 13 })
        .collect()
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        Some(p) => p.memory() / 1024,
        None => 0,
    }
}

fn write(format: OutputFormat, measurements: &[Measurement]) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Csv => {
            println!("scenario,size,worst_part,nodes,wall_s,rss_delta_kib,status,detail");
            for m in measurements {
                println!(
                    "{},{},{},{},{:.6},{},{},{}",
                    m.scenario,
                    m.size_desc,
                    m.worst_part,
                    m.nodes,
                    m.wall_s,
                    m.rss_delta_kib,
                    m.verification_status.label(),
                    m.verification_detail.as_deref().unwrap_or("")
                );
            }
        }
        OutputFormat::Table => {
            println!(
                "{:<10} | {:<12} | {:>10} | {:>12} | {:>10} | {:>10} | {:<11}",
                "scenario", "size", "worst", "nodes", "wall_s", "rss_kib", "status"
            );
            println!("{}", "-".repeat(90));
            for m in measurements {
                println!(
                    "{:<10} | {:<12} | {:>10} | {:>12} | {:>10.4} | {:>10} | {} {}",
                    m.scenario,
                    m.size_desc,
                    m.worst_part,
                    m.nodes,
                    m.wall_s,
                    m.rss_delta_kib,
                    m.verification_status.icon(),
                    m.verification_status.label()
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(measurements)?);
        }
    }
    Ok(())
}
