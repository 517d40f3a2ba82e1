// Painel Report Harness — runs every dashboard scenario offline
//
// Usage:
//   cargo run --bin report                  # All four tabs, worksheet defaults
//   cargo run --bin report -- overbooking   # Filter by tab name
//   cargo run --bin report -- --seed 42     # Seed for the ROI simulation
//   cargo run --bin report -- --json        # Dump full reports as JSON

use scenario_engine::scenario::{self, defaults};
use scenario_engine::{OverbookingParams, RoiParams};

use serde::Serialize;

// ─── CLI Parsing ────────────────────────────────────────────────────────────

struct CliArgs {
    seed: u64,
    json: bool,
    filter: Option<String>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs { seed: 42, json: false, filter: None };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                if i < args.len() {
                    cli.seed = args[i].parse().unwrap_or(42);
                }
            }
            "--json" => {
                cli.json = true;
            }
            arg if !arg.starts_with('-') => {
                cli.filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    cli
}

// ─── Combined Output ────────────────────────────────────────────────────────

#[derive(Serialize)]
struct DashboardReport {
    seed: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    overbooking: Option<scenario_engine::OverbookingReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    poisson: Option<scenario_engine::PoissonReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    normal: Option<scenario_engine::NormalReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    roi: Option<scenario_engine::RoiReport>,
}

const TABS: [&str; 4] = ["overbooking", "poisson", "normal", "roi"];

fn selected(filter: &Option<String>, tab: &str) -> bool {
    match filter {
        Some(f) => tab.contains(&f.to_lowercase()),
        None => true,
    }
}

fn main() {
    let cli = parse_args();

    println!("\n  Painel Scenario Report (seed {})", cli.seed);
    println!("  {}", "-".repeat(64));

    let mut out = DashboardReport {
        seed: cli.seed,
        overbooking: None,
        poisson: None,
        normal: None,
        roi: None,
    };

    if selected(&cli.filter, "overbooking") {
        match scenario::overbooking_scenario(&OverbookingParams::default()) {
            Ok(report) => {
                println!(
                    "  Overbooking: risk {:.2}%, safe volume {}, penalty R$ {:.2}, {:?}",
                    report.overbooking_probability * 100.0,
                    report
                        .max_safe_volume
                        .map(|v| v.to_string())
                        .unwrap_or_else(|| "none".to_string()),
                    report.expected_penalty_cost,
                    report.recommendation,
                );
                out.overbooking = Some(report);
            }
            Err(e) => eprintln!("  Overbooking failed: {}", e),
        }
    }

    if selected(&cli.filter, "poisson") {
        match scenario::poisson_scenario(defaults::POISSON_RATE, defaults::POISSON_MAX_K) {
            Ok(report) => {
                let mode = report
                    .pmf
                    .iter()
                    .cloned()
                    .fold(report.pmf[0], |a, b| if b.probability > a.probability { b } else { a });
                println!(
                    "  Poisson:     λ {}, mode at k={} ({:.2}%)",
                    defaults::POISSON_RATE,
                    mode.k,
                    mode.probability * 100.0,
                );
                out.poisson = Some(report);
            }
            Err(e) => eprintln!("  Poisson failed: {}", e),
        }
    }

    if selected(&cli.filter, "normal") {
        match scenario::normal_scenario(
            defaults::NORMAL_MEAN,
            defaults::NORMAL_STD_DEV,
            defaults::NORMAL_LOWER,
            defaults::NORMAL_UPPER,
        ) {
            Ok(report) => {
                println!(
                    "  Normal:      P({} <= sales <= {}) = {:.2}%",
                    defaults::NORMAL_LOWER,
                    defaults::NORMAL_UPPER,
                    report.range_probability * 100.0,
                );
                out.normal = Some(report);
            }
            Err(e) => eprintln!("  Normal failed: {}", e),
        }
    }

    if selected(&cli.filter, "roi") {
        match scenario::roi_scenario(&RoiParams::default(), Some(cli.seed)) {
            Ok(report) => {
                println!(
                    "  ROI:         expected {:.1}%, simulated mean {:.1}% [{:.1}%, {:.1}%], {:?}",
                    report.expected_roi_percent,
                    report.mean_roi_percent,
                    report.min_roi_percent,
                    report.max_roi_percent,
                    report.outlook,
                );
                out.roi = Some(report);
            }
            Err(e) => eprintln!("  ROI failed: {}", e),
        }
    }

    println!("  {}\n", "-".repeat(64));

    if out.overbooking.is_none() && out.poisson.is_none() && out.normal.is_none() && out.roi.is_none() {
        eprintln!(
            "No scenarios match filter: {:?} (tabs: {})",
            cli.filter,
            TABS.join(", ")
        );
        std::process::exit(1);
    }

    if cli.json {
        match serde_json::to_string_pretty(&out) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize reports: {}", e);
                std::process::exit(1);
            }
        }
    }
}
