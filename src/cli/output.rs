//! CLI output formatting.
//!
//! All human-facing rendering lives here, away from the engine: symbol
//! glyphs and wording are presentation concerns and carry no behavioral
//! coupling to the solvers.

use crate::analysis::AnalysisReport;
use crate::config::ScenarioMeta;
use crate::model::{QueueMetrics, QueueParameters};

/// Print version information.
pub fn print_version() {
    println!("steadystate {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message.
pub fn print_help() {
    println!(
        r"steadystate - deterministic steady-state analysis of Markovian queues

USAGE:
    steadystate <COMMAND> [OPTIONS]

COMMANDS:
    analyze <scenario.yaml>     Analyze a queueing scenario
        --kendall <NOTATION>    Override structure from Kendall notation
                                (e.g. M/M/7//100); rates still come from
                                the scenario file
        --no-characterization   Print metrics only

    help                        Show this help message
    version                     Show version information

EXAMPLES:
    steadystate analyze scenarios/machine_shop.yaml
    steadystate analyze scenarios/call_center.yaml --no-characterization
    steadystate analyze scenarios/machine_shop.yaml --kendall M/M/9//100
"
    );
}

/// Print the parameter record.
pub fn print_parameters(params: &QueueParameters) {
    println!("Model: {}", params.kendall_label());
    println!("  arrival rate per customer (lambda) : {}", params.lambda);
    println!("  service rate per server (mu)       : {}", params.mu);
    println!("  servers (s)                        : {}", params.servers);
    if let Some(k) = params.capacity {
        println!("  capacity (K)                       : {k}");
    }
    if let Some(n) = params.population {
        println!("  population (N)                     : {n}");
    }
}

/// Print the metrics record.
pub fn print_metrics(metrics: &QueueMetrics) {
    println!("Steady-state metrics:");
    println!("  utilization (rho)                  : {:.6}", metrics.rho);
    println!("  mean number in system (L)          : {:.6}", metrics.l);
    println!("  mean number in queue (Lq)          : {:.6}", metrics.lq);
    println!("  mean time in system (W)            : {:.6}", metrics.w);
    println!("  mean time in queue (Wq)            : {:.6}", metrics.wq);
    println!("  probability system empty (p0)      : {:.6}", metrics.p0);
    if let Some(lambda_eff) = metrics.lambda_eff {
        println!("  effective arrival rate             : {lambda_eff:.6}");
    }
}

/// Print a full analysis report.
pub fn print_report(meta: &ScenarioMeta, report: &AnalysisReport) {
    if !meta.name.is_empty() {
        println!("Scenario: {}", meta.name);
        if !meta.description.is_empty() {
            println!("  {}", meta.description);
        }
        println!();
    }

    print_parameters(&report.parameters);
    println!();
    print_metrics(&report.metrics);

    if let Some(c) = &report.characterization {
        println!();
        println!("Characterization ({}):", c.kind);
        println!("  discipline: {}", c.discipline);
        println!("  assumptions:");
        for assumption in &c.assumptions {
            println!("    - {assumption}");
        }
        println!("  typical applications:");
        for application in &c.applications {
            println!("    - {application}");
        }
        println!();
        println!("  {}", c.explanation);
    }
}
