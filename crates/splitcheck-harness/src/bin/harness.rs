//! CLI entrypoint for the splitcheck conformance harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use splitcheck_harness::structured_log::{LogEmitter, LogEntry, Outcome};
use splitcheck_harness::{
    Backend, ConformanceReport, HarnessError, SuiteRunner, VerificationSummary, case_table, parity,
};

/// Conformance tooling for the platform split/decompose function.
#[derive(Debug, Parser)]
#[command(name = "splitcheck-harness")]
#[command(about = "Conformance testing harness for the platform split/decompose function")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the conformance suite against a backend.
    Run {
        /// Backend to test (host or native).
        #[arg(long, default_value = "host")]
        backend: String,
        /// Campaign name recorded in logs and reports.
        #[arg(long, default_value = "conformance")]
        campaign: String,
        /// Output report path (markdown; a .json sibling is written too).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Output JSONL log path (defaults to no structured log).
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Compare host and native backends bit for bit across the table inputs.
    Parity {
        /// Output JSON path for the parity rows.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Dump the reference case table as a JSON fixture.
    Table {
        /// Output fixture path.
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            backend,
            campaign,
            report,
            log,
        } => {
            let backend = Backend::from_str_loose(&backend)
                .ok_or_else(|| HarnessError::UnknownBackend(backend.clone()).to_string())?;
            let timestamp = format!("{:?}", std::time::SystemTime::now());

            let cases = case_table();
            let runner = SuiteRunner::new(campaign, backend);
            let verdicts = runner.run(&cases);

            let mut emitter = match &log {
                Some(path) => Some(LogEmitter::to_file(path)?),
                None => None,
            };
            for verdict in &verdicts {
                if let Some(diagnostic) = &verdict.diagnostic {
                    eprintln!("[{}] {}", verdict.case_name, diagnostic);
                }
                if let Some(emitter) = emitter.as_mut() {
                    let outcome = if verdict.passed { Outcome::Pass } else { Outcome::Fail };
                    emitter.emit(&LogEntry::comparison(
                        timestamp.clone(),
                        &runner.campaign,
                        backend.as_str(),
                        &verdict.case_name,
                        outcome,
                        verdict.diagnostic.clone(),
                    ))?;
                }
            }

            let summary = VerificationSummary::from_results(verdicts);
            let report_doc = ConformanceReport {
                title: String::from("split/decompose Conformance Report"),
                backend: String::from(backend.as_str()),
                timestamp,
                summary,
            };

            eprintln!(
                "Verification complete: backend={}, total={}, passed={}, failed={}",
                report_doc.backend,
                report_doc.summary.total,
                report_doc.summary.passed,
                report_doc.summary.failed
            );

            if let Some(report_path) = report {
                eprintln!("Writing report to {}", report_path.display());
                let json_path = report_doc.write_artifacts(&report_path)?;
                eprintln!("Wrote JSON report to {}", json_path.display());
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::Parity { output } => {
            let rows = parity::parity_rows(&case_table());
            let mismatched: Vec<_> = rows.iter().filter(|row| !row.matched).collect();
            for row in &mismatched {
                eprintln!(
                    "[{}] host={} native={}",
                    row.name, row.host, row.native
                );
            }
            eprintln!(
                "Parity complete: total={}, mismatched={}",
                rows.len(),
                mismatched.len()
            );

            if let Some(path) = output {
                std::fs::write(&path, serde_json::to_string_pretty(&rows)?)?;
                eprintln!("Wrote parity rows to {}", path.display());
            }

            if !mismatched.is_empty() {
                return Err("Host/native parity check failed".into());
            }
        }
        Command::Table { output } => {
            let records: Vec<_> = case_table().iter().map(|case| case.to_record()).collect();
            std::fs::write(&output, serde_json::to_string_pretty(&records)?)?;
            eprintln!("Wrote case table fixture to {}", output.display());
        }
    }

    Ok(())
}
