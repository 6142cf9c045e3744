//! header-auditor
//!
//! Prints the response headers of one URL (`-u`) or of every URL in a
//! list file (`-l`), then reports whether HSTS is set and whether any
//! cookie carries the `Secure` attribute.
//!
//! ```text
//!   args ──▶ cli ──▶ config ──▶ lifecycle::run
//!                                   │
//!                 ┌─────────────────┴──────────────────┐
//!                 ▼                                    ▼
//!           input (targets)                     http (one GET each)
//!                 │                                    │
//!                 └──────────▶ audit ◀─────────────────┘
//!                                │
//!                                ▼
//!                      output (colored stdout)
//! ```

use std::process::ExitCode;

use clap::Parser;

use header_auditor::cli::{self, Cli};
use header_auditor::lifecycle;
use header_auditor::output::{Painter, Tone};
use header_auditor::AuditError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return cli::exit_code(&e);
        }
    };

    let source = match cli.target_source() {
        Ok(source) => source,
        Err(e) => {
            let _ = e.print();
            return cli::exit_code(&e);
        }
    };

    let config = match lifecycle::resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            let painter = Painter::new(!cli.no_color);
            eprintln!("{}", painter.paint(Tone::Warning, &format!("[ERROR]:{e}")));
            return ExitCode::from(1);
        }
    };

    match lifecycle::run(config, source).await {
        Ok(_) => ExitCode::SUCCESS,
        // already printed by the reporter
        Err(e @ AuditError::Input(_)) => {
            tracing::debug!(error = %e, "Target list unusable");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("[ERROR]:{e}");
            ExitCode::from(1)
        }
    }
}
