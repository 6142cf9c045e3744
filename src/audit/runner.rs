//! Sequential audit loop.
//!
//! # Responsibilities
//! - Fetch each target in input order, one at a time
//! - Report headers, cookies and verdict for every response
//! - Report fetch failures and move on to the next target
//!
//! # Design Decisions
//! - A failed fetch never aborts the run
//! - A list file that cannot be opened aborts before any request is sent
//! - List mode prints a separator after every target, failed or not

use std::io::Write;

use crate::audit::report::Reporter;
use crate::audit::verdict::Verdict;
use crate::error::AuditError;
use crate::http::Fetch;
use crate::input::{Target, TargetList, TargetSource};

/// Counters for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Targets a request was sent for.
    pub attempted: usize,
    /// Targets whose request produced no response.
    pub failed: usize,
}

/// Drives a fetcher over a set of targets and writes the report.
pub struct Auditor<F, W> {
    fetcher: F,
    reporter: Reporter<W>,
}

impl<F: Fetch, W: Write> Auditor<F, W> {
    pub fn new(fetcher: F, reporter: Reporter<W>) -> Self {
        Self { fetcher, reporter }
    }

    pub fn into_reporter(self) -> Reporter<W> {
        self.reporter
    }

    /// Audit every target named by `source`.
    pub async fn run(&mut self, source: &TargetSource) -> Result<RunSummary, AuditError> {
        let mut summary = RunSummary::default();

        match source {
            TargetSource::Single(target) => {
                self.audit_target(target, &mut summary).await?;
            }
            TargetSource::List(path) => {
                let mut list = match TargetList::open(path).await {
                    Ok(list) => list,
                    Err(e) => {
                        self.reporter.fatal(&e)?;
                        return Err(e.into());
                    }
                };

                loop {
                    let target = match list.next_target().await {
                        Ok(Some(target)) => target,
                        Ok(None) => break,
                        Err(e) => {
                            self.reporter.fatal(&e)?;
                            return Err(e.into());
                        }
                    };

                    self.audit_target(&target, &mut summary).await?;
                    self.reporter.separator()?;
                }
            }
        }

        self.reporter.flush()?;
        tracing::info!(
            attempted = summary.attempted,
            failed = summary.failed,
            "Audit finished"
        );
        Ok(summary)
    }

    async fn audit_target(
        &mut self,
        target: &Target,
        summary: &mut RunSummary,
    ) -> Result<(), AuditError> {
        self.reporter.banner(target.as_str())?;
        summary.attempted += 1;

        match self.fetcher.fetch(target.as_str()).await {
            Ok(response) => {
                let verdict = Verdict::evaluate(&response);
                tracing::debug!(
                    url = %target,
                    status = %response.status,
                    hsts = verdict.hsts_present(),
                    secure_cookie = verdict.secure_cookie_present(),
                    "Target evaluated"
                );

                self.reporter.headers(&response)?;
                self.reporter.cookies(&verdict)?;
                self.reporter.verdict(&verdict)?;
            }
            Err(e) => {
                tracing::warn!(url = %target, error = %e, "Fetch failed");
                summary.failed += 1;
                self.reporter.fetch_error(&e)?;
            }
        }

        self.reporter.flush()?;
        Ok(())
    }
}
