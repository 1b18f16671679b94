//! Runs one search end to end: request, print, save.

use crate::error::SearchError;
use crate::network::HttpTransport;
use crate::output::{write_results, ResponseSaver};
use crate::query::SearchQuery;
use crate::results::{extract, SearchResult};
use crate::search::SearchExecutor;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, warn};

/// What happened during a run
#[derive(Debug, Default)]
pub struct Report {
    /// Number of results printed, if extraction succeeded
    pub printed: Option<usize>,
    /// Where the response was saved, if saving succeeded
    pub saved_to: Option<PathBuf>,
    /// Errors from each failed step, in the order they happened
    pub errors: Vec<SearchError>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// The search pipeline with its collaborators
pub struct App<T> {
    executor: SearchExecutor<T>,
    saver: ResponseSaver,
    output_path: PathBuf,
}

impl<T: HttpTransport> App<T> {
    pub fn new(
        executor: SearchExecutor<T>,
        saver: ResponseSaver,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            executor,
            saver,
            output_path: output_path.into(),
        }
    }

    /// Execute `query`, print its results to `out`, then save the raw response.
    ///
    /// A failed request stops the run. Extraction and saving each parse the
    /// body on their own, so one failing does not skip the other. Step errors
    /// are returned in the report, not logged above debug level.
    pub async fn run<W: Write>(&self, query: &SearchQuery, out: &mut W) -> Report {
        let mut report = Report::default();

        let response = match self.executor.execute(query).await {
            Ok(response) => response,
            Err(e) => {
                debug!("Step failed: {}", e);
                report.errors.push(e);
                return report;
            }
        };

        let extracted = extract(&response.body)
            .and_then(|results| results.collect::<Result<Vec<SearchResult>, _>>());
        match extracted {
            Ok(results) => {
                if let Err(e) = write_results(out, &results) {
                    warn!("Failed to write results to console: {}", e);
                }
                report.printed = Some(results.len());
            }
            Err(e) => {
                debug!("Step failed: {}", e);
                report.errors.push(e);
            }
        }

        match self.saver.save(&self.output_path, &response.body) {
            Ok(()) => report.saved_to = Some(self.output_path.clone()),
            Err(e) => {
                debug!("Step failed: {}", e);
                report.errors.push(e);
            }
        }

        report
    }
}
