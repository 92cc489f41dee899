use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use symptom_core::{DiagnosisResult, DiagnosisSource, OverlapPolicy, SymptomQuery, UiConfig};
use tracing::{debug, error, info};

use crate::render::{ResultRenderer, ERROR_HTML, LOADING_HTML};
use crate::view::ResultsView;

/// What a single trigger ended up doing to the results area
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// Input was blank; nothing was sent or touched.
    Skipped,
    Rendered(DiagnosisResult),
    /// The generic error message is on display.
    Failed,
    /// A newer query was issued while this one was in flight, and the
    /// overlap policy kept this completion off the display.
    Superseded,
}

/// Reveals the results area when dropped, unless disarmed.
struct RevealOnDrop<'a> {
    results: &'a dyn ResultsView,
    armed: bool,
}

impl Drop for RevealOnDrop<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.results.reveal();
        }
    }
}

/// Sends symptom queries and drives the loading / error / result states of
/// one results container.
pub struct QueryDispatcher {
    source: Arc<dyn DiagnosisSource>,
    results: Arc<dyn ResultsView>,
    renderer: ResultRenderer,
    policy: OverlapPolicy,
    issued: AtomicU64,
}

impl QueryDispatcher {
    pub fn new(source: Arc<dyn DiagnosisSource>, results: Arc<dyn ResultsView>) -> Self {
        Self {
            source,
            results,
            renderer: ResultRenderer::default(),
            policy: OverlapPolicy::default(),
            issued: AtomicU64::new(0),
        }
    }

    pub fn from_config(
        source: Arc<dyn DiagnosisSource>,
        results: Arc<dyn ResultsView>,
        config: &UiConfig,
    ) -> Self {
        Self::new(source, results)
            .with_renderer(ResultRenderer::new(config.escape_html))
            .with_policy(config.overlap)
    }

    pub fn with_renderer(mut self, renderer: ResultRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_policy(mut self, policy: OverlapPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Runs one query for `symptoms`.
    ///
    /// Blank input is ignored. Otherwise the area is hidden, the loading
    /// placeholder is shown, and exactly one request goes out. The area is
    /// revealed last on every path, including when this future is dropped
    /// mid-request.
    pub async fn dispatch(&self, symptoms: &str) -> DispatchOutcome {
        let Some(query) = SymptomQuery::new(symptoms) else {
            debug!("Ignoring empty symptom input");
            return DispatchOutcome::Skipped;
        };

        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        info!(ticket, symptoms = query.symptoms(), "Dispatching symptom query");

        self.results.hide();
        self.results.set_html(LOADING_HTML);
        let mut reveal = RevealOnDrop {
            results: self.results.as_ref(),
            armed: true,
        };

        let response = self.source.check_symptoms(&query).await;

        if self.policy == OverlapPolicy::LatestIssued
            && ticket != self.issued.load(Ordering::SeqCst)
        {
            debug!(ticket, "Dropping superseded symptom response");
            reveal.armed = false;
            return DispatchOutcome::Superseded;
        }

        match response {
            Ok(result) => {
                self.results.set_html(&self.renderer.render(&result));
                DispatchOutcome::Rendered(result)
            }
            Err(e) => {
                error!(ticket, error = %e, "Symptom query failed");
                self.results.set_html(ERROR_HTML);
                DispatchOutcome::Failed
            }
        }
    }
}
