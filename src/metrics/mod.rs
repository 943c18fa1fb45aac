use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::Instant;

/// Which call surface a request arrived on. Used as a metric label so REST
/// and GraphQL traffic for the same operation stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Surface {
    Rest,
    Graphql,
}

impl Surface {
    pub fn as_str(&self) -> &'static str {
        match self {
            Surface::Rest => "rest",
            Surface::Graphql => "graphql",
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct DurationStats {
    sum_seconds: f64,
    count: u64,
}

/// In-process request metrics rendered in Prometheus text exposition format.
///
/// Counters: `omni_requests_total{operation, surface}` and
/// `omni_responses_total{operation, surface, code}`. Durations are tracked
/// as a summary (`_sum`/`_count`) per (operation, surface).
#[derive(Debug, Default)]
pub struct AppMetrics {
    requests: Mutex<BTreeMap<(String, Surface), u64>>,
    responses: Mutex<BTreeMap<(String, Surface, u16), u64>>,
    durations: Mutex<BTreeMap<(String, Surface), DurationStats>>,
}

impl AppMetrics {
    pub fn inc_requests_total(&self, operation: &str, surface: Surface) {
        let mut requests = self.requests.lock().unwrap_or_else(|e| e.into_inner());
        *requests.entry((operation.to_string(), surface)).or_insert(0) += 1;
    }

    pub fn inc_responses_total(&self, operation: &str, surface: Surface, code: u16) {
        let mut responses = self.responses.lock().unwrap_or_else(|e| e.into_inner());
        *responses
            .entry((operation.to_string(), surface, code))
            .or_insert(0) += 1;
    }

    /// Start a duration timer for one request. Call [`RequestTimer::observe`]
    /// exactly once when the request completes.
    pub fn request_timer(&self, operation: &str, surface: Surface) -> RequestTimer<'_> {
        RequestTimer {
            metrics: self,
            operation: operation.to_string(),
            surface,
            start: Instant::now(),
        }
    }

    fn record_duration(&self, operation: &str, surface: Surface, seconds: f64) {
        let mut durations = self.durations.lock().unwrap_or_else(|e| e.into_inner());
        let stats = durations
            .entry((operation.to_string(), surface))
            .or_default();
        stats.sum_seconds += seconds;
        stats.count += 1;
    }

    /// Current value of a request counter, mainly for tests.
    pub fn requests_total(&self, operation: &str, surface: Surface) -> u64 {
        let requests = self.requests.lock().unwrap_or_else(|e| e.into_inner());
        requests
            .get(&(operation.to_string(), surface))
            .copied()
            .unwrap_or(0)
    }

    /// Current value of a response counter, mainly for tests.
    pub fn responses_total(&self, operation: &str, surface: Surface, code: u16) -> u64 {
        let responses = self.responses.lock().unwrap_or_else(|e| e.into_inner());
        responses
            .get(&(operation.to_string(), surface, code))
            .copied()
            .unwrap_or(0)
    }

    /// Render every metric in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("# HELP omni_requests_total Total requests by operation and surface.\n");
        out.push_str("# TYPE omni_requests_total counter\n");
        {
            let requests = self.requests.lock().unwrap_or_else(|e| e.into_inner());
            for ((operation, surface), value) in requests.iter() {
                out.push_str(&format!(
                    "omni_requests_total{{operation=\"{}\",surface=\"{}\"}} {}\n",
                    operation,
                    surface.as_str(),
                    value
                ));
            }
        }

        out.push_str(
            "# HELP omni_responses_total Total responses by operation, surface, and status code.\n",
        );
        out.push_str("# TYPE omni_responses_total counter\n");
        {
            let responses = self.responses.lock().unwrap_or_else(|e| e.into_inner());
            for ((operation, surface, code), value) in responses.iter() {
                out.push_str(&format!(
                    "omni_responses_total{{operation=\"{}\",surface=\"{}\",code=\"{}\"}} {}\n",
                    operation,
                    surface.as_str(),
                    code,
                    value
                ));
            }
        }

        out.push_str(
            "# HELP omni_request_duration_seconds Request duration by operation and surface.\n",
        );
        out.push_str("# TYPE omni_request_duration_seconds summary\n");
        {
            let durations = self.durations.lock().unwrap_or_else(|e| e.into_inner());
            for ((operation, surface), stats) in durations.iter() {
                out.push_str(&format!(
                    "omni_request_duration_seconds_sum{{operation=\"{}\",surface=\"{}\"}} {}\n",
                    operation,
                    surface.as_str(),
                    stats.sum_seconds
                ));
                out.push_str(&format!(
                    "omni_request_duration_seconds_count{{operation=\"{}\",surface=\"{}\"}} {}\n",
                    operation,
                    surface.as_str(),
                    stats.count
                ));
            }
        }

        out
    }
}

/// Handle for timing one request. Consumed by `observe`.
pub struct RequestTimer<'a> {
    metrics: &'a AppMetrics,
    operation: String,
    surface: Surface,
    start: Instant,
}

impl RequestTimer<'_> {
    /// Record the elapsed time since the timer was started.
    pub fn observe(self) {
        let elapsed = self.start.elapsed().as_secs_f64();
        self.metrics
            .record_duration(&self.operation, self.surface, elapsed);
    }
}
