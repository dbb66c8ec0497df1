use std::sync::OnceLock;

use prometheus::{Histogram, HistogramOpts, IntCounter, Registry};

// creates the custom registry and registers the custom metrics
pub fn setup() -> Result<(), prometheus::Error> {
    let registry = registry();
    registry.register(Box::new(incoming_requests_counter().clone()))?;
    registry.register(Box::new(response_time_hist().clone()))?;
    Ok(())
}

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();

    REGISTRY.get_or_init(Registry::new)
}

fn incoming_requests_counter() -> &'static IntCounter {
    static INCOMING_REQUESTS: OnceLock<IntCounter> = OnceLock::new();

    INCOMING_REQUESTS.get_or_init(|| {
        IntCounter::new("incoming_requests", "Incoming Requests").expect("valid metric definition")
    })
}

fn response_time_hist() -> &'static Histogram {
    static RESPONSE_TIME_COLLECTOR: OnceLock<Histogram> = OnceLock::new();

    RESPONSE_TIME_COLLECTOR.get_or_init(|| {
        Histogram::with_opts(HistogramOpts::new("response_time", "Response Times"))
            .expect("valid metric definition")
    })
}

pub(crate) fn track_request_count_and_time(response_time: f64) {
    incoming_requests_counter().inc();
    response_time_hist().observe(response_time);
}

pub(crate) fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = prometheus::TextEncoder::new();
    let mut metrics = String::new();

    encoder.encode_utf8(&registry().gather(), &mut metrics)?;
    encoder.encode_utf8(&prometheus::gather(), &mut metrics)?;

    Ok(metrics)
}
