#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use erratic_server::obs::ServerMetrics;

#[test]
fn ratio_gauge_hidden_until_set() {
    let m = ServerMetrics::new();
    let text = m.render();
    assert!(text.contains("# TYPE example_configured_error_ratio gauge"));
    assert!(!text.lines().any(|l| l.starts_with("example_configured_error_ratio ")));

    m.configured_error_ratio.set(0.5);
    m.configured_error_ratio.set(0.001);
    let text = m.render();
    assert!(text.lines().any(|l| l == "example_configured_error_ratio 0.001"), "{text}");
}

#[test]
fn counters_and_histograms_render_labels() {
    let m = ServerMetrics::new();
    let labels = [("method", "GET"), ("route", "/"), ("status", "500")];
    m.http_requests.inc(&labels);
    m.http_requests.inc(&labels);
    m.http_request_duration
        .observe(&[("method", "GET"), ("route", "/")], Duration::from_micros(700));
    m.shutdown_requests.inc(&[]);

    let text = m.render();
    assert!(
        text.contains("erratic_http_requests_total{method=\"GET\",route=\"/\",status=\"500\"} 2"),
        "{text}"
    );
    // 700us lands in the 1ms bucket but not 500us.
    assert!(text.contains(
        "erratic_http_request_duration_micros_bucket{method=\"GET\",route=\"/\",le=\"500\"} 0"
    ));
    assert!(text.contains(
        "erratic_http_request_duration_micros_bucket{method=\"GET\",route=\"/\",le=\"1000\"} 1"
    ));
    assert!(text.contains(
        "erratic_http_request_duration_micros_sum{method=\"GET\",route=\"/\"} 700"
    ));
    assert!(text.lines().any(|l| l == "erratic_shutdown_requests_total 1"), "{text}");
}
