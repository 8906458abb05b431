//! Shared helpers for the integration tests.

#![allow(dead_code)]

use difference::{Changeset, Difference};
use once_cell::sync::Lazy;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static SUBSCRIBER_INIT: Lazy<()> = Lazy::new(|| {
    let filter = std::env::var("TREE_SNAPSHOT_LOG")
        .ok()
        .and_then(|s| s.parse::<Targets>().ok())
        .unwrap_or_else(|| Targets::new().with_default(LevelFilter::WARN));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_test_writer()
                .with_target(false)
                .compact(),
        )
        .with(filter)
        .try_init()
        .ok();
});

/// Installs the test subscriber once per process.
pub fn setup() {
    Lazy::force(&SUBSCRIBER_INIT);
}

/// A root block as `to_snapshot` pads it: `body` gets a leading newline.
/// `body` is expected to end with its own trailing newline (as `indoc!`
/// literals closed on their own line do).
pub fn block(body: &str) -> String {
    format!("\n{}", body)
}

/// Asserts equality, printing a line diff of the two snapshots on failure.
pub fn assert_snapshot_eq(actual: &str, expected: &str) {
    if actual == expected {
        return;
    }
    let changeset = Changeset::new(expected, actual, "\n");
    let mut report = String::new();
    for diff in &changeset.diffs {
        match diff {
            Difference::Same(x) => push_lines(&mut report, ' ', x),
            Difference::Add(x) => push_lines(&mut report, '+', x),
            Difference::Rem(x) => push_lines(&mut report, '-', x),
        }
    }
    panic!(
        "snapshot mismatch (- expected, + actual):\n{}\nactual: {:?}",
        report, actual
    );
}

fn push_lines(report: &mut String, marker: char, text: &str) {
    for line in text.split('\n') {
        report.push(marker);
        report.push_str(line);
        report.push('\n');
    }
}
