use flicker::exec::{FINISHED_MARKER, Observation, OutputScan, READY_MARKER};
use proptest::prelude::*;

#[test]
fn ready_marker_is_observed_exactly_once() {
    let mut scan = OutputScan::new();

    assert_eq!(scan.observe("Launching lib/main.dart on Chrome..."), None);
    assert_eq!(
        scan.observe("To hot reload changes while running, press \"r\"."),
        Some(Observation::Ready)
    );

    // The marker recurring later (e.g. after a hot restart banner) must not
    // start a second attach session.
    assert_eq!(
        scan.observe("To hot reload changes while running, press \"r\"."),
        None
    );
    assert!(!scan.is_finalizing());
}

#[test]
fn finished_marker_transitions_to_finalizing() {
    let mut scan = OutputScan::new();

    assert_eq!(
        scan.observe("Application finished."),
        Some(Observation::Finished)
    );
    assert!(scan.is_finalizing());

    // No further lines are observed, markers included.
    assert_eq!(scan.observe("Application finished."), None);
    assert_eq!(scan.observe("To hot reload changes, press \"r\"."), None);
}

#[test]
fn ready_after_finished_is_not_observed() {
    let mut scan = OutputScan::new();

    assert_eq!(
        scan.observe("Application finished."),
        Some(Observation::Finished)
    );
    assert_eq!(scan.observe("To hot reload changes, press \"r\"."), None);
}

#[test]
fn finished_wins_when_both_markers_share_a_line() {
    let mut scan = OutputScan::new();

    assert_eq!(
        scan.observe("To hot reload... Application finished."),
        Some(Observation::Finished)
    );
    assert!(scan.is_finalizing());
}

#[test]
fn marker_match_is_case_sensitive() {
    let mut scan = OutputScan::new();

    assert_eq!(scan.observe("to hot reload changes, press \"r\"."), None);
    assert_eq!(scan.observe("APPLICATION FINISHED."), None);
    assert!(!scan.is_finalizing());
}

#[test]
fn marker_is_matched_as_a_substring() {
    let mut scan = OutputScan::new();

    assert_eq!(
        scan.observe("prefix To hot reload suffix"),
        Some(Observation::Ready)
    );
    assert_eq!(
        scan.observe("prefix Application finished. suffix"),
        Some(Observation::Finished)
    );
}

proptest! {
    #[test]
    fn marker_free_lines_are_never_observed(
        lines in proptest::collection::vec("[a-zA-Z0-9 .!\"']{0,40}", 0..50)
    ) {
        let mut scan = OutputScan::new();
        for line in &lines {
            if line.contains(READY_MARKER) || line.contains(FINISHED_MARKER) {
                continue;
            }
            prop_assert_eq!(scan.observe(line), None);
        }
    }
}
