use super::*;

#[test]
fn test_issue_increments_sequence() {
    let mut sequencer = RequestSequencer::new();

    let first = sequencer.issue("AP".to_string());
    let second = sequencer.issue("APL".to_string());

    assert!(second.sequence() > first.sequence());
    assert_eq!(first.text(), "AP");
    assert_eq!(second.text(), "APL");
}

#[test]
fn test_only_latest_is_current() {
    let mut sequencer = RequestSequencer::new();

    let first = sequencer.issue("AP".to_string());
    let second = sequencer.issue("APL".to_string());

    assert!(!sequencer.is_current(first.sequence()));
    assert!(sequencer.is_current(second.sequence()));
    assert_eq!(sequencer.current(), Some(second.sequence()));
}

#[test]
fn test_retire_makes_everything_stale() {
    let mut sequencer = RequestSequencer::new();
    let query = sequencer.issue("AP".to_string());

    assert_eq!(sequencer.retire(), Some(query.sequence()));

    assert!(!sequencer.is_current(query.sequence()));
    assert_eq!(sequencer.current(), None);
    assert_eq!(sequencer.last_issued(), Some(query.sequence()));
}

#[test]
fn test_numbers_are_not_reused_after_retire() {
    let mut sequencer = RequestSequencer::new();
    let before = sequencer.issue("AP".to_string());
    sequencer.retire();

    let after = sequencer.issue("AP".to_string());

    assert!(after.sequence() > before.sequence());
}

#[test]
fn test_last_issued_empty_sequencer() {
    let sequencer = RequestSequencer::new();

    assert_eq!(sequencer.last_issued(), None);
    assert_eq!(sequencer.current(), None);
}
