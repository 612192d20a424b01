use lattice_types::Submission;
use pretty_assertions::assert_eq;

#[test]
fn empty_submission_has_no_values() {
    let sub = Submission::new();
    assert!(sub.is_empty());
    assert_eq!(sub.len(), 0);
    assert_eq!(sub.get("anything"), None);
}

#[test]
fn get_returns_raw_value() {
    let mut sub = Submission::new();
    sub.set("title", "Hello");
    assert_eq!(sub.get("title"), Some("Hello"));
    assert_eq!(sub.get("missing"), None);
}

#[test]
fn get_distinguishes_empty_from_missing() {
    let mut sub = Submission::new();
    sub.set("notes", "");
    assert_eq!(sub.get("notes"), Some(""));
    assert_eq!(sub.get("other"), None);
}

#[test]
fn truthy_folds_falsy_states_together() {
    let mut sub = Submission::new();
    sub.set("a", "");
    sub.set("b", "0");
    sub.set("c", "1");
    sub.set("d", "yes");

    assert_eq!(sub.truthy("a"), None);
    assert_eq!(sub.truthy("b"), None);
    assert_eq!(sub.truthy("missing"), None);
    assert_eq!(sub.truthy("c"), Some("1"));
    assert_eq!(sub.truthy("d"), Some("yes"));
}

#[test]
fn set_replaces_previous_value() {
    let mut sub = Submission::new();
    sub.set("field", "one").set("field", "two");
    assert_eq!(sub.get("field"), Some("two"));
    assert_eq!(sub.len(), 1);
}

#[test]
fn from_iterator_collects_pairs() {
    let sub: Submission = [("name", "color"), ("required", "1")].into_iter().collect();
    assert_eq!(sub.len(), 2);
    assert_eq!(sub.get("name"), Some("color"));
    assert_eq!(sub.truthy("required"), Some("1"));
}
