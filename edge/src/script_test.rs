use super::*;

// =============================================================================
// is_fresh
// =============================================================================

#[test]
fn entry_is_fresh_immediately_after_fetch() {
    let now = Instant::now();
    assert!(is_fresh(now, now, SCRIPT_MAX_AGE));
}

#[test]
fn entry_is_fresh_just_before_max_age() {
    let fetched_at = Instant::now();
    let now = fetched_at + SCRIPT_MAX_AGE - Duration::from_secs(1);
    assert!(is_fresh(fetched_at, now, SCRIPT_MAX_AGE));
}

#[test]
fn entry_expires_at_max_age() {
    let fetched_at = Instant::now();
    let now = fetched_at + SCRIPT_MAX_AGE;
    assert!(!is_fresh(fetched_at, now, SCRIPT_MAX_AGE));
}

#[test]
fn entry_is_stale_after_max_age() {
    let fetched_at = Instant::now();
    let now = fetched_at + SCRIPT_MAX_AGE + Duration::from_secs(3600);
    assert!(!is_fresh(fetched_at, now, SCRIPT_MAX_AGE));
}
