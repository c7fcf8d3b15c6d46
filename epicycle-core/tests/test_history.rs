use epicycle_core::history::{WaveHistory, HISTORY_CAPACITY};

#[test]
fn capacity_is_two_hundred() {
    assert_eq!(HISTORY_CAPACITY, 200);
    assert_eq!(WaveHistory::new().capacity(), 200);
}

#[test]
fn append_250_keeps_last_200() {
    let mut h = WaveHistory::new();
    for i in 0..250 {
        h.append(i as f64);
    }
    assert_eq!(h.len(), 200);
    let recent: Vec<f64> = h.recent(200).collect();
    assert_eq!(recent.len(), 200);
    assert_eq!(recent[0], 249.0);
    assert_eq!(recent[199], 50.0);
}

#[test]
fn recent_length_is_min_of_limit_and_size() {
    let mut h = WaveHistory::new();
    assert_eq!(h.recent(10).count(), 0);
    for i in 0..5 {
        h.append(i as f64);
    }
    assert_eq!(h.recent(3).count(), 3);
    assert_eq!(h.recent(200).count(), 5);
    assert_eq!(h.recent(0).count(), 0);
}

#[test]
fn recent_is_restartable() {
    let mut h = WaveHistory::new();
    for v in [0.5, -1.0, 2.5] {
        h.append(v);
    }
    let first: Vec<f64> = h.recent(3).collect();
    let second: Vec<f64> = h.recent(3).collect();
    assert_eq!(first, second);
    assert_eq!(first, vec![2.5, -1.0, 0.5]);
    assert_eq!(h.len(), 3);
}
