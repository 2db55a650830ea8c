use calisel::SamplingMode;
use std::collections::HashSet;

fn entries(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("/cali/{:03}.npy", i)).collect()
}

#[test]
fn test_prefix_law() {
    let raw = entries(10);
    for num in 1..10 {
        assert_eq!(SamplingMode::Prefix.apply(raw.clone(), num), raw[..num].to_vec());
    }
}

#[test]
fn test_shuffle_keeps_distinct_members() {
    let raw = entries(100);
    let picked = SamplingMode::Shuffle { seed: 2024 }.apply(raw.clone(), 30);

    assert_eq!(picked.len(), 30);
    let unique: HashSet<_> = picked.iter().collect();
    assert_eq!(unique.len(), 30);
    assert!(picked.iter().all(|p| raw.contains(p)));
}

#[test]
fn test_shuffle_seed_changes_selection() {
    let raw = entries(100);
    let a = SamplingMode::Shuffle { seed: 1 }.apply(raw.clone(), 20);
    let b = SamplingMode::Shuffle { seed: 2 }.apply(raw, 20);
    assert_ne!(a, b);
}
