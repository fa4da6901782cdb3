use super::*;

#[test]
fn test_ranking_is_permutation() {
    let scores = vec![0.9, 0.1, 0.5, 2.0, 0.3];
    let order = run_stage3(&scores);
    assert_eq!(order, vec![1, 4, 2, 0, 3]);

    let mut seen = order.clone();
    seen.sort_unstable();
    assert_eq!(seen, (0..scores.len()).collect::<Vec<_>>());
}

#[test]
fn test_ranked_scores_non_decreasing() {
    let scores = vec![3.2, 0.0, 1.1, 1.1, 0.4, 7.5, 0.4];
    let order = run_stage3(&scores);
    for pair in order.windows(2) {
        assert!(scores[pair[0]] <= scores[pair[1]]);
    }
}

#[test]
fn test_ties_keep_box_order() {
    let scores = vec![1.0, 0.5, 1.0, 0.5, 1.0];
    assert_eq!(run_stage3(&scores), vec![1, 3, 0, 2, 4]);
}

#[test]
fn test_nan_sorts_last() {
    let scores = vec![f64::NAN, 0.2, f64::NAN, 0.1];
    assert_eq!(run_stage3(&scores), vec![3, 1, 0, 2]);
}

#[test]
fn test_empty_scores() {
    assert!(run_stage3(&[]).is_empty());
}
