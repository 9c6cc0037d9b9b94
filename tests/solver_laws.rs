use matetb::arena::{parent_score, NodeIndex, VALUE_MATE, VALUE_NONE};
use matetb::config::Options;
use matetb::tb::MateTb;

fn solved(epd: &str, depth: u32) -> MateTb {
    let mut tb = MateTb::new(&Options {
        epd: epd.to_string(),
        depth,
        concurrency: 4,
        exclude_allowing_capture: true,
        exclude_allowing_moves: "h2h1q".to_string(),
        ..Options::default()
    })
    .unwrap();
    tb.create();
    tb
}

#[test]
fn the_store_is_a_bijection_onto_the_index_range() {
    let tb = solved("8/8/7p/5K1k/R7/8/8/8 w - -", 5);
    assert!(tb.len() > 1);

    let mut seen = vec![false; tb.len()];
    let mut keys = Vec::new();
    tb.for_each_entry(|key, index| {
        assert!((index as usize) < seen.len());
        assert!(!seen[index as usize], "index {index} assigned twice");
        seen[index as usize] = true;
        keys.push(*key);
    });
    assert!(seen.iter().all(|&s| s), "every index is assigned");

    keys.sort_unstable_by_key(|k| k.0);
    keys.dedup();
    assert_eq!(keys.len(), tb.len(), "every key is distinct");
}

#[test]
fn terminal_mates_have_no_children_and_other_scores_are_bounded() {
    let tb = solved("8/8/7p/5K1k/R7/8/8/8 w - -", 7);
    for index in 0..tb.len() as NodeIndex {
        let score = tb.score(index);
        if score == -VALUE_MATE {
            assert!(tb.children(index).is_empty());
        } else {
            assert!(score.abs() < VALUE_MATE);
            assert_ne!(score, VALUE_NONE);
        }
    }
}

#[test]
fn children_stay_inside_the_index_range() {
    let tb = solved("8/8/7p/5K1k/R7/8/8/8 w - -", 5);
    let len = tb.len() as NodeIndex;
    for index in 0..len {
        for &child in tb.children(index) {
            assert!(child < len);
        }
    }
}

#[test]
fn solved_scores_are_the_fixed_point_of_the_relaxation() {
    let tb = solved("8/8/7p/5K1k/R7/8/8/8 w - -", 7);
    for index in 0..tb.len() as NodeIndex {
        let children = tb.children(index);
        if children.is_empty() {
            continue;
        }
        let best = children
            .iter()
            .map(|&child| parent_score(tb.score(child)))
            .max()
            .expect("at least one child");
        assert_eq!(
            tb.score(index),
            best,
            "node {index} is not locally optimal"
        );
    }
}
