//! Integration tests for the corruption properties of the typo generator.

use typogen::corrupt::{CorruptionOperation, OperationWeights, TypoGenerator, TypoPolicy};

fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for i in 1..=a.len() {
        let mut prev = row[0];
        row[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            let next = (row[j] + 1).min(row[j - 1] + 1).min(prev + cost);
            prev = row[j];
            row[j] = next;
        }
    }
    row[b.len()]
}

#[test]
fn test_zero_probability_returns_input_unchanged() {
    let policy = TypoPolicy::default().with_probability(0.0);
    let mut generator = TypoGenerator::new(policy).unwrap();

    for query in [
        "what is the capital of france",
        "pizza",
        "café crème brûlée",
        "a",
        "",
    ] {
        assert_eq!(generator.corrupt(query), query);
    }
}

#[test]
fn test_probability_one_applies_exactly_one_local_edit() {
    let policy = TypoPolicy::default().with_probability(1.0).with_seed(17);
    let mut generator = TypoGenerator::new(policy).unwrap();

    for _ in 0..300 {
        let query = "how many calories in a banana";
        let corrupted = generator.corrupt(query);
        assert_ne!(corrupted, query);

        let delta = corrupted.chars().count() as i64 - query.chars().count() as i64;
        assert!((-1..=1).contains(&delta), "length delta {delta} out of range");

        // One insertion, deletion, or substitution is edit distance 1; one
        // adjacent transposition is edit distance 2 under plain Levenshtein.
        let distance = edit_distance(query, &corrupted);
        assert!(distance <= 2, "more than one local edit: {corrupted:?}");
    }
}

#[test]
fn test_deterministic_given_seed() {
    let queries = [
        "who invented the telephone",
        "distance from earth to moon",
        "best sci fi novels",
        "symptoms of the flu",
    ];

    let policy = TypoPolicy::default().with_probability(1.0).with_seed(2024);
    let mut first = TypoGenerator::new(policy.clone()).unwrap();
    let mut second = TypoGenerator::new(policy).unwrap();

    for query in queries {
        assert_eq!(first.corrupt(query), second.corrupt(query));
    }
}

#[test]
fn test_short_query_falls_back_instead_of_failing() {
    // Length-1 queries make several operations invalid; the generator must
    // fall back, never panic.
    let policy = TypoPolicy::default()
        .with_probability(1.0)
        .with_min_word_length(1);
    let mut generator = TypoGenerator::new(policy).unwrap();

    for _ in 0..100 {
        let corrupted = generator.corrupt("q");
        let delta = corrupted.chars().count() as i64 - 1;
        assert!((-1..=1).contains(&delta));
    }
}

#[test]
fn test_length_invariants_per_operation() {
    let cases: [(CorruptionOperation, i64); 5] = [
        (CorruptionOperation::Insert { index: 2, ch: 'x' }, 1),
        (CorruptionOperation::Delete { index: 2 }, -1),
        (CorruptionOperation::Substitute { index: 2, ch: 'x' }, 0),
        (CorruptionOperation::KeyboardSubstitute { index: 2, ch: 'x' }, 0),
        (CorruptionOperation::Transpose { index: 2 }, 0),
    ];

    for (op, expected_delta) in cases {
        let out = op.apply("corruption");
        let delta = out.chars().count() as i64 - 10;
        assert_eq!(delta, expected_delta, "wrong delta for {op:?}");
    }
}

#[test]
fn test_forced_deletion_scenario() {
    // query = "pizza", deletion at position 0 -> "izza"
    let op = CorruptionOperation::Delete { index: 0 };
    assert_eq!(op.apply("pizza"), "izza");
}

#[test]
fn test_forced_transposition_scenario() {
    // Transposition index i swaps the characters at i and i+1, so index 1
    // on "pizza" swaps 'i' and 'z'.
    let op = CorruptionOperation::Transpose { index: 1 };
    assert_eq!(op.apply("pizza"), "pziza");
}

#[test]
fn test_transposition_only_policy_on_repeated_characters() {
    let mut policy = TypoPolicy::default().with_probability(1.0);
    policy.weights = OperationWeights {
        insertion: 0.0,
        deletion: 0.0,
        substitution: 0.0,
        keyboard_substitution: 0.0,
        transposition: 1.0,
    };
    let mut generator = TypoGenerator::new(policy).unwrap();

    // Every adjacent pair in "aaa" is equal; the fallback substitution must
    // still change the query rather than silently no-op or crash.
    for _ in 0..50 {
        assert_ne!(generator.corrupt("aaa"), "aaa");
    }
}

#[test]
fn test_configuration_errors_are_fatal_at_construction() {
    assert!(TypoGenerator::new(TypoPolicy::default().with_probability(-0.5)).is_err());

    let mut policy = TypoPolicy::default();
    policy.weights.transposition = -2.0;
    assert!(TypoGenerator::new(policy).is_err());
}
