use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use sorted_list::{factory, Error, InvalidKind, Kind, Scalar, SortedList};

fn is_non_decreasing(values: &[Scalar]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

fn random_word(rng: &mut SmallRng) -> String {
    let len = rng.gen_range(0..6);
    (0..len)
        .map(|_| char::from(rng.gen_range(b'A'..=b'z')))
        .collect()
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn random_integers_stay_sorted() {
    let mut rng = SmallRng::seed_from_u64(12345);

    for _ in 0..50 {
        let mut list = SortedList::new();
        let mut inserted = Vec::new();

        for _ in 0..rng.gen_range(0..64) {
            let v: i64 = rng.gen_range(-20..20);
            list.insert(v).unwrap();
            inserted.push(v);
            assert!(is_non_decreasing(&list.to_vec()));
        }

        inserted.sort();
        let expected: Vec<_> = inserted.into_iter().map(Scalar::from).collect();
        assert_eq!(list.to_vec(), expected);
    }
}

#[test]
fn random_text_stays_sorted() {
    let mut rng = SmallRng::seed_from_u64(777);

    for _ in 0..50 {
        let words: Vec<String> = (0..rng.gen_range(0..40))
            .map(|_| random_word(&mut rng))
            .collect();

        let list = factory::from_values(words.iter()).unwrap();

        let mut sorted = words.clone();
        sorted.sort();
        let expected: Vec<_> = sorted.into_iter().map(Scalar::from).collect();
        assert_eq!(list.to_vec(), expected);
        assert!(is_non_decreasing(&list.to_vec()));
    }
}

// =============================================================================
// Count bookkeeping
// =============================================================================

#[test]
fn len_tracks_inserts_minus_removals() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut list = factory::for_integers();
    let mut expected_len = 0usize;

    for _ in 0..2_000 {
        let v: i64 = rng.gen_range(0..30);
        match rng.gen_range(0..4) {
            0 | 1 => {
                list.insert(v).unwrap();
                expected_len += 1;
            }
            2 => {
                if list.remove(v) {
                    expected_len -= 1;
                }
            }
            _ => match list.remove_first() {
                Ok(_) => expected_len -= 1,
                Err(err) => {
                    assert!(err.is_empty_sequence());
                    assert_eq!(expected_len, 0);
                }
            },
        }

        assert_eq!(list.len(), expected_len);
        assert_eq!(list.iter().count(), expected_len);
        assert_eq!(list.is_empty(), expected_len == 0);
    }
}

#[test]
fn lookups_agree_with_full_scan() {
    let mut rng = SmallRng::seed_from_u64(9);
    let values: Vec<i64> = (0..100).map(|_| rng.gen_range(0..50)).collect();
    let list = factory::from_values(values.iter().copied()).unwrap();
    let snapshot = list.to_vec();

    for probe in -5..55_i64 {
        let position = snapshot.iter().position(|v| *v == Scalar::from(probe));
        assert_eq!(list.index_of(probe), position, "probe {probe}");
        assert_eq!(list.contains(probe), position.is_some(), "probe {probe}");
    }
}

#[test]
fn get_matches_to_vec() {
    let list = factory::from_values([9, 4, 7, 1, 4]).unwrap();
    let snapshot = list.to_vec();

    for (i, expected) in snapshot.iter().enumerate() {
        assert_eq!(list.get(i).unwrap(), expected);
    }
    assert_eq!(
        list.get(list.len()),
        Err(Error::IndexOutOfRange { index: 5, len: 5 })
    );
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn pi_digits_scenario() {
    let mut list = SortedList::new();
    for v in [3, 1, 4, 1, 5] {
        list.insert(v).unwrap();
    }

    assert_eq!(list.to_string(), "[1, 1, 3, 4, 5]");
    assert_eq!(list.len(), 5);

    assert_eq!(list.remove_first().unwrap(), Scalar::from(1));
    assert_eq!(list.to_string(), "[1, 3, 4, 5]");
    assert!(list.contains(4));
    assert!(!list.contains(2));
    assert_eq!(list.index_of(4), Some(2));
}

#[test]
fn text_hint_rejects_integer() {
    let mut list = SortedList::with_kind_name("text").unwrap();
    assert_eq!(
        list.insert(7).unwrap_err(),
        Error::InvalidKind(InvalidKind::Mixed {
            locked: Kind::Text,
            given: Kind::Integer,
        })
    );
    assert!(list.is_empty());
}

#[test]
fn mixed_insert_leaves_list_unchanged() {
    let mut list = factory::for_integers();
    list.try_extend([5, 3, 5, 1]).unwrap();
    let before = list.to_vec();

    assert!(list.insert("a").is_err());
    assert_eq!(list.len(), 4);
    assert_eq!(list.to_vec(), before);
    assert_eq!(list.to_string(), "[1, 3, 5, 5]");
}

#[test]
fn drained_list_guards() {
    let mut list = factory::from_values(["x", "y"]).unwrap();
    list.remove_first().unwrap();
    list.remove_first().unwrap();

    assert_eq!(list.first(), Err(Error::EmptySequence { op: "first" }));
    assert_eq!(list.last(), Err(Error::EmptySequence { op: "last" }));
    assert_eq!(
        list.remove_first(),
        Err(Error::EmptySequence { op: "first" })
    );
    assert_eq!(
        list.get(0),
        Err(Error::IndexOutOfRange { index: 0, len: 0 })
    );
}

#[test]
fn independent_instances_hold_different_kinds() {
    let ints = factory::from_values([2, 1]).unwrap();
    let words = factory::from_values(["b", "a"]).unwrap();
    assert_eq!(ints.kind(), Some(Kind::Integer));
    assert_eq!(words.kind(), Some(Kind::Text));
}
