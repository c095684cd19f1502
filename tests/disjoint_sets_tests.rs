use graph_toolkit::DisjointSets;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_add_reports_new_elements_only() {
    let mut sets = DisjointSets::new();
    assert!(sets.is_empty());
    assert!(sets.add("Hello"));
    assert!(sets.add("Hi"));
    assert!(!sets.add("Hello"));
    assert_eq!(sets.len(), 2);
    assert_eq!(sets.subset_count(), 2);
}

#[test]
fn test_merged_elements_share_representative_object() {
    let mut sets = DisjointSets::new();
    sets.add("Hello".to_string());
    sets.add("Hi".to_string());
    sets.add("Hola".to_string());

    sets.merge(&"Hello".to_string(), &"Hi".to_string());

    let p1 = sets.find(&"Hello".to_string()).unwrap();
    let p2 = sets.find(&"Hi".to_string()).unwrap();
    let p3 = sets.find(&"Hola".to_string()).unwrap();
    assert!(std::ptr::eq(p1, p2), "same subset must yield the same object");
    assert!(!std::ptr::eq(p1, p3));
}

#[test]
fn test_find_and_merge_on_absent_elements() {
    let mut sets = DisjointSets::new();
    assert_eq!(sets.find(&1), None);
    assert_eq!(sets.merge(&1, &2), None);

    sets.add(1);
    // Only one side present: no insertion, returns the present representative
    assert_eq!(sets.merge(&1, &2), Some(&1));
    assert_eq!(sets.merge(&2, &1), Some(&1));
    assert_eq!(sets.len(), 1);
    assert_eq!(sets.find(&2), None);
}

#[test]
fn test_merge_ties_keep_first_root() {
    let mut sets: DisjointSets<u32> = (0..4).collect();
    assert_eq!(sets.merge(&0, &1), Some(&0));
    assert_eq!(sets.merge(&3, &2), Some(&3));
    // Equal sizes again: the first argument's root wins
    assert_eq!(sets.merge(&2, &1), Some(&3));
    assert_eq!(sets.subset_size(&0), Some(4));
    assert_eq!(sets.subset_count(), 1);
}

#[test]
fn test_smaller_subset_goes_under_larger() {
    let mut sets: DisjointSets<u32> = (0..5).collect();
    sets.merge(&1, &2);
    sets.merge(&1, &3);
    // {1, 2, 3} is larger than {4}, whatever the argument order
    assert_eq!(sets.merge(&4, &3), Some(&1));
    assert_eq!(sets.find(&4), Some(&1));
}

#[test]
fn test_merging_joined_elements_changes_nothing() {
    let mut sets: DisjointSets<u32> = (0..3).collect();
    sets.merge(&0, &1);
    let rep = sets.merge(&1, &0).copied();
    assert_eq!(rep, sets.find(&0).copied());
    assert_eq!(sets.subset_size(&1), Some(2));
    assert_eq!(sets.subset_count(), 2);
}

#[test]
fn test_all_subsets_materializes_partition() {
    let mut sets: DisjointSets<char> = "abcdef".chars().collect();
    sets.merge(&'a', &'c');
    sets.merge(&'d', &'f');
    sets.merge(&'f', &'e');

    let subsets = sets.all_subsets();
    assert_eq!(subsets, vec![vec![&'a', &'c'], vec![&'b'], vec![&'d', &'e', &'f']]);
}

#[test]
fn test_large_chain_of_merges() {
    let n = 100_000u32;
    let mut sets: DisjointSets<u32> = (0..n).collect();
    for i in 1..n {
        sets.merge(&i, &(i - 1));
    }
    assert_eq!(sets.subset_count(), 1);
    assert_eq!(sets.subset_size(&(n - 1)), Some(n as usize));
    assert!(sets.same_subset(&0, &(n - 1)));
}

/// Naive partition tracking: component label per element
fn naive_find(labels: &[usize], x: usize) -> usize {
    labels[x]
}

fn naive_merge(labels: &mut [usize], a: usize, b: usize) {
    let (from, to) = (labels[b], labels[a]);
    for label in labels.iter_mut() {
        if *label == from {
            *label = to;
        }
    }
}

#[test]
fn test_random_merges_match_naive_partition() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..20 {
        let n = 40;
        let mut sets: DisjointSets<usize> = (0..n).collect();
        let mut labels: Vec<usize> = (0..n).collect();

        for _ in 0..30 {
            let a = rng.gen_range(0..n);
            let b = rng.gen_range(0..n);
            sets.merge(&a, &b);
            naive_merge(&mut labels, a, b);
        }

        for x in 0..n {
            for y in 0..n {
                assert_eq!(
                    sets.same_subset(&x, &y),
                    naive_find(&labels, x) == naive_find(&labels, y),
                    "partition mismatch for {} and {}",
                    x,
                    y
                );
            }
            // Size recorded at the representative equals the subset's size
            let expected = labels.iter().filter(|&&l| l == labels[x]).count();
            assert_eq!(sets.subset_size(&x), Some(expected));
        }

        let distinct: std::collections::HashSet<usize> = labels.iter().copied().collect();
        assert_eq!(sets.subset_count(), distinct.len());
        assert_eq!(sets.all_subsets().len(), distinct.len());
    }
}
