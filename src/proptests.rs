use super::*;

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use std::collections::{BTreeMap, VecDeque};
use std::io::Cursor;

/// Reference bucket built on std collections. The chain is a deque whose
/// front is the chain head.
#[derive(Default)]
struct ModelBucket {
    inline: Vec<(String, String)>,
    chain: VecDeque<(String, String)>,
}

struct Model {
    buckets: Vec<ModelBucket>,
    capacity: usize,
}

impl Model {
    fn new(count: usize, capacity: usize) -> Self {
        Self {
            buckets: (0..count).map(|_| ModelBucket::default()).collect(),
            capacity,
        }
    }

    fn bucket(&mut self, key: &str) -> &mut ModelBucket {
        let idx = (djb2(key.as_bytes()) % self.buckets.len() as u64) as usize;
        &mut self.buckets[idx]
    }

    fn insert(&mut self, key: String, value: String) {
        let capacity = self.capacity;
        let b = self.bucket(&key);
        if b.inline.len() < capacity {
            b.inline.push((key, value));
        } else {
            b.chain.push_front((key, value));
        }
    }

    fn get(&mut self, key: &str) -> Option<String> {
        let b = self.bucket(key);
        b.inline
            .iter()
            .chain(b.chain.iter())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        let b = self.bucket(key);
        if let Some(i) = b.inline.iter().position(|(k, _)| k == key) {
            return Some(b.inline.remove(i).1);
        }
        let i = b.chain.iter().position(|(k, _)| k == key)?;
        b.chain.remove(i).map(|(_, v)| v)
    }

    fn layout(&self) -> Vec<Vec<(String, String, bool)>> {
        self.buckets
            .iter()
            .map(|b| {
                b.inline
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone(), false))
                    .chain(b.chain.iter().map(|(k, v)| (k.clone(), v.clone(), true)))
                    .collect()
            })
            .collect()
    }
}

fn layout(t: &Table) -> Vec<Vec<(String, String, bool)>> {
    t.display()
        .map(|(_, slots)| {
            slots
                .map(|s| (s.key.to_string(), s.value.to_string(), s.overflow))
                .collect()
        })
        .collect()
}

fn validate_table(t: &Table) {
    let mut total = 0usize;
    for i in 0..t.bucket_count() {
        let b = t.bucket(i).unwrap();
        assert!(
            b.inline_len() <= b.capacity(),
            "inline entries exceed capacity in bucket {i}"
        );
        assert_eq!(b.display().count(), b.len(), "bucket {i} length mismatch");
        for slot in b.display() {
            assert_eq!(t.hash(slot.key), i, "key {:?} stored in wrong bucket", slot.key);
        }
        total += b.len();
    }
    assert_eq!(total, t.len(), "bucket lengths must sum to Table::len");
}

// A tiny alphabet keeps collisions and duplicate keys frequent.
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-d]{0,3}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[0-9]{0,2}"
}

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    #[proptest(weight = 5)]
    Insert(
        #[proptest(strategy = "key_strategy()")] String,
        #[proptest(strategy = "value_strategy()")] String,
    ),
    #[proptest(weight = 3)]
    Remove(#[proptest(strategy = "key_strategy()")] String),
    #[proptest(weight = 2)]
    Get(#[proptest(strategy = "key_strategy()")] String),
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 50_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_matches_model(
        count in 1usize..=5,
        capacity in 1usize..=3,
        ops in prop::collection::vec(any::<Op>(), 0..=300),
    ) {
        let mut t = Table::new(count, capacity).unwrap();
        let mut m = Model::new(count, capacity);

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    t.insert(key.as_str(), value.as_str());
                    m.insert(key, value);
                }
                Op::Remove(key) => {
                    prop_assert_eq!(t.remove(&key), m.remove(&key));
                    prop_assert_eq!(t.get(&key).map(str::to_string), m.get(&key));
                }
                Op::Get(key) => {
                    prop_assert_eq!(t.get(&key).map(str::to_string), m.get(&key));
                }
            }
        }

        validate_table(&t);
        prop_assert_eq!(layout(&t), m.layout());
    }

    #[test]
    fn prop_hash_is_stable(key in ".{0,32}", count in 1usize..=64) {
        let t = Table::new(count, 1).unwrap();
        let idx = t.hash(&key);
        prop_assert!(idx < count);
        prop_assert_eq!(idx, t.hash(&key));
    }

    #[test]
    fn prop_load_round_trip(
        entries in prop::collection::btree_map("[a-z0-9]{1,8}", "[ -~]{1,12}", 1..=64),
    ) {
        let csv: String = entries
            .iter()
            .map(|(k, v)| format!("{k},{v}\n"))
            .collect();

        // One bucket forces long chains, N buckets leaves most sparse.
        for count in [1, entries.len()] {
            let mut t = Table::new(count, 2).unwrap();
            let report = load_reader(Cursor::new(csv.as_bytes()), &mut t).unwrap();
            prop_assert_eq!(report.loaded, entries.len());
            prop_assert_eq!(report.skipped, 0);
            for (k, v) in &entries {
                prop_assert_eq!(t.get(k), Some(v.as_str()));
            }
            validate_table(&t);
        }
    }
}

#[test]
fn remove_everything_in_any_order() {
    let keys = ["a", "b", "c", "d", "e", "f"];
    let mut base = Table::new(2, 2).unwrap();
    for (i, k) in keys.iter().enumerate() {
        base.insert(*k, i.to_string());
    }

    let mut orders: Vec<Vec<&str>> = Vec::new();
    for rot in 0..keys.len() {
        let mut order = keys.to_vec();
        order.rotate_left(rot);
        orders.push(order.clone());
        order.reverse();
        orders.push(order);
    }

    for order in orders {
        let mut t = base.clone();
        let mut live: BTreeMap<&str, String> = keys
            .iter()
            .enumerate()
            .map(|(i, k)| (*k, i.to_string()))
            .collect();
        for k in order {
            assert_eq!(t.remove(k), live.remove(k));
            validate_table(&t);
            for (lk, lv) in &live {
                assert_eq!(t.get(lk), Some(lv.as_str()));
            }
        }
        assert!(t.is_empty());
    }
}

#[test]
fn random_stress_against_model() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut t = Table::new(7, 2).unwrap();
    let mut m = Model::new(7, 2);

    for _ in 0..20_000 {
        let key = format!("k{}", rng.gen_range(0..200));
        match rng.gen_range(0..10) {
            0..=4 => {
                let value = rng.gen::<u32>().to_string();
                t.insert(key.as_str(), value.as_str());
                m.insert(key, value);
            }
            5..=7 => assert_eq!(t.remove(&key), m.remove(&key)),
            _ => assert_eq!(t.get(&key).map(str::to_string), m.get(&key)),
        }
    }

    validate_table(&t);
    assert_eq!(layout(&t), m.layout());
}
