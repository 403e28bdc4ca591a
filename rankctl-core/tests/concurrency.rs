//! Contention tests: the bucket invariant must hold while readers and
//! writers share one index.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rankctl_core::{Participant, RankIndex};

const THREADS: usize = 8;
const PER_THREAD: usize = 250;

#[test]
fn concurrent_inserts_then_ranks() {
    let index = Arc::new(RankIndex::new());

    let writers: Vec<_> = (0..THREADS)
        .map(|t| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(t as u64);
                for i in 0..PER_THREAD {
                    let name = format!("t{}_{}", t, i);
                    let rating = rng.gen_range(100..=5000);
                    index
                        .insert(Participant::new(format!("id_{}", name), name, rating))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in writers {
        handle.join().unwrap();
    }

    assert_eq!(index.count(), THREADS * PER_THREAD);
    assert_eq!(index.all_names().len(), THREADS * PER_THREAD);

    let readers: Vec<_> = (0..THREADS)
        .map(|t| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    let name = format!("t{}_{}", t, i);
                    let entry = index.get_rank(&name).unwrap();
                    assert_eq!(index.buckets_containing(&name), vec![entry.rating]);
                }
            })
        })
        .collect();
    for handle in readers {
        handle.join().unwrap();
    }

    let listing = index.list_range(0, usize::MAX);
    let unique: BTreeSet<_> = listing.iter().map(|e| e.username.as_str()).collect();
    assert_eq!(listing.len(), THREADS * PER_THREAD);
    assert_eq!(unique.len(), listing.len());
}

#[test]
fn readers_never_see_partial_moves() {
    let index = Arc::new(RankIndex::new());
    let population = 200;
    for i in 0..population {
        index
            .insert(Participant::new(format!("id_{}", i), format!("p{}", i), 1000))
            .unwrap();
    }

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(100 + t);
                for _ in 0..2_000 {
                    let name = format!("p{}", rng.gen_range(0..population));
                    index
                        .update_rating(&name, rng.gen_range(100..=5000))
                        .unwrap();
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                for _ in 0..200 {
                    let listing = index.list_range(0, usize::MAX);
                    assert_eq!(listing.len(), population);

                    let unique: BTreeSet<_> =
                        listing.iter().map(|e| e.username.clone()).collect();
                    assert_eq!(unique.len(), population);

                    assert!(listing.windows(2).all(|w| {
                        w[0].rating > w[1].rating
                            || (w[0].rating == w[1].rating && w[0].username < w[1].username)
                    }));
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.join().unwrap();
    }

    for i in 0..population {
        let name = format!("p{}", i);
        assert_eq!(index.buckets_containing(&name).len(), 1);
    }
}

#[test]
fn concurrent_duplicate_inserts_admit_one() {
    let index = Arc::new(RankIndex::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                index
                    .insert(Participant::new(format!("id_{}", t), "contested", 1000 + t as i32))
                    .is_ok()
            })
        })
        .collect();

    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();

    assert_eq!(winners, 1);
    assert_eq!(index.count(), 1);
    assert_eq!(index.buckets_containing("contested").len(), 1);
}

#[test]
fn ranked_update_reports_its_own_rating() {
    let index = Arc::new(RankIndex::new());
    index
        .insert(Participant::new("id_shared", "shared", 1000))
        .unwrap();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                let rating = 200 + t as i32 * 100;
                for _ in 0..500 {
                    let entry = index.update_rating_ranked("shared", rating).unwrap();
                    assert_eq!(entry.rating, rating);
                    assert_eq!(entry.rank, 1);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(index.buckets_containing("shared").len(), 1);
}
