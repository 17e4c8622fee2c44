//! Generated checks for the pagination metadata invariants.
//!
//! Triples of `(total, limit, page)` are drawn from a seeded generator so
//! failures reproduce, and a small exhaustive grid covers the boundaries.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use pagination::{MAX_LIMIT, Pagination, PaginationError, total_pages_for};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rstest::rstest;

const SEED: u64 = 0x7a1e_4711;
const SAMPLES: usize = 2_000;

fn assert_invariants(meta: &Pagination) {
    let total = meta.total();
    let limit = u64::from(meta.limit());
    let expected_pages = total.div_ceil(limit);

    assert_eq!(meta.total_pages(), expected_pages, "{meta:?}");
    assert!(meta.page() >= 1, "{meta:?}");
    if total > 0 {
        assert!(u64::from(meta.page()) <= meta.total_pages(), "{meta:?}");
    } else {
        assert_eq!(meta.page(), 1, "{meta:?}");
    }
}

#[test]
fn generated_triples_respect_invariants() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);

    for _ in 0..SAMPLES {
        let total: u64 = rng.random_range(0..=10_000);
        let limit: u32 = rng.random_range(1..=MAX_LIMIT);
        let page: u32 = rng.random_range(1..=250);

        match Pagination::new(page, limit, total) {
            Ok(meta) => assert_invariants(&meta),
            Err(PaginationError::PageOutOfRange { last_page, .. }) => {
                assert!(u64::from(page) > last_page);
                assert_eq!(last_page, total_pages_for(total, limit).max(1));
            }
            Err(other) => panic!("unexpected error for ({total}, {limit}, {page}): {other}"),
        }
    }
}

#[test]
fn generated_metadata_survives_the_wire() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED ^ 0xff);

    for _ in 0..SAMPLES {
        let total: u64 = rng.random_range(0..=5_000);
        let limit: u32 = rng.random_range(1..=MAX_LIMIT);
        let last_page = u32::try_from(total_pages_for(total, limit).max(1))
            .expect("page count fits in u32 for sampled totals");
        let page = rng.random_range(1..=last_page);

        let meta = Pagination::new(page, limit, total).expect("page sampled in range");
        let json = serde_json::to_string(&meta).expect("serialise");
        let decoded: Pagination = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(decoded, meta);
    }
}

#[rstest]
fn boundary_grid_respects_invariants(
    #[values(0, 1, 9, 10, 11, 99, 100, 101)] total: u64,
    #[values(1, 10, 100)] limit: u32,
    #[values(1, 2, 11)] page: u32,
) {
    if let Ok(meta) = Pagination::new(page, limit, total) {
        assert_invariants(&meta);
    }
}
