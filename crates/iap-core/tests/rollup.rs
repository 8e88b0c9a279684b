// File: crates/iap-core/tests/rollup.rs
// Purpose: Validate group-by-sum rollups, the missing-key policy, and nested lookups.

use iap_core::record::{non_blank, Gender, Record, SpendingSegment};
use iap_core::{nested_value, outer_total, rollup_sum, rollup_sum2};

fn rec(age: i32, amount: f64, genre: &str, gender: Gender, segment: SpendingSegment) -> Record {
    Record {
        age,
        purchase_amount: amount,
        genre: genre.to_string(),
        gender,
        segment,
        session_count: 1,
    }
}

#[test]
fn genre_gender_rollup_end_to_end() {
    let rows = vec![
        rec(25, 10.0, "RPG", Gender::Male, SpendingSegment::Whale),
        rec(31, 5.0, "RPG", Gender::Female, SpendingSegment::Dolphin),
    ];

    let totals = rollup_sum2(
        &rows,
        |r| non_blank(&r.genre).map(str::to_string),
        |r| Some(r.gender),
        |r| r.purchase_amount,
    );

    assert_eq!(totals.len(), 1);
    let rpg = "RPG".to_string();
    assert_eq!(nested_value(&totals, &rpg, &Gender::Male), 10.0);
    assert_eq!(nested_value(&totals, &rpg, &Gender::Female), 5.0);
}

#[test]
fn nested_sums_match_single_keyed_totals() {
    let rows = vec![
        rec(20, 3.0, "RPG", Gender::Male, SpendingSegment::Whale),
        rec(21, 7.5, "RPG", Gender::Female, SpendingSegment::Minnow),
        rec(22, 1.25, "RPG", Gender::Other, SpendingSegment::Dolphin),
        rec(23, 4.0, "Puzzle", Gender::Male, SpendingSegment::Whale),
    ];

    let nested = rollup_sum2(
        &rows,
        |r| non_blank(&r.genre).map(str::to_string),
        |r| Some(r.segment),
        |r| r.purchase_amount,
    );
    let flat = rollup_sum(
        &rows,
        |r| non_blank(&r.genre).map(str::to_string),
        |r| r.purchase_amount,
    );

    for (genre, total) in &flat {
        let inner: f64 = outer_total(&nested, genre);
        assert!((inner - total).abs() < 1e-9, "mismatch for {genre}: {inner} vs {total}");
    }
}

#[test]
fn blank_and_null_keys_are_excluded() {
    let rows = vec![
        rec(20, 1.0, "", Gender::Male, SpendingSegment::Whale),
        rec(21, 2.0, "   ", Gender::Male, SpendingSegment::Whale),
        rec(22, 4.0, "null", Gender::Male, SpendingSegment::Whale),
        rec(23, 8.0, "RPG", Gender::Male, SpendingSegment::Whale),
    ];

    let totals = rollup_sum(
        &rows,
        |r| non_blank(&r.genre).map(str::to_string),
        |r| r.purchase_amount,
    );

    assert_eq!(totals.len(), 1);
    assert_eq!(totals.get("RPG").copied(), Some(8.0));
}

#[test]
fn missing_inner_combination_reads_as_zero() {
    let rows = vec![rec(20, 6.0, "RPG", Gender::Male, SpendingSegment::Whale)];

    let totals = rollup_sum2(
        &rows,
        |r| non_blank(&r.genre).map(str::to_string),
        |r| Some(r.segment),
        |r| r.purchase_amount,
    );

    let rpg = "RPG".to_string();
    assert_eq!(nested_value(&totals, &rpg, &SpendingSegment::Minnow), 0.0);
    assert_eq!(nested_value(&totals, &"Racing".to_string(), &SpendingSegment::Whale), 0.0);
}

#[test]
fn keys_come_back_sorted() {
    let rows = vec![
        rec(20, 1.0, "Strategy", Gender::Male, SpendingSegment::Whale),
        rec(21, 1.0, "Action", Gender::Male, SpendingSegment::Whale),
        rec(22, 1.0, "Puzzle", Gender::Male, SpendingSegment::Whale),
    ];

    let totals = rollup_sum(
        &rows,
        |r| non_blank(&r.genre).map(str::to_string),
        |r| r.purchase_amount,
    );

    let keys: Vec<&str> = totals.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Action", "Puzzle", "Strategy"]);
}
