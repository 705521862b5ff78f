//! Aggregate statistics over the full dataset.

mod common;

use common::{pool, sample_pools};
use yield_dashboard::services::summarize;

#[test]
fn mixed_nulls_example() {
    let pools = vec![
        pool("first", "x", "Ethereum", "A", Some(5.0)).with_tvl(Some(100.0)),
        pool("second", "x", "Ethereum", "B", None).with_tvl(Some(200.0)),
        pool("third", "x", "Ethereum", "C", Some(10.0)).with_tvl(None),
    ];

    let stats = summarize(&pools);
    assert_eq!(stats.total_tvl, 300.0);
    assert_eq!(stats.average_apy, 7.5);
    assert_eq!(stats.top_apy, 10.0);
    assert_eq!(stats.top_apy_pool.map(|p| p.pool.as_str()), Some("third"));
    assert_eq!(stats.pools_with_apy, 2);
}

#[test]
fn no_apy_values_yields_zeroes() {
    let pools = vec![
        pool("a", "x", "Ethereum", "A", None).with_tvl(Some(50.0)),
        pool("b", "x", "Ethereum", "B", None),
    ];
    let stats = summarize(&pools);
    assert_eq!(stats.total_tvl, 50.0);
    assert_eq!(stats.average_apy, 0.0);
    assert_eq!(stats.top_apy, 0.0);
    assert!(stats.top_apy_pool.is_none());
}

#[test]
fn empty_dataset() {
    let stats = summarize(&[]);
    assert_eq!(stats.total_tvl, 0.0);
    assert_eq!(stats.average_apy, 0.0);
    assert!(stats.top_apy_pool.is_none());
}

#[test]
fn top_apy_tie_goes_to_first_occurrence() {
    // p4 and p8 both report 18.5
    let pools = sample_pools();
    let stats = summarize(&pools);
    assert_eq!(stats.top_apy, 18.5);
    assert_eq!(stats.top_apy_pool.map(|p| p.pool.as_str()), Some("p4"));
}

#[test]
fn negative_apys_are_averaged_and_maxed() {
    let pools = vec![
        pool("a", "x", "Ethereum", "A", Some(-4.0)),
        pool("b", "x", "Ethereum", "B", Some(-1.0)),
    ];
    let stats = summarize(&pools);
    assert_eq!(stats.top_apy, -1.0);
    assert_eq!(stats.average_apy, -2.5);
    assert_eq!(stats.top_apy_pool.map(|p| p.pool.as_str()), Some("b"));
}

#[test]
fn display_strings() {
    let pools = sample_pools();
    let display = summarize(&pools).display();
    assert_eq!(display.total_tvl, "$6,765,000");
    assert_eq!(display.top_apy, "18.50%");
    assert_eq!(display.top_apy_label.as_deref(), Some("gmx - GLP"));
}
