//! Filter / sort / paginate pipeline behavior.

mod common;

use common::{ids, numbered_pools, pool, sample_pools};
use yield_dashboard::models::{Pool, QueryState, SortColumn, SortDirection};
use yield_dashboard::services::{facets, PoolPipeline};

fn pipeline() -> PoolPipeline {
    PoolPipeline::new(10)
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[test]
fn empty_query_keeps_everything() {
    let pools = sample_pools();
    let page = pipeline().apply(&pools, &QueryState::default());
    assert_eq!(page.total_count, pools.len());
    assert_eq!(page.total_pages, 1);
}

#[test]
fn search_matches_project_symbol_or_chain_case_insensitively() {
    let pools = sample_pools();
    let p = pipeline();

    let by_project = p.filter_and_sort(&pools, &QueryState::default().with_search("AAVE"));
    assert_eq!(by_project.len(), 3);

    let by_symbol = p.filter_and_sort(&pools, &QueryState::default().with_search("steth"));
    assert_eq!(ids(&by_symbol), vec!["p2"]);

    let by_chain = p.filter_and_sort(&pools, &QueryState::default().with_search("sol"));
    assert_eq!(ids(&by_chain), vec!["p5"]);

    // "usd" hits symbols on three chains
    let usd = p.filter_and_sort(&pools, &QueryState::default().with_search("USD"));
    let mut usd_ids = ids(&usd);
    usd_ids.sort();
    assert_eq!(usd_ids, vec!["p1", "p5", "p6", "p8"]);
}

#[test]
fn empty_platform_set_means_no_restriction() {
    let pools = sample_pools();
    let state = QueryState::default().with_platforms(Vec::<String>::new());
    assert_eq!(pipeline().filter_and_sort(&pools, &state).len(), pools.len());
}

#[test]
fn platform_filter_is_exact_allow_list() {
    let pools = sample_pools();
    let state = QueryState::default().with_platforms(["gmx", "lido"]);
    let mut got = ids(&pipeline().filter_and_sort(&pools, &state));
    got.sort();
    assert_eq!(got, vec!["p2", "p4"]);

    // project names are matched as given
    let state = QueryState::default().with_platforms(["GMX"]);
    assert!(pipeline().filter_and_sort(&pools, &state).is_empty());
}

#[test]
fn chain_filter_matches_lowercased_chain() {
    let pools = sample_pools();
    let state = QueryState::default().toggle_chain("BASE");
    let mut got = ids(&pipeline().filter_and_sort(&pools, &state));
    got.sort();
    assert_eq!(got, vec!["p7", "p8"]);
}

#[test]
fn platform_and_chain_filters_compose_in_either_order() {
    let pools = sample_pools();
    let a = QueryState::default()
        .toggle_platform("aave-v3")
        .toggle_chain("ethereum");
    let b = QueryState::default()
        .toggle_chain("ethereum")
        .toggle_platform("aave-v3");

    let got_a = ids(&pipeline().filter_and_sort(&pools, &a));
    let got_b = ids(&pipeline().filter_and_sort(&pools, &b));
    assert_eq!(got_a, vec!["p1"]);
    assert_eq!(got_a, got_b);
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[test]
fn numeric_sort_descending_and_ascending() {
    let pools = sample_pools();
    let desc = QueryState::default().with_sort(SortColumn::TvlUsd, SortDirection::Desc);
    let got = ids(&pipeline().filter_and_sort(&pools, &desc));
    assert_eq!(got, vec!["p2", "p1", "p7", "p3", "p4", "p8", "p5", "p6"]);

    let asc = QueryState::default().with_sort(SortColumn::TvlUsd, SortDirection::Asc);
    let got = ids(&pipeline().filter_and_sort(&pools, &asc));
    assert_eq!(got, vec!["p6", "p5", "p8", "p4", "p3", "p7", "p1", "p2"]);
}

#[test]
fn null_apy_sorts_first_ascending_and_last_descending() {
    let pools = vec![
        pool("a", "x", "Ethereum", "A", Some(5.0)),
        pool("null", "x", "Ethereum", "N", None),
        pool("b", "x", "Ethereum", "B", Some(-2.0)),
    ];

    let asc = QueryState::default().with_sort(SortColumn::Apy, SortDirection::Asc);
    assert_eq!(ids(&pipeline().filter_and_sort(&pools, &asc)), vec!["null", "b", "a"]);

    let desc = QueryState::default().with_sort(SortColumn::Apy, SortDirection::Desc);
    assert_eq!(ids(&pipeline().filter_and_sort(&pools, &desc)), vec!["a", "b", "null"]);
}

#[test]
fn sort_is_stable_for_equal_values() {
    let pools: Vec<Pool> = (0..12)
        .map(|i| pool(&format!("eq-{}", i), "x", "Ethereum", "S", Some(3.0)))
        .collect();
    let expected: Vec<String> = pools.iter().map(|p| p.pool.clone()).collect();

    for direction in [SortDirection::Asc, SortDirection::Desc] {
        let state = QueryState::default().with_sort(SortColumn::Apy, direction);
        assert_eq!(ids(&pipeline().filter_and_sort(&pools, &state)), expected);
    }
}

#[test]
fn multiple_nulls_keep_their_relative_order() {
    let pools = vec![
        pool("n1", "x", "Ethereum", "A", None),
        pool("v", "x", "Ethereum", "B", Some(1.0)),
        pool("n2", "x", "Ethereum", "C", None),
    ];
    let asc = QueryState::default().with_sort(SortColumn::Apy, SortDirection::Asc);
    assert_eq!(ids(&pipeline().filter_and_sort(&pools, &asc)), vec!["n1", "n2", "v"]);

    let desc = QueryState::default().with_sort(SortColumn::Apy, SortDirection::Desc);
    assert_eq!(ids(&pipeline().filter_and_sort(&pools, &desc)), vec!["v", "n1", "n2"]);
}

#[test]
fn text_sort_is_case_insensitive() {
    let pools = sample_pools();
    let asc = QueryState::default().with_sort(SortColumn::Project, SortDirection::Asc);
    let projects: Vec<String> = pipeline()
        .filter_and_sort(&pools, &asc)
        .iter()
        .map(|p| p.project.clone())
        .collect();
    assert_eq!(
        projects,
        vec!["aave-v3", "aave-v3", "aave-v3", "Aerodrome-V1", "curve-dex", "gmx", "lido", "raydium"]
    );
}

#[test]
fn symbol_sort_follows_dictionary_collation() {
    let pools = vec![
        pool("a", "overnight", "Base", "USD+", Some(1.0)),
        pool("b", "x", "Base", "USD-X", Some(1.0)),
        pool("c", "x", "Base", "a1b", Some(1.0)),
        pool("d", "x", "Base", "a_b", Some(1.0)),
        pool("e", "x", "Base", "Éther", Some(1.0)),
        pool("f", "x", "Base", "Ethos", Some(1.0)),
    ];
    let asc = QueryState::default().with_sort(SortColumn::Symbol, SortDirection::Asc);
    let symbols: Vec<&str> = pipeline()
        .filter_and_sort(&pools, &asc)
        .iter()
        .map(|p| p.symbol.as_str())
        .collect();
    assert_eq!(symbols, vec!["a_b", "a1b", "Éther", "Ethos", "USD-X", "USD+"]);
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[test]
fn page_length_never_exceeds_page_size() {
    let pools = numbered_pools(23);
    let p = pipeline();
    let expected = [10, 10, 3, 0, 0];

    for (i, want) in expected.iter().enumerate() {
        let page = i + 1;
        let sorted = p.filter_and_sort(&pools, &QueryState::default());
        let result = p.paginate(sorted, page);
        assert_eq!(result.items.len(), *want, "page {}", page);
        assert!(result.items.len() <= p.page_size());
        assert_eq!(result.total_pages, 3);
    }
}

#[test]
fn empty_result_still_has_one_page() {
    let pools = sample_pools();
    let state = QueryState::default().with_search("no-such-thing");
    let page = pipeline().apply(&pools, &state);
    assert_eq!(page.total_count, 0);
    assert_eq!(page.total_pages, 1);
    assert!(page.items.is_empty());
}

#[test]
fn apply_is_idempotent() {
    let pools = numbered_pools(25);
    let state = QueryState::default()
        .with_search("tkn1")
        .with_sort(SortColumn::Symbol, SortDirection::Asc);
    let first = pipeline().apply(&pools, &state);
    let second = pipeline().apply(&pools, &state);
    assert_eq!(first, second);
}

#[test]
fn twenty_five_pools_by_apy_descending() {
    let pools = numbered_pools(25);
    let p = pipeline();

    let state = QueryState::default().with_sort(SortColumn::Apy, SortDirection::Desc);
    let page = p.apply(&pools, &state);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total_count, 25);

    let apys: Vec<f64> = page.items.iter().filter_map(|p| p.apy).collect();
    let expected: Vec<f64> = (16..=25).rev().map(|v| v as f64).collect();
    assert_eq!(apys, expected);

    // move to page 3, then change the sort column
    let on_three = state.go_to_page(3, page.total_pages);
    assert_eq!(on_three.current_page(), 3);
    assert_eq!(p.apply(&pools, &on_three).items.len(), 5);

    let resorted = on_three.sort_by(SortColumn::TvlUsd);
    assert_eq!(resorted.current_page(), 1);
    assert_eq!(p.apply(&pools, &resorted).items.len(), 10);
}

#[test]
fn page_request_beyond_total_is_ignored() {
    let pools = numbered_pools(25);
    let p = pipeline();
    let state = QueryState::default();
    let total = p.apply(&pools, &state).total_pages;

    let state = state.go_to_page(2, total).go_to_page(4, total);
    assert_eq!(state.current_page(), 2);
}

// ---------------------------------------------------------------------------
// Facets
// ---------------------------------------------------------------------------

#[test]
fn facets_are_distinct_in_first_seen_order() {
    let pools = sample_pools();
    let f = facets(&pools);
    assert_eq!(
        f.platforms,
        vec!["aave-v3", "lido", "gmx", "raydium", "curve-dex", "Aerodrome-V1"]
    );
    let keys: Vec<&str> = f.chains.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["ethereum", "arbitrum", "solana", "base"]);
    assert_eq!(f.chains[0].info.name, "Ethereum");
}
