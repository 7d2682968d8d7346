//! Snapshot fixtures shared by CLI tests.

#![allow(dead_code)]

use serde_json::json;

/// Grid with a string-keyed region, an integer-keyed region and an
/// unconstrained region
pub fn trading_grid() -> String {
    json!({
        "regions": [
            {
                "name": "orders",
                "key_constraint": "string",
                "entries": [
                    { "key": "o-1", "value": { "total": 3 } },
                    { "key": "o-2", "value": { "total": 5 } },
                    { "key": "o-3", "value": { "total": 8 } }
                ]
            },
            {
                "name": "orders_archive",
                "key_constraint": "string",
                "entries": [
                    { "key": "a-1", "value": null }
                ]
            },
            {
                "name": "positions",
                "key_constraint": "long",
                "entries": [
                    { "key": 1, "value": 100 },
                    { "key": 2, "value": 200 }
                ]
            },
            {
                "name": "sessions",
                "entries": [
                    { "key": "s-1", "value": true }
                ]
            }
        ]
    })
    .to_string()
}

/// Grid with one string-keyed region holding `count` entries
pub fn large_string_region(name: &str, count: usize) -> String {
    let entries: Vec<_> = (0..count)
        .map(|i| json!({ "key": format!("k-{i:05}"), "value": i }))
        .collect();

    json!({
        "regions": [
            { "name": name, "key_constraint": "string", "entries": entries }
        ]
    })
    .to_string()
}
