// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;

/// Catch-all for expense rows no keyword matches.
pub const OTHER: &str = "Other";

/// Categories in priority order. The order is a semantic tie-break: a
/// description matching keywords from two categories gets the earlier one,
/// and equal-total categories keep this order in the breakdown.
static CATEGORY_KEYWORDS: Lazy<Vec<(&'static str, Vec<&'static str>)>> = Lazy::new(|| {
    vec![
        (
            "Groceries",
            vec![
                "grocery",
                "whole foods",
                "trader joe",
                "costco",
                "safeway",
                "kroger",
                "walmart",
                "food",
            ],
        ),
        (
            "Dining",
            vec![
                "restaurant",
                "cafe",
                "coffee",
                "starbucks",
                "mcdonald",
                "burger",
                "pizza",
                "chipotle",
                "uber eats",
                "doordash",
            ],
        ),
        (
            "Transportation",
            vec![
                "gas", "fuel", "uber", "lyft", "taxi", "parking", "metro", "bus", "train",
            ],
        ),
        (
            "Bills",
            vec![
                "electric", "gas bill", "water", "internet", "phone", "cable", "insurance",
                "rent", "mortgage",
            ],
        ),
        (
            "Shopping",
            vec![
                "amazon", "target", "mall", "store", "shopping", "clothing", "retail",
            ],
        ),
        (
            "Entertainment",
            vec![
                "netflix",
                "spotify",
                "movie",
                "theater",
                "game",
                "entertainment",
                "subscription",
            ],
        ),
        (
            "Healthcare",
            vec![
                "pharmacy", "doctor", "medical", "health", "cvs", "walgreen",
            ],
        ),
    ]
});

/// Category names in priority order, including the catch-all.
pub fn category_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = CATEGORY_KEYWORDS.iter().map(|(n, _)| *n).collect();
    names.push(OTHER);
    names
}

/// Assign an expense description to a category by keyword match. The first
/// category in priority order with any substring hit wins; unmatched
/// descriptions go to Other.
pub fn classify(description: &str) -> &'static str {
    let desc = description.to_lowercase();
    for (name, keywords) in CATEGORY_KEYWORDS.iter() {
        if keywords.iter().any(|k| desc.contains(k)) {
            return name;
        }
    }
    OTHER
}
