// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::categorize::{category_names, classify};
use crate::models::{Breakdown, ByType, CategoryRow, Summary, Transaction};

/// Aggregate a cleaned dataset into income/expense totals and per-category
/// statistics. Zero-amount rows land in neither partition but still count
/// toward `transaction_count`. Only expense rows are categorized; category
/// percentages are shares of total categorized expense spending.
pub fn calculate(rows: &[Transaction]) -> Breakdown {
    let expenses: Vec<&Transaction> = rows.iter().filter(|t| t.amount < Decimal::ZERO).collect();
    let income: Vec<&Transaction> = rows.iter().filter(|t| t.amount > Decimal::ZERO).collect();

    let total_spent: Decimal = expenses.iter().map(|t| t.amount).sum::<Decimal>().abs();
    let total_income: Decimal = income.iter().map(|t| t.amount).sum();

    let categories = categorize_expenses(&expenses);

    Breakdown {
        summary: Summary {
            total_income,
            total_spent,
            net_flow: total_income - total_spent,
            transaction_count: rows.len(),
        },
        categories,
        by_type: ByType {
            income_count: income.len(),
            expense_count: expenses.len(),
        },
    }
}

fn categorize_expenses(expenses: &[&Transaction]) -> Vec<CategoryRow> {
    let names = category_names();
    let mut totals: Vec<(Decimal, usize)> = vec![(Decimal::ZERO, 0); names.len()];
    for tx in expenses {
        let cat = classify(&tx.description);
        let idx = names.iter().position(|n| *n == cat).unwrap_or(names.len() - 1);
        totals[idx].0 += tx.amount.abs();
        totals[idx].1 += 1;
    }

    let grand_total: Decimal = totals.iter().map(|(t, _)| *t).sum();

    // Built in priority order so the stable sort keeps that order on ties.
    let mut rows: Vec<CategoryRow> = names
        .iter()
        .zip(totals)
        .filter(|(_, (_, count))| *count > 0)
        .map(|(name, (total, count))| CategoryRow {
            name: (*name).to_string(),
            total,
            count,
            average: total / Decimal::from(count as i64),
            percentage: if grand_total > Decimal::ZERO {
                total * Decimal::from(100) / grand_total
            } else {
                Decimal::ZERO
            },
        })
        .collect();
    rows.sort_by(|a, b| b.total.cmp(&a.total));
    rows
}
