// Copyright 2025-present The Talpa Authors
// SPDX-License-Identifier: Apache-2.0

//! Score aggregation: per-token hit lists to per-document totals.
//!
//! The semantics are AND across tokens, OR across channels within a token.
//! A document qualifies only if every token produced at least one hit for
//! it; the qualifying set is the intersection of the per-token document
//! sets. Scoring then sums over the *union* of hits for qualifying
//! documents - a document can collect bonus score from a channel that is
//! not the one that qualified it.
//!
//! Per-document contributions are summed in `total_cmp` order rather than
//! arrival order. The multiset of contributions for a document does not
//! depend on token order, so canonical summation makes totals bit-identical
//! under query-token permutation - floating-point addition in arrival order
//! would not be.

use crate::matcher::Hit;
use crate::types::Channel;
use std::collections::{HashMap, HashSet};

/// Aggregated outcome for one qualifying document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocScore {
    pub doc: u32,
    /// Sum of every contributing hit across all tokens and channels.
    pub score: f64,
    /// Any title-channel hit contributed; used as a rank tiebreak.
    pub title_hit: bool,
    /// Lexicographically least object category among contributing hits.
    pub category: Option<String>,
}

/// Accumulator for one document while hits are being collected.
#[derive(Debug, Default)]
struct Accumulator {
    contributions: Vec<f64>,
    title_hit: bool,
    category: Option<String>,
}

/// Combine per-token hit lists into totals for qualifying documents.
///
/// An empty slice (no tokens) and an empty intersection both yield an empty
/// vector. Output order is unspecified; ranking imposes the total order.
pub fn aggregate(per_token: &[Vec<Hit>]) -> Vec<DocScore> {
    if per_token.is_empty() {
        return Vec::new();
    }

    // Intersect the per-token document sets. A token with no hits empties
    // the intersection immediately.
    let mut qualifying: HashSet<u32> = per_token[0].iter().map(|h| h.doc).collect();
    for hits in &per_token[1..] {
        if qualifying.is_empty() {
            return Vec::new();
        }
        let matched: HashSet<u32> = hits.iter().map(|h| h.doc).collect();
        qualifying.retain(|doc| matched.contains(doc));
    }
    if qualifying.is_empty() {
        return Vec::new();
    }

    // Collect every hit touching a qualifying document.
    let mut accumulators: HashMap<u32, Accumulator> = HashMap::with_capacity(qualifying.len());
    for hits in per_token {
        for hit in hits {
            if !qualifying.contains(&hit.doc) {
                continue;
            }
            let acc = accumulators.entry(hit.doc).or_default();
            acc.contributions.push(hit.score);
            if hit.channel == Channel::Title {
                acc.title_hit = true;
            }
            if let Some(category) = &hit.category {
                let replace = match &acc.category {
                    Some(existing) => category < existing,
                    None => true,
                };
                if replace {
                    acc.category = Some(category.clone());
                }
            }
        }
    }

    accumulators
        .into_iter()
        .map(|(doc, mut acc)| {
            acc.contributions.sort_by(f64::total_cmp);
            DocScore {
                doc,
                score: acc.contributions.iter().sum(),
                title_hit: acc.title_hit,
                category: acc.category,
            }
        })
        .collect()
}
