// Copyright 2025-present The Talpa Authors
// SPDX-License-Identifier: Apache-2.0

//! Per-token matching: one query token to a set of scored document hits.
//!
//! Four strategies run per token, cheapest first. Exact body and title
//! lookups are single map probes. The substring scan walks the precomputed
//! (length, lexicographic)-sorted vocabularies under a soft cap, so its cost
//! is bounded and its iteration order fixed - a capped scan sees the stored
//! terms closest to an exact match first. Object lookup walks the object
//! table comparing qualified names.
//!
//! All four accumulate into one hit list; nothing here deduplicates. A
//! document matched by the same token in both title and body keeps both
//! contributions, which is what makes it outrank a single-channel match
//! after aggregation.
//!
//! A token that matches nothing contributes an empty hit list - not an
//! error. The aggregator turns that into an empty result via AND semantics.

use crate::index::IndexStore;
use crate::query::QueryTerm;
use crate::scoring::SearchConfig;
use crate::types::{Channel, TermEntry};

/// One scored document reference produced by a single token.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub doc: u32,
    pub score: f64,
    pub channel: Channel,
    /// Category label, set for object hits only.
    pub category: Option<String>,
}

/// Match one normalized token against the store.
pub fn match_token(store: &IndexStore, config: &SearchConfig, token: &QueryTerm) -> Vec<Hit> {
    let mut hits = Vec::new();

    // Exact lookups. Both channels are kept when both match.
    if let Some(entry) = store.body_hits(&token.text) {
        push_term_hits(&mut hits, entry, config.term, Channel::Body);
    }
    if let Some(entry) = store.title_hits(&token.text) {
        push_term_hits(&mut hits, entry, config.title, Channel::Title);
    }

    // Substring scan, exact-length tokens only.
    if !token.short {
        scan_vocab(
            store,
            store.body_vocab(),
            &token.text,
            config.partial_term,
            Channel::Body,
            config.scan_cap,
            &mut hits,
        );
        scan_vocab(
            store,
            store.title_vocab(),
            &token.text,
            config.partial_title,
            Channel::Title,
            config.scan_cap,
            &mut hits,
        );
    }

    // Object symbols: exact qualified name or `.token` suffix.
    for matched in store.objects_matching(&token.text) {
        let base = if matched.exact {
            config.object_name
        } else {
            config.object_partial
        };
        let score = base + config.priority_boost(matched.entry.priority);
        let category = store
            .category_label(matched.entry.type_code)
            .map(str::to_string);
        hits.push(Hit {
            doc: matched.entry.doc,
            score,
            channel: Channel::Object,
            category,
        });
    }

    hits
}

fn push_term_hits(hits: &mut Vec<Hit>, entry: &TermEntry, score: f64, channel: Channel) {
    for &doc in entry.docs() {
        hits.push(Hit {
            doc,
            score,
            channel,
            category: None,
        });
    }
}

/// Scan a sorted vocabulary for stored terms containing `token`.
///
/// `cap` counts *scanned* entries, not matches. Stopping early loses the
/// partial matches past the cap and nothing else - a precision/latency
/// trade-off, not a failure.
fn scan_vocab(
    store: &IndexStore,
    vocab: &[String],
    token: &str,
    score: f64,
    channel: Channel,
    cap: usize,
    hits: &mut Vec<Hit>,
) {
    for stored in vocab.iter().take(cap) {
        // Equality is the exact channel's job.
        if stored == token || !stored.contains(token) {
            continue;
        }
        let entry = match channel {
            Channel::Title => store.title_hits(stored),
            _ => store.body_hits(stored),
        };
        if let Some(entry) = entry {
            push_term_hits(hits, entry, score, channel);
        }
    }
}
