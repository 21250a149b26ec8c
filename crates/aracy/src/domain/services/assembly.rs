//! Result assembly: merge, pad and truncate to the fixed target count,
//! and pick which generated alints are worth keeping in the vault.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::entities::{AlintEntry, AlintItem};

/// Minimum word length (exclusive) for a generated alint to be persisted
pub const MIN_PERSIST_WORD_LEN: usize = 3;
/// Minimum meaning length (exclusive) for a generated alint to be persisted
pub const MIN_PERSIST_MEANING_LEN: usize = 15;

/// An assembled result and where its entries came from
#[derive(Debug, Clone, PartialEq)]
pub struct Assembled {
    pub entries: Vec<AlintEntry>,
    pub from_vault: usize,
    pub generated: usize,
    pub fallback: usize,
    pub padded: usize,
}

/// Combine vault and generated entries into exactly `target` entries.
///
/// Order is vault, generated, fallback pool, then random repeats of what is
/// already there. Returns `None` only when every source is empty.
pub fn assemble_result<R: Rng + ?Sized>(
    vault_entries: Vec<AlintEntry>,
    generated: Vec<AlintEntry>,
    fallback_pool: &[String],
    target: usize,
    rng: &mut R,
) -> Option<Assembled> {
    let from_vault = vault_entries.len();
    let generated_count = generated.len();

    let mut combined = vault_entries;
    combined.extend(generated);

    let fallback_needed = target.saturating_sub(combined.len());
    let fallback: Vec<AlintEntry> = fallback_pool
        .iter()
        .take(fallback_needed)
        .map(|line| AlintEntry::Text(line.clone()))
        .collect();
    let fallback_count = fallback.len();
    combined.extend(fallback);

    let mut padded = 0;
    if combined.len() < target {
        if combined.is_empty() {
            return None;
        }
        let pool = combined.clone();
        while combined.len() < target {
            if let Some(repeat) = pool.choose(rng) {
                combined.push(repeat.clone());
                padded += 1;
            }
        }
    }

    combined.truncate(target);

    Some(Assembled {
        entries: combined,
        from_vault,
        generated: generated_count,
        fallback: fallback_count,
        padded,
    })
}

/// Generated entries of the `"Word - Meaning"` shape that are substantial
/// enough to be kept for future runs.
pub fn persistable_items(generated: &[AlintEntry], language: &str, vibe: &str) -> Vec<AlintItem> {
    generated
        .iter()
        .filter_map(AlintEntry::as_text)
        .filter_map(AlintItem::split_line)
        .filter(|(word, meaning)| {
            word.chars().count() > MIN_PERSIST_WORD_LEN
                && meaning.chars().count() > MIN_PERSIST_MEANING_LEN
        })
        .map(|(word, meaning)| AlintItem::generated(word, meaning, language, vibe))
        .collect()
}
