//! Vault Selector
//!
//! Picks existing vault items matching a style and language, giving
//! crystallized items a guaranteed share of the selection.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use super::CRYSTALLIZED_PICK_CAP;
use crate::domain::entities::{AlintItem, Vault};

/// Select up to `target_count` items from the vault.
///
/// Returns fewer only when the whole vault holds fewer items.
pub fn select_from_vault<R: Rng + ?Sized>(
    vault: &Vault,
    style: &str,
    language: &str,
    target_count: usize,
    rng: &mut R,
) -> Vec<AlintItem> {
    let style = style.trim().to_lowercase();
    let (crystallized, regular): (Vec<&AlintItem>, Vec<&AlintItem>) = vault
        .alints
        .iter()
        .filter(|item| matches_style(item, &style))
        .partition(|item| item.crystallized);

    let crystallized_picks = crystallized.len().min(CRYSTALLIZED_PICK_CAP).min(target_count);
    let mut selection: Vec<&AlintItem> = crystallized
        .choose_multiple(rng, crystallized_picks)
        .copied()
        .collect();
    let remaining = target_count - selection.len();
    selection.extend(regular.choose_multiple(rng, remaining).copied());

    let language = language.trim().to_lowercase();
    if !language.is_empty() && language != "en" {
        let localized: Vec<&AlintItem> = selection
            .iter()
            .copied()
            .filter(|item| item.language.to_lowercase().contains(&language))
            .collect();
        if !localized.is_empty() {
            selection = localized;
        }
    }

    if selection.len() < target_count {
        let taken: HashSet<String> = selection.iter().map(|item| item.key()).collect();
        let rest: Vec<&AlintItem> = vault
            .alints
            .iter()
            .filter(|item| !taken.contains(&item.key()))
            .collect();
        let missing = target_count - selection.len();
        selection.extend(rest.choose_multiple(rng, missing).copied());
    }

    selection.truncate(target_count);
    selection.into_iter().cloned().collect()
}

fn matches_style(item: &AlintItem, style: &str) -> bool {
    [&item.vibe, &item.word, &item.meaning]
        .iter()
        .any(|field| field.to_lowercase().contains(style))
}
