//! Pure projection from the roster to the card list the page renders.

use roster::{Entry, Roster, FALLBACK_IMAGE_URL};
use serde::Serialize;

/// Per-index reveal stagger handed to the client, in milliseconds. The
/// server never sleeps on this, it is animation data for the page.
pub const REVEAL_STAGGER_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub image_url: String,
    pub reveal_delay_ms: u64,
}

/// One card per entry, in roster order.
pub fn render(roster: &Roster) -> Vec<Card> {
    roster
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| card(entry, index))
        .collect()
}

fn card(entry: &Entry, index: usize) -> Card {
    Card {
        id: entry.id,
        first_name: entry.first_name.clone(),
        last_name: entry.last_name.clone(),
        bio: entry.bio.clone(),
        image_url: entry
            .image_url
            .clone()
            .unwrap_or_else(|| FALLBACK_IMAGE_URL.to_string()),
        reveal_delay_ms: index as u64 * REVEAL_STAGGER_MS,
    }
}
