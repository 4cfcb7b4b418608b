//! CardAnimated: thaw `Card` that fades in on mount.
//!
//! The keyframes live in `styles/main.css` (`@keyframes card-appear`). Pass an
//! increasing `delay_ms` to stagger a grid of cards.

use leptos::prelude::*;
use thaw::Card;

/// Delay step between consecutive cards of a freshly rendered grid.
pub const STAGGER_STEP_MS: u32 = 30;
/// Longest delay any card waits, so long lists do not trickle in.
pub const STAGGER_MAX_MS: u32 = 300;

/// Animation delay for the card at `index` within the current batch.
pub fn stagger_delay(index: usize) -> u32 {
    (index as u32)
        .saturating_mul(STAGGER_STEP_MS)
        .min(STAGGER_MAX_MS)
}

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds.
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles appended after the animation.
    #[prop(optional, into)]
    style: String,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    };

    view! {
        <Card class=class attr:style=full_style>
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay_is_capped() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(3), 90);
        assert_eq!(stagger_delay(10), STAGGER_MAX_MS);
        assert_eq!(stagger_delay(500), STAGGER_MAX_MS);
    }
}
