// ============================================================================
// Distractor Builder
// Shared bounded-retry loop for offset-style multiple-choice distractors
// ============================================================================

use crate::domain::ChoiceSet;
use crate::interfaces::{shuffle, RandomSource};
use tracing::warn;

/// Total entries in a choice set: the correct answer plus one distractor.
pub(crate) const CHOICE_COUNT: usize = 2;

/// Random candidates tried before switching to the deterministic fallback.
pub(crate) const MAX_ATTEMPTS: u32 = 64;

/// Build a shuffled choice set from a correct entry plus perturbed
/// distractors.
///
/// `candidate` draws one random perturbation of the correct value, already
/// formatted in the domain's native text. Duplicates are rejected; domains
/// where distinct values can share text (fractions) or need a value-level
/// positivity check do that inside `candidate` and in their own loop.
///
/// After `MAX_ATTEMPTS` rejected candidates the loop switches to `fallback`,
/// which receives an increasing step and must produce a new value each step,
/// so the loop always terminates.
pub(crate) fn build_offset_choices(
    rng: &mut dyn RandomSource,
    correct: String,
    total: usize,
    mut candidate: impl FnMut(&mut dyn RandomSource) -> String,
    mut fallback: impl FnMut(u32) -> String,
) -> ChoiceSet {
    let mut entries = vec![correct];
    let mut attempts = 0u32;
    let mut step = 1u32;

    while entries.len() < total {
        let text = if attempts < MAX_ATTEMPTS {
            attempts += 1;
            candidate(rng)
        } else {
            if step == 1 {
                warn!(
                    attempts = MAX_ATTEMPTS,
                    "distractor candidates exhausted, using deterministic fallback"
                );
            }
            let text = fallback(step);
            step += 1;
            text
        };

        if !entries.contains(&text) {
            entries.push(text);
        }
    }

    shuffle(rng, &mut entries);
    ChoiceSet::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::SeededSource;

    #[test]
    fn test_contains_correct_and_is_distinct() {
        let mut rng = SeededSource::new(11);
        let choices = build_offset_choices(
            &mut rng,
            "7".to_string(),
            CHOICE_COUNT,
            |rng| (7 + rng.range_i64(1, 5)).to_string(),
            |step| (7 + step as i64).to_string(),
        );

        assert_eq!(choices.len(), 2);
        assert!(choices.contains_text("7"));
        assert_ne!(choices.entries()[0], choices.entries()[1]);
    }

    #[test]
    fn test_fallback_guarantees_termination() {
        let mut rng = SeededSource::new(12);
        // Candidate closure that can never produce a distinct entry
        let choices = build_offset_choices(
            &mut rng,
            "7".to_string(),
            CHOICE_COUNT,
            |_| "7".to_string(),
            |step| (7 + step as i64).to_string(),
        );

        assert_eq!(choices.len(), 2);
        assert!(choices.contains_text("7"));
        assert!(choices.contains_text("8"));
    }

    #[test]
    fn test_larger_totals() {
        let mut rng = SeededSource::new(13);
        let choices = build_offset_choices(
            &mut rng,
            "10".to_string(),
            4,
            |rng| (10 + rng.range_i64(1, 9)).to_string(),
            |step| (10 + step as i64).to_string(),
        );

        assert_eq!(choices.len(), 4);
        let mut entries = choices.entries().to_vec();
        entries.sort();
        entries.dedup();
        assert_eq!(entries.len(), 4);
    }
}
