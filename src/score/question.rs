use crate::types::survey::AnswerType;

const SCALE_MAX: f64 = 5.0;

/// Neutral fallback used whenever an answer cannot be interpreted.
/// Malformed input degrades to this instead of erroring; a crash is
/// worse than an imprecise score in a self-assessment tool.
pub const NEUTRAL: f64 = 0.5;

const BOOLEAN_YES: [&str; 3] = ["yes", "true", "1"];
const CHOICE_GOOD: [&str; 4] = ["seek_repair", "adapt", "resolved", "yes"];
const CHOICE_BAD: [&str; 6] = ["withdraw", "attack", "avoided", "none", "no", "mismatch"];

/// Scores one answered question from its lowercased raw value.
/// Pure, order-independent across questions, and never fails.
pub fn score_answer(answer_type: AnswerType, raw: &str) -> f64 {
    match answer_type {
        AnswerType::Scale => normalize_scale(raw),
        AnswerType::Boolean => {
            if BOOLEAN_YES.contains(&raw) {
                1.0
            } else {
                0.0
            }
        }
        AnswerType::Choice => score_choice(raw),
    }
}

/// Parses a 1..=5 scale answer, clamps out-of-range values, and maps
/// onto [0.2, 1.0] by dividing by the scale maximum. Non-numeric input
/// scores neutral rather than erroring. "nan" parses as a number but
/// clamping cannot pin it into range, so it takes the neutral path
/// too; scores must stay within [0, 1].
pub fn normalize_scale(raw: &str) -> f64 {
    match raw.parse::<f64>() {
        Ok(value) if !value.is_nan() => value.clamp(1.0, SCALE_MAX) / SCALE_MAX,
        _ => NEUTRAL,
    }
}

/// Substring-matches the raw value against the good and bad token sets.
/// The checks run in a fixed sequence and each overwrites the previous
/// result, so a value matching tokens from both sets lands on the bad
/// score. That overwrite order is part of the observable contract and
/// must not be reordered.
fn score_choice(raw: &str) -> f64 {
    let mut score = NEUTRAL;
    if CHOICE_GOOD.iter().any(|token| raw.contains(token)) {
        score = 0.8;
    }
    if CHOICE_BAD.iter().any(|token| raw.contains(token)) {
        score = 0.2;
    }
    if raw == "unsure" {
        score = NEUTRAL;
    }
    score
}
