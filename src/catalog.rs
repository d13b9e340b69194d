use crate::types::survey::{AnswerType, Dimension, Question};
use std::collections::BTreeMap;

/// Immutable questionnaire configuration: the question list, the
/// per-dimension weights, and the per-dimension nudge pools. Built once
/// at start and passed by reference; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub questions: Vec<Question>,
    pub weights: BTreeMap<Dimension, f64>,
    pub nudges: BTreeMap<Dimension, Vec<String>>,
}

impl Catalog {
    /// The built-in ten-question survey with default weights and nudges.
    pub fn builtin() -> Self {
        Catalog {
            questions: QUESTIONS.to_vec(),
            weights: Self::default_weights(),
            nudges: default_nudges(),
        }
    }

    /// Default dimension weights. Must sum to 1.0 for the overall score
    /// to stay within [0, 1]; the sum is a configuration invariant, not
    /// a runtime check.
    pub fn default_weights() -> BTreeMap<Dimension, f64> {
        BTreeMap::from([
            (Dimension::EmotionalMaturity, 0.25),
            (Dimension::FaithValues, 0.25),
            (Dimension::FamilyOfOrigin, 0.15),
            (Dimension::PracticalReadiness, 0.15),
            (Dimension::RelationalSkills, 0.20),
        ])
    }

    pub fn weight(&self, dimension: Dimension) -> f64 {
        self.weights.get(&dimension).copied().unwrap_or(0.0)
    }

    /// The first configured nudge for a dimension, if any.
    pub fn first_nudge(&self, dimension: Dimension) -> Option<&str> {
        self.nudges
            .get(&dimension)
            .and_then(|pool| pool.first())
            .map(String::as_str)
    }

    pub fn weight_sum(&self) -> f64 {
        self.weights.values().sum()
    }
}

const QUESTIONS: &[Question] = &[
    Question {
        id: "Q_EMO_01",
        dimension: Dimension::EmotionalMaturity,
        answer_type: AnswerType::Scale,
        prompt: "I can acknowledge my mistakes without blaming others.",
        choices: &[],
    },
    Question {
        id: "Q_EMO_02",
        dimension: Dimension::EmotionalMaturity,
        answer_type: AnswerType::Choice,
        prompt: "When hurt, I typically:",
        choices: &["withdraw", "attack", "seek_repair", "adapt"],
    },
    Question {
        id: "Q_VAL_01",
        dimension: Dimension::FaithValues,
        answer_type: AnswerType::Scale,
        prompt: "My faith/values guide my daily decisions.",
        choices: &[],
    },
    Question {
        id: "Q_VAL_02",
        dimension: Dimension::FaithValues,
        answer_type: AnswerType::Choice,
        prompt: "I would marry someone outside my core faith convictions:",
        choices: &["yes", "no", "unsure"],
    },
    Question {
        id: "Q_FAM_01",
        dimension: Dimension::FamilyOfOrigin,
        answer_type: AnswerType::Choice,
        prompt: "Conflict in my family growing up was:",
        choices: &["avoided", "explosive", "resolved", "mixed"],
    },
    Question {
        id: "Q_FAM_02",
        dimension: Dimension::FamilyOfOrigin,
        answer_type: AnswerType::Scale,
        prompt: "I have processed wounds from my family of origin.",
        choices: &[],
    },
    Question {
        id: "Q_PRA_01",
        dimension: Dimension::PracticalReadiness,
        answer_type: AnswerType::Choice,
        prompt: "Do you track a monthly budget?",
        choices: &["none", "sometimes", "yes"],
    },
    Question {
        id: "Q_PRA_02",
        dimension: Dimension::PracticalReadiness,
        answer_type: AnswerType::Boolean,
        prompt: "Are you financially independent from your family?",
        choices: &["No", "Yes"],
    },
    Question {
        id: "Q_REL_01",
        dimension: Dimension::RelationalSkills,
        answer_type: AnswerType::Scale,
        prompt: "I practice active listening in conversations.",
        choices: &[],
    },
    Question {
        id: "Q_REL_02",
        dimension: Dimension::RelationalSkills,
        answer_type: AnswerType::Scale,
        prompt: "I can disagree without disrespect.",
        choices: &[],
    },
];

fn default_nudges() -> BTreeMap<Dimension, Vec<String>> {
    let owned = |pool: &[&str]| pool.iter().map(|nudge| nudge.to_string()).collect();
    BTreeMap::from([
        (
            Dimension::EmotionalMaturity,
            owned(&[
                "Apologize once this week without any qualifiers, and journal what you learned.",
                "Name your feeling before reacting in a tough conversation.",
            ]),
        ),
        (
            Dimension::FaithValues,
            owned(&[
                "Schedule one weekly practice (worship/study/service).",
                "Write your top 3 convictions and how they shape daily choices.",
            ]),
        ),
        (
            Dimension::FamilyOfOrigin,
            owned(&[
                "List 2 patterns from your parents you want to repeat, and 2 you will avoid.",
                "Write a letter (not sent) to a family member expressing how a past event affected you.",
            ]),
        ),
        (
            Dimension::PracticalReadiness,
            owned(&[
                "Track every expense for 14 days and tag needs vs wants.",
                "Create a simple monthly budget and try it for one pay cycle.",
            ]),
        ),
        (
            Dimension::RelationalSkills,
            owned(&[
                "In your next 3 conversations, ask two clarifying questions before offering advice.",
                "Practice reflecting back what you heard before you respond.",
            ]),
        ),
    ])
}
