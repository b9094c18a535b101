/// Wizard session state machine.
///
/// One logical flow per session: the five questionnaire steps must be
/// answered in order, the collected answers become immutable once the
/// session is submitted, and a failed submission leaves the session in its
/// pre-submission state so the caller may re-trigger it.
use crate::errors::AppError;
use crate::models::{
    CollectedAnswers, ExpenseAnswers, LoanAnswers, TranscriptEntry,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Number of questionnaire steps.
pub const STEP_COUNT: usize = 5;

/// Bot prompts, one per step, in the original chat script's wording.
const PROMPTS: [&str; STEP_COUNT] = [
    "Hello! 👋 I'm your financial advisor bot. Let's build your financial persona together.\n\nFirst up — What asset classes do you prefer to invest in? (Select all that apply)",
    "Great choices! 💼\n\nNow, what is your monthly in-hand income post taxes?",
    "Got it! 📊\n\nDo you have any outstanding loans? Select all that apply and enter the outstanding amounts.",
    "Understood! 🏠\n\nWhat percentage of your monthly salary goes towards family contributions? Give an estimated value.",
    "Almost done! 🎯\n\nWhat are your upcoming major expenses in the next 5 years? (Select all that apply)",
];

/// Closing message once all five answers are in.
pub const CLOSING_MESSAGE: &str =
    "Perfect! 🎉 I have all the information I need. Let me analyze your financial profile...";

/// Prompt text for a given step index. Panics only on an out-of-range
/// index, which the session logic never produces.
pub fn prompt_for_step(step: usize) -> &'static str {
    PROMPTS[step]
}

/// A typed answer to one wizard step, tagged by kind on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StepAnswer {
    /// Step 0: preferred asset classes (questionnaire tags).
    AssetClasses { selections: Vec<String> },
    /// Step 1: monthly in-hand income, INR.
    Income { amount: f64 },
    /// Step 2: outstanding loans by tag, or the no-loans flag.
    #[serde(rename_all = "camelCase")]
    Loans {
        no_loans: bool,
        #[serde(default)]
        loans: BTreeMap<String, f64>,
    },
    /// Step 3: family contribution as a percentage of monthly salary.
    FamilyContribution { percentage: f64 },
    /// Step 4: upcoming major expense tags plus free text for `other`.
    #[serde(rename_all = "camelCase")]
    Expenses {
        selected: Vec<String>,
        #[serde(default)]
        other_text: String,
    },
}

impl StepAnswer {
    /// The step index this answer kind belongs to.
    fn step_index(&self) -> usize {
        match self {
            StepAnswer::AssetClasses { .. } => 0,
            StepAnswer::Income { .. } => 1,
            StepAnswer::Loans { .. } => 2,
            StepAnswer::FamilyContribution { .. } => 3,
            StepAnswer::Expenses { .. } => 4,
        }
    }

    /// Validate the answer payload.
    ///
    /// These are the boundary checks the original wizard enforced in its
    /// input components: non-empty selections, positive finite income,
    /// non-negative loan amounts, percentage within 0-100.
    fn validate(&self) -> Result<(), AppError> {
        match self {
            StepAnswer::AssetClasses { selections } => {
                if selections.is_empty() {
                    return Err(AppError::BadRequest(
                        "Select at least one asset class".to_string(),
                    ));
                }
            }
            StepAnswer::Income { amount } => {
                if !amount.is_finite() || *amount <= 0.0 {
                    return Err(AppError::BadRequest(
                        "Income must be a positive amount".to_string(),
                    ));
                }
            }
            StepAnswer::Loans { no_loans, loans } => {
                if !no_loans && loans.is_empty() {
                    return Err(AppError::BadRequest(
                        "Select at least one loan or indicate you have none".to_string(),
                    ));
                }
                for (tag, amount) in loans {
                    if !amount.is_finite() || *amount < 0.0 {
                        return Err(AppError::BadRequest(format!(
                            "Outstanding amount for '{}' must be non-negative",
                            tag
                        )));
                    }
                }
            }
            StepAnswer::FamilyContribution { percentage } => {
                if !percentage.is_finite() || *percentage < 0.0 || *percentage > 100.0 {
                    return Err(AppError::BadRequest(
                        "Family contribution must be between 0 and 100 percent".to_string(),
                    ));
                }
            }
            StepAnswer::Expenses { selected, .. } => {
                if selected.is_empty() {
                    return Err(AppError::BadRequest(
                        "Select at least one upcoming expense".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Human-readable summary of the answer, as the original chat
    /// transcript rendered the user's reply.
    fn summarize(&self) -> String {
        match self {
            StepAnswer::AssetClasses { selections } => selections.join(", "),
            StepAnswer::Income { amount } => format!("₹{} / month", format_inr(*amount)),
            StepAnswer::Loans { no_loans, loans } => {
                if *no_loans {
                    "No outstanding loans".to_string()
                } else if loans.is_empty() {
                    "No loans".to_string()
                } else {
                    loans
                        .iter()
                        .map(|(tag, amount)| {
                            format!("{}: ₹{}", tag.replace('_', " "), format_inr(*amount))
                        })
                        .collect::<Vec<_>>()
                        .join(", ")
                }
            }
            StepAnswer::FamilyContribution { percentage } => {
                format!("{}% of monthly salary", percentage)
            }
            StepAnswer::Expenses {
                selected,
                other_text,
            } => selected
                .iter()
                .map(|tag| {
                    if tag == "other" {
                        let text = other_text.trim();
                        if text.is_empty() {
                            "Other".to_string()
                        } else {
                            text.to_string()
                        }
                    } else {
                        tag.replace('_', " ")
                    }
                })
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Format an amount with Indian digit grouping (₹12,34,567 style):
/// the last three digits form one group, the rest pair off.
pub fn format_inr(amount: f64) -> String {
    let rendered = format!("{}", amount);
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (rendered, None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest.to_string()),
        None => ("", int_part),
    };

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let split = digits.len() - 3;
        let (head, tail) = digits.split_at(split);
        let mut parts: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 2 {
            parts.push(&head[end - 2..end]);
            end -= 2;
        }
        parts.push(&head[..end]);
        parts.reverse();
        format!("{},{}", parts.join(","), tail)
    };

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// A wizard session: answers collected so far, their transcript, and
/// whether the session has been submitted.
#[derive(Debug, Clone)]
pub struct WizardSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    answers: Vec<StepAnswer>,
    transcript: Vec<TranscriptEntry>,
    submitted: bool,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            answers: Vec::new(),
            transcript: Vec::new(),
            submitted: false,
        }
    }

    /// Index of the step awaiting an answer, or `None` once all five are in.
    pub fn current_step(&self) -> Option<usize> {
        if self.answers.len() < STEP_COUNT {
            Some(self.answers.len())
        } else {
            None
        }
    }

    /// Whether all five steps have been answered.
    pub fn is_complete(&self) -> bool {
        self.answers.len() == STEP_COUNT
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Record an answer for the given step.
    ///
    /// Steps must be answered strictly in order; a submitted session
    /// accepts no further answers. Returns the transcript entry echoed to
    /// the client.
    pub fn answer(&mut self, step: usize, answer: StepAnswer) -> Result<TranscriptEntry, AppError> {
        if self.submitted {
            return Err(AppError::Conflict(
                "Session already submitted; answers are immutable".to_string(),
            ));
        }
        let expected = self.current_step().ok_or_else(|| {
            AppError::Conflict("All questions already answered; submit the session".to_string())
        })?;
        if step != expected {
            return Err(AppError::Conflict(format!(
                "Expected an answer for step {}, got step {}",
                expected, step
            )));
        }
        if answer.step_index() != step {
            return Err(AppError::BadRequest(format!(
                "Answer type does not match step {}",
                step
            )));
        }
        answer.validate()?;

        let entry = TranscriptEntry {
            step,
            prompt: prompt_for_step(step).to_string(),
            summary: answer.summarize(),
            answered_at: Utc::now(),
        };
        self.answers.push(answer);
        self.transcript.push(entry.clone());
        Ok(entry)
    }

    /// The full set of collected answers, available once every step has
    /// been answered.
    pub fn collected(&self) -> Option<CollectedAnswers> {
        if !self.is_complete() {
            return None;
        }
        let mut asset_classes = Vec::new();
        let mut income = 0.0;
        let mut loan_answers = LoanAnswers::default();
        let mut family_contribution = 0.0;
        let mut expenses = ExpenseAnswers::default();

        for answer in &self.answers {
            match answer {
                StepAnswer::AssetClasses { selections } => {
                    asset_classes = selections.clone();
                }
                StepAnswer::Income { amount } => income = *amount,
                StepAnswer::Loans { no_loans, loans } => {
                    loan_answers = LoanAnswers {
                        no_loans: *no_loans,
                        loans: loans.clone(),
                    };
                }
                StepAnswer::FamilyContribution { percentage } => {
                    family_contribution = *percentage;
                }
                StepAnswer::Expenses {
                    selected,
                    other_text,
                } => {
                    expenses = ExpenseAnswers {
                        selected: selected.clone(),
                        other_text: other_text.clone(),
                    };
                }
            }
        }

        Some(CollectedAnswers {
            asset_classes,
            income,
            loans: loan_answers,
            family_contribution,
            expenses,
        })
    }

    /// Mark the session submitted. Only valid once complete; afterwards
    /// the collected answers are frozen.
    pub fn mark_submitted(&mut self) -> Result<(), AppError> {
        if !self.is_complete() {
            return Err(AppError::Conflict(
                "Cannot submit before all questions are answered".to_string(),
            ));
        }
        if self.submitted {
            return Err(AppError::Conflict(
                "Session already submitted".to_string(),
            ));
        }
        self.submitted = true;
        Ok(())
    }
}
