use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

// ============ Wire Enumerations ============

/// Asset class categories recognized by the scoring service.
///
/// Serialized in camelCase to match the scoring service contract
/// (`fixed`, `stocks`, `realEstate`, `other`, `crypto`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetClass {
    /// Fixed-income instruments (FDs, RDs, savings).
    Fixed,
    /// Equity and mutual funds.
    Stocks,
    /// Real estate holdings.
    RealEstate,
    /// Anything outside the named categories (debt funds, etc.).
    Other,
    /// Gold, silver, ETFs and crypto-adjacent assets.
    Crypto,
}

/// Monthly income bracket (INR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeBracket {
    Low,
    Medium,
    High,
}

/// Total outstanding loan bracket (INR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanBracket {
    None,
    Small,
    Medium,
    Large,
}

/// Share of monthly salary going to family contributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilyContributionBracket {
    None,
    Partial,
    Full,
}

/// Count of upcoming major expenses, bucketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseBracket {
    None,
    Low,
    Medium,
    High,
}

// ============ Scoring Service Wire Models ============

/// Request payload for the scoring service: the five categorical
/// enumerations derived from the collected answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponses {
    pub asset_classes: Vec<AssetClass>,
    pub income: IncomeBracket,
    pub loan_amount: LoanBracket,
    pub family_contribution: FamilyContributionBracket,
    pub upcoming_expenses: ExpenseBracket,
}

/// Response payload from the scoring service: five independent persona
/// scores, each conventionally in [0,100]. The values are opaque to this
/// service and are never range-checked locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaScores {
    pub risk_appetite: i64,
    pub debt_profile: i64,
    pub earning_potential: i64,
    pub emergency_broke_likelihood: i64,
    pub upcoming_expense_fulfillment_likelihood: i64,
}

// ============ Collected Answers ============

/// Answer to the loans question: either an explicit "no loans" flag or a
/// mapping from loan tag (e.g. `home_loan`) to outstanding amount in INR.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanAnswers {
    pub no_loans: bool,
    #[serde(default)]
    pub loans: BTreeMap<String, f64>,
}

/// Answer to the upcoming-expenses question: selected category tags plus
/// free text when `other` is among them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseAnswers {
    pub selected: Vec<String>,
    #[serde(default)]
    pub other_text: String,
}

/// The five raw answers collected by the wizard, in step order.
/// Immutable once the session is submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectedAnswers {
    pub asset_classes: Vec<String>,
    pub income: f64,
    pub loans: LoanAnswers,
    pub family_contribution: f64,
    pub expenses: ExpenseAnswers,
}

// ============ API Request/Response Models ============

/// Request body for answering a wizard step.
#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    /// Zero-based index of the step being answered.
    pub step: usize,
    /// The typed answer payload for that step.
    pub answer: crate::wizard::StepAnswer,
}

/// Response returned when a session is started.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStarted {
    pub session_id: Uuid,
    pub step: usize,
    pub total_steps: usize,
    pub prompt: String,
}

/// One answered step as echoed back to the client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptEntry {
    pub step: usize,
    pub prompt: String,
    pub summary: String,
    pub answered_at: DateTime<Utc>,
}

/// Response returned after answering a step.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponse {
    pub summary: String,
    /// Next step index, absent once all five steps are answered.
    pub next_step: Option<usize>,
    /// Prompt for the next step, or the closing message when complete.
    pub prompt: String,
    pub complete: bool,
}

/// Current view of a wizard session.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub current_step: Option<usize>,
    pub total_steps: usize,
    pub submitted: bool,
    pub prompt: Option<String>,
    pub transcript: Vec<TranscriptEntry>,
}

/// Response returned after a successful submission: the raw scores, the
/// enumerations that were sent, and the rendered dashboard cards.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub scores: PersonaScores,
    pub responses: QuestionResponses,
    pub dashboard: Vec<crate::dashboard::ScoreCard>,
}
