/// Pure bucketing functions shared by the wizard and the submit handler.
///
/// Each function maps one raw answer dimension onto its categorical
/// enumeration. All of them are total: every valid input lands in exactly
/// one bracket, and boundary values belong to the lower bracket.
use crate::models::{
    AssetClass, CollectedAnswers, ExpenseAnswers, ExpenseBracket, FamilyContributionBracket,
    IncomeBracket, LoanAnswers, LoanBracket, QuestionResponses,
};
use std::collections::BTreeSet;

/// Map monthly in-hand income (INR) to its bracket.
pub fn map_income(income_inr: f64) -> IncomeBracket {
    if income_inr < 30_000.0 {
        IncomeBracket::Low
    } else if income_inr < 100_000.0 {
        IncomeBracket::Medium
    } else {
        IncomeBracket::High
    }
}

/// Map total outstanding loan amount (INR) to its bracket.
pub fn map_loan_amount(total_loan_inr: f64) -> LoanBracket {
    if total_loan_inr == 0.0 {
        LoanBracket::None
    } else if total_loan_inr < 500_000.0 {
        LoanBracket::Small
    } else if total_loan_inr < 2_000_000.0 {
        LoanBracket::Medium
    } else {
        LoanBracket::Large
    }
}

/// Map family-contribution percentage (0-100) to its bracket.
pub fn map_family_contribution(percentage: f64) -> FamilyContributionBracket {
    if percentage == 0.0 {
        FamilyContributionBracket::None
    } else if percentage < 50.0 {
        FamilyContributionBracket::Partial
    } else {
        FamilyContributionBracket::Full
    }
}

/// Map a count of upcoming major expenses to its bracket.
pub fn map_expenses(count: usize) -> ExpenseBracket {
    match count {
        0 => ExpenseBracket::None,
        1 => ExpenseBracket::Low,
        2..=3 => ExpenseBracket::Medium,
        _ => ExpenseBracket::High,
    }
}

/// Resolve a single questionnaire tag to its asset class, if known.
fn asset_class_for_tag(tag: &str) -> Option<AssetClass> {
    match tag {
        "fd_rd_savings" => Some(AssetClass::Fixed),
        "gold_silver_etfs" => Some(AssetClass::Crypto),
        "real_estate" => Some(AssetClass::RealEstate),
        "mfs_equity" => Some(AssetClass::Stocks),
        "debt" => Some(AssetClass::Other),
        _ => None,
    }
}

/// Map questionnaire asset tags to the scoring service's asset classes.
///
/// Unknown tags are dropped silently. The result is deduplicated and in
/// canonical enum order, so the mapping is idempotent and independent of
/// input order.
pub fn map_asset_classes(selections: &[String]) -> Vec<AssetClass> {
    let classes: BTreeSet<AssetClass> = selections
        .iter()
        .filter_map(|tag| asset_class_for_tag(tag))
        .collect();
    classes.into_iter().collect()
}

/// Total outstanding loan amount across all selected loans.
/// The `no_loans` flag forces the total to zero regardless of the map.
pub fn total_loan_amount(loans: &LoanAnswers) -> f64 {
    if loans.no_loans {
        0.0
    } else {
        loans.loans.values().sum()
    }
}

/// Number of distinct upcoming-expense categories that count towards the
/// bracket. `other` only counts when its free text is non-empty after
/// trimming.
pub fn countable_expenses(expenses: &ExpenseAnswers) -> usize {
    expenses
        .selected
        .iter()
        .filter(|tag| tag.as_str() != "other" || !expenses.other_text.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .len()
}

/// Assemble the full wire request from the collected answers.
///
/// Deterministic and side-effect free: the same answers always produce the
/// same `QuestionResponses`.
pub fn responses_from_answers(answers: &CollectedAnswers) -> QuestionResponses {
    QuestionResponses {
        asset_classes: map_asset_classes(&answers.asset_classes),
        income: map_income(answers.income),
        loan_amount: map_loan_amount(total_loan_amount(&answers.loans)),
        family_contribution: map_family_contribution(answers.family_contribution),
        upcoming_expenses: map_expenses(countable_expenses(&answers.expenses)),
    }
}
