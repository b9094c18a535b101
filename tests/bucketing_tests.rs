/// Unit tests for the bucketing functions
/// Exercises every threshold boundary of the answer-to-bracket mappings
use finpersona_api::bucketing::{
    countable_expenses, map_asset_classes, map_expenses, map_family_contribution, map_income,
    map_loan_amount, total_loan_amount,
};
use finpersona_api::models::{
    AssetClass, ExpenseAnswers, ExpenseBracket, FamilyContributionBracket, IncomeBracket,
    LoanAnswers, LoanBracket,
};
use std::collections::BTreeMap;

#[cfg(test)]
mod income_bracket_tests {
    use super::*;

    #[test]
    fn test_income_boundaries() {
        assert_eq!(map_income(29_999.0), IncomeBracket::Low);
        assert_eq!(map_income(30_000.0), IncomeBracket::Medium);
        assert_eq!(map_income(99_999.0), IncomeBracket::Medium);
        assert_eq!(map_income(100_000.0), IncomeBracket::High);
    }

    #[test]
    fn test_income_extremes() {
        assert_eq!(map_income(1.0), IncomeBracket::Low);
        assert_eq!(map_income(29_999.99), IncomeBracket::Low);
        assert_eq!(map_income(10_000_000.0), IncomeBracket::High);
    }
}

#[cfg(test)]
mod loan_bracket_tests {
    use super::*;

    #[test]
    fn test_loan_boundaries() {
        assert_eq!(map_loan_amount(0.0), LoanBracket::None);
        assert_eq!(map_loan_amount(499_999.0), LoanBracket::Small);
        assert_eq!(map_loan_amount(500_000.0), LoanBracket::Medium);
        assert_eq!(map_loan_amount(1_999_999.0), LoanBracket::Medium);
        assert_eq!(map_loan_amount(2_000_000.0), LoanBracket::Large);
    }

    #[test]
    fn test_smallest_positive_loan_is_small() {
        assert_eq!(map_loan_amount(1.0), LoanBracket::Small);
        assert_eq!(map_loan_amount(0.01), LoanBracket::Small);
    }

    #[test]
    fn test_total_sums_across_loan_tags() {
        let mut loans = BTreeMap::new();
        loans.insert("home_loan".to_string(), 1_500_000.0);
        loans.insert("car_loan".to_string(), 400_000.0);
        loans.insert("education_loan".to_string(), 100_000.0);
        let answers = LoanAnswers {
            no_loans: false,
            loans,
        };
        assert_eq!(total_loan_amount(&answers), 2_000_000.0);
        assert_eq!(map_loan_amount(total_loan_amount(&answers)), LoanBracket::Large);
    }

    #[test]
    fn test_no_loans_maps_to_none() {
        let answers = LoanAnswers {
            no_loans: true,
            loans: BTreeMap::new(),
        };
        assert_eq!(map_loan_amount(total_loan_amount(&answers)), LoanBracket::None);
    }
}

#[cfg(test)]
mod family_contribution_tests {
    use super::*;

    #[test]
    fn test_contribution_boundaries() {
        assert_eq!(map_family_contribution(0.0), FamilyContributionBracket::None);
        assert_eq!(
            map_family_contribution(49.0),
            FamilyContributionBracket::Partial
        );
        assert_eq!(map_family_contribution(50.0), FamilyContributionBracket::Full);
        assert_eq!(
            map_family_contribution(100.0),
            FamilyContributionBracket::Full
        );
    }

    #[test]
    fn test_tiny_contribution_is_partial() {
        assert_eq!(
            map_family_contribution(0.5),
            FamilyContributionBracket::Partial
        );
    }
}

#[cfg(test)]
mod expense_bracket_tests {
    use super::*;

    #[test]
    fn test_expense_count_boundaries() {
        assert_eq!(map_expenses(0), ExpenseBracket::None);
        assert_eq!(map_expenses(1), ExpenseBracket::Low);
        assert_eq!(map_expenses(2), ExpenseBracket::Medium);
        assert_eq!(map_expenses(3), ExpenseBracket::Medium);
        assert_eq!(map_expenses(4), ExpenseBracket::High);
        assert_eq!(map_expenses(10), ExpenseBracket::High);
    }

    #[test]
    fn test_empty_other_excluded_from_count() {
        let expenses = ExpenseAnswers {
            selected: vec!["other".to_string()],
            other_text: String::new(),
        };
        assert_eq!(countable_expenses(&expenses), 0);
        assert_eq!(map_expenses(countable_expenses(&expenses)), ExpenseBracket::None);
    }

    #[test]
    fn test_filled_other_counts() {
        let expenses = ExpenseAnswers {
            selected: vec![
                "home_purchase".to_string(),
                "marriage".to_string(),
                "child".to_string(),
                "other".to_string(),
            ],
            other_text: "parents' anniversary".to_string(),
        };
        assert_eq!(countable_expenses(&expenses), 4);
        assert_eq!(map_expenses(countable_expenses(&expenses)), ExpenseBracket::High);
    }
}

#[cfg(test)]
mod asset_class_tests {
    use super::*;

    fn tags(ts: &[&str]) -> Vec<String> {
        ts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_known_tags_map_to_classes() {
        assert_eq!(
            map_asset_classes(&tags(&["fd_rd_savings"])),
            vec![AssetClass::Fixed]
        );
        assert_eq!(
            map_asset_classes(&tags(&["gold_silver_etfs"])),
            vec![AssetClass::Crypto]
        );
        assert_eq!(
            map_asset_classes(&tags(&["real_estate"])),
            vec![AssetClass::RealEstate]
        );
        assert_eq!(
            map_asset_classes(&tags(&["mfs_equity"])),
            vec![AssetClass::Stocks]
        );
        assert_eq!(map_asset_classes(&tags(&["debt"])), vec![AssetClass::Other]);
    }

    #[test]
    fn test_unknown_tags_dropped_silently() {
        assert_eq!(map_asset_classes(&tags(&["nft_art", ""])), vec![]);
        assert_eq!(
            map_asset_classes(&tags(&["mfs_equity", "nft_art"])),
            vec![AssetClass::Stocks]
        );
    }

    #[test]
    fn test_mapping_is_order_independent() {
        let forward = map_asset_classes(&tags(&["fd_rd_savings", "real_estate", "debt"]));
        let reversed = map_asset_classes(&tags(&["debt", "real_estate", "fd_rd_savings"]));
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_mapping_deduplicates() {
        assert_eq!(
            map_asset_classes(&tags(&["mfs_equity", "mfs_equity", "mfs_equity"])),
            vec![AssetClass::Stocks]
        );
    }

    #[test]
    fn test_empty_selection_maps_to_empty_set() {
        assert_eq!(map_asset_classes(&[]), vec![]);
    }
}
