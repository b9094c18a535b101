/// Dashboard presentation helpers.
///
/// Scores are rendered with a qualitative descriptor. Metrics where a high
/// value is a warning sign (risk appetite, emergency-broke likelihood) use
/// the direct scale; metrics where a high value is good (debt profile,
/// earning potential, expense fulfillment) use the inverse scale.
use crate::models::PersonaScores;
use serde::Serialize;

/// Qualitative label and display color for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreDescriptor {
    pub label: &'static str,
    pub color: &'static str,
}

/// Descriptor for metrics where higher means more exposure.
pub fn score_descriptor(score: i64) -> ScoreDescriptor {
    if score <= 25 {
        ScoreDescriptor {
            label: "Low",
            color: "#4ade80",
        }
    } else if score <= 50 {
        ScoreDescriptor {
            label: "Moderate",
            color: "#facc15",
        }
    } else if score <= 75 {
        ScoreDescriptor {
            label: "High",
            color: "#fb923c",
        }
    } else {
        ScoreDescriptor {
            label: "Very High",
            color: "#f87171",
        }
    }
}

/// Descriptor for metrics where higher is better.
pub fn inverse_score_descriptor(score: i64) -> ScoreDescriptor {
    if score >= 75 {
        ScoreDescriptor {
            label: "Excellent",
            color: "#4ade80",
        }
    } else if score >= 50 {
        ScoreDescriptor {
            label: "Good",
            color: "#a3e635",
        }
    } else if score >= 25 {
        ScoreDescriptor {
            label: "Fair",
            color: "#facc15",
        }
    } else {
        ScoreDescriptor {
            label: "Poor",
            color: "#f87171",
        }
    }
}

/// One dashboard metric ready for rendering.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCard {
    pub name: &'static str,
    pub score: i64,
    pub description: &'static str,
    pub descriptor: &'static str,
    pub descriptor_color: &'static str,
}

/// Build the five dashboard cards from the persona scores.
pub fn dashboard_cards(scores: &PersonaScores) -> Vec<ScoreCard> {
    let risk = score_descriptor(scores.risk_appetite);
    let debt = inverse_score_descriptor(scores.debt_profile);
    let earning = inverse_score_descriptor(scores.earning_potential);
    let emergency = score_descriptor(scores.emergency_broke_likelihood);
    let fulfillment = inverse_score_descriptor(scores.upcoming_expense_fulfillment_likelihood);

    vec![
        ScoreCard {
            name: "Risk Appetite",
            score: scores.risk_appetite,
            description: "Your tolerance for investment risk and volatility",
            descriptor: risk.label,
            descriptor_color: risk.color,
        },
        ScoreCard {
            name: "Debt Profile",
            score: scores.debt_profile,
            description: "Your current debt health and loan burden",
            descriptor: debt.label,
            descriptor_color: debt.color,
        },
        ScoreCard {
            name: "Earning Potential",
            score: scores.earning_potential,
            description: "Your income level and financial capacity",
            descriptor: earning.label,
            descriptor_color: earning.color,
        },
        ScoreCard {
            name: "Emergency Broke Risk",
            score: scores.emergency_broke_likelihood,
            description: "Likelihood of financial distress in a major emergency",
            descriptor: emergency.label,
            descriptor_color: emergency.color,
        },
        ScoreCard {
            name: "Expense Fulfillment",
            score: scores.upcoming_expense_fulfillment_likelihood,
            description: "Ability to meet upcoming expenses without loans",
            descriptor: fulfillment.label,
            descriptor_color: fulfillment.color,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_boundaries() {
        assert_eq!(score_descriptor(0).label, "Low");
        assert_eq!(score_descriptor(25).label, "Low");
        assert_eq!(score_descriptor(26).label, "Moderate");
        assert_eq!(score_descriptor(50).label, "Moderate");
        assert_eq!(score_descriptor(51).label, "High");
        assert_eq!(score_descriptor(75).label, "High");
        assert_eq!(score_descriptor(76).label, "Very High");
        assert_eq!(score_descriptor(100).label, "Very High");
    }

    #[test]
    fn test_inverse_descriptor_boundaries() {
        assert_eq!(inverse_score_descriptor(100).label, "Excellent");
        assert_eq!(inverse_score_descriptor(75).label, "Excellent");
        assert_eq!(inverse_score_descriptor(74).label, "Good");
        assert_eq!(inverse_score_descriptor(50).label, "Good");
        assert_eq!(inverse_score_descriptor(49).label, "Fair");
        assert_eq!(inverse_score_descriptor(25).label, "Fair");
        assert_eq!(inverse_score_descriptor(24).label, "Poor");
        assert_eq!(inverse_score_descriptor(0).label, "Poor");
    }

    #[test]
    fn test_cards_pair_metrics_with_the_right_scale() {
        let scores = PersonaScores {
            risk_appetite: 80,
            debt_profile: 80,
            earning_potential: 10,
            emergency_broke_likelihood: 10,
            upcoming_expense_fulfillment_likelihood: 60,
        };
        let cards = dashboard_cards(&scores);
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].descriptor, "Very High"); // direct scale
        assert_eq!(cards[1].descriptor, "Excellent"); // inverse scale
        assert_eq!(cards[2].descriptor, "Poor");
        assert_eq!(cards[3].descriptor, "Low");
        assert_eq!(cards[4].descriptor, "Good");
    }
}
