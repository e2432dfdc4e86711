//! The built-in question catalog shipped with the engine.
//!
//! Ten questions per dimension. Two questions carry weight 2: emergency
//! reserves (capacity) and drawdown reaction (willingness) dominate
//! their categories by policy.

use once_cell::sync::Lazy;

use crate::domain::foundation::{AnswerValue, CatalogVersion, RiskDimension, Weight};

use super::{AnswerOption, BiasKind, Question, QuestionCatalog};

/// Version identifier of the built-in catalog.
pub const BUILTIN_CATALOG_VERSION: &str = "2026.1";

static CATALOG: Lazy<QuestionCatalog> = Lazy::new(build_catalog);

/// Returns the built-in catalog.
pub fn default_catalog() -> &'static QuestionCatalog {
    &CATALOG
}

fn scale(labels: [&str; 5]) -> Vec<AnswerOption> {
    AnswerValue::ALL
        .iter()
        .zip(labels)
        .map(|(value, label)| AnswerOption::new(*value, label))
        .collect()
}

/// Standard agreement scale used by the bias set.
fn agreement() -> Vec<AnswerOption> {
    scale([
        "Strongly disagree",
        "Disagree",
        "Neutral",
        "Agree",
        "Strongly agree",
    ])
}

fn capacity_questions() -> Vec<Question> {
    let dim = RiskDimension::Capacity;
    vec![
        Question::new(
            "cap_time_horizon",
            dim,
            scale([
                "Under 2 years",
                "2-5 years",
                "5-10 years",
                "10-20 years",
                "Over 20 years",
            ]),
        ),
        Question::new(
            "cap_emergency_fund",
            dim,
            scale([
                "No reserve",
                "Under 1 month of expenses",
                "1-3 months",
                "3-6 months",
                "Over 6 months",
            ]),
        )
        .with_weight(Weight::new(2)),
        Question::new(
            "cap_income_stability",
            dim,
            scale([
                "No steady income",
                "Irregular",
                "Mostly stable",
                "Stable",
                "Very stable with growth",
            ]),
        ),
        Question::new(
            "cap_income_share_invested",
            dim,
            scale([
                "Over 50% of income",
                "30-50%",
                "15-30%",
                "5-15%",
                "Under 5%",
            ]),
        ),
        Question::new(
            "cap_liquid_net_worth",
            dim,
            scale([
                "Under 10k",
                "10k-50k",
                "50k-200k",
                "200k-1M",
                "Over 1M",
            ]),
        ),
        Question::new(
            "cap_debt_load",
            dim,
            scale([
                "Heavy, short-term debt",
                "Significant debt",
                "Manageable debt",
                "Mortgage only",
                "Debt free",
            ]),
        ),
        Question::new(
            "cap_dependents",
            dim,
            scale([
                "Several, sole provider",
                "Several, shared",
                "One or two",
                "None, supporting parents soon",
                "None",
            ]),
        ),
        Question::new(
            "cap_job_outlook",
            dim,
            scale([
                "At risk",
                "Uncertain",
                "Steady",
                "Good prospects",
                "Excellent prospects",
            ]),
        ),
        Question::new(
            "cap_insurance_cover",
            dim,
            scale([
                "None",
                "Health only",
                "Health and life",
                "Broad cover",
                "Comprehensive cover",
            ]),
        ),
        Question::new(
            "cap_retirement_runway",
            dim,
            scale([
                "Already retired",
                "Under 5 years away",
                "5-15 years",
                "15-25 years",
                "Over 25 years",
            ]),
        ),
    ]
}

fn willingness_questions() -> Vec<Question> {
    let dim = RiskDimension::Willingness;
    vec![
        Question::new(
            "will_volatility_comfort",
            dim,
            scale([
                "Cannot accept any swings",
                "Small swings only",
                "Moderate swings",
                "Large swings acceptable",
                "Swings do not concern me",
            ]),
        ),
        Question::new(
            "will_loss_reaction",
            dim,
            scale([
                "Sell everything",
                "Sell a large part",
                "Hold and wait",
                "Hold and review plan",
                "Buy more",
            ]),
        )
        .with_weight(Weight::new(2)),
        Question::new(
            "will_risk_vs_return",
            dim,
            scale([
                "Preserve capital above all",
                "Mostly preserve",
                "Balance growth and safety",
                "Mostly growth",
                "Maximize growth",
            ]),
        ),
        Question::new(
            "will_gamble_preference",
            dim,
            scale([
                "Certain 2% gain",
                "Likely 4% gain",
                "Even odds of 8%",
                "Small chance of 20%",
                "Small chance of 50%",
            ]),
        ),
        Question::new(
            "will_sleep_test",
            dim,
            scale([
                "Lose sleep over any loss",
                "Uneasy for weeks",
                "Uneasy for days",
                "Briefly concerned",
                "Unbothered",
            ]),
        ),
        Question::new(
            "will_market_drop_action",
            dim,
            scale([
                "Exit the market",
                "Reduce exposure",
                "Do nothing",
                "Rebalance into the drop",
                "Increase exposure",
            ]),
        ),
        Question::new(
            "will_experience",
            dim,
            scale([
                "No investing experience",
                "Savings products only",
                "Funds and bonds",
                "Individual stocks",
                "Options or leverage",
            ]),
        ),
        Question::new(
            "will_speculative_share",
            dim,
            scale([
                "Nothing speculative",
                "Up to 5%",
                "Up to 15%",
                "Up to 30%",
                "Over 30%",
            ]),
        ),
        Question::new(
            "will_doubling_bet",
            dim,
            scale([
                "Never",
                "Rarely",
                "Sometimes",
                "Often",
                "Whenever the case is strong",
            ]),
        ),
        Question::new(
            "will_drawdown_patience",
            dim,
            scale([
                "Recover within months",
                "Within a year",
                "Within two years",
                "Within five years",
                "However long it takes",
            ]),
        ),
    ]
}

fn bias_questions() -> Vec<Question> {
    let dim = RiskDimension::Bias;
    vec![
        Question::new("bias_loss_aversion", dim, agreement())
            .with_bias(BiasKind::LossAversion),
        Question::new("bias_overconfidence", dim, agreement())
            .with_bias(BiasKind::Overconfidence),
        Question::new("bias_recency", dim, agreement()).with_bias(BiasKind::RecencyBias),
        Question::new("bias_herding", dim, agreement()).with_bias(BiasKind::HerdMentality),
        Question::new("bias_anchoring", dim, agreement()).with_bias(BiasKind::Anchoring),
        Question::new("bias_home_market", dim, agreement()).with_bias(BiasKind::HomeBias),
        Question::new("bias_mental_accounting", dim, agreement())
            .with_bias(BiasKind::MentalAccounting),
        Question::new("bias_disposition", dim, agreement())
            .with_bias(BiasKind::DispositionEffect),
        Question::new("bias_familiarity", dim, agreement())
            .with_bias(BiasKind::FamiliarityBias),
        Question::new("bias_status_quo", dim, agreement())
            .with_bias(BiasKind::StatusQuoBias),
    ]
}

fn build_catalog() -> QuestionCatalog {
    QuestionCatalog::new(
        CatalogVersion::new(BUILTIN_CATALOG_VERSION),
        capacity_questions(),
        willingness_questions(),
        bias_questions(),
    )
}
