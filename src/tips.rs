use crate::models::{CategoryTotal, Tip};

pub const MAX_TIPS: usize = 3;

const HOUSING_PCT: i64 = 40;
const FOOD_PCT: i64 = 20;
const SUBSCRIPTIONS_PCT: i64 = 8;

/// The four spending buckets the tip rules look at.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpendingBuckets {
    pub rent: f64,
    pub food: f64,
    pub subscriptions: f64,
    pub investments: f64,
}

impl SpendingBuckets {
    /// Category names are matched case-insensitively; anything else is ignored.
    pub fn from_totals(totals: &[CategoryTotal]) -> Self {
        let mut buckets = Self::default();
        for total in totals {
            let amount = if total.amount.is_finite() { total.amount } else { 0.0 };
            let slot = match total.category.trim().to_lowercase().as_str() {
                "housing" => &mut buckets.rent,
                "food" => &mut buckets.food,
                "subscriptions" => &mut buckets.subscriptions,
                "investments" => &mut buckets.investments,
                _ => continue,
            };
            *slot += amount;
        }
        buckets
    }

    fn total(&self) -> f64 {
        self.rent + self.food + self.subscriptions + self.investments
    }
}

pub fn build_tips(buckets: &SpendingBuckets) -> Vec<Tip> {
    let total = match buckets.total() {
        t if t > 0.0 => t,
        _ => 1.0,
    };
    let pct = |amount: f64| (amount / total * 100.0).round() as i64;

    let mut tips = Vec::new();

    let rent = pct(buckets.rent);
    if rent >= HOUSING_PCT {
        tips.push(Tip {
            icon: "🏠",
            title: "Housing looks high",
            text: format!(
                "Housing is {rent}% of your spending. Target ~30–35% if possible."
            ),
        });
    }

    let food = pct(buckets.food);
    if food >= FOOD_PCT {
        tips.push(Tip {
            icon: "🍔",
            title: "Food spend is high",
            text: format!(
                "Food is {food}%. Try meal prep twice a week or set a weekly cap."
            ),
        });
    }

    let subscriptions = pct(buckets.subscriptions);
    if subscriptions >= SUBSCRIPTIONS_PCT {
        tips.push(Tip {
            icon: "🔁",
            title: "Trim subscriptions",
            text: format!(
                "Subscriptions are {subscriptions}%. Cancel 1 unused plan to save quickly."
            ),
        });
    }

    if tips.is_empty() {
        tips.push(Tip {
            icon: "✅",
            title: "Spending looks balanced",
            text: "Nice distribution across categories. Keep going and aim to increase savings slowly."
                .to_string(),
        });
    }

    tips.truncate(MAX_TIPS);
    tips
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buckets(rent: f64, food: f64, subscriptions: f64, investments: f64) -> SpendingBuckets {
        SpendingBuckets {
            rent,
            food,
            subscriptions,
            investments,
        }
    }

    fn titles(tips: &[Tip]) -> Vec<&str> {
        tips.iter().map(|t| t.title).collect()
    }

    #[test]
    fn high_housing_comes_first() {
        let tips = build_tips(&buckets(500.0, 100.0, 0.0, 0.0));
        assert_eq!(tips[0].title, "Housing looks high");
        assert!(tips[0].text.contains("83%"));
        // food is 17%, under its threshold
        assert_eq!(tips.len(), 1);
    }

    #[test]
    fn all_zero_gives_only_the_balanced_tip() {
        let tips = build_tips(&SpendingBuckets::default());
        assert_eq!(titles(&tips), ["Spending looks balanced"]);
    }

    #[test]
    fn rules_fire_independently_in_order() {
        // 45% / 30% / 10% / 15%
        let tips = build_tips(&buckets(450.0, 300.0, 100.0, 150.0));
        assert_eq!(
            titles(&tips),
            ["Housing looks high", "Food spend is high", "Trim subscriptions"]
        );
        assert!(tips[2].text.starts_with("Subscriptions are 10%"));
    }

    #[test]
    fn thresholds_are_inclusive_after_rounding() {
        // subscriptions 7.6% rounds to 8%
        let tips = build_tips(&buckets(0.0, 0.0, 76.0, 924.0));
        assert_eq!(titles(&tips), ["Trim subscriptions"]);

        // housing 39.4% rounds to 39%
        let tips = build_tips(&buckets(39.4, 0.0, 0.0, 60.6));
        assert_eq!(titles(&tips), ["Spending looks balanced"]);
    }

    #[test]
    fn investments_only_is_balanced() {
        let tips = build_tips(&buckets(0.0, 0.0, 0.0, 1000.0));
        assert_eq!(titles(&tips), ["Spending looks balanced"]);
    }

    #[test]
    fn buckets_match_categories_case_insensitively() {
        let totals = vec![
            CategoryTotal {
                category: "Housing".into(),
                amount: 900.0,
            },
            CategoryTotal {
                category: "FOOD".into(),
                amount: 200.0,
            },
            CategoryTotal {
                category: "food".into(),
                amount: 50.0,
            },
            CategoryTotal {
                category: "Subscriptions".into(),
                amount: 30.0,
            },
            CategoryTotal {
                category: "Transport".into(),
                amount: 75.0,
            },
        ];

        let buckets = SpendingBuckets::from_totals(&totals);
        assert_eq!(buckets.rent, 900.0);
        assert_eq!(buckets.food, 250.0);
        assert_eq!(buckets.subscriptions, 30.0);
        assert_eq!(buckets.investments, 0.0);
    }

    #[test]
    fn same_input_same_output() {
        let input = buckets(120.0, 80.0, 12.0, 40.0);
        assert_eq!(build_tips(&input), build_tips(&input));
    }
}
