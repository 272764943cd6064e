use serde::{Deserialize, Serialize};

use crate::section_config;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    pub price: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub badge: String,
    pub features: Vec<String>,
    pub cta_text: String,
    pub cta_href: String,
    #[serde(default)]
    pub popular: bool,
}

impl Plan {
    pub fn has_badge(&self) -> bool {
        !self.badge.trim().is_empty()
    }
}

struct PlanDefaults {
    name: &'static str,
    price: &'static str,
    description: &'static str,
    badge: &'static str,
    features: &'static [&'static str],
    cta_text: &'static str,
    cta_href: &'static str,
    popular: bool,
}

const PERIOD: &str = "/month";

const PLANS: &[PlanDefaults] = &[
    PlanDefaults {
        name: "Starter",
        price: "$29",
        description: "Perfect for individuals and small projects",
        badge: "",
        features: &[
            "Up to 5 projects",
            "10GB storage",
            "Basic analytics",
            "Email support",
            "Standard templates",
        ],
        cta_text: "Get Started",
        cta_href: "/signup/starter",
        popular: false,
    },
    PlanDefaults {
        name: "Pro",
        price: "$79",
        description: "Ideal for growing teams and businesses",
        badge: "Most Popular",
        features: &[
            "Unlimited projects",
            "100GB storage",
            "Advanced analytics",
            "Priority support",
            "Premium templates",
            "API access",
            "Team collaboration",
        ],
        cta_text: "Upgrade to Pro",
        cta_href: "/signup/pro",
        popular: true,
    },
    PlanDefaults {
        name: "Enterprise",
        price: "$199",
        description: "For large organizations with advanced needs",
        badge: "Enterprise",
        features: &[
            "Unlimited everything",
            "1TB storage",
            "Custom analytics",
            "24/7 phone support",
            "Custom templates",
            "Full API access",
            "Advanced security",
            "Dedicated manager",
        ],
        cta_text: "Contact Sales",
        cta_href: "/contact/enterprise",
        popular: false,
    },
];

fn default_plans() -> Vec<Plan> {
    PLANS
        .iter()
        .map(|p| Plan {
            name: p.name.into(),
            price: p.price.into(),
            period: PERIOD.into(),
            description: p.description.into(),
            badge: p.badge.into(),
            features: p.features.iter().map(|f| f.to_string()).collect(),
            cta_text: p.cta_text.into(),
            cta_href: p.cta_href.into(),
            popular: p.popular,
        })
        .collect()
}

section_config! {
    pub struct PricingConfig / PricingOverrides {
        title: String = "Choose Your Plan".into(),
        subtitle: String = "Unlock the power of the future with our cutting-edge pricing tiers".into(),
        plans: Vec<Plan> = default_plans(),
        footnote: String = "All plans include a 14-day free trial. No credit card required.".into(),
    }
}

/// Icon for the plan at `index`: star, bolt, crown, then star again.
pub fn plan_icon(index: usize) -> &'static str {
    match index {
        1 => "⚡",
        2 => "👑",
        _ => "⭐",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_icon_falls_back_to_star() {
        assert_eq!(plan_icon(0), "⭐");
        assert_eq!(plan_icon(1), "⚡");
        assert_eq!(plan_icon(2), "👑");
        assert_eq!(plan_icon(7), "⭐");
    }

    #[test]
    fn test_default_plans_single_popular() {
        let plans = default_plans();
        assert_eq!(plans.iter().filter(|p| p.popular).count(), 1);
        assert!(!plans[0].has_badge());
        assert!(plans[1].has_badge());
    }
}
