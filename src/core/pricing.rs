//! Usage-based price estimation for the interactive pricing calculator.
//!
//! [`estimate`] is a pure function: the same [`UsageMetrics`] always produce
//! the same [`PriceQuote`]. Inputs are expected to come from the calculator's
//! sliders; nothing here validates bounds.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Contacts at or below this count use the entry base price.
const STARTER_CONTACT_LIMIT: u32 = 1_000;
/// Contacts at or below this count use the middle base price.
const PROFESSIONAL_CONTACT_LIMIT: u32 = 10_000;

const STARTER_BASE_PRICE: f64 = 29.0;
const PROFESSIONAL_BASE_PRICE: f64 = 99.0;
const ENTERPRISE_BASE_PRICE: f64 = 299.0;

/// Emails per month included before the volume surcharge applies.
const INCLUDED_EMAILS: u32 = 10_000;
const PRICE_PER_EXTRA_EMAIL: f64 = 0.001;

/// Campaigns per month included before the campaign surcharge applies.
const INCLUDED_CAMPAIGNS: u32 = 10;
const PRICE_PER_EXTRA_CAMPAIGN: f64 = 5.0;

/// Highest monthly price still recommended as Starter.
const STARTER_PRICE_CEILING: u32 = 50;
/// Highest monthly price still recommended as Professional.
const PROFESSIONAL_PRICE_CEILING: u32 = 150;

/// Error returned when a select value does not name a known option.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} option: {value:?}")]
pub struct ParseOptionError {
    pub kind: &'static str,
    pub value: String,
}

/// Depth of analytics requested by the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsDepth {
    #[default]
    #[display("Basic Analytics")]
    Basic,
    #[display("Advanced Analytics")]
    Advanced,
    #[display("Enterprise Analytics")]
    Enterprise,
}

impl AnalyticsDepth {
    pub const ALL: [AnalyticsDepth; 3] = [
        AnalyticsDepth::Basic,
        AnalyticsDepth::Advanced,
        AnalyticsDepth::Enterprise,
    ];

    /// Identifier used in select values and query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyticsDepth::Basic => "basic",
            AnalyticsDepth::Advanced => "advanced",
            AnalyticsDepth::Enterprise => "enterprise",
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            AnalyticsDepth::Basic => 1.0,
            AnalyticsDepth::Advanced => 1.3,
            AnalyticsDepth::Enterprise => 1.8,
        }
    }
}

impl FromStr for AnalyticsDepth {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|depth| depth.as_str() == s)
            .ok_or_else(|| ParseOptionError {
                kind: "analytics depth",
                value: s.to_string(),
            })
    }
}

/// Level of campaign automation requested by the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum AutomationLevel {
    #[display("No Automation")]
    None,
    #[default]
    #[display("Basic Automation")]
    Basic,
    #[display("Advanced Automation")]
    Advanced,
}

impl AutomationLevel {
    pub const ALL: [AutomationLevel; 3] = [
        AutomationLevel::None,
        AutomationLevel::Basic,
        AutomationLevel::Advanced,
    ];

    /// Identifier used in select values and query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            AutomationLevel::None => "none",
            AutomationLevel::Basic => "basic",
            AutomationLevel::Advanced => "advanced",
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            AutomationLevel::None => 0.8,
            AutomationLevel::Basic => 1.0,
            AutomationLevel::Advanced => 1.4,
        }
    }
}

impl FromStr for AutomationLevel {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ParseOptionError {
                kind: "automation level",
                value: s.to_string(),
            })
    }
}

/// Plan tier suggested for a computed monthly price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum RecommendedPlan {
    Starter,
    Professional,
    Enterprise,
}

impl RecommendedPlan {
    pub const ALL: [RecommendedPlan; 3] = [
        RecommendedPlan::Starter,
        RecommendedPlan::Professional,
        RecommendedPlan::Enterprise,
    ];
}

/// Inclusive range and step of one calculator slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderBounds {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl SliderBounds {
    pub const CONTACTS: SliderBounds = SliderBounds {
        min: 100,
        max: 50_000,
        step: 100,
    };
    pub const EMAILS_PER_MONTH: SliderBounds = SliderBounds {
        min: 1_000,
        max: 100_000,
        step: 1_000,
    };
    pub const CAMPAIGNS_PER_MONTH: SliderBounds = SliderBounds {
        min: 1,
        max: 50,
        step: 1,
    };

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }
}

/// Usage pattern of a prospective customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetrics {
    pub contacts: u32,
    pub emails_per_month: u32,
    pub campaigns_per_month: u32,
    pub analytics_depth: AnalyticsDepth,
    pub automation_level: AutomationLevel,
}

impl Default for UsageMetrics {
    fn default() -> Self {
        Self {
            contacts: 1_000,
            emails_per_month: 5_000,
            campaigns_per_month: 5,
            analytics_depth: AnalyticsDepth::Basic,
            automation_level: AutomationLevel::Basic,
        }
    }
}

/// Estimated monthly price with the plan it maps to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub monthly_price: u32,
    pub recommended_plan: RecommendedPlan,
    pub features: &'static [&'static str],
}

/// Base monthly price for a contact count
pub fn base_price(contacts: u32) -> f64 {
    if contacts <= STARTER_CONTACT_LIMIT {
        STARTER_BASE_PRICE
    } else if contacts <= PROFESSIONAL_CONTACT_LIMIT {
        PROFESSIONAL_BASE_PRICE
    } else {
        ENTERPRISE_BASE_PRICE
    }
}

/// Maps a monthly price to a plan.
///
/// Only the price is considered, so the result can differ from the tier
/// that produced the base price.
pub fn recommend_plan(monthly_price: u32) -> RecommendedPlan {
    if monthly_price <= STARTER_PRICE_CEILING {
        RecommendedPlan::Starter
    } else if monthly_price <= PROFESSIONAL_PRICE_CEILING {
        RecommendedPlan::Professional
    } else {
        RecommendedPlan::Enterprise
    }
}

/// Feature bullet points listed for a plan
pub fn plan_features(plan: RecommendedPlan) -> &'static [&'static str] {
    match plan {
        RecommendedPlan::Starter => &[
            "Up to 1,000 contacts",
            "Basic analytics",
            "Email campaigns",
            "24/7 support",
        ],
        RecommendedPlan::Professional => &[
            "Up to 10,000 contacts",
            "Advanced analytics",
            "AI-powered insights",
            "Automated campaigns",
            "Priority support",
        ],
        RecommendedPlan::Enterprise => &[
            "Unlimited contacts",
            "Custom AI models",
            "Advanced automation",
            "Dedicated account manager",
            "API access",
        ],
    }
}

/// Computes the monthly price for a usage pattern.
pub fn monthly_price(metrics: &UsageMetrics) -> u32 {
    let base = base_price(metrics.contacts);

    let mut additional = 0.0;
    additional += base * (metrics.analytics_depth.multiplier() - 1.0);
    additional += base * (metrics.automation_level.multiplier() - 1.0);

    if metrics.emails_per_month > INCLUDED_EMAILS {
        additional += f64::from(metrics.emails_per_month - INCLUDED_EMAILS) * PRICE_PER_EXTRA_EMAIL;
    }

    if metrics.campaigns_per_month > INCLUDED_CAMPAIGNS {
        additional +=
            f64::from(metrics.campaigns_per_month - INCLUDED_CAMPAIGNS) * PRICE_PER_EXTRA_CAMPAIGN;
    }

    // Half-up rounding; the total is always positive (lowest case is 29 * 0.8).
    (base + additional + 0.5).floor() as u32
}

/// Builds the full quote shown by the calculator.
pub fn estimate(metrics: &UsageMetrics) -> PriceQuote {
    let monthly_price = monthly_price(metrics);
    let recommended_plan = recommend_plan(monthly_price);

    PriceQuote {
        monthly_price,
        recommended_plan,
        features: plan_features(recommended_plan),
    }
}

/// Short display form used next to the sliders: `1.5K`, `2.0M`, `500`.
pub fn format_compact(value: u32) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", f64::from(value) / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", f64::from(value) / 1_000.0)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analytics_depth() {
        assert_eq!("basic".parse(), Ok(AnalyticsDepth::Basic));
        assert_eq!("advanced".parse(), Ok(AnalyticsDepth::Advanced));
        assert_eq!("enterprise".parse(), Ok(AnalyticsDepth::Enterprise));
    }

    #[test]
    fn test_parse_automation_level() {
        assert_eq!("none".parse(), Ok(AutomationLevel::None));
        assert_eq!("basic".parse(), Ok(AutomationLevel::Basic));
        assert_eq!("advanced".parse(), Ok(AutomationLevel::Advanced));
    }

    #[test]
    fn test_parse_unknown_option() {
        let err = "ultra".parse::<AnalyticsDepth>().unwrap_err();
        assert_eq!(err.kind, "analytics depth");
        assert_eq!(err.to_string(), "unknown analytics depth option: \"ultra\"");

        assert!("Basic".parse::<AutomationLevel>().is_err());
    }

    #[test]
    fn test_as_str_round_trips_through_from_str() {
        for depth in AnalyticsDepth::ALL {
            assert_eq!(depth.as_str().parse::<AnalyticsDepth>(), Ok(depth));
        }
        for level in AutomationLevel::ALL {
            assert_eq!(level.as_str().parse::<AutomationLevel>(), Ok(level));
        }
    }

    #[test]
    fn test_option_labels() {
        assert_eq!(AnalyticsDepth::Enterprise.to_string(), "Enterprise Analytics");
        assert_eq!(AutomationLevel::None.to_string(), "No Automation");
        assert_eq!(RecommendedPlan::Professional.to_string(), "Professional");
    }

    #[test]
    fn test_slider_bounds() {
        assert!(SliderBounds::CONTACTS.contains(100));
        assert!(SliderBounds::CONTACTS.contains(50_000));
        assert!(!SliderBounds::CONTACTS.contains(99));
        assert_eq!(SliderBounds::EMAILS_PER_MONTH.clamp(250_000), 100_000);
        assert_eq!(SliderBounds::CAMPAIGNS_PER_MONTH.clamp(0), 1);
        assert_eq!(SliderBounds::CAMPAIGNS_PER_MONTH.clamp(17), 17);
    }

    #[test]
    fn test_default_metrics_match_calculator_start() {
        let metrics = UsageMetrics::default();
        assert_eq!(metrics.contacts, 1_000);
        assert_eq!(metrics.emails_per_month, 5_000);
        assert_eq!(metrics.campaigns_per_month, 5);
        assert_eq!(metrics.analytics_depth, AnalyticsDepth::Basic);
        assert_eq!(metrics.automation_level, AutomationLevel::Basic);
        assert_eq!(monthly_price(&metrics), 29);
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(100), "100");
        assert_eq!(format_compact(999), "999");
        assert_eq!(format_compact(1_000), "1.0K");
        assert_eq!(format_compact(1_500), "1.5K");
        assert_eq!(format_compact(50_000), "50.0K");
        assert_eq!(format_compact(2_000_000), "2.0M");
    }

    #[test]
    fn test_quote_serializes_camel_case() {
        let quote = estimate(&UsageMetrics::default());
        let json = serde_json::to_value(&quote).unwrap();

        assert_eq!(json["monthlyPrice"], 29);
        assert_eq!(json["recommendedPlan"], "Starter");
        assert_eq!(json["features"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_metrics_deserialize_lowercase_options() {
        let metrics: UsageMetrics = serde_json::from_str(
            r#"{"contacts":2000,"emailsPerMonth":12000,"campaignsPerMonth":3,"analyticsDepth":"enterprise","automationLevel":"none"}"#,
        )
        .unwrap();

        assert_eq!(metrics.contacts, 2_000);
        assert_eq!(metrics.analytics_depth, AnalyticsDepth::Enterprise);
        assert_eq!(metrics.automation_level, AutomationLevel::None);
    }
}
