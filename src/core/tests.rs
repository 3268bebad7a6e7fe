#[cfg(test)]
mod tests {
    use crate::core::{
        AnalyticsDepth, AutomationLevel, RecommendedPlan, UsageMetrics, base_price, estimate,
        monthly_price, plan_features, recommend_plan,
    };

    fn metrics(
        contacts: u32,
        emails_per_month: u32,
        campaigns_per_month: u32,
        analytics_depth: AnalyticsDepth,
        automation_level: AutomationLevel,
    ) -> UsageMetrics {
        UsageMetrics {
            contacts,
            emails_per_month,
            campaigns_per_month,
            analytics_depth,
            automation_level,
        }
    }

    #[test]
    fn test_small_account_without_surcharges() {
        let quote = estimate(&metrics(
            500,
            5_000,
            5,
            AnalyticsDepth::Basic,
            AutomationLevel::Basic,
        ));

        assert_eq!(quote.monthly_price, 29);
        assert_eq!(quote.recommended_plan, RecommendedPlan::Starter);
    }

    #[test]
    fn test_advanced_analytics_rounds_up() {
        // 29 + 29 * 0.3 = 37.7
        let quote = estimate(&metrics(
            1_000,
            5_000,
            5,
            AnalyticsDepth::Advanced,
            AutomationLevel::Basic,
        ));

        assert_eq!(quote.monthly_price, 38);
        assert_eq!(quote.recommended_plan, RecommendedPlan::Starter);
    }

    #[test]
    fn test_base_tier_depends_only_on_contacts() {
        assert_eq!(base_price(100), 29.0);
        assert_eq!(base_price(1_000), 29.0);
        assert_eq!(base_price(1_001), 99.0);
        assert_eq!(base_price(10_000), 99.0);
        assert_eq!(base_price(10_001), 299.0);
        assert_eq!(base_price(15_000), 299.0);

        let quote = estimate(&UsageMetrics {
            contacts: 15_000,
            ..UsageMetrics::default()
        });
        assert_eq!(quote.monthly_price, 299);
        assert_eq!(quote.recommended_plan, RecommendedPlan::Enterprise);
    }

    #[test]
    fn test_email_volume_surcharge() {
        // (50_000 - 10_000) * 0.001 = 40
        let quote = estimate(&UsageMetrics {
            emails_per_month: 50_000,
            ..UsageMetrics::default()
        });

        assert_eq!(quote.monthly_price, 69);
        assert_eq!(quote.recommended_plan, RecommendedPlan::Professional);
    }

    #[test]
    fn test_emails_at_threshold_are_free() {
        let at_threshold = UsageMetrics {
            emails_per_month: 10_000,
            ..UsageMetrics::default()
        };
        assert_eq!(monthly_price(&at_threshold), 29);

        let just_over = UsageMetrics {
            emails_per_month: 11_000,
            ..UsageMetrics::default()
        };
        // 29 + 1.0
        assert_eq!(monthly_price(&just_over), 30);
    }

    #[test]
    fn test_no_automation_reduces_price() {
        // 99 + 99 * -0.2 = 79.2
        let quote = estimate(&metrics(
            5_000,
            5_000,
            5,
            AnalyticsDepth::Basic,
            AutomationLevel::None,
        ));

        assert_eq!(quote.monthly_price, 79);
        assert_eq!(quote.recommended_plan, RecommendedPlan::Professional);
    }

    #[test]
    fn test_analytics_and_automation_combine() {
        // 299 + 299 * 0.8 + 299 * 0.4 = 657.8
        let price = monthly_price(&metrics(
            20_000,
            5_000,
            5,
            AnalyticsDepth::Enterprise,
            AutomationLevel::Advanced,
        ));

        assert_eq!(price, 658);
    }

    #[test]
    fn test_estimate_is_idempotent() {
        let input = metrics(
            7_300,
            64_000,
            23,
            AnalyticsDepth::Advanced,
            AutomationLevel::Advanced,
        );

        let first = estimate(&input);
        let second = estimate(&input);

        assert_eq!(first, second);
    }

    #[test]
    fn test_each_extra_campaign_adds_five() {
        let mut previous = monthly_price(&UsageMetrics {
            campaigns_per_month: 10,
            ..UsageMetrics::default()
        });
        assert_eq!(previous, 29);

        for campaigns in 11..=50 {
            let price = monthly_price(&UsageMetrics {
                campaigns_per_month: campaigns,
                ..UsageMetrics::default()
            });
            assert_eq!(price, previous + 5, "campaigns = {}", campaigns);
            previous = price;
        }
    }

    #[test]
    fn test_campaigns_up_to_ten_are_free() {
        for campaigns in 1..=10 {
            let price = monthly_price(&UsageMetrics {
                campaigns_per_month: campaigns,
                ..UsageMetrics::default()
            });
            assert_eq!(price, 29);
        }
    }

    #[test]
    fn test_features_always_match_recommended_plan() {
        let samples = [
            metrics(100, 1_000, 1, AnalyticsDepth::Basic, AutomationLevel::None),
            metrics(1_000, 50_000, 5, AnalyticsDepth::Basic, AutomationLevel::Basic),
            metrics(8_000, 20_000, 12, AnalyticsDepth::Advanced, AutomationLevel::Basic),
            metrics(50_000, 100_000, 50, AnalyticsDepth::Enterprise, AutomationLevel::Advanced),
        ];

        for input in samples {
            let quote = estimate(&input);
            assert_eq!(quote.features, plan_features(quote.recommended_plan));
        }
    }

    #[test]
    fn test_feature_table_sizes() {
        assert_eq!(plan_features(RecommendedPlan::Starter).len(), 4);
        assert_eq!(plan_features(RecommendedPlan::Professional).len(), 5);
        assert_eq!(plan_features(RecommendedPlan::Enterprise).len(), 5);
        assert_eq!(plan_features(RecommendedPlan::Starter)[0], "Up to 1,000 contacts");
        assert_eq!(plan_features(RecommendedPlan::Enterprise)[4], "API access");
    }

    #[test]
    fn test_plan_thresholds() {
        assert_eq!(recommend_plan(0), RecommendedPlan::Starter);
        assert_eq!(recommend_plan(50), RecommendedPlan::Starter);
        assert_eq!(recommend_plan(51), RecommendedPlan::Professional);
        assert_eq!(recommend_plan(150), RecommendedPlan::Professional);
        assert_eq!(recommend_plan(151), RecommendedPlan::Enterprise);
    }

    #[test]
    fn test_low_contact_base_can_recommend_enterprise() {
        // Starter-tier base (29) pushed past the Professional ceiling by
        // analytics, automation and campaigns: 29 + 23.2 + 11.6 + 200 = 263.8
        let quote = estimate(&metrics(
            500,
            5_000,
            50,
            AnalyticsDepth::Enterprise,
            AutomationLevel::Advanced,
        ));

        assert_eq!(base_price(500), 29.0);
        assert_eq!(quote.monthly_price, 264);
        assert_eq!(quote.recommended_plan, RecommendedPlan::Enterprise);
    }

    #[test]
    fn test_high_contact_base_can_stay_below_enterprise_plan() {
        // Professional-tier base with no automation: 99 * 0.8 = 79.2
        let quote = estimate(&metrics(
            10_000,
            1_000,
            1,
            AnalyticsDepth::Basic,
            AutomationLevel::None,
        ));

        assert_eq!(quote.monthly_price, 79);
        assert_eq!(quote.recommended_plan, RecommendedPlan::Professional);
    }

    #[test]
    fn test_out_of_range_input_is_deterministic() {
        let input = metrics(
            0,
            u32::MAX,
            1_000,
            AnalyticsDepth::Basic,
            AutomationLevel::Basic,
        );

        assert_eq!(estimate(&input), estimate(&input));
        assert_eq!(estimate(&input).recommended_plan, RecommendedPlan::Enterprise);
    }
}
