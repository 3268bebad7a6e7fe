//! Static copy and data tables rendered by the landing page sections.

pub const BRAND_NAME: &str = "ADmyBRAND";
pub const PRODUCT_NAME: &str = "ADmyBRAND AI Suite";
pub const COPYRIGHT_YEAR: u16 = 2024;
pub const SITE_URL: &str = "https://admybrand.com/";
pub const TAGLINE: &str = "Transform Your Marketing with AI";

/// In-page section anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
    /// Whether the section is linked from the navigation bar
    pub in_nav: bool,
}

impl Section {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Sections in the order they appear on the page
pub const PAGE_SECTIONS: &[Section] = &[
    Section { id: "hero", label: "Home", in_nav: false },
    Section { id: "features", label: "Features", in_nav: true },
    Section { id: "demo", label: "Demo", in_nav: false },
    Section { id: "pricing", label: "Pricing", in_nav: true },
    Section { id: "testimonials", label: "Testimonials", in_nav: true },
    Section { id: "showcase", label: "Showcase", in_nav: false },
    Section { id: "blog", label: "Blog", in_nav: false },
    Section { id: "faq", label: "FAQ", in_nav: true },
];

pub fn nav_sections() -> impl Iterator<Item = &'static Section> {
    PAGE_SECTIONS.iter().filter(|section| section.in_nav)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroStat {
    pub icon: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[HeroStat] = &[
    HeroStat { icon: "users", value: "10K+", label: "Users" },
    HeroStat { icon: "star", value: "98%", label: "Satisfaction" },
    HeroStat { icon: "headphones", value: "24/7", label: "Support" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Gradient utility classes for the icon tile
    pub accent: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "brain",
        title: "AI-Powered Analytics",
        description: "Advanced machine learning algorithms analyze your marketing data to provide actionable insights and predictions.",
        accent: "from-purple-500 to-pink-500",
    },
    Feature {
        icon: "bar-chart",
        title: "Real-time Performance",
        description: "Monitor your campaigns in real-time with comprehensive dashboards and detailed performance metrics.",
        accent: "from-blue-500 to-cyan-500",
    },
    Feature {
        icon: "target",
        title: "Smart Targeting",
        description: "Reach your ideal audience with AI-driven targeting that adapts and optimizes based on performance.",
        accent: "from-green-500 to-emerald-500",
    },
    Feature {
        icon: "users",
        title: "Customer Segmentation",
        description: "Automatically segment your audience and create personalized campaigns that drive engagement.",
        accent: "from-orange-500 to-red-500",
    },
    Feature {
        icon: "zap",
        title: "Automated Workflows",
        description: "Set up intelligent automation workflows that save time and increase your marketing efficiency.",
        accent: "from-yellow-500 to-orange-500",
    },
    Feature {
        icon: "shield",
        title: "Enterprise Security",
        description: "Bank-level security with SOC 2 compliance, ensuring your data is always protected and secure.",
        accent: "from-indigo-500 to-purple-500",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
    pub accent: &'static str,
}

impl PricingPlan {
    pub fn cta_label(&self) -> &'static str {
        if self.popular {
            "Start Free Trial"
        } else {
            "Get Started"
        }
    }
}

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Basic",
        price: "$29",
        period: "/month",
        description: "Perfect for small businesses getting started with AI marketing.",
        features: &[
            "AI-powered campaign creation",
            "Basic analytics dashboard",
            "Email support",
            "Up to 5 campaigns",
            "Standard templates",
            "Mobile app access",
        ],
        popular: false,
        accent: "from-blue-500 to-cyan-500",
    },
    PricingPlan {
        name: "Pro",
        price: "$99",
        period: "/month",
        description: "Advanced features for growing businesses and marketing teams.",
        features: &[
            "Everything in Basic",
            "Advanced AI analytics",
            "Priority support",
            "Unlimited campaigns",
            "Custom templates",
            "Team collaboration",
            "A/B testing tools",
            "API access",
        ],
        popular: true,
        accent: "from-purple-500 to-pink-500",
    },
    PricingPlan {
        name: "Enterprise",
        price: "$299",
        period: "/month",
        description: "Full-featured solution for large organizations and agencies.",
        features: &[
            "Everything in Pro",
            "Custom AI models",
            "Dedicated account manager",
            "White-label solutions",
            "Advanced security",
            "Custom integrations",
            "Training & onboarding",
            "SLA guarantees",
        ],
        popular: false,
        accent: "from-indigo-500 to-purple-500",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub rating: u8,
    pub quote: &'static str,
    pub avatar: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "Marketing Director",
        company: "TechFlow Inc.",
        rating: 5,
        quote: "ADmyBRAND AI Suite transformed our marketing strategy. The AI insights helped us increase our conversion rates by 300% in just 3 months.",
        avatar: "👩‍💼",
    },
    Testimonial {
        name: "Michael Chen",
        role: "CEO",
        company: "StartupXYZ",
        rating: 5,
        quote: "The automation features saved us countless hours. Our team can now focus on creative work while AI handles the optimization.",
        avatar: "👨‍💼",
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Digital Marketing Manager",
        company: "GrowthCo",
        rating: 5,
        quote: "The customer segmentation and targeting capabilities are incredible. We've never seen such precise audience targeting before.",
        avatar: "👩‍💻",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "How does ADmyBRAND AI Suite work?",
        answer: "ADmyBRAND AI Suite uses advanced machine learning algorithms to analyze your marketing data, identify patterns, and provide actionable insights. It automates campaign creation, optimizes targeting, and continuously learns from your results to improve performance over time.",
    },
    FaqEntry {
        question: "What makes this different from other marketing tools?",
        answer: "Unlike traditional marketing tools, ADmyBRAND AI Suite provides true AI-powered insights and automation. It doesn't just collect data. It analyzes it in real-time, predicts trends, and automatically optimizes your campaigns for maximum ROI. Our AI continuously learns and adapts to your specific business needs.",
    },
    FaqEntry {
        question: "How long does it take to see results?",
        answer: "Most customers see measurable improvements within the first 30 days. Our AI begins learning from your data immediately and starts providing optimization recommendations within the first week. For best results, we recommend running campaigns for at least 3 months to allow the AI to fully understand your audience and optimize accordingly.",
    },
    FaqEntry {
        question: "Is my data secure with ADmyBRAND AI Suite?",
        answer: "Absolutely. We take data security seriously and are SOC 2 compliant. All data is encrypted in transit and at rest, and we never share your information with third parties. Our platform uses enterprise-grade security measures to protect your sensitive marketing data and customer information.",
    },
    FaqEntry {
        question: "Can I integrate with my existing marketing tools?",
        answer: "Yes! ADmyBRAND AI Suite integrates with all major marketing platforms including Google Ads, Facebook Ads, LinkedIn Ads, Mailchimp, HubSpot, and more. Our API also allows for custom integrations with your existing tools and workflows.",
    },
    FaqEntry {
        question: "What kind of support do you provide?",
        answer: "We offer comprehensive support including 24/7 email support, live chat during business hours, and dedicated account managers for Pro and Enterprise plans. We also provide onboarding sessions, training materials, and regular check-ins to ensure you're getting the most from our platform.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub name: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLinkGroup {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

pub const FOOTER_LINK_GROUPS: &[FooterLinkGroup] = &[
    FooterLinkGroup {
        title: "Product",
        links: &[
            FooterLink { name: "Features", href: "#features" },
            FooterLink { name: "Pricing", href: "#pricing" },
            FooterLink { name: "Testimonials", href: "#testimonials" },
            FooterLink { name: "FAQ", href: "#faq" },
        ],
    },
    FooterLinkGroup {
        title: "Company",
        links: &[
            FooterLink { name: "About Us", href: "#" },
            FooterLink { name: "Careers", href: "#" },
            FooterLink { name: "Blog", href: "#blog" },
            FooterLink { name: "Press", href: "#" },
        ],
    },
    FooterLinkGroup {
        title: "Support",
        links: &[
            FooterLink { name: "Help Center", href: "#" },
            FooterLink { name: "Contact Us", href: "#" },
            FooterLink { name: "API Documentation", href: "#" },
            FooterLink { name: "Status", href: "#" },
        ],
    },
    FooterLinkGroup {
        title: "Legal",
        links: &[
            FooterLink { name: "Privacy Policy", href: "#" },
            FooterLink { name: "Terms of Service", href: "#" },
            FooterLink { name: "Cookie Policy", href: "#" },
            FooterLink { name: "GDPR", href: "#" },
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl SocialLink {
    /// Single-letter mark shown inside the social tile
    pub fn initial(&self) -> char {
        self.label.chars().next().unwrap_or('?')
    }
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Facebook", href: "#" },
    SocialLink { label: "Twitter", href: "#" },
    SocialLink { label: "Instagram", href: "#" },
    SocialLink { label: "LinkedIn", href: "#" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub icon: &'static str,
    pub text: &'static str,
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail { icon: "mail", text: "support@admybrand.com" },
    ContactDetail { icon: "phone", text: "+1 (555) 123-4567" },
    ContactDetail { icon: "map-pin", text: "San Francisco, CA" },
];

/// Which mock screen a demo step shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoScene {
    Dashboard,
    Analytics,
    Campaign,
    Performance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoStep {
    pub title: &'static str,
    pub description: &'static str,
    pub duration_ms: u64,
    pub scene: DemoScene,
}

pub const DEMO_STEPS: &[DemoStep] = &[
    DemoStep {
        title: "Dashboard Overview",
        description: "Get a bird's eye view of all your marketing campaigns",
        duration_ms: 3_000,
        scene: DemoScene::Dashboard,
    },
    DemoStep {
        title: "AI Analytics",
        description: "Watch our AI analyze your data in real-time",
        duration_ms: 4_000,
        scene: DemoScene::Analytics,
    },
    DemoStep {
        title: "Campaign Creation",
        description: "Create stunning campaigns with our drag-and-drop editor",
        duration_ms: 3_500,
        scene: DemoScene::Campaign,
    },
    DemoStep {
        title: "Performance Tracking",
        description: "Monitor your campaign performance with detailed insights",
        duration_ms: 3_000,
        scene: DemoScene::Performance,
    },
];

/// Dashboard tiles shown inside the demo video modal
pub const MODAL_HIGHLIGHTS: &[(&str, &str, &str)] = &[
    ("bar-chart", "Analytics", "from-blue-500 to-cyan-500"),
    ("target", "Targeting", "from-purple-500 to-pink-500"),
    ("users", "Audience", "from-green-500 to-emerald-500"),
    ("zap", "Automation", "from-orange-500 to-red-500"),
];

pub const MODAL_STATS: &[(&str, &str)] = &[
    ("98%", "Success Rate"),
    ("3.2x", "ROI Increase"),
    ("24/7", "AI Monitoring"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    FloatingElements,
    MorphingShapes,
    ParticleSystem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationShowcase {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: AnimationKind,
}

pub const ANIMATION_SHOWCASES: &[AnimationShowcase] = &[
    AnimationShowcase {
        name: "Floating Elements",
        description: "Interactive floating particles with physics simulation",
        kind: AnimationKind::FloatingElements,
    },
    AnimationShowcase {
        name: "Morphing Shapes",
        description: "Smooth shape transitions with spring physics",
        kind: AnimationKind::MorphingShapes,
    },
    AnimationShowcase {
        name: "Particle System",
        description: "Dynamic particle system with mouse interaction",
        kind: AnimationKind::ParticleSystem,
    },
];

/// Milliseconds between showcase changes while autoplay is on
pub const SHOWCASE_INTERVAL_MS: u64 = 4_000;
/// Milliseconds between shape changes in the morphing showcase
pub const SHAPE_INTERVAL_MS: u64 = 2_000;

pub const SHOWCASE_HIGHLIGHTS: &[(&str, &str, &str)] = &[
    ("sparkles", "Physics-Based", "Realistic physics simulation with spring and damping effects"),
    ("zap", "Performance Optimized", "Smooth 60fps animations with efficient rendering"),
    ("target", "Interactive", "Mouse and touch interactions with responsive feedback"),
];

/// Position and timing of one decorative particle, in percent and seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub left: f64,
    pub top: f64,
    pub duration: f64,
    pub delay: f64,
}

/// Lays out `count` particles from their index alone.
///
/// Server and browser must render identical markup during hydration, so the
/// scatter comes from an integer hash instead of a random source.
pub fn scatter_particles(count: usize, seed: u32) -> Vec<Particle> {
    (0..count as u32)
        .map(|i| {
            let a = mix(i.wrapping_mul(2).wrapping_add(seed));
            let b = mix(i.wrapping_mul(2).wrapping_add(1).wrapping_add(seed));
            Particle {
                left: f64::from(a % 10_000) / 100.0,
                top: f64::from(b % 10_000) / 100.0,
                duration: 3.0 + f64::from(a % 200) / 100.0,
                delay: f64::from(b % 200) / 100.0,
            }
        })
        .collect()
}

fn mix(mut x: u32) -> u32 {
    x ^= x >> 16;
    x = x.wrapping_mul(0x7feb_352d);
    x ^= x >> 15;
    x = x.wrapping_mul(0x846c_a68b);
    x ^= x >> 16;
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_sections_keep_anchor_order() {
        let ids: Vec<_> = PAGE_SECTIONS.iter().map(|s| s.id).collect();
        let anchors = ["hero", "features", "pricing", "testimonials", "faq"];

        let positions: Vec<_> = anchors
            .iter()
            .map(|a| ids.iter().position(|id| id == a).expect("anchor missing"))
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_nav_sections() {
        let labels: Vec<_> = nav_sections().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Features", "Pricing", "Testimonials", "FAQ"]);
        assert_eq!(PAGE_SECTIONS[1].href(), "#features");
    }

    #[test]
    fn test_section_ids_are_unique() {
        let mut ids: Vec<_> = PAGE_SECTIONS.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PAGE_SECTIONS.len());
    }

    #[test]
    fn test_content_table_sizes() {
        assert_eq!(HERO_STATS.len(), 3);
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(PRICING_PLANS.len(), 3);
        assert_eq!(TESTIMONIALS.len(), 3);
        assert_eq!(FAQS.len(), 6);
        assert_eq!(FOOTER_LINK_GROUPS.len(), 4);
        assert_eq!(DEMO_STEPS.len(), 4);
        assert_eq!(ANIMATION_SHOWCASES.len(), 3);
    }

    #[test]
    fn test_exactly_one_popular_plan() {
        let popular: Vec<_> = PRICING_PLANS.iter().filter(|p| p.popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].name, "Pro");
        assert_eq!(popular[0].cta_label(), "Start Free Trial");
        assert_eq!(PRICING_PLANS[0].cta_label(), "Get Started");
    }

    #[test]
    fn test_footer_product_links_point_at_sections() {
        let product = &FOOTER_LINK_GROUPS[0];
        for link in product.links {
            let id = link.href.trim_start_matches('#');
            assert!(PAGE_SECTIONS.iter().any(|s| s.id == id), "{}", link.href);
        }
    }

    #[test]
    fn test_social_initials() {
        let initials: String = SOCIAL_LINKS.iter().map(|s| s.initial()).collect();
        assert_eq!(initials, "FTIL");
    }

    #[test]
    fn test_demo_step_durations() {
        let total: u64 = DEMO_STEPS.iter().map(|s| s.duration_ms).sum();
        assert_eq!(total, 13_500);
    }

    #[test]
    fn test_particles_are_deterministic_and_in_bounds() {
        let first = scatter_particles(30, 7);
        let second = scatter_particles(30, 7);
        assert_eq!(first, second);
        assert_eq!(first.len(), 30);

        for p in &first {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((3.0..5.0).contains(&p.duration));
            assert!((0.0..2.0).contains(&p.delay));
        }

        assert_ne!(scatter_particles(5, 1), scatter_particles(5, 2));
    }
}
