//! Landing page component
//!
//! Single scrolling page for the ADmyBRAND AI Suite:
//! - SEO meta tags and JSON-LD structured data
//! - Sticky navigation with in-page anchors
//! - Hero, features, demo, pricing with the cost estimator
//! - Testimonials, animation showcase, blog teasers and FAQ
//! - Footer with newsletter signup

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use serde_json::{Value, json};

use crate::core::content::{FEATURES, PRICING_PLANS, PRODUCT_NAME, SITE_URL, TAGLINE};
use crate::ui::sections::{
    AdvancedAnimations, BlogSection, DemoSection, Faq, Features, Footer, Hero, NavBar, Pricing,
    Testimonials,
};

const DESCRIPTION: &str = "AI-powered marketing suite for campaign creation, predictive analytics and automation. Plans from $29/month with a free 14-day trial.";

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="min-h-screen bg-white overflow-x-hidden">
            <NavBar />
            <main>
                <Hero />
                <Features />
                <DemoSection />
                <Pricing />
                <Testimonials />
                <AdvancedAnimations />
                <BlogSection />
                <Faq />
            </main>
            <Footer />
        </div>

        <LandingStyles />
        <ScrollAnimationScript />
    }
}

/// Schema.org description of the product and its plans
pub fn structured_data() -> Value {
    let offers: Vec<Value> = PRICING_PLANS
        .iter()
        .map(|plan| {
            json!({
                "@type": "Offer",
                "name": plan.name,
                "price": plan.price.trim_start_matches('$'),
                "priceCurrency": "USD",
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": PRODUCT_NAME,
        "applicationCategory": "BusinessApplication",
        "operatingSystem": "Web",
        "description": DESCRIPTION,
        "url": SITE_URL,
        "offers": offers,
        "featureList": FEATURES.iter().map(|f| f.title).collect::<Vec<_>>(),
    })
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    let title = format!("{} - {}", PRODUCT_NAME, TAGLINE);
    let image = format!("{}og-image.png", SITE_URL);

    view! {
        <Title text=title.clone() />

        <Meta name="description" content=DESCRIPTION />
        <Meta name="keywords" content="AI marketing, marketing automation, campaign builder, predictive analytics, email marketing, audience segmentation" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=SITE_URL />
        <Meta property="og:title" content=title.clone() />
        <Meta property="og:description" content=DESCRIPTION />
        <Meta property="og:image" content=image.clone() />

        // Twitter
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:title" content=title />
        <Meta property="twitter:description" content=DESCRIPTION />
        <Meta property="twitter:image" content=image />

        <Link rel="canonical" href=SITE_URL />
        <Link rel="icon" type_="image/svg+xml" href="/favicon.svg" />

        <script type="application/ld+json" inner_html=structured_data().to_string()></script>
    }
}

/// CSS for the landing page animations
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html { scroll-behavior: smooth; }

            /* Entrance */
            @keyframes landing-fade-in-up {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .landing-fade-in-up { animation: landing-fade-in-up 0.6s ease-out forwards; }

            @keyframes landing-fade-in {
                from { opacity: 0; }
                to { opacity: 1; }
            }
            .landing-fade-in { animation: landing-fade-in 0.5s ease-out both; }

            .landing-delay-200 { animation-delay: 0.2s; opacity: 0; }
            .landing-delay-400 { animation-delay: 0.4s; opacity: 0; }
            .landing-delay-600 { animation-delay: 0.6s; opacity: 0; }

            /* Scroll animations */
            .landing-scroll-animate {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }
            .landing-scroll-animate.visible { opacity: 1; transform: translateY(0); }

            /* Background blobs */
            @keyframes landing-drift {
                0%, 100% { transform: translate(0, 0) scale(1); }
                50% { transform: translate(100px, -50px) scale(1.2); }
            }
            .landing-drift { animation: landing-drift 20s ease-in-out infinite; }
            .landing-drift-reverse { animation: landing-drift 25s ease-in-out infinite reverse; }

            @keyframes landing-spin {
                to { transform: rotate(360deg); }
            }
            .landing-spin-slow { animation: landing-spin 20s linear infinite; }

            @keyframes landing-pulse-soft {
                0%, 100% { transform: scale(1); opacity: 0.3; }
                50% { transform: scale(1.2); opacity: 0.6; }
            }
            .landing-pulse-soft { animation: landing-pulse-soft 8s ease-in-out infinite; }

            /* Demo screens */
            @keyframes landing-grow {
                from { transform: scaleX(0); }
                to { transform: scaleX(1); }
            }
            .landing-grow { transform-origin: left; animation: landing-grow 1.5s ease-out both; }

            @keyframes landing-float {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(-5px); }
            }
            .landing-float { animation: landing-float 2s ease-in-out infinite; }

            @keyframes landing-blink {
                0%, 100% { opacity: 0.5; }
                50% { opacity: 1; }
            }
            .landing-blink { animation: landing-blink 2s ease-in-out infinite; }

            /* Animation showcase */
            @keyframes landing-wander {
                0%, 100% { transform: translate(0, 0); opacity: 0.3; }
                50% { transform: translate(40px, -60px); opacity: 1; }
            }
            .landing-wander { animation: landing-wander 4s ease-in-out infinite; }

            @keyframes landing-twinkle {
                0%, 100% { transform: scale(0); opacity: 0; }
                50% { transform: scale(1); opacity: 1; }
            }
            .landing-twinkle { animation: landing-twinkle 3s ease-in-out infinite; }

            .landing-morph { box-shadow: 0 0 40px rgba(34, 211, 238, 0.4); }
            .landing-triangle { clip-path: polygon(50% 0%, 0% 100%, 100% 100%); }

            @media (prefers-reduced-motion: reduce) {
                html { scroll-behavior: auto; }
                [class*="landing-"] { animation: none !important; transition: none !important; }
                .landing-scroll-animate, .landing-delay-200, .landing-delay-400, .landing-delay-600 {
                    opacity: 1;
                    transform: none;
                }
            }
            "#
        </style>
    }
}

/// Script for scroll-triggered animations using IntersectionObserver
#[component]
fn ScrollAnimationScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initScrollAnimations() {
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    document.querySelectorAll('.landing-scroll-animate').forEach(el => {
                        observer.observe(el);
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollAnimations);
                } else {
                    initScrollAnimations();
                }
            })();
            "#
        </script>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_data_lists_every_plan() {
        let data = structured_data();
        assert_eq!(data["@type"], "SoftwareApplication");
        assert_eq!(data["name"], PRODUCT_NAME);

        let offers = data["offers"].as_array().unwrap();
        assert_eq!(offers.len(), PRICING_PLANS.len());
        assert_eq!(offers[0]["price"], "29");
        assert_eq!(offers[1]["name"], "Pro");
    }

    #[test]
    fn test_structured_data_features() {
        let data = structured_data();
        let features = data["featureList"].as_array().unwrap();
        assert_eq!(features.len(), FEATURES.len());
    }
}
