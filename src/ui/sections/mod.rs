//! Landing page sections, in page order

mod advanced_animations;
mod blog;
mod demo_video;
mod faq;
mod features;
mod footer;
mod hero;
mod nav;
mod newsletter;
mod pricing;
mod pricing_calculator;
mod testimonials;
mod video_modal;

pub use advanced_animations::AdvancedAnimations;
pub use blog::BlogSection;
pub use demo_video::{DemoSection, DemoVideo};
pub use faq::Faq;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::{Logo, NavBar};
pub use newsletter::Newsletter;
pub use pricing::Pricing;
pub use pricing_calculator::PricingCalculator;
pub use testimonials::Testimonials;
pub use video_modal::VideoModal;
