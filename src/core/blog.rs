//! Blog teaser data and category filtering

use chrono::NaiveDate;
use derive_more::Display;

/// Blog category filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum BlogCategory {
    #[default]
    #[display("All Posts")]
    All,
    #[display("AI Marketing")]
    AiMarketing,
    #[display("Campaigns")]
    Campaigns,
    #[display("Analytics")]
    Analytics,
    #[display("Tips & Tricks")]
    Tips,
}

impl BlogCategory {
    pub const ALL: [BlogCategory; 5] = [
        BlogCategory::All,
        BlogCategory::AiMarketing,
        BlogCategory::Campaigns,
        BlogCategory::Analytics,
        BlogCategory::Tips,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            BlogCategory::All => "all",
            BlogCategory::AiMarketing => "ai-marketing",
            BlogCategory::Campaigns => "campaigns",
            BlogCategory::Analytics => "analytics",
            BlogCategory::Tips => "tips",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BlogCategory::All | BlogCategory::Tips => "book-open",
            BlogCategory::AiMarketing => "trending-up",
            BlogCategory::Campaigns => "video",
            BlogCategory::Analytics => "file-text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub author: &'static str,
    /// ISO date, `YYYY-MM-DD`
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: BlogCategory,
    pub image: &'static str,
    pub featured: bool,
}

impl BlogPost {
    /// Long-form date such as "January 15, 2024".
    ///
    /// Falls back to the raw string if it is not a valid ISO date.
    pub fn display_date(&self) -> String {
        format_post_date(self.date)
    }
}

pub fn format_post_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

const IMAGE_GROWTH: &str =
    "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400&h=250&fit=crop";
const IMAGE_DASHBOARD: &str =
    "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=400&h=250&fit=crop";

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        title: "10 AI-Powered Marketing Strategies That Actually Work",
        excerpt: "Discover the most effective AI marketing strategies that leading brands are using to increase their ROI and engagement rates.",
        author: "Sarah Johnson",
        date: "2024-01-15",
        read_time: "8 min read",
        category: BlogCategory::AiMarketing,
        image: IMAGE_GROWTH,
        featured: true,
    },
    BlogPost {
        id: 2,
        title: "How to Create Compelling Email Campaigns with AI",
        excerpt: "Learn how to leverage artificial intelligence to create personalized email campaigns that convert.",
        author: "Michael Chen",
        date: "2024-01-12",
        read_time: "6 min read",
        category: BlogCategory::Campaigns,
        image: IMAGE_DASHBOARD,
        featured: false,
    },
    BlogPost {
        id: 3,
        title: "Understanding Your Marketing Analytics: A Complete Guide",
        excerpt: "Master the art of reading and interpreting your marketing analytics to make data-driven decisions.",
        author: "Emily Rodriguez",
        date: "2024-01-10",
        read_time: "12 min read",
        category: BlogCategory::Analytics,
        image: IMAGE_DASHBOARD,
        featured: false,
    },
    BlogPost {
        id: 4,
        title: "5 Proven Ways to Increase Email Open Rates",
        excerpt: "Simple yet effective strategies to boost your email open rates and improve campaign performance.",
        author: "David Kim",
        date: "2024-01-08",
        read_time: "5 min read",
        category: BlogCategory::Tips,
        image: IMAGE_GROWTH,
        featured: false,
    },
    BlogPost {
        id: 5,
        title: "The Future of Marketing: AI and Automation Trends",
        excerpt: "Explore the latest trends in AI and automation that are shaping the future of digital marketing.",
        author: "Lisa Wang",
        date: "2024-01-05",
        read_time: "10 min read",
        category: BlogCategory::AiMarketing,
        image: IMAGE_DASHBOARD,
        featured: false,
    },
    BlogPost {
        id: 6,
        title: "Building Customer Personas with AI Insights",
        excerpt: "Learn how to create detailed customer personas using AI-powered analytics and behavioral data.",
        author: "Alex Thompson",
        date: "2024-01-03",
        read_time: "7 min read",
        category: BlogCategory::Analytics,
        image: IMAGE_GROWTH,
        featured: false,
    },
];

/// Post shown in the large card, only while no category is selected
pub fn featured_post(category: BlogCategory) -> Option<&'static BlogPost> {
    if category == BlogCategory::All {
        BLOG_POSTS.iter().find(|post| post.featured)
    } else {
        None
    }
}

/// Posts for the grid under the featured card.
///
/// With [`BlogCategory::All`] the featured post is left out because it is
/// already shown above the grid.
pub fn grid_posts(category: BlogCategory) -> Vec<&'static BlogPost> {
    BLOG_POSTS
        .iter()
        .filter(|post| match category {
            BlogCategory::All => !post.featured,
            other => post.category == other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_post_date() {
        assert_eq!(format_post_date("2024-01-15"), "January 15, 2024");
        assert_eq!(format_post_date("2024-01-03"), "January 3, 2024");
        assert_eq!(format_post_date("not a date"), "not a date");
    }

    #[test]
    fn test_all_category_shows_featured_separately() {
        let featured = featured_post(BlogCategory::All).unwrap();
        assert_eq!(featured.id, 1);

        let grid = grid_posts(BlogCategory::All);
        assert_eq!(grid.len(), BLOG_POSTS.len() - 1);
        assert!(grid.iter().all(|p| !p.featured));
    }

    #[test]
    fn test_category_includes_featured_post() {
        assert!(featured_post(BlogCategory::AiMarketing).is_none());

        let ids: Vec<_> = grid_posts(BlogCategory::AiMarketing)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 5]);
    }

    #[test]
    fn test_category_filters() {
        assert_eq!(grid_posts(BlogCategory::Campaigns).len(), 1);
        assert_eq!(grid_posts(BlogCategory::Analytics).len(), 2);
        assert_eq!(grid_posts(BlogCategory::Tips).len(), 1);
    }

    #[test]
    fn test_category_labels() {
        let labels: Vec<_> = BlogCategory::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            labels,
            vec!["All Posts", "AI Marketing", "Campaigns", "Analytics", "Tips & Tricks"]
        );
        assert_eq!(BlogCategory::AiMarketing.id(), "ai-marketing");
    }
}
