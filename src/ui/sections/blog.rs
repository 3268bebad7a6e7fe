use leptos::prelude::*;

use crate::core::blog::{BlogCategory, BlogPost, featured_post, grid_posts};
use crate::ui::common::Container;
use crate::ui::icon::{Icon, icons};
use crate::ui::sections::newsletter::Newsletter;

#[component]
pub fn BlogSection() -> impl IntoView {
    let (category, set_category) = signal(BlogCategory::default());

    view! {
        <section id="blog" class="py-20 bg-gray-50">
            <Container>
                <div class="text-center mb-16 landing-scroll-animate">
                    <h2 class="text-4xl font-bold text-gray-900 mb-4">"Latest Insights & Resources"</h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "Stay ahead of the curve with our latest articles, tips, and insights on AI-powered marketing."
                    </p>
                </div>

                <div class="flex flex-wrap justify-center gap-4 mb-12" role="tablist">
                    {BlogCategory::ALL.into_iter().map(|c| {
                        let selected = move || category.get() == c;
                        view! {
                            <button
                                class="flex items-center space-x-2 px-4 py-2 rounded-lg transition-all duration-300"
                                class=("bg-purple-500 text-white shadow-lg", selected)
                                class=("bg-white text-gray-600 hover:bg-gray-100 border border-gray-200", move || !selected())
                                role="tab"
                                aria-selected=move || selected().to_string()
                                data-category=c.id()
                                on:click=move |_| set_category.set(c)
                            >
                                <Icon name=c.icon() class="w-4 h-4"/>
                                <span class="text-sm font-medium">{c.to_string()}</span>
                            </button>
                        }
                    }).collect_view()}
                </div>

                {move || featured_post(category.get()).map(|post| view! { <FeaturedPost post=*post/> })}

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {move || grid_posts(category.get()).into_iter().map(|post| view! {
                        <PostCard post=*post/>
                    }).collect_view()}
                </div>

                <div class="mt-16 bg-gradient-to-r from-purple-500 to-blue-500 rounded-2xl p-8 text-center text-white">
                    <h3 class="text-2xl font-bold mb-4">"Stay Updated with Our Latest Insights"</h3>
                    <p class="text-purple-100 mb-6 max-w-2xl mx-auto">
                        "Get the latest AI marketing tips, industry insights, and exclusive content delivered straight to your inbox."
                    </p>
                    <div class="max-w-md mx-auto">
                        <Newsletter/>
                    </div>
                </div>
            </Container>
        </section>
    }
}

#[component]
fn FeaturedPost(post: BlogPost) -> impl IntoView {
    view! {
        <div class="mb-12 bg-white rounded-2xl shadow-xl overflow-hidden landing-fade-in">
            <div class="grid lg:grid-cols-2 gap-0">
                <div class="relative h-64 lg:h-full">
                    <img src=post.image alt=post.title class="w-full h-full object-cover" loading="lazy"/>
                    <div class="absolute top-4 left-4">
                        <span class="bg-purple-500 text-white px-3 py-1 rounded-full text-sm font-medium">"Featured"</span>
                    </div>
                </div>
                <div class="p-8 flex flex-col justify-center">
                    <div class="flex items-center space-x-4 text-sm text-gray-500 mb-4">
                        <span class="bg-purple-100 text-purple-800 px-3 py-1 rounded-full text-xs font-medium">
                            {post.category.to_string()}
                        </span>
                        <PostMeta post=post icon_class="w-4 h-4"/>
                    </div>
                    <h3 class="text-2xl font-bold text-gray-900 mb-4">{post.title}</h3>
                    <p class="text-gray-600 mb-6 leading-relaxed">{post.excerpt}</p>
                    <div class="flex items-center justify-between">
                        <Author name=post.author size="w-8 h-8"/>
                        <a href="#blog" class="flex items-center space-x-2 text-purple-500 hover:text-purple-600 transition-colors">
                            <span class="text-sm font-medium">"Read More"</span>
                            <Icon name=icons::ARROW_RIGHT class="w-4 h-4"/>
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PostCard(post: BlogPost) -> impl IntoView {
    view! {
        <article class="bg-white rounded-2xl shadow-lg overflow-hidden hover:shadow-xl hover:-translate-y-1 transition-all duration-300 landing-fade-in">
            <div class="relative h-48">
                <img src=post.image alt=post.title class="w-full h-full object-cover" loading="lazy"/>
                <div class="absolute top-4 left-4">
                    <span class="bg-white/90 backdrop-blur-sm text-gray-700 px-3 py-1 rounded-full text-xs font-medium">
                        {post.category.to_string()}
                    </span>
                </div>
            </div>
            <div class="p-6">
                <div class="flex items-center space-x-4 text-xs text-gray-500 mb-3">
                    <PostMeta post=post icon_class="w-3 h-3"/>
                </div>
                <h3 class="text-lg font-bold text-gray-900 mb-3 line-clamp-2">{post.title}</h3>
                <p class="text-gray-600 text-sm mb-4 line-clamp-3">{post.excerpt}</p>
                <div class="flex items-center justify-between">
                    <Author name=post.author size="w-6 h-6"/>
                    <a href="#blog" class="flex items-center space-x-1 text-purple-500 hover:text-purple-600 transition-colors">
                        <span class="text-xs font-medium">"Read"</span>
                        <Icon name=icons::ARROW_RIGHT class="w-3 h-3"/>
                    </a>
                </div>
            </div>
        </article>
    }
}

/// Publication date and reading time
#[component]
fn PostMeta(post: BlogPost, icon_class: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-1">
            <Icon name=icons::CALENDAR class=icon_class/>
            <span>{post.display_date()}</span>
        </div>
        <div class="flex items-center space-x-1">
            <Icon name=icons::CLOCK class=icon_class/>
            <span>{post.read_time}</span>
        </div>
    }
}

#[component]
fn Author(name: &'static str, size: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <div class=format!("{} bg-gradient-to-r from-purple-500 to-blue-500 rounded-full flex items-center justify-center", size)>
                <Icon name=icons::USER class="w-3 h-3 text-white"/>
            </div>
            <span class="text-sm text-gray-600">{name}</span>
        </div>
    }
}
