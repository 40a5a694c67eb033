use crate::domain::a004_blog::api::fetch_by_slug;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::link::Link;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a004_blog::{BlogPost, ShareTarget};
use contracts::shared::text::{format_count, format_long_date};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn current_page_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

#[component]
pub fn BlogDetail(slug: String) -> impl IntoView {
    let post = RwSignal::new(None::<BlogPost>);
    let loading = RwSignal::new(true);

    spawn_local(async move {
        match fetch_by_slug(&slug).await {
            Ok(p) => post.set(Some(p)),
            Err(e) => log::warn!("blog {slug} failed to load: {e}"),
        }
        loading.set(false);
    });

    view! {
        <PageFrame page_id="a004_blog--detail" category=PAGE_CAT_DETAIL>
            {move || {
                if loading.get() {
                    return view! {
                        <Flex gap=FlexGap::Small style="align-items: center; padding: 48px; justify-content: center;">
                            <Spinner />
                        </Flex>
                    }.into_any();
                }
                match post.get() {
                    Some(p) => view! { <Article post=p /> }.into_any(),
                    None => view! {
                        <EmptyState title="Article not found">
                            <Link href="/blog" class="button button--secondary">"Back to Blog"</Link>
                        </EmptyState>
                    }.into_any(),
                }
            }}
        </PageFrame>
    }
}

#[component]
fn Article(post: BlogPost) -> impl IntoView {
    let page_url = post
        .canonical_url
        .clone()
        .filter(|u| !u.is_empty())
        .unwrap_or_else(current_page_url);
    let published = post.created_at.as_deref().map(format_long_date);
    let updated = post
        .was_updated()
        .then(|| post.updated_at.as_deref().map(format_long_date))
        .flatten();

    let share_links = ShareTarget::all()
        .into_iter()
        .map(|target| {
            let href = target.share_url(&page_url, &post.title);
            let icon_name = target.display_name().to_lowercase();
            view! {
                <a class="share-bar__link" href=href target="_blank" rel="noopener noreferrer">
                    {icon(&icon_name)}
                    <span>{target.display_name()}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <article class="article">
            <Link href="/blog" class="page__back">
                {icon("arrow-left")}
                "Back to Blog"
            </Link>

            <header class="article__header">
                {post.category.clone().map(|c| view! { <Badge variant="primary".to_string()>{c}</Badge> })}
                <h1 class="article__title">{post.title.clone()}</h1>
                <div class="article__meta">
                    <span>{icon("user")}{post.author_name.clone().unwrap_or_else(|| "Beyond Taleem".to_string())}</span>
                    {published.map(|d| view! { <span>{icon("calendar")}{d}</span> })}
                    {updated.map(|d| view! { <span class="text-muted">{format!("Updated {d}")}</span> })}
                    <span>{icon("clock")}{format!("{} min read", post.read_time_minutes())}</span>
                    <span>{icon("eye")}{format!("{} views", format_count(post.views))}</span>
                </div>
            </header>

            {post.featured_image.clone().map(|src| view! {
                <img class="article__image" src=src alt=post.title.clone() />
            })}

            <div class="article__content" inner_html=post.content.clone()></div>

            {(!post.meta_keywords.is_empty()).then(|| view! {
                <div class="article__keywords">
                    {icon("tag")}
                    {post
                        .meta_keywords
                        .clone()
                        .into_iter()
                        .map(|k| view! { <Badge variant="outline".to_string()>{k}</Badge> })
                        .collect_view()}
                </div>
            })}

            <div class="share-bar">
                <span class="share-bar__label">{icon("share")}"Share this article"</span>
                {share_links}
            </div>
        </article>
    }
}
