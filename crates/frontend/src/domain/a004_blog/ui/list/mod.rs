use crate::domain::a004_blog::api;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::link::Link;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::list_store::ListingStore;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_blog::dto::PAGE_SIZE;
use contracts::domain::a004_blog::BlogPost;
use contracts::shared::listing::FilterAction;
use contracts::shared::text::format_short_date;
use leptos::prelude::*;
use thaw::*;

#[component]
fn BlogCard(post: BlogPost, delay_ms: u32) -> impl IntoView {
    let target = if post.slug.is_empty() {
        post.id.as_str().to_string()
    } else {
        post.slug.clone()
    };
    let href = format!("/blog/{target}");

    view! {
        <Link href=href class="blog-card__link">
            <CardAnimated delay_ms=delay_ms class="blog-card">
                {post.featured_image.clone().map(|src| view! {
                    <img class="blog-card__image" src=src alt=post.title.clone() />
                })}
                <div class="blog-card__body">
                    {post.category.clone().map(|c| view! { <Badge variant="primary".to_string()>{c}</Badge> })}
                    <h3 class="blog-card__title">{post.title.clone()}</h3>
                    <p class="blog-card__excerpt">{post.excerpt.clone().unwrap_or_default()}</p>
                    <div class="blog-card__meta">
                        <span>{icon("user")}{post.author_name.clone().unwrap_or_else(|| "Beyond Taleem".to_string())}</span>
                        <span>{icon("calendar")}{format_short_date(post.created_at.as_deref())}</span>
                        <span>{icon("clock")}{format!("{} min read", post.read_time_minutes())}</span>
                    </div>
                </div>
            </CardAnimated>
        </Link>
    }
}

#[component]
pub fn BlogList() -> impl IntoView {
    let store = ListingStore::<BlogPost>::new(PAGE_SIZE);
    store.bind(api::fetch_page);

    view! {
        <PageFrame page_id="a004_blog--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Blog"
                subtitle="Guides and news on education in Pakistan".to_string()
            >
                <SearchInput
                    value=Signal::derive(move || store.filter.with(|f| f.search.clone()))
                    on_change=move |text: String| store.dispatch(FilterAction::SetSearch(text))
                    placeholder="Search articles..."
                />
            </PageHeader>

            <div class="page__content">
                {move || {
                    if store.loading.get() {
                        view! {
                            <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: 24px;">
                                <Spinner />
                            </Flex>
                        }.into_any()
                    } else if store.page.with(|p| p.items.is_empty()) {
                        view! {
                            <EmptyState title="No articles found">
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| store.dispatch(FilterAction::Clear)
                                >
                                    "Clear Filters"
                                </Button>
                            </EmptyState>
                        }.into_any()
                    } else {
                        view! {
                            <div class="card-grid">
                                {store
                                    .page
                                    .with(|p| p.items.clone())
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, post)| view! { <BlogCard post=post delay_ms=(i as u32) * 40 /> })
                                    .collect_view()}
                            </div>
                        }.into_any()
                    }
                }}

                <PaginationControls
                    pager=store.pager()
                    on_prev=move |_| store.prev_page()
                    on_next=move |_| store.next_page()
                />
            </div>
        </PageFrame>
    }
}
