//! Leptos application with routing.

use leptos::*;
use leptos_router::*;

use storefront_products::{CategoryFilter, Entity, Product};

use crate::frontend::api;
use crate::state::{CatalogBody, CatalogState, LoadState, NOT_FOUND_PLACEHOLDER};

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes>
                <Route path="/products" view=CatalogPage/>
            </Routes>
        </Router>
    }
}

/// Catalog page: one fetch on mount, then filtering is purely local.
#[component]
fn CatalogPage() -> impl IntoView {
    let state = create_rw_signal(CatalogState::new());
    let phase = create_memo(move |_| state.with(CatalogState::phase));

    spawn_local(async move {
        let result = api::fetch_products().await;
        state.update(|s| s.resolve(result));
    });

    view! {
        <div class="catalog">
            {move || match phase.get() {
                LoadState::Loading => view! { <Loading/> }.into_view(),
                LoadState::Error(message) => view! { <ErrorMessage message=message/> }.into_view(),
                LoadState::Success(()) => view! {
                    <CatalogControls state=state/>
                    <ProductGrid state=state/>
                }
                .into_view(),
            }}
        </div>
    }
}

/// Home link, search box and category buttons.
#[component]
fn CatalogControls(state: RwSignal<CatalogState>) -> impl IntoView {
    view! {
        <a href="/" rel="external">"<<< Home"</a>

        <div class="search">
            <input
                type="text"
                placeholder="Search products..."
                prop:value=move || state.with(|s| s.query().search.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.set_search(value));
                }
            />
        </div>

        <div class="categories">
            {CategoryFilter::choices()
                .into_iter()
                .map(|choice| {
                    let label = choice.label().to_string();
                    view! {
                        <button on:click=move |_| {
                            let choice = choice.clone();
                            state.update(|s| s.select_category(choice));
                        }>
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Grid of matching products, or the placeholder when nothing matches.
#[component]
fn ProductGrid(state: RwSignal<CatalogState>) -> impl IntoView {
    view! {
        <div class="grid">
            {move || match state.with(|s| s.body()) {
                CatalogBody::Grid(products) => products
                    .into_iter()
                    .map(|product| view! { <ProductCard product=product/> })
                    .collect_view(),
                _ => view! { <div class="not-found">{NOT_FOUND_PLACEHOLDER}</div> }.into_view(),
            }}
        </div>
    }
}

/// Links to the server-rendered detail page with a full page load.
#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let href = format!("/products/{}", product.id());
    let image = product.image().to_string();
    let title = product.title().to_string();
    let price = product.price().to_string();

    view! {
        <a href=href rel="external">
            <div class="card">
                <img src=image alt=title.clone()/>
                <h3>{title}</h3>
                <p>{price}</p>
            </div>
        </a>
    }
}

#[component]
fn Loading() -> impl IntoView {
    view! { <div class="loading">"Loading..."</div> }
}

#[component]
fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="error">
            <p>"Error: " {message}</p>
        </div>
    }
}
