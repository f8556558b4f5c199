use leptos::{prelude::*, task::spawn_local};
use rusty_money::iso::Currency;
use storefront::{
    cards::ProductCard,
    cart::Cart,
    catalog::CatalogView,
    client::{CatalogSource, ContentClient},
    images::ImageUrlBuilder,
    notifications::Notifications,
    products::Product,
};

use crate::{
    cart::{CartSummaryPanel, add_to_cart},
    toasts::Toasts,
};

/// Mark a fetch as started, returning `false` if one is already in flight.
fn begin_fetch(catalog: RwSignal<CatalogView>) -> bool {
    let mut started = false;

    catalog.update(|view| started = view.begin_fetch());

    started
}

/// Fetch the catalog in the background and apply the outcome.
fn load_catalog(client: ContentClient, catalog: RwSignal<CatalogView>) {
    if !begin_fetch(catalog) {
        return;
    }

    spawn_local(async move {
        let outcome = client.fetch_products().await;

        if let Err(fetch_error) = &outcome {
            leptos::logging::error!("Error fetching products: {fetch_error}");
        }

        catalog.update(|view| view.apply(outcome));
    });
}

fn card_entries(
    view: &CatalogView,
    images: &ImageUrlBuilder,
    currency: &Currency,
) -> Vec<(ProductCard, Product)> {
    view.products()
        .iter()
        .map(|product| (ProductCard::new(product, images, currency), product.clone()))
        .collect()
}

#[component]
fn DiscountBadge(text: Option<String>) -> impl IntoView {
    text.map(|value| {
        view! { <p class="font-bold text-green-500">{value}</p> }
    })
}

#[component]
fn TagPills(tags: Vec<String>) -> impl IntoView {
    view! {
        <div class="mt-4 flex flex-wrap gap-2">
            {tags
                .into_iter()
                .map(|tag| {
                    view! {
                        <span class="rounded-full bg-gray-200 px-2 py-1 text-xs text-gray-600">
                            {tag}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn CatalogCard(
    card: ProductCard,
    product: Product,
    cart: RwSignal<Cart>,
    notifications: RwSignal<Notifications>,
) -> impl IntoView {
    let button_label = format!("Add {} ({}) to cart", card.title, card.price);

    let image = card.image.map(|image| {
        view! {
            <img src=image.src alt=image.alt class="h-48 w-full rounded-md object-cover" />
        }
    });

    view! {
        <div class="rounded-md bg-white p-4 shadow-md transition-shadow duration-300 hover:shadow-lg">
            {image}
            <div>
                <div class="mt-4">
                    <h2 class="text-lg font-semibold text-gray-800">{card.title}</h2>
                    <p class="text-sm text-gray-600">{card.description}</p>
                    <div class="mt-2 flex items-center justify-between">
                        <div>
                            <p class="font-bold text-slate-600">{card.price}</p>
                            <DiscountBadge text=card.discount_badge />
                        </div>
                    </div>
                </div>

                <TagPills tags=card.tags />

                <button
                    type="button"
                    aria-label=button_label
                    class="mt-4 w-full rounded-md bg-blue-500 px-4 py-2 text-white transition-colors duration-300 hover:bg-blue-600"
                    on:click=move |_| add_to_cart(cart, notifications, product.clone())
                >
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}

#[component]
fn FetchErrorNotice(catalog: RwSignal<CatalogView>, retry: Callback<()>) -> impl IntoView {
    move || {
        catalog.with(|view| view.error_message().map(ToString::to_string)).map(|message| {
            view! {
                <div class="mb-4 flex items-center justify-between rounded-md border border-red-200 bg-red-50 p-4">
                    <p class="text-sm text-red-700">
                        "Products could not be loaded: " {message}
                    </p>
                    <button
                        type="button"
                        class="rounded-md bg-red-600 px-3 py-1 text-sm text-white hover:bg-red-700"
                        on:click=move |_| retry.run(())
                    >
                        "Retry"
                    </button>
                </div>
            }
        })
    }
}

/// Product grid with add-to-cart actions and the cart summary.
///
/// Fetches the catalog once when mounted. A failed fetch leaves the grid as it
/// was and shows an inline message with a retry button.
#[component]
pub fn ProductCards(
    /// Client for the catalog to display.
    client: ContentClient,
) -> impl IntoView {
    let images = ImageUrlBuilder::new(client.config());
    let currency = client.config().currency;

    let catalog = RwSignal::new(CatalogView::new());
    let cart = RwSignal::new(Cart::new(currency));
    let notifications = RwSignal::new(Notifications::new());

    let client = StoredValue::new_local(client);
    let retry = Callback::new(move |()| load_catalog(client.get_value(), catalog));

    load_catalog(client.get_value(), catalog);

    view! {
        <div class="p-4">
            <h1 class="mb-4 text-center text-2xl font-bold text-gray-800">"Products"</h1>
            <FetchErrorNotice catalog=catalog retry=retry />
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4">
                {move || {
                    catalog
                        .with(|view| card_entries(view, &images, currency))
                        .into_iter()
                        .map(|(card, product)| {
                            view! {
                                <CatalogCard
                                    card=card
                                    product=product
                                    cart=cart
                                    notifications=notifications
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>
            <CartSummaryPanel cart=cart />
            <Toasts notifications=notifications />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::iso;
    use storefront::{client::FetchError, config::CatalogConfig, images::ImageRef};

    use super::*;

    fn images() -> ImageUrlBuilder {
        ImageUrlBuilder::new(&CatalogConfig::new("proj", "production", "2025-01-13"))
    }

    #[test]
    fn begin_fetch_allows_a_single_in_flight_fetch() {
        let catalog = RwSignal::new(CatalogView::new());

        assert!(begin_fetch(catalog));
        assert!(!begin_fetch(catalog));
    }

    #[test]
    fn begin_fetch_allowed_after_failure() {
        let catalog = RwSignal::new(CatalogView::new());

        begin_fetch(catalog);

        catalog.update(|view| {
            view.apply(Err(FetchError::Backend {
                status: 500,
                message: "boom".to_string(),
            }));
        });

        assert!(begin_fetch(catalog));
    }

    #[test]
    fn card_entries_pair_cards_with_products() {
        let mut lamp = Product::new("lamp", "Lamp", Decimal::from(45));

        lamp.image = Some(ImageRef::new("image-abc-800x600-jpg"));
        lamp.discount_percentage = Decimal::from(10);

        let mut view = CatalogView::new();

        view.apply(Ok(vec![Product::new("mug", "Mug", Decimal::from(10)), lamp]));

        let entries = card_entries(&view, &images(), iso::USD);

        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|(card, product)| card.key == product.id));

        let lamp_card = entries.get(1).map(|(card, _)| card);

        assert_eq!(
            lamp_card.and_then(|card| card.discount_badge.as_deref()),
            Some("10% OFF")
        );
        assert!(lamp_card.is_some_and(|card| card.image.is_some()));
        assert!(entries.first().is_some_and(|(card, _)| card.image.is_none()));
    }

    #[test]
    fn card_entries_empty_before_fetch() {
        let entries = card_entries(&CatalogView::new(), &images(), iso::USD);

        assert!(entries.is_empty());
    }
}
