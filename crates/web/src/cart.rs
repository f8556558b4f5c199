use leptos::prelude::*;
use storefront::{cart::Cart, notifications::Notifications, products::Product};

use crate::toasts::notify;

/// Append `product` to the cart and queue its notification.
pub(crate) fn add_to_cart(
    cart: RwSignal<Cart>,
    notifications: RwSignal<Notifications>,
    product: Product,
) {
    let mut message = String::new();

    cart.update(|items| message = items.add(product));

    notify(notifications, message);
}

/// Cart summary panel shown below the product grid.
#[component]
pub(crate) fn CartSummaryPanel(cart: RwSignal<Cart>) -> impl IntoView {
    view! {
        <div class="mt-8 rounded-md bg-gray-100 p-4">
            <h3 class="text-lg font-semibold text-gray-800">"Cart Summary"</h3>
            <div class="mt-2">
                {move || match cart.with(Cart::summary) {
                    Ok(summary) => {
                        view! {
                            <p class="text-gray-600">{summary.items_line()}</p>
                            <p class="text-gray-600">{summary.price_line()}</p>
                        }
                            .into_any()
                    }
                    Err(error) => {
                        view! { <p class="text-red-600">{error.to_string()}</p> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
