#[cfg(target_arch = "wasm32")]
use std::time::Duration;

use leptos::prelude::*;
use storefront::notifications::{NotificationId, Notifications};

#[cfg(target_arch = "wasm32")]
const TOAST_LIFETIME: Duration = Duration::from_secs(3);

/// Queue a toast and schedule its dismissal.
pub(crate) fn notify(notifications: RwSignal<Notifications>, message: String) {
    let mut queued = None;

    notifications.update(|queue| queued = Some(queue.push(message)));

    if let Some(id) = queued {
        schedule_dismiss(notifications, id);
    }
}

fn dismiss(notifications: RwSignal<Notifications>, id: NotificationId) {
    notifications.update(|queue| queue.dismiss(id));
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(notifications: RwSignal<Notifications>, id: NotificationId) {
    set_timeout(move || dismiss(notifications, id), TOAST_LIFETIME);
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_notifications: RwSignal<Notifications>, _id: NotificationId) {}

/// Stack of transient notifications, newest at the bottom.
#[component]
pub(crate) fn Toasts(notifications: RwSignal<Notifications>) -> impl IntoView {
    view! {
        <div
            class="pointer-events-none fixed bottom-4 right-4 z-50 flex flex-col gap-2"
            role="status"
            aria-live="polite"
            aria-atomic="false"
        >
            {move || {
                notifications
                    .with(|queue| queue.iter().cloned().collect::<Vec<_>>())
                    .into_iter()
                    .map(|notification| {
                        let id = notification.id;

                        view! {
                            <div class="pointer-events-auto flex items-center gap-3 rounded-md bg-gray-800 px-4 py-2 text-sm text-white shadow-lg">
                                <span>{notification.message}</span>
                                <button
                                    type="button"
                                    class="text-gray-300 hover:text-white"
                                    aria-label="Dismiss notification"
                                    on:click=move |_| dismiss(notifications, id)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
