use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

use crate::booking::BookingError;

/// Inline error banner for the booking card. Renders nothing while the
/// flow has no error.
#[component]
pub fn BookingErrorBanner(error: Signal<Option<BookingError>>) -> impl IntoView {
    view! {
        {move || {
            error.get().map(|err| {
                view! {
                    <div class="booking-card__error">
                        <MessageBar intent=MessageBarIntent::Error>
                            {err.to_string()}
                        </MessageBar>
                    </div>
                }
            })
        }}
    }
}
