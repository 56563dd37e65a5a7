use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use shared_types::Property;
use thaw::*;

use crate::booking::flow::BookingFlow;
use crate::booking::store::ServerFnStore;
use crate::catalog;
use crate::components::{BookingCalendar, BookingErrorBanner};

/// Placeholder guest identity; authentication is out of scope for this
/// flow.
const GUEST_USER_ID: &str = "00000000-0000-0000-0000-000000000000";

#[component]
pub fn PropertyDetailPage() -> impl IntoView {
    let params = use_params_map();

    let property = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|id| id.parse::<i32>().ok())
            .and_then(catalog::find)
    });

    view! {
        {move || match property.get() {
            Some(property) => view! { <PropertyDetail property/> }.into_any(),
            None => {
                view! {
                    <div class="property-detail property-detail--missing">
                        <p>"Property not found."</p>
                        <A href="/">"Back to listings"</A>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

#[component]
fn PropertyDetail(property: Property) -> impl IntoView {
    let navigate = use_navigate();
    let today = Utc::now().date_naive();
    let price = property.price;

    let flow = RwSignal::new(BookingFlow::new(
        ServerFnStore,
        property.id,
        GUEST_USER_ID,
        today,
    ));

    // Load existing reservations once the view is on screen.
    Effect::new(move |_| {
        spawn_local(async move {
            let mut f = flow.get_untracked();
            f.load_bookings().await;
            flow.set(f);
        });
    });

    let range = Signal::derive(move || flow.with(|f| f.range()));
    let bookings = Signal::derive(move || flow.with(|f| f.bookings().to_vec()));
    let error = Signal::derive(move || flow.with(|f| f.error().cloned()));
    let is_submitting = Signal::derive(move || flow.with(|f| f.is_submitting()));
    let nights = Signal::derive(move || flow.with(|f| f.nights()));
    let total = Signal::derive(move || flow.with(|f| f.total(price)));

    let on_pick = move |day| {
        flow.update(|f| {
            f.pick_date(day);
        });
    };

    let on_reserve = move |_| {
        let proceed = flow.try_update(|f| f.begin_submit()).unwrap_or(false);
        if !proceed {
            return;
        }
        spawn_local(async move {
            let mut f = flow.get_untracked();
            f.finish_submit().await;
            flow.set(f);
        });
    };

    view! {
        <div class="property-detail">
            <button
                class="property-detail__back"
                on:click=move |_| navigate("/", Default::default())
            >
                "\u{2190} Back to listings"
            </button>

            <div class="property-detail__heading">
                <h1 class="property-detail__title">{property.title.clone()}</h1>
                <div class="property-detail__meta">
                    <span class="property-detail__rating">
                        "\u{2605} " {property.rating} " rating"
                    </span>
                    <span class="property-detail__location">{property.location.clone()}</span>
                </div>
            </div>

            <div class="property-detail__media">
                <img src=property.image.clone() alt=property.title.clone()/>
            </div>

            <div class="property-detail__layout">
                <div class="property-detail__main">
                    <section class="property-detail__section">
                        <h2>"About this place"</h2>
                        <p class="property-detail__description">{property.description.clone()}</p>
                    </section>

                    <section class="property-detail__section">
                        <h2>"What this place offers"</h2>
                        <div class="property-detail__amenities">
                            {property
                                .amenities
                                .iter()
                                .map(|amenity| {
                                    view! {
                                        <div class="property-detail__amenity">{amenity.clone()}</div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </section>
                </div>

                <aside class="booking-card">
                    <div class="booking-card__header">
                        <p class="booking-card__price">
                            <span class="booking-card__price-amount">
                                {format!("${}", property.price)}
                            </span>
                            <span class="booking-card__price-unit">" / night"</span>
                        </p>
                        <span class="booking-card__rating">"\u{2605} " {property.rating}</span>
                    </div>

                    <BookingCalendar range bookings today on_pick/>

                    {move || {
                        range
                            .get()
                            .is_complete()
                            .then(|| {
                                view! {
                                    <div class="booking-card__quote">
                                        <div class="booking-card__quote-line">
                                            <span>
                                                {format!("${} x {} nights", price, nights.get())}
                                            </span>
                                            <span>{format!("${}", total.get())}</span>
                                        </div>
                                        <div class="booking-card__quote-total">
                                            <span>"Total"</span>
                                            <span>{format!("${}", total.get())}</span>
                                        </div>
                                    </div>
                                }
                            })
                    }}

                    <BookingErrorBanner error/>

                    <Button
                        appearance=ButtonAppearance::Primary
                        class="booking-card__reserve"
                        disabled=Signal::derive(move || {
                            is_submitting.get() || !range.get().is_complete()
                        })
                        on_click=on_reserve
                    >
                        {move || if is_submitting.get() { "Processing..." } else { "Reserve" }}
                    </Button>

                    <p class="booking-card__note">"You won't be charged yet"</p>
                </aside>
            </div>

            <section class="property-detail__host">
                <img
                    class="property-detail__host-avatar"
                    src=property.host.image.clone()
                    alt=property.host.name.clone()
                />
                <div>
                    <h3 class="property-detail__host-name">
                        {format!("Hosted by {}", property.host.name)}
                    </h3>
                    <div class="property-detail__host-meta">
                        <span>{property.host.rating} " rating"</span>
                        <span>{format!("Responds {}", property.host.response_time)}</span>
                    </div>
                </div>
            </section>
        </div>
    }
}
