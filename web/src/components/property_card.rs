use leptos::prelude::*;
use shared_types::Property;

#[component]
pub fn PropertyCard(property: Property, on_select: Callback<i32>) -> impl IntoView {
    let id = property.id;

    view! {
        <div class="property-card" on:click=move |_| on_select.run(id)>
            <div class="property-card__media">
                <img
                    class="property-card__image"
                    src=property.image.clone()
                    alt=property.title.clone()
                />
                <button
                    class="property-card__favorite"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        // Favorites are not part of this flow yet.
                    }
                >
                    "\u{2661}"
                </button>
            </div>

            <div class="property-card__body">
                <div class="property-card__headline">
                    <h3 class="property-card__title">{property.title.clone()}</h3>
                    <span class="property-card__rating">"\u{2605} " {property.rating}</span>
                </div>

                <p class="property-card__location">{property.location.clone()}</p>

                <div class="property-card__footer">
                    <p class="property-card__price">
                        <span class="property-card__price-amount">
                            {format!("${}", property.price)}
                        </span>
                        <span class="property-card__price-unit">" / night"</span>
                    </p>
                    <button
                        class="property-card__book"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_select.run(id);
                        }
                    >
                        "Book now"
                    </button>
                </div>
            </div>
        </div>
    }
}
