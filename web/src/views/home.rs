use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::catalog;
use crate::components::PropertyCard;

#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();
    let search_query = RwSignal::new(String::new());

    let open_property = Callback::new(move |id: i32| {
        navigate(&format!("/property/{}", id), Default::default());
    });

    view! {
        <div class="hero">
            <div class="hero__overlay"></div>
            <div class="hero__content">
                <h1 class="hero__title">"Find Your Perfect Getaway"</h1>
                <div class="hero__search">
                    <div class="hero__search-input">
                        <Input placeholder="Search destinations..." value=search_query/>
                    </div>
                    <Button appearance=ButtonAppearance::Primary class="hero__search-button">
                        "Search"
                    </Button>
                </div>
            </div>
        </div>

        <div class="listing">
            <div class="listing__header">
                <h2 class="listing__title">"Featured Properties"</h2>
                <Button appearance=ButtonAppearance::Secondary>"Filters"</Button>
            </div>

            <div class="listing__grid">
                {catalog::properties()
                    .into_iter()
                    .map(|property| {
                        view! { <PropertyCard property on_select=open_property/> }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
