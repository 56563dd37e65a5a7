use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo">
                        "Wanderstay"
                    </A>
                </div>

                <div class="navbar__links">
                    <a href="#" class="navbar__link">
                        "Become a Host"
                    </a>
                    <a href="#" class="navbar__link">
                        "Help"
                    </a>
                </div>
            </div>
        </nav>
    }
}
