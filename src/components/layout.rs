//! Page chrome: header navigation, auth controls, and footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every route. The header is the only place most users see their
//! session state, so it reads the session signal directly and re-renders on
//! login, logout, and profile refresh.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::use_session;

/// Header + routed content + footer.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Header/>
            <main class="layout__main">{children()}</main>
            <Footer/>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let navigate = use_navigate();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    // Close the mobile menu after any navigation.
    Effect::new(move || {
        pathname.track();
        menu_open.set(false);
    });

    let is_admin = move || state.with(|s| s.is_admin());
    let signed_in = move || state.with(|s| s.is_authenticated());
    let display_name = move || state.with(|s| s.current_user().map(|u| u.name.clone()).unwrap_or_default());

    let on_logout = move |_: leptos::ev::MouseEvent| {
        session.logout();
        navigate("/", NavigateOptions::default());
    };

    let nav_class = move |path: &'static str| {
        move || {
            let current = pathname.get();
            let active = if path == "/" { current == "/" } else { current.starts_with(path) };
            if active { "nav__link nav__link--active" } else { "nav__link" }
        }
    };

    view! {
        <header class="header">
            <div class="header__inner">
                <a class="header__brand" href="/">"Rentify"</a>
                <button
                    class="header__menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
                <nav class="nav" class:nav--open=move || menu_open.get()>
                    <a class=nav_class("/") href="/">"Home"</a>
                    <a class=nav_class("/apartments") href="/apartments">"Listings"</a>
                    <a class=nav_class("/contact") href="/contact">"Contact"</a>
                    <Show when=is_admin>
                        <a class=nav_class("/admin") href="/admin">"Admin"</a>
                    </Show>
                    <div class="nav__auth">
                        <Show
                            when=signed_in
                            fallback=move || {
                                view! {
                                    <a class="btn btn--ghost" href="/login">"Login"</a>
                                    <a class="btn btn--primary" href="/register">"Register"</a>
                                }
                            }
                        >
                            <a class="nav__profile" href="/profile">{display_name}</a>
                            <button class="btn btn--ghost" on:click=on_logout.clone()>"Logout"</button>
                        </Show>
                    </div>
                </nav>
            </div>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__brand">
                    <span class="header__brand">"Rentify"</span>
                    <p>"Apartments for rent and sale, listed by their owners."</p>
                </div>
                <nav class="footer__links">
                    <a href="/apartments">"Browse listings"</a>
                    <a href="/apartments/new">"List a property"</a>
                    <a href="/contact">"Help center"</a>
                </nav>
            </div>
        </footer>
    }
}
