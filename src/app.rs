//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::net::api::ApiClient;
use crate::pages::{
    add_apartment::AddApartmentPage, admin::AdminPage, apartment_details::ApartmentDetailsPage,
    apartments::ApartmentsPage, contact::ContactPage, edit_apartment::EditApartmentPage, home::HomePage,
    login::LoginPage, not_found::NotFoundPage, profile::ProfilePage, register::RegisterPage,
};
use crate::state::session::{Session, SessionContext};

/// Root application component.
///
/// Restores the stored session, provides it as context, and revalidates the
/// token against the server once in the background.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session: Session = SessionContext::new(ApiClient::browser());
    provide_context(session.clone());
    leptos::task::spawn_local(async move {
        session.refresh_profile().await;
    });

    view! {
        <Stylesheet id="rentify" href="/style/main.css"/>
        <Title text="Rentify"/>

        <Router>
            <Layout>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("apartments") view=ApartmentsPage/>
                    <Route path=(StaticSegment("apartments"), StaticSegment("new")) view=AddApartmentPage/>
                    <Route path=(StaticSegment("apartments"), ParamSegment("id")) view=ApartmentDetailsPage/>
                    <Route
                        path=(StaticSegment("apartments"), ParamSegment("id"), StaticSegment("edit"))
                        view=EditApartmentPage
                    />
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                </Routes>
            </Layout>
        </Router>
    }
}
