//! Moderation console.
//!
//! SYSTEM CONTEXT
//! ==============
//! All collections load together on mount. A mutation marks its row busy,
//! calls the API, then reloads everything; a failure only sets the inline
//! error and leaves the tables untouched.

use leptos::prelude::*;

use crate::components::route_guard::RequireAdmin;
use crate::net::api_admin::ListingAction;
use crate::net::types::{AdminStats, Apartment, ContactMessage, ReportItem, ReportStatus, Role, User};
use crate::state::admin::{AdminAction, AdminData, AdminState, AdminTab};
use crate::state::session::{Session, use_session};
use crate::util::dialog::confirm;
use crate::util::format::{format_date, format_price, moderation_label, report_label};
use crate::util::guards::can_change_role;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <AdminConsole/>
        </RequireAdmin>
    }
}

fn reload(session: Session, admin: RwSignal<AdminState>) {
    if admin.try_update(AdminState::begin_load).is_none() {
        return;
    }
    leptos::task::spawn_local(async move {
        let result = AdminData::fetch(session.api()).await;
        if let Err(e) = &result {
            log::warn!("admin reload failed: {e}");
        }
        let _ = admin.try_update(|a| a.finish_load(result));
    });
}

#[component]
fn AdminConsole() -> impl IntoView {
    let session = use_session();
    let admin = RwSignal::new(AdminState::default());
    reload(session.clone(), admin);

    let actor = {
        let state = session.state();
        Memo::new(move |_| state.with(|s| s.current_user().cloned()))
    };

    let run = Callback::new(move |action: AdminAction| {
        if admin.with_untracked(|a| a.busy.is_some()) {
            return;
        }
        if let Some(prompt) = action.confirmation() {
            if !confirm(prompt) {
                return;
            }
        }
        admin.update(|a| a.begin_mutation(action.target_id()));
        let session = session.clone();
        leptos::task::spawn_local(async move {
            match action.apply(session.api()).await {
                Ok(()) => {
                    log::info!("admin action applied: {action:?}");
                    reload(session, admin);
                }
                Err(e) => {
                    log::warn!("admin action {action:?} failed: {e}");
                    let _ = admin.try_update(|a| a.fail_mutation(&e));
                }
            }
        });
    });

    let tab = Memo::new(move |_| admin.with(|a| a.tab));

    view! {
        <div class="admin-page">
            <header class="admin-page__head">
                <h1>"Moderation"</h1>
                <Show when=move || admin.with(|a| a.loading)>
                    <span class="muted">"Refreshing..."</span>
                </Show>
            </header>

            <nav class="tabs">
                {AdminTab::ALL
                    .into_iter()
                    .map(|t| {
                        let label = move || match admin.with(|a| t.badge(&a.data)) {
                            Some(n) => format!("{} ({n})", t.label()),
                            None => t.label().to_owned(),
                        };
                        view! {
                            <button
                                class="tab"
                                class:tab--active=move || tab.get() == t
                                on:click=move |_| admin.update(|a| a.tab = t)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <Show when=move || admin.with(|a| a.error.is_some())>
                <p class="notice notice--error">{move || admin.with(|a| a.error.clone()).unwrap_or_default()}</p>
            </Show>

            <section class="card">
                {move || match tab.get() {
                    AdminTab::Pending => view! { <PendingTab admin=admin run=run/> }.into_any(),
                    AdminTab::Listings => view! { <ListingsTab admin=admin run=run/> }.into_any(),
                    AdminTab::Reports => view! { <ReportsTab admin=admin run=run/> }.into_any(),
                    AdminTab::Messages => view! { <MessagesTab admin=admin run=run/> }.into_any(),
                    AdminTab::Users => view! { <UsersTab admin=admin run=run actor=actor/> }.into_any(),
                    AdminTab::Stats => view! { <StatsTab admin=admin/> }.into_any(),
                }}
            </section>
        </div>
    }
}

/// Button bound to one action; disabled while its row is busy.
#[component]
fn ActionButton(
    label: &'static str,
    action: AdminAction,
    admin: RwSignal<AdminState>,
    run: Callback<AdminAction>,
    #[prop(default = "btn--ghost")] class: &'static str,
    #[prop(optional)] locked: bool,
) -> impl IntoView {
    let id = action.target_id().to_owned();
    let disabled = move || locked || admin.with(|a| a.is_busy(&id));
    view! {
        <button class=format!("btn {class}") disabled=disabled on:click=move |_| run.run(action.clone())>
            {label}
        </button>
    }
}

fn empty_row(columns: u8, text: &'static str) -> impl IntoView {
    view! {
        <tr>
            <td colspan=columns.to_string() class="muted">{text}</td>
        </tr>
    }
}

#[component]
fn PendingTab(admin: RwSignal<AdminState>, run: Callback<AdminAction>) -> impl IntoView {
    let rows = Memo::new(move |_| admin.with(|a| a.data.pending.clone()));
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"City"</th>
                    <th>"Price"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let items = rows.get();
                    if items.is_empty() {
                        return empty_row(4, "Nothing waiting for review.").into_any();
                    }
                    items
                        .into_iter()
                        .map(|apt| {
                            let id = apt.id.clone();
                            view! {
                                <tr>
                                    <td>
                                        <a href=format!("/apartments/{}", apt.id)>{apt.title.clone()}</a>
                                    </td>
                                    <td>{apt.city.clone()}</td>
                                    <td>{format_price(apt.price, apt.listing_type)}</td>
                                    <td class="table__actions">
                                        <ActionButton
                                            label="Approve"
                                            action=AdminAction::Moderate(id.clone(), ListingAction::Approve)
                                            admin=admin
                                            run=run
                                            class="btn--primary"
                                        />
                                        <ActionButton
                                            label="Reject"
                                            action=AdminAction::Moderate(id, ListingAction::Reject)
                                            admin=admin
                                            run=run
                                            class="btn--danger"
                                        />
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </tbody>
        </table>
    }
}

#[component]
fn ListingsTab(admin: RwSignal<AdminState>, run: Callback<AdminAction>) -> impl IntoView {
    let rows = Memo::new(move |_| admin.with(|a| a.data.listings.clone()));
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Status"</th>
                    <th>"Visibility"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let items = rows.get();
                    if items.is_empty() {
                        return empty_row(4, "No listings.").into_any();
                    }
                    items.into_iter().map(|apt| listing_row(apt, admin, run)).collect_view().into_any()
                }}
            </tbody>
        </table>
    }
}

fn listing_row(apt: Apartment, admin: RwSignal<AdminState>, run: Callback<AdminAction>) -> impl IntoView {
    let id = apt.id.clone();
    let (visibility, toggle_label, toggle) = if apt.is_hidden {
        ("Hidden", "Unhide", ListingAction::Unhide)
    } else {
        ("Visible", "Hide", ListingAction::Hide)
    };
    view! {
        <tr>
            <td>
                <a href=format!("/apartments/{}", apt.id)>{apt.title.clone()}</a>
            </td>
            <td>{moderation_label(apt.status)}</td>
            <td>{visibility}</td>
            <td class="table__actions">
                <ActionButton label=toggle_label action=AdminAction::Moderate(id.clone(), toggle) admin=admin run=run/>
                <ActionButton
                    label="Delete"
                    action=AdminAction::DeleteListing(id)
                    admin=admin
                    run=run
                    class="btn--danger"
                />
            </td>
        </tr>
    }
}

#[component]
fn ReportsTab(admin: RwSignal<AdminState>, run: Callback<AdminAction>) -> impl IntoView {
    let rows = Memo::new(move |_| admin.with(|a| a.data.reports.clone()));
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Listing"</th>
                    <th>"Reporter"</th>
                    <th>"Reason"</th>
                    <th>"Status"</th>
                    <th>"Filed"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let items = rows.get();
                    if items.is_empty() {
                        return empty_row(6, "No reports.").into_any();
                    }
                    items.into_iter().map(|report| report_row(report, admin, run)).collect_view().into_any()
                }}
            </tbody>
        </table>
    }
}

fn report_row(report: ReportItem, admin: RwSignal<AdminState>, run: Callback<AdminAction>) -> impl IntoView {
    let id = report.id.clone();
    let listing = report.apartment.as_ref().map_or_else(
        || view! { <span class="muted">"(deleted listing)"</span> }.into_any(),
        |apt| view! { <a href=format!("/apartments/{}", apt.id)>{apt.title.clone()}</a> }.into_any(),
    );
    let reporter = report.reporter.as_ref().map_or_else(|| "-".to_owned(), |u| u.name.clone());
    let open = report.status == ReportStatus::Open;
    view! {
        <tr>
            <td>{listing}</td>
            <td>{reporter}</td>
            <td>{report.reason.clone()}</td>
            <td>{report_label(report.status)}</td>
            <td>{format_date(report.created_at.as_deref())}</td>
            <td class="table__actions">
                {open
                    .then(|| {
                        view! {
                            <ActionButton
                                label="Resolve"
                                action=AdminAction::ResolveReport(id.clone())
                                admin=admin
                                run=run
                                class="btn--primary"
                            />
                        }
                    })}
                <ActionButton
                    label="Delete"
                    action=AdminAction::DeleteReport(id.clone())
                    admin=admin
                    run=run
                    class="btn--danger"
                />
            </td>
        </tr>
    }
}

#[component]
fn MessagesTab(admin: RwSignal<AdminState>, run: Callback<AdminAction>) -> impl IntoView {
    let rows = Memo::new(move |_| admin.with(|a| a.data.messages.clone()));
    view! {
        <ul class="message-list">
            {move || {
                let items = rows.get();
                if items.is_empty() {
                    return view! { <li class="muted">"Inbox is empty."</li> }.into_any();
                }
                items.into_iter().map(|message| message_item(message, admin, run)).collect_view().into_any()
            }}
        </ul>
    }
}

fn message_item(message: ContactMessage, admin: RwSignal<AdminState>, run: Callback<AdminAction>) -> impl IntoView {
    let sender = message.name.clone().unwrap_or_else(|| "Anonymous".to_owned());
    let contact: Vec<String> = [message.email.clone(), message.phone.clone()].into_iter().flatten().collect();
    view! {
        <li class="message">
            <div class="message__head">
                <strong>{sender}</strong>
                <span class="muted">{contact.join(" · ")}</span>
                <span class="muted">{format_date(message.created_at.as_deref())}</span>
            </div>
            <p>{message.message.clone()}</p>
            <ActionButton
                label="Delete"
                action=AdminAction::DeleteMessage(message.id.clone())
                admin=admin
                run=run
                class="btn--danger"
            />
        </li>
    }
}

#[component]
fn UsersTab(admin: RwSignal<AdminState>, run: Callback<AdminAction>, actor: Memo<Option<User>>) -> impl IntoView {
    let rows = Memo::new(move |_| admin.with(|a| a.data.users.clone()));
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Role"</th>
                    <th>"Status"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let items = rows.get();
                    if items.is_empty() {
                        return empty_row(5, "No users.").into_any();
                    }
                    let actor = actor.get();
                    items
                        .into_iter()
                        .map(|user| {
                            // Admins may not demote or ban themselves.
                            let locked = !actor.as_ref().is_some_and(|a| can_change_role(a, &user));
                            let ban_label = if user.is_banned { "Unban" } else { "Ban" };
                            let role_label = match user.role.toggled() {
                                Role::Admin => "Make admin",
                                Role::User => "Make user",
                            };
                            view! {
                                <tr class:row--muted=user.is_banned>
                                    <td>{user.name.clone()}</td>
                                    <td>{user.email.clone()}</td>
                                    <td>{user.role.as_str()}</td>
                                    <td>{if user.is_banned { "Banned" } else { "Active" }}</td>
                                    <td class="table__actions">
                                        <ActionButton
                                            label=role_label
                                            action=AdminAction::SetRole(user.id.clone(), user.role.toggled())
                                            admin=admin
                                            run=run
                                            locked=locked
                                        />
                                        <ActionButton
                                            label=ban_label
                                            action=AdminAction::SetBanned(user.id.clone(), !user.is_banned)
                                            admin=admin
                                            run=run
                                            class="btn--danger"
                                            locked=locked
                                        />
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </tbody>
        </table>
    }
}

#[component]
fn StatsTab(admin: RwSignal<AdminState>) -> impl IntoView {
    let stats = Memo::new(move |_| admin.with(|a| a.data.stats));
    let tile = move |label: &'static str, value: fn(&AdminStats) -> u64| {
        view! {
            <div class="stat">
                <span class="stat__value">{move || stats.with(value)}</span>
                <span class="stat__label">{label}</span>
            </div>
        }
    };
    view! {
        <div class="stats-grid">
            {tile("Users", |s| s.users)}
            {tile("Listings", |s| s.apartments)}
            {tile("Pending review", |s| s.pending)}
            {tile("Live listings", |s| s.approved_visible)}
            {tile("Hidden", |s| s.hidden)}
            {tile("Contact requests", |s| s.requests)}
            {tile("Open reports", |s| s.open_reports)}
        </div>
    }
}
