//! Navigation Components
//!
//! Sidebar with the links a role may open, and the topbar with the user's
//! name and the logout button.

use leptos::*;
use leptos_router::*;

use almazara::model::RoleKind;

use crate::state::global::use_global;

const ADMIN_LINKS: &[(&str, &str)] = &[
    ("/admin", "Dashboard"),
    ("/admin/members", "Members"),
    ("/admin/employees", "Employees"),
    ("/admin/departments", "Departments"),
    ("/admin/entries", "Entries"),
    ("/admin/analyses", "Analyses"),
    ("/admin/settlements", "Settlements"),
    ("/admin/oils", "Oils"),
    ("/admin/users", "Users"),
    ("/admin/roles", "Roles"),
];

const EMPLOYEE_LINKS: &[(&str, &str)] = &[
    ("/employee", "Dashboard"),
    ("/employee/entries", "Entries"),
    ("/employee/analyses", "Analyses"),
    ("/employee/members", "Members"),
    ("/employee/oils", "Oils"),
];

const MEMBER_LINKS: &[(&str, &str)] = &[("/member", "My deliveries")];

const ACCOUNT_LINKS: &[(&str, &str)] = &[("/profile", "Profile"), ("/settings", "Settings")];

fn links_for(role: Option<RoleKind>) -> &'static [(&'static str, &'static str)] {
    match role {
        Some(RoleKind::Admin) => ADMIN_LINKS,
        Some(RoleKind::Employee) => EMPLOYEE_LINKS,
        Some(RoleKind::Member) => MEMBER_LINKS,
        None => &[],
    }
}

/// Sidebar navigation for the logged-in role
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_global();
    let role = move || state.session.get().and_then(|s| s.role);

    view! {
        <aside class="w-56 shrink-0 bg-gray-800 border-r border-gray-700 min-h-screen">
            <A href="/" class="flex items-center space-x-3 px-4 h-16 border-b border-gray-700">
                <span class="text-2xl">"🫒"</span>
                <span class="text-xl font-bold text-white">"Almazara"</span>
            </A>

            <nav class="flex flex-col p-2 space-y-1">
                {move || {
                    links_for(role())
                        .iter()
                        .map(|(href, label)| view! { <NavLink href=*href label=*label /> })
                        .collect_view()
                }}

                <div class="border-t border-gray-700 my-2" />

                {ACCOUNT_LINKS
                    .iter()
                    .map(|(href, label)| view! { <NavLink href=*href label=*label /> })
                    .collect_view()}
            </nav>
        </aside>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}

/// Top bar with the user and logout
#[component]
pub fn Topbar() -> impl IntoView {
    let state = use_global();

    view! {
        <header class="h-16 bg-gray-800 border-b border-gray-700 flex items-center justify-between px-6">
            <div class="text-gray-400 text-sm">
                {move || {
                    state.session.get()
                        .and_then(|s| s.role)
                        .map(|r| r.label())
                        .unwrap_or("")
                }}
            </div>

            <div class="flex items-center space-x-4">
                {move || {
                    if state.loading.get() {
                        view! { <div class="loading-spinner w-4 h-4" /> }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
                <span class="font-medium">{move || state.display_name()}</span>
                <button
                    class="px-3 py-1 rounded-lg bg-gray-700 hover:bg-gray-600 text-sm"
                    on:click=move |_| state.logout()
                >
                    "Log out"
                </button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_stay_inside_role_shell() {
        for (role, prefix) in [
            (RoleKind::Admin, "/admin"),
            (RoleKind::Employee, "/employee"),
            (RoleKind::Member, "/member"),
        ] {
            let links = links_for(Some(role));
            assert_eq!(links[0].0, role.home_path());
            assert!(links.iter().all(|(href, _)| href.starts_with(prefix)));
        }
        assert!(links_for(None).is_empty());
    }
}
