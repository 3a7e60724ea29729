//! App Root Component
//!
//! Main application component with routing and global providers. Each role
//! gets its own shell; a shell sends visitors without a session to
//! `/login` and users of another role to their own dashboard.

use leptos::*;
use leptos_router::*;

use almazara::model::{
    Analysis, Department, Employee, Entry, Member, Oil, Role, RoleKind, Settlement, User,
};

use crate::api;
use crate::components::{Sidebar, Toast, Topbar};
use crate::pages::{
    resource_page, Access, AdminDashboard, EmployeeDashboard, Login, MemberDashboard, Profile,
    Settings,
};
use crate::state::{init_inactivity_watch, provide_global_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_global_state();
    init_inactivity_watch(state);

    // Profile for the topbar, once per login
    create_effect(move |_| {
        if state.session.with(Option::is_some) && state.profile.get_untracked().is_none() {
            spawn_local(async move {
                match api::fetch_profile().await {
                    Ok(profile) => state.profile.set(Some(profile)),
                    Err(e) if e.is_unauthorized() => state.report(&e),
                    Err(e) => web_sys::console::warn_1(&format!("Cannot load profile: {}", e).into()),
                }
            });
        }
    });

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white">
                <Routes>
                    <Route path="/login" view=Login />
                    <Route path="/" view=Home />

                    <Route path="/admin" view={|| view! { <Shell role=RoleKind::Admin /> }}>
                        <Route path="" view=AdminDashboard />
                        <Route path="members" view={|| resource_page::<Member>(Access::FULL)} />
                        <Route path="employees" view={|| resource_page::<Employee>(Access::FULL)} />
                        <Route path="departments" view={|| resource_page::<Department>(Access::FULL)} />
                        <Route path="entries" view={|| resource_page::<Entry>(Access::FULL)} />
                        <Route path="analyses" view={|| resource_page::<Analysis>(Access::FULL)} />
                        <Route path="settlements" view={|| resource_page::<Settlement>(Access::FULL)} />
                        <Route path="oils" view={|| resource_page::<Oil>(Access::FULL)} />
                        <Route path="users" view={|| resource_page::<User>(Access::FULL)} />
                        <Route path="roles" view={|| resource_page::<Role>(Access::FULL)} />
                    </Route>

                    <Route path="/employee" view={|| view! { <Shell role=RoleKind::Employee /> }}>
                        <Route path="" view=EmployeeDashboard />
                        <Route path="entries" view={|| resource_page::<Entry>(Access::FULL)} />
                        <Route path="analyses" view={|| resource_page::<Analysis>(Access::FULL)} />
                        <Route path="members" view={|| resource_page::<Member>(Access::READ_ONLY)} />
                        <Route path="oils" view={|| resource_page::<Oil>(Access::READ_ONLY)} />
                    </Route>

                    <Route path="/member" view={|| view! { <Shell role=RoleKind::Member /> }}>
                        <Route path="" view=MemberDashboard />
                    </Route>

                    <Route path="" view={|| view! { <Shell /> }}>
                        <Route path="/profile" view=Profile />
                        <Route path="/settings" view=Settings />
                    </Route>

                    <Route path="/*any" view=NotFound />
                </Routes>

                <Toast />
            </div>
        </Router>
    }
}

/// Where the current session may go
#[derive(Clone, Copy, PartialEq, Eq)]
enum Gate {
    Login,
    Home(&'static str),
    Open,
}

/// Sidebar, topbar and the nested route, behind a session and role check
#[component]
fn Shell(#[prop(optional)] role: Option<RoleKind>) -> impl IntoView {
    let state = crate::state::global::use_global();
    let gate = create_memo(move |_| {
        state.session.with(|session| match session {
            None => Gate::Login,
            Some(s) if role.is_some() && s.role != role => Gate::Home(s.home_path()),
            Some(_) => Gate::Open,
        })
    });

    move || match gate.get() {
        Gate::Login => view! { <Redirect path="/login" /> }.into_view(),
        Gate::Home(path) => view! { <Redirect path=path /> }.into_view(),
        Gate::Open => view! {
            <div class="flex min-h-screen">
                <Sidebar />
                <div class="flex-1 flex flex-col min-w-0">
                    <Topbar />
                    <main class="flex-1 p-8">
                        <Outlet />
                    </main>
                </div>
            </div>
        }.into_view(),
    }
}

/// `/` lands on the user's dashboard
#[component]
fn Home() -> impl IntoView {
    let state = crate::state::global::use_global();
    let target = create_memo(move |_| {
        state.session.with(|s| s.as_ref().map(|s| s.home_path()).unwrap_or("/login"))
    });

    move || view! { <Redirect path=target.get() /> }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-screen text-center">
            <div class="text-6xl mb-4">"🫒"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
