//! Profile Page
//!
//! The logged-in user and the member or employee record linked to it.

use leptos::*;

use almazara::format::{format_currency, format_date};
use almazara::model::{Employee, Member};

use crate::api;
use crate::components::Loading;
use crate::state::global::use_global;

#[component]
pub fn Profile() -> impl IntoView {
    let state = use_global();

    if state.profile.get_untracked().is_none() {
        spawn_local(async move {
            match api::fetch_profile().await {
                Ok(profile) => state.profile.set(Some(profile)),
                Err(e) => state.report(&e),
            }
        });
    }

    view! {
        <div class="space-y-8 max-w-2xl">
            <h1 class="text-3xl font-bold">"Profile"</h1>

            {move || match state.profile.get() {
                None => view! { <Loading /> }.into_view(),
                Some(profile) => {
                    let role = state.session.get()
                        .and_then(|s| s.role)
                        .map(|r| r.label().to_string())
                        .unwrap_or_else(|| "-".to_string());
                    view! {
                        <Section title="Account">
                            <Line label="Username" value=profile.user.username.clone() />
                            <Line label="Email" value=profile.user.email.clone().unwrap_or_default() />
                            <Line label="Role" value=role />
                        </Section>
                        {profile.member.map(|m| view! { <MemberDetails member=m /> })}
                        {profile.employee.map(|e| view! { <EmployeeDetails employee=e /> })}
                    }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn MemberDetails(member: Member) -> impl IntoView {
    view! {
        <Section title="Member">
            <Line label="Name" value=member.full_name() />
            <Line label="Number" value=member.member_number.map(|n| n.to_string()).unwrap_or_default() />
            <Line label="DNI" value=member.dni />
            <Line label="Phone" value=member.phone.unwrap_or_default() />
            <Line label="Address" value=member.address.unwrap_or_default() />
            <Line label="IBAN" value=member.iban.unwrap_or_default() />
        </Section>
    }
}

#[component]
fn EmployeeDetails(employee: Employee) -> impl IntoView {
    view! {
        <Section title="Employee">
            <Line label="Name" value=employee.full_name() />
            <Line label="DNI" value=employee.dni />
            <Line label="Position" value=employee.position.unwrap_or_default() />
            <Line label="Hired" value=format_date(employee.hire_date) />
            <Line label="Salary" value=employee.salary.map(format_currency).unwrap_or_default() />
        </Section>
    }
}

#[component]
fn Section(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-lg p-6 border border-gray-700">
            <h2 class="text-xl font-semibold mb-4">{title}</h2>
            <dl class="divide-y divide-gray-700">{children()}</dl>
        </section>
    }
}

#[component]
fn Line(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    let value = if value.is_empty() { "-".to_string() } else { value };
    view! {
        <div class="flex justify-between py-2">
            <dt class="text-gray-400">{label}</dt>
            <dd>{value}</dd>
        </div>
    }
}
