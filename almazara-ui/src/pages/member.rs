//! Member Dashboard
//!
//! A member's own deliveries and payouts. The lists come back from the API
//! unscoped for some deployments, so the overview keeps only the records of
//! the member linked to the logged-in user.

use leptos::*;

use almazara::api::ApiError;
use almazara::dashboard::MemberOverview;
use almazara::format::{format_currency, format_kg, format_liters, format_percent};
use almazara::model::{Entry, Member, Settlement};
use almazara::pagination::Pager;
use almazara::table::Tabular;

use crate::api;
use crate::components::{BarChart, CardSkeleton, DataTable, StatCard, TableRow};
use crate::export::download_csv;
use crate::state::global::use_global;

#[derive(Clone)]
struct MemberData {
    member: Member,
    overview: MemberOverview,
    entries: Vec<Entry>,
    settlements: Vec<Settlement>,
}

#[component]
pub fn MemberDashboard() -> impl IntoView {
    let state = use_global();
    let data = create_rw_signal(None::<MemberData>);

    spawn_local(async move {
        state.loading.set(true);
        let fetched = futures_util::try_join!(
            api::fetch_profile(),
            api::list::<Entry>(),
            api::list::<Settlement>(),
        );
        let result = fetched.and_then(|(profile, entries, settlements)| {
            let member = profile.member.ok_or_else(|| ApiError::Rejected {
                message: "This account is not linked to a member".to_string(),
            })?;
            let today = chrono::Local::now().date_naive();
            let overview = MemberOverview::compute(member.id, &entries, &settlements, today);
            let mut entries: Vec<Entry> =
                entries.into_iter().filter(|e| e.member_id == member.id).collect();
            let mut settlements: Vec<Settlement> =
                settlements.into_iter().filter(|s| s.member_id == member.id).collect();
            entries.sort_by(|a, b| b.entry_date.cmp(&a.entry_date));
            settlements.sort_by(|a, b| b.settlement_date.cmp(&a.settlement_date));
            Ok(MemberData {
                member,
                overview,
                entries,
                settlements,
            })
        });
        match result {
            Ok(loaded) => data.set(Some(loaded)),
            Err(e) => state.report(&e),
        }
        state.loading.set(false);
    });

    let stat = move |f: fn(&MemberOverview) -> String| {
        Signal::derive(move || data.with(|d| d.as_ref().map(|d| f(&d.overview)).unwrap_or_default()))
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"My deliveries"</h1>
                <p class="text-gray-400 mt-1">
                    {move || data.with(|d| d.as_ref().map(|d| d.member.full_name()).unwrap_or_default())}
                </p>
            </div>

            {move || {
                if data.with(Option::is_none) {
                    return view! { <CardSkeleton /> }.into_view();
                }

                view! {
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        <StatCard
                            label="Olives delivered"
                            icon="🫒"
                            value=stat(|o| format_kg(o.delivered_kg))
                            hint=stat(|o| format!("{} entries", o.entries))
                        />
                        <StatCard
                            label="Oil"
                            icon="🛢"
                            value=stat(|o| format_liters(o.oil_liters))
                            hint=stat(|o| {
                                o.average_yield
                                    .map(|y| format!("Yield {}", format_percent(y)))
                                    .unwrap_or_default()
                            })
                        />
                        <StatCard label="Pending" icon="⏳" value=stat(|o| format_currency(o.pending_amount)) />
                        <StatCard label="Accepted" icon="✅" value=stat(|o| format_currency(o.accepted_amount)) />
                    </div>

                    <div class="grid md:grid-cols-2 gap-6">
                        <BarChart
                            title="Olives delivered per month"
                            unit="kg"
                            buckets=Signal::derive(move || {
                                data.with(|d| d.as_ref().map(|d| d.overview.entries_by_month.clone()).unwrap_or_default())
                            })
                        />
                        <BarChart
                            title="Settlements per month"
                            unit="€"
                            buckets=Signal::derive(move || {
                                data.with(|d| d.as_ref().map(|d| d.overview.settlements_by_month.clone()).unwrap_or_default())
                            })
                        />
                    </div>

                    <OwnRecords
                        title="My entries"
                        filename="my-entries.csv"
                        headers=Entry::headers()
                        rows=Signal::derive(move || {
                            data.with(|d| d.as_ref().map(|d| d.entries.iter().map(TableRow::from_record).collect()).unwrap_or_default())
                        })
                    />
                    <OwnRecords
                        title="My settlements"
                        filename="my-settlements.csv"
                        headers=Settlement::headers()
                        rows=Signal::derive(move || {
                            data.with(|d| d.as_ref().map(|d| d.settlements.iter().map(TableRow::from_record).collect()).unwrap_or_default())
                        })
                    />
                }.into_view()
            }}
        </div>
    }
}

/// Read-only table with a CSV download button
#[component]
fn OwnRecords(
    title: &'static str,
    filename: &'static str,
    headers: &'static [&'static str],
    rows: Signal<Vec<TableRow>>,
) -> impl IntoView {
    let state = use_global();
    let pager = create_rw_signal(Pager::new(state.page_size.get_untracked()));

    let on_export = move |_| {
        let cells: Vec<Vec<String>> = rows.with_untracked(|rows| rows.iter().map(|r| r.cells.clone()).collect());
        if let Err(e) = download_csv(filename, headers, &cells) {
            state.show_error(&e);
        }
    };

    view! {
        <div>
            <div class="flex items-center justify-between mb-4">
                <h3 class="text-lg font-semibold">{title}</h3>
                <button class="px-3 py-1 rounded-lg bg-gray-700 hover:bg-gray-600 text-sm" on:click=on_export>
                    "Export CSV"
                </button>
            </div>
            <DataTable headers=headers rows=rows pager=pager />
        </div>
    }
}
