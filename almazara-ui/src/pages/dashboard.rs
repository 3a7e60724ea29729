//! Dashboard Pages
//!
//! Administrator and employee landing pages. Every list a dashboard needs is
//! requested at once and the overview is computed when all have arrived; a
//! single failed request fails the page.

use leptos::*;

use almazara::dashboard::{AdminInputs, AdminOverview, EmployeeOverview};
use almazara::format::{format_currency, format_kg, format_liters, format_percent};
use almazara::model::{Analysis, Department, Employee, Entry, Member, Oil, Settlement};
use almazara::pagination::Pager;
use almazara::stats::StatusTotal;
use almazara::table::Tabular;

use crate::api;
use crate::components::{BarChart, CardSkeleton, ChartSkeleton, DataTable, StatCard, TableRow};
use crate::state::global::use_global;

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

fn yield_text(value: Option<f64>) -> String {
    value.map(format_percent).unwrap_or_else(|| "-".to_string())
}

/// Administrator dashboard
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let state = use_global();
    let overview = create_rw_signal(None::<AdminOverview>);

    spawn_local(async move {
        state.loading.set(true);
        let fetched = futures_util::try_join!(
            api::list::<Member>(),
            api::list::<Employee>(),
            api::list::<Department>(),
            api::list::<Entry>(),
            api::list::<Analysis>(),
            api::list::<Settlement>(),
            api::list::<Oil>(),
        );
        match fetched {
            Ok((members, employees, departments, entries, analyses, settlements, oils)) => {
                let inputs = AdminInputs {
                    members,
                    employees,
                    departments,
                    entries,
                    analyses,
                    settlements,
                    oils,
                };
                overview.set(Some(AdminOverview::compute(&inputs, today())));
            }
            Err(e) => state.report(&e),
        }
        state.loading.set(false);
    });

    let stat = move |f: fn(&AdminOverview) -> String| {
        Signal::derive(move || overview.with(|o| o.as_ref().map(f).unwrap_or_default()))
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Mill overview"</p>
            </div>

            {move || {
                if overview.with(Option::is_none) {
                    return view! {
                        <CardSkeleton count=6 />
                        <ChartSkeleton />
                    }.into_view();
                }

                view! {
                    <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                        <StatCard
                            label="Members"
                            icon="👥"
                            value=stat(|o| o.members.to_string())
                            hint=stat(|o| format!("{} active", o.active_members))
                        />
                        <StatCard
                            label="Employees"
                            icon="🧑‍🏭"
                            value=stat(|o| o.employees.to_string())
                            hint=stat(|o| format!("{} departments", o.departments))
                        />
                        <StatCard label="Olives received" icon="🫒" value=stat(|o| format_kg(o.total_olive_kg)) />
                        <StatCard
                            label="Oil produced"
                            icon="🛢"
                            value=stat(|o| format_liters(o.total_oil_liters))
                            hint=stat(|o| format!("Average yield {}", yield_text(o.average_yield)))
                        />
                        <StatCard
                            label="Pending payouts"
                            icon="⏳"
                            value=stat(|o| format_currency(o.pending_amount))
                            hint=stat(|o| format!("{} accepted", format_currency(o.accepted_amount)))
                        />
                        <StatCard label="Inventory value" icon="💶" value=stat(|o| format_currency(o.inventory_value)) />
                    </div>

                    <BarChart
                        title="Settlements per month"
                        unit="€"
                        buckets=Signal::derive(move || {
                            overview.with(|o| o.as_ref().map(|o| o.settlements_by_month.clone()).unwrap_or_default())
                        })
                    />

                    <StatusBreakdown rows=Signal::derive(move || {
                        overview.with(|o| o.as_ref().map(|o| o.status_breakdown.clone()).unwrap_or_default())
                    }) />
                }.into_view()
            }}
        </div>
    }
}

#[component]
fn StatusBreakdown(#[prop(into)] rows: Signal<Vec<StatusTotal>>) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-6 border border-gray-700">
            <h3 class="text-lg font-semibold mb-4">"Settlements by status"</h3>
            <table class="w-full text-sm">
                <thead class="text-gray-400 text-xs uppercase">
                    <tr>
                        <th class="text-left py-2">"Status"</th>
                        <th class="text-right py-2">"Count"</th>
                        <th class="text-right py-2">"Amount"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || rows.get().into_iter().map(|row| view! {
                        <tr class="border-t border-gray-700">
                            <td class="py-2">{row.status.as_str()}</td>
                            <td class="py-2 text-right">{row.count}</td>
                            <td class="py-2 text-right">{format_currency(row.amount)}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

/// Employee dashboard: reception and laboratory work
#[component]
pub fn EmployeeDashboard() -> impl IntoView {
    let state = use_global();
    let overview = create_rw_signal(None::<EmployeeOverview>);
    let pager = create_rw_signal(Pager::new(state.page_size.get_untracked()));

    spawn_local(async move {
        state.loading.set(true);
        match futures_util::try_join!(api::list::<Entry>(), api::list::<Analysis>()) {
            Ok((entries, analyses)) => {
                overview.set(Some(EmployeeOverview::compute(&entries, &analyses, today())));
            }
            Err(e) => state.report(&e),
        }
        state.loading.set(false);
    });

    let stat = move |f: fn(&EmployeeOverview) -> String| {
        Signal::derive(move || overview.with(|o| o.as_ref().map(f).unwrap_or_default()))
    };
    let awaiting = Signal::derive(move || {
        overview.with(|o| {
            o.as_ref()
                .map(|o| o.awaiting_analysis.iter().map(TableRow::from_record).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Last 12 months of reception and laboratory work"</p>
            </div>

            {move || {
                if overview.with(Option::is_none) {
                    return view! {
                        <CardSkeleton />
                        <ChartSkeleton />
                    }.into_view();
                }

                view! {
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        <StatCard label="Entries" icon="🚜" value=stat(|o| o.entries_in_window.to_string()) />
                        <StatCard label="Olives received" icon="🫒" value=stat(|o| format_kg(o.olive_kg_in_window)) />
                        <StatCard label="Analyses" icon="🧪" value=stat(|o| o.analyses_in_window.to_string()) />
                        <StatCard label="Awaiting analysis" icon="⏳" value=stat(|o| o.awaiting_analysis.len().to_string()) />
                    </div>

                    <BarChart
                        title="Olives received per month"
                        unit="kg"
                        buckets=Signal::derive(move || {
                            overview.with(|o| o.as_ref().map(|o| o.entries_by_month.clone()).unwrap_or_default())
                        })
                    />

                    <div>
                        <h3 class="text-lg font-semibold mb-4">"Entries awaiting analysis"</h3>
                        <DataTable headers=Entry::headers() rows=awaiting pager=pager />
                    </div>
                }.into_view()
            }}
        </div>
    }
}
