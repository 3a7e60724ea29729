//! Data Table Component
//!
//! Renders already-fetched, already-filtered rows one page at a time, with
//! the row of page links underneath.

use leptos::*;

use almazara::api::Resource;
use almazara::model::RecordId;
use almazara::pagination::{PageItem, Pager};
use almazara::table::Tabular;

/// One rendered row: the record id for the action buttons plus cell text
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: RecordId,
    pub cells: Vec<String>,
}

impl TableRow {
    pub fn from_record<R: Resource + Tabular>(record: &R) -> Self {
        Self {
            id: record.id(),
            cells: record.row(),
        }
    }
}

/// Paginated table with optional edit/delete buttons per row
#[component]
pub fn DataTable(
    headers: &'static [&'static str],
    #[prop(into)]
    rows: Signal<Vec<TableRow>>,
    pager: RwSignal<Pager>,
    #[prop(optional_no_strip)]
    on_edit: Option<Callback<RecordId>>,
    #[prop(optional_no_strip)]
    on_delete: Option<Callback<RecordId>>,
) -> impl IntoView {
    let has_actions = on_edit.is_some() || on_delete.is_some();
    let columns = headers.len() + usize::from(has_actions);

    // Keep the current page inside the range when the list shrinks
    create_effect(move |_| {
        let len = rows.with(Vec::len);
        let current = pager.get_untracked();
        let mut clamped = current;
        clamped.go_to(current.page, len);
        if clamped != current {
            pager.set(clamped);
        }
    });

    view! {
        <div class="bg-gray-800 rounded-lg border border-gray-700 overflow-x-auto">
            <table class="w-full text-sm">
                <thead class="bg-gray-900 text-gray-400 uppercase text-xs">
                    <tr>
                        {headers.iter().map(|h| view! { <th class="px-4 py-3 text-left">{*h}</th> }).collect_view()}
                        {has_actions.then(|| view! { <th class="px-4 py-3 text-right">"Actions"</th> })}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = rows.get();
                        let page = pager.get();
                        if rows.is_empty() {
                            return view! {
                                <tr>
                                    <td class="px-4 py-8 text-center text-gray-500" colspan=columns>
                                        "No records found"
                                    </td>
                                </tr>
                            }.into_view();
                        }
                        page.slice(&rows)
                            .iter()
                            .cloned()
                            .map(|row| view! { <Row row=row on_edit=on_edit on_delete=on_delete /> })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <Pagination pager=pager len=Signal::derive(move || rows.with(Vec::len)) />
        </div>
    }
}

#[component]
fn Row(
    row: TableRow,
    on_edit: Option<Callback<RecordId>>,
    on_delete: Option<Callback<RecordId>>,
) -> impl IntoView {
    let id = row.id;

    view! {
        <tr class="border-t border-gray-700 hover:bg-gray-750">
            {row.cells.into_iter().map(|cell| view! { <td class="px-4 py-2 whitespace-nowrap">{cell}</td> }).collect_view()}
            {(on_edit.is_some() || on_delete.is_some()).then(|| view! {
                <td class="px-4 py-2 text-right space-x-2 whitespace-nowrap">
                    {on_edit.map(|cb| view! {
                        <button class="text-primary-400 hover:text-primary-300" on:click=move |_| cb.call(id)>
                            "Edit"
                        </button>
                    })}
                    {on_delete.map(|cb| view! {
                        <button class="text-red-400 hover:text-red-300" on:click=move |_| cb.call(id)>
                            "Delete"
                        </button>
                    })}
                </td>
            })}
        </tr>
    }
}

/// "Showing 11-20 of 57" and the page links
#[component]
fn Pagination(
    pager: RwSignal<Pager>,
    #[prop(into)]
    len: Signal<usize>,
) -> impl IntoView {
    let link_class = |active: bool| {
        let base = "px-3 py-1 rounded text-sm";
        if active {
            format!("{} bg-primary-600 text-white", base)
        } else {
            format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
        }
    };

    view! {
        <div class="flex items-center justify-between px-4 py-3 border-t border-gray-700">
            <span class="text-gray-400 text-sm">
                {move || match pager.get().range_label(len.get()) {
                    Some((first, last)) => format!("Showing {}-{} of {}", first, last, len.get()),
                    None => String::new(),
                }}
            </span>

            <div class="flex items-center space-x-1">
                <button
                    class=link_class(false)
                    disabled=move || !pager.get().has_prev()
                    on:click=move |_| pager.update(|p| p.prev(len.get_untracked()))
                >
                    "‹"
                </button>

                {move || {
                    let current = pager.get();
                    current.window(len.get())
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(n) => view! {
                                <button
                                    class=link_class(n == current.page)
                                    on:click=move |_| pager.update(|p| p.go_to(n, len.get_untracked()))
                                >
                                    {n}
                                </button>
                            }.into_view(),
                            PageItem::Ellipsis => view! {
                                <span class="px-2 text-gray-500">"…"</span>
                            }.into_view(),
                        })
                        .collect_view()
                }}

                <button
                    class=link_class(false)
                    disabled=move || !pager.get().has_next(len.get())
                    on:click=move |_| pager.update(|p| p.next(len.get_untracked()))
                >
                    "›"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almazara::model::{Settlement, SettlementStatus};

    #[test]
    fn test_row_keeps_id_and_cells() {
        let settlement = Settlement {
            id: 42,
            member_id: 7,
            oil_id: None,
            settlement_date: None,
            liters: 10.0,
            price_per_liter: 4.5,
            amount: None,
            status: SettlementStatus::Pending,
        };
        let row = TableRow::from_record(&settlement);
        assert_eq!(row.id, 42);
        assert_eq!(row.cells.len(), Settlement::headers().len());
        assert_eq!(row.cells[0], "42");
    }
}
