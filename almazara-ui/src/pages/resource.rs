//! Resource Pages
//!
//! One CRUD page per collection: search box, paginated table, create/edit
//! modal generated from the record's form fields, delete confirmation and
//! CSV export of the filtered rows.

use leptos::*;

use almazara::api::Resource;
use almazara::filter::{filter_records, Searchable};
use almazara::forms::{build_payload, empty_values, Editable, FormValues};
use almazara::model::RecordId;
use almazara::pagination::Pager;
use almazara::table::Tabular;

use crate::api;
use crate::components::{ConfirmDialog, DataTable, EntityForm, Loading, Modal, TableRow};
use crate::export::download_csv;
use crate::state::global::use_global;

/// What the current role may do on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    pub create: bool,
    pub edit: bool,
    pub delete: bool,
}

impl Access {
    pub const FULL: Access = Access {
        create: true,
        edit: true,
        delete: true,
    };

    pub const READ_ONLY: Access = Access {
        create: false,
        edit: false,
        delete: false,
    };
}

/// Target of the open form modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormTarget {
    New,
    Existing(RecordId),
}

/// CRUD page for `R`
pub fn resource_page<R>(access: Access) -> impl IntoView
where
    R: Resource + Tabular + Searchable + Editable,
{
    let state = use_global();
    let records = create_rw_signal(Vec::<R>::new());
    let loaded = create_rw_signal(false);
    let search = create_rw_signal(String::new());
    let pager = create_rw_signal(Pager::new(state.page_size.get_untracked()));

    let form_target = create_rw_signal(None::<FormTarget>);
    let form_values = create_rw_signal(FormValues::new());
    let saving = create_rw_signal(false);
    let deleting = create_rw_signal(None::<RecordId>);
    let delete_busy = create_rw_signal(false);

    create_effect(move |_| {
        let size = state.page_size.get();
        pager.update(|p| {
            p.page_size = size;
            p.reset();
        });
    });

    let reload = move || {
        spawn_local(async move {
            state.loading.set(true);
            match api::list::<R>().await {
                Ok(list) => records.set(list),
                Err(e) => state.report(&e),
            }
            loaded.set(true);
            state.loading.set(false);
        });
    };
    reload();

    let rows = Signal::derive(move || {
        let query = search.get();
        records.with(|list| {
            filter_records(list, &query)
                .into_iter()
                .map(TableRow::from_record)
                .collect::<Vec<_>>()
        })
    });

    let open_new = move |_| {
        form_values.set(empty_values(&R::form_fields()));
        form_target.set(Some(FormTarget::New));
    };

    let on_edit = Callback::new(move |id: RecordId| {
        let record = records.with_untracked(|list| list.iter().find(|r| r.id() == id).cloned());
        if let Some(record) = record {
            form_values.set(record.form_values());
            form_target.set(Some(FormTarget::Existing(id)));
        }
    });

    let on_delete = Callback::new(move |id: RecordId| deleting.set(Some(id)));

    let close_form = Callback::new(move |_| form_target.set(None));

    let save = move |_| {
        let Some(target) = form_target.get_untracked() else {
            return;
        };
        let payload = match build_payload(&R::form_fields(), &form_values.get_untracked()) {
            Ok(payload) => payload,
            Err(e) => {
                state.show_error(&e.to_string());
                return;
            }
        };

        saving.set(true);
        spawn_local(async move {
            let result = match target {
                FormTarget::New => api::create::<R>(&payload).await.map(|_| ()),
                FormTarget::Existing(id) => api::update::<R>(id, &payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    form_target.set(None);
                    state.show_success(&format!("{} saved", R::SINGULAR));
                    reload();
                }
                Err(e) => state.report(&e),
            }
            saving.set(false);
        });
    };

    let confirm_delete = Callback::new(move |_| {
        let Some(id) = deleting.get_untracked() else {
            return;
        };
        delete_busy.set(true);
        spawn_local(async move {
            match api::delete::<R>(id).await {
                Ok(()) => {
                    state.show_success(&format!("{} deleted", R::SINGULAR));
                    reload();
                }
                Err(e) => state.report(&e),
            }
            deleting.set(None);
            delete_busy.set(false);
        });
    });

    let cancel_delete = Callback::new(move |_| deleting.set(None));

    let export = move |_| {
        let cells: Vec<Vec<String>> = rows.with_untracked(|rows| rows.iter().map(|r| r.cells.clone()).collect());
        let filename = format!("{}.csv", R::PATH.trim_start_matches('/'));
        if let Err(e) = download_csv(&filename, R::headers(), &cells) {
            state.show_error(&e);
        }
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">{R::LABEL}</h1>
                    <p class="text-gray-400 mt-1">
                        {move || format!("{} records", records.with(Vec::len))}
                    </p>
                </div>
                <div class="flex items-center space-x-2">
                    <button class="px-4 py-2 rounded-lg bg-gray-700 hover:bg-gray-600" on:click=export>
                        "Export CSV"
                    </button>
                    {access.create.then(|| view! {
                        <button class="px-4 py-2 rounded-lg bg-primary-600 hover:bg-primary-700 font-medium" on:click=open_new>
                            {format!("New {}", R::SINGULAR.to_lowercase())}
                        </button>
                    })}
                </div>
            </div>

            <input
                type="search"
                placeholder="Search..."
                class="w-full md:w-80 bg-gray-800 border border-gray-700 rounded-lg px-3 py-2"
                prop:value=search
                on:input=move |ev| {
                    search.set(event_target_value(&ev));
                    pager.update(Pager::reset);
                }
            />

            {move || {
                if loaded.get() {
                    view! {
                        <DataTable
                            headers=R::headers()
                            rows=rows
                            pager=pager
                            on_edit=access.edit.then_some(on_edit)
                            on_delete=access.delete.then_some(on_delete)
                        />
                    }.into_view()
                } else {
                    view! { <Loading message=format!("Loading {}...", R::LABEL.to_lowercase()) /> }.into_view()
                }
            }}

            {move || form_target.get().map(|target| {
                let title = match target {
                    FormTarget::New => format!("New {}", R::SINGULAR.to_lowercase()),
                    FormTarget::Existing(id) => format!("Edit {} #{}", R::SINGULAR.to_lowercase(), id),
                };
                view! {
                    <Modal title=title on_close=close_form>
                        <EntityForm fields=R::form_fields() values=form_values />
                        <div class="flex justify-end space-x-3 mt-6">
                            <button
                                class="px-4 py-2 rounded-lg bg-gray-700 hover:bg-gray-600"
                                on:click=move |_| close_form.call(())
                            >
                                "Cancel"
                            </button>
                            <button
                                class="px-4 py-2 rounded-lg bg-primary-600 hover:bg-primary-700 font-medium disabled:opacity-50"
                                disabled=move || saving.get()
                                on:click=save
                            >
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </Modal>
                }
            })}

            {move || deleting.get().map(|id| view! {
                <ConfirmDialog
                    message=format!("Delete {} #{}? This cannot be undone.", R::SINGULAR.to_lowercase(), id)
                    on_confirm=confirm_delete
                    on_cancel=cancel_delete
                    busy=delete_busy
                />
            })}
        </div>
    }
}
