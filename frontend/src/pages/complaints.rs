use std::collections::HashSet;

use railease_shared::{ComplaintFilter, ComplaintRecord, FacetOptions, SortDirection, SortKey};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::use_click_away;

use crate::components::{Spinner, bucket_label, use_open_complaint};
use crate::hooks::use_complaints;

/// Open sort menu: the column it applies to and where the header was clicked.
#[derive(Clone, Copy, Debug, PartialEq)]
struct SortPicker {
    key: SortKey,
    x: i32,
    y: i32,
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let handle = use_complaints();
    let filter = use_state(ComplaintFilter::default);
    let picker = use_state(|| None::<SortPicker>);
    let picker_ref = use_node_ref();

    {
        let picker = picker.clone();
        use_click_away(picker_ref.clone(), move |_: Event| {
            if picker.is_some() {
                picker.set(None);
            }
        });
    }

    let on_search = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*filter).clone();
            next.query = input.value();
            filter.set(next);
        })
    };

    let on_clear = {
        let filter = filter.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*filter).clone();
            next.clear();
            filter.set(next);
        })
    };

    let on_pick_direction = {
        let filter = filter.clone();
        let picker = picker.clone();
        Callback::from(move |direction: SortDirection| {
            if let Some(open) = *picker {
                let mut next = (*filter).clone();
                next.set_sort(open.key, direction);
                filter.set(next);
            }
            picker.set(None);
        })
    };

    let facets = FacetOptions::from_records(&handle.complaints);
    let rows = filter.apply(&handle.complaints);
    let has_criteria = *filter != ComplaintFilter::default();

    html! {
        <div class="min-h-screen bg-gray-50">
            <div class="container mx-auto px-4 py-8">
                <h1 class="text-4xl font-bold text-blue-800 mb-6">{"Complaints Dashboard"}</h1>

                // Search
                <div class="relative mb-4">
                    <input
                        type="text"
                        placeholder="Search by name, complaint, reference ID, location, status, date..."
                        class="p-2 pr-10 border border-gray-300 rounded-lg w-full shadow-sm focus:ring focus:border-blue-500"
                        value={filter.query.clone()}
                        oninput={on_search}
                    />
                    <svg class="absolute top-2.5 right-3 h-5 w-5 text-gray-500" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"/>
                    </svg>
                </div>

                // Facet chips: types first, then urgencies
                <div class="flex flex-wrap items-center gap-2 mb-6">
                    { for facets.types.iter().map(|value| {
                        let selected = filter.is_type_selected(value);
                        let onclick = {
                            let filter = filter.clone();
                            let value = value.clone();
                            Callback::from(move |_: MouseEvent| {
                                let mut next = (*filter).clone();
                                next.toggle_type(&value);
                                filter.set(next);
                            })
                        };
                        html! { <Chip label={value.clone()} {selected} {onclick} /> }
                    })}
                    { for facets.urgencies.iter().map(|value| {
                        let selected = filter.is_urgency_selected(value);
                        let onclick = {
                            let filter = filter.clone();
                            let value = value.clone();
                            Callback::from(move |_: MouseEvent| {
                                let mut next = (*filter).clone();
                                next.toggle_urgency(&value);
                                filter.set(next);
                            })
                        };
                        html! { <Chip label={value.clone()} {selected} {onclick} /> }
                    })}
                    if has_criteria {
                        <button onclick={on_clear} class="text-sm text-blue-600 hover:underline ml-2">
                            {"Clear filters"}
                        </button>
                    }
                </div>

                if handle.is_loading() {
                    <Spinner />
                } else {
                    <div class="bg-white shadow-md rounded-lg overflow-x-auto">
                        <table class="min-w-full table-auto">
                            <thead>
                                <tr class="bg-blue-600 text-white">
                                    { for SortKey::all().into_iter().map(|key| {
                                        let onclick = {
                                            let picker = picker.clone();
                                            Callback::from(move |e: MouseEvent| {
                                                picker.set(Some(SortPicker {
                                                    key,
                                                    x: e.client_x(),
                                                    y: e.client_y(),
                                                }));
                                            })
                                        };
                                        let arrow = filter
                                            .sort
                                            .filter(|sort| sort.key == key)
                                            .map(|sort| html! { <SortArrow direction={sort.direction} /> });

                                        html! {
                                            <th class="px-4 py-2 cursor-pointer text-left" {onclick}>
                                                <div class="flex items-center justify-between gap-1">
                                                    {key.label()}
                                                    { for arrow }
                                                </div>
                                            </th>
                                        }
                                    })}
                                    <th class="px-4 py-2 text-left">{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for rows.iter().zip(row_keys(&rows)).map(|(record, key)| html! {
                                    <ComplaintRow key={key} record={(*record).clone()} />
                                })}
                            </tbody>
                        </table>
                        if rows.is_empty() {
                            <div class="text-center text-gray-500 py-8">
                                {"No complaints match the current search and filters."}
                            </div>
                        }
                    </div>
                }

                if let Some(open) = *picker {
                    <div
                        ref={picker_ref.clone()}
                        class="fixed z-50 p-2 w-48 bg-white border border-gray-300 rounded-lg shadow-lg"
                        style={format!("top: {}px; left: {}px;", open.y, open.x)}
                    >
                        { for [SortDirection::Ascending, SortDirection::Descending].into_iter().map(|direction| {
                            let onclick = on_pick_direction.reform(move |_: MouseEvent| direction);
                            html! {
                                <button class="block w-full text-left px-4 py-2 hover:bg-gray-100" {onclick}>
                                    {direction.label()}
                                </button>
                            }
                        })}
                    </div>
                }
            </div>
        </div>
    }
}

/// Row keys: the reference id, suffixed with the row index only when an id
/// repeats in the current rows.
fn row_keys(rows: &[&ComplaintRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    rows.iter()
        .enumerate()
        .map(|(index, record)| {
            if seen.insert(record.reference_id.as_str()) {
                record.reference_id.clone()
            } else {
                format!("{}#{}", record.reference_id, index)
            }
        })
        .collect()
}

#[derive(Properties, PartialEq)]
struct ChipProps {
    label: AttrValue,
    selected: bool,
    onclick: Callback<MouseEvent>,
}

#[function_component(Chip)]
fn chip(props: &ChipProps) -> Html {
    let style = if props.selected {
        "bg-blue-600 text-white border-blue-600"
    } else {
        "bg-white text-gray-700 border-gray-300 hover:bg-gray-100"
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            class={classes!("px-3", "py-1", "rounded-full", "border", "text-sm", "transition", style)}
        >
            {bucket_label(&props.label)}
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct SortArrowProps {
    direction: SortDirection,
}

#[function_component(SortArrow)]
fn sort_arrow(props: &SortArrowProps) -> Html {
    let path = match props.direction {
        SortDirection::Ascending => "M5 15l7-7 7 7",
        SortDirection::Descending => "M19 9l-7 7-7-7",
    };

    html! {
        <svg class="h-4 w-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={path} />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
struct ComplaintRowProps {
    record: ComplaintRecord,
}

#[function_component(ComplaintRow)]
fn complaint_row(props: &ComplaintRowProps) -> Html {
    let open = use_open_complaint();
    let record = &props.record;

    let on_view = {
        let record = record.clone();
        Callback::from(move |_: MouseEvent| open.emit(record.clone()))
    };

    html! {
        <tr class="hover:bg-gray-100 border-t border-gray-100">
            <td class="px-4 py-2">{&record.reference_id}</td>
            <td class="px-4 py-2">{&record.name}</td>
            <td class="px-4 py-2">{&record.pnr}</td>
            <td class="px-4 py-2">{&record.complaint_text}</td>
            <td class="px-4 py-2">{&record.location}</td>
            <td class="px-4 py-2">{&record.complaint_type}</td>
            <td class="px-4 py-2">{&record.urgency}</td>
            <td class="px-4 py-2 whitespace-nowrap">{record.display_timestamp()}</td>
            <td class="px-4 py-2">{&record.status}</td>
            <td class="px-4 py-2">
                <button
                    onclick={on_view}
                    class="bg-blue-500 text-white px-4 py-1 rounded-lg transition hover:bg-blue-600"
                >
                    {"View"}
                </button>
            </td>
        </tr>
    }
}
