use railease_shared::chart::hue_color;
use railease_shared::{complaints_by_type, total_count};
use yew::prelude::*;

use crate::components::{PieChart, Spinner, bucket_label};
use crate::hooks::use_complaints;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let handle = use_complaints();

    if handle.is_loading() {
        return html! { <Spinner /> };
    }

    let by_type = complaints_by_type(&handle.complaints);
    let colors: Vec<String> = (0..by_type.len())
        .map(|i| hue_color(i, by_type.len()))
        .collect();

    html! {
        <div class="bg-white p-6 rounded-lg shadow-md">
            <h3 class="text-lg font-bold mb-4">
                {"Total Complaints: "}{total_count(&handle.complaints)}
            </h3>

            <PieChart groups={by_type.clone()} {colors} size={400.0} />

            <div class="mt-4">
                <h4 class="font-bold">{"Complaint Types:"}</h4>
                <ul>
                    { for by_type.iter().map(|group| html! {
                        <li>{format!("{}: {}", bucket_label(&group.key), group.count)}</li>
                    })}
                </ul>
            </div>
        </div>
    }
}
