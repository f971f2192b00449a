use railease_shared::chart::palette_color;
use railease_shared::{complaints_by_day, complaints_by_location, complaints_by_type};
use yew::prelude::*;

use crate::components::{BarChart, Card, LineChart, PieChart, Spinner};
use crate::hooks::use_complaints;

#[function_component(AnalyticsPage)]
pub fn analytics_page() -> Html {
    let handle = use_complaints();

    if handle.is_loading() {
        return html! { <Spinner /> };
    }

    let by_type = complaints_by_type(&handle.complaints);
    let type_colors: Vec<String> = (0..by_type.len())
        .map(|i| palette_color(i).to_string())
        .collect();
    let by_day = complaints_by_day(&handle.complaints);
    let by_location = complaints_by_location(&handle.complaints);

    html! {
        <div class="grid grid-cols-1 xl:grid-cols-2 gap-6 p-4">
            <Card title="Complaints by Type" description="Complaints distribution by type">
                <PieChart groups={by_type} colors={type_colors} show_labels=true />
            </Card>

            <Card title="Complaints by Day" description="Complaints trends over time">
                <LineChart groups={by_day} />
            </Card>

            <Card title="Complaints by Location (State)" description="Complaints breakdown by location">
                <BarChart groups={by_location} />
            </Card>
        </div>
    }
}
