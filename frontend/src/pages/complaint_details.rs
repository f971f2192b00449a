use std::rc::Rc;

use railease_shared::ComplaintRecord;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{MediaAttachment, use_selected_complaint};

#[derive(Properties, PartialEq)]
pub struct ComplaintDetailsProps {
    pub complaint: Option<Rc<ComplaintRecord>>,
    #[prop_or_default]
    pub on_back: Callback<MouseEvent>,
}

/// Read-only view of one complaint. Renders an error line when nothing was
/// handed over, e.g. after a reload on the detail route.
#[function_component(ComplaintDetails)]
pub fn complaint_details(props: &ComplaintDetailsProps) -> Html {
    let Some(complaint) = props.complaint.as_deref() else {
        return html! { <div>{"Error: No complaint data available."}</div> };
    };

    html! {
        <div class="min-h-screen bg-gray-100">
            <div class="container mx-auto px-4 py-8">
                <button onclick={props.on_back.clone()} class="text-blue-500 hover:underline mb-4">
                    {"Back to Complaints List"}
                </button>

                <div class="bg-white shadow-md p-6 rounded-lg">
                    <h1 class="text-2xl font-bold mb-4">{"Complaint Details"}</h1>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <Section title="User Information">
                            <Field label="Name" value={complaint.name.clone()} />
                            <Field label="Username" value={complaint.username.clone()} />
                            <Field label="Email" value={complaint.email.clone()} />
                            <Field label="Phone Number" value={complaint.phone_number.clone()} />
                        </Section>

                        <Section title="Complaint Information">
                            <Field label="Complaint" value={complaint.complaint_text.clone()} />
                            <Field label="PNR" value={complaint.pnr.clone()} />
                            <Field label="Type" value={complaint.complaint_type.clone()} />
                            <Field label="Urgency" value={complaint.urgency.clone()} />
                            <Field label="Sub-Category" value={complaint.sub_category.clone()} />
                            <Field label="Additional Details" value={complaint.additional_details.clone()} />
                        </Section>

                        <Section title="Location Details">
                            <Field label="Village or City" value={complaint.village_or_city.clone()} />
                            <Field label="District" value={complaint.district.clone()} />
                            <Field label="State" value={complaint.state.clone()} />
                            <Field label="Location" value={complaint.location.clone()} />
                        </Section>

                        <Section title="Status and Timestamp">
                            <Field label="Reference ID" value={complaint.reference_id.clone()} />
                            <Field label="Status" value={complaint.status.clone()} />
                            <Field label="Timestamp" value={complaint.display_timestamp()} />
                        </Section>
                    </div>

                    if !complaint.media_attachments.is_empty() {
                        <div class="mt-6">
                            <h2 class="text-lg font-semibold">{"Media Attachments"}</h2>
                            <ul>
                                { for complaint.media_attachments.iter().map(|media| html! {
                                    <MediaAttachment media={media.clone()} />
                                })}
                            </ul>
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    title: AttrValue,
    children: Children,
}

#[function_component(Section)]
fn section(props: &SectionProps) -> Html {
    html! {
        <div>
            <h2 class="text-lg font-semibold">{&props.title}</h2>
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FieldProps {
    label: AttrValue,
    value: AttrValue,
}

#[function_component(Field)]
fn field(props: &FieldProps) -> Html {
    html! {
        <p><strong>{format!("{}:", props.label)}</strong>{" "}{&props.value}</p>
    }
}

/// Detail route: shows the record this history entry was opened with.
#[function_component(ComplaintDetailsPage)]
pub fn complaint_details_page() -> Html {
    let complaint = use_selected_complaint();
    let navigator = use_navigator();

    let on_back = Callback::from(move |_: MouseEvent| match &navigator {
        Some(navigator) => navigator.back(),
        None => log::warn!("no router available; cannot go back"),
    });

    html! {
        <ComplaintDetails {complaint} {on_back} />
    }
}
