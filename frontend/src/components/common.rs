use yew::prelude::*;

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div class="flex justify-center items-center h-64">
            <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-500"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    pub children: Html,
}

/// White panel with a title row, used for every chart.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class="bg-white rounded-lg shadow-md border border-gray-200 flex flex-col">
            <div class="px-6 pt-5 pb-2">
                <h3 class="text-lg font-semibold text-gray-900">{&props.title}</h3>
                if let Some(description) = &props.description {
                    <p class="text-sm text-gray-500">{description}</p>
                }
            </div>
            <div class="px-6 pb-6 flex-1">
                {props.children.clone()}
            </div>
        </div>
    }
}
