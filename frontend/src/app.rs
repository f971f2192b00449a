use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::components::LoginForm;
use crate::config::{AppConfig, ConfigProvider};
use crate::pages::{
    analytics::AnalyticsPage, complaint_details::ComplaintDetailsPage,
    complaints::DashboardPage, home::HomePage,
};
use crate::routes::Route;

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginForm /> },
        Route::Home => html! { <Layout><HomePage /></Layout> },
        Route::Dashboard => html! { <Layout><DashboardPage /></Layout> },
        Route::Analytics => html! { <Layout><AnalyticsPage /></Layout> },
        Route::ComplaintDetails => html! { <Layout><ComplaintDetailsPage /></Layout> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-100">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-gray-900">{"404"}</h1>
                    <p class="text-xl mt-4 text-gray-500">{"Page Not Found"}</p>
                </div>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ConfigProvider config={props.config.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ConfigProvider>
    }
}
