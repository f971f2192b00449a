use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/analytics")]
    Analytics,
    #[at("/complaint-details")]
    ComplaintDetails,
    #[not_found]
    #[at("/404")]
    NotFound,
}
