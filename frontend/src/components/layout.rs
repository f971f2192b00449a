use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Html,
}

/// Sidebar + header shell around every route except login.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let sidebar_collapsed = use_state(|| false);

    let toggle_sidebar = {
        let sidebar_collapsed = sidebar_collapsed.clone();
        Callback::from(move |_| sidebar_collapsed.set(!*sidebar_collapsed))
    };

    html! {
        <div class="flex h-screen">
            <Sidebar collapsed={*sidebar_collapsed} on_toggle={toggle_sidebar} />
            <div class="flex-grow flex flex-col overflow-hidden">
                <Header />
                <main class="flex-grow p-4 bg-gray-100 overflow-y-auto">
                    {props.children.clone()}
                </main>
            </div>
        </div>
    }
}

// ===== Sidebar =====

#[derive(Properties, PartialEq)]
struct SidebarProps {
    collapsed: bool,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(Sidebar)]
fn sidebar(props: &SidebarProps) -> Html {
    let current_route = use_route::<Route>().unwrap_or(Route::Home);
    let width = if props.collapsed { "w-24" } else { "w-64" };

    html! {
        <aside class={format!("border-r bg-gray-50 h-full transition-all duration-300 {} hidden md:block relative", width)}>
            <div class="flex h-full flex-col gap-2">
                // Logo
                <div class="flex h-14 items-center border-b px-4 lg:h-16 lg:px-6">
                    <Link<Route> to={Route::Home} classes="flex items-center space-x-2 font-semibold">
                        <div class={classes!("w-8", "h-8", "bg-blue-600", "rounded", "flex", "items-center", "justify-center", props.collapsed.then_some("mx-auto"))}>
                            <span class="text-white font-bold text-lg">{"R"}</span>
                        </div>
                        if !props.collapsed {
                            <span class="text-gray-900">{"RailEase"}</span>
                        }
                    </Link<Route>>
                </div>

                // Navigation
                <nav class="flex-1 overflow-auto grid items-start content-start px-2 text-sm font-medium lg:px-4">
                    <NavItem
                        route={Route::Dashboard}
                        label="Dashboard"
                        icon="home"
                        current={current_route.clone()}
                        collapsed={props.collapsed}
                    />
                    <NavItem
                        route={Route::Analytics}
                        label="Analytics"
                        icon="chart"
                        current={current_route.clone()}
                        collapsed={props.collapsed}
                    />
                </nav>

                // Collapse / expand
                <button
                    onclick={props.on_toggle.clone()}
                    class="absolute bottom-4 right-4 text-gray-500 hover:text-blue-600 transition-all"
                >
                    if props.collapsed {
                        <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M13 5l7 7-7 7M5 5l7 7-7 7"/>
                        </svg>
                    } else {
                        <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M11 19l-7-7 7-7m8 14l-7-7 7-7"/>
                        </svg>
                    }
                </button>
            </div>
        </aside>
    }
}

#[derive(Properties, PartialEq)]
struct NavItemProps {
    route: Route,
    label: &'static str,
    icon: &'static str,
    current: Route,
    collapsed: bool,
}

#[function_component(NavItem)]
fn nav_item(props: &NavItemProps) -> Html {
    let active = if props.route == props.current {
        "bg-blue-700 text-white"
    } else {
        "text-gray-500 hover:text-blue-600"
    };
    let align = if props.collapsed { "justify-center" } else { "" };

    let icon = match props.icon {
        "home" => html! {
            <svg class="h-4 w-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6"/>
            </svg>
        },
        "chart" => html! {
            <svg class="h-4 w-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M7 12l3-3 3 3 4-4M8 21l4-4 4 4M3 4h18M4 4h16v12a1 1 0 01-1 1H5a1 1 0 01-1-1V4z"/>
            </svg>
        },
        _ => html! { <span class="h-4 w-4"></span> },
    };

    html! {
        <Link<Route> to={props.route.clone()}
            classes={classes!("flex", "items-center", "gap-3", "rounded-lg", "px-3", "py-2", "transition-all", align, active)}
        >
            {icon}
            if !props.collapsed {
                {props.label}
            }
        </Link<Route>>
    }
}

// ===== Header =====

#[function_component(Header)]
fn header() -> Html {
    html! {
        <header class="flex items-center gap-4 border-b bg-gray-50 px-4 h-16 lg:px-6 flex-shrink-0">
            // Mobile menu
            <button class="md:hidden flex items-center justify-center border rounded-full p-2">
                <svg class="h-5 w-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                </svg>
                <span class="sr-only">{"Toggle navigation menu"}</span>
            </button>

            <div class="flex-grow"></div>

            <div class="flex items-center gap-4">
                <button class="h-8 w-8 flex items-center justify-center border rounded-full">
                    <svg class="h-4 w-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 17h5l-1.405-1.405A2.032 2.032 0 0118 14.158V11a6.002 6.002 0 00-4-5.659V5a2 2 0 10-4 0v.341C7.67 6.165 6 8.388 6 11v3.159c0 .538-.214 1.055-.595 1.436L4 17h5m6 0v1a3 3 0 11-6 0v-1m6 0H9"/>
                    </svg>
                    <span class="sr-only">{"Toggle notifications"}</span>
                </button>
                <button class="h-8 w-8 flex items-center justify-center border rounded-full">
                    <svg class="h-5 w-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5.121 17.804A13.937 13.937 0 0112 16c2.5 0 4.847.655 6.879 1.804M15 10a3 3 0 11-6 0 3 3 0 016 0zm6 2a9 9 0 11-18 0 9 9 0 0118 0z"/>
                    </svg>
                    <span class="sr-only">{"Toggle user menu"}</span>
                </button>
            </div>
        </header>
    }
}
