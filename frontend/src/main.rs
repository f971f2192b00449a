use railease_frontend::{App, AppConfig, AppProps, logging};

const TAILWIND_CSS: &str = "https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css";

fn main() {
    let config = AppConfig::from_env();
    logging::init(config.log_level);

    let document = gloo::utils::document();
    let head = gloo::utils::head();

    // Load Tailwind CSS
    match document.create_element("link") {
        Ok(tailwind) => {
            tailwind.set_attribute("href", TAILWIND_CSS).ok();
            tailwind.set_attribute("rel", "stylesheet").ok();
            head.append_child(&tailwind).ok();
        }
        Err(e) => log::warn!("could not create stylesheet link: {:?}", e),
    }

    log::info!("starting dashboard against {}", config.complaints_url);
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
