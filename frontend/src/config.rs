// Runtime configuration, resolved once at startup and shared through context.
use log::LevelFilter;
use yew::prelude::*;

pub const DEFAULT_COMPLAINTS_URL: &str = "http://meta.pylex.xyz:10927/api/complaints";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub complaints_url: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            complaints_url: DEFAULT_COMPLAINTS_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// A wasm bundle has no process environment, so the overrides are baked in
    /// at build time (`RAILEASE_COMPLAINTS_URL=... trunk build`).
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("RAILEASE_COMPLAINTS_URL"),
            option_env!("RAILEASE_LOG_LEVEL"),
        )
    }

    pub fn from_values(complaints_url: Option<&str>, log_level: Option<&str>) -> Self {
        let complaints_url = complaints_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_COMPLAINTS_URL)
            .to_string();

        let log_level = log_level
            .and_then(|level| level.trim().parse::<LevelFilter>().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            complaints_url,
            log_level,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfigProviderProps {
    pub config: AppConfig,
    pub children: Html,
}

#[function_component(ConfigProvider)]
pub fn config_provider(props: &ConfigProviderProps) -> Html {
    html! {
        <ContextProvider<AppConfig> context={props.config.clone()}>
            { props.children.clone() }
        </ContextProvider<AppConfig>>
    }
}

/// Hook to access the app configuration. Outside a provider the defaults apply.
#[hook]
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.complaints_url, DEFAULT_COMPLAINTS_URL);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(
            Some(" http://localhost:3000/api/complaints "),
            Some("debug"),
        );
        assert_eq!(config.complaints_url, "http://localhost:3000/api/complaints");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_blank_url_and_bad_level_fall_back() {
        let config = AppConfig::from_values(Some("   "), Some("chatty"));
        assert_eq!(config.complaints_url, DEFAULT_COMPLAINTS_URL);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }
}
