use common::config::AppConfig;
use gloo_net::http::Request;
use log::warn;

const CONFIG_PATH: &str = "/app-config.json";

/// Fetches the runtime configuration from the host, falling back to
/// defaults when it is unreachable or malformed.
pub async fn load() -> AppConfig {
    let response = match Request::get(CONFIG_PATH).send().await {
        Ok(resp) if resp.ok() => resp,
        Ok(resp) => {
            warn!("{CONFIG_PATH} returned {}; using defaults", resp.status());
            return AppConfig::default();
        }
        Err(err) => {
            warn!("Could not load {CONFIG_PATH}: {err}; using defaults");
            return AppConfig::default();
        }
    };

    response.json::<AppConfig>().await.unwrap_or_else(|err| {
        warn!("Invalid {CONFIG_PATH}: {err}; using defaults");
        AppConfig::default()
    })
}
