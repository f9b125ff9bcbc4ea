use lazy_static::lazy_static;
use web_sys::window;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_APP_NAME: &str = "Channel Insights";

lazy_static! {
    pub static ref BACKEND_URL: String = get_backend_url();
}

/// Reads `window.ENV_CONFIG[key]`, the object `env.js` fills in at deploy time.
pub fn get_env_var(key: &str) -> Option<String> {
    let env_config = js_sys::Reflect::get(&window()?.into(), &"ENV_CONFIG".into()).ok()?;
    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - using built-in defaults");
        return None;
    }

    js_sys::Reflect::get(&env_config, &key.into())
        .ok()
        .and_then(|value| value.as_string())
        .filter(|value| !value.trim().is_empty())
}

pub fn get_backend_url() -> String {
    normalize_base_url(get_env_var("BACKEND_URL").as_deref())
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string())
}

pub fn is_debug_mode() -> bool {
    parse_flag(get_env_var("DEBUG_MODE").as_deref())
}

// Route paths are appended with a leading slash.
fn normalize_base_url(raw: Option<&str>) -> String {
    raw.map(|url| url.trim().trim_end_matches('/'))
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_BACKEND_URL)
        .to_string()
}

fn parse_flag(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("true" | "1" | "yes" | "on")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_drops_trailing_slashes() {
        assert_eq!(
            normalize_base_url(Some("https://api.example.com/")),
            "https://api.example.com"
        );
        assert_eq!(normalize_base_url(Some("  ")), DEFAULT_BACKEND_URL);
        assert_eq!(normalize_base_url(None), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn debug_flag_accepts_common_spellings() {
        assert!(parse_flag(Some("TRUE")));
        assert!(parse_flag(Some("1")));
        assert!(!parse_flag(Some("false")));
        assert!(!parse_flag(Some("maybe")));
        assert!(!parse_flag(None));
    }
}
