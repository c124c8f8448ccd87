/// Hosted backend the public pages pointed at. A local backend (the admin
/// workflow in development) is selected via the flag or the environment
/// variable instead.
pub const DEFAULT_API_URL: &str = "https://usermanagement-backend-kx60.onrender.com";

pub const API_URL_ENV: &str = "USERDESK_API_URL";

/// Resolve the API base address: `--base-url` flag, then `USERDESK_API_URL`,
/// then the hosted default.
pub fn api_base_url(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var(API_URL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins() {
        assert_eq!(
            api_base_url(Some("http://localhost:5000".into())),
            "http://localhost:5000"
        );
    }

    #[test]
    fn test_resolution_always_yields_an_address() {
        assert!(!api_base_url(None).is_empty());
    }
}
