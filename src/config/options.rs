// src/config/options.rs
use std::time::Duration;

use super::consts::*;

/// How pages are requested. Defaults point at Bulbapedia.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub base_url: String,
    pub page_suffix: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            page_suffix: s!(PAGE_SUFFIX),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
        }
    }
}

impl FetchOptions {
    /// Full page URL for an entity, e.g. `.../wiki/Mr._Mime_(Pokémon)`.
    /// The title is percent-encoded so `#`, `?` and `/` stay inside the one path segment.
    pub fn page_url(&self, entity: &str) -> String {
        let title = crate::core::sanitize::page_title(entity);
        let title = urlencoding::encode(&title);
        let mut base = self.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        join!(base, &title, &self.page_suffix)
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        url.clone_into(&mut self.base_url);
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_uses_underscores_and_suffix() {
        let opts = FetchOptions::default();
        assert_eq!(
            opts.page_url("Mr. Mime"),
            "https://bulbapedia.bulbagarden.net/wiki/Mr._Mime_(Pokémon)"
        );
    }

    #[test]
    fn page_url_escapes_url_syntax_in_names() {
        let opts = FetchOptions::default();
        let base = "https://bulbapedia.bulbagarden.net/wiki/";
        assert_eq!(opts.page_url("Pikachu#x"), format!("{base}Pikachu%23x_(Pokémon)"));
        assert_eq!(opts.page_url("Pikachu?"), format!("{base}Pikachu%3F_(Pokémon)"));
        assert_eq!(opts.page_url("../Main_Page"), format!("{base}..%2FMain_Page_(Pokémon)"));
        assert_eq!(opts.page_url("Farfetch'd"), format!("{base}Farfetch%27d_(Pokémon)"));
        assert_eq!(opts.page_url("Flabébé"), format!("{base}Flab%C3%A9b%C3%A9_(Pokémon)"));
    }

    #[test]
    fn page_url_adds_missing_slash() {
        let opts = FetchOptions::default().with_base_url("http://localhost:8080/wiki");
        assert_eq!(opts.page_url("Pikachu"), "http://localhost:8080/wiki/Pikachu_(Pokémon)");
    }
}
