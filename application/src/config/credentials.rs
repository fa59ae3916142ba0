use battle_domain::Provider;

/// The two API keys, threaded explicitly through the controller
///
/// A key that is absent or blank counts as missing. `Debug` never prints
/// key material.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub openai_api_key: Option<String>,
    pub perplexity_api_key: Option<String>,
}

impl Credentials {
    pub fn new(openai_api_key: impl Into<String>, perplexity_api_key: impl Into<String>) -> Self {
        Self {
            openai_api_key: Some(openai_api_key.into()),
            perplexity_api_key: Some(perplexity_api_key.into()),
        }
    }

    /// The usable key for a provider
    pub fn key_for(&self, provider: Provider) -> Option<&str> {
        let key = match provider {
            Provider::OpenAi => self.openai_api_key.as_deref(),
            Provider::Perplexity => self.perplexity_api_key.as_deref(),
        };
        key.filter(|k| !k.trim().is_empty())
    }

    /// Both keys present and non-blank
    pub fn is_complete(&self) -> bool {
        Provider::ALL.iter().all(|p| self.key_for(*p).is_some())
    }

    /// Providers whose key is missing, in column order
    pub fn missing(&self) -> Vec<Provider> {
        Provider::ALL
            .into_iter()
            .filter(|p| self.key_for(*p).is_none())
            .collect()
    }

    /// Layer `other` on top of `self`: any usable key in `other` wins
    pub fn overlay(mut self, other: &Credentials) -> Self {
        if let Some(key) = other.key_for(Provider::OpenAi) {
            self.openai_api_key = Some(key.to_string());
        }
        if let Some(key) = other.key_for(Provider::Perplexity) {
            self.perplexity_api_key = Some(key.to_string());
        }
        self
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = |p: Provider| if self.key_for(p).is_some() { "<set>" } else { "<missing>" };
        f.debug_struct("Credentials")
            .field("openai_api_key", &mask(Provider::OpenAi))
            .field("perplexity_api_key", &mask(Provider::Perplexity))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_counts_as_missing() {
        let creds = Credentials::new("sk-abc", "   ");
        assert!(!creds.is_complete());
        assert_eq!(creds.missing(), vec![Provider::Perplexity]);
        assert_eq!(creds.key_for(Provider::OpenAi), Some("sk-abc"));
    }

    #[test]
    fn test_complete() {
        assert!(Credentials::new("sk-abc", "pplx-def").is_complete());
        assert!(!Credentials::default().is_complete());
    }

    #[test]
    fn test_overlay_prefers_usable_keys() {
        let stored = Credentials::new("sk-stored", "pplx-stored");
        let env = Credentials {
            openai_api_key: Some("sk-env".to_string()),
            perplexity_api_key: Some(String::new()),
        };
        let merged = stored.overlay(&env);
        assert_eq!(merged.key_for(Provider::OpenAi), Some("sk-env"));
        assert_eq!(merged.key_for(Provider::Perplexity), Some("pplx-stored"));
    }

    #[test]
    fn test_debug_hides_keys() {
        let rendered = format!("{:?}", Credentials::new("sk-secret", ""));
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<set>"));
        assert!(rendered.contains("<missing>"));
    }
}
