use anyhow::Context;
use hearth_config::HearthConfig;

const REDACTED: &str = "********";

/// Handle `hearth config`.
pub fn handle(config: &HearthConfig) -> anyhow::Result<()> {
    println!("{}", render(config)?);
    Ok(())
}

/// Effective configuration as TOML, with secrets redacted.
fn render(config: &HearthConfig) -> anyhow::Result<String> {
    let mut shown = config.clone();
    if shown.backend.has_api_key() {
        shown.backend.api_key = REDACTED.to_string();
    }
    toml::to_string_pretty(&shown).context("failed to render configuration as TOML")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_is_redacted() {
        let mut config = HearthConfig::default();
        config.backend.api_key = "s3cret".into();
        let text = render(&config).expect("config should render");
        assert!(!text.contains("s3cret"));
        assert!(text.contains(REDACTED));
    }

    #[test]
    fn rendered_toml_has_every_section() {
        let text = render(&HearthConfig::default()).expect("config should render");
        for section in ["[backend]", "[filters]", "[general]"] {
            assert!(text.contains(section), "missing {section} in:\n{text}");
        }
        assert!(text.contains("default_sort = \"newest\""));
    }
}
