use acad_config::AcademiaConfig;
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("ACADEMIA_API__BASE_URL", "http://127.0.0.1:9000");
        jail.set_env("ACADEMIA_CHAT__REDIRECT_DELAY_MS", "250");
        jail.set_env("ACADEMIA_ADMIN__EMAIL", "admin@eafit.edu.co");

        let config = AcademiaConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.chat.redirect_delay_ms, 250);
        assert_eq!(config.admin.email, "admin@eafit.edu.co");
        assert!(!config.admin.is_configured());
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".academia")?;
        jail.create_file(
            ".academia/config.toml",
            r#"
[general]
default_limit = 7
"#,
        )?;
        jail.set_env("ACADEMIA_GENERAL__DEFAULT_LIMIT", "12");

        let config = AcademiaConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 12);
        Ok(())
    });
}
