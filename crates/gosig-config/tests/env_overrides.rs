use figment::Jail;
use gosig_config::{
    ConfigOverrides, DiscoveryOverrides, FormatOverrides, GosigConfig, PROJECT_CONFIG_FILE,
};

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file(PROJECT_CONFIG_FILE, "[format]\nmax_value_length = 10\n")?;
        jail.set_env("GOSIG_FORMAT__MAX_VALUE_LENGTH", "45");

        let config = GosigConfig::load().expect("config loads");
        assert_eq!(config.format.max_value_length, 45);
        Ok(())
    });
}

#[test]
fn env_list_accepts_comma_separated_values() {
    Jail::expect_with(|jail| {
        jail.set_env("GOSIG_DISCOVERY__EXCLUDE_SUFFIXES", "_test.go,_gen.go");

        let config = GosigConfig::load().expect("config loads");
        assert_eq!(
            config.discovery.exclude_suffixes,
            vec!["_test.go", "_gen.go"]
        );
        Ok(())
    });
}

#[test]
fn cli_overrides_beat_env() {
    Jail::expect_with(|jail| {
        jail.set_env("GOSIG_FORMAT__INCLUDE_PRIVATE", "false");
        jail.set_env("GOSIG_FORMAT__MAX_VALUE_LENGTH", "45");

        let overrides = ConfigOverrides {
            format: FormatOverrides {
                include_private: Some(true),
                ..FormatOverrides::default()
            },
            discovery: DiscoveryOverrides {
                extensions: Some(vec!["gno".to_string()]),
                ..DiscoveryOverrides::default()
            },
        };

        let config = GosigConfig::load_with_overrides(&overrides).expect("config loads");
        assert!(config.format.include_private);
        assert_eq!(config.format.max_value_length, 45, "unset overrides fall through");
        assert_eq!(config.discovery.extensions, vec![".gno"]);
        Ok(())
    });
}

#[test]
fn invalid_env_value_is_an_error() {
    Jail::expect_with(|jail| {
        jail.set_env("GOSIG_FORMAT__MAX_VALUE_LENGTH", "lots");
        assert!(GosigConfig::load().is_err());
        Ok(())
    });
}
