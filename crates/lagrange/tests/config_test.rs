use lagrange::LagrangeConfig;
use lagrange_error::LagrangeErrorKind;
use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;

fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn bundled_defaults() {
    let config = LagrangeConfig::load_layers(None, false, env(&[])).unwrap();

    assert_eq!(config.waifu().base_url(), "https://api.waifu.im");
    assert_eq!(*config.widget().timeout_secs(), 500);
    assert_eq!(config.widget_timeout(), Duration::from_secs(500));
    assert!(config.discord().token().is_empty());
}

#[test]
fn defaults_fail_validation_without_tokens() {
    let config = LagrangeConfig::load_layers(None, false, env(&[])).unwrap();

    let err = config.validate().unwrap_err();
    assert!(matches!(err.kind(), LagrangeErrorKind::Config(_)));
    assert!(err.to_string().contains("discord.token"));
}

#[test]
fn file_overrides_defaults() {
    let file = config_file(
        r#"
[discord]
token = "discord-token"

[waifu]
token = "waifu-token"

[widget]
timeout_secs = 60
"#,
    );

    let config = LagrangeConfig::load_layers(Some(file.path()), false, env(&[])).unwrap();

    assert_eq!(config.discord().token(), "discord-token");
    assert_eq!(config.waifu().token(), "waifu-token");
    assert_eq!(config.waifu().base_url(), "https://api.waifu.im");
    assert_eq!(config.widget_timeout(), Duration::from_secs(60));
    assert!(config.validate().is_ok());
}

#[test]
fn environment_overrides_file() {
    let file = config_file(
        r#"
[discord]
token = "from-file"
"#,
    );

    let config = LagrangeConfig::load_layers(
        Some(file.path()),
        false,
        env(&[
            ("LAGRANGE_DISCORD__TOKEN", "from-env"),
            ("LAGRANGE_WAIFU__TOKEN", "waifu"),
            ("LAGRANGE_WIDGET__TIMEOUT_SECS", "30"),
        ]),
    )
    .unwrap();

    assert_eq!(config.discord().token(), "from-env");
    assert_eq!(config.waifu().token(), "waifu");
    assert_eq!(*config.widget().timeout_secs(), 30);
}

#[test]
fn numeric_looking_tokens_stay_verbatim() {
    let config = LagrangeConfig::load_layers(
        None,
        false,
        env(&[
            ("LAGRANGE_DISCORD__TOKEN", "0042"),
            ("LAGRANGE_WAIFU__TOKEN", "00123456"),
            ("LAGRANGE_WIDGET__TIMEOUT_SECS", "45"),
        ]),
    )
    .unwrap();

    assert_eq!(config.discord().token(), "0042");
    assert_eq!(config.waifu().token(), "00123456");
    assert_eq!(config.widget_timeout(), Duration::from_secs(45));
}

#[test]
fn missing_explicit_file_is_an_error() {
    let path = std::env::temp_dir().join("lagrange-does-not-exist.toml");
    let err = LagrangeConfig::load_layers(Some(&path), false, env(&[])).unwrap_err();
    assert!(matches!(err.kind(), LagrangeErrorKind::Config(_)));
}

#[test]
fn zero_timeout_is_rejected() {
    let config = LagrangeConfig::load_layers(
        None,
        false,
        env(&[
            ("LAGRANGE_DISCORD__TOKEN", "d"),
            ("LAGRANGE_WAIFU__TOKEN", "w"),
            ("LAGRANGE_WIDGET__TIMEOUT_SECS", "0"),
        ]),
    )
    .unwrap();

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("timeout_secs"));
}

#[test]
fn redaction_hides_tokens_only() {
    let config = LagrangeConfig::load_layers(
        None,
        false,
        env(&[("LAGRANGE_DISCORD__TOKEN", "secret")]),
    )
    .unwrap();

    let shown = config.redacted();
    assert_eq!(shown.discord().token(), "<redacted>");
    assert_eq!(shown.waifu().token(), "");
    assert_eq!(shown.waifu().base_url(), config.waifu().base_url());
}
