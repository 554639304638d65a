use voxchat::{Config, MergeSemantics};

#[test]
fn test_config_load_from_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("voxchat.toml");

    std::fs::write(
        &path,
        r#"
        [service]
        name = "voxchat-test"

        [service.http]
        bind = "127.0.0.1"
        port = 9000

        [recognizer]
        locale = "en-GB"
        complete_silence_timeout_ms = 1500
        possibly_complete_silence_timeout_ms = 1500
        script_path = "demos/greeting_script.json"

        [transcript]
        merge = "replace"
        "#,
    )
    .unwrap();

    let cfg = Config::load(path.to_str().unwrap()).unwrap();

    assert_eq!(cfg.service.name, "voxchat-test");
    assert_eq!(cfg.service.http.port, 9000);
    assert_eq!(cfg.recognizer.locale, "en-GB");
    assert_eq!(cfg.recognizer.complete_silence_timeout_ms, 1500);
    assert_eq!(
        cfg.recognizer.script_path.as_deref(),
        Some("demos/greeting_script.json")
    );
    assert_eq!(cfg.transcript.merge, MergeSemantics::Replace);
}

#[test]
fn test_config_load_missing_file_errors() {
    assert!(Config::load("no/such/config").is_err());
}
