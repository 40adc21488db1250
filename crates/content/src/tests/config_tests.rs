use super::*;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let pairs: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| pairs.get(name).cloned()
}

fn write_settings(dir: &Path, raw: &str) -> PathBuf {
    let path = dir.join(SETTINGS_FILE_NAME);
    fs::write(&path, raw).expect("write settings");
    path
}

#[test]
fn defaults_match_tailwind_md_breakpoint() {
    let settings = Settings::default();
    assert_eq!(settings.nav_breakpoint_px, 768.0);
    assert_eq!(settings.reveal_threshold, 0.1);
    assert_eq!(settings.content_path, None);
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn file_overrides_known_keys_and_accepts_integer_widths() {
    let mut settings = Settings::default();
    apply_file_overrides(
        &mut settings,
        r#"
        content_path = "site/content.toml"
        nav_breakpoint_px = 1024
        reveal_threshold = 0.25
        log_filter = "view_core=debug"
        unrelated = true
        "#,
        Path::new("/srv/portfolio"),
    )
    .expect("valid settings");
    assert_eq!(
        settings.content_path,
        Some(PathBuf::from("/srv/portfolio/site/content.toml"))
    );
    assert_eq!(settings.nav_breakpoint_px, 1024.0);
    assert_eq!(settings.reveal_threshold, 0.25);
    assert_eq!(settings.log_filter, "view_core=debug");
}

#[test]
fn absolute_content_path_is_kept() {
    let mut settings = Settings::default();
    apply_file_overrides(
        &mut settings,
        r#"content_path = "/opt/site.toml""#,
        Path::new("/srv/portfolio"),
    )
    .expect("valid settings");
    assert_eq!(settings.content_path, Some(PathBuf::from("/opt/site.toml")));
}

#[test]
fn malformed_file_leaves_defaults() {
    let mut settings = Settings::default();
    let err = apply_file_overrides(&mut settings, "nav_breakpoint_px = = 3", Path::new("."))
        .expect_err("malformed");
    assert!(!err.is_empty());
    assert_eq!(settings, Settings::default());
}

#[test]
fn app_prefixed_env_wins_over_legacy_name() {
    let mut settings = Settings::default();
    let diagnostics = apply_env_overrides(
        &mut settings,
        env(&[
            ("PORTFOLIO_CONTENT", "legacy.toml"),
            ("APP__CONTENT_PATH", "preferred.toml"),
            ("APP__NAV_BREAKPOINT_PX", "900"),
            ("PORTFOLIO_LOG", "debug"),
        ]),
    );
    assert!(diagnostics.is_empty());
    assert_eq!(settings.content_path, Some(PathBuf::from("preferred.toml")));
    assert_eq!(settings.nav_breakpoint_px, 900.0);
    assert_eq!(settings.log_filter, "debug");
}

#[test]
fn non_numeric_env_values_are_ignored_and_reported() {
    let mut settings = Settings::default();
    let diagnostics = apply_env_overrides(
        &mut settings,
        env(&[
            ("APP__NAV_BREAKPOINT_PX", "wide"),
            ("APP__REVEAL_THRESHOLD", "half"),
        ]),
    );
    assert_eq!(settings, Settings::default());
    assert_eq!(
        diagnostics,
        vec![
            SettingsDiagnostic::NonNumericEnv {
                name: "APP__NAV_BREAKPOINT_PX",
                value: "wide".to_string(),
            },
            SettingsDiagnostic::NonNumericEnv {
                name: "APP__REVEAL_THRESHOLD",
                value: "half".to_string(),
            },
        ]
    );
}

#[test]
fn working_dir_file_wins_over_config_dir() {
    let cwd = tempfile::tempdir().expect("cwd");
    let config = tempfile::tempdir().expect("config dir");
    let local = write_settings(cwd.path(), "reveal_threshold = 0.5\n");
    write_settings(config.path(), "reveal_threshold = 0.9\nnav_breakpoint_px = 1000\n");

    assert_eq!(
        settings_file_path(cwd.path(), Some(config.path())),
        Some(local.clone())
    );
    let loaded = load_settings_from(cwd.path(), Some(config.path()), env(&[]));
    assert_eq!(loaded.source, Some(local));
    assert_eq!(loaded.settings.reveal_threshold, 0.5);
    assert_eq!(loaded.settings.nav_breakpoint_px, 768.0);
    assert!(loaded.diagnostics.is_empty());
}

#[test]
fn config_dir_file_is_used_and_resolves_content_relative_to_itself() {
    let cwd = tempfile::tempdir().expect("cwd");
    let config = tempfile::tempdir().expect("config dir");
    let user = write_settings(config.path(), "content_path = \"content.toml\"\n");

    let loaded = load_settings_from(cwd.path(), Some(config.path()), env(&[]));
    assert_eq!(loaded.source, Some(user));
    assert_eq!(
        loaded.settings.content_path,
        Some(config.path().join("content.toml"))
    );
}

#[test]
fn no_settings_file_yields_defaults() {
    let cwd = tempfile::tempdir().expect("cwd");
    let config = tempfile::tempdir().expect("config dir");
    assert_eq!(settings_file_path(cwd.path(), Some(config.path())), None);
    assert_eq!(settings_file_path(cwd.path(), None), None);

    let loaded = load_settings_from(cwd.path(), None, env(&[]));
    assert_eq!(loaded.settings, Settings::default());
    assert_eq!(loaded.source, None);
}

#[test]
fn env_overrides_settings_file() {
    let cwd = tempfile::tempdir().expect("cwd");
    write_settings(
        cwd.path(),
        "content_path = \"from_file.toml\"\nnav_breakpoint_px = 1024\n",
    );

    let loaded = load_settings_from(
        cwd.path(),
        None,
        env(&[
            ("APP__CONTENT_PATH", "/env/content.toml"),
            ("APP__NAV_BREAKPOINT_PX", "640"),
        ]),
    );
    assert_eq!(
        loaded.settings.content_path,
        Some(PathBuf::from("/env/content.toml"))
    );
    assert_eq!(loaded.settings.nav_breakpoint_px, 640.0);
}

#[test]
fn malformed_settings_file_is_reported_and_env_still_applies() {
    let cwd = tempfile::tempdir().expect("cwd");
    let path = write_settings(cwd.path(), "nav_breakpoint_px = = 3\n");

    let loaded = load_settings_from(cwd.path(), None, env(&[("PORTFOLIO_LOG", "debug")]));
    assert_eq!(loaded.settings.nav_breakpoint_px, 768.0);
    assert_eq!(loaded.settings.log_filter, "debug");
    assert_eq!(loaded.diagnostics.len(), 1);
    match &loaded.diagnostics[0] {
        SettingsDiagnostic::MalformedFile { path: reported, .. } => assert_eq!(reported, &path),
        other => panic!("unexpected diagnostic: {other:?}"),
    }
    assert!(loaded.diagnostics[0]
        .to_string()
        .starts_with("ignoring malformed settings file"));
}
