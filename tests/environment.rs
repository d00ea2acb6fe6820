use anyhow::Result;
use platform_config::{ConfigError, Settings, initialize_environment};

#[test]
fn initialize_creates_layout_under_home() -> Result<()> {
    let home = tempfile::tempdir()?;
    let settings = Settings::rooted_at(home.path());

    let ensured = initialize_environment(&settings.paths)?;

    assert_eq!(ensured.first(), Some(&settings.paths.resources_dir));
    assert!(settings.paths.icons_dir.is_dir());
    assert!(settings.paths.templates_dir.is_dir());
    assert!(settings.reports.export_dir.is_dir());
    assert!(settings.backup.dir.is_dir());
    // only the required set is created
    assert!(!settings.paths.models_dir.exists());
    Ok(())
}

#[test]
fn failure_names_the_blocked_directory() -> Result<()> {
    let home = tempfile::tempdir()?;
    let settings = Settings::rooted_at(home.path());
    std::fs::create_dir_all(&settings.paths.resources_dir)?;
    std::fs::write(&settings.paths.export_dir, b"not a directory")?;

    let err = initialize_environment(&settings.paths).unwrap_err();
    match &err {
        ConfigError::CreateDir { path, .. } => assert_eq!(path, &settings.paths.export_dir),
        other => panic!("unexpected error {other}"),
    }
    assert!(err.to_string().ends_with("exports"));
    // directories before the failure were still created
    assert!(settings.paths.templates_dir.is_dir());
    Ok(())
}
