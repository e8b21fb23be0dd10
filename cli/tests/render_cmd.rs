//! Integration tests for the render pipeline of the CLI library: snapshot files, design files,
//! policy directories and output shapes.

use std::path::Path;

use cli::{
    build_snapshot, format_templates, load_policies, render, CliError, OutputFormat,
    RenderOptions,
};
use config::Settings;
use copybolt::{DatabaseState, TemplateRegistry};

fn write(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

/// **Scenario**: a YAML snapshot file drives the directive; a flag overrides its state.
#[test]
fn render_from_yaml_snapshot_with_flag_override() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = write(
        dir.path(),
        "snapshot.yaml",
        "working_directory: /srv/copy\ndatabase_state: connected-with-project\ncredentials:\n  url: https://x.supabase.co\n  anon_key: abc123\n",
    );
    let opts = RenderOptions {
        snapshot: Some(snapshot),
        db_state: Some(DatabaseState::ConnectedNoProject),
        ..Default::default()
    };
    let s = build_snapshot(&Settings::default(), &opts).unwrap();
    assert_eq!(s.working_directory, "/srv/copy");
    let out = render(&s, &Default::default(), &opts).unwrap();
    assert!(out.contains("no project is selected"));
    assert!(!out.contains("VITE_SUPABASE_URL"));
}

#[test]
fn render_from_json_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = write(
        dir.path(),
        "snapshot.json",
        r#"{"working_directory":"/home/project","database_state":"connected-with-project","credentials":{"url":"https://x.supabase.co","anon_key":"abc123"}}"#,
    );
    let opts = RenderOptions {
        snapshot: Some(snapshot),
        ..Default::default()
    };
    let s = build_snapshot(&Settings::default(), &opts).unwrap();
    let out = render(&s, &Default::default(), &opts).unwrap();
    assert!(out.contains("VITE_SUPABASE_URL=https://x.supabase.co"));
    assert!(out.contains("VITE_SUPABASE_ANON_KEY=abc123"));
}

#[test]
fn malformed_snapshot_is_reported_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = write(dir.path(), "bad.json", "{ not json");
    let opts = RenderOptions {
        snapshot: Some(snapshot),
        ..Default::default()
    };
    let err = build_snapshot(&Settings::default(), &opts).unwrap_err();
    assert!(matches!(err, CliError::ParseSnapshot { .. }));
    assert!(err.to_string().contains("bad.json"));
}

/// **Scenario**: a design file is embedded and can be read back out of the section.
#[test]
fn design_file_reaches_design_section() {
    let dir = tempfile::tempdir().unwrap();
    let design = write(
        dir.path(),
        "design.json",
        r##"{"font":"Inter","palette":{"primary":"#0000FF"},"features":["dark-mode"]}"##,
    );
    let opts = RenderOptions {
        design: Some(design),
        section: Some("user_provided_design".into()),
        ..Default::default()
    };
    let s = build_snapshot(&Settings::default(), &opts).unwrap();
    let out = render(&s, &Default::default(), &opts).unwrap();
    assert!(out.contains(r#"FONT: "Inter""#));
    assert!(out.contains(r##"COLOR PALETTE: {"primary":"#0000FF"}"##));
    assert!(out.contains(r#"FEATURES: ["dark-mode"]"#));
}

#[test]
fn unknown_section_is_an_error() {
    let opts = RenderOptions {
        section: Some("no_such_section".into()),
        ..Default::default()
    };
    let s = build_snapshot(&Settings::default(), &opts).unwrap();
    let err = render(&s, &Default::default(), &opts).unwrap_err();
    assert!(err.to_string().contains("no_such_section"));
}

#[test]
fn empty_work_dir_flag_fails_with_configuration_error() {
    let opts = RenderOptions {
        work_dir: Some(String::new()),
        ..Default::default()
    };
    let s = build_snapshot(&Settings::default(), &opts).unwrap();
    let err = render(&s, &Default::default(), &opts).unwrap_err();
    assert!(matches!(err, CliError::Configuration(_)));
}

#[test]
fn json_output_carries_state() {
    let opts = RenderOptions {
        json: true,
        db_state: Some(DatabaseState::ConnectedNoProject),
        ..Default::default()
    };
    let s = build_snapshot(&Settings::default(), &opts).unwrap();
    let out = render(&s, &Default::default(), &opts).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["database_state"], "connected-no-project");
    assert!(v["directive"].as_str().unwrap().contains("<action_protocol_rules>"));
}

/// **Scenario**: an explicit policy directory must exist; its overrides are applied.
#[test]
fn explicit_policy_dir() {
    let missing = load_policies(&Settings::default(), Some(Path::new("/nonexistent_policy_dir_cli")));
    assert!(matches!(missing, Err(CliError::Policy(_))));

    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "formatting.yaml", "code_formatting: \"Use tabs.\"\n");
    let policies = load_policies(&Settings::default(), Some(dir.path())).unwrap();
    let opts = RenderOptions {
        section: Some("code_formatting_info".into()),
        ..Default::default()
    };
    let s = build_snapshot(&Settings::default(), &opts).unwrap();
    let out = render(&s, &policies, &opts).unwrap();
    assert_eq!(out.trim(), "Use tabs.");
}

#[test]
fn templates_as_yaml_and_json() {
    let reg = TemplateRegistry::builtin();
    let yaml = format_templates(&reg, Some("vsl"), OutputFormat::Yaml).unwrap();
    assert!(yaml.contains("name: VSL Script - PAS"));
    let json = format_templates(&reg, None, OutputFormat::Json).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 10);
}
