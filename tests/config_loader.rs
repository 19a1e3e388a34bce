use std::io::Write;

use tempfile::NamedTempFile;

use tallyfeed::config::{Config, ConfigError};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn missing_file_yields_defaults() {
    let config = Config::load_from("/nonexistent/tallyfeed/config.toml".as_ref())
        .expect("defaults");
    assert_eq!(config.counter.step, 3);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.api.request_timeout_seconds, 30);
    assert!(config.api.posts_url.starts_with("https://"));
}

#[test]
fn partial_file_fills_in_defaults() {
    let file = write_config(
        r#"
[api]
posts_url = "http://localhost:9000/posts"
"#,
    );
    let config = Config::load_from(file.path()).expect("load");
    assert_eq!(config.api.posts_url, "http://localhost:9000/posts");
    assert_eq!(config.api.request_timeout_seconds, 30);
    assert_eq!(config.counter.step, 3);
}

#[test]
fn full_file_overrides_everything() {
    let file = write_config(
        r#"
[api]
posts_url = "http://localhost:9000/posts"
connect_timeout_seconds = 1
request_timeout_seconds = 10

[counter]
step = 5
"#,
    );
    let config = Config::load_from(file.path()).expect("load");
    assert_eq!(config.api.connect_timeout_seconds, 1);
    assert_eq!(config.api.request_timeout_seconds, 10);
    assert_eq!(config.counter.step, 5);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let file = write_config("[api\nposts_url = ");
    let err = Config::load_from(file.path()).expect_err("should fail");
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn zero_step_is_a_validation_error() {
    let file = write_config("[counter]\nstep = 0\n");
    let err = Config::load_from(file.path()).expect_err("should fail");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn non_http_url_is_a_validation_error() {
    let file = write_config("[api]\nposts_url = \"file:///etc/passwd\"\n");
    let err = Config::load_from(file.path()).expect_err("should fail");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}
