use atrium::config::Config;
use std::path::PathBuf;

#[test]
fn test_defaults_match_builtin_constants() {
    let cfg = Config::default();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.server.backlog, 5);
    assert_eq!(cfg.server.max_request_bytes, 8192);
    assert_eq!(cfg.static_files.root, PathBuf::from("./www"));
    assert_eq!(cfg.static_files.index, "home.html");
}

#[test]
fn test_from_yaml_full_document() {
    let raw = r#"
server:
  listen_addr: "0.0.0.0:3000"
  backlog: 64
  max_request_bytes: 16384
static_files:
  root: "/srv/site"
  index: "index.html"
"#;

    let cfg = Config::from_yaml(raw).unwrap();

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.server.backlog, 64);
    assert_eq!(cfg.server.max_request_bytes, 16384);
    assert_eq!(cfg.static_files.root, PathBuf::from("/srv/site"));
    assert_eq!(cfg.static_files.index, "index.html");
}

#[test]
fn test_from_yaml_partial_document_uses_defaults() {
    let raw = r#"
static_files:
  root: "./public"
"#;

    let cfg = Config::from_yaml(raw).unwrap();

    assert_eq!(cfg.static_files.root, PathBuf::from("./public"));
    assert_eq!(cfg.static_files.index, "home.html");
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.server.backlog, 5);
}

#[test]
fn test_from_yaml_rejects_malformed_document() {
    let raw = "server: [not, a, mapping]";
    assert!(Config::from_yaml(raw).is_err());
}

#[test]
fn test_load_with_env_overrides() {
    // Point at a nonexistent file so load falls back to defaults first
    unsafe {
        std::env::set_var("ATRIUM_CONFIG", "/nonexistent/atrium.yaml");
        std::env::remove_var("LISTEN");
        std::env::remove_var("WEB_ROOT");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.static_files.root, PathBuf::from("./www"));

    unsafe {
        std::env::set_var("LISTEN", "0.0.0.0:9000");
        std::env::set_var("WEB_ROOT", "/srv/other");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:9000");
    assert_eq!(cfg.static_files.root, PathBuf::from("/srv/other"));

    unsafe {
        std::env::remove_var("ATRIUM_CONFIG");
        std::env::remove_var("LISTEN");
        std::env::remove_var("WEB_ROOT");
    }
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.server.listen_addr, cfg2.server.listen_addr);
    assert_eq!(cfg1.static_files.index, cfg2.static_files.index);
}
