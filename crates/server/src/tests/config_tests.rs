use super::{load_settings_from, Settings};

use std::{collections::HashMap, path::PathBuf};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_without_file_or_env() {
    assert_eq!(load_settings_from(None, env_from(&[])), Settings::default());
}

#[test]
fn file_values_are_applied() {
    let settings = load_settings_from(
        Some("bind_addr = \"0.0.0.0:9000\"\ndataset_path = \"./data/users.json\"\n"),
        env_from(&[]),
    );
    assert_eq!(settings.server_bind, "0.0.0.0:9000");
    assert_eq!(settings.dataset_path, Some(PathBuf::from("./data/users.json")));
}

#[test]
fn env_overrides_file_and_prefixed_names_win() {
    let settings = load_settings_from(
        Some("bind_addr = \"0.0.0.0:9000\"\n"),
        env_from(&[
            ("SERVER_BIND", "127.0.0.1:7000"),
            ("APP__BIND_ADDR", "127.0.0.1:7001"),
            ("APP__DATASET_PATH", "  "),
        ]),
    );
    assert_eq!(settings.server_bind, "127.0.0.1:7001");
    assert_eq!(settings.dataset_path, None);
}

#[test]
fn malformed_file_is_ignored() {
    let settings = load_settings_from(Some("bind_addr = ["), env_from(&[]));
    assert_eq!(settings, Settings::default());
}
