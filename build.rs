use std::env;
use std::fs;
use std::path::Path;

/// Claves que `config.rs` lee con `option_env!`
const CONFIG_KEYS: &[&str] = &[
    "GOOGLE_MAPS_API_KEY",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "APP_LANGUAGE",
    "DEFAULT_MAP_CENTER_LAT",
    "DEFAULT_MAP_CENTER_LNG",
    "DEFAULT_MAP_ZOOM",
    "SINGLE_PLACE_ZOOM",
];

fn main() {
    if Path::new(".env").exists() {
        println!("cargo:rerun-if-changed=.env");
    }
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    // El entorno del proceso tiene prioridad sobre .env
    let dotenv = fs::read_to_string(".env").unwrap_or_default();
    let mut api_key_found = env::var("GOOGLE_MAPS_API_KEY").is_ok_and(|v| !v.trim().is_empty());

    for (key, value) in dotenv.lines().filter_map(parse_line) {
        if !CONFIG_KEYS.contains(&key) || env::var(key).is_ok() {
            continue;
        }
        if key == "GOOGLE_MAPS_API_KEY" && !value.is_empty() {
            api_key_found = true;
        }
        println!("cargo:rustc-env={}={}", key, value);
    }

    if !api_key_found {
        println!("cargo:warning=GOOGLE_MAPS_API_KEY is not set: the page will show the map placeholder until a key is configured (see .env.example)");
    }
}

/// `KEY=VALUE`, con comillas opcionales; ignora comentarios y líneas vacías
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim().trim_matches('"')))
}
