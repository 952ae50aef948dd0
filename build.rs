use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::Path;

/// Claves que lee `AppConfig::from_env` con `option_env!`
const WOPU_KEYS: [&str; 6] = [
    "API_BASE_URL",
    "LANDING_VIEW",
    "FALLBACK_VIEW",
    "VIEW_CONTAINER_ID",
    "ENABLE_LOGGING",
    "TOUR_START_DELAY_MS",
];

fn main() {
    for key in WOPU_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");

    let mut provided: HashSet<String> = WOPU_KEYS
        .iter()
        .filter(|key| env::var(key).is_ok())
        .map(|key| key.to_string())
        .collect();

    let env_file = Path::new(".env");
    if let Ok(contents) = fs::read_to_string(env_file) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // KEY=VALUE, comillas opcionales
            let Some((key, value)) = line.split_once('=') else { continue };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            if !WOPU_KEYS.contains(&key) {
                println!("cargo:warning=.env: clave desconocida '{}' (ignorada)", key);
                continue;
            }

            // Las variables del entorno real tienen prioridad
            if !provided.contains(key) {
                println!("cargo:rustc-env={}={}", key, value);
                provided.insert(key.to_string());
            }
        }
    }

    if !provided.contains("API_BASE_URL") {
        println!("cargo:warning=API_BASE_URL no definida; se usa http://localhost:3000/api (ver .env.example)");
    }
}
