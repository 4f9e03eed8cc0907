const EMBEDDED: [(&str, &str, &str); 2] = [
    (
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
        "conversion",
    ),
    (
        "src/romaji/default_romaji.toml",
        include_str!("src/romaji/default_romaji.toml"),
        "mappings",
    ),
];

fn main() {
    // Embedded TOML must parse and carry its top-level table.
    for (path, content, table) in EMBEDDED {
        check_table(path, content, table);
        println!("cargo:rerun-if-changed={path}");
    }
}

fn check_table(path: &str, content: &str, table: &str) {
    let value = match content.parse::<toml::Value>() {
        Ok(value) => value,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    };
    match value.get(table).and_then(toml::Value::as_table) {
        Some(t) if !t.is_empty() => {}
        _ => panic!("{path} has no [{table}] entries"),
    }
}
