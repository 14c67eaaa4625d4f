fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    validate_toml(
        "src/dict/default_dict.toml",
        include_str!("src/dict/default_dict.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    // TOML rejects duplicate keys within a table, so a repeated
    // romanization key in the dictionary fails the build here.
    if let Err(e) = content.parse::<toml::Value>() {
        panic!("{path} contains invalid TOML: {e}");
    }
}
