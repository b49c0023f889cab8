const DEFAULT_SETTINGS: &str = "src/default_settings.toml";

fn main() {
    println!("cargo:rerun-if-changed={DEFAULT_SETTINGS}");

    let table: toml::Table = include_str!("src/default_settings.toml")
        .parse()
        .unwrap_or_else(|e| panic!("{DEFAULT_SETTINGS} is not valid TOML: {e}"));

    for (section, key) in [("dictionary", "path"), ("output", "separator")] {
        let present = table
            .get(section)
            .and_then(|v| v.as_table())
            .is_some_and(|t| t.contains_key(key));
        if !present {
            panic!("{DEFAULT_SETTINGS} is missing {section}.{key}");
        }
    }
}
