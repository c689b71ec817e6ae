use resjs::{KeyPolicy, ResourceBundle, discovery::serializable_entries};

/// Prints a human-readable summary of a bundle: its groups in declaration
/// order, how many keys each would serialize, and which cultures are covered.
pub fn print_view(bundle: &ResourceBundle) {
    let policy = KeyPolicy::default();

    println!("=== Bundle ===");
    println!("Module: {}", bundle.module);
    println!("Groups: {}", bundle.groups.len());
    println!("Cultures: {}", bundle.culture_codes().join(", "));

    for group in &bundle.groups {
        let serializable = serializable_entries(group, &policy).count();
        println!("\nGroup: {}", group.name);
        println!("  Keys: {} ({} serializable)", group.entries.len(), serializable);

        for entry in serializable_entries(group, &policy) {
            let cultures: Vec<&str> = entry.values.keys().map(String::as_str).collect();
            println!("    {}: [{}]", entry.key, cultures.join(", "));
        }
    }
}
