use std::fs;

use wp_plugin_meta::{logging, Field, PluginMetadataRecord};

#[test]
fn logs_go_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scraper.log");
    fs::write(&path, "stale line from a previous run\n").unwrap();

    {
        let _log = logging::init(&path, "info").unwrap();
        log::info!("Loaded {} URLs", 3);
        log::debug!("hidden at info level");
        PluginMetadataRecord::placeholder("https://wordpress.org/plugins/gone/");
    }

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("stale line"));
    assert!(content.contains("[INFO] Loaded 3 URLs"));
    assert!(content.contains("logging.rs:"));
    assert!(!content.contains("hidden at info level"));

    // the placeholder logs every default it assigns, but not the URL it was given
    assert!(content.contains("Set default value: Name=Unknown"));
    assert!(content.contains("Set default value: Tags=N/A"));
    assert!(!content.contains("Set default value: URL="));
    let defaults = content.matches("Set default value:").count();
    assert_eq!(defaults, Field::ALL.len() - 1);
    assert_eq!(Field::Version.default_value(), "0.0.0");

    assert!(logging::init(&path, "info").is_err());
}
