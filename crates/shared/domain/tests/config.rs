use lendhub_domain::config::{ApiConfig, DatabaseConfig, ImgpushConfig, ServerConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4710);
    assert!(server.ssl.is_none());

    let db = DatabaseConfig::default();
    assert_eq!(db.url, "sqlite::memory:");
    assert!(db.max_connections > 0);

    let imgpush = ImgpushConfig::default();
    assert_eq!(imgpush.timeout_seconds, 2);
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "database": { "url": "sqlite://lendhub.db", "max_connections": 8 },
        "imgpush": { "url": "http://images.internal:5000", "timeout_seconds": 3 },
        "catalog": { "default_page_size": 50 }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.database.url, "sqlite://lendhub.db");
    assert_eq!(cfg.imgpush.url, "http://images.internal:5000");
    assert_eq!(cfg.catalog.default_page_size, 50);
}
