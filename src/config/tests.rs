use super::*;
use serial_test::serial;
use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_parrot_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("PARROT_PORT");
        env::remove_var("PARROT_BIND_ADDR");
        env::remove_var("PARROT_CACHE_MODE");
        env::remove_var("PARROT_REDIS_URL");
        env::remove_var("PARROT_LEDGER_PATH");
        env::remove_var("PARROT_OLLAMA_URL");
        env::remove_var("PARROT_OLLAMA_MODEL");
        env::remove_var("PARROT_GENERATE_TIMEOUT_SECS");
        env::remove_var("PARROT_ANSWER_TTL_SECS");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.port, 5000);
    assert_eq!(
        config.bind_addr,
        IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))
    );
    assert_eq!(config.cache_mode, CacheMode::Redis);
    assert_eq!(config.redis_url, "redis://127.0.0.1:6379");
    assert_eq!(config.ledger_path, PathBuf::from("./.data/ledger.db"));
    assert_eq!(config.ollama_url, "http://127.0.0.1:11434");
    assert_eq!(config.ollama_model, "tinyllama:latest");
    assert_eq!(config.generate_timeout, Duration::from_secs(15));
    assert_eq!(config.answer_ttl, Duration::from_secs(3600));
}

#[test]
fn test_socket_addr() {
    let config = Config::default();
    assert_eq!(config.socket_addr(), "127.0.0.1:5000");

    let config = Config {
        port: 3000,
        bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)),
        ..Default::default()
    };
    assert_eq!(config.socket_addr(), "0.0.0.0:3000");
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_parrot_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.port, 5000);
    assert_eq!(config.cache_mode, CacheMode::Redis);
}

#[test]
#[serial]
fn test_from_env_custom_port() {
    clear_parrot_env();

    with_env_vars(&[("PARROT_PORT", "3000")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.port, 3000);
    });
}

#[test]
#[serial]
fn test_from_env_invalid_port_is_rejected() {
    clear_parrot_env();

    with_env_vars(&[("PARROT_PORT", "not-a-port")], || {
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::PortParseError { .. })
        ));
    });

    with_env_vars(&[("PARROT_PORT", "0")], || {
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidPort { .. })
        ));
    });
}

#[test]
#[serial]
fn test_from_env_cache_mode() {
    clear_parrot_env();

    with_env_vars(&[("PARROT_CACHE_MODE", "memory")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.cache_mode, CacheMode::Memory);
    });

    with_env_vars(&[("PARROT_CACHE_MODE", "Redis")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.cache_mode, CacheMode::Redis);
    });

    with_env_vars(&[("PARROT_CACHE_MODE", "disk")], || {
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidCacheMode { .. })
        ));
    });
}

#[test]
#[serial]
fn test_from_env_urls_and_model() {
    clear_parrot_env();

    with_env_vars(
        &[
            ("PARROT_REDIS_URL", "redis://cache:6379"),
            ("PARROT_OLLAMA_URL", "http://ollama:11434"),
            ("PARROT_OLLAMA_MODEL", "llama3:8b"),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.redis_url, "redis://cache:6379");
            assert_eq!(config.ollama_url, "http://ollama:11434");
            assert_eq!(config.ollama_model, "llama3:8b");
        },
    );
}

#[test]
#[serial]
fn test_from_env_durations() {
    clear_parrot_env();

    with_env_vars(
        &[
            ("PARROT_GENERATE_TIMEOUT_SECS", "60"),
            ("PARROT_ANSWER_TTL_SECS", "120"),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.generate_timeout, Duration::from_secs(60));
            assert_eq!(config.answer_ttl, Duration::from_secs(120));
        },
    );
}

#[test]
#[serial]
fn test_from_env_unparseable_duration_falls_back() {
    clear_parrot_env();

    with_env_vars(&[("PARROT_ANSWER_TTL_SECS", "soon")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.answer_ttl, Duration::from_secs(3600));
    });
}

#[test]
fn test_validate_default_config() {
    let config = Config::default();
    config.validate().expect("defaults should validate");
}

#[test]
fn test_validate_rejects_zero_durations() {
    let config = Config {
        generate_timeout: Duration::ZERO,
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ZeroDuration { .. })
    ));

    let config = Config {
        answer_ttl: Duration::ZERO,
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ZeroDuration { .. })
    ));
}

#[test]
fn test_validate_rejects_directory_ledger_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        ledger_path: dir.path().to_path_buf(),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotAFile { .. })
    ));
}
