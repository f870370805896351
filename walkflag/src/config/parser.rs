//! INI parsing logic for converting `Ini` → `ConfigFile`.

use std::path::{Path, PathBuf};

use ini::Ini;

use super::file::ConfigFileError;
use super::keys::ConfigKey;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the
/// INI. Unknown sections and keys are ignored. The discovery band is checked
/// once every key has been applied.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    for key in ConfigKey::all() {
        let Some(value) = ini
            .section(Some(key.section()))
            .and_then(|section| section.get(key.key_name()))
        else {
            continue;
        };

        key.apply(&mut config, value.trim())
            .map_err(|reason| ConfigFileError::InvalidValue {
                section: key.section().to_string(),
                key: key.key_name().to_string(),
                value: value.to_string(),
                reason,
            })?;
    }

    if let Err(e) = config.discovery.to_discovery_config().validate() {
        return Err(ConfigFileError::InvalidValue {
            section: "discovery".to_string(),
            key: "max_km".to_string(),
            value: config.discovery.max_km.to_string(),
            reason: e.to_string(),
        });
    }

    Ok(config)
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Convert path to display string, collapsing home dir to ~.
pub(super) fn path_to_display(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<ConfigFile, ConfigFileError> {
        let ini = Ini::load_from_str(content).unwrap();
        parse_ini(&ini)
    }

    #[test]
    fn test_empty_ini_is_default() {
        assert_eq!(parse("").unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_all_sections() {
        let config = parse(
            r#"
[routing]
url = http://localhost:5000/
timeout = 5

[geocoding]
url = https://geo.example.com
timeout = 7
user_agent = my-walks/1.0 (me@example.com)

[discovery]
target_km = 3
min_km = 2.5
max_km = 3.5
pace_ms = 1500

[logging]
file = /tmp/walkflag-test.log
"#,
        )
        .unwrap();

        assert_eq!(config.routing.url, "http://localhost:5000/");
        assert_eq!(config.routing.timeout, 5);
        assert_eq!(config.geocoding.url, "https://geo.example.com");
        assert_eq!(config.geocoding.timeout, 7);
        assert_eq!(config.geocoding.user_agent, "my-walks/1.0 (me@example.com)");
        assert_eq!(config.discovery.target_km, 3.0);
        assert_eq!(config.discovery.min_km, 2.5);
        assert_eq!(config.discovery.max_km, 3.5);
        assert_eq!(config.discovery.pace_ms, 1500);
        assert_eq!(config.logging.file, PathBuf::from("/tmp/walkflag-test.log"));
    }

    #[test]
    fn test_band_may_move_above_defaults() {
        // min_km is applied before max_km; only the final band is checked
        let config = parse("[discovery]\nmin_km = 7\nmax_km = 9\ntarget_km = 8\n").unwrap();

        assert_eq!(config.discovery.min_km, 7.0);
        assert_eq!(config.discovery.max_km, 9.0);
    }

    #[test]
    fn test_invalid_timeout() {
        let err = parse("[routing]\ntimeout = soon\n").unwrap_err();

        match err {
            ConfigFileError::InvalidValue {
                section,
                key,
                value,
                ..
            } => {
                assert_eq!(section, "routing");
                assert_eq!(key, "timeout");
                assert_eq!(value, "soon");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_url() {
        let err = parse("[geocoding]\nurl = nominatim.local\n").unwrap_err();
        assert!(matches!(err, ConfigFileError::InvalidValue { ref key, .. } if key == "url"));
    }

    #[test]
    fn test_inverted_band() {
        let err = parse("[discovery]\nmin_km = 6\nmax_km = 4\n").unwrap_err();
        assert!(
            matches!(err, ConfigFileError::InvalidValue { ref section, .. } if section == "discovery")
        );
    }

    #[test]
    fn test_tilde_expansion() {
        let config = parse("[logging]\nfile = ~/logs/walkflag.log\n").unwrap();

        if let Some(home) = dirs::home_dir() {
            assert_eq!(config.logging.file, home.join("logs/walkflag.log"));
        }
    }

    #[test]
    fn test_path_to_display_collapses_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path_to_display(&home.join("a/b.log")), "~/a/b.log");
        }
        assert_eq!(path_to_display(Path::new("/var/log/x.log")), "/var/log/x.log");
    }
}
