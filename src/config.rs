use bevy::prelude::*;

const DEFAULT_STAR_COUNT: usize = 5000;
const DEFAULT_SHOW_STARS: bool = true;
const DEFAULT_DARK_THEME: bool = false;
const DEFAULT_FOV_DEGREES: f32 = 75.0;
const MAX_STAR_COUNT: usize = 100_000;

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub star_count: usize,
    pub show_stars: bool,
    pub dark_theme: bool,
    pub fov_degrees: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            star_count: DEFAULT_STAR_COUNT,
            show_stars: DEFAULT_SHOW_STARS,
            dark_theme: DEFAULT_DARK_THEME,
            fov_degrees: DEFAULT_FOV_DEGREES,
        }
    }
}

impl Config {
    pub fn resolve() -> Self {
        Self::load_from(|key| std::env::var(key).ok())
    }

    fn load_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = parse::<usize, _>(&lookup, "ORRERY_STAR_COUNT") {
            config.star_count = value.min(MAX_STAR_COUNT);
        }
        if let Some(value) = parse_bool(&lookup, "ORRERY_SHOW_STARS") {
            config.show_stars = value;
        }
        if let Some(value) = parse_bool(&lookup, "ORRERY_DARK_THEME") {
            config.dark_theme = value;
        }
        if let Some(value) = parse::<f32, _>(&lookup, "ORRERY_FOV_DEGREES") {
            if value.is_finite() && value > 1.0 && value < 179.0 {
                config.fov_degrees = value;
            }
        }
        config
    }
}

fn parse<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring {key}={raw:?}: not a valid value");
            None
        }
    }
}

fn parse_bool<F>(lookup: &F, key: &str) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            warn!("ignoring {key}={raw:?}: expected a boolean");
            None
        }
    }
}

pub struct Plugin;

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        let config = Config::resolve();
        info!("configuration: {config:?}");
        app.insert_resource(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        assert_eq!(Config::load_from(|_| None), Config::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::load_from(lookup_from(&[
            ("ORRERY_STAR_COUNT", "120"),
            ("ORRERY_SHOW_STARS", "off"),
            ("ORRERY_DARK_THEME", "TRUE"),
            ("ORRERY_FOV_DEGREES", "60"),
        ]));
        assert_eq!(config.star_count, 120);
        assert!(!config.show_stars);
        assert!(config.dark_theme);
        assert_eq!(config.fov_degrees, 60.0);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::load_from(lookup_from(&[
            ("ORRERY_STAR_COUNT", "many"),
            ("ORRERY_SHOW_STARS", "maybe"),
            ("ORRERY_FOV_DEGREES", "400"),
        ]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn star_count_is_capped() {
        let config = Config::load_from(lookup_from(&[("ORRERY_STAR_COUNT", "99999999")]));
        assert_eq!(config.star_count, MAX_STAR_COUNT);
    }
}
