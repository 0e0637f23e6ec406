//! `motion.ini`: window size, dot size and speed, frame cap.
//!
//! ```ini
//! [World]
//! ScreenWidth = 640
//! ScreenHeight = 480
//! DotWidth = 10
//! DotHeight = 10
//! DotVelocity = 10
//!
//! [Timing]
//! FpsCap = 60
//! CapFrameRate = true
//! ```
//!
//! Missing keys keep their default value.

use std::path::Path;
use std::str::FromStr;
use ini::Ini;
use tracing::{info, warn};
use motion_lib::Settings;
use crate::error::{AppError, Result};

const WORLD: &str = "World";
const TIMING: &str = "Timing";

/// Missing file: defaults, which are also written to `path`
pub fn load(path: &Path) -> Result<Settings> {
    if !path.exists() {
        warn!("No settings file at {}, using defaults", path.display());
        let settings = Settings::default();
        if let Err(e) = save(path, &settings) {
            warn!("Could not write default settings to {}: {}", path.display(), e);
        }
        return Ok(settings);
    }

    let settings = from_ini(&Ini::load_from_file(path)?)?;
    info!("Loaded settings from {}: {:?}", path.display(), settings);
    Ok(settings)
}

/// Parses and validates
pub fn from_ini(ini: &Ini) -> Result<Settings> {
    let mut settings = Settings::default();

    let world = &mut settings.world;
    read(ini, WORLD, "ScreenWidth", &mut world.screen_width)?;
    read(ini, WORLD, "ScreenHeight", &mut world.screen_height)?;
    read(ini, WORLD, "DotWidth", &mut world.dot_width)?;
    read(ini, WORLD, "DotHeight", &mut world.dot_height)?;
    read(ini, WORLD, "DotVelocity", &mut world.dot_velocity)?;

    let timing = &mut settings.timing;
    read(ini, TIMING, "FpsCap", &mut timing.fps_cap)?;
    read(ini, TIMING, "CapFrameRate", &mut timing.cap_frame_rate)?;

    settings.validate()?;
    Ok(settings)
}

pub fn save(path: &Path, settings: &Settings) -> Result<()> {
    let mut conf = Ini::new();
    conf.with_section(Some(WORLD))
        .set("ScreenWidth", settings.world.screen_width.to_string())
        .set("ScreenHeight", settings.world.screen_height.to_string())
        .set("DotWidth", settings.world.dot_width.to_string())
        .set("DotHeight", settings.world.dot_height.to_string())
        .set("DotVelocity", settings.world.dot_velocity.to_string());
    conf.with_section(Some(TIMING))
        .set("FpsCap", settings.timing.fps_cap.to_string())
        .set("CapFrameRate", settings.timing.cap_frame_rate.to_string());

    conf.write_to_file(path)?;
    Ok(())
}

/// Overwrites `field` if the key is present
fn read<T: FromStr>(ini: &Ini, section: &str, key: &str, field: &mut T) -> Result<()> {
    let Some(value) = ini.section(Some(section)).and_then(|s| s.get(key)) else {
        return Ok(());
    };

    *field = value.trim().parse().map_err(|_| AppError::BadValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use motion_lib::MotionError;

    fn parse(text: &str) -> Result<Settings> {
        from_ini(&Ini::load_from_str(text).unwrap())
    }

    #[test]
    fn empty_file_is_defaults() {
        assert_eq!(parse("").unwrap(), Settings::default());
    }

    #[test]
    fn overrides_present_keys() {
        let settings = parse(
            "[World]\n\
             ScreenWidth = 1920\n\
             ScreenHeight = 1080\n\
             DotVelocity = 4\n\
             [Timing]\n\
             CapFrameRate = false\n",
        )
        .unwrap();

        assert_eq!(settings.world.screen_width, 1920);
        assert_eq!(settings.world.screen_height, 1080);
        assert_eq!(settings.world.dot_width, 10);
        assert_eq!(settings.world.dot_velocity, 4);
        assert_eq!(settings.timing.fps_cap, 60);
        assert!(!settings.timing.cap_frame_rate);
    }

    #[test]
    fn garbage_values_are_reported() {
        let err = parse("[Timing]\nFpsCap = fast\n").unwrap_err();

        match err {
            AppError::BadValue { section, key, value } => {
                assert_eq!(section, "Timing");
                assert_eq!(key, "FpsCap");
                assert_eq!(value, "fast");
            }
            e => panic!("unexpected error {:?}", e),
        }
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let err = parse("[World]\nDotWidth = 1000\n").unwrap_err();

        assert!(matches!(
            err,
            AppError::Settings(MotionError::DotTooLarge { dot_width: 1000, .. })
        ));
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let path = std::env::temp_dir().join(format!("motion-settings-new-{}.ini", std::process::id()));
        let _ = std::fs::remove_file(&path);

        assert_eq!(load(&path).unwrap(), Settings::default());
        assert!(path.exists());

        let ini = Ini::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(ini.section(Some("World")).and_then(|s| s.get("ScreenWidth")), Some("640"));
        assert_eq!(from_ini(&ini).unwrap(), Settings::default());
    }

    #[test]
    fn saved_settings_read_back() {
        let path = std::env::temp_dir().join(format!("motion-settings-{}.ini", std::process::id()));

        let mut settings = Settings::default();
        settings.world.screen_width = 800;
        settings.timing.fps_cap = 30;

        save(&path, &settings).unwrap();
        let loaded = load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, settings);
    }
}
