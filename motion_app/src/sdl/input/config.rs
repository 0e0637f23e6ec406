use std::path::Path;
use ini::Ini;
use num_traits::ToPrimitive;
use tracing::{info, warn};
use crate::error::Result;
use crate::sdl::input::action::{Action, ActionCode};
use crate::sdl::input::map::KeyMap;

const DEVICE_SECTION: &str = "Device";
const BINDINGS_SECTION: &str = "Bindings";

/// Input profile: which key triggers which action.
///
/// ```ini
/// [Device]
/// Type = Keyboard
///
/// [Bindings]
/// Up = 0
/// Escape = Quit
/// ```
///
/// Binding values are either an [`ActionCode`] number or the action's name.
#[derive(Clone, Debug, Default)]
pub struct Config {
    bindings: Vec<(String, Action)>
}

impl Config {
    /// Reads the profile at `path`. If there's no file the default bindings are used and
    /// written there.
    pub fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            warn!("No input profile at {}, using default key bindings", path.display());
            let config = Config::from(&KeyMap::default());
            if let Err(e) = config.write(path) {
                warn!("Could not write default input profile to {}: {}", path.display(), e);
            }
            return Ok(config);
        }

        let ini = Ini::load_from_file(path)?;
        let config = Config::from_ini(&ini, &path.display().to_string());

        info!("Loaded {} key bindings from {}", config.bindings.len(), path.display());
        Ok(config)
    }

    /// Bad entries are skipped with a warning, a profile without bindings gets the defaults
    pub fn from_ini(ini: &Ini, origin: &str) -> Config {
        if let Some(device_type) = ini.section(Some(DEVICE_SECTION)).and_then(|s| s.get("Type")) {
            if !device_type.eq_ignore_ascii_case("Keyboard") {
                warn!("Unsupported device type in input profile {}: Type = {}", origin, device_type);
            }
        }

        let Some(bindings_sec) = ini.section(Some(BINDINGS_SECTION)) else {
            warn!("No [{}] section in input profile {}, using defaults", BINDINGS_SECTION, origin);
            return Config::from(&KeyMap::default());
        };

        let mut bindings = Vec::new();
        for (key, value) in bindings_sec {
            match value.parse::<Action>() {
                Ok(action) => bindings.push((key.to_string(), action)),
                Err(()) => warn!("Unknown action in input profile {}: {} = {}", origin, key, value),
            }
        }

        Config {
            bindings
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let mut conf = Ini::new();
        conf.with_section(Some(DEVICE_SECTION))
            .set("Type", "Keyboard");

        for (key, action) in &self.bindings {
            let code = ActionCode::from(*action).to_u32().unwrap_or_default();
            conf.with_section(Some(BINDINGS_SECTION))
                .set(key.as_str(), code.to_string());
        }

        conf.write_to_file(path)?;
        Ok(())
    }

    pub fn bindings(&self) -> &[(String, Action)] {
        &self.bindings
    }
}

impl From<&KeyMap> for Config {
    fn from(map: &KeyMap) -> Self {
        let mut bindings: Vec<(String, Action)> = map
            .bindings()
            .map(|(key, action)| (key.to_string(), action))
            .collect();
        bindings.sort_by(|a, b| a.0.cmp(&b.0));

        Config {
            bindings
        }
    }
}
