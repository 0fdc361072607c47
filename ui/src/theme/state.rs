use crate::error::AppResult;
use crate::theme::loader::ThemeLoader;
use crate::theme::store::PreferenceStore;
use crate::theme::system::detect_system_preference;
use crate::theme::types::{Palette, ThemeConfig, ThemePreference};

/// Where the starting preference came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceSource {
    Override,
    Stored,
    System,
    Default,
}

/// Initial preference: stored, then system, then light.
pub fn resolve_initial(
    stored: Option<ThemePreference>,
    system: Option<ThemePreference>,
) -> (ThemePreference, PreferenceSource) {
    match (stored, system) {
        (Some(preference), _) => (preference, PreferenceSource::Stored),
        (None, Some(preference)) => (preference, PreferenceSource::System),
        (None, None) => (ThemePreference::default(), PreferenceSource::Default),
    }
}

/// The light/dark preference and its resolved palette.
///
/// Owned by the application model and passed to whatever renders.
#[derive(Debug, Clone)]
pub struct ThemeState {
    preference: ThemePreference,
    palette: Palette,
    source: PreferenceSource,
    store: PreferenceStore,
    loader: ThemeLoader,
}

impl ThemeState {
    pub fn new(
        preference: ThemePreference,
        source: PreferenceSource,
        store: PreferenceStore,
        loader: ThemeLoader,
    ) -> AppResult<Self> {
        let palette = loader.load(preference)?;
        Ok(Self {
            preference,
            palette,
            source,
            store,
            loader,
        })
    }

    /// Resolve the starting theme from config, CLI override, the stored
    /// preference and the terminal.
    ///
    /// A CLI override applies to this run only and is never written back.
    pub fn initialize(config: &ThemeConfig, cli_override: Option<ThemePreference>) -> AppResult<Self> {
        let store = if !config.persist() {
            PreferenceStore::disabled()
        } else if let Some(path) = config.preference_file() {
            PreferenceStore::at(path)
        } else {
            PreferenceStore::platform_default().unwrap_or_else(|e| {
                log::warn!("Theme preference will not be saved: {e}");
                PreferenceStore::disabled()
            })
        };

        let (preference, source) = match cli_override {
            Some(preference) => (preference, PreferenceSource::Override),
            None => {
                let stored = store.load().unwrap_or_else(|e| {
                    log::warn!("Ignoring stored theme preference: {e}");
                    None
                });
                resolve_initial(stored, detect_system_preference())
            }
        };

        log::info!("Starting with {preference} theme ({source:?})");
        Self::new(preference, source, store, ThemeLoader::new(config))
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn source(&self) -> PreferenceSource {
        self.source
    }

    /// Flip light/dark, apply the palette and persist.
    ///
    /// Saving is best effort; a failure is logged and the toggle still applies.
    pub fn toggle(&mut self) -> AppResult<ThemePreference> {
        let next = self.preference.toggled();
        self.palette = self.loader.load(next)?;
        self.preference = next;

        if let Err(e) = self.store.save(next) {
            log::warn!("Failed to persist theme preference: {e}");
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::store::PREFERENCES_FILE;

    #[test]
    fn test_resolution_order() {
        use ThemePreference::*;
        assert_eq!(resolve_initial(Some(Dark), Some(Light)).0, Dark);
        assert_eq!(resolve_initial(None, Some(Dark)), (Dark, PreferenceSource::System));
        assert_eq!(resolve_initial(None, None), (Light, PreferenceSource::Default));
    }

    #[test]
    fn test_toggle_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::at(dir.path().join(PREFERENCES_FILE));
        let mut state = ThemeState::new(
            ThemePreference::Light,
            PreferenceSource::Default,
            store.clone(),
            ThemeLoader::embedded(),
        )
        .unwrap();
        let light_background = state.palette().background;

        assert_eq!(state.toggle().unwrap(), ThemePreference::Dark);
        assert_eq!(state.palette().preference, ThemePreference::Dark);
        assert_ne!(state.palette().background, light_background);
        assert_eq!(store.load().unwrap(), Some(ThemePreference::Dark));

        state.toggle().unwrap();
        assert_eq!(store.load().unwrap(), Some(ThemePreference::Light));
    }

    #[test]
    fn test_unwritable_store_does_not_block_toggle() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes every write fail
        let path = dir.path().join(PREFERENCES_FILE);
        std::fs::create_dir(&path).unwrap();

        let mut state = ThemeState::new(
            ThemePreference::Dark,
            PreferenceSource::Stored,
            PreferenceStore::at(path),
            ThemeLoader::embedded(),
        )
        .unwrap();

        assert_eq!(state.toggle().unwrap(), ThemePreference::Light);
        assert_eq!(state.preference(), ThemePreference::Light);
    }

    #[test]
    fn test_override_is_not_written_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        let config: ThemeConfig =
            toml::from_str(&format!("preference_file = {:?}", path.display().to_string())).unwrap();

        let state = ThemeState::initialize(&config, Some(ThemePreference::Dark)).unwrap();

        assert_eq!(state.preference(), ThemePreference::Dark);
        assert_eq!(state.source(), PreferenceSource::Override);
        assert!(!path.exists());
    }
}
