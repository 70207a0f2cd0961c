//! Theme preference persisted in its own slot.
//!
//! # Invariants
//! - The slot holds `"dark"` or `"light"` once the user has toggled.

use crate::model::theme::Theme;
use crate::repo::kv_repo::{KvResult, KvStore};
use log::{info, warn};

/// Slot holding the theme preference.
pub const THEME_KEY: &str = "theme";

/// Reads and writes the theme preference.
pub struct ThemeStore<K: KvStore> {
    kv: K,
}

impl<K: KvStore> ThemeStore<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    /// Saved theme, `Light` when unset or unreadable.
    pub fn current(&self) -> Theme {
        match self.kv.get_item(THEME_KEY) {
            Ok(value) => Theme::from_stored(value.as_deref()),
            Err(err) => {
                warn!(
                    "event=theme_load module=theme status=fallback error_code=kv_read_failed error={err}"
                );
                Theme::default()
            }
        }
    }

    pub fn set(&self, theme: Theme) -> KvResult<()> {
        self.kv.set_item(THEME_KEY, theme.as_stored())?;
        info!("event=theme_set module=theme status=ok theme={theme}");
        Ok(())
    }

    /// Flips the saved theme and returns the new one.
    pub fn toggle(&self) -> KvResult<Theme> {
        let next = self.current().toggled();
        self.set(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::{ThemeStore, THEME_KEY};
    use crate::model::theme::Theme;
    use crate::repo::kv_repo::{KvStore, MemoryKvStore};

    #[test]
    fn toggle_round_trips_through_slot() {
        let kv = MemoryKvStore::new();
        let themes = ThemeStore::new(&kv);
        assert_eq!(themes.current(), Theme::Light);

        assert_eq!(themes.toggle().unwrap(), Theme::Dark);
        assert_eq!(kv.get_item(THEME_KEY).unwrap().as_deref(), Some("dark"));

        assert_eq!(themes.toggle().unwrap(), Theme::Light);
        assert_eq!(kv.get_item(THEME_KEY).unwrap().as_deref(), Some("light"));
    }
}
