// Light/dark switcher.
//
// The scheme is mirrored to the root attribute and to storage on every
// change, startup included. Storage is best effort: failures read as
// "nothing stored" and writes are dropped, the host reports them.

/// What the switcher needs from the page.
pub trait ThemeHost {
    type Toggle: Clone + fmt::Debug;

    fn stored_scheme(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn store_scheme(&mut self, key: &str, scheme: Scheme) -> Result<(), StorageError>;

    /// Platform level "prefers dark" signal.
    fn prefers_dark(&self) -> bool;

    fn set_root_attribute(&mut self, name: &str, scheme: Scheme);

    fn find_toggle(&self, id: &str) -> Option<Self::Toggle>;
    fn set_toggle_checked(&mut self, toggle: &Self::Toggle, checked: bool);
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage is not available")]
    Unavailable,

    #[error("Storage read failed: {0}")]
    Read(String),

    #[error("Storage write failed: {0}")]
    Write(String),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Theme toggle #{id} not found")]
    ToggleNotFound { id: String },
}

#[derive(Debug)]
pub struct ThemeSwitcher<H: ThemeHost> {
    config: ThemeConfig,
    host: H,
    scheme: Scheme,
    toggle: Option<H::Toggle>,
}

impl<H: ThemeHost> ThemeSwitcher<H> {
    /// Picks the startup scheme (stored one, else platform preference) and
    /// applies it. No toggle is bound yet.
    pub fn new(config: ThemeConfig, host: H) -> Self {
        let mut switcher = Self {
            config,
            host,
            scheme: Scheme::default(),
            toggle: None,
        };
        let scheme = switcher.startup_scheme();
        switcher.set_scheme(scheme);
        switcher
    }

    /// `new` followed by `attach_toggle`. A missing toggle fails after the
    /// startup scheme has already been applied and stored.
    pub fn init(config: ThemeConfig, host: H) -> Result<(Self, H::Toggle), ThemeError> {
        let mut switcher = Self::new(config, host);
        let toggle = switcher.attach_toggle()?;
        Ok((switcher, toggle))
    }

    pub fn attach_toggle(&mut self) -> Result<H::Toggle, ThemeError> {
        let toggle = self
            .host
            .find_toggle(&self.config.toggle_id)
            .ok_or_else(|| ThemeError::ToggleNotFound {
                id: self.config.toggle_id.clone(),
            })?;

        self.toggle = Some(toggle.clone());
        self.sync_toggle();
        Ok(toggle)
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Updates the scheme, the root attribute, then storage.
    pub fn set_scheme(&mut self, scheme: Scheme) {
        self.scheme = scheme;
        self.host
            .set_root_attribute(&self.config.root_attribute, scheme);
        let _ = self.host.store_scheme(&self.config.storage_key, scheme);
        self.sync_toggle();
    }

    /// Change notification from the toggle.
    pub fn on_toggle(&mut self, checked: bool) {
        self.set_scheme(Scheme::from_checked(checked));
    }

    fn startup_scheme(&self) -> Scheme {
        self.host
            .stored_scheme(&self.config.storage_key)
            .ok()
            .flatten()
            .and_then(|stored| stored.parse().ok())
            .unwrap_or_else(|| Scheme::from_preference(self.host.prefers_dark()))
    }

    fn sync_toggle(&mut self) {
        if !self.config.sync_toggle {
            return;
        }
        if let Some(toggle) = &self.toggle {
            self.host.set_toggle_checked(toggle, self.scheme.is_dark());
        }
    }
}

use crate::config::ThemeConfig;
use crate::scheme::Scheme;
use std::fmt;
