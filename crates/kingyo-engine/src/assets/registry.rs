use crate::assets::manifest::AssetManifest;

/// Index of a sprite in the registry. Backends keep their images in the
/// same order, so the handle doubles as an image index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteHandle(pub u32);

#[derive(Debug, Clone)]
struct SpriteEntry {
    path: String,
    loaded: bool,
}

/// Registry of sprites and their load state, built from an AssetManifest.
/// The host loads images asynchronously and flips entries to loaded; the
/// renderer falls back to plain shapes until then.
pub struct SpriteRegistry {
    entries: Vec<SpriteEntry>,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a registry from a manifest. The poi sprite is always handle 0.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let entries = manifest
            .paths()
            .map(|path| SpriteEntry {
                path: path.to_string(),
                loaded: false,
            })
            .collect();
        Self { entries }
    }

    /// Handle of the poi sprite, if the registry was built from a manifest.
    pub fn poi(&self) -> Option<SpriteHandle> {
        if self.entries.is_empty() {
            None
        } else {
            Some(SpriteHandle(0))
        }
    }

    /// Find a sprite whose path ends with `path`. Hosts may register
    /// resolved URLs, so a relative path still matches. Empty never matches.
    pub fn find(&self, path: &str) -> Option<SpriteHandle> {
        if path.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .position(|e| e.path.ends_with(path))
            .map(|idx| SpriteHandle(idx as u32))
    }

    /// Like `find`, but only returns sprites that have finished loading.
    pub fn find_loaded(&self, path: &str) -> Option<SpriteHandle> {
        self.find(path).filter(|h| self.is_loaded(*h))
    }

    pub fn is_loaded(&self, handle: SpriteHandle) -> bool {
        self.entries
            .get(handle.0 as usize)
            .map(|e| e.loaded)
            .unwrap_or(false)
    }

    /// Record the load state reported by the host. Unknown handles are ignored.
    pub fn set_loaded(&mut self, handle: SpriteHandle, loaded: bool) {
        if let Some(entry) = self.entries.get_mut(handle.0 as usize) {
            entry.loaded = loaded;
        }
    }

    pub fn path(&self, handle: SpriteHandle) -> Option<&str> {
        self.entries.get(handle.0 as usize).map(|e| e.path.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SpriteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_from_manifest() {
        let reg = SpriteRegistry::from_manifest(&AssetManifest::default());
        assert_eq!(reg.len(), 5);
        assert_eq!(reg.poi(), Some(SpriteHandle(0)));
        assert_eq!(reg.path(SpriteHandle(2)), Some("/fish2.png"));
        assert!(!reg.is_loaded(SpriteHandle(0)));
    }

    #[test]
    fn find_matches_by_suffix() {
        let manifest = AssetManifest {
            poi: "https://cdn.example/poi_new.png".into(),
            fish: vec!["https://cdn.example/fish1.png".into()],
        };
        let reg = SpriteRegistry::from_manifest(&manifest);
        assert_eq!(reg.find("/fish1.png"), Some(SpriteHandle(1)));
        assert_eq!(reg.find("/fish9.png"), None);
    }

    #[test]
    fn empty_path_never_matches() {
        let reg = SpriteRegistry::from_manifest(&AssetManifest::default());
        assert_eq!(reg.find(""), None);
    }

    #[test]
    fn find_loaded_waits_for_load() {
        let mut reg = SpriteRegistry::from_manifest(&AssetManifest::default());
        assert_eq!(reg.find_loaded("/fish3.png"), None);
        reg.set_loaded(SpriteHandle(3), true);
        assert_eq!(reg.find_loaded("/fish3.png"), Some(SpriteHandle(3)));
    }

    #[test]
    fn unknown_handle_is_ignored() {
        let mut reg = SpriteRegistry::new();
        reg.set_loaded(SpriteHandle(7), true);
        assert!(!reg.is_loaded(SpriteHandle(7)));
        assert_eq!(reg.poi(), None);
    }
}
