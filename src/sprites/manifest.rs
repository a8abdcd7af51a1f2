//! Sprite manifest loading and asset management.
//!
//! Loads the sprite manifest JSON which defines the available sprites and
//! preloads a texture handle for each key.

#![allow(dead_code)]

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Resource containing all loaded sprite definitions.
#[derive(Resource, Default)]
pub struct SpriteManifest {
    /// Version of the manifest schema.
    pub version: u32,
    /// Map of sprite keys to their definitions.
    pub assets: HashMap<String, SpriteAssetDef>,
    /// Loaded texture handles, keyed by sprite key.
    pub textures: HashMap<String, Handle<Image>>,
}

/// Definition of a single sprite asset.
#[derive(Debug, Clone, Deserialize)]
pub struct SpriteAssetDef {
    /// Path to the sprite image file, relative to assets/.
    pub path: String,
    /// Number of animation frames (1 for static sprites).
    pub frames: u32,
}

/// Raw manifest JSON structure.
#[derive(Deserialize)]
struct ManifestJson {
    version: u32,
    assets: HashMap<String, SpriteAssetDef>,
}

impl SpriteManifest {
    /// Load the manifest from a JSON file. A missing or malformed manifest
    /// leaves the map empty; sprite sync then simply keeps the placeholder.
    pub fn load_from_file(&mut self, path: &str, asset_server: &AssetServer) {
        let manifest_path = Path::new(path);

        if !manifest_path.exists() {
            warn!(
                "Sprite manifest not found at {:?}, using empty manifest",
                path
            );
            return;
        }

        let contents = match fs::read_to_string(manifest_path) {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to read sprite manifest: {}", e);
                return;
            }
        };

        let manifest_json: ManifestJson = match serde_json::from_str(&contents) {
            Ok(m) => m,
            Err(e) => {
                error!("Failed to parse sprite manifest: {}", e);
                return;
            }
        };

        self.version = manifest_json.version;
        self.assets = manifest_json.assets;

        for (key, def) in &self.assets {
            let handle = asset_server.load(&def.path);
            self.textures.insert(key.clone(), handle);
        }

        info!(
            "Loaded sprite manifest v{} with {} assets",
            self.version,
            self.assets.len()
        );
    }

    /// Get a sprite definition by key.
    pub fn get(&self, key: &str) -> Option<&SpriteAssetDef> {
        self.assets.get(key)
    }

    /// Get a texture handle by key.
    pub fn get_texture(&self, key: &str) -> Option<Handle<Image>> {
        self.textures.get(key).cloned()
    }

    /// Check if a sprite key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.assets.contains_key(key)
    }
}
