//! Texture store resource.
//!
//! A non-send resource that stores loaded textures keyed by string IDs.
//! Textures are loaded once at startup and looked up by the renderer through
//! the [`Sprite`](crate::components::sprite::Sprite) texture key. A key with
//! no texture is not an error: the renderer draws a flat rectangle instead.
//!
//! Note: This is a non-send resource because Raylib textures must be accessed
//! from the main thread only.

use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// Map of texture keys to loaded textures.
///
/// This is a non-send resource; use `NonSend<TextureStore>` in system parameters.
#[derive(Default)]
pub struct TextureStore {
    textures: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    /// Create an empty texture store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a texture with the given key.
    pub fn add(&mut self, id: impl Into<String>, texture: Texture2D) {
        self.textures.insert(id.into(), texture);
    }

    /// Get a texture by its key.
    pub fn get(&self, id: impl AsRef<str>) -> Option<&Texture2D> {
        self.textures.get(id.as_ref())
    }
}
