use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite is identified by a texture key and the size it is drawn at.
///
/// When `frame_size` is set the texture is a sprite sheet laid out as a single
/// row of cells; the cell is picked by the entity's
/// [`Animation`](super::animation::Animation). Without it the whole texture is
/// scaled into `width` x `height`.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: &'static str,
    pub width: f32,
    pub height: f32,
    pub frame_size: Option<Vector2>,
}

impl Sprite {
    pub fn new(tex_key: &'static str, width: f32, height: f32) -> Self {
        Self {
            tex_key,
            width,
            height,
            frame_size: None,
        }
    }

    pub fn with_frames(mut self, frame_width: f32, frame_height: f32) -> Self {
        self.frame_size = Some(Vector2::new(frame_width, frame_height));
        self
    }
}
