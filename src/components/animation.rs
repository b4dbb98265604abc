use bevy_ecs::prelude::Component;

/// Frame cursor over a horizontal strip of sprite sheet cells.
///
/// The cursor only moves when something calls [`Animation::advance`]; the
/// player advances it once per applied horizontal step, so a standing player
/// keeps showing the same frame.
#[derive(Debug, Clone, Copy, Component)]
pub struct Animation {
    pub frame_index: usize,
    pub frame_count: usize,
}

impl Animation {
    pub fn new(frame_count: usize) -> Self {
        Self {
            frame_index: 0,
            frame_count: frame_count.max(1),
        }
    }

    /// Step to the next frame, wrapping around.
    pub fn advance(&mut self) {
        self.frame_index = (self.frame_index + 1) % self.frame_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps() {
        let mut anim = Animation::new(3);
        anim.advance();
        anim.advance();
        assert_eq!(anim.frame_index, 2);
        anim.advance();
        assert_eq!(anim.frame_index, 0);
    }

    #[test]
    fn test_zero_frames_is_one() {
        let mut anim = Animation::new(0);
        anim.advance();
        assert_eq!(anim.frame_index, 0);
    }
}
