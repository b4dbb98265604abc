//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – frame cursor over a sprite sheet row
//! - [`boxcollider`] – axis-aligned box for landing checks
//! - [`floor`] – the starting ground and its one-way visibility flag
//! - [`jumpcharge`] – charge-and-release jump state machine
//! - [`mapposition`] – top-left corner of an entity in screen pixels
//! - [`platform`] – platform tag with its stable slot index
//! - [`player`] – tag for the player entity
//! - [`rigidbody`] – vertical velocity and gravity
//! - [`sprite`] – texture key and draw size

pub mod animation;
pub mod boxcollider;
pub mod floor;
pub mod jumpcharge;
pub mod mapposition;
pub mod platform;
pub mod player;
pub mod rigidbody;
pub mod sprite;
