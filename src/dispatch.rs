//! The camera's externally-driven control vocabulary.
//!
//! Input bindings, UI widgets, or scripting layers produce
//! [`CameraAction`] values and hand them to an [`ActionDispatcher`] owned
//! by the application. The dispatcher routes queued actions to the single
//! *main* camera — the one whose registration is currently subscribed.
//! Exclusivity lives here, not in the camera: a [`Camera`] only exposes
//! [`Camera::handle_action`].

use std::collections::VecDeque;

use glam::Vec3;

use crate::camera::Camera;

/// A single world axis, used to address one coordinate of a vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// World x coordinate.
    X,
    /// World y coordinate.
    Y,
    /// World z coordinate.
    Z,
}

/// A camera control operation produced outside the camera core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraAction {
    /// Overwrite one coordinate of the camera position with the matching
    /// coordinate of `position`; the other two are left untouched.
    MovePosition {
        /// Source vector for the new coordinate value.
        position: Vec3,
        /// Which coordinate to overwrite.
        axis: Axis,
    },
    /// Re-aim the camera. The argument is a *direction offset*, not an
    /// absolute point: the camera aims at `position - look_at`.
    MoveLookAt {
        /// Direction offset subtracted from the camera position.
        look_at: Vec3,
    },
}

impl Camera {
    /// Apply a single control action to this camera.
    pub fn handle_action(&mut self, action: CameraAction) {
        match action {
            CameraAction::MovePosition { position, axis } => match axis {
                Axis::X => self.position.x = position.x,
                Axis::Y => self.position.y = position.y,
                Axis::Z => self.position.z = position.z,
            },
            CameraAction::MoveLookAt { look_at } => {
                self.set_look_at(self.position - look_at);
            }
        }
    }
}

/// Handle identifying a camera registered with an [`ActionDispatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CameraId(u32);

/// Routes queued [`CameraAction`]s to the single main camera.
///
/// At most one registration is subscribed at a time; subscribing a new
/// camera silently replaces the previous one. Actions pushed while no
/// camera is dispatching stay queued until the main camera drains them.
#[derive(Debug, Default)]
pub struct ActionDispatcher {
    next_id: u32,
    main: Option<CameraId>,
    pending: VecDeque<CameraAction>,
}

impl ActionDispatcher {
    /// Create an empty dispatcher with no main camera.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a registration handle for a camera instance.
    pub fn register(&mut self) -> CameraId {
        let id = CameraId(self.next_id);
        self.next_id += 1;
        id
    }

    /// The currently subscribed main camera, if any.
    #[must_use]
    pub fn main_camera(&self) -> Option<CameraId> {
        self.main
    }

    /// Make `id` the main camera, replacing any previous subscription.
    pub fn subscribe(&mut self, id: CameraId) {
        log::debug!("camera {id:?} subscribed as main");
        self.main = Some(id);
    }

    /// Drop `id`'s subscription. A no-op unless `id` is currently main.
    pub fn unsubscribe(&mut self, id: CameraId) {
        if self.main == Some(id) {
            log::debug!("camera {id:?} unsubscribed");
            self.main = None;
        }
    }

    /// Queue an action for the main camera.
    pub fn push(&mut self, action: CameraAction) {
        self.pending.push_back(action);
    }

    /// Drain queued actions into `camera` if `id` is the main camera.
    ///
    /// Returns the number of actions applied; a non-main camera applies
    /// nothing and leaves the queue intact for the main camera.
    pub fn dispatch(&mut self, id: CameraId, camera: &mut Camera) -> usize {
        if self.main != Some(id) {
            return 0;
        }
        let count = self.pending.len();
        for action in self.pending.drain(..) {
            camera.handle_action(action);
        }
        count
    }

    /// Subscribe or unsubscribe `id` and mirror the state onto the
    /// camera's focus flag.
    pub fn set_main_camera(
        &mut self,
        id: CameraId,
        camera: &mut Camera,
        status: bool,
    ) {
        if status {
            self.subscribe(id);
        } else {
            self.unsubscribe(id);
        }
        camera.set_focus_state(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 1e-5;

    #[test]
    fn move_position_writes_a_single_axis() {
        let mut camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO);
        camera.handle_action(CameraAction::MovePosition {
            position: Vec3::new(9.0, 9.0, 9.0),
            axis: Axis::Y,
        });
        assert_eq!(camera.position(), Vec3::new(1.0, 9.0, 3.0));
    }

    #[test]
    fn move_look_at_is_a_direction_offset() {
        let mut camera = Camera::new(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO);
        camera.handle_action(CameraAction::MoveLookAt {
            look_at: Vec3::new(0.0, 0.0, 2.0),
        });
        // Aims at position - offset, i.e. straight down -z from the eye.
        assert!((camera.look_at() + Vec3::Z).length() < TOL);
    }

    #[test]
    fn only_the_main_camera_receives_actions() {
        let mut dispatcher = ActionDispatcher::new();
        let mut main = Camera::new(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO);
        let mut other = Camera::new(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO);
        let main_id = dispatcher.register();
        let other_id = dispatcher.register();
        dispatcher.set_main_camera(main_id, &mut main, true);

        dispatcher.push(CameraAction::MovePosition {
            position: Vec3::new(7.0, 0.0, 0.0),
            axis: Axis::X,
        });
        assert_eq!(dispatcher.dispatch(other_id, &mut other), 0);
        assert_eq!(other.position().x, 0.0);
        assert_eq!(dispatcher.dispatch(main_id, &mut main), 1);
        assert_eq!(main.position().x, 7.0);
        // Queue is drained once applied.
        assert_eq!(dispatcher.dispatch(main_id, &mut main), 0);
    }

    #[test]
    fn subscribing_replaces_the_previous_main() {
        let mut dispatcher = ActionDispatcher::new();
        let mut first = Camera::new(Vec3::Y, Vec3::ZERO);
        let mut second = Camera::new(Vec3::Y, Vec3::ZERO);
        let first_id = dispatcher.register();
        let second_id = dispatcher.register();

        dispatcher.set_main_camera(first_id, &mut first, true);
        dispatcher.set_main_camera(second_id, &mut second, true);
        assert_eq!(dispatcher.main_camera(), Some(second_id));
        assert!(second.has_focus());

        // Unsubscribing a non-main id changes nothing.
        dispatcher.unsubscribe(first_id);
        assert_eq!(dispatcher.main_camera(), Some(second_id));

        dispatcher.set_main_camera(second_id, &mut second, false);
        assert_eq!(dispatcher.main_camera(), None);
        assert!(!second.has_focus());
    }
}
