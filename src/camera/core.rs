use glam::{Mat4, Vec3, Vec4};

use crate::bounds::Aabb;
use crate::camera::framing::BoxFace;

/// World up direction used when no explicit up vector is given.
///
/// The previewer is z-up: scenes lie in the x/y plane with z as height.
pub const DEFAULT_UP: Vec3 = Vec3::Z;

/// Vertical field of view (degrees) a camera starts with before any
/// projection has been configured.
pub const DEFAULT_FIELD_OF_VIEW: f32 = 45.0;

/// A viewpoint in world space.
///
/// The camera owns its position, the point it is aimed at, and a local
/// orthonormal basis (`look`/`up`/`right`). Every mutator re-derives the
/// basis before returning, so the three axes are mutually orthogonal unit
/// vectors at all times. Matrices are derived state: they are rebuilt on
/// demand and the getters defensively re-orthogonalize first, which is why
/// [`Camera::view_matrix`] and [`Camera::mvp_matrix`] take `&mut self`.
///
/// Motion state (`acceleration`/`speed`/`velocity`) lives in local axes:
/// `x` is right, `y` is up, `z` is forward.
#[derive(Debug, Clone)]
pub struct Camera {
    pub(crate) position: Vec3,
    pub(crate) target: Vec3,
    pub(crate) look: Vec3,
    pub(crate) up: Vec3,
    pub(crate) right: Vec3,
    pub(crate) field_of_view: f32,
    pub(crate) view: Mat4,
    pub(crate) proj: Mat4,
    pub(crate) velocity: Vec3,
    pub(crate) speed: Vec3,
    pub(crate) acceleration: Vec3,
    pub(crate) max_speed: Vec3,
    pub(crate) max_acceleration: Vec3,
    pub(crate) has_focus: bool,
}

impl Camera {
    /// Create a camera at `position` aimed at `target`, with the z-up
    /// default up vector.
    ///
    /// `target` must differ from `position`; a zero-length aim direction
    /// cannot be normalized and poisons the basis with NaN.
    #[must_use]
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self::with_up(position, target, DEFAULT_UP)
    }

    /// Create a camera at `position` aimed at `target` with an explicit
    /// up vector.
    ///
    /// `up` seeds the basis derivation and must not be parallel to the aim
    /// direction.
    #[must_use]
    pub fn with_up(position: Vec3, target: Vec3, up: Vec3) -> Self {
        let mut camera = Self {
            position,
            target,
            look: Vec3::ZERO,
            up,
            right: Vec3::ZERO,
            field_of_view: DEFAULT_FIELD_OF_VIEW,
            view: Mat4::IDENTITY,
            proj: Mat4::IDENTITY,
            velocity: Vec3::ZERO,
            speed: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            max_speed: Vec3::ONE,
            max_acceleration: Vec3::ONE,
            has_focus: false,
        };
        camera.set_target(target);
        camera
    }

    /// Create a camera framing `aabb` from its front face at the default
    /// field of view.
    #[must_use]
    pub fn framing(aabb: &Aabb) -> Self {
        let mut camera =
            Self::with_up(aabb.max + Vec3::ONE, aabb.center(), DEFAULT_UP);
        camera.look_at_box(aabb, BoxFace::Front);
        camera
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// World-space eye position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// World-space point the camera is aimed at.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Unit forward direction.
    #[must_use]
    pub fn look_at(&self) -> Vec3 {
        self.look
    }

    /// Unit up basis axis.
    #[must_use]
    pub fn up_vector(&self) -> Vec3 {
        self.up
    }

    /// Unit right basis axis.
    #[must_use]
    pub fn right_vector(&self) -> Vec3 {
        self.right
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    /// World-space velocity applied by [`Camera::update_position`].
    #[must_use]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Local-axis speed (x right, y up, z forward).
    #[must_use]
    pub fn speed(&self) -> Vec3 {
        self.speed
    }

    /// Local-axis acceleration (x right, y up, z forward).
    #[must_use]
    pub fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    /// Whether this camera currently receives dispatched control actions.
    #[must_use]
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    // ── Orientation & targeting ──────────────────────────────────────────

    /// Aim the camera at `target` from its current position.
    ///
    /// Recomputes the forward direction, then re-derives the basis: right
    /// from the *previous* up and the new look, up from the new look and
    /// new right. That ordering is load-bearing — swapping it changes the
    /// resulting basis under non-trivial rotations. The view matrix is
    /// rebuilt without a second orthogonalization pass since the
    /// derivation above already guarantees orthonormality.
    ///
    /// `target` must differ from the current position.
    pub fn set_look_at(&mut self, target: Vec3) {
        self.look = (target - self.position).normalize();
        self.right = self.up.cross(self.look).normalize();
        self.up = self.look.cross(self.right).normalize();
        self.construct_view_matrix(false);
    }

    /// Redirect the camera's aim to `target`, keeping the position fixed.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        self.set_look_at(self.target);
    }

    /// Set the vertical field of view in degrees.
    ///
    /// Affects subsequent projection and framing computations only; the
    /// current orientation is untouched.
    pub fn set_field_of_view(&mut self, fov: f32) {
        self.field_of_view = fov;
    }

    /// Set the per-axis speed cap for the motion model.
    pub fn set_max_speed(&mut self, max_speed: Vec3) {
        self.max_speed = max_speed;
    }

    /// Set the per-axis acceleration cap for the motion model.
    pub fn set_max_acceleration(&mut self, max_acceleration: Vec3) {
        self.max_acceleration = max_acceleration;
    }

    /// Mark whether this camera is the one receiving dispatched control
    /// actions. Exclusivity is owned by the
    /// [`ActionDispatcher`](crate::dispatch::ActionDispatcher).
    pub fn set_focus_state(&mut self, focus: bool) {
        self.has_focus = focus;
    }

    // ── Matrix construction ──────────────────────────────────────────────

    /// Rebuild the view matrix from the current basis and position.
    ///
    /// With `orthogonalize` set, the basis is first re-derived from the
    /// look direction to correct floating-point drift accumulated by
    /// repeated rotations. Callers that have just re-derived the basis
    /// themselves (e.g. [`Camera::set_look_at`]) pass `false`.
    pub fn construct_view_matrix(&mut self, orthogonalize: bool) {
        if orthogonalize {
            self.look = self.look.normalize();
            self.right = self.up.cross(self.look).normalize();
            self.up = self.look.cross(self.right).normalize();
        }

        // Row-vector convention: basis axes in the first three rows'
        // columns, translation as negative dot products in the fourth row.
        self.view = Mat4::from_cols(
            Vec4::new(
                self.right.x,
                self.right.y,
                self.right.z,
                -self.right.dot(self.position),
            ),
            Vec4::new(
                self.up.x,
                self.up.y,
                self.up.z,
                -self.up.dot(self.position),
            ),
            Vec4::new(
                self.look.x,
                self.look.y,
                self.look.z,
                -self.look.dot(self.position),
            ),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        );
    }

    /// The view matrix, freshly rebuilt with re-orthogonalization.
    #[must_use]
    pub fn view_matrix(&mut self) -> Mat4 {
        self.construct_view_matrix(true);
        self.view
    }

    /// The stored projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.proj
    }

    /// The combined view-projection matrix (`view * proj` in this crate's
    /// row-vector convention), freshly rebuilt with re-orthogonalization.
    #[must_use]
    pub fn mvp_matrix(&mut self) -> Mat4 {
        self.construct_view_matrix(true);
        self.view * self.proj
    }

    /// Store a perspective projection and update the field of view.
    ///
    /// Left-handed (+z forward), [0, 1] depth range. `fov` is the vertical
    /// field of view in degrees.
    pub fn set_perspective_projection(
        &mut self,
        fov: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) {
        self.set_field_of_view(fov);
        let h = 1.0 / (fov.to_radians() * 0.5).tan();
        let w = h / aspect;
        let range = far / (far - near);
        self.proj = Mat4::from_cols(
            Vec4::new(w, 0.0, 0.0, 0.0),
            Vec4::new(0.0, h, 0.0, 0.0),
            Vec4::new(0.0, 0.0, range, -near * range),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
        );
    }

    /// Store an orthographic projection.
    ///
    /// Left-handed (+z forward), [0, 1] depth range.
    pub fn set_orthographic_projection(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) {
        self.proj = Mat4::from_cols(
            Vec4::new(
                2.0 / (right - left),
                0.0,
                0.0,
                (left + right) / (left - right),
            ),
            Vec4::new(
                0.0,
                2.0 / (top - bottom),
                0.0,
                (top + bottom) / (bottom - top),
            ),
            Vec4::new(0.0, 0.0, 1.0 / (far - near), near / (near - far)),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        );
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera
/// metadata, the renderer-facing form of the camera's derived state.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub field_of_view: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            field_of_view: DEFAULT_FIELD_OF_VIEW,
            forward: [0.0, 1.0, 0.0],
            _pad: 0.0,
        }
    }

    /// Refresh uniform fields from the given camera's current state.
    ///
    /// Takes `&mut Camera` because fetching the combined matrix rebuilds
    /// the view matrix as a side effect.
    pub fn update_view_proj(&mut self, camera: &mut Camera) {
        self.view_proj = camera.mvp_matrix().to_cols_array_2d();
        self.position = camera.position().to_array();
        self.forward = camera.look_at().to_array();
        self.field_of_view = camera.field_of_view();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 1e-5;

    fn assert_orthonormal(camera: &Camera) {
        assert!((camera.look_at().length() - 1.0).abs() < TOL);
        assert!((camera.up_vector().length() - 1.0).abs() < TOL);
        assert!((camera.right_vector().length() - 1.0).abs() < TOL);
        assert!(camera.look_at().dot(camera.up_vector()).abs() < TOL);
        assert!(camera.look_at().dot(camera.right_vector()).abs() < TOL);
        assert!(camera.up_vector().dot(camera.right_vector()).abs() < TOL);
    }

    #[test]
    fn new_camera_has_orthonormal_basis() {
        let camera = Camera::new(Vec3::new(3.0, -4.0, 2.0), Vec3::ZERO);
        assert_orthonormal(&camera);
        // Forward points from the eye toward the target.
        let expected =
            (Vec3::ZERO - Vec3::new(3.0, -4.0, 2.0)).normalize();
        assert!((camera.look_at() - expected).length() < TOL);
    }

    #[test]
    fn set_target_is_idempotent() {
        let mut camera = Camera::new(Vec3::new(0.0, 5.0, 1.0), Vec3::ZERO);
        let (look, up, right) =
            (camera.look_at(), camera.up_vector(), camera.right_vector());
        camera.set_target(Vec3::ZERO);
        assert!((camera.look_at() - look).length() < TOL);
        assert!((camera.up_vector() - up).length() < TOL);
        assert!((camera.right_vector() - right).length() < TOL);
    }

    #[test]
    fn view_matrix_places_target_ahead() {
        let mut camera = Camera::new(Vec3::new(0.0, 2.0, 0.0), Vec3::ZERO);
        let view = camera.view_matrix();
        // Row-vector transform of the target: distance 2 straight ahead.
        let clip = view.transpose() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(clip.x.abs() < TOL);
        assert!(clip.y.abs() < TOL);
        assert!((clip.z - 2.0).abs() < TOL);
    }

    #[test]
    fn mvp_is_view_times_projection() {
        let mut camera = Camera::new(Vec3::new(1.0, 3.0, 2.0), Vec3::ZERO);
        camera.set_perspective_projection(60.0, 1.5, 0.1, 100.0);
        let mvp = camera.mvp_matrix();
        // Against the view matrix of the same rebuild the identity is
        // exact.
        assert_eq!(mvp, camera.view * camera.projection_matrix());
        // A separate getter call re-orthogonalizes again, and
        // re-normalizing an already-unit basis is not a bitwise fixed
        // point, so across calls the identity holds to round-off.
        let view = camera.view_matrix();
        let proj = camera.projection_matrix();
        assert!(mvp.abs_diff_eq(view * proj, TOL));
    }

    #[test]
    fn perspective_updates_field_of_view() {
        let mut camera = Camera::new(Vec3::Y, Vec3::ZERO);
        camera.set_perspective_projection(72.0, 1.0, 0.1, 10.0);
        assert_eq!(camera.field_of_view(), 72.0);
    }

    #[test]
    fn orthographic_maps_volume_to_unit_depth() {
        let mut camera = Camera::new(Vec3::new(0.0, -1.0, 0.0), Vec3::ZERO);
        camera.set_orthographic_projection(
            -1.0, 1.0, -1.0, 1.0, 0.0, 10.0,
        );
        let proj = camera.projection_matrix();
        // Row-vector: v * proj. Near plane (z=0) maps to depth 0, far
        // plane (z=10) maps to depth 1.
        let near = proj.transpose() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let far = proj.transpose() * Vec4::new(0.0, 0.0, 10.0, 1.0);
        assert!(near.z.abs() < TOL);
        assert!((far.z - 1.0).abs() < TOL);
    }

    #[test]
    fn repeated_getters_correct_drift() {
        let mut camera = Camera::new(Vec3::new(5.0, 5.0, 5.0), Vec3::ZERO);
        // Nudge the basis off orthonormal to emulate accumulated error.
        camera.look *= 1.001;
        let _ = camera.view_matrix();
        assert_orthonormal(&camera);
    }

    #[test]
    fn uniform_reflects_camera_state() {
        let mut camera = Camera::new(Vec3::new(0.0, 4.0, 0.0), Vec3::ZERO);
        camera.set_perspective_projection(45.0, 1.0, 0.1, 50.0);
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&mut camera);
        assert_eq!(uniform.position, [0.0, 4.0, 0.0]);
        assert_eq!(uniform.field_of_view, 45.0);
        assert!((Vec3::from_array(uniform.forward) + Vec3::Y).length() < TOL);
    }
}
