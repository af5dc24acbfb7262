use util::{Angle, Vector2};

/// How out-of-range cosines are fed to the arc cosine in
/// [`SightCone::can_see`].
///
/// Rounding error can push the cosine between the facing direction and the
/// direction to the target slightly outside [-1, 1].
#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
pub enum CosineDomain {
    /// Clamp the cosine into [-1, 1] before taking the arc cosine.
    #[default]
    Clamped,
    /// Use the cosine as is. An overshooting cosine makes the angle NaN and
    /// the target is reported as not visible.
    Unclamped,
}

/// A cone of sight with an apex at an observer position.
///
/// The cone opens along the orientation vector, spans `field_of_view`
/// radians in total and reaches out to `view_distance`.
///
/// ```notrust
///          \   fov   /
///           \ <---> /
///            \  ^  /
///             \ : /   orientation
///              \:/
///               *     position
/// ```
#[derive(Copy, Clone, Debug)]
pub struct SightCone {
    position: Vector2,
    /// Always unit length, or the zero vector if set from a zero vector.
    orientation: Vector2,
    field_of_view: f32,
    view_distance: f32,
    cosine_domain: CosineDomain,
}

impl Default for SightCone {
    /// Cone at origin facing up, seeing a half-plane with unbounded range.
    fn default() -> Self {
        SightCone::new(
            Vector2::ZERO,
            Vector2::UP,
            Angle::HALF_TURN.radians(),
            f32::MAX,
        )
    }
}

impl SightCone {
    /// Build a new sight cone.
    ///
    /// Orientation is normalized, and the signs of field of view and view
    /// distance are dropped. The setters do not drop signs.
    pub fn new(
        position: Vector2,
        orientation: Vector2,
        field_of_view: f32,
        view_distance: f32,
    ) -> Self {
        let mut ret = SightCone {
            position,
            orientation: Vector2::ZERO,
            field_of_view: field_of_view.abs(),
            view_distance: view_distance.abs(),
            cosine_domain: Default::default(),
        };
        ret.set_orientation(orientation);
        ret
    }

    pub fn with_position(mut self, position: Vector2) -> Self {
        self.set_position(position);
        self
    }

    pub fn with_orientation(mut self, orientation: Vector2) -> Self {
        self.set_orientation(orientation);
        self
    }

    pub fn with_field_of_view(mut self, angle_rad: f32) -> Self {
        self.set_field_of_view(angle_rad);
        self
    }

    pub fn with_view_distance(mut self, distance: f32) -> Self {
        self.set_view_distance(distance);
        self
    }

    pub fn with_cosine_domain(mut self, domain: CosineDomain) -> Self {
        self.set_cosine_domain(domain);
        self
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn orientation(&self) -> Vector2 {
        self.orientation
    }

    /// Full angular width of the cone in radians.
    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    pub fn view_distance(&self) -> f32 {
        self.view_distance
    }

    pub fn cosine_domain(&self) -> CosineDomain {
        self.cosine_domain
    }

    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    /// Set the facing direction, the stored vector is normalized.
    pub fn set_orientation(&mut self, orientation: Vector2) {
        self.orientation = orientation.normalized();
        if self.orientation.magnitude() == 0.0 {
            log::warn!(
                "SightCone: zero orientation {orientation}, cone has no facing"
            );
        }
    }

    /// Set the field of view in radians.
    ///
    /// The value is stored as is, a negative field of view sees nothing.
    pub fn set_field_of_view(&mut self, angle_rad: f32) {
        self.field_of_view = angle_rad;
    }

    /// Set the view distance.
    ///
    /// The value is stored as is, a negative view distance sees nothing.
    pub fn set_view_distance(&mut self, distance: f32) {
        self.view_distance = distance;
    }

    pub fn set_cosine_domain(&mut self, domain: CosineDomain) {
        self.cosine_domain = domain;
    }

    /// Return whether the target point is inside the cone.
    ///
    /// Targets at the view distance are in range. Targets exactly on the
    /// edge of the field of view are not visible. The cone never sees its
    /// own position.
    pub fn can_see(&self, target: Vector2) -> bool {
        if target.approx_eq(self.position) {
            return false;
        }

        let to_target = target - self.position;
        let distance = to_target.magnitude();

        if distance > self.view_distance {
            log::trace!("SightCone: {target} out of range at {distance}");
            return false;
        }

        // Orientation is unit length, so only the target distance needs to
        // be divided out.
        let mut cos = self.orientation.dot(to_target) / distance;

        if !(-1.0..=1.0).contains(&cos) {
            match self.cosine_domain {
                CosineDomain::Clamped => cos = cos.clamp(-1.0, 1.0),
                CosineDomain::Unclamped => log::warn!(
                    "SightCone: cosine {cos} to {target} outside arc cosine \
                     domain"
                ),
            }
        }

        let angle = cos.acos();
        let visible = angle < self.field_of_view / 2.0;
        log::trace!(
            "SightCone: {target} at {} degrees, visible: {visible}",
            Angle::from_radians(angle)
        );
        visible
    }

    /// Filter the targets the cone can see, preserving their order.
    pub fn visible<'a, I>(
        &'a self,
        targets: I,
    ) -> impl Iterator<Item = Vector2> + 'a
    where
        I: IntoIterator<Item = Vector2>,
        I::IntoIter: 'a,
    {
        targets.into_iter().filter(move |&t| self.can_see(t))
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use quickcheck_macros::quickcheck;

    use super::*;

    fn v(x: f32, y: f32) -> Vector2 {
        Vector2::new(x, y)
    }

    #[test]
    fn defaults() {
        let cone = SightCone::default();
        assert!(cone.position().approx_eq(Vector2::ZERO));
        assert!(cone.orientation().approx_eq(Vector2::UP));
        assert_eq!(cone.field_of_view(), PI);
        assert_eq!(cone.view_distance(), f32::MAX);
        assert_eq!(cone.cosine_domain(), CosineDomain::Clamped);

        // Half-plane of visibility.
        assert!(cone.can_see(v(0.0, 1.0e15)));
        assert!(cone.can_see(v(-1000.0, 0.01)));
        assert!(!cone.can_see(v(1000.0, 0.0)));
        assert!(!cone.can_see(v(1.0, -0.01)));
    }

    #[test]
    fn constructor_drops_signs() {
        let cone = SightCone::new(v(1.0, 2.0), v(3.0, 0.0), -PI, -10.0);
        assert_eq!(cone.field_of_view(), PI);
        assert_eq!(cone.view_distance(), 10.0);
        assert!(cone.orientation().approx_eq(v(1.0, 0.0)));
        assert!(cone.can_see(v(5.0, 2.0)));
    }

    #[test]
    fn setters_keep_signs() {
        let mut cone = SightCone::default();

        cone.set_field_of_view(-PI);
        assert_eq!(cone.field_of_view(), -PI);
        assert!(!cone.can_see(v(0.0, 1.0)));

        cone.set_field_of_view(PI);
        cone.set_view_distance(-10.0);
        assert_eq!(cone.view_distance(), -10.0);
        assert!(!cone.can_see(v(0.0, 1.0)));
    }

    #[test]
    fn orientation_is_normalized() {
        let mut cone = SightCone::default();
        cone.set_orientation(v(42.0, -12.0));
        assert!((cone.orientation().magnitude() - 1.0).abs() < 1e-6);

        let cone = SightCone::default().with_orientation(v(-7.0, 0.0));
        assert!(cone.orientation().approx_eq(v(-1.0, 0.0)));
        assert!(cone.can_see(v(-1.0, 0.0)));
        assert!(!cone.can_see(v(1.0, 0.0)));
    }

    #[test]
    fn zero_orientation() {
        let cone = SightCone::default().with_orientation(Vector2::ZERO);
        assert!(cone.orientation().approx_eq(Vector2::ZERO));

        // Every direction is at a right angle to a zero facing.
        assert!(!cone.can_see(v(0.0, 1.0)));
        assert!(!cone.can_see(v(1.0, 0.0)));

        // A cone wider than a half-plane still sees it all.
        let cone = cone.with_field_of_view(1.5 * PI);
        assert!(cone.can_see(v(0.0, -1.0)));
    }

    #[test]
    fn own_position_is_never_visible() {
        let cone = SightCone::default().with_position(v(3.0, 4.0));
        assert!(!cone.can_see(v(3.0, 4.0)));
        assert!(!cone.can_see(v(3.0, 4.0 + 1e-5)));
        assert!(cone.can_see(v(3.0, 4.1)));
    }

    #[test]
    fn range_boundary_is_inclusive() {
        let cone = SightCone::default().with_view_distance(100.0);
        assert!(cone.can_see(v(0.0, 100.0)));
        assert!(!cone.can_see(v(0.0, 100.01)));
    }

    #[test]
    fn cosine_overshoot() {
        // Facing straight at the target, rounding error pushes the cosine
        // just above 1.
        let dir = v(1.0, 4.0);
        let cone = SightCone::default()
            .with_orientation(dir)
            .with_field_of_view(PI / 2.0);
        assert!(cone.orientation().dot(dir) / dir.magnitude() > 1.0);

        assert!(cone.can_see(dir));
        assert!(
            !cone
                .with_cosine_domain(CosineDomain::Unclamped)
                .can_see(dir)
        );
    }

    #[test]
    fn visible_filter() {
        let cone = SightCone::new(Vector2::ZERO, Vector2::UP, PI / 2.0, 100.0);
        let seen: Vec<Vector2> = cone
            .visible([v(0.0, 300.0), v(0.0, 50.0), v(0.0, -50.0), v(1.0, 2.0)])
            .collect();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].approx_eq(v(0.0, 50.0)));
        assert!(seen[1].approx_eq(v(1.0, 2.0)));
    }

    /// Points on a 1/8 unit grid, sums and differences of these stay exact.
    fn p((x, y): (i16, i16)) -> Vector2 {
        v(x as f32 / 8.0, y as f32 / 8.0)
    }

    #[quickcheck]
    fn translation_invariant(offset: (i16, i16), target: (i16, i16)) -> bool {
        let (offset, target) = (p(offset), p(target));
        let cone = SightCone::new(Vector2::ZERO, v(1.0, 1.0), PI / 3.0, 500.0);
        let moved = cone.with_position(offset);

        cone.can_see(target) == moved.can_see(target + offset)
    }

    #[quickcheck]
    fn never_sees_behind(target: (i16, i16)) -> bool {
        let target = p(target);
        target.y > 0.0 || !SightCone::default().can_see(target)
    }
}
