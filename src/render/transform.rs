// src/render/transform.rs
//
// Figures are laid out in screen space (origin top-left, y down)
// and converted to nannou space (origin centre, y up) at the end.

use nannou::prelude::*;

#[derive(Debug, Clone)]
pub struct Transform2D {
    pub translation: Vec2,
    pub scale: Vec2,
    pub rotation: f32, // degrees, clockwise on screen
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translation: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation: 0.0,
        }
    }
}

impl Transform2D {
    // Scale, then rotate, then translate
    pub fn apply_to_point(&self, point: Point2) -> Point2 {
        let scaled = point * self.scale;

        let rotation = self.rotation.to_radians();
        let cos_rot = rotation.cos();
        let sin_rot = rotation.sin();
        let rotated = pt2(
            scaled.x * cos_rot - scaled.y * sin_rot,
            scaled.x * sin_rot + scaled.y * cos_rot,
        );

        rotated + self.translation
    }
}

/// Screen space point on a `width` x `height` surface to nannou space.
pub fn screen_to_nannou(point: Point2, width: f32, height: f32) -> Point2 {
    pt2(point.x - width / 2.0, height / 2.0 - point.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Point2, b: Point2) {
        assert!((a - b).length() < 1e-4, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_default_transform_is_identity() {
        let transform = Transform2D::default();
        assert_close(transform.apply_to_point(pt2(3.0, -4.0)), pt2(3.0, -4.0));
    }

    #[test]
    fn test_rotation_is_clockwise_on_screen() {
        let transform = Transform2D {
            rotation: 90.0,
            ..Default::default()
        };
        // with y pointing down, +x turns into +y (downwards)
        assert_close(transform.apply_to_point(pt2(1.0, 0.0)), pt2(0.0, 1.0));
    }

    #[test]
    fn test_rotation_happens_before_translation() {
        let transform = Transform2D {
            translation: vec2(100.0, 50.0),
            scale: Vec2::ONE,
            rotation: 90.0,
        };
        assert_close(transform.apply_to_point(pt2(10.0, 0.0)), pt2(100.0, 60.0));
    }

    #[test]
    fn test_mirrored_scale() {
        let transform = Transform2D {
            scale: vec2(1.0, -1.0),
            ..Default::default()
        };
        assert_close(transform.apply_to_point(pt2(2.0, 5.0)), pt2(2.0, -5.0));
    }

    #[test]
    fn test_screen_to_nannou() {
        assert_close(screen_to_nannou(pt2(0.0, 0.0), 200.0, 100.0), pt2(-100.0, 50.0));
        assert_close(screen_to_nannou(pt2(200.0, 100.0), 200.0, 100.0), pt2(100.0, -50.0));
        assert_close(screen_to_nannou(pt2(100.0, 50.0), 200.0, 100.0), pt2(0.0, 0.0));
    }
}
