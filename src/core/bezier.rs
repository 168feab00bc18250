//! Reine Bézier-Formeln (quadratisch und kubisch).
//!
//! Alle Funktionen klemmen `t` auf `[0, 1]`, Position wie Ableitung.

use glam::Vec3;

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_point(p0: Vec3, p1: Vec3, p2: Vec3, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// B'(t) = 2(1-t)·(P1-P0) + 2t·(P2-P1)
pub fn quadratic_first_derivative(p0: Vec3, p1: Vec3, p2: Vec3, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    2.0 * (1.0 - t) * (p1 - p0) + 2.0 * t * (p2 - p1)
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_point(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// B'(t) = 3(1-t)²·(P1-P0) + 6(1-t)t·(P2-P1) + 3t²·(P3-P2)
pub fn cubic_first_derivative(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    3.0 * inv * inv * (p1 - p0) + 6.0 * inv * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ── Quadratische Bézier ──

    #[test]
    fn test_quadratic_endpoints_and_mid() {
        let p0 = Vec3::new(0.0, 0.0, 0.0);
        let p1 = Vec3::new(5.0, 10.0, 0.0);
        let p2 = Vec3::new(10.0, 0.0, 0.0);

        assert!(quadratic_point(p0, p1, p2, 0.0).abs_diff_eq(p0, 1e-5));
        assert!(quadratic_point(p0, p1, p2, 1.0).abs_diff_eq(p2, 1e-5));
        assert!(quadratic_point(p0, p1, p2, 0.5).abs_diff_eq(Vec3::new(5.0, 5.0, 0.0), 1e-5));
    }

    #[test]
    fn test_quadratic_clamps_parameter() {
        let p0 = Vec3::ZERO;
        let p1 = Vec3::new(1.0, 2.0, 3.0);
        let p2 = Vec3::new(4.0, 0.0, -1.0);

        assert_eq!(quadratic_point(p0, p1, p2, -3.0), quadratic_point(p0, p1, p2, 0.0));
        assert_eq!(quadratic_point(p0, p1, p2, 7.5), quadratic_point(p0, p1, p2, 1.0));
        assert_eq!(
            quadratic_first_derivative(p0, p1, p2, 2.0),
            quadratic_first_derivative(p0, p1, p2, 1.0)
        );
    }

    #[test]
    fn test_quadratic_derivative_at_ends() {
        let p0 = Vec3::ZERO;
        let p1 = Vec3::new(2.0, 0.0, 0.0);
        let p2 = Vec3::new(2.0, 2.0, 0.0);

        // B'(0) = 2(P1-P0), B'(1) = 2(P2-P1)
        assert!(quadratic_first_derivative(p0, p1, p2, 0.0).abs_diff_eq(Vec3::new(4.0, 0.0, 0.0), 1e-5));
        assert!(quadratic_first_derivative(p0, p1, p2, 1.0).abs_diff_eq(Vec3::new(0.0, 4.0, 0.0), 1e-5));
    }

    // ── Kubische Bézier ──

    #[test]
    fn test_cubic_symmetry() {
        // Symmetrische S-Kurve → Mittelpunkt bei (5, 5)
        let p0 = Vec3::new(0.0, 0.0, 0.0);
        let p1 = Vec3::new(0.0, 10.0, 0.0);
        let p2 = Vec3::new(10.0, 0.0, 0.0);
        let p3 = Vec3::new(10.0, 10.0, 0.0);

        let mid = cubic_point(p0, p1, p2, p3, 0.5);
        assert_relative_eq!(mid.x, 5.0, epsilon = 1e-5);
        assert_relative_eq!(mid.y, 5.0, epsilon = 1e-5);
    }

    #[test]
    fn test_cubic_derivative_on_straight_line_is_constant() {
        // Gleichmäßig verteilte kollineare Punkte → konstante Geschwindigkeit
        let p0 = Vec3::ZERO;
        let p1 = Vec3::new(3.0, 0.0, 0.0);
        let p2 = Vec3::new(6.0, 0.0, 0.0);
        let p3 = Vec3::new(9.0, 0.0, 0.0);

        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let v = cubic_first_derivative(p0, p1, p2, p3, t);
            assert_relative_eq!(v.x, 9.0, epsilon = 1e-4);
            assert_relative_eq!(v.y, 0.0);
        }
    }

    #[test]
    fn test_cubic_clamps_parameter() {
        let p0 = Vec3::ZERO;
        let p1 = Vec3::new(0.0, 4.0, 0.0);
        let p2 = Vec3::new(4.0, 4.0, 1.0);
        let p3 = Vec3::new(4.0, 0.0, 2.0);

        assert_eq!(cubic_point(p0, p1, p2, p3, -0.1), p0);
        assert_eq!(cubic_point(p0, p1, p2, p3, 1.1), cubic_point(p0, p1, p2, p3, 1.0));
    }
}
