use glam::Vec3;

/// Converts Euler angles in degrees to a unit facing direction.
///
/// `eulers.y` is the polar angle measured from the +Z axis and `eulers.z` is
/// the azimuth around +Z. `eulers.x` (roll) does not affect the direction.
pub fn direction_from_eulers(eulers_deg: Vec3) -> Vec3 {
    let polar = eulers_deg.y.to_radians();
    let azimuth = eulers_deg.z.to_radians();

    Vec3::new(
        f32::cos(azimuth) * f32::sin(polar),
        f32::sin(azimuth) * f32::sin(polar),
        f32::cos(polar),
    )
}

/// Calculates the point that sits `radius` units behind `center` when looking
/// along the direction described by `eulers_deg`. A camera placed there and
/// facing along `eulers_deg` will look straight at `center`.
pub fn spherical_to_cartesian(center: Vec3, radius: f32, eulers_deg: Vec3) -> Vec3 {
    center - radius * direction_from_eulers(eulers_deg)
}

/// Wraps an angle in degrees into [0, 360).
pub fn wrap_degrees(angle_deg: f32) -> f32 {
    let wrapped = angle_deg.rem_euclid(360.0);

    // `rem_euclid` can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eulers_map_to_axes() {
        assert!(direction_from_eulers(Vec3::ZERO).abs_diff_eq(Vec3::Z, 1e-6));
        assert!(direction_from_eulers(Vec3::new(0.0, 90.0, 0.0)).abs_diff_eq(Vec3::X, 1e-6));
        assert!(direction_from_eulers(Vec3::new(0.0, 90.0, 90.0)).abs_diff_eq(Vec3::Y, 1e-6));
        assert!(direction_from_eulers(Vec3::new(0.0, 180.0, 0.0)).abs_diff_eq(-Vec3::Z, 1e-6));
    }

    #[test]
    fn euler_directions_are_unit_length() {
        let d = direction_from_eulers(Vec3::new(0.0, 135.0, 45.0));
        assert!((d.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn spherical_point_is_radius_from_center() {
        let center = Vec3::new(10.0, -4.0, 2.0);
        let eye = spherical_to_cartesian(center, 50.0, Vec3::new(0.0, 110.0, 315.0));

        assert!((eye.distance(center) - 50.0).abs() < 1e-3);
    }

    #[test]
    fn wrap_degrees_stays_in_range() {
        assert_eq!(10.0, wrap_degrees(370.0));
        assert_eq!(350.0, wrap_degrees(-10.0));
        assert_eq!(0.0, wrap_degrees(360.0));
        assert_eq!(0.0, wrap_degrees(-1e-9));
    }
}
