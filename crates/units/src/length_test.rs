mod tests {
    use approx::assert_relative_eq;

    use crate::length::{Length, AU_TO_M, EARTH_RADIUS_M};

    #[test]
    fn test_length_conversions() {
        let altitude = Length::from_km(250.0);
        assert_relative_eq!(altitude.to_m(), 2.5e5);
        assert_relative_eq!(altitude.to_km(), 250.0);

        let sun_earth = Length::from_au(1.0);
        assert_relative_eq!(sun_earth.to_m(), AU_TO_M);

        let earth = Length::from_earth_radii(1.0);
        assert_relative_eq!(earth.to_m(), EARTH_RADIUS_M);
        assert_relative_eq!(earth.to_km(), 6371.0);

        let sun = Length::from_meters(6.95e8);
        assert_relative_eq!(sun.to_solar_radii(), 1.0);

        let panel = Length::from_mm(276.0);
        assert_relative_eq!(panel.to_cm(), 27.6, epsilon = 1e-12);
    }

    #[test]
    fn test_length_arithmetic_operations() {
        let radius = Length::from_km(6371.0);
        let altitude = Length::from_km(250.0);

        assert_relative_eq!((radius + altitude).to_km(), 6621.0);
        assert_relative_eq!((radius - altitude).to_km(), 6121.0);
        assert_relative_eq!((altitude * 2.0).to_km(), 500.0);
        assert_relative_eq!((2.0 * altitude).to_km(), 500.0);
        assert_relative_eq!((altitude / 2.0).to_km(), 125.0);

        // Dimensionless ratio
        assert_relative_eq!(altitude / radius, 250.0 / 6371.0);
    }

    #[test]
    fn test_length_product_is_area() {
        let a = Length::from_meters(2.2);
        let b = Length::from_meters(2.5);
        assert_relative_eq!((a * b).to_m2(), 5.5, epsilon = 1e-12);
        assert_relative_eq!(a.squared().to_m2(), 4.84, epsilon = 1e-12);
    }

    #[test]
    fn test_length_positivity() {
        assert!(Length::from_meters(0.1).is_positive());
        assert!(!Length::zero().is_positive());
        assert!(!Length::from_meters(-1.0).is_positive());
        assert!(!Length::from_meters(f64::NAN).is_positive());
        assert!(!Length::from_meters(f64::INFINITY).is_positive());
    }

    #[test]
    fn test_length_min_max() {
        let short = Length::from_meters(1.0);
        let long = Length::from_meters(2.0);
        assert_eq!(short.min(long), short);
        assert_eq!(short.max(long), long);
    }
}
