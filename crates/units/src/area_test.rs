mod tests {
    use approx::assert_relative_eq;

    use crate::area::Area;

    #[test]
    fn test_area_conversions() {
        let area = Area::from_cm2(10_000.0);
        assert_relative_eq!(area.to_m2(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(Area::from_m2(0.5).to_cm2(), 5000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_area_arithmetic() {
        let a = Area::from_m2(3.0);
        let b = Area::from_m2(1.5);
        assert_relative_eq!((a + b).to_m2(), 4.5);
        assert_relative_eq!((a - b).to_m2(), 1.5);
        assert_relative_eq!((a * 2.0).to_m2(), 6.0);
        assert_relative_eq!((2.0 * a).to_m2(), 6.0);
        assert_relative_eq!((a / 4.0).to_m2(), 0.75);
        assert_relative_eq!(a / b, 2.0);
    }

    #[test]
    fn test_area_sum() {
        let faces = [Area::from_m2(1.0), Area::from_m2(2.0), Area::from_m2(3.5)];
        let total: Area = faces.iter().copied().sum();
        assert_relative_eq!(total.to_m2(), 6.5);
    }

    #[test]
    fn test_area_non_negative() {
        assert!(Area::zero().is_non_negative());
        assert!(Area::from_m2(1.0).is_non_negative());
        assert!(!Area::from_m2(-0.1).is_non_negative());
        assert!(!Area::from_m2(f64::NAN).is_non_negative());
    }
}
