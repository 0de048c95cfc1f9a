#[cfg(test)]
mod tests {
    use crate::pricelevel::{Price, Quantity, SCALE_FACTOR};

    #[test]
    fn test_raw_construction_and_accessors() {
        let price = Price::new(1_023_400);
        assert_eq!(price.raw_value(), 1_023_400);
        assert_eq!(Price::from_units(102).raw_value(), 102 * SCALE_FACTOR);
        assert!(Price::ZERO.is_zero());
        assert!(!price.is_zero());
    }

    #[test]
    fn test_from_f64_truncates_toward_zero() {
        // The fifth fractional digit is dropped, not rounded.
        assert_eq!(Price::from_f64(1.23456).raw_value(), 12_345);
        assert_eq!(Price::from_f64(-1.23456).raw_value(), -12_345);
        assert_eq!(Quantity::from_f64(0.99999).raw_value(), 9_999);
    }

    #[test]
    fn test_to_f64_round_trip_of_exact_values() {
        let price = Price::from_f64(102.5);
        assert_eq!(price.raw_value(), 1_025_000);
        assert!((price.to_f64() - 102.5).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Price::from_units(10);
        let b = Price::from_units(3);
        assert_eq!(a + b, Price::from_units(13));
        assert_eq!(a - b, Price::from_units(7));
        assert_eq!(b * 4, Price::from_units(12));

        let mut acc = Quantity::ZERO;
        acc += Quantity::from_units(5);
        acc -= Quantity::from_units(2);
        assert_eq!(acc, Quantity::from_units(3));
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(Price::new(5) / 2, Price::new(2));
        assert_eq!(Price::new(-5) / 2, Price::new(-2));
        assert_eq!(Price::new(7) / 2, Price::new(3));
    }

    #[test]
    fn test_total_ordering_matches_raw_ordering() {
        let low = Price::from_units(99);
        let high = Price::from_units(100);
        assert!(low < high);
        assert!(high > low);
        assert!(low <= Price::from_units(99));
        assert!(Price::new(-1) < Price::ZERO);
        assert_eq!(low.max(high), high);
    }

    #[test]
    fn test_display_four_fractional_digits() {
        assert_eq!(Price::from_units(100).to_string(), "100.0000");
        assert_eq!(Price::new(-12_345).to_string(), "-1.2345");
        assert_eq!(Price::new(5).to_string(), "0.0005");
        assert_eq!(Price::ZERO.to_string(), "0.0000");
        assert_eq!(Quantity::new(87_654_321).to_string(), "8765.4321");
    }

    #[test]
    fn test_display_sentinels() {
        assert_eq!(Price::INVALID.to_string(), "INVALID");
        assert_eq!(Price::MAX_VALUE.to_string(), "MAX");
        assert_eq!(Quantity::INVALID.to_string(), "INVALID");
        assert_eq!(Quantity::MAX_VALUE.to_string(), "MAX");
    }

    #[test]
    fn test_price_and_quantity_are_distinct_types() {
        // Same representation, but values only combine within one type.
        let price = Price::from_units(1);
        let quantity = Quantity::from_units(1);
        assert_eq!(price.raw_value(), quantity.raw_value());
    }

    #[test]
    fn test_serde_is_transparent() {
        let price = Price::from_units(1);
        assert_eq!(serde_json::to_string(&price).unwrap(), "10000");
        let parsed: Price = serde_json::from_str("10000").unwrap();
        assert_eq!(parsed, price);
    }
}
