#[cfg(test)]
mod tests {
    use binpack::entities::{Bin, InvalidInputError, InvalidParameterError, Item, PackError};
    use binpack::source::{FieldError, ItemSource, Packed, Record, WeightBounds, WeightExtractor};
    use itertools::Itertools;
    use test_case::test_case;

    #[test]
    fn weights_keep_positions_as_ids() {
        let normalized = ItemSource::weights([3.0, 1.0, 2.0])
            .normalize(WeightBounds::UNBOUNDED)
            .unwrap();
        let ids = normalized.items().iter().map(Item::id).collect_vec();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn filtered_items_keep_original_ids() {
        let normalized = ItemSource::weights([3.0, 1.0, 2.0, 8.0])
            .normalize(WeightBounds::new(Some(2.0), Some(3.0)))
            .unwrap();
        let ids = normalized.items().iter().map(Item::id).collect_vec();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test_case(f64::NAN; "nan")]
    #[test_case(f64::INFINITY; "infinity")]
    #[test_case(f64::NEG_INFINITY; "negative infinity")]
    fn rejects_non_finite_weights(weight: f64) {
        let err = ItemSource::weights([1.0, weight])
            .normalize(WeightBounds::UNBOUNDED)
            .unwrap_err();
        assert!(matches!(
            err,
            PackError::InvalidInput(InvalidInputError::NonFiniteWeight { index: 1, .. })
        ));
    }

    #[test]
    fn negative_zero_is_zero() {
        let item = Item::new(0, -0.0).unwrap();
        assert!(item.weight().is_sign_positive());
    }

    #[test]
    fn rejects_duplicate_keys() {
        let err = ItemSource::mapping([("a", 1.0), ("b", 2.0), ("a", 3.0)])
            .normalize(WeightBounds::UNBOUNDED)
            .unwrap_err();
        assert_eq!(
            err,
            PackError::InvalidInput(InvalidInputError::DuplicateKey { index: 2 })
        );
    }

    #[test]
    fn rejects_missing_field() {
        let records = vec![vec![1.0, 2.0], vec![3.0]];
        let err = ItemSource::records(records, WeightExtractor::position(1))
            .normalize(WeightBounds::UNBOUNDED)
            .unwrap_err();
        assert_eq!(
            err,
            PackError::InvalidInput(InvalidInputError::MissingField {
                index: 1,
                position: 1
            })
        );
    }

    #[test]
    fn rejects_non_numeric_field() {
        let records = vec![vec!["apple", "10"], vec!["banana", "many"]];
        let err = ItemSource::records(records, WeightExtractor::position(1))
            .normalize(WeightBounds::UNBOUNDED)
            .unwrap_err();
        assert_eq!(
            err,
            PackError::InvalidInput(InvalidInputError::NonNumericField {
                index: 1,
                position: 1,
                value: "many".to_owned()
            })
        );
    }

    #[test]
    fn rejects_extractor_without_weight() {
        let records = vec![Some(1.0), None];
        let err = ItemSource::records(records, WeightExtractor::key(|r: &Option<f64>| *r))
            .normalize(WeightBounds::UNBOUNDED)
            .unwrap_err();
        assert_eq!(
            err,
            PackError::InvalidInput(InvalidInputError::ExtractorRejected { index: 1 })
        );
    }

    #[test]
    fn rejects_nan_bounds() {
        let err = ItemSource::weights([1.0])
            .normalize(WeightBounds::new(Some(f64::NAN), None))
            .unwrap_err();
        assert_eq!(err, PackError::InvalidParameter(InvalidParameterError::NaNBound));
    }

    #[test]
    fn record_fields() {
        assert_eq!([1.0, 2.5].weight_at(1), Ok(2.5));
        assert_eq!(vec![1.0].weight_at(3), Err(FieldError::Missing));
        assert_eq!(vec![" 4.5 ".to_owned()].weight_at(0), Ok(4.5));
        assert_eq!(
            vec!["x"].weight_at(0),
            Err(FieldError::NonNumeric("x".to_owned()))
        );
    }

    #[test]
    fn reassembles_records_in_bin_order() {
        let records = vec![vec![1.0, 0.0], vec![2.0, 1.0], vec![3.0, 2.0]];
        let normalized = ItemSource::records(records, WeightExtractor::position(0))
            .normalize(WeightBounds::UNBOUNDED)
            .unwrap();
        let items = normalized.items().to_vec();

        let mut first = Bin::new();
        first.insert(items[2]);
        first.insert(items[0]);
        let mut second = Bin::new();
        second.insert(items[1]);

        let packed = normalized.reassemble(&[first, second]);
        assert_eq!(
            packed,
            Packed::Records(vec![
                vec![vec![3.0, 2.0], vec![1.0, 0.0]],
                vec![vec![2.0, 1.0]],
            ])
        );
    }

    #[test]
    fn source_len() {
        assert_eq!(ItemSource::weights([1.0, 2.0]).len(), 2);
        assert!(ItemSource::mapping(Vec::<(u32, f64)>::new()).is_empty());
    }

    #[test]
    fn bounds_contain() {
        let bounds = WeightBounds::new(Some(1.0), Some(2.0));
        assert!(bounds.contains(1.0));
        assert!(bounds.contains(2.0));
        assert!(!bounds.contains(0.999));
        assert!(!bounds.contains(2.001));
        assert!(WeightBounds::UNBOUNDED.contains(1e300));
        assert!(WeightBounds::UNBOUNDED.is_unbounded());
    }
}
