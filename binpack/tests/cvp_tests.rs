#[cfg(test)]
mod tests {
    use binpack::entities::{InvalidInputError, InvalidParameterError, Item, PackError};
    use binpack::probs::Solution;
    use binpack::probs::cvp::CVPacker;
    use binpack::source::{ItemSource, WeightBounds, WeightExtractor};
    use binpack::{pack_constant_volume, to_constant_volume};
    use indexmap::IndexMap;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand::prelude::{SliceRandom, SmallRng};
    use test_case::test_case;

    fn pack_weights(weights: &[f64], max_volume: f64) -> Vec<Vec<f64>> {
        to_constant_volume(
            ItemSource::weights(weights.iter().copied()),
            max_volume,
            WeightBounds::UNBOUNDED,
        )
        .unwrap()
        .into_weights()
        .unwrap()
    }

    /// Least-loaded-fit without the descending sort, placing items in the given order
    fn n_bins_unsorted(weights: &[f64], max_volume: f64) -> usize {
        let mut sums: Vec<f64> = vec![];
        for &w in weights {
            let target = sums
                .iter()
                .enumerate()
                .filter(|(_, s)| **s + w <= max_volume)
                .min_by(|a, b| a.1.total_cmp(b.1))
                .map(|(i, _)| i);
            match target {
                Some(b) => sums[b] += w,
                None => sums.push(w),
            }
        }
        sums.len()
    }

    #[test_case(&[10.0, 10.0, 11.0, 1.0, 2.0, 7.0], 11.0, &[&[11.0], &[10.0], &[10.0], &[7.0, 2.0, 1.0]]; "mixed")]
    #[test_case(&[1.0, 5.0, 3.0, 2.0, 4.0], 6.0, &[&[5.0], &[4.0, 1.0], &[3.0, 2.0]]; "least loaded fit")]
    #[test_case(&[42.0, 24.0], 20.0, &[&[42.0], &[24.0]]; "nothing fits")]
    #[test_case(&[1.0, 2.0, 1.0], 2.0, &[&[2.0], &[1.0, 1.0]]; "exact fit")]
    #[test_case(&[5.0], 10.0, &[&[5.0]]; "single item")]
    #[test_case(&[10.0], 10.0, &[&[10.0]]; "single item at capacity")]
    #[test_case(&[0.0, 0.0, 0.0], 10.0, &[&[0.0, 0.0, 0.0]]; "zero weights")]
    #[test_case(&[3.0, 12.0, 2.0], 10.0, &[&[12.0], &[3.0, 2.0]]; "oversized item")]
    fn packs_weights(weights: &[f64], max_volume: f64, expected: &[&[f64]]) {
        let bins = pack_weights(weights, max_volume);
        let expected = expected.iter().map(|b| b.to_vec()).collect_vec();
        assert_eq!(bins, expected);
    }

    #[test]
    fn descending_order_needs_fewest_bins() {
        let weights = [4.5, 4.0, 3.5, 1.0, 0.8, 0.5, 0.2];
        let bins = pack_weights(&weights, 5.0);
        assert_eq!(bins.len(), 3);

        let ascending = weights.iter().copied().rev().collect_vec();
        assert!(n_bins_unsorted(&ascending, 5.0) >= bins.len());

        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..100 {
            let mut shuffled = weights.to_vec();
            shuffled.shuffle(&mut rng);
            assert!(n_bins_unsorted(&shuffled, 5.0) >= bins.len());
        }
    }

    #[test]
    fn bins_respect_capacity() {
        let weights = [1.0, 2.0, 5.0, 3.0];
        let bins = pack_weights(&weights, 5.0);
        assert!(bins.iter().all(|b| b.iter().sum::<f64>() <= 5.0));
    }

    #[test]
    fn all_weights_preserved() {
        let weights = [10.0, 20.0, 30.0, 15.0, 25.0];
        let bins = pack_weights(&weights, 35.0);
        let packed = bins.iter().flatten().copied().sorted_by(f64::total_cmp).collect_vec();
        let input = weights.iter().copied().sorted_by(f64::total_cmp).collect_vec();
        assert_eq!(packed, input);
    }

    #[test]
    fn empty_input_yields_no_bins() {
        let solution = pack_constant_volume(&[], 10.0).unwrap();
        assert_eq!(solution.n_bins(), 0);
        assert_eq!(solution.fill_ratio(), 0.0);
        assert!(pack_weights(&[], 10.0).is_empty());
    }

    #[test_case(0.0; "zero")]
    #[test_case(-1.0; "negative")]
    #[test_case(f64::NAN; "nan")]
    #[test_case(f64::INFINITY; "infinite")]
    fn rejects_invalid_volume(max_volume: f64) {
        let items = Item::from_weights(&[1.0, 2.0]).unwrap();
        let err = pack_constant_volume(&items, max_volume).unwrap_err();
        assert!(matches!(
            err,
            PackError::InvalidParameter(InvalidParameterError::NonPositiveVolume(_))
        ));
    }

    #[test]
    fn rejects_negative_weights() {
        let err = to_constant_volume(
            ItemSource::weights([-1.0, -2.0, 3.0]),
            5.0,
            WeightBounds::UNBOUNDED,
        )
        .unwrap_err();
        assert_eq!(
            err,
            PackError::InvalidInput(InvalidInputError::NegativeWeight {
                index: 0,
                weight: -1.0
            })
        );
    }

    #[test]
    fn oversized_items_get_their_own_bin() {
        let items = Item::from_weights(&[3.0, 12.0, 2.0, 0.0]).unwrap();
        let solution = pack_constant_volume(&items, 10.0).unwrap();
        let oversized = solution.oversized_bins().collect_vec();
        assert_eq!(oversized.len(), 1);
        assert_eq!(oversized[0].item_ids().collect_vec(), vec![1]);
    }

    #[test]
    fn ties_keep_input_order() {
        let items = Item::from_weights(&[5.0, 5.0, 5.0, 5.0]).unwrap();
        let solution = pack_constant_volume(&items, 10.0).unwrap();
        let ids = solution
            .bins
            .iter()
            .map(|b| b.item_ids().collect_vec())
            .collect_vec();
        // 5 -> bin 0, 5 -> bin 0 (fits), 5 -> bin 1, 5 -> bin 1
        assert_eq!(ids, vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn mapping_keys_preserved() {
        let source = ItemSource::mapping([
            ("a", 10.0),
            ("b", 10.0),
            ("c", 11.0),
            ("d", 1.0),
            ("e", 2.0),
            ("f", 7.0),
        ]);
        let bins = to_constant_volume(source, 11.0, WeightBounds::UNBOUNDED)
            .unwrap()
            .into_mapping()
            .unwrap();
        let expected: Vec<IndexMap<&str, f64>> = vec![
            [("c", 11.0)].into_iter().collect(),
            [("a", 10.0)].into_iter().collect(),
            [("b", 10.0)].into_iter().collect(),
            [("f", 7.0), ("e", 2.0), ("d", 1.0)].into_iter().collect(),
        ];
        assert_eq!(bins, expected);
    }

    #[test_case(WeightBounds::new(None, Some(11.0)); "upper bound")]
    #[test_case(WeightBounds::new(Some(1.0), None); "lower bound")]
    #[test_case(WeightBounds::new(Some(1.0), Some(11.0)); "both bounds")]
    fn records_with_inclusive_bounds(bounds: WeightBounds) {
        let records = vec![
            vec!["a", "10", "foo"],
            vec!["b", "10", "log"],
            vec!["c", "11"],
            vec!["d", "1", "bar"],
            vec!["e", "2", "bommel"],
            vec!["f", "7", "floggo"],
        ];
        let source = ItemSource::records(records, WeightExtractor::position(1));
        let bins = to_constant_volume(source, 11.0, bounds)
            .unwrap()
            .into_records()
            .unwrap();
        let names = bins
            .iter()
            .map(|b| b.iter().map(|r| r[0]).collect_vec())
            .collect_vec();
        assert_eq!(
            names,
            vec![vec!["c"], vec!["a"], vec!["b"], vec!["f", "e", "d"]]
        );
    }

    #[test]
    fn records_with_key_extractor() {
        #[derive(Debug, Clone, PartialEq)]
        struct Job {
            name: &'static str,
            load: f64,
        }
        let jobs = vec![
            Job { name: "a", load: 1.0 },
            Job { name: "b", load: 5.0 },
            Job { name: "c", load: 3.0 },
        ];
        let source = ItemSource::records(jobs.clone(), WeightExtractor::key(|j: &Job| Some(j.load)));
        let bins = to_constant_volume(source, 6.0, WeightBounds::UNBOUNDED)
            .unwrap()
            .into_records()
            .unwrap();
        // 5 -> bin 0, 3 -> bin 1, 1 -> bin 1 (emptiest that fits)
        assert_eq!(
            bins,
            vec![vec![jobs[1].clone()], vec![jobs[2].clone(), jobs[0].clone()]]
        );
    }

    #[test]
    fn bounds_filter_everything() {
        let bins = to_constant_volume(
            ItemSource::weights([1.0, 2.0, 3.0]),
            10.0,
            WeightBounds::new(Some(5.0), None),
        )
        .unwrap();
        assert!(bins.is_empty());
    }

    #[test]
    fn bounds_are_inclusive() {
        let bins = to_constant_volume(
            ItemSource::weights([1.0, 5.0, 10.0, 15.0, 20.0]),
            100.0,
            WeightBounds::new(Some(5.0), Some(15.0)),
        )
        .unwrap()
        .into_weights()
        .unwrap();
        assert_eq!(bins, vec![vec![15.0, 10.0, 5.0]]);
    }

    #[test_case(5.0, 5.0; "equal")]
    #[test_case(6.0, 5.0; "inverted")]
    fn rejects_inverted_bounds(lower: f64, upper: f64) {
        let err = to_constant_volume(
            ItemSource::weights([1.0, 2.0, 3.0, 6.0, 7.0]),
            10.0,
            WeightBounds::new(Some(lower), Some(upper)),
        )
        .unwrap_err();
        assert_eq!(
            err,
            PackError::InvalidParameter(InvalidParameterError::InvertedBounds { lower, upper })
        );
    }

    #[test]
    fn fill_ratio_of_full_bins() {
        let items = Item::from_weights(&[5.0, 5.0, 5.0, 5.0]).unwrap();
        let solution = CVPacker::new(10.0).unwrap().pack(&items);
        assert_eq!(solution.fill_ratio(), 1.0);
        assert_eq!(solution.total_weight(), 20.0);
    }
}
