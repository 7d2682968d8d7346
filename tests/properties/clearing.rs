//! Property tests for region clearing.

use proptest::prelude::*;

use gridclear::application::{ClearOptions, ClearRegionsUseCase};
use gridclear::domain::value_objects::{ClearOutcome, KeyConstraint, RegionKey};
use gridclear::infrastructure::{CollectingResultSender, InMemoryCache, InMemoryRegion};

fn region_with(constraint: Option<KeyConstraint>, count: usize) -> InMemoryRegion {
    let region = InMemoryRegion::new("data", constraint);
    for i in 0..count {
        region
            .put(RegionKey::from(format!("k-{i}")), serde_json::json!(i))
            .unwrap();
    }
    region
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: String-keyed regions are emptied in ceil(n / batch) bulk calls.
    #[test]
    fn property_string_regions_clear_in_ceil_batches(
        count in 0usize..3000,
        batch_size in 1usize..1500,
    ) {
        let region = region_with(Some(KeyConstraint::String), count);
        let mut cache = InMemoryCache::new();
        cache.add_region(region.clone());

        let sender = CollectingResultSender::new();
        let options = ClearOptions::new().with_batch_size(batch_size);
        let summary = ClearRegionsUseCase::new(&cache, &sender).execute(["data"], &options);

        prop_assert!(summary.is_success());
        prop_assert_eq!(
            sender.outcomes(),
            vec![ClearOutcome::Removed { region: "data".to_string(), count }]
        );
        prop_assert_eq!(region.bulk_remove_calls(), count.div_ceil(batch_size));
        prop_assert_eq!(region.single_remove_calls(), 0);
        prop_assert!(region.is_empty());
    }

    /// PROPERTY: Other regions are emptied one key at a time.
    #[test]
    fn property_other_regions_clear_one_by_one(
        count in 0usize..200,
        constrained in any::<bool>(),
    ) {
        let constraint = constrained.then(|| KeyConstraint::Other("long".to_string()));
        let region = region_with(constraint, count);
        let mut cache = InMemoryCache::new();
        cache.add_region(region.clone());

        let sender = CollectingResultSender::new();
        ClearRegionsUseCase::new(&cache, &sender).execute(["data"], &ClearOptions::default());

        prop_assert_eq!(sender.messages(), vec![format!("Removed from region data: {count}")]);
        prop_assert_eq!(region.single_remove_calls(), count);
        prop_assert_eq!(region.bulk_remove_calls(), 0);
        prop_assert!(region.is_empty());
    }
}
