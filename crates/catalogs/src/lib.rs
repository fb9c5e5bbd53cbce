//! Reference catalogs built on `staticentity-core`.
//!
//! Each module is one catalog type; lookups go through
//! [`staticentity_registry::Catalog`].

pub mod color;
pub mod currency;
pub mod order_status;

pub use color::Color;
pub use currency::Currency;
pub use order_status::{OrderStatus, OrderStatusCode};

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;
    use staticentity_core::{IdOrEntity, StaticEntity};
    use staticentity_registry::{Catalog, ManagerRegistry};

    /// Ids, entities and the default associative mapping enumerate the catalog identically.
    fn assert_enumeration_consistent<E: StaticEntity>() {
        let all = E::get_all().unwrap();
        let ids = E::get_ids().unwrap();
        let names = ManagerRegistry::new().get_associative::<E>().unwrap();

        assert_eq!(all.len(), ids.len());
        assert_eq!(names.len(), ids.len());
        for ((entity, id), name_key) in all.iter().zip(&ids).zip(names.keys()) {
            assert_eq!(entity.id(), id);
            assert_eq!(name_key, id);
            assert_eq!(&E::get(id).unwrap(), entity);
        }
    }

    #[test]
    fn reference_catalogs_enumerate_consistently() {
        assert_enumeration_consistent::<Color>();
        assert_enumeration_consistent::<Currency>();
        assert_enumeration_consistent::<OrderStatus>();
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: `to_id_of` accepts exactly the ids `has_id` accepts, unchanged.
        #[test]
        fn to_id_agrees_with_has_id(id in any::<u32>()) {
            let known = Color::has_id(&id).unwrap();
            prop_assert_eq!(Color::to_id(IdOrEntity::id(id)).ok(), Color::to_id_of(id).ok());
            match Color::to_id_of(id) {
                Ok(converted) => {
                    prop_assert!(known);
                    prop_assert_eq!(converted, id);
                }
                Err(err) => {
                    prop_assert!(!known);
                    prop_assert!(err.is_not_found());
                }
            }
        }

        /// Property: currency lookups never invent entries.
        #[test]
        fn currency_lookup_round_trips_known_codes(code in "[A-Z]{3}") {
            match Currency::get(&code) {
                Ok(currency) => {
                    prop_assert_eq!(currency.code(), code.as_str());
                    prop_assert!(Currency::get_ids().unwrap().contains(&code));
                }
                Err(err) => {
                    prop_assert!(err.is_not_found());
                    prop_assert!(!Currency::has_id(&code).unwrap());
                }
            }
        }

        /// Property: `is` holds only for the entity's own id.
        #[test]
        fn is_only_matches_own_id(id in 1u32..=3, other in any::<u32>()) {
            let color = Color::get(&id).unwrap();
            prop_assert!(color.is(&id));
            prop_assert_eq!(color.is(&other), other == id);
        }
    }
}
