//! Property-based tests for the reservation engine.
//!
//! These tests drive random request sequences through planning and
//! execution and check the stock invariants afterwards.

use proptest::prelude::*;

use crate::config::Config;
use crate::database::test_util::create_test_database;
use crate::database::Database;
use crate::inventory::{ChemicalState, NewChemical, NewEquipment};

use super::{reserve_chemical, reserve_equipment, ReserveChemicalRequest, ReserveEquipmentRequest};

fn qty_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![8 => 0i64..80, 1 => -20i64..0]
}

fn group_code_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![8 => 20_180_000i64..20_250_000, 1 => 20_100_000i64..20_180_000]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    // Stock only ever falls by the sum of accepted reservations, never below zero
    #[test]
    fn chemical_stock_matches_accepted_logs(
        initial in 0i64..300,
        requests in prop::collection::vec((qty_strategy(), group_code_strategy()), 1..12)
    ) {
        let mut db = create_test_database();
        let chemical = Database::insert_chemical(
            db.connection(),
            &NewChemical::new("Sodium chloride", ChemicalState::Solid, initial),
        ).unwrap();

        let config = Config::default();
        let mut accepted = 0;
        for (qty, group_code) in requests {
            let request = ReserveChemicalRequest::new(chemical.id)
                .with_group_code(group_code)
                .with_qty(qty)
                .with_date_procured("20180601");
            match reserve_chemical(&mut db, &request, &config, false) {
                Ok(_) => accepted += qty,
                Err(err) => prop_assert!(err.is_rejection()),
            }
        }

        let stored = Database::require_chemical(db.connection(), chemical.id).unwrap();
        prop_assert!(stored.qty >= 0);
        prop_assert_eq!(stored.qty, initial - accepted);

        let logged: i64 = Database::list_logs_for_chemical(db.connection(), chemical.id)
            .unwrap()
            .iter()
            .map(|log| log.qty)
            .sum();
        prop_assert_eq!(logged, accepted);
    }

    // Consumable counts never move; non-consumable counts behave like chemicals
    #[test]
    fn equipment_stock_respects_consumability(
        initial in 0i64..50,
        is_consumable in any::<bool>(),
        quantities in prop::collection::vec(qty_strategy(), 1..8)
    ) {
        let mut db = create_test_database();
        let equipment = Database::insert_equipment(
            db.connection(),
            &NewEquipment::new("Beaker", is_consumable, initial),
        ).unwrap();

        let config = Config::default();
        let mut accepted = 0;
        for qty in quantities {
            let request = ReserveEquipmentRequest::new(equipment.id)
                .with_group_code(20_180_105)
                .with_qty(qty)
                .with_date_procured("20180601")
                .with_date_return("20180610");
            if reserve_equipment(&mut db, &request, &config, false).is_ok() {
                accepted += qty;
            }
        }

        let stored = Database::require_equipment(db.connection(), equipment.id).unwrap();
        if is_consumable {
            prop_assert_eq!(stored.qty, initial);
        } else {
            prop_assert!(stored.qty >= 0);
            prop_assert_eq!(stored.qty, initial - accepted);
        }
    }

    // Dry runs leave no trace, accepted or not
    #[test]
    fn dry_run_never_writes(qty in qty_strategy()) {
        let mut db = create_test_database();
        let chemical = Database::insert_chemical(
            db.connection(),
            &NewChemical::new("Ethanol", ChemicalState::Liquid, 40),
        ).unwrap();

        let request = ReserveChemicalRequest::new(chemical.id)
            .with_group_code(20_180_105)
            .with_qty(qty)
            .with_date_procured("20180601");
        let _ = reserve_chemical(&mut db, &request, &Config::default(), true);

        let stored = Database::require_chemical(db.connection(), chemical.id).unwrap();
        prop_assert_eq!(stored.qty, 40);
        prop_assert!(Database::list_chemical_logs(db.connection()).unwrap().is_empty());
    }
}
