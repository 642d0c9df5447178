//! Property tests: the location service is consulted exactly once on a
//! by-id hit and never otherwise.

use catalog_app::ProductService;
use catalog_core::{LocationId, ProductId};
use catalog_inventory::{InventoryEntry, MockLocationService};
use catalog_products::{MockProductRepository, Price, Product, ProductCreateRequest};
use mockall::predicate::eq;
use proptest::prelude::*;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
enum Op {
    Create { name: String, cents: i64 },
    GetAll { len: usize },
    GetByIdHit { stocked_locations: usize },
    GetByIdMiss,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        ("[A-Za-z][A-Za-z0-9 ]{0,30}", 0i64..10_000_000)
            .prop_map(|(name, cents)| Op::Create { name, cents }),
        (0usize..6).prop_map(|len| Op::GetAll { len }),
        (0usize..4).prop_map(|stocked_locations| Op::GetByIdHit { stocked_locations }),
        Just(Op::GetByIdMiss),
    ]
}

fn product(name: &str, cents: i64) -> Product {
    Product {
        id: ProductId::new(),
        name: name.to_string(),
        description: "generated".to_string(),
        price: Price::new(Decimal::new(cents, 2), "$").unwrap(),
        category: None,
        inventory: None,
    }
}

/// Runs `op` against mocks whose expectations encode the call-count contract.
/// Mock expectations are verified when the service is dropped.
async fn run(op: Op) {
    let mut repo = MockProductRepository::new();
    let mut locations = MockLocationService::new();

    match op {
        Op::Create { name, cents } => {
            let request = ProductCreateRequest::new(name.clone(), "generated", Decimal::new(cents, 2), None);
            let created = product(&name, cents);
            let expected = created.clone();
            repo.expect_create()
                .with(eq(request.clone()))
                .times(1)
                .returning(move |_| Ok(expected.clone()));
            locations.expect_inventory_of_product_at_all_locations().never();

            let service = ProductService::new(repo, locations);
            assert_eq!(service.create(request).await.unwrap(), created);
        }
        Op::GetAll { len } => {
            let list: Vec<Product> = (0..len).map(|i| product(&format!("P{i}"), i as i64)).collect();
            let expected = list.clone();
            repo.expect_get_all()
                .times(1)
                .returning(move || Ok(expected.clone()));
            locations.expect_inventory_of_product_at_all_locations().never();

            let service = ProductService::new(repo, locations);
            assert_eq!(service.get_all().await.unwrap(), list);
        }
        Op::GetByIdHit { stocked_locations } => {
            let found = product("Found", 100);
            let id = found.id;
            let entries: Vec<InventoryEntry> = (0..stocked_locations)
                .map(|i| InventoryEntry::new(LocationId::new(), format!("L{i}"), i as i64))
                .collect();
            let stock = entries.clone();
            repo.expect_get_by_id()
                .with(eq(id))
                .times(1)
                .returning(move |_| Ok(Some(found.clone())));
            locations
                .expect_inventory_of_product_at_all_locations()
                .with(eq(id))
                .times(1)
                .returning(move |_| Ok(stock.clone()));

            let service = ProductService::new(repo, locations);
            let result = service.get_by_id(id).await.unwrap().expect("present");
            assert_eq!(result.inventory, Some(entries));
        }
        Op::GetByIdMiss => {
            let id = ProductId::new();
            repo.expect_get_by_id()
                .with(eq(id))
                .times(1)
                .returning(|_| Ok(None));
            locations.expect_inventory_of_product_at_all_locations().never();

            let service = ProductService::new(repo, locations);
            assert!(service.get_by_id(id).await.unwrap().is_none());
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: across every operation, location lookups happen only on a by-id hit.
    #[test]
    fn location_lookups_follow_the_call_count_contract(ops in prop::collection::vec(op_strategy(), 1..8)) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        for op in ops {
            rt.block_on(run(op));
        }
    }
}
