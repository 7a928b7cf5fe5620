use std::sync::Arc;

use kapelle_application::{InstrumentListFilter, InventoryRepository};
use kapelle_core::AppError;
use kapelle_domain::{ClothingPool, ClothingPoolId, Instrument, InstrumentCondition};

use super::InMemoryInventoryRepository;

fn jacket_pool(total: u32) -> ClothingPool {
    ClothingPool::new("Uniform - Jacket", "M", total).unwrap_or_else(|_| unreachable!())
}

#[tokio::test]
async fn save_and_list_pools_sorted_by_category_and_size() {
    let repository = InMemoryInventoryRepository::new();

    let pants = ClothingPool::new("Uniform - Pants", "M", 20).unwrap_or_else(|_| unreachable!());
    let jacket_l = ClothingPool::new("Uniform - Jacket", "L", 12).unwrap_or_else(|_| unreachable!());
    let jacket_m = jacket_pool(15);

    assert!(repository.save_clothing_pool(pants).await.is_ok());
    assert!(repository.save_clothing_pool(jacket_l).await.is_ok());
    assert!(repository.save_clothing_pool(jacket_m).await.is_ok());

    let listed = repository.list_clothing_pools().await.unwrap_or_default();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0].category().as_str(), "Uniform - Jacket");
    assert_eq!(listed[0].size().as_str(), "L");
    assert_eq!(listed[1].size().as_str(), "M");
    assert_eq!(listed[2].category().as_str(), "Uniform - Pants");
}

#[tokio::test]
async fn saving_the_same_pool_twice_conflicts() {
    let repository = InMemoryInventoryRepository::new();
    let pool = jacket_pool(15);

    assert!(repository.save_clothing_pool(pool.clone()).await.is_ok());
    let second = repository.save_clothing_pool(pool).await;
    assert!(matches!(second, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn missing_pool_is_not_found() {
    let repository = InMemoryInventoryRepository::new();

    let found = repository.find_clothing_pool(ClothingPoolId::new()).await;
    assert!(found.is_ok());
    assert!(found.unwrap_or_default().is_none());

    let adjusted = repository
        .adjust_clothing_quantity(ClothingPoolId::new(), 1)
        .await;
    assert!(matches!(adjusted, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn overdraw_is_rejected_and_leaves_the_pool_unchanged() {
    let repository = InMemoryInventoryRepository::new();
    let pool = jacket_pool(15);
    let pool_id = pool.pool_id();
    assert!(repository.save_clothing_pool(pool).await.is_ok());

    let assigned = repository.assign_clothing(pool_id, "Jane", 4).await;
    assert!(assigned.is_ok());

    let overdraw = repository.assign_clothing(pool_id, "Bob", 12).await;
    assert!(matches!(
        overdraw,
        Err(AppError::InsufficientCapacity(_))
    ));

    let snapshot = repository
        .find_clothing_pool(pool_id)
        .await
        .unwrap_or_default();
    assert!(snapshot.is_some());
    let snapshot = snapshot.unwrap_or_else(|| unreachable!());
    assert_eq!(snapshot.in_use(), 4);
    assert_eq!(snapshot.assignments().len(), 1);
}

#[tokio::test]
async fn assign_then_unassign_round_trips_through_the_store() {
    let repository = InMemoryInventoryRepository::new();
    let pool = jacket_pool(15);
    let pool_id = pool.pool_id();
    assert!(repository.save_clothing_pool(pool.clone()).await.is_ok());

    assert!(repository.assign_clothing(pool_id, "Jane", 3).await.is_ok());
    let restored = repository.unassign_clothing(pool_id, "Jane").await;
    assert!(restored.is_ok());
    assert_eq!(restored.unwrap_or_else(|_| unreachable!()), pool);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_assigns_never_exceed_capacity() {
    let repository = Arc::new(InMemoryInventoryRepository::new());
    let pool = jacket_pool(10);
    let pool_id = pool.pool_id();
    assert!(repository.save_clothing_pool(pool).await.is_ok());

    let mut handles = Vec::new();
    for index in 0..20u32 {
        let repository = Arc::clone(&repository);
        handles.push(tokio::spawn(async move {
            repository
                .assign_clothing(pool_id, &format!("member-{index}"), 1)
                .await
                .is_ok()
        }));
    }

    let mut successes = 0u32;
    for handle in handles {
        if handle.await.unwrap_or(false) {
            successes += 1;
        }
    }

    let snapshot = repository
        .find_clothing_pool(pool_id)
        .await
        .unwrap_or_default()
        .unwrap_or_else(|| unreachable!());
    assert_eq!(successes, 10);
    assert_eq!(snapshot.in_use(), 10);
    assert_eq!(snapshot.available(), 0);
}

#[tokio::test]
async fn duplicate_instrument_code_is_rejected() {
    let repository = InMemoryInventoryRepository::new();

    let piano = Instrument::new("Piano - Grand", "Piano", "PNO-001")
        .unwrap_or_else(|_| unreachable!());
    let second_piano = Instrument::new("Piano - Upright", "Piano", "PNO-001")
        .unwrap_or_else(|_| unreachable!());

    assert!(repository.save_instrument(piano).await.is_ok());
    let duplicate = repository.save_instrument(second_piano).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn instrument_listing_filters_by_condition_and_type() {
    let repository = InMemoryInventoryRepository::new();

    let piano = Instrument::new("Piano - Grand", "Piano", "PNO-001")
        .unwrap_or_else(|_| unreachable!());
    let piano_id = piano.instrument_id();
    let guitar = Instrument::new("Acoustic Guitar", "Guitar", "GTR-001")
        .unwrap_or_else(|_| unreachable!());

    assert!(repository.save_instrument(piano).await.is_ok());
    assert!(repository.save_instrument(guitar).await.is_ok());

    let flagged = repository
        .set_instrument_condition(piano_id, InstrumentCondition::NeedsRepair, "string broke")
        .await;
    assert!(flagged.is_ok());

    let needing_repair = repository
        .list_instruments(InstrumentListFilter {
            condition: Some(InstrumentCondition::NeedsRepair),
            instrument_type: None,
        })
        .await
        .unwrap_or_default();
    assert_eq!(needing_repair.len(), 1);
    assert_eq!(needing_repair[0].unique_code().as_str(), "PNO-001");
    assert_eq!(needing_repair[0].maintenance_log().len(), 1);

    let pianos = repository
        .list_instruments(InstrumentListFilter {
            condition: None,
            instrument_type: Some("Piano".to_owned()),
        })
        .await
        .unwrap_or_default();
    assert_eq!(pianos.len(), 1);

    let all = repository
        .list_instruments(InstrumentListFilter::default())
        .await
        .unwrap_or_default();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].unique_code().as_str(), "GTR-001");
}

#[tokio::test]
async fn instrument_assignment_is_single_holder_through_the_store() {
    let repository = InMemoryInventoryRepository::new();

    let piano = Instrument::new("Piano - Grand", "Piano", "PNO-001")
        .unwrap_or_else(|_| unreachable!());
    let piano_id = piano.instrument_id();
    assert!(repository.save_instrument(piano).await.is_ok());

    assert!(repository.assign_instrument(piano_id, "John").await.is_ok());

    let conflict = repository.assign_instrument(piano_id, "Alice").await;
    assert!(matches!(conflict, Err(AppError::AlreadyAssigned(_))));

    let idempotent = repository.assign_instrument(piano_id, "John").await;
    assert!(idempotent.is_ok());

    assert!(repository.unassign_instrument(piano_id).await.is_ok());
    let empty = repository.unassign_instrument(piano_id).await;
    assert!(matches!(empty, Err(AppError::NotFound(_))));
}
