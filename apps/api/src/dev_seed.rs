use kapelle_core::AppResult;
use kapelle_domain::{ActorIdentity, Role};

use crate::state::AppState;

const DEV_SEED_SUBJECT: &str = "inventory@club.com";

/// Loads the demo inventory used by the front-end during development.
pub async fn run(state: &AppState) -> AppResult<()> {
    let actor = ActorIdentity::new(DEV_SEED_SUBJECT, Role::InventoryManager);
    let service = &state.inventory_service;

    let jacket_m = service
        .create_clothing_pool(&actor, "Uniform - Jacket", "M", 15)
        .await?;
    service
        .assign_clothing(&actor, jacket_m.pool_id(), "Jane Trainee", 1)
        .await?;
    service
        .assign_clothing(&actor, jacket_m.pool_id(), "John Doe", 1)
        .await?;

    let jacket_l = service
        .create_clothing_pool(&actor, "Uniform - Jacket", "L", 12)
        .await?;
    service
        .assign_clothing(&actor, jacket_l.pool_id(), "Alice Smith", 1)
        .await?;

    let pants_m = service
        .create_clothing_pool(&actor, "Uniform - Pants", "M", 20)
        .await?;
    service
        .assign_clothing(&actor, pants_m.pool_id(), "Jane Trainee", 1)
        .await?;
    service
        .assign_clothing(&actor, pants_m.pool_id(), "Bob Miller", 1)
        .await?;

    let caps = service
        .create_clothing_pool(&actor, "Accessories - Cap", "OneSize", 35)
        .await?;
    service
        .assign_clothing(&actor, caps.pool_id(), "Jane Trainee", 1)
        .await?;

    service
        .create_instrument(&actor, "Piano - Grand", "Piano", "PNO-001")
        .await?;
    service
        .create_instrument(&actor, "Acoustic Guitar", "Guitar", "GTR-001")
        .await?;

    Ok(())
}
