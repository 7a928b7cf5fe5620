use super::*;

impl InventoryService {
    /// Registers a new instrument in good condition with no holder.
    pub async fn create_instrument(
        &self,
        actor: &ActorIdentity,
        name: impl Into<String>,
        instrument_type: impl Into<String>,
        unique_code: impl Into<String>,
    ) -> AppResult<Instrument> {
        self.authorization_service
            .require_permission(actor, Permission::ManageInstruments)?;

        let instrument = Instrument::new(name, instrument_type, unique_code)?;
        self.repository.save_instrument(instrument.clone()).await?;

        Ok(instrument)
    }

    /// Lists instruments matching the filter.
    pub async fn list_instruments(
        &self,
        actor: &ActorIdentity,
        filter: InstrumentListFilter,
    ) -> AppResult<Vec<Instrument>> {
        self.authorization_service
            .require_permission(actor, Permission::ViewAssignments)?;

        self.repository.list_instruments(filter).await
    }

    /// Returns one instrument.
    pub async fn find_instrument(
        &self,
        actor: &ActorIdentity,
        instrument_id: InstrumentId,
    ) -> AppResult<Instrument> {
        self.authorization_service
            .require_permission(actor, Permission::ViewAssignments)?;

        self.repository
            .find_instrument(instrument_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("instrument '{instrument_id}' does not exist"))
            })
    }

    /// Moves an instrument to a new condition and records the change.
    pub async fn set_instrument_condition(
        &self,
        actor: &ActorIdentity,
        instrument_id: InstrumentId,
        condition: InstrumentCondition,
        note: &str,
    ) -> AppResult<Instrument> {
        self.authorization_service
            .require_permission(actor, Permission::ManageInstruments)?;

        self.repository
            .set_instrument_condition(instrument_id, condition, note)
            .await
    }

    /// Hands an instrument to an assignee.
    pub async fn assign_instrument(
        &self,
        actor: &ActorIdentity,
        instrument_id: InstrumentId,
        assignee: &str,
    ) -> AppResult<Instrument> {
        self.authorization_service
            .require_permission(actor, Permission::ManageInstruments)?;

        self.repository
            .assign_instrument(instrument_id, assignee)
            .await
    }

    /// Takes an instrument back from its holder.
    pub async fn unassign_instrument(
        &self,
        actor: &ActorIdentity,
        instrument_id: InstrumentId,
    ) -> AppResult<Instrument> {
        self.authorization_service
            .require_permission(actor, Permission::ManageInstruments)?;

        self.repository.unassign_instrument(instrument_id).await
    }
}
