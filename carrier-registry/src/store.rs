use crate::carrier::CarrierConfig;
use crate::dispatch;
use carrier_core::CarrierError;
use uuid::Uuid;
use std::collections::HashMap;

/// Holds committed carrier records.
///
/// Every write goes through the validators first; a record that fails them
/// is never stored, so the records handed to the orchestrators are complete.
pub struct CarrierStore {
    carriers: HashMap<Uuid, CarrierConfig>,
    order: Vec<Uuid>,
}

impl CarrierStore {
    pub fn new() -> Self {
        Self {
            carriers: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Commit a new record. All of its fields count as changed.
    pub fn create(&mut self, carrier: CarrierConfig) -> Result<Uuid, StoreError> {
        let id = carrier.id();
        if self.carriers.contains_key(&id) {
            return Err(StoreError::Duplicate(id));
        }

        Self::commit(None, &carrier)?;

        tracing::info!("Registered {:?} carrier {} ({})", carrier.delivery_type(), carrier.name(), id);
        self.carriers.insert(id, carrier);
        self.order.push(id);
        Ok(id)
    }

    /// Apply `mutate` to a copy of the record and commit it. The checks run
    /// are those triggered by the fields that differ from the stored record;
    /// switching delivery type re-runs every check. On failure the stored
    /// record is left untouched.
    pub fn update<M>(&mut self, id: &Uuid, mutate: M) -> Result<(), StoreError>
    where
        M: FnOnce(&mut CarrierConfig),
    {
        let current = self.carriers.get(id).ok_or(StoreError::NotFound(*id))?;
        let mut draft = current.clone();
        mutate(&mut draft);

        if draft.id() != *id {
            return Err(StoreError::IdChanged(*id));
        }

        Self::commit(Some(current), &draft)?;

        self.carriers.insert(*id, draft);
        Ok(())
    }

    pub fn get(&self, id: &Uuid) -> Option<&CarrierConfig> {
        self.carriers.get(id)
    }

    /// Records in creation order
    pub fn list(&self) -> Vec<&CarrierConfig> {
        self.order.iter().filter_map(|id| self.carriers.get(id)).collect()
    }

    pub fn remove(&mut self, id: &Uuid) -> Result<CarrierConfig, StoreError> {
        let carrier = self.carriers.remove(id).ok_or(StoreError::NotFound(*id))?;
        self.order.retain(|other| other != id);
        Ok(carrier)
    }

    pub fn len(&self) -> usize {
        self.carriers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carriers.is_empty()
    }

    fn commit(before: Option<&CarrierConfig>, carrier: &CarrierConfig) -> Result<(), StoreError> {
        dispatch::validate_change(before, carrier)
            .inspect_err(|err| tracing::warn!("Rejected carrier {}: {}", carrier.name(), err))?;
        Ok(())
    }
}

impl Default for CarrierStore {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Carrier not found: {0}")]
    NotFound(Uuid),

    #[error("Carrier already registered: {0}")]
    Duplicate(Uuid),

    #[error("Carrier id cannot change: {0}")]
    IdChanged(Uuid),

    #[error(transparent)]
    Invalid(#[from] CarrierError),
}
