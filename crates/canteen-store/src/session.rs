//! # Bill Session
//!
//! Owns the current snapshot and saves it after every change, so each
//! mutation is persisted before the next read of totals.
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  order(person, item, +1)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  resolve ids (id or name) ── unknown? ──► CoreError::*NotFound          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  build next snapshot with the pure operation (clamps, never fails)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.save(&next) ── Err? ──► current snapshot untouched, Err returned │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  current = next; engine() reads the new totals                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `&mut self` on every mutation means two mutations can never interleave on
//! the same snapshot.

use canteen_core::{AllocationEngine, MenuItem, Money, Person, Snapshot};
use tracing::{debug, info};

use crate::error::StoreResult;
use crate::store::SnapshotStore;

/// A billing session bound to a store.
#[derive(Debug)]
pub struct BillSession<S> {
    store: S,
    snapshot: Snapshot,
}

impl<S: SnapshotStore> BillSession<S> {
    /// Opens a session from whatever the store holds, or from `fallback`
    /// when it holds nothing usable.
    pub async fn open(store: S, fallback: impl FnOnce() -> Snapshot) -> StoreResult<Self> {
        let snapshot = match store.load().await? {
            Some(snapshot) => snapshot,
            None => {
                info!("Starting a new billing session");
                fallback()
            }
        };
        Ok(BillSession { store, snapshot })
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Allocation view over the current snapshot.
    pub fn engine(&self) -> AllocationEngine<'_> {
        AllocationEngine::new(&self.snapshot)
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Saves `next` and only then makes it the current snapshot, so a
    /// failed save leaves the session exactly as it was.
    async fn commit(&mut self, next: Snapshot) -> StoreResult<()> {
        self.store.save(&next).await?;
        self.snapshot = next;
        Ok(())
    }

    /// Replaces the whole snapshot (e.g. seeding) and saves it.
    pub async fn replace(&mut self, snapshot: Snapshot) -> StoreResult<()> {
        let next = snapshot.normalized();
        self.commit(next).await?;
        info!(
            menu_items = self.snapshot.menu_items.len(),
            people = self.snapshot.people.len(),
            "Snapshot replaced"
        );
        Ok(())
    }

    /// Adds a menu item and saves.
    pub async fn add_menu_item(&mut self, name: &str, unit_price: Money) -> StoreResult<MenuItem> {
        let mut next = self.snapshot.clone();
        let item = next.add_menu_item(name, unit_price)?;
        self.commit(next).await?;
        debug!(item_id = %item.id, name = %item.name, price = %item.unit_price, "Menu item added");
        Ok(item)
    }

    /// Adds a person and saves.
    pub async fn add_person(&mut self, name: &str) -> StoreResult<Person> {
        let mut next = self.snapshot.clone();
        let person = next.add_person(name)?;
        self.commit(next).await?;
        debug!(person_id = %person.id, name = %person.name, "Person added");
        Ok(person)
    }

    /// Adjusts one person's quantity of one item and saves.
    ///
    /// `person` and `item` may be ids or names. Returns the new quantity.
    pub async fn adjust_individual(
        &mut self,
        person: &str,
        item: &str,
        delta: i64,
    ) -> StoreResult<u32> {
        let person_id = self.snapshot.require_person(person)?.id.clone();
        let item_id = self.snapshot.require_item(item)?.id.clone();

        let individual_selections = self
            .snapshot
            .individual_selections
            .adjusted(&person_id, &item_id, delta);
        let quantity = individual_selections.quantity(&person_id, &item_id);
        let next = Snapshot {
            individual_selections,
            ..self.snapshot.clone()
        };

        self.commit(next).await?;
        debug!(%person_id, %item_id, delta, quantity, "Individual quantity adjusted");
        Ok(quantity)
    }

    /// Adjusts the shared quantity of one item and saves.
    pub async fn adjust_shared(&mut self, item: &str, delta: i64) -> StoreResult<u32> {
        let item_id = self.snapshot.require_item(item)?.id.clone();

        let shared_selections = self.snapshot.shared_selections.adjusted(&item_id, delta);
        let quantity = shared_selections.quantity(&item_id);
        let next = Snapshot {
            shared_selections,
            ..self.snapshot.clone()
        };

        self.commit(next).await?;
        debug!(%item_id, delta, quantity, "Shared quantity adjusted");
        Ok(quantity)
    }

    /// Clears all selections, keeping menu and roster, and saves.
    pub async fn reset(&mut self) -> StoreResult<()> {
        let mut next = self.snapshot.clone();
        next.reset_selections();
        self.commit(next).await?;
        info!("Selections reset");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::MemoryStore;
    use canteen_core::CoreError;

    async fn lunch_session() -> BillSession<MemoryStore> {
        BillSession::open(MemoryStore::new(), Snapshot::canteen_defaults)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_open_uses_fallback_when_empty() {
        let session = lunch_session().await;
        assert_eq!(session.snapshot().people.len(), 5);
        // Nothing is written until the first mutation.
        assert!(session.store().load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_open_prefers_saved_snapshot() {
        let store = MemoryStore::with_snapshot(Snapshot::default());
        let session = BillSession::open(store, Snapshot::canteen_defaults)
            .await
            .unwrap();
        assert!(session.snapshot().people.is_empty());
    }

    #[tokio::test]
    async fn test_every_mutation_is_saved() {
        let mut session = lunch_session().await;

        assert_eq!(session.adjust_individual("Akhil", "Puri", 1).await.unwrap(), 1);
        assert_eq!(session.adjust_individual("akhil", "1", 1).await.unwrap(), 2);
        assert_eq!(session.adjust_shared("Tea", 1).await.unwrap(), 1);

        let saved = session.store().load().await.unwrap().unwrap();
        assert_eq!(&saved, session.snapshot());
        assert_eq!(session.engine().grand_total(), Money::from_major(25));
        assert_eq!(session.engine().person_final_total("1"), Some(25.0));
    }

    #[tokio::test]
    async fn test_over_decrement_clamps() {
        let mut session = lunch_session().await;

        assert_eq!(session.adjust_individual("Vishnu", "Egg", -3).await.unwrap(), 0);
        assert_eq!(session.adjust_shared("Coffee", -1).await.unwrap(), 0);
        assert!(session.snapshot().shared_selections.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_names_are_rejected() {
        let mut session = lunch_session().await;

        let err = session.adjust_individual("Nobody", "Puri", 1).await.unwrap_err();
        assert!(matches!(err, StoreError::Core(CoreError::PersonNotFound(_))));

        let err = session.adjust_shared("Biriyani", 1).await.unwrap_err();
        assert!(matches!(err, StoreError::Core(CoreError::ItemNotFound(_))));
    }

    #[tokio::test]
    async fn test_setup_then_reset() {
        let mut session = BillSession::open(MemoryStore::new(), Snapshot::default)
            .await
            .unwrap();

        let vada = session
            .add_menu_item("Vada", Money::from_major(6))
            .await
            .unwrap();
        let dinto = session.add_person("Dinto").await.unwrap();
        session.adjust_individual(&dinto.id, &vada.id, 3).await.unwrap();
        session.adjust_shared(&vada.id, 1).await.unwrap();
        assert_eq!(session.engine().grand_total(), Money::from_major(24));

        session.reset().await.unwrap();
        let engine = session.engine();
        assert_eq!(engine.individual_total(&dinto.id), Money::zero());
        assert_eq!(engine.shared_total(), Money::zero());
        assert_eq!(session.snapshot().menu_items, vec![vada]);
        assert_eq!(session.snapshot().people, vec![dinto]);

        let saved = session.store().load().await.unwrap().unwrap();
        assert!(saved.shared_selections.is_empty());
    }

    /// Accepts loads, refuses every save.
    struct ReadOnlyStore;

    impl SnapshotStore for ReadOnlyStore {
        async fn load(&self) -> StoreResult<Option<Snapshot>> {
            Ok(None)
        }

        async fn save(&self, _snapshot: &Snapshot) -> StoreResult<()> {
            Err(StoreError::io(
                "/read-only/canteen.json",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ))
        }
    }

    #[tokio::test]
    async fn test_failed_save_leaves_session_unchanged() {
        let mut session = BillSession::open(ReadOnlyStore, Snapshot::canteen_defaults)
            .await
            .unwrap();
        let before = session.snapshot().clone();

        let err = session.adjust_individual("Akhil", "Puri", 2).await.unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert_eq!(session.engine().individual_quantity("1", "1"), 0);
        assert_eq!(session.engine().grand_total(), Money::zero());

        assert!(session.adjust_shared("Tea", 1).await.is_err());
        assert!(session.add_menu_item("Vada", Money::from_major(6)).await.is_err());
        assert!(session.add_person("Dinto Jr").await.is_err());
        assert!(session.replace(Snapshot::default()).await.is_err());
        assert_eq!(session.snapshot(), &before);
    }

    #[tokio::test]
    async fn test_failed_reset_keeps_selections() {
        let mut seeded = Snapshot::canteen_defaults();
        seeded.individual_selections.adjust("1", "1", 2);
        let mut session = BillSession::open(ReadOnlyStore, move || seeded)
            .await
            .unwrap();

        assert!(session.reset().await.is_err());
        assert_eq!(session.engine().individual_quantity("1", "1"), 2);
    }

    #[tokio::test]
    async fn test_replace_normalizes() {
        let mut session = BillSession::open(MemoryStore::new(), Snapshot::default)
            .await
            .unwrap();
        let mut seeded = Snapshot::canteen_defaults();
        seeded.individual_selections = Default::default();

        session.replace(seeded).await.unwrap();
        assert!(session
            .snapshot()
            .individual_selections
            .for_person("5")
            .is_some());
    }
}
