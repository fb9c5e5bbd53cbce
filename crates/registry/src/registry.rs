//! Process-wide cache of catalog managers, keyed by catalog type.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, OnceLock, PoisonError, RwLock, RwLockReadGuard};

use indexmap::IndexMap;
use serde_json::Value;

use staticentity_core::{CatalogError, CatalogResult, StaticEntity};

use crate::config::RegistryConfig;
use crate::manager::EntityManager;

type SharedManager = Arc<dyn Any + Send + Sync>;

static GLOBAL: LazyLock<ManagerRegistry> =
    LazyLock::new(|| ManagerRegistry::with_config(RegistryConfig::from_env()));

/// Initialization cell for one catalog type.
///
/// `building` serializes builds of this type only; `manager` is set once a
/// build succeeds and never changes afterwards.
#[derive(Default)]
struct Slot {
    building: Mutex<()>,
    manager: OnceLock<SharedManager>,
}

/// Lazily builds and caches one [`EntityManager`] per catalog type.
///
/// Managers are never evicted. The map lock is only held to fetch or insert a
/// type's slot; the build itself runs under that slot's own lock, so exactly
/// one manager is built per type while builds of different catalogs stay
/// independent. A data set may therefore resolve other catalogs, but not its
/// own type.
pub struct ManagerRegistry {
    config: RegistryConfig,
    slots: RwLock<HashMap<TypeId, Arc<Slot>>>,
}

impl ManagerRegistry {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// The registry behind the class-level [`Catalog`](crate::Catalog) API.
    ///
    /// Configured from the environment on first use.
    pub fn global() -> &'static ManagerRegistry {
        &GLOBAL
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Resolve the manager for catalog `E`, building it on first access.
    pub fn manager<E: StaticEntity>(&self) -> CatalogResult<Arc<EntityManager<E>>> {
        if E::ABSTRACT {
            return Err(CatalogError::direct_invocation(E::catalog_name()));
        }

        let slot = self.slot(TypeId::of::<E>());

        if let Some(shared) = slot.manager.get() {
            tracing::trace!(catalog = E::catalog_name(), "catalog manager cache hit");
            return downcast::<E>(shared.clone());
        }

        // A panicking data set leaves nothing behind in the slot.
        let _building = slot
            .building
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Another thread may have finished the build while we waited.
        if let Some(shared) = slot.manager.get() {
            return downcast::<E>(shared.clone());
        }

        let built: SharedManager = Arc::new(EntityManager::<E>::load()?);
        let shared = slot.manager.get_or_init(|| built);

        downcast::<E>(shared.clone())
    }

    /// Id → value of this registry's default attribute for catalog `E`.
    pub fn get_associative<E: StaticEntity>(&self) -> CatalogResult<IndexMap<E::Id, Value>> {
        self.manager::<E>()?
            .get_associative(self.config.default_value_key())
    }

    /// Whether the manager for `E` has already been built.
    pub fn is_loaded<E: StaticEntity>(&self) -> bool {
        self.read_slots()
            .get(&TypeId::of::<E>())
            .is_some_and(|slot| slot.manager.get().is_some())
    }

    /// Number of managers built so far.
    pub fn len(&self) -> usize {
        self.read_slots()
            .values()
            .filter(|slot| slot.manager.get().is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, key: TypeId) -> Arc<Slot> {
        if let Some(slot) = self.read_slots().get(&key) {
            return slot.clone();
        }

        // The map is only mutated by inserting empty slots, so a poisoned
        // lock still guards a consistent map.
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        slots.entry(key).or_default().clone()
    }

    fn read_slots(&self) -> RwLockReadGuard<'_, HashMap<TypeId, Arc<Slot>>> {
        self.slots.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ManagerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ManagerRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ManagerRegistry")
            .field("config", &self.config)
            .field("managers", &self.len())
            .finish()
    }
}

fn downcast<E: StaticEntity>(shared: SharedManager) -> CatalogResult<Arc<EntityManager<E>>> {
    shared.downcast::<EntityManager<E>>().map_err(|_| {
        CatalogError::data_set(E::catalog_name(), "registry entry holds another manager type")
    })
}
