//! Process-wide boundary state: the two handle arenas and the engine config.

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use colframe_core::prelude::{EngineConfig, GroupHandle, Table, TableHandle};
use colframe_operators::GroupedTable;

use crate::handle::HandleArena;

pub(crate) static TABLES: Lazy<HandleArena<Table, TableHandle>> = Lazy::new(HandleArena::new);

pub(crate) static GROUPS: Lazy<HandleArena<GroupedTable, GroupHandle>> =
    Lazy::new(HandleArena::new);

static CONFIG: Lazy<RwLock<EngineConfig>> = Lazy::new(|| RwLock::new(EngineConfig::from_env()));

/// Snapshot of the current engine config.
pub fn config() -> EngineConfig {
    CONFIG.read().clone()
}

pub fn set_config(cfg: EngineConfig) {
    *CONFIG.write() = cfg;
}

