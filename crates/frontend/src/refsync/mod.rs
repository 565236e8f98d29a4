//! Синхронизация справочников и зависимых выпадающих списков.
//!
//! Справочники и транзакционные списки загружаются асинхронно и независимо;
//! каждый связанный `<select>` перестраивает свои опции из текущего состояния
//! [`context::SyncContext`] и сверяет прежний выбор по равенству значений.
//! Выбор, отсутствующий в новом наборе, молча откатывается к "Не выбрано".

pub mod api;
pub mod context;
pub mod selection;

pub use context::SyncContext;
pub use selection::{
    bind_selection, populate_selection, reconcile_selection, selected_id, SENTINEL_VALUE,
};
