use contracts::domain::equipment::EquipmentItem;
use contracts::domain::order::Order;
use contracts::domain::ore_batch::OreBatch;
use contracts::domain::shipment::Shipment;
use contracts::reference::ReferenceSet;
use leptos::prelude::*;

/// Контекст синхронизации: справочники плюс транзакционные списки.
///
/// Один экземпляр на приложение, раздаётся через `provide_context`.
/// Инициализируется пустыми коллекциями; каждая успешная загрузка заменяет
/// соответствующую коллекцию целиком. Неудачная загрузка логируется и
/// не трогает состояние — страницы продолжают показывать прежние данные.
#[derive(Clone, Copy)]
pub struct SyncContext {
    pub reference: RwSignal<ReferenceSet>,
    pub ore_batches: RwSignal<Vec<OreBatch>>,
    pub equipment: RwSignal<Vec<EquipmentItem>>,
    pub orders: RwSignal<Vec<Order>>,
    pub shipments: RwSignal<Vec<Shipment>>,
}

impl SyncContext {
    pub fn new() -> Self {
        Self {
            reference: RwSignal::new(ReferenceSet::default()),
            ore_batches: RwSignal::new(Vec::new()),
            equipment: RwSignal::new(Vec::new()),
            orders: RwSignal::new(Vec::new()),
            shipments: RwSignal::new(Vec::new()),
        }
    }

    pub fn use_ctx() -> Self {
        use_context::<SyncContext>().expect("SyncContext not found in context")
    }

    /// Стартовая последовательность: справочники строго до транзакционных
    /// списков, сами списки — параллельно друг другу.
    pub fn bootstrap(self) {
        wasm_bindgen_futures::spawn_local(async move {
            self.apply_reference(super::api::fetch_reference_data().await);
            self.load_transactional();
        });
    }

    pub fn load_reference_data(self) {
        wasm_bindgen_futures::spawn_local(async move {
            self.apply_reference(super::api::fetch_reference_data().await);
        });
    }

    /// Запускает обновление всех транзакционных списков. Запросы идут
    /// конкурентно; каждый завершившийся сам заменяет свой список,
    /// порядок завершения не координируется.
    pub fn load_transactional(self) {
        self.load_ore_batches();
        self.load_equipment();
        self.load_orders();
        self.load_shipments();
    }

    pub fn load_ore_batches(self) {
        wasm_bindgen_futures::spawn_local(async move {
            match crate::domain::a001_ore_batch::api::fetch_ore_batches().await {
                Ok(items) => self.ore_batches.set(items),
                Err(e) => log::error!("Ошибка загрузки партий руды: {}", e),
            }
        });
    }

    pub fn load_equipment(self) {
        wasm_bindgen_futures::spawn_local(async move {
            match crate::domain::a002_equipment::api::fetch_equipment().await {
                Ok(items) => self.equipment.set(items),
                Err(e) => log::error!("Ошибка загрузки оборудования: {}", e),
            }
        });
    }

    pub fn load_orders(self) {
        wasm_bindgen_futures::spawn_local(async move {
            match crate::domain::a003_order::api::fetch_orders().await {
                Ok(items) => self.orders.set(items),
                Err(e) => log::error!("Ошибка загрузки заказов: {}", e),
            }
        });
    }

    pub fn load_shipments(self) {
        wasm_bindgen_futures::spawn_local(async move {
            match crate::domain::a004_shipment::api::fetch_shipments().await {
                Ok(items) => self.shipments.set(items),
                Err(e) => log::error!("Ошибка загрузки отгрузок: {}", e),
            }
        });
    }

    fn apply_reference(&self, result: Result<ReferenceSet, String>) {
        match result {
            // Весь набор заменяется атомарно, частичного применения нет.
            Ok(set) => self.reference.set(set),
            Err(e) => log::error!("Ошибка загрузки справочников: {}", e),
        }
    }
}

impl Default for SyncContext {
    fn default() -> Self {
        Self::new()
    }
}
