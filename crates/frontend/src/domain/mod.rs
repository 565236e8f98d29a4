pub mod a001_ore_batch;
pub mod a002_equipment;
pub mod a003_order;
pub mod a004_shipment;
pub mod a005_sale;
