use serde::{Deserialize, Serialize};

/// Запись журнала действий (`GET /api/logs`). Только чтение.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub user: String,
    pub action: String,
}
