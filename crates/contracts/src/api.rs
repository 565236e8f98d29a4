use serde::{Deserialize, Serialize};

/// Ответ backend на любую мутацию (POST/PUT).
///
/// Текст из `message` показывается пользователю как есть.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mutation_message() {
        let resp: MutationResponse =
            serde_json::from_str(r#"{"message":"Партия добавлена!"}"#).unwrap();
        assert_eq!(resp.message, "Партия добавлена!");
    }
}
