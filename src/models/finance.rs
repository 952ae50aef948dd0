use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn code(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "income" => Some(TransactionType::Income),
            "expense" => Some(TransactionType::Expense),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    #[serde(deserialize_with = "amount_from_number_or_string")]
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub transaction_date: Option<String>,
}

/// Cuerpo de `POST /finances` y `PUT /finances/:id`
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct TransactionInput {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub amount: f64,
    pub description: String,
    /// `YYYY-MM-DD`
    pub transaction_date: String,
}

// DECIMAL llega como string desde el driver de MySQL
fn amount_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Number(n) => Ok(n),
        Amount::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}
