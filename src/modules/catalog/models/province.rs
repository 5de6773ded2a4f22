use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};

/// Name the capital province is matched against, case-insensitively.
const CAPITAL_PROVINCE: &str = "la habana";

/// Cuban destination province
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Province {
    pub id: String,

    pub name: String,

    /// Optional short code, at most 3 characters
    pub code: Option<String>,

    pub active: bool,
}

impl Province {
    pub fn new(name: String, code: Option<String>) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Province name cannot be empty"));
        }

        if let Some(ref code) = code {
            if code.len() > 3 {
                return Err(AppError::validation(format!(
                    "Province code cannot exceed 3 characters, got: {}",
                    code
                )));
            }
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            code,
            active: true,
        })
    }

    /// Whether this is the capital province (La Habana), which gets the
    /// preferential rate column. The match is case-insensitive.
    pub fn is_capital(&self) -> bool {
        self.name.trim().eq_ignore_ascii_case(CAPITAL_PROVINCE)
    }
}
