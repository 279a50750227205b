use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CURRENCY_CODE;

/// Display currency chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub code: String,
    pub symbol: String,
    pub name: String,
    pub locale: String,
}

// (code, symbol, name, locale)
const SUPPORTED: [(&str, &str, &str, &str); 7] = [
    ("PEN", "S/", "Sol Peruano (PEN)", "es-PE"),
    ("USD", "$", "Dólar Americano (USD)", "en-US"),
    ("EUR", "€", "Euro (EUR)", "de-DE"),
    ("MXN", "$", "Peso Mexicano (MXN)", "es-MX"),
    ("COP", "$", "Peso Colombiano (COP)", "es-CO"),
    ("ARS", "$", "Peso Argentino (ARS)", "es-AR"),
    ("CLP", "$", "Peso Chileno (CLP)", "es-CL"),
];

impl Currency {
    /// Looks up a supported currency by ISO code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Currency> {
        SUPPORTED
            .iter()
            .find(|(c, ..)| c.eq_ignore_ascii_case(code))
            .map(|(code, symbol, name, locale)| Currency {
                code: code.to_string(),
                symbol: symbol.to_string(),
                name: name.to_string(),
                locale: locale.to_string(),
            })
    }

    pub fn is_supported(&self) -> bool {
        Currency::from_code(&self.code).is_some()
    }
}

impl Default for Currency {
    fn default() -> Self {
        supported_currencies()
            .into_iter()
            .find(|c| c.code == DEFAULT_CURRENCY_CODE)
            .unwrap_or_else(|| Currency {
                code: DEFAULT_CURRENCY_CODE.to_string(),
                symbol: "S/".to_string(),
                name: "Sol Peruano (PEN)".to_string(),
                locale: "es-PE".to_string(),
            })
    }
}

/// Every currency a user can pick, in menu order.
pub fn supported_currencies() -> Vec<Currency> {
    SUPPORTED
        .iter()
        .filter_map(|(code, ..)| Currency::from_code(code))
        .collect()
}
