use serde::{Deserialize, Serialize};

/// One row of the company dataset. Percent fields are in percent units (18.5 means 18.5%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub company_name: String,
    pub annual_return: f64,
    pub volatility: f64,
    pub beta: f64,
    pub pe_ratio: f64,
    pub dividend_yield: f64,
    pub current_price: f64,
}

impl CompanyRecord {
    /// Lookup key: lower-cased, exact.
    pub fn key(&self) -> String {
        normalize_name(&self.company_name)
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.company_name.trim().is_empty() {
            return Err("company_name must be non-empty".to_string());
        }

        let numeric = [
            ("annual_return", self.annual_return),
            ("volatility", self.volatility),
            ("beta", self.beta),
            ("pe_ratio", self.pe_ratio),
            ("dividend_yield", self.dividend_yield),
            ("current_price", self.current_price),
        ];
        for (field, value) in numeric {
            if !value.is_finite() {
                return Err(format!("{field} must be a finite number (got {value})"));
            }
        }

        if self.volatility < 0.0 {
            return Err(format!("volatility must be >= 0 (got {})", self.volatility));
        }
        if self.dividend_yield < 0.0 {
            return Err(format!(
                "dividend_yield must be >= 0 (got {})",
                self.dividend_yield
            ));
        }
        if self.current_price <= 0.0 {
            return Err(format!(
                "current_price must be > 0 (got {})",
                self.current_price
            ));
        }

        Ok(())
    }
}

pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

#[cfg(test)]
pub(crate) fn sample(name: &str) -> CompanyRecord {
    CompanyRecord {
        company_name: name.to_string(),
        annual_return: 30.0,
        volatility: 15.0,
        beta: 1.1,
        pe_ratio: 18.0,
        dividend_yield: 3.0,
        current_price: 100.0,
    }
}
