// Archivo: config.rs
// Propósito: configuración leída del entorno (con soporte `.env` vía
// `dotenvy`).
//
// Variables reconocidas:
// - `CUSTOMER_ID_CANDIDATES`: candidatos por intento (>= 1, por defecto 3).
// - `CUSTOMER_ID_LENGTH`: longitud de los ids (>= 1, por defecto 10).
// - `CUSTOMER_ID_SEED`: semilla opcional para un generador reproducible.
use crate::id_generator::{AllocationPolicy, IdGenerator, RandomIdGenerator};
use outcome::{BaseError, Result};
use serde_json::json;
use std::str::FromStr;
use std::sync::Arc;

pub const ENV_ID_CANDIDATES: &str = "CUSTOMER_ID_CANDIDATES";
pub const ENV_ID_LENGTH: &str = "CUSTOMER_ID_LENGTH";
pub const ENV_ID_SEED: &str = "CUSTOMER_ID_SEED";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomersConfig {
    pub policy: AllocationPolicy,
    pub seed: Option<u64>,
}

impl CustomersConfig {
    /// Carga `.env` si existe y lee la configuración del entorno del proceso.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Igual que `from_env` pero con una función de búsqueda inyectada.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
        where F: Fn(&str) -> Option<String>
    {
        let defaults = AllocationPolicy::default();
        let candidates = read_positive(&lookup, ENV_ID_CANDIDATES)?.unwrap_or(defaults.candidates);
        let length = read_positive(&lookup, ENV_ID_LENGTH)?.unwrap_or(defaults.length);
        let seed = read_var::<u64, _>(&lookup, ENV_ID_SEED)?;
        Ok(Self { policy: AllocationPolicy { candidates, length },
                  seed })
    }

    /// Construye el generador de ids que corresponde a esta configuración.
    pub fn id_generator(&self) -> Arc<dyn IdGenerator> {
        match self.seed {
            Some(seed) => Arc::new(RandomIdGenerator::seeded(seed, self.policy.length)),
            None => Arc::new(RandomIdGenerator::from_entropy(self.policy.length)),
        }
    }
}

fn read_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
    where T: FromStr,
          T::Err: std::fmt::Display,
          F: Fn(&str) -> Option<String>
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|e| {
            BaseError::parsing(format!("Valor inválido para {}: {}", key, e)).with_context(json!({ "variable": key }))
        }),
    }
}

fn read_positive<F>(lookup: &F, key: &str) -> Result<Option<usize>>
    where F: Fn(&str) -> Option<String>
{
    match read_var::<usize, _>(lookup, key)? {
        Some(0) => Err(BaseError::parsing(format!("{} debe ser mayor que cero", key)).with_context(json!({ "variable": key }))),
        other => Ok(other),
    }
}
