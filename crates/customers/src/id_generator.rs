// Archivo: id_generator.rs
// Propósito: generación de identificadores candidatos de alta entropía.
//
// El generador es siempre una dependencia inyectada (`IdGenerator`); no hay
// una fuente aleatoria global oculta, de modo que las pruebas pueden fijar
// la secuencia exacta de candidatos.
use crate::entities::CustomerId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Alfabeto de 62 símbolos usado para los ids de cliente.
pub const ID_ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Longitud fija de los ids generados.
pub const ID_LENGTH: usize = 10;

/// Cantidad de candidatos por intento de asignación.
pub const ID_CANDIDATES: usize = 3;

/// Política de asignación: cuántos candidatos por intento y de qué longitud.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationPolicy {
    pub candidates: usize,
    pub length: usize,
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        Self { candidates: ID_CANDIDATES,
               length: ID_LENGTH }
    }
}

/// Fuente de ids candidatos.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> CustomerId;
}

/// Generador aleatorio sobre `ID_ALPHABET`.
#[derive(Debug)]
pub struct RandomIdGenerator {
    rng: Mutex<StdRng>,
    length: usize,
}

impl RandomIdGenerator {
    /// Generador sembrado desde la entropía del sistema operativo.
    pub fn from_entropy(length: usize) -> Self {
        Self::with_rng(StdRng::from_entropy(), length)
    }

    /// Generador determinista: misma semilla, misma secuencia.
    pub fn seeded(seed: u64, length: usize) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), length)
    }

    fn with_rng(rng: StdRng, length: usize) -> Self {
        Self { rng: Mutex::new(rng),
               length: length.max(1) }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> CustomerId {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let raw: String = (0..self.length).map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
                                          .collect();
        CustomerId::from_generated(raw)
    }
}
