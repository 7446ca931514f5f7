// context.rs
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

/// Serializa `from` y conserva sólo las claves indicadas. Sirve para armar
/// el `context` de un error con identificadores sin volcar la entidad
/// completa. Si `from` no serializa a un objeto se devuelve `Null`.
pub fn only<T: Serialize + ?Sized>(from: &T, keys: &[&str]) -> JsonValue {
  match serde_json::to_value(from) {
    Ok(JsonValue::Object(mut fields)) => {
      let picked: Map<String, JsonValue> = keys.iter()
                                               .filter_map(|k| fields.remove(*k).map(|v| (k.to_string(), v)))
                                               .collect();
      JsonValue::Object(picked)
    }
    _ => JsonValue::Null,
  }
}
