//! JSON helpers: text encoding, typed parsing, and prototype-style
//! rehydration by composition.
//!
//! [`hydrate`] stands in for dynamic prototype grafting: instead of mutating
//! a parsed object's prototype at runtime, it wraps the parsed field table
//! together with a caller-supplied prototype value. Field lookups see the
//! parsed data first and fall back to the prototype's own fields;
//! the prototype's methods stay reachable through `Deref`.

use std::ops::Deref;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Serialize any value to its canonical JSON text.
///
/// Object key order is the serializer's choice; callers must not rely on it.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Parse JSON text into a typed value.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(text)
}

/// Errors from [`hydrate`].
#[derive(Debug, thiserror::Error)]
pub enum HydrateError {
    /// The text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// The text parsed, but its top-level value is not an object.
    #[error("top-level JSON value is not an object")]
    NotAnObject,
}

/// A parsed JSON object composed with a prototype value.
///
/// Created by [`hydrate`]. Field lookups via [`field`](Hydrated::field)
/// consult the parsed object first, then the prototype's serialized fields;
/// the prototype's methods are available directly through `Deref`:
///
/// ```
/// use selvage::geometry::Rectangle;
/// use selvage::json::hydrate;
///
/// let hydrated = hydrate(r#"{"width":10.0,"height":20.0}"#, Rectangle::default())?;
/// assert_eq!(hydrated.field("width").and_then(|v| v.as_f64()), Some(10.0));
/// // `area` comes from the prototype and computes over *its* fields.
/// assert_eq!(hydrated.area(), 0.0);
/// # Ok::<(), selvage::json::HydrateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Hydrated<P> {
    prototype: P,
    fields: Map<String, Value>,
    proto_fields: Map<String, Value>,
}

impl<P> Hydrated<P> {
    /// Look up a field, parsed data taking precedence over the prototype.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).or_else(|| self.proto_fields.get(name))
    }

    /// The fields parsed from the JSON text.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// The prototype value.
    pub fn prototype(&self) -> &P {
        &self.prototype
    }

    /// Consume the wrapper and return the prototype.
    pub fn into_prototype(self) -> P {
        self.prototype
    }
}

impl<P> Deref for Hydrated<P> {
    type Target = P;

    fn deref(&self) -> &P {
        &self.prototype
    }
}

/// Parse JSON text into an object and compose it with `prototype`.
///
/// The prototype is serialized once so its fields participate in
/// [`Hydrated::field`] lookups; a prototype that serializes to a non-object
/// (a scalar capability set) simply contributes no fields. Non-object
/// *text* is an error — there is nothing to graft fields onto.
pub fn hydrate<P: Serialize>(text: &str, prototype: P) -> Result<Hydrated<P>, HydrateError> {
    let fields = match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => map,
        _ => return Err(HydrateError::NotAnObject),
    };
    let proto_fields = match serde_json::to_value(&prototype)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    Ok(Hydrated { prototype, fields, proto_fields })
}
