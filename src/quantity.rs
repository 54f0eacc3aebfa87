#[macro_use]
mod macros;

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

reading!(Watts, "W");
reading!(KilowattHours, "kWh");
reading!(DegreesCelsius, "°C");

/// Accept a JSON number, or a string containing one. Everything else is zero.
pub fn deserialize_lenient_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Number, D::Error> {
    let number = match Value::deserialize(deserializer)? {
        Value::Number(number) => Some(number),
        Value::String(text) => text.trim().parse::<Number>().ok(),
        _ => None,
    };
    Ok(number.unwrap_or_else(|| Number::from(0)))
}
