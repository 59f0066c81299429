//! Serde support (feature `serde`).
//!
//! A number is written as its display text, which parses back to an equal
//! value. `"NaN"` is written for the sentinel and read back as it.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::nan::NaN;
use crate::number::Number;
use crate::representation::Representation;

impl<R: Representation> Serialize for Number<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct NumberVisitor<R>(PhantomData<R>);

impl<R: Representation> Visitor<'_> for NumberVisitor<R> {
    type Value = Number<R>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} literal or \"NaN\"", R::NAME)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Number<R>, E> {
        if v == NaN::NAME {
            return Ok(Number::NaN);
        }
        Number::parse(v, None).map_err(E::custom)
    }
}

impl<'de, R: Representation> Deserialize<'de> for Number<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(NumberVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use crate::any_num::AnyNum;
    use crate::number::{DecimalNum, DoubleNum};
    use crate::Num;

    #[test]
    fn numbers_serialize_as_text() {
        let x: DecimalNum = "1.250".parse().unwrap();
        assert_eq!(serde_json::to_string(&x).unwrap(), "\"1.250\"");
        assert_eq!(serde_json::to_string(&DoubleNum::ONE).unwrap(), "\"1.0\"");
        assert_eq!(serde_json::to_string(&DoubleNum::NaN).unwrap(), "\"NaN\"");
    }

    #[test]
    fn round_trip_keeps_digits() {
        let long = "3.14159265358979323846264338327950288419716939937510";
        let x: DecimalNum = long.parse().unwrap();
        let back: DecimalNum = serde_json::from_str(&serde_json::to_string(&x).unwrap()).unwrap();
        assert_eq!(back.to_string(), long);
        let nan: DecimalNum = serde_json::from_str("\"NaN\"").unwrap();
        assert!(nan.is_nan());
        assert!(serde_json::from_str::<DoubleNum>("\"abc\"").is_err());
    }

    #[test]
    fn any_num_is_tagged_by_family() {
        let any = AnyNum::from("2.5".parse::<DecimalNum>().unwrap());
        let json = serde_json::to_string(&any).unwrap();
        assert_eq!(json, "{\"Decimal\":\"2.5\"}");
        let back: AnyNum = serde_json::from_str(&json).unwrap();
        assert_eq!(back, any);
        assert_eq!(serde_json::to_string(&AnyNum::NaN).unwrap(), "\"NaN\"");
    }
}
