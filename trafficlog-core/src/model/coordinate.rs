use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{de::Visitor, Deserialize, Deserializer, Serialize};

use super::CoreError;

/// a WGS84 point in floating-point degrees. no range validation is applied,
/// a coordinate only needs to be numeric.
///
/// coordinates are written as `latitude,longitude` (for example `25.0478,121.517`),
/// both on the command line and in serialized records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate {
            latitude,
            longitude,
        }
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl FromStr for Coordinate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: String| CoreError::InvalidCoordinate {
            value: s.to_string(),
            message,
        };
        let (lat_str, lon_str) = s
            .split_once(',')
            .ok_or_else(|| invalid(String::from("missing ',' separator")))?;
        let latitude = lat_str
            .trim()
            .parse::<f64>()
            .map_err(|e| invalid(format!("latitude: {e}")))?;
        let longitude = lon_str
            .trim()
            .parse::<f64>()
            .map_err(|e| invalid(format!("longitude: {e}")))?;
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(invalid(String::from("values must be finite")));
        }
        Ok(Coordinate::new(latitude, longitude))
    }
}

struct CoordinateVisitor;

impl Visitor<'_> for CoordinateVisitor {
    type Value = Coordinate;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a coordinate string in 'latitude,longitude' format")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Coordinate::from_str(v).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Coordinate, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(CoordinateVisitor)
    }
}

impl Serialize for Coordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod test {
    use super::Coordinate;
    use std::str::FromStr;

    #[test]
    fn test_parse_with_whitespace() {
        let coord = Coordinate::from_str(" 25.0478 , 121.5170").expect("should parse");
        assert_eq!(coord, Coordinate::new(25.0478, 121.517));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Coordinate::from_str("25.0478").is_err());
        assert!(Coordinate::from_str("north,121.5").is_err());
        assert!(Coordinate::from_str("25.0,NaN").is_err());
    }

    #[test]
    fn test_display_is_parseable() {
        let coord = Coordinate::new(25.048055599999998, 121.516261);
        let parsed = Coordinate::from_str(&coord.to_string()).expect("should parse");
        assert_eq!(coord, parsed);
    }

    #[test]
    fn test_serde_as_string() {
        let coord = Coordinate::new(25.0336, 121.5646);
        let json = serde_json::to_string(&coord).expect("should serialize");
        assert_eq!(json, "\"25.0336,121.5646\"");
        let back: Coordinate = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(back, coord);
    }
}
