//! Request and response records of the weather backend

use std::fmt;

use serde::{Deserialize, Serialize};

/// Forecast product a client may ask for
///
/// Accepted on the wire either by name (`"ForecastBasic"`) or by numeric
/// code (`0`), always written back by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductRepr")]
pub enum Product {
    ForecastBasic = 0,
    ForecastProfessional = 1,
    ForecastUltimateXL = 2,
}

impl Product {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ForecastBasic => "ForecastBasic",
            Self::ForecastProfessional => "ForecastProfessional",
            Self::ForecastUltimateXL => "ForecastUltimateXL",
        }
    }
}

impl TryFrom<i64> for Product {
    type Error = i64;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::ForecastBasic),
            1 => Ok(Self::ForecastProfessional),
            2 => Ok(Self::ForecastUltimateXL),
            other => Err(other),
        }
    }
}

impl TryFrom<&str> for Product {
    type Error = String;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name {
            "ForecastBasic" => Ok(Self::ForecastBasic),
            "ForecastProfessional" => Ok(Self::ForecastProfessional),
            "ForecastUltimateXL" => Ok(Self::ForecastUltimateXL),
            other => Err(format!("unknown product '{other}'")),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProductRepr {
    Code(i64),
    Name(String),
}

impl TryFrom<ProductRepr> for Product {
    type Error = String;

    fn try_from(repr: ProductRepr) -> Result<Self, Self::Error> {
        match repr {
            ProductRepr::Code(code) => {
                Self::try_from(code).map_err(|c| format!("unknown product code {c}"))
            }
            ProductRepr::Name(name) => Self::try_from(name.as_str()),
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload of `POST /weather/general/outlook`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    pub postal_code: String,
    pub flag_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralOutlook {
    pub city: String,
    pub state: String,
    pub weather_station: String,
}

impl GeneralOutlook {
    /// The outlook produced for every accepted weather request
    pub fn generate() -> Self {
        Self {
            city: "Weimar".to_string(),
            state: "Germany".to_string(),
            weather_station: "BestStationInTown".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_uses_camel_case() {
        let weather: Weather =
            serde_json::from_str(r#"{"postalCode":"99423","flagColor":"blue"}"#).unwrap();
        assert_eq!(weather.postal_code, "99423");
        assert_eq!(weather.flag_color, "blue");
        assert_eq!(weather.product, None);
    }

    #[test]
    fn test_weather_requires_both_fields() {
        assert!(serde_json::from_str::<Weather>(r#"{"postalCode":"99423"}"#).is_err());
    }

    #[test]
    fn test_weather_with_product() {
        let weather: Weather = serde_json::from_str(
            r#"{"postalCode":"99425","flagColor":"blue","product":"ForecastProfessional"}"#,
        )
        .unwrap();
        assert_eq!(weather.product, Some(Product::ForecastProfessional));
    }

    #[test]
    fn test_weather_with_product_code() {
        let weather: Weather = serde_json::from_str(
            r#"{"postalCode":"99425","flagColor":"blue","product":2}"#,
        )
        .unwrap();
        assert_eq!(weather.product, Some(Product::ForecastUltimateXL));

        // Written back by name
        let json = serde_json::to_string(&weather).unwrap();
        assert!(json.contains(r#""product":"ForecastUltimateXL""#), "got: {json}");
    }

    #[test]
    fn test_unknown_product_rejected() {
        for body in [
            r#"{"postalCode":"1","flagColor":"red","product":3}"#,
            r#"{"postalCode":"1","flagColor":"red","product":-1}"#,
            r#"{"postalCode":"1","flagColor":"red","product":"ForecastDeluxe"}"#,
        ] {
            assert!(serde_json::from_str::<Weather>(body).is_err(), "accepted {body}");
        }
    }

    #[test]
    fn test_product_names() {
        assert_eq!(Product::ForecastUltimateXL.to_string(), "ForecastUltimateXL");
        assert_eq!(Product::try_from(0_i64), Ok(Product::ForecastBasic));
        assert_eq!(Product::try_from(3_i64), Err(3));
    }

    #[test]
    fn test_general_outlook_serializes_camel_case() {
        let json = serde_json::to_string(&GeneralOutlook::generate()).unwrap();
        assert_eq!(
            json,
            r#"{"city":"Weimar","state":"Germany","weatherStation":"BestStationInTown"}"#
        );
    }
}
