use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One environmental measurement record.
///
/// Field names mirror the camelCase JSON source. Every field defaults so that
/// sparse records load as-is; the loader performs no per-record schema
/// validation and downstream consumers must tolerate missing fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sample {
    /// Unique identifier (uniqueness is assumed of the source, not enforced)
    pub sample_id: String,

    /// Free-text collection site
    pub location: String,

    /// Zone category as stored; may fall outside the [`Zone`] enumeration
    pub zone: String,

    /// Sample type as stored; may fall outside the [`SampleType`] enumeration
    pub sample_type: String,

    /// Collection timestamp as stored (RFC 3339 or date-only)
    pub collection_date: String,

    /// Numeric measurements
    pub parameters: Parameters,

    /// Status as stored; may fall outside the [`Status`] enumeration
    pub status: String,

    /// Operator name, matched exactly by the operator filter
    pub operator: String,

    /// Laboratory code
    pub lab_code: String,

    /// Free-text notes
    pub notes: String,
}

/// Numeric measurements attached to a sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Parameters {
    #[serde(rename = "pH")]
    pub ph: f64,
    pub temperature: f64,
    pub conductivity: f64,
    pub turbidity: f64,
    pub dissolved_oxygen: f64,
    pub heavy_metals: HeavyMetals,
    pub vocs: f64,
    pub pm25: f64,
    pub pm10: f64,
    pub noise_level: f64,
}

/// Heavy-metal concentrations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeavyMetals {
    pub lead: f64,
    pub mercury: f64,
    pub arsenic: f64,
}

/// Zone categories accepted as filter values.
///
/// These enumerations constrain query-time filter values only; stored sample
/// fields are trusted data and are never validated against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Industrial,
    Commercial,
    Residential,
    Rural,
    Urban,
    Coastal,
}

impl Zone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Industrial => "industrial",
            Zone::Commercial => "commercial",
            Zone::Residential => "residential",
            Zone::Rural => "rural",
            Zone::Urban => "urban",
            Zone::Coastal => "coastal",
        }
    }
}

impl FromStr for Zone {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "industrial" => Ok(Zone::Industrial),
            "commercial" => Ok(Zone::Commercial),
            "residential" => Ok(Zone::Residential),
            "rural" => Ok(Zone::Rural),
            "urban" => Ok(Zone::Urban),
            "coastal" => Ok(Zone::Coastal),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sample types accepted as filter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleType {
    Air,
    Water,
    Soil,
    Noise,
}

impl SampleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleType::Air => "air",
            SampleType::Water => "water",
            SampleType::Soil => "soil",
            SampleType::Noise => "noise",
        }
    }
}

impl FromStr for SampleType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "air" => Ok(SampleType::Air),
            "water" => Ok(SampleType::Water),
            "soil" => Ok(SampleType::Soil),
            "noise" => Ok(SampleType::Noise),
            _ => Err(()),
        }
    }
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statuses accepted as filter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Normal,
    Warning,
    Critical,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Normal => "normal",
            Status::Warning => "warning",
            Status::Critical => "critical",
        }
    }
}

impl FromStr for Status {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Status::Normal),
            "warning" => Ok(Status::Warning),
            "critical" => Ok(Status::Critical),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
