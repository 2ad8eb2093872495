// crates/geosuggest-core/src/loader/tsv.rs

//! Line parser for the tab-delimited cities source.
//!
//! fields: 0 id | 1 name | 2 ascii name | 3 alt names | 4 lat | 5 long |
//! 8 country code | 10 region code

use super::config::IngestConfig;
use crate::model::{Place, PlaceId};
use crate::text::{fold_key, parse_coordinate_or};

pub const MIN_FIELDS: usize = 10;

const ID: usize = 0;
const NAME: usize = 1;
const ASCII_NAME: usize = 2;
const LATITUDE: usize = 4;
const LONGITUDE: usize = 5;
const COUNTRY: usize = 8;
const REGION: usize = 10;

/// A line ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub place: Place,
    /// Text fed to the trie.
    pub indexed_name: String,
}

/// Why a line was not inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    TooFewFields(usize),
    UnmappedRegion(String),
    BadId(String),
}

/// Parses one source line.
pub fn parse_line(line: &str, cfg: &IngestConfig) -> Result<ParsedLine, SkipReason> {
    let line = line.trim_end_matches(['\r', '\n']);
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < MIN_FIELDS {
        return Err(SkipReason::TooFewFields(fields.len()));
    }

    let region_code = fields.get(REGION).copied().unwrap_or_default();
    let (country, region) = cfg
        .resolve(fields[COUNTRY], region_code)
        .ok_or_else(|| SkipReason::UnmappedRegion(region_code.to_string()))?;

    let id: PlaceId = fields[ID]
        .trim()
        .parse()
        .map_err(|_| SkipReason::BadId(fields[ID].to_string()))?;

    let latitude = parse_coordinate_or(Some(fields[LATITUDE]), cfg.sentinel);
    let longitude = parse_coordinate_or(Some(fields[LONGITUDE]), cfg.sentinel);

    let indexed_name = match fields[ASCII_NAME].trim() {
        "" => fold_key(fields[NAME]),
        ascii => ascii.to_string(),
    };

    Ok(ParsedLine {
        place: Place::new(id, fields[NAME], latitude, longitude, country, region),
        indexed_name,
    })
}
