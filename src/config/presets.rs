//! Built-in exclusion lists
//!
//! Each preset lists bookkeeping fields that never belong in a popup for one
//! kind of source data.

use serde::{Deserialize, Serialize};

/// Named exclusion list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionPreset {
    /// Lower-case geodatabase bookkeeping fields of hosted layers
    SystemFields,
    /// Editor tracking fields of inventory/inspection joins
    EditorTracking,
    /// GNSS receiver and laser offset metadata written by field collection apps
    GnssMetadata,
}

const SYSTEM_FIELDS: &[&str] = &[
    "objectid",
    "globalid",
    "created_user",
    "created_date",
    "last_edited_user",
    "last_edited_date",
    "shape",
    "parentguid",
    "parentguid__",
];

const EDITOR_TRACKING: &[&str] = &[
    "OBJECTID",
    "Shape",
    "InvCreated_user",
    "InvCreated_date",
    "InvLast_edited_user",
    "InvLast_edited_date",
    "InvOBJECTID",
    "InspCreated_user",
    "InspCreated_date",
    "InspLast_edited_user",
    "created_user",
    "created_date",
    "last_edited_user",
    "last_edited_date",
];

const GNSS_METADATA: &[&str] = &[
    "OBJECTID",
    "OBJECTID_1",
    "GlobalID",
    "ESRIGNSS_RECEIVER",
    "ESRIGNSS_H_RMS",
    "ESRIGNSS_V_RMS",
    "ESRIGNSS_LATITUDE",
    "ESRIGNSS_LONGITUDE",
    "ESRIGNSS_ALTITUDE",
    "ESRIGNSS_PDOP",
    "ESRIGNSS_HDOP",
    "ESRIGNSS_VDOP",
    "ESRIGNSS_FIXTYPE",
    "ESRIGNSS_CORRECTIONAGE",
    "ESRIGNSS_STATIONID",
    "ESRIGNSS_NUMSATS",
    "ESRIGNSS_FIXDATETIME",
    "ESRIGNSS_AVG_H_RMS",
    "ESRIGNSS_AVG_V_RMS",
    "ESRIGNSS_AVG_POSITIONS",
    "ESRIGNSS_H_STDDEV",
    "EOSLASER_METHOD",
    "EOS_ORTHO_HEIGHT",
    "EOS_UNDULATION",
    "EOS_GEOID_MODEL",
    "EOSLASER_DEVICE",
    "EOSLASER_GNSSANTH",
    "EOSLASER_DEVICEH",
    "EOSLASER_MAGDEC",
    "EOSLASER_CTL1_LAT",
    "EOSLASER_CTL1_LON",
    "EOSLASER_CTL1_ALT",
    "EOSLASER_CTL1_HRMS",
    "EOSLASER_CTL1_SATS",
    "EOSLASER_CTL1_FIXTYPE",
    "EOSLASER_CTL1_AGE",
    "EOSLASER_CTL1_DIFFID",
    "EOSLASER_CTL1_AVG",
    "EOSLASER_CTL1_SLDIST",
    "EOSLASER_CTL1_AZI",
    "EOSLASER_CTL1_SL",
    "EOSLASER_BS_LAT",
    "EOSLASER_BS_LON",
    "EOSLASER_BS_ALT",
    "EOSLASER_BS_HRMS",
    "EOSLASER_BS_SATS",
    "EOSLASER_BS_FIXTYPE",
    "EOSLASER_BS_AGE",
    "EOSLASER_BS_DIFFID",
    "EOSLASER_BS_AVG",
    "EOSLASER_BS_SLDIST",
    "EOSLASER_BS_AZI",
    "EOSLASER_BS_SL",
    "EOSLASER_BS_TRUEAZI",
    "EOSLASER_BS_AZICORR",
    "EOSLASER_CTL2_LAT",
    "EOSLASER_CTL2_LON",
    "EOSLASER_CTL2_ALT",
    "EOSLASER_CTL2_HRMS",
    "EOSLASER_CTL2_SATS",
    "EOSLASER_CTL2_FIXTYPE",
    "EOSLASER_CTL2_AGE",
    "EOSLASER_CTL2_DIFFID",
    "EOSLASER_CTL2_AVG",
    "EOSLASER_CTL2_SLDIST",
    "EOSLASER_CTL2_AZI",
    "EOSLASER_CTL2_SL",
    "Shape",
];

impl ExclusionPreset {
    /// Field names dropped by this preset
    #[must_use]
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::SystemFields => SYSTEM_FIELDS,
            Self::EditorTracking => EDITOR_TRACKING,
            Self::GnssMetadata => GNSS_METADATA,
        }
    }
}
