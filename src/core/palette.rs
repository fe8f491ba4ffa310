//! The palette catalog: fixed categorical color sequences.
//!
//! Colorways are assigned cyclically to sunburst segments by the chart
//! engine; the catalog only owns the mapping from identifier to sequence.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ViewerError, ViewerResult};

/// Number of colors in every catalog colorway.
pub const COLORWAY_LEN: usize = 20;

/// Identifier of one catalog colorway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    Pastel,
    Earth,
    Vintage,
    SoftRainbow,
    Warm,
    Moss,
    Clay,
}

impl Palette {
    /// Catalog entries in presentation order.
    pub const ALL: [Palette; 7] = [
        Palette::Pastel,
        Palette::Earth,
        Palette::Vintage,
        Palette::SoftRainbow,
        Palette::Warm,
        Palette::Moss,
        Palette::Clay,
    ];

    /// Wire name carried in the generate request.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Palette::Pastel => "pastel",
            Palette::Earth => "earth",
            Palette::Vintage => "vintage",
            Palette::SoftRainbow => "soft_rainbow",
            Palette::Warm => "warm",
            Palette::Moss => "moss",
            Palette::Clay => "clay",
        }
    }

    /// Ordered color sequence applied as the chart's categorical colorway.
    #[must_use]
    pub fn colorway(self) -> &'static [&'static str; COLORWAY_LEN] {
        match self {
            Palette::Pastel => &PASTEL,
            Palette::Earth => &EARTH,
            Palette::Vintage => &VINTAGE,
            Palette::SoftRainbow => &SOFT_RAINBOW,
            Palette::Warm => &WARM,
            Palette::Moss => &MOSS,
            Palette::Clay => &CLAY,
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Palette {
    type Err = ViewerError;

    fn from_str(value: &str) -> ViewerResult<Self> {
        match value {
            "pastel" => Ok(Palette::Pastel),
            "earth" => Ok(Palette::Earth),
            "vintage" => Ok(Palette::Vintage),
            "soft_rainbow" => Ok(Palette::SoftRainbow),
            "warm" => Ok(Palette::Warm),
            "moss" => Ok(Palette::Moss),
            "clay" => Ok(Palette::Clay),
            other => Err(ViewerError::InvalidConfig(format!(
                "unknown palette `{other}`"
            ))),
        }
    }
}

static PASTEL: [&str; COLORWAY_LEN] = [
    "#a6cee3", "#1f78b4", "#b2df8a", "#33a02c", "#fb9a99", "#e31a1c", "#fdbf6f", "#ff7f00",
    "#cab2d6", "#6a3d9a", "#ffff99", "#b15928", "#ccebc5", "#ffed6f", "#bc80bd", "#8dd3c7",
    "#bebada", "#fb8072", "#80b1d3", "#fdb462",
];

static EARTH: [&str; COLORWAY_LEN] = [
    "#8c510a", "#bf812d", "#dfc27d", "#f6e8c3", "#c7eae5", "#80cdc1", "#35978f", "#01665e",
    "#003c30", "#d9f0d3", "#ccebc5", "#a8ddb5", "#7bccc4", "#4eb3d3", "#2b8cbe", "#0868ac",
    "#084081", "#fddbc7", "#f4a582", "#d6604d",
];

static VINTAGE: [&str; COLORWAY_LEN] = [
    "#cdb79e", "#f0e68c", "#deb887", "#d2b48c", "#f5deb3", "#a0522d", "#cd853f", "#8b4513",
    "#bc8f8f", "#e9967a", "#dda0dd", "#f08080", "#e6e6fa", "#b0c4de", "#4682b4", "#708090",
    "#778899", "#a9a9a9", "#c0c0c0", "#d3d3d3",
];

static SOFT_RAINBOW: [&str; COLORWAY_LEN] = [
    "#fde0dd", "#fa9fb5", "#f768a1", "#dd3497", "#ae017e", "#7a0177", "#49006a", "#e0ecf4",
    "#bfd3e6", "#9ebcda", "#8c96c6", "#8c6bb1", "#88419d", "#810f7c", "#4d004b", "#fef0d9",
    "#fdcc8a", "#fc8d59", "#e34a33", "#b30000",
];

static WARM: [&str; COLORWAY_LEN] = [
    "#8c4b35", "#a65e3f", "#bf7643", "#d9a066", "#eec27a", "#f4db9d", "#ebd9b4", "#c7ba9d",
    "#a69a84", "#7b6651", "#4e3926", "#9b7653", "#b3926a", "#d0b484", "#e3c97e", "#c6a664",
    "#9a8253", "#6f5c3a", "#4a3d2b", "#33291d",
];

static MOSS: [&str; COLORWAY_LEN] = [
    "#5b5f41", "#6a8a62", "#91b77c", "#a7c796", "#d4e8c4", "#d9c7a1", "#c49d6e", "#926e43",
    "#694f2d", "#4b3b23", "#3d2e1e", "#7b775f", "#8fa68e", "#bacca9", "#cedbb7", "#b28d5c",
    "#986c43", "#795436", "#5f402e", "#3a2a1e",
];

static CLAY: [&str; COLORWAY_LEN] = [
    "#7c665b", "#927e6b", "#b19b88", "#d1c4a9", "#e7e0c7", "#bcaaa4", "#a1887f", "#8d6e63",
    "#6d4c41", "#4e342e", "#3e2723", "#cdb79e", "#b79f8f", "#a38c7b", "#8d7969", "#7b6859",
    "#6a574a", "#58453b", "#47352d", "#36251f",
];
