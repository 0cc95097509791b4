/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! odin_orbitarea supports interactive definition of racetrack shaped surface areas ("orbit areas") such
//! as holding patterns of surveillance aircraft over an incident.
//!
//! An [OrbitArea] is given by two axis points, a width and an [Alignment] that tells us to which side of the
//! axis the area extends. The crate consists of
//!   - [alignment] - classification of a probe point into left/centre/right of a moving reference axis
//!   - [racetrack] - generation of the closed geodesic racetrack polygon for an orbit area
//!   - [editor] - the three-click (point, point, width) state machine that produces orbit areas
//!
//! Rendering of previews and storage of completed areas are left to the clients of this crate, which
//! observe the [editor::OrbitAreaEditor] via [editor::EditorObserver] implementations.

use std::{fmt, path::Path, str::FromStr};
use serde::{Serialize,Deserialize};
use uom::si::{f64::Length, length::meter};

use odin_common::geo::{GeoPoint, GeoPolygon};
use odin_common::units::DistanceUnit;

pub mod errors;
pub mod alignment;
pub mod racetrack;
pub mod editor;

use errors::{Result, OdinOrbitAreaError, op_failed};

/* #region Alignment ***********************************************************************************************/

/// the side of the axis (as seen facing from the first to the second point) the racetrack body extends to
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Default,Serialize,Deserialize)]
pub enum Alignment {
    #[default]
    Centre,
    Left,
    Right
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Alignment::Centre => "centre",
            Alignment::Left => "left",
            Alignment::Right => "right",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Alignment {
    type Err = String;

    fn from_str (s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "centre" | "center" | "c" => Ok(Alignment::Centre),
            "left" | "l" => Ok(Alignment::Left),
            "right" | "r" => Ok(Alignment::Right),
            _ => Err( format!("unknown alignment '{s}' (expected left, centre or right)"))
        }
    }
}

/* #endregion Alignment */

/* #region OrbitArea ***********************************************************************************************/

/// immutable definition of a racetrack area. Width is the full width of the racetrack body in meters
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(try_from = "OrbitAreaSpec")]
pub struct OrbitArea {
    first_point: GeoPoint,
    second_point: GeoPoint,
    width: f64,
    alignment: Alignment
}

impl OrbitArea {
    pub fn new (first_point: GeoPoint, second_point: GeoPoint, width: f64, alignment: Alignment) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err( OdinOrbitAreaError::InvalidWidth(width))
        }
        Ok( OrbitArea { first_point, second_point, width, alignment } )
    }

    pub fn from_length (first_point: GeoPoint, second_point: GeoPoint, width: Length, alignment: Alignment) -> Result<Self> {
        OrbitArea::new( first_point, second_point, width.get::<meter>(), alignment)
    }

    #[inline] pub fn first_point(&self) -> GeoPoint { self.first_point }
    #[inline] pub fn second_point(&self) -> GeoPoint { self.second_point }
    #[inline] pub fn alignment(&self) -> Alignment { self.alignment }

    #[inline] pub fn width(&self) -> Length { Length::new::<meter>(self.width) }
    #[inline] pub fn width_meters(&self) -> f64 { self.width }

    /// radius of the caps, which is also the lateral offset of the centerline for left/right alignment
    #[inline] pub fn radius_meters(&self) -> f64 { self.width / 2.0 }

    /// great-circle distance between first and second point in meters
    pub fn axis_length(&self) -> f64 { self.first_point.distance_to( &self.second_point) }

    /// initial bearing of the axis from first to second point
    pub fn bearing(&self) -> f64 { self.first_point.bearing_to( &self.second_point) }

    pub fn centerline(&self) -> (GeoPoint,GeoPoint) {
        racetrack::centerline( &self.first_point, &self.second_point, self.width, self.alignment)
    }

    /// the closed racetrack ring with the default number of cap segments
    pub fn ring(&self) -> Vec<GeoPoint> {
        racetrack::generate( &self.first_point, &self.second_point, self.width, self.alignment)
    }

    pub fn polygon(&self) -> GeoPolygon {
        GeoPolygon::from_exterior_geo_points( &self.ring())
    }

    pub fn polygon_with_segments(&self, segments: usize) -> GeoPolygon {
        let ring = racetrack::generate_with_segments( &self.first_point, &self.second_point, self.width, self.alignment, segments);
        GeoPolygon::from_exterior_geo_points( &ring)
    }
}

impl fmt::Display for OrbitArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrbitArea{{ {} -> {}, width: {}m, alignment: {} }}", self.first_point, self.second_point, self.width, self.alignment)
    }
}

// deserialized areas have to pass the same validation as constructed ones
#[derive(Deserialize)]
struct OrbitAreaSpec {
    first_point: GeoPoint,
    second_point: GeoPoint,
    width: f64,
    #[serde(default)]
    alignment: Alignment
}

impl TryFrom<OrbitAreaSpec> for OrbitArea {
    type Error = OdinOrbitAreaError;

    fn try_from (spec: OrbitAreaSpec) -> Result<Self> {
        OrbitArea::new( spec.first_point, spec.second_point, spec.width, spec.alignment)
    }
}

/* #endregion OrbitArea */

/* #region config **************************************************************************************************/

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct OrbitAreaConfig {
    /// number of segments per semicircular cap of generated racetrack polygons
    pub cap_segments: usize,

    /// unit for measurement labels shown during editing
    pub display_unit: DistanceUnit,
}

impl Default for OrbitAreaConfig {
    fn default() -> Self {
        OrbitAreaConfig { cap_segments: racetrack::CAP_SEGMENTS, display_unit: DistanceUnit::Meters }
    }
}

impl OrbitAreaConfig {
    pub fn check (self) -> Result<Self> {
        if self.cap_segments == 0 {
            Err( op_failed!("cap_segments has to be > 0"))
        } else {
            Ok(self)
        }
    }
}

/// load a RON config file
pub fn load_config_path<C,P> (path: P) -> Result<C> where C: for <'a> Deserialize<'a>, P: AsRef<Path> {
    let data = std::fs::read_to_string( path.as_ref())?;
    Ok( ron::from_str( &data)? )
}

/// load and check an [OrbitAreaConfig] from a RON file
pub fn load_config<P: AsRef<Path>> (path: P) -> Result<OrbitAreaConfig> {
    load_config_path::<OrbitAreaConfig,P>( path)?.check()
}

/* #endregion config */
