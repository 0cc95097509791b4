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
#![allow(uncommon_codepoints,non_snake_case)]

//! this module provides spherical great-circle geometry for geodetic points and polygons.
//! We follow odin-rs design principles by wrapping the types of the [geo](https://docs.rs/geo/latest/geo/index.html)
//! crate with the Rust [new type](https://doc.rust-lang.org/rust-by-example/generics/new_types.html) pattern,
//! which adds value semantics (normalized longitude/latitude degrees) while keeping the capability to use
//! algorithms of the foundation crate without copying.
//!
//! Distances are in meters on a sphere with [MEAN_EARTH_RADIUS], bearings are clockwise from true north in [0,360).
//! All functions are total over valid latitude/longitude ranges and never panic for finite input.

use std::fmt;
use serde::{Serialize,Deserialize};
use serde::ser::{Serialize as SerializeTrait, Serializer, SerializeStruct};

use geo::{Contains, Coord, CoordsIter, LineString, Point, Polygon};

use uom::si::f64::Length;
use uom::si::length::meter;

use crate::{sin, cos, asin, atan2, sqrt, pow2, rad, deg};
use crate::angle::{normalize_180, normalize_90, normalize_360, crosses_pole};
use crate::geo_constants::{MEAN_EARTH_RADIUS, COINCIDENT_DISTANCE};

pub type GeoCoord = Coord<f64>;

/* #region great circle functions *********************************************************************************/

/// great-circle (haversine) distance in meters. This is symmetric and non-negative
pub fn distance (a: &GeoPoint, b: &GeoPoint) -> f64 {
    let φ1 = rad( a.latitude_degrees());
    let φ2 = rad( b.latitude_degrees());
    let Δφ = φ2 - φ1;
    let Δλ = rad( b.longitude_degrees() - a.longitude_degrees());

    let h = pow2( sin(Δφ/2.0)) + cos(φ1) * cos(φ2) * pow2( sin(Δλ/2.0));
    let c = 2.0 * atan2( sqrt(h), sqrt( (1.0 - h).max(0.0)));

    MEAN_EARTH_RADIUS * c
}

/// initial great-circle bearing from `a` to `b` in degrees [0,360).
/// Coincident points do not have a direction, for which we return 0.0 (north)
pub fn bearing (a: &GeoPoint, b: &GeoPoint) -> f64 {
    if distance(a,b) < COINCIDENT_DISTANCE { return 0.0 }

    let φ1 = rad( a.latitude_degrees());
    let φ2 = rad( b.latitude_degrees());
    let Δλ = rad( b.longitude_degrees() - a.longitude_degrees());

    let y = sin(Δλ) * cos(φ2);
    let x = cos(φ1) * sin(φ2) - sin(φ1) * cos(φ2) * cos(Δλ);

    normalize_360( deg( atan2(y,x)))
}

/// the point reached by travelling `dist` meters from `origin` along a great circle with initial bearing `bearing_deg`.
/// This is the inverse of [bearing] and [distance]
pub fn destination (origin: &GeoPoint, bearing_deg: f64, dist: f64) -> GeoPoint {
    let δ = dist / MEAN_EARTH_RADIUS;  // angular distance
    let θ = rad( bearing_deg);
    let φ1 = rad( origin.latitude_degrees());
    let λ1 = rad( origin.longitude_degrees());

    let sin_φ2 = (sin(φ1) * cos(δ) + cos(φ1) * sin(δ) * cos(θ)).clamp(-1.0, 1.0);
    let φ2 = asin( sin_φ2);
    let λ2 = λ1 + atan2( sin(θ) * sin(δ) * cos(φ1), cos(δ) - sin(φ1) * sin_φ2);

    GeoPoint::from_lon_lat_degrees( deg(λ2), deg(φ2))
}

/* #endregion great circle functions */

/* #region GeoPoint ***********************************************************************************************/

/// a wrapper for geo::Point that uses geodetic degrees stored as f64 (x: longitude, y: latitude)
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(from = "LonLat", into = "LonLat")]
pub struct GeoPoint(Point);

impl GeoPoint {
    /// latitudes beyond the poles are reflected, which moves the point to the opposite meridian
    pub fn from_lon_lat_degrees (lon: f64, lat: f64) -> Self {
        let lon = if crosses_pole(lat) { lon + 180.0 } else { lon };
        GeoPoint( Point::new( normalize_180(lon), normalize_90(lat)))
    }

    /// for callers that use (latitude,longitude) order, such as most map UIs
    pub fn from_lat_lon_degrees (lat: f64, lon: f64) -> Self {
        GeoPoint::from_lon_lat_degrees( lon, lat)
    }

    #[inline] pub fn longitude_degrees(&self) -> f64 { self.0.x() }
    #[inline] pub fn latitude_degrees(&self) -> f64 { self.0.y() }

    pub fn point (&self) -> &Point { &self.0 }

    pub fn coord (&self)->GeoCoord { self.0.0 }

    #[inline] pub fn distance_to (&self, other: &GeoPoint) -> f64 { distance( self, other) }
    #[inline] pub fn bearing_to (&self, other: &GeoPoint) -> f64 { bearing( self, other) }
    #[inline] pub fn destination (&self, bearing_deg: f64, dist: f64) -> GeoPoint { destination( self, bearing_deg, dist) }

    /// uom version of [distance]
    pub fn great_circle_distance (&self, other: &GeoPoint) -> Length {
        Length::new::<meter>( distance( self, other))
    }

    /// approximate equality within `tolerance` meters
    pub fn is_near (&self, other: &GeoPoint, tolerance: f64) -> bool {
        distance( self, other) <= tolerance
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.0.x(),self.0.y())
    }
}

// serde proxy. Note that we accept "lon", "longitude" or "x" for longitude degrees and "lat", "latitude"
// or "y" for latitude degrees, which allows to directly deserialize from data that was serialized by `geo` types
#[derive(Serialize,Deserialize)]
struct LonLat {
    #[serde(alias="longitude", alias="x")]
    lon: f64,
    #[serde(alias="latitude", alias="y")]
    lat: f64
}

impl From<LonLat> for GeoPoint {
    fn from (p: LonLat) -> Self { GeoPoint::from_lon_lat_degrees( p.lon, p.lat) }
}

impl From<GeoPoint> for LonLat {
    fn from (p: GeoPoint) -> Self { LonLat { lon: p.longitude_degrees(), lat: p.latitude_degrees() } }
}

/* #endregion GeoPoint */

/* #region GeoPolygon **********************************************************************************************/

#[derive(Debug,Clone,PartialEq)]
pub struct GeoPolygon(Polygon);

impl GeoPolygon {
    /// note that geo closes the exterior ring if the first and last point differ
    pub fn from_exterior_geo_points (external: &[GeoPoint]) -> Self {
        let ext_coords: Vec<GeoCoord> = external.iter().map(|p| p.coord()).collect();
        let exterior = LineString::new( ext_coords);

        GeoPolygon( Polygon::new( exterior, Vec::with_capacity(0)))
    }

    pub fn polygon (&self) -> &Polygon { &self.0 }

    pub fn as_exterior_geo_points (&self)->Vec<GeoPoint> {
        self.0.exterior().points().map(GeoPoint).collect()
    }

    pub fn exterior_coords_count(&self)->usize { self.0.exterior().coords_count() }

    /// planar containment in lon/lat space, which is adequate for small (non-polar, non-antimeridian) polygons
    pub fn contains (&self, p: &GeoPoint)->bool { self.0.contains( &p.0) }
}

impl SerializeTrait for GeoPolygon {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut state = serializer.serialize_struct("GeoPolygon", 1)?;
        state.serialize_field("exterior", &self.as_exterior_geo_points())?;
        state.end()
    }
}

/* #endregion GeoPolygon */
