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

//! generation of closed racetrack rings (a rectangle with two semicircular caps) on the sphere.
//!
//! The racetrack is built around a centerline, which is the axis itself for centre alignment or the axis
//! shifted sideways by the cap radius for left/right alignment. In the latter case the edge of the racetrack
//! body runs along the original axis.
//! Each cap is tessellated with a fixed number of segments, independent of its radius. Rings are clockwise
//! (in bearing terms), start at the `bearing+90` point of the first cap and end with a copy of that point.

use odin_common::angle::normalize_360;
use odin_common::geo::{GeoPoint, bearing, destination};

use crate::Alignment;

/// number of segments per semicircular cap
pub const CAP_SEGMENTS: usize = 20;

/// ring size for a given number of cap segments (two caps with segments+1 points each plus closing point)
pub const fn ring_len (segments: usize) -> usize { 2 * (segments + 1) + 1 }

/// the (possibly offset) line the racetrack is built around
pub fn centerline (first: &GeoPoint, second: &GeoPoint, width: f64, alignment: Alignment) -> (GeoPoint,GeoPoint) {
    let axis_bearing = bearing( first, second);
    let radius = width / 2.0;

    let offset_bearing = match alignment {
        Alignment::Centre => return (*first, *second),
        Alignment::Left => axis_bearing - 90.0,
        Alignment::Right => axis_bearing + 90.0,
    };

    (destination( first, offset_bearing, radius), destination( second, offset_bearing, radius))
}

/// points of a circular arc around `center` sweeping clockwise from `start_bearing` to `end_bearing`.
/// Returns `segments + 1` points including both end points
pub fn cap (center: &GeoPoint, start_bearing: f64, end_bearing: f64, radius: f64, segments: usize) -> Vec<GeoPoint> {
    let segments = segments.max(1);
    let start = normalize_360( start_bearing);
    let mut end = normalize_360( end_bearing);
    if start > end { end += 360.0 }

    let step = (end - start) / segments as f64;

    (0..=segments).map( |i| {
        let b = start + step * i as f64;
        destination( center, b, radius)
    }).collect()
}

/// closed racetrack ring for the given axis with [CAP_SEGMENTS] segments per cap
pub fn generate (first: &GeoPoint, second: &GeoPoint, width: f64, alignment: Alignment) -> Vec<GeoPoint> {
    generate_with_segments( first, second, width, alignment, CAP_SEGMENTS)
}

/// closed racetrack ring with a fixed number of `segments` per cap (clamped to at least 1).
/// Coincident first and second points produce a full circle around the (single) centerline point
pub fn generate_with_segments (first: &GeoPoint, second: &GeoPoint, width: f64, alignment: Alignment, segments: usize) -> Vec<GeoPoint> {
    let segments = segments.max(1);
    let axis_bearing = bearing( first, second);
    let radius = width / 2.0;
    let (c1, c2) = centerline( first, second, width, alignment);

    let mut ring: Vec<GeoPoint> = Vec::with_capacity( ring_len( segments));

    // back cap around the first centerline point, sweeping through bearing+180
    ring.extend( cap( &c1, axis_bearing + 90.0, axis_bearing - 90.0, radius, segments));

    // front cap around the second centerline point, sweeping through bearing
    ring.extend( cap( &c2, axis_bearing - 90.0, axis_bearing + 90.0, radius, segments));

    if let Some(p) = ring.first().copied() {
        ring.push(p);
    }

    ring
}
