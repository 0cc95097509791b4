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

//! classification of a probe point into one of the [Alignment] values relative to a reference axis.
//!
//! The reference axis is given by a start and an end (pivot) point. The probe direction is the bearing from
//! the pivot to the probe, which is rotated by the axis bearing and then looked up in a static table of
//! four angular quadrants. Forward and backward quadrants both map to [Alignment::Centre].

use odin_common::angle::{in_angle_range, relative_angle};
use odin_common::geo::{GeoPoint, bearing};

use crate::Alignment;

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Quadrant {
    ForwardCentre,
    Right,
    BackwardCentre,
    Left
}

/// angular range relative to the axis bearing. Both bounds are inclusive, `min_angle > max_angle` wraps through 0
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct AngularQuadrant {
    pub quadrant: Quadrant,
    pub min_angle: f64,
    pub max_angle: f64,
    pub alignment: Alignment
}

impl AngularQuadrant {
    #[inline]
    pub fn contains (&self, relative: f64) -> bool {
        in_angle_range( relative, self.min_angle, self.max_angle)
    }

    #[inline]
    pub fn wraps (&self) -> bool { self.min_angle > self.max_angle }
}

/// scan order matters - shared boundaries (45,135,225,315) go to the first matching quadrant
pub static QUADRANTS: [AngularQuadrant;4] = [
    AngularQuadrant { quadrant: Quadrant::ForwardCentre,  min_angle: 315.0, max_angle:  45.0, alignment: Alignment::Centre },
    AngularQuadrant { quadrant: Quadrant::Right,          min_angle:  45.0, max_angle: 135.0, alignment: Alignment::Right },
    AngularQuadrant { quadrant: Quadrant::BackwardCentre, min_angle: 135.0, max_angle: 225.0, alignment: Alignment::Centre },
    AngularQuadrant { quadrant: Quadrant::Left,           min_angle: 225.0, max_angle: 315.0, alignment: Alignment::Left },
];

pub fn find_quadrant (relative: f64) -> Option<&'static AngularQuadrant> {
    QUADRANTS.iter().find( |q| q.contains( relative))
}

/// alignment for an angle relative to the axis bearing in [0,360).
/// Falls back to centre if no quadrant matches, which would indicate a gap in [QUADRANTS]
pub fn classify_relative_angle (relative: f64) -> Alignment {
    find_quadrant( relative).map( |q| q.alignment).unwrap_or( Alignment::Centre)
}

/// clockwise angle of the probe direction (seen from `axis_end`) relative to the axis bearing
pub fn probe_angle (axis_start: &GeoPoint, axis_end: &GeoPoint, probe: &GeoPoint) -> f64 {
    let main_bearing = bearing( axis_start, axis_end);
    let probe_bearing = bearing( axis_end, probe);
    relative_angle( main_bearing, probe_bearing)
}

/// on which side of the axis `axis_start`->`axis_end` is `probe`, as seen from the pivot `axis_end`
pub fn classify (axis_start: &GeoPoint, axis_end: &GeoPoint, probe: &GeoPoint) -> Alignment {
    classify_relative_angle( probe_angle( axis_start, axis_end, probe))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadrant_table_coverage() {
        // every integer and half degree has to be matched by at least one quadrant
        for i in 0..720 {
            let a = i as f64 * 0.5;
            assert!( find_quadrant(a).is_some(), "gap at {a}");
        }
        assert_eq!( QUADRANTS.iter().filter( |q| q.wraps()).count(), 1);
    }
}
