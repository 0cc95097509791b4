/*
 * Copyright © 2024, United States Government, as represented by the Administrator of 
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

//! normalization and comparison of angles given in degrees.
//! All bearings handled by ODIN geometry code are clockwise from true north in [0,360)

// fold into [-270,270], i.e. values that don't need more than one pole reflection
#[inline]
fn fold_270 (d: f64) -> f64 {
    let x = d % 360.0;

    if x > 270.0 { x - 360.0 }
    else if x < -270.0 { x + 360.0 }
    else { x }
}

/// normalize to [-90,90] by reflecting at the poles
#[inline]
pub fn normalize_90 (d:f64) -> f64 {
    let x = fold_270(d);

    if x < -90.0 { -180.0 - x }
    else if x > 90.0 { 180.0 - x }
    else { x }
}

/// does a latitude of `d` degrees go over one of the poles, which puts the point on the opposite meridian
#[inline]
pub fn crosses_pole (d: f64) -> bool {
    fold_270(d).abs() > 90.0
}

/// normalize to [-180,180]
#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = d % 360.0;
    
    if x < -180.0 { 360.0 + x }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

/// normalize to [0,360), also for negative input. Never returns 360.0 (tiny negative values map to 0.0)
#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    ((d % 360.0) + 360.0) % 360.0
}

/// the clockwise angle in [0,360) we have to turn from `reference` to reach `angle`
#[inline]
pub fn relative_angle (reference: f64, angle: f64) -> f64 {
    normalize_360( angle - reference)
}

/// inclusive range check on a full circle. If `min > max` the range wraps through 0 (e.g. [315..45])
#[inline]
pub fn in_angle_range (angle: f64, min: f64, max: f64) -> bool {
    if min <= max {
        angle >= min && angle <= max
    } else {
        angle >= min || angle <= max
    }
}

/// smallest absolute difference between two angles in [0,180]
pub fn angle_distance (a: f64, b: f64) -> f64 {
    let d = normalize_360( a - b);
    if d > 180.0 { 360.0 - d } else { d }
}
