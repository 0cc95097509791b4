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

//! geodetic and unit constants that should be consistent throughout ODIN applications.
//! Great-circle computations use a spherical earth with the mean radius

/// mean earth radius in meters
pub const MEAN_EARTH_RADIUS: f64 = 6371000.0; 

/// two points closer than this (in meters) are considered coincident, i.e. have no defined bearing
pub const COINCIDENT_DISTANCE: f64 = 1.0e-6;

// display conversion factors from meters (rounded as shown to users)
pub const KILOMETERS_PER_METER: f64 = 0.001;
pub const NAUTICAL_MILES_PER_METER: f64 = 0.000539957;
pub const FEET_PER_METER: f64 = 3.28084;
