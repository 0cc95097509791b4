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

//! display units for lengths. Internally ODIN geometry is always in meters (either as raw f64 or
//! as `uom` [Length]), conversion into one of the [DistanceUnit] display units only happens at the
//! formatting boundary

use std::{fmt, str::FromStr};
use serde::{Serialize,Deserialize};
use uom::si::{f64::Length, length::{meter,kilometer,nautical_mile}};

use crate::geo_constants::{KILOMETERS_PER_METER, NAUTICAL_MILES_PER_METER, FEET_PER_METER};

#[inline]
pub fn meters (len: f64)-> Length { Length::new::<meter>(len) }

#[inline]
pub fn kilometers (len: f64)-> Length { Length::new::<kilometer>(len) }

#[inline]
pub fn nautical_miles (len: f64)-> Length { Length::new::<nautical_mile>(len) }

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Default,Serialize,Deserialize)]
pub enum DistanceUnit {
    #[default]
    Meters,
    Kilometers,
    NauticalMiles,
    Feet
}

impl DistanceUnit {
    pub const ALL: [DistanceUnit;4] = [DistanceUnit::Meters, DistanceUnit::Kilometers, DistanceUnit::NauticalMiles, DistanceUnit::Feet];

    /// multiplier to get from meters to this unit
    pub fn factor (&self) -> f64 {
        match self {
            DistanceUnit::Meters => 1.0,
            DistanceUnit::Kilometers => KILOMETERS_PER_METER,
            DistanceUnit::NauticalMiles => NAUTICAL_MILES_PER_METER,
            DistanceUnit::Feet => FEET_PER_METER,
        }
    }

    pub fn label (&self) -> &'static str {
        match self {
            DistanceUnit::Meters => "m",
            DistanceUnit::Kilometers => "km",
            DistanceUnit::NauticalMiles => "NM",
            DistanceUnit::Feet => "ft",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for DistanceUnit {
    type Err = String;

    fn from_str (s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "m" | "meter" | "meters" => Ok(DistanceUnit::Meters),
            "km" | "kilometer" | "kilometers" => Ok(DistanceUnit::Kilometers),
            "nm" | "nmi" | "nautical_miles" | "nauticalmiles" => Ok(DistanceUnit::NauticalMiles),
            "ft" | "feet" => Ok(DistanceUnit::Feet),
            _ => Err( format!("unknown distance unit '{s}'"))
        }
    }
}

/// linear scaling of a raw meter value into `unit`
#[inline]
pub fn convert_meters (m: f64, unit: DistanceUnit) -> f64 {
    m * unit.factor()
}

pub fn convert (len: Length, unit: DistanceUnit) -> f64 {
    convert_meters( len.get::<meter>(), unit)
}

pub fn unit_label (unit: DistanceUnit) -> &'static str {
    unit.label()
}

/// e.g. "1.25 km"
pub fn format_distance (m: f64, unit: DistanceUnit) -> String {
    format!("{:.2} {}", convert_meters( m, unit), unit.label())
}
