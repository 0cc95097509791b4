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

use anyhow::Result;
use serde_json::json;
use odin_common::{define_cli, check_cli, geo::GeoPoint, units::{DistanceUnit, format_distance}};
use odin_orbitarea::{Alignment, OrbitArea, racetrack::generate_with_segments};

define_cli! { ARGS [about="print orbit area and racetrack polygon as JSON"] =
    first: GeoPoint [help="first axis point as 'lon,lat' degrees", long, value_parser=parse_lon_lat, allow_hyphen_values=true],
    second: GeoPoint [help="second axis point as 'lon,lat' degrees", long, value_parser=parse_lon_lat, allow_hyphen_values=true],
    width: f64 [help="full racetrack width in meters", long],
    alignment: Alignment [help="side of the axis the racetrack extends to (left, centre, right)", long, default_value="centre"],
    segments: usize [help="number of segments per cap", long, default_value="20"],
    unit: DistanceUnit [help="display unit for measurements (m, km, nm, ft)", long, default_value="m"]
}

fn parse_lon_lat (s: &str) -> std::result::Result<GeoPoint,String> {
    let mut it = s.split(',').map( |v| v.trim().parse::<f64>());
    match (it.next(), it.next(), it.next()) {
        (Some(Ok(lon)), Some(Ok(lat)), None) => Ok( GeoPoint::from_lon_lat_degrees( lon, lat)),
        _ => Err( format!("expected 'lon,lat' degrees, got '{s}'"))
    }
}

fn main () -> Result<()> {
    check_cli!(ARGS);
    tracing_subscriber::fmt::init();

    let area = OrbitArea::new( ARGS.first, ARGS.second, ARGS.width, ARGS.alignment)?;
    let ring = generate_with_segments( &area.first_point(), &area.second_point(), area.width_meters(), area.alignment(), ARGS.segments);
    tracing::debug!( points = ring.len(), "generated racetrack ring for {}", area);

    let output = json!({
        "area": area,
        "axis": format_distance( area.axis_length(), ARGS.unit),
        "width": format_distance( area.width_meters(), ARGS.unit),
        "bearing": area.bearing(),
        "ring": ring
    });
    println!("{}", serde_json::to_string_pretty( &output)?);

    Ok(())
}
