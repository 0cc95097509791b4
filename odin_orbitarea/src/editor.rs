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

//! the three-click orbit area editing workflow: first point, second point, width.
//!
//! Editing is modeled as a pure [transition] function over immutable [EditorState] values. The
//! [OrbitAreaEditor] owns the current state, feeds it with [EditorEvent]s in arrival order and notifies
//! registered [EditorObserver]s about processed events and completed [OrbitArea]s. Observers only get
//! shared references, i.e. they can't mutate editor state.
//!
//! ```text
//!   Inactive --start--> FirstPoint --click--> SecondPoint --click--> WidthSelection --click--> Inactive
//!                                             (hover: cursor)       (hover: cursor + alignment)
//!   any --cancel--> Inactive
//! ```
//! The alignment of a completed area is the one computed by the last hover in WidthSelection, the
//! finalizing click only determines the width.

use std::fmt;
use serde::{Serialize,Deserialize};
use tracing::{debug,info,trace};

use odin_common::geo::{GeoPoint, GeoPolygon};
use odin_common::units::{DistanceUnit, format_distance};

use crate::{Alignment, OrbitArea, OrbitAreaConfig};
use crate::alignment::classify;

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Default,Serialize,Deserialize)]
pub enum EditMode {
    #[default]
    Inactive,
    FirstPoint,
    SecondPoint,
    WidthSelection
}

/// input events. A `None` coordinate means the map collaborator could not resolve a position, which is a no-op
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub enum EditorEvent {
    Start,
    Click(Option<GeoPoint>),
    Hover(Option<GeoPoint>),
    Cancel
}

/* #region EditorState *********************************************************************************************/

#[derive(Debug,Clone,Copy,PartialEq,Default,Serialize)]
pub struct EditorState {
    mode: EditMode,
    first_point: Option<GeoPoint>,
    second_point: Option<GeoPoint>,
    cursor_position: Option<GeoPoint>,
    current_alignment: Alignment,
}

impl EditorState {
    pub fn inactive () -> Self { EditorState::default() }

    #[inline] pub fn mode (&self) -> EditMode { self.mode }
    #[inline] pub fn first_point (&self) -> Option<GeoPoint> { self.first_point }
    #[inline] pub fn second_point (&self) -> Option<GeoPoint> { self.second_point }
    #[inline] pub fn cursor_position (&self) -> Option<GeoPoint> { self.cursor_position }
    #[inline] pub fn current_alignment (&self) -> Alignment { self.current_alignment }

    #[inline] pub fn is_active (&self) -> bool { self.mode != EditMode::Inactive }

    /// the axis to preview: first point to cursor while we are placing the second point, first to second point afterwards
    pub fn preview_axis (&self) -> Option<(GeoPoint,GeoPoint)> {
        match self.mode {
            EditMode::SecondPoint => Some( (self.first_point?, self.cursor_position?) ),
            EditMode::WidthSelection => Some( (self.first_point?, self.second_point?) ),
            _ => None
        }
    }

    /// the area we would get if the cursor position was clicked now
    pub fn preview_area (&self) -> Option<OrbitArea> {
        if self.mode != EditMode::WidthSelection { return None }

        let p1 = self.first_point?;
        let p2 = self.second_point?;
        let width = 2.0 * p2.distance_to( &self.cursor_position?);
        OrbitArea::new( p1, p2, width, self.current_alignment).ok()
    }
}

impl fmt::Display for EditorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.mode)?;
        if let Some(p) = &self.first_point { write!(f, " first:{p}")?; }
        if let Some(p) = &self.second_point { write!(f, " second:{p}")?; }
        if let Some(p) = &self.cursor_position { write!(f, " cursor:{p}")?; }
        write!(f, " alignment:{}", self.current_alignment)
    }
}

/* #endregion EditorState */

/* #region transition **********************************************************************************************/

/// compute the state that follows `state` upon `event`, plus the completed area if the event finalized one.
/// Events that are not valid in the current mode leave the state unchanged
pub fn transition (state: &EditorState, event: &EditorEvent) -> (EditorState, Option<OrbitArea>) {
    use EditMode::*;
    use EditorEvent::*;

    match (state.mode, *event) {
        (_, Cancel) => (EditorState::inactive(), None),

        (Inactive, Start) => (EditorState { mode: FirstPoint, ..EditorState::inactive() }, None),

        (FirstPoint, Click(Some(p))) => (EditorState { mode: SecondPoint, first_point: Some(p), ..*state }, None),

        (SecondPoint, Hover(Some(p))) => (EditorState { cursor_position: Some(p), ..*state }, None),

        // the mouse is at the second point when width selection starts
        (SecondPoint, Click(Some(p))) => {
            (EditorState { mode: WidthSelection, second_point: Some(p), cursor_position: Some(p), ..*state }, None)
        }

        (WidthSelection, Hover(Some(p))) => {
            match (state.first_point, state.second_point) {
                (Some(p1), Some(p2)) => {
                    let current_alignment = classify( &p1, &p2, &p);
                    (EditorState { cursor_position: Some(p), current_alignment, ..*state }, None)
                }
                _ => (*state, None)
            }
        }

        (WidthSelection, Click(Some(p))) => complete( state, &p),

        _ => (*state, None)
    }
}

fn complete (state: &EditorState, p: &GeoPoint) -> (EditorState, Option<OrbitArea>) {
    if let (Some(p1), Some(p2)) = (state.first_point, state.second_point) {
        let width = 2.0 * p2.distance_to( p);

        // a click right on the second point has no width, we keep on selecting
        if let Ok(area) = OrbitArea::new( p1, p2, width, state.current_alignment) {
            return (EditorState::inactive(), Some(area))
        }
    }
    (*state, None)
}

/* #endregion transition */

/* #region observers ***********************************************************************************************/

/// read-only listener for editor activity. Both callbacks default to no-ops
pub trait EditorObserver {
    /// called for every processed event, whether or not it changed the state
    fn event_processed (&self, _prev: &EditorState, _event: &EditorEvent, _next: &EditorState) {}

    fn area_completed (&self, _area: &OrbitArea) {}
}

/// completion callback adapter
pub struct CompletionCallback(Box<dyn Fn(&OrbitArea)>);

impl CompletionCallback {
    pub fn new (f: impl Fn(&OrbitArea) + 'static) -> Self { CompletionCallback( Box::new(f)) }
}

impl EditorObserver for CompletionCallback {
    fn area_completed (&self, area: &OrbitArea) { (self.0)(area) }
}

/// debug sink that reports editor activity through `tracing`
#[derive(Debug,Default)]
pub struct TracingObserver;

impl EditorObserver for TracingObserver {
    fn event_processed (&self, prev: &EditorState, event: &EditorEvent, next: &EditorState) {
        if prev == next {
            trace!( mode = ?prev.mode(), "ignored {:?}", event);
        } else if prev.mode() != next.mode() {
            debug!( from = ?prev.mode(), to = ?next.mode(), "{:?} -> {}", event, next);
        } else {
            trace!( mode = ?next.mode(), alignment = %next.current_alignment(), "{:?}", event);
        }
    }

    fn area_completed (&self, area: &OrbitArea) {
        info!( alignment = %area.alignment(), width = area.width_meters(), "completed {}", area);
    }
}

/* #endregion observers */

/* #region OrbitAreaEditor ****************************************************************************************/

#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct Measurement {
    pub meters: f64,
    pub label: String,
}

impl Measurement {
    fn new (meters: f64, unit: DistanceUnit) -> Self {
        Measurement { meters, label: format_distance( meters, unit) }
    }
}

/// live feedback for the current editor state, formatted in the configured display unit
#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct Measurements {
    pub axis: Option<Measurement>,
    pub width: Option<Measurement>,
    pub alignment: Option<Alignment>,
}

/// the single writer of [EditorState]. Events are processed synchronously in the order they are passed in
pub struct OrbitAreaEditor {
    state: EditorState,
    config: OrbitAreaConfig,
    observers: Vec<Box<dyn EditorObserver>>,
}

impl OrbitAreaEditor {
    pub fn new () -> Self {
        OrbitAreaEditor::with_config( OrbitAreaConfig::default())
    }

    pub fn with_config (config: OrbitAreaConfig) -> Self {
        OrbitAreaEditor { state: EditorState::inactive(), config, observers: Vec::new() }
    }

    pub fn add_observer (&mut self, observer: impl EditorObserver + 'static) {
        self.observers.push( Box::new(observer));
    }

    pub fn on_completion (&mut self, f: impl Fn(&OrbitArea) + 'static) {
        self.add_observer( CompletionCallback::new(f));
    }

    #[inline] pub fn state (&self) -> &EditorState { &self.state }
    #[inline] pub fn snapshot (&self) -> EditorState { self.state }
    #[inline] pub fn config (&self) -> &OrbitAreaConfig { &self.config }
    #[inline] pub fn mode (&self) -> EditMode { self.state.mode }

    pub fn handle (&mut self, event: EditorEvent) -> Option<OrbitArea> {
        let (next, completed) = transition( &self.state, &event);
        let prev = std::mem::replace( &mut self.state, next);

        for o in &self.observers {
            o.event_processed( &prev, &event, &self.state);
        }
        if let Some(area) = &completed {
            for o in &self.observers {
                o.area_completed( area);
            }
        }

        completed
    }

    pub fn start (&mut self) { self.handle( EditorEvent::Start); }
    pub fn cancel (&mut self) { self.handle( EditorEvent::Cancel); }
    pub fn hover (&mut self, pos: Option<GeoPoint>) { self.handle( EditorEvent::Hover(pos)); }
    pub fn click (&mut self, pos: Option<GeoPoint>) -> Option<OrbitArea> { self.handle( EditorEvent::Click(pos)) }

    /// racetrack polygon of the area that would be created by clicking at the current cursor position
    pub fn preview_polygon (&self) -> Option<GeoPolygon> {
        self.state.preview_area().map( |area| area.polygon_with_segments( self.config.cap_segments))
    }

    pub fn measurements (&self) -> Measurements {
        let unit = self.config.display_unit;
        let axis = self.state.preview_axis().map( |(p1,p2)| Measurement::new( p1.distance_to(&p2), unit));
        let preview = self.state.preview_area();
        let width = preview.map( |area| Measurement::new( area.width_meters(), unit));
        let alignment = preview.map( |area| area.alignment());

        Measurements { axis, width, alignment }
    }
}

impl Default for OrbitAreaEditor {
    fn default() -> Self { OrbitAreaEditor::new() }
}

impl fmt::Debug for OrbitAreaEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrbitAreaEditor")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/* #endregion OrbitAreaEditor */
