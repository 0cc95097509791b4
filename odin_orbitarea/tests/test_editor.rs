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
#![allow(unused)]

use std::{cell::RefCell, rc::Rc};
use odin_common::geo::GeoPoint;
use odin_common::units::DistanceUnit;
use odin_orbitarea::{Alignment, OrbitArea, OrbitAreaConfig, load_config_path};
use odin_orbitarea::alignment::classify;
use odin_orbitarea::editor::*;

// run with "cargo test test_three_click_workflow -- --nocapture"

fn p1 () -> GeoPoint { GeoPoint::from_lon_lat_degrees( -121.0, 38.0) }
fn p2 () -> GeoPoint { p1().destination( 0.0, 10_000.0) }

/// records everything it observes
#[derive(Default)]
struct Recorder {
    events: Rc<RefCell<Vec<(EditMode,EditorEvent,EditMode)>>>,
    areas: Rc<RefCell<Vec<OrbitArea>>>,
}

impl EditorObserver for Recorder {
    fn event_processed (&self, prev: &EditorState, event: &EditorEvent, next: &EditorState) {
        self.events.borrow_mut().push( (prev.mode(), *event, next.mode()));
    }
    fn area_completed (&self, area: &OrbitArea) {
        self.areas.borrow_mut().push( *area);
    }
}

#[test]
fn test_three_click_workflow () {
    let (p1,p2) = (p1(),p2());
    let p3 = p2.destination( 90.0, 700.0);  // east of second point
    let p4 = p2.destination( 300.0, 400.0); // west-ish, but only used for the width

    let mut editor = OrbitAreaEditor::new();
    editor.add_observer( TracingObserver);
    assert_eq!( editor.mode(), EditMode::Inactive);

    editor.start();
    assert_eq!( editor.mode(), EditMode::FirstPoint);

    assert!( editor.click( Some(p1)).is_none());
    assert_eq!( editor.mode(), EditMode::SecondPoint);
    assert_eq!( editor.state().first_point(), Some(p1));

    assert!( editor.click( Some(p2)).is_none());
    assert_eq!( editor.mode(), EditMode::WidthSelection);
    assert_eq!( editor.state().second_point(), Some(p2));

    editor.hover( Some(p3));
    let expected_alignment = classify( &p1, &p2, &p3);
    assert_eq!( expected_alignment, Alignment::Right);
    assert_eq!( editor.state().current_alignment(), expected_alignment);
    assert_eq!( editor.state().cursor_position(), Some(p3));

    let area = editor.click( Some(p4)).unwrap();
    println!("completed: {area}");

    // alignment comes from the last hover (p3), the width from the click (p4)
    assert_eq!( classify( &p1, &p2, &p4), Alignment::Left);
    assert_eq!( area.alignment(), Alignment::Right);
    assert_eq!( area.first_point(), p1);
    assert_eq!( area.second_point(), p2);
    assert!( (area.width_meters() - 2.0 * p2.distance_to(&p4)).abs() < 1e-9);
    assert!( (area.width_meters() - 800.0).abs() < 0.01);

    assert_eq!( editor.mode(), EditMode::Inactive);
    assert_eq!( *editor.state(), EditorState::inactive());
}

#[test]
fn test_pure_transitions () {
    let (p1,p2) = (p1(),p2());

    let s0 = EditorState::inactive();
    let (s1, a) = transition( &s0, &EditorEvent::Start);
    assert!( a.is_none());
    assert_eq!( s1.mode(), EditMode::FirstPoint);
    assert_eq!( s0.mode(), EditMode::Inactive); // input state is a value, not touched

    let (s2, _) = transition( &s1, &EditorEvent::Click(Some(p1)));
    let (s3, _) = transition( &s2, &EditorEvent::Click(Some(p2)));
    assert_eq!( s3.mode(), EditMode::WidthSelection);

    // width selection starts with the cursor at the second point
    assert_eq!( s3.cursor_position(), Some(p2));
    assert_eq!( s3.current_alignment(), Alignment::Centre);

    // replaying the same event on the same state yields the same result
    let west = p2.destination( 270.0, 500.0);
    let (s4a, _) = transition( &s3, &EditorEvent::Hover(Some(west)));
    let (s4b, _) = transition( &s3, &EditorEvent::Hover(Some(west)));
    assert_eq!( s4a, s4b);
    assert_eq!( s4a.current_alignment(), Alignment::Left);
}

#[test]
fn test_hover_in_second_point_mode () {
    let mut editor = OrbitAreaEditor::new();
    editor.start();
    editor.click( Some(p1()));

    let east = p1().destination( 90.0, 5000.0);
    editor.hover( Some(east));

    assert_eq!( editor.mode(), EditMode::SecondPoint);
    assert_eq!( editor.state().cursor_position(), Some(east));
    assert_eq!( editor.state().current_alignment(), Alignment::Centre); // no alignment computation yet
    assert_eq!( editor.state().preview_axis(), Some((p1(), east)));
}

#[test]
fn test_click_without_hover_uses_centre () {
    let mut editor = OrbitAreaEditor::new();
    editor.start();
    editor.click( Some(p1()));
    editor.click( Some(p2()));

    let area = editor.click( Some(p2().destination( 90.0, 300.0))).unwrap();
    assert_eq!( area.alignment(), Alignment::Centre);
    assert!( (area.width_meters() - 600.0).abs() < 0.01);
}

#[test]
fn test_zero_width_click_ignored () {
    let mut editor = OrbitAreaEditor::new();
    editor.start();
    editor.click( Some(p1()));
    editor.click( Some(p2()));

    let before = editor.snapshot();
    assert!( editor.click( Some(p2())).is_none());
    assert_eq!( editor.mode(), EditMode::WidthSelection);
    assert_eq!( editor.snapshot(), before);
}

#[test]
fn test_cancel_from_any_state () {
    let (p1,p2) = (p1(),p2());
    let scripts: Vec<Vec<EditorEvent>> = vec![
        vec![],
        vec![ EditorEvent::Start ],
        vec![ EditorEvent::Start, EditorEvent::Click(Some(p1)) ],
        vec![ EditorEvent::Start, EditorEvent::Click(Some(p1)), EditorEvent::Click(Some(p2)), EditorEvent::Hover(Some(p1)) ],
    ];

    for script in scripts {
        let mut editor = OrbitAreaEditor::new();
        for e in script { editor.handle(e); }
        let mode = editor.mode();

        editor.cancel();
        println!("  cancel from {mode:?} ✅");
        assert_eq!( *editor.state(), EditorState::inactive());
    }
}

#[test]
fn test_out_of_sequence_events () {
    let (p1,p2) = (p1(),p2());
    let mut editor = OrbitAreaEditor::new();

    // nothing happens before start
    editor.click( Some(p1));
    editor.hover( Some(p1));
    assert_eq!( *editor.state(), EditorState::inactive());

    editor.start();
    let s = editor.snapshot();

    // unresolvable positions and hover in first point mode are no-ops, as is a second start
    editor.click( None);
    editor.hover( None);
    editor.hover( Some(p2));
    editor.start();
    assert_eq!( editor.snapshot(), s);

    editor.click( Some(p1));
    editor.click( Some(p2));
    let s = editor.snapshot();
    editor.hover( None);
    assert!( editor.click( None).is_none());
    assert_eq!( editor.snapshot(), s);
}

#[test]
fn test_observers () {
    let (p1,p2) = (p1(),p2());
    let recorder = Recorder::default();
    let events = recorder.events.clone();
    let areas = recorder.areas.clone();

    let n_callbacks = Rc::new( RefCell::new(0));

    let mut editor = OrbitAreaEditor::new();
    editor.add_observer( recorder);
    {
        let n_callbacks = n_callbacks.clone();
        editor.on_completion( move |_| *n_callbacks.borrow_mut() += 1);
    }

    for _ in 0..2 {
        editor.start();
        editor.click( Some(p1));
        editor.click( Some(p2));
        editor.hover( Some(p2.destination( 270.0, 100.0)));
        editor.click( Some(p2.destination( 270.0, 100.0)));
    }
    editor.click( Some(p1)); // ignored, but still observed

    assert_eq!( *n_callbacks.borrow(), 2);
    assert_eq!( areas.borrow().len(), 2);
    assert!( areas.borrow().iter().all( |a| a.alignment() == Alignment::Left));

    let events = events.borrow();
    assert_eq!( events.len(), 11);
    assert_eq!( events[0], (EditMode::Inactive, EditorEvent::Start, EditMode::FirstPoint));
    assert_eq!( events[4].0, EditMode::WidthSelection);
    assert_eq!( events[4].2, EditMode::Inactive);
    assert_eq!( events[10].0, EditMode::Inactive);
    assert_eq!( events[10].2, EditMode::Inactive);
}

#[test]
fn test_preview_and_measurements () {
    let (p1,p2) = (p1(),p2());
    let config = OrbitAreaConfig { cap_segments: 10, display_unit: DistanceUnit::Kilometers };
    let mut editor = OrbitAreaEditor::with_config( config);

    assert!( editor.preview_polygon().is_none());
    assert_eq!( editor.measurements().axis, None);

    editor.start();
    editor.click( Some(p1));
    editor.hover( Some(p2));
    let m = editor.measurements();
    assert_eq!( m.axis.as_ref().map( |a| a.label.as_str()), Some("10.00 km"));
    assert_eq!( m.width, None);

    editor.click( Some(p2));
    assert!( editor.preview_polygon().is_none()); // cursor still at second point, no width yet

    editor.hover( Some(p2.destination( 90.0, 1500.0)));
    let preview = editor.state().preview_area().unwrap();
    assert_eq!( preview.alignment(), Alignment::Right);
    assert!( (preview.width_meters() - 3000.0).abs() < 0.01);

    let polygon = editor.preview_polygon().unwrap();
    assert_eq!( polygon.exterior_coords_count(), 2 * (10 + 1) + 1);

    let m = editor.measurements();
    println!("measurements: {m:?}");
    assert_eq!( m.width.as_ref().map( |w| w.label.as_str()), Some("3.00 km"));
    assert_eq!( m.alignment, Some(Alignment::Right));
}

#[test]
fn test_replay_recorded_session () {
    let path = concat!( env!("CARGO_MANIFEST_DIR"), "/tests/data/edit_session.ron");
    let events: Vec<EditorEvent> = load_config_path( path).unwrap();
    assert_eq!( events.len(), 13);

    let mut editor = OrbitAreaEditor::new();
    let completed: Vec<OrbitArea> = events.into_iter().filter_map( |e| editor.handle(e)).collect();

    assert_eq!( completed.len(), 1);
    let area = &completed[0];
    println!("replayed: {area}");
    assert_eq!( area.alignment(), Alignment::Right);
    assert_eq!( area.first_point(), GeoPoint::from_lon_lat_degrees( -121.0, 38.0));
    assert_eq!( area.second_point(), GeoPoint::from_lon_lat_degrees( -121.0, 38.09));
    assert_eq!( editor.mode(), EditMode::Inactive);
}

#[test]
fn test_hover_on_pivot () {
    // eastbound axis: a hover right on the second point has no direction of its own and classifies as left
    let q1 = GeoPoint::from_lon_lat_degrees( 0.0, 0.0);
    let q2 = q1.destination( 90.0, 5000.0);

    let mut editor = OrbitAreaEditor::new();
    editor.start();
    editor.click( Some(q1));
    editor.click( Some(q2));
    assert_eq!( editor.state().current_alignment(), Alignment::Centre);

    editor.hover( Some(q2));
    assert_eq!( editor.state().current_alignment(), Alignment::Left);

    let area = editor.click( Some(q2.destination( 0.0, 300.0))).unwrap();
    assert_eq!( area.alignment(), Alignment::Left);
    assert!( (area.width_meters() - 600.0).abs() < 0.01);
}
