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

use std::{cell::RefCell, rc::Rc};
use anyhow::Result;
use serde_json::json;
use odin_common::{define_cli, check_cli};
use odin_orbitarea::{
    load_config, load_config_path, OrbitArea, OrbitAreaConfig,
    editor::{EditorEvent, OrbitAreaEditor, TracingObserver}
};

define_cli! { ARGS [about="replay a RON list of orbit area editor events and print completed areas as JSON"] =
    config: Option<String> [help="optional RON config file (defaults: 20 cap segments, meters)", long],
    events: String [help="RON file with a list of editor events, e.g. [Start, Click(Some((lon:-122.0,lat:37.0))), ..]"]
}

fn main () -> Result<()> {
    check_cli!(ARGS);
    tracing_subscriber::fmt::init();

    let config = match &ARGS.config {
        Some(path) => load_config( path)?,
        None => OrbitAreaConfig::default()
    };
    let events: Vec<EditorEvent> = load_config_path( &ARGS.events)?;

    let completed: Rc<RefCell<Vec<OrbitArea>>> = Rc::new( RefCell::new( Vec::new()));
    let mut editor = OrbitAreaEditor::with_config( config);
    editor.add_observer( TracingObserver);
    {
        let completed = completed.clone();
        editor.on_completion( move |area| completed.borrow_mut().push( *area));
    }

    for event in events {
        editor.handle( event);
        if editor.state().preview_area().is_some() {
            let m = editor.measurements();
            println!("preview: {}", serde_json::to_string( &m)?);
        }
    }

    for area in completed.borrow().iter() {
        let output = json!({
            "area": area,
            "polygon": area.polygon_with_segments( editor.config().cap_segments)
        });
        println!("{}", serde_json::to_string_pretty( &output)?);
    }

    if editor.state().is_active() {
        println!("unfinished edit: {}", editor.state());
    }

    Ok(())
}
