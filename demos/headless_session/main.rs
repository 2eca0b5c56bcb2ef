//! Headless session demo
//!
//! Replays a short scripted AR session: the surface is found, the user places
//! two boxes, tracking drops out for a frame (the place press is ignored), and
//! the colour switch is flipped.
//!
//! Run with `RUST_LOG=debug cargo run --example headless_session` to see
//! every state change.

use anyhow::Context;
use ar_placement::prelude::*;

fn surface_hit(x: f32, z: f32) -> AppEvent {
    AppEvent::HitTest(vec![HitTestResult::at(Vector3::new(x, 0.0, z))])
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut app = ar_placement::default();
    app.start().context("failed to start AR app")?;

    let script = vec![
        AppEvent::EnterXr,
        AppEvent::HitTest(Vec::new()),
        surface_hit(0.0, -1.0),
        AppEvent::PlaceClicked,
        surface_hit(0.4, -1.2),
        AppEvent::PlaceClicked,
        AppEvent::HitTest(Vec::new()),
        AppEvent::PlaceClicked,
        AppEvent::ToggleColorClicked,
    ];
    for event in script {
        app.push_event(event);
    }

    let dispatched = app.run_pending().context("event dispatch failed")?;
    log::info!("Dispatched {} events", dispatched);

    let controller = app
        .controller()
        .context("controller missing after start")?;

    println!("{}", ar_placement::ui::OVERLAY_HEADING);
    println!("Session state: {}", app.session().state());
    println!("Overlay: [{}] {}", ar_placement::ui::PLACE_BUTTON_LABEL, app.overlay().color_label());
    println!("Selected material: {}", controller.selected_material());
    println!("Placed instances: {}", controller.placed_count());

    for instance in controller.placed_instances() {
        let object = app
            .scene()
            .get_object(instance.handle())
            .context("placed instance missing from scene")?;
        let material = app.scene().get_material_for_object(object);
        println!(
            "  {:<10} at ({:.2}, {:.2}, {:.2}) emissive {:?}",
            object.name,
            instance.pose().position.x,
            instance.pose().position.y,
            instance.pose().position.z,
            material.emissive
        );
    }

    let stats = app.scene().get_statistics();
    println!("{:?}", stats);

    Ok(())
}
