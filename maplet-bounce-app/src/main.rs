use anyhow::Context;
use maplet_bounce::{
    constants::MARKER_ICON_SIZE, BounceOptions, BouncePlan, Point, TimingEngine,
};

/// Marker position used for previews, in pane pixels
const PREVIEW_ORIGIN: Point = Point { x: 200, y: 300 };

/// Print the bounce plan of a marker as JSON.
///
/// Usage: `maplet-bounce-app [options.json]`. Without a file the default options are used.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read bounce options from {}", path))?;
            BounceOptions::from_json(&json)
                .with_context(|| format!("invalid bounce options in {}", path))?
        }
        None => BounceOptions::default(),
    };
    log::info!("previewing bounce with {:?}", options);

    let engine = TimingEngine::new();
    let plan = BouncePlan::build(
        &engine,
        &options,
        PREVIEW_ORIGIN,
        Some(PREVIEW_ORIGIN),
        MARKER_ICON_SIZE.1,
    )?;

    println!("{}", serde_json::to_string_pretty(&plan)?);
    log::info!(
        "{} frames, one cycle lasts {} time units",
        plan.frames().len(),
        plan.duration()
    );

    Ok(())
}
