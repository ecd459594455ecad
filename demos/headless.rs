use maplet_bounce::prelude::*;

/// Example of driving a bouncing marker without any UI: sample the plan the way a
/// render loop would and print what should be on screen.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Maplet Bounce Headless Example");
    println!("==============================");

    let engine = TimingEngine::new();
    let marker = Point::new(512, 384);

    for (name, profile) in [
        ("default", BounceProfile::Default),
        ("subtle", BounceProfile::Subtle),
        ("energetic", BounceProfile::Energetic),
    ] {
        let options = profile.resolve();
        let plan = BouncePlan::build(&engine, &options, marker, Some(marker), MARKER_ICON_SIZE.1)?;

        println!(
            "\n{}: height {}px, {} frames, cycle of {} time units",
            name,
            options.bounce_height,
            plan.frames().len(),
            plan.duration()
        );

        // Sample at a fixed frame interval, as a 60fps loop with 1 unit = 1ms would
        let mut elapsed = 0.0;
        while elapsed <= plan.duration() {
            match plan.frame_at(elapsed) {
                Some(frame) => {
                    let shadow = frame
                        .shadow
                        .map(|t| t.translate.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    println!(
                        "  t={:>6.1} {:?} step {:>2}  icon {}  shadow {}",
                        elapsed, frame.phase, frame.step, frame.icon, shadow
                    );
                }
                None => println!("  t={:>6.1} at rest", elapsed),
            }
            elapsed += 16.67;
        }
    }

    println!("\nCached sequences: {}", engine.cache().len());
    Ok(())
}
