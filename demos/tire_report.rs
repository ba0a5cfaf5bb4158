//! Print a random tire and a few wheel summaries
//!
//! Run with:
//!   RUST_LOG=tire_kit=trace cargo run --example tire_report

use tire_kit::create_random_tire;
use tire_kit::format_size_of_wheels;
use tire_kit::format_wheel_identifier;
use tire_kit::func_with_no_return;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .init();
    info!("Logging initialised");

    let tire = create_random_tire();
    println!("Tire pressure: {:.2}", tire.pressure);
    println!("Tire material: {}", tire.material);
    println!(
        "Tire size: {:.2} width, {:.2} height",
        tire.size.width, tire.size.height
    );
    println!(
        "The tire has an aspect ratio of {:.2}",
        tire.size.aspect_ratio()
    );

    println!("{}", format_wheel_identifier(&[77, 42, 69]));
    println!("{}", format_size_of_wheels(&[77, 42, 69]));
    println!("{}", format_size_of_wheels(&[77, 42, 69, 30]));
    func_with_no_return();
}
