//! Orient a jittered canopy grid and print the resulting angles.
//!
//! Usage:
//!   cargo run -p orient --example canopy_grid
//!   cargo run -p orient --example canopy_grid -- 12 8

use orient::api::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let nx = args.next().and_then(|s| s.parse().ok()).unwrap_or(6);
    let ny = args.next().and_then(|s| s.parse().ok()).unwrap_or(4);
    let model = draw_grid_model(
        GridCfg {
            nx,
            ny,
            ..GridCfg::default()
        },
        ReplayToken { seed: 7, index: 0 },
    );
    match orient_model(&model, &[], GeomCfg::default()) {
        Ok(report) => {
            println!(
                "bars: {}  oriented: {}  skipped: {}",
                model.bars().len(),
                report.angles.len(),
                report.skipped.total()
            );
            for (bar, deg) in &report.angles {
                println!("bar {:>4}  gamma {:>8.3}", bar, deg);
            }
        }
        Err(e) => eprintln!("orientation failed: {e}"),
    }
}
