//! gapinspect main entrypoint.

use gapinspect::run;
use gapinspect::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
