//! Fichalia main entrypoint.

use fichalia::run;
use fichalia::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
