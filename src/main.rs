//! rpunch main entrypoint.

use rpunch::run;
use rpunch::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
