//! rtreports main entrypoint.

use rtreports::run;
use rtreports::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
