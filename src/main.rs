//! rShiftChart main entrypoint.

use rshiftchart::run;
use rshiftchart::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        // 2 = bad input, 1 = internal failure
        std::process::exit(if e.is_client_error() { 2 } else { 1 });
    }
}
