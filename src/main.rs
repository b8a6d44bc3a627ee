//! godep2dep binary entry point.

use godep2dep::cli;
use godep2dep::ui::output;

fn main() {
    if let Err(err) = cli::run() {
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
