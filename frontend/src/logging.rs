// Browser console sink for the `log` facade, plus readable panics.
use log::LevelFilter;

/// Install the panic hook and the console logger at `level`. `Off` installs
/// no logger at all.
pub fn init(level: LevelFilter) {
    console_error_panic_hook::set_once();

    if let Some(level) = level.to_level() {
        wasm_logger::init(wasm_logger::Config::new(level));
    }
}
