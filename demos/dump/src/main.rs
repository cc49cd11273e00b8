#[macro_use]
extern crate cfg_if;

mod app;
mod dump_listener;

cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        compile_error!("the dump demo drives a wall clock and runs natively only");
    }
}

use app::App;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut app = App::new();
    while app.update() {}
    app.finish();
}
