//! Task List Frontend Entry Point

use leptos::prelude::*;
use task_list_ui::app::App;
use task_list_ui::{config, logger};

fn main() {
    console_error_panic_hook::set_once();
    logger::init(config::log_level());
    mount_to_body(App);
}
