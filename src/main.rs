// The binary only mounts the app; every other dependency is used by the lib.
#![allow(unused_crate_dependencies)]

use spam_guard_site::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
