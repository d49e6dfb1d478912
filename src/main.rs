use leptos::prelude::*;
use particles_background::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App);
}
