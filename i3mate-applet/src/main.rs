//! Standalone host for the i3mate applet: a plain GTK window holding the
//! applet container. A panel embedding the applet calls
//! [`i3mate_applet::create`] against its own container instead.

use gtk4::{self as gtk, prelude::*};
use tracing::{error, info};

use i3mate_applet::{create, APPLET_KIND};

const APP_ID: &str = "org.i3mate.Applet";

fn build_ui(app: &gtk::Application) {
    let container = gtk::Box::new(gtk::Orientation::Horizontal, 0);

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("i3mate")
        .default_width(480)
        .default_height(32)
        .child(&container)
        .build();

    match create(&container, APPLET_KIND) {
        Ok(true) => {
            window.present();
            info!("i3mate applet presented");
        }
        Ok(false) => {
            // Cannot happen with our own kind string, but stay graceful.
            error!("applet factory refused kind '{APPLET_KIND}'");
            std::process::exit(1);
        }
        Err(err) => {
            error!("i3mate failed to initialize: {err}");
            std::process::exit(1);
        }
    }
}

fn main() {
    i3mate_core::logging::init_minimal_logging();

    let app = gtk::Application::new(Some(APP_ID), Default::default());
    app.connect_activate(build_ui);

    let exit_code: i32 = app.run().into();
    std::process::exit(exit_code);
}
