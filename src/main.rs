//! Browser entry point for the client-side rendered app.
//!
//! Built with `trunk serve` / `trunk build`, which compile the `csr`
//! feature for wasm32. Without that feature this binary is a no-op so
//! `cargo test` keeps working on the host.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        leptos::mount::mount_to_body(vizboard::app::App);
    }
}
