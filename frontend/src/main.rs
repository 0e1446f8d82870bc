// The browser entry point is `start` in the library.
fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("hr-dashboard-frontend runs in the browser; build it with trunk.");
}
