fn main() {
    if let Err(e) = hotel_console_frontend::run() {
        tracing::error!(error = %e, "Failed to start hotel console");
    }
}
