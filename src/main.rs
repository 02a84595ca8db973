#[tokio::main]
async fn main() {
  // Minimal CLI: support --version/-V
  let mut args = std::env::args().skip(1);
  if let Some(arg) = args.next() {
    if arg == "--version" || arg == "-V" {
      println!("mailbin {}", env!("CARGO_PKG_VERSION"));
      return;
    }
    // Allow running without args; any other arg prints help
    if arg == "--help" || arg == "-h" {
      eprintln!("Usage: mailbin [--version]");
      eprintln!();
      eprintln!("Configuration is read from the environment:");
      eprintln!("  MAILBIN_DATABASE, MAILBIN_ADDR, MAILBIN_UPLOAD_DIR, MAILBIN_STATIC_DIR,");
      eprintln!("  MAILBIN_FALLBACK_DOMAIN, MAILBIN_WEBHOOK_TOKEN, CF_API_TOKEN, CF_ACCOUNT_ID");
      return;
    }
  }

  if let Err(e) = mailbin::app::run().await {
    eprintln!("error: {e}");
    std::process::exit(1);
  }
}
