use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "reframe-gateway")]
#[command(about = "Guarded gateway for structured reflective generations")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    // OpenAI-compatible upstream base URL
    #[arg(short, long, default_value = "https://api.openai.com")]
    pub upstream_url: String,

    // Model requested from the upstream
    #[arg(short, long, default_value = "gpt-4o-mini")]
    pub model: String,

    // Max admitted requests per client within the window
    #[arg(long, default_value_t = 20)]
    pub rate_limit: u32,

    // Sliding window size in milliseconds
    #[arg(long, default_value_t = 60_000)]
    pub rate_window_ms: u64,

    // Minimum gap between admitted requests from one client, in milliseconds
    #[arg(long, default_value_t = 2_500)]
    pub cooldown_ms: u64,

    // Upstream request timeout in seconds
    #[arg(long, default_value_t = 20)]
    pub upstream_timeout: u64,
}
