use clap::Parser;

use crate::consts::*;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Hosts one Liar Game session for a websocket console", long_about = None)]
pub struct Args {
    #[clap(short, long, env = "LIAR_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// Ollama-style chat endpoint playing the AI seats.
    #[clap(long, env = "LIAR_COMPLETION_URL", default_value = DEFAULT_COMPLETION_URL)]
    pub completion_url: String,
    #[clap(short, long, env = "LIAR_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,
    /// JSON topic file replacing the built-in topics.
    #[clap(short, long, env = "LIAR_LEXICON")]
    pub lexicon: Option<String>,
    /// Fixes topic, roles and speaking order across runs.
    #[clap(long, env = "LIAR_SEED")]
    pub seed: Option<u64>,
}
