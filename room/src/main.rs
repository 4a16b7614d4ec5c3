use clap::Parser;
use lexicon::Lexicon;
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::net::TcpListener;

use room::completion::OllamaClient;
use room::config::Args;
use room::logger;
use room::session::{Session, SessionReq};

use tokio_tungstenite::tungstenite::handshake::server::Request as HsReq;
use tokio_tungstenite::tungstenite::handshake::server::Response as HsResp;
use tokio_tungstenite::tungstenite::handshake::server::ErrorResponse as HsError;
use tokio_tungstenite::tungstenite::handshake::server::Callback as HsCallback;
use tokio_tungstenite::tungstenite::http::StatusCode;

/// # Tasks
/// 1. session: owns the game, evaluates every request
/// 2. per console: websocket pumps
#[tokio::main]
async fn main() {
    logger::init();
    let args = Args::parse();
    if let Err(e) = launch(args).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn launch(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let lexicon = match args.lexicon {
        Some(ref path) => Lexicon::load(path)?,
        None => Lexicon::builtin(),
    };
    info!("lexicon {} with {} topics", lexicon.name, lexicon.topics.len());

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let completion = OllamaClient::new(&args.completion_url, &args.model);
    info!("AI seats use {} at {}", completion.model(), args.completion_url);

    let mut session = Session::new(lexicon, completion, rng);
    let session_tx = session.get_tx();
    let _handle_session = tokio::spawn(async move {session.run().await});

    let listener = TcpListener::bind(format!("0.0.0.0:{}", args.port)).await?;
    info!("listening on port {}", args.port);

    while let Ok((stream, addr)) = listener.accept().await {
        let session_tx = session_tx.clone();
        tokio::spawn(async move {
            match tokio_tungstenite::accept_hdr_async(stream, ConsolePath).await {
                Ok(ws_stream) => {
                    info!("console handshake from {}", addr);
                    session_tx.send(SessionReq::ConsoleLogin{ws_stream}).await.unwrap_or_default();
                }
                Err(e) => info!("rejected {}: {}", addr, e),
            }
        });
    }

    Ok(())
}

/// Only `/console` may open a websocket.
struct ConsolePath;

impl HsCallback for ConsolePath {
    fn on_request(self, req: &HsReq, resp: HsResp) -> Result<HsResp, HsError> {
        if req.uri().path() == "/console" {
            Ok(resp)
        } else {
            let mut err = HsError::new(Some("PathError".to_string()));
            *err.status_mut() = StatusCode::NOT_FOUND;
            Err(err)
        }
    }
}
