use crate::data::{self, Explanation};
use crate::game::{GameError, GameService};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::info;

type SharedState = Arc<AppState>;

pub struct AppState {
    pub game: GameService,
}

#[derive(Clone)]
pub struct WebConfig {
    pub addr: SocketAddr,
}

impl Default for WebConfig {
    fn default() -> Self {
        // Same bind as the original demo deployment.
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 5010)),
        }
    }
}

#[derive(Debug)]
pub enum WebError {
    Io(std::io::Error),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for WebError {}

impl From<std::io::Error> for WebError {
    fn from(value: std::io::Error) -> Self {
        WebError::Io(value)
    }
}

pub async fn serve(config: WebConfig, game: GameService) -> Result<(), WebError> {
    let state = Arc::new(AppState { game });
    let router = build_router(state);
    info!(%config.addr, "Binding HTTP listener");
    let listener = TcpListener::bind(config.addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server exited");
    Ok(())
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<GameError> for ApiError {
    fn from(value: GameError) -> Self {
        match value {
            GameError::UnknownSession => ApiError::bad_request("Invalid session"),
            err @ GameError::UnknownPersona(_) => ApiError::bad_request(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let payload = json!({ "error": self.message });
        (self.status, Json(payload)).into_response()
    }
}

fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api/generate", post(api_generate))
        .route("/api/guess", post(api_guess))
        .route("/api/concepts", get(api_concepts))
        .route("/api/quiz", get(api_quiz))
        .route("/healthz", get(health))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_response(DefaultOnResponse::new()),
        )
        .layer(CompressionLayer::new())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateRequest {
    prompt: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GenerateResponse {
    session_id: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct GuessRequest {
    session_id: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GuessResponse {
    correct: bool,
    actual_model: &'static str,
    explanation: &'static Explanation,
}

async fn api_generate(
    State(state): State<SharedState>,
    Json(request): Json<GenerateRequest>,
) -> Json<GenerateResponse> {
    let prompt = request.prompt.as_deref().unwrap_or(data::DEFAULT_PROMPT);
    let round = state.game.start_round(prompt);
    Json(GenerateResponse {
        session_id: round.session_id,
        text: round.text,
    })
}

async fn api_guess(
    State(state): State<SharedState>,
    Json(request): Json<GuessRequest>,
) -> Result<Json<GuessResponse>, ApiError> {
    let outcome = state.game.check_guess(&request.session_id, &request.model)?;
    Ok(Json(GuessResponse {
        correct: outcome.correct,
        actual_model: outcome.actual.tag(),
        explanation: outcome.explanation,
    }))
}

async fn api_concepts() -> Json<serde_json::Value> {
    Json(data::concepts_json())
}

async fn api_quiz(State(state): State<SharedState>) -> impl IntoResponse {
    Json(state.game.random_quiz())
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok", "service": "modelmatch-web" }))
}

async fn home() -> impl IntoResponse {
    Html(render_game_page())
}

fn render_game_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>GPT vs GPM vs GPH</title>
    <script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4"></script>
  </head>
  <body class="bg-slate-50 text-slate-900">
    <main class="min-h-screen flex flex-col items-center py-10 px-4">
      <div class="max-w-3xl w-full space-y-6">
        <div>
          <p class="uppercase tracking-wide text-sm text-slate-500">modelmatch v{version}</p>
          <h1 class="text-4xl font-extrabold tracking-tight">GPT vs GPM vs GPH</h1>
          <p class="text-lg text-slate-600">One of three generators continues your prompt: a context-aware model, a one-word-memory Markov chain, or a human. Can you tell which one wrote it?</p>
        </div>

        <div class="bg-white shadow rounded p-4 space-y-3">
          <label class="block text-sm font-semibold" for="prompt">Prompt</label>
          <input id="prompt" value="{default_prompt}" class="w-full border border-slate-300 rounded px-3 py-2" />
          <button id="generate" class="inline-flex items-center rounded-md bg-slate-900 px-4 py-2 text-white font-semibold shadow hover:bg-slate-800 transition-colors">Generate</button>
        </div>

        <div id="round" class="hidden bg-white shadow rounded p-4 space-y-3">
          <p class="text-sm uppercase tracking-wide text-slate-500">Continuation</p>
          <p id="text" class="text-slate-800"></p>
          <div class="flex flex-wrap gap-3">
            <button data-model="gpt" class="guess rounded-md bg-slate-200 px-4 py-2 font-semibold hover:bg-slate-300">GPT</button>
            <button data-model="gpm" class="guess rounded-md bg-slate-200 px-4 py-2 font-semibold hover:bg-slate-300">GPM</button>
            <button data-model="gph" class="guess rounded-md bg-slate-200 px-4 py-2 font-semibold hover:bg-slate-300">GPH</button>
          </div>
        </div>

        <div id="result" class="hidden bg-white shadow rounded p-4 space-y-2">
          <p id="verdict" class="text-xl font-bold"></p>
          <p id="description" class="text-slate-600"></p>
          <ul id="clues" class="list-disc pl-6 text-sm text-slate-600"></ul>
        </div>

        <div class="flex flex-wrap gap-3">
          <a href="/api/concepts" class="rounded-md bg-slate-200 px-4 py-2 font-semibold hover:bg-slate-300">Concept table</a>
          <a href="/api/quiz" class="rounded-md bg-slate-200 px-4 py-2 font-semibold hover:bg-slate-300">Quiz question</a>
        </div>
      </div>
    </main>
    <script>
      let sessionId = null;
      const show = (id) => document.getElementById(id).classList.remove('hidden');
      const hide = (id) => document.getElementById(id).classList.add('hidden');
      document.getElementById('generate').addEventListener('click', async () => {{
        const prompt = document.getElementById('prompt').value;
        const res = await fetch('/api/generate', {{
          method: 'POST',
          headers: {{ 'Content-Type': 'application/json' }},
          body: JSON.stringify({{ prompt }}),
        }});
        const data = await res.json();
        sessionId = data.session_id;
        document.getElementById('text').textContent = data.text;
        hide('result');
        show('round');
      }});
      document.querySelectorAll('.guess').forEach((button) => {{
        button.addEventListener('click', async () => {{
          if (!sessionId) return;
          const res = await fetch('/api/guess', {{
            method: 'POST',
            headers: {{ 'Content-Type': 'application/json' }},
            body: JSON.stringify({{ session_id: sessionId, model: button.dataset.model }}),
          }});
          const data = await res.json();
          if (data.error) {{
            document.getElementById('verdict').textContent = data.error;
            show('result');
            return;
          }}
          document.getElementById('verdict').textContent = data.correct
            ? 'Correct! It was ' + data.actual_model.toUpperCase() + '.'
            : 'Not quite. It was ' + data.actual_model.toUpperCase() + '.';
          document.getElementById('description').textContent = data.explanation.description;
          const clues = document.getElementById('clues');
          clues.replaceChildren();
          for (const clue of data.explanation.clues) {{
            const item = document.createElement('li');
            item.textContent = clue;
            clues.appendChild(item);
          }}
          show('result');
          sessionId = null;
        }});
      }});
    </script>
  </body>
</html>"#,
        version = env!("CARGO_PKG_VERSION"),
        default_prompt = data::DEFAULT_PROMPT,
    )
}
