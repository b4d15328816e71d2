use std::sync::Arc;
use backend::{
    api,
    autogen,
    config::AppConfig,
    logging::init_tracing,
    routes::AppState,
};
use rocket::fs::NamedFile;
use shuttle_runtime::CustomError;
use tracing::{info, warn};
use include_dir::{include_dir, Dir};
use uuid::Uuid;

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

#[rocket::get("/<path..>", rank = 20)]
async fn spa_handler(path: std::path::PathBuf, temp_dir: &rocket::State<std::path::PathBuf>) -> Option<NamedFile> {
    if path.starts_with("api") {
        return None;
    }
    let file_path = temp_dir.join(&path);
    if file_path.exists() && file_path.is_file() {
        NamedFile::open(&file_path).await.ok()
    } else {
        NamedFile::open(temp_dir.join("index.html")).await.ok()
    }
}

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_runtime::Secrets] secret_store: shuttle_runtime::SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    init_tracing();
    info!("🚀 Starting candidates server");

    let config = AppConfig::from_lookup(|key| secret_store.get(key));
    let state = AppState::from_config(&config).map_err(CustomError::new)?;
    info!("📋 Store ready ({:?} ids)", config.id_strategy);

    if let Some(period) = config.auto_generate_every {
        // Lives as long as the process.
        let _generation = autogen::start(Arc::clone(&state.store), period);
    } else {
        info!("Server-side auto-generation disabled");
    }

    let temp_dir = std::env::temp_dir().join(format!("candidates_static_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&temp_dir).map_err(CustomError::new)?;
    if let Err(e) = STATIC_DIR.extract(&temp_dir) {
        warn!("Failed to extract static files: {}", e);
    }

    let rocket = api(state)
        .manage(temp_dir)
        .mount("/", rocket::routes![spa_handler]);

    Ok(rocket.into())
}
