use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::AppState;

/// GET /healthz
pub async fn healthz() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

/// GET /readyz
pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    // メタデータの確認は非キャッシュのリポジトリ経由で行う。
    // キャッシュ付きストアを通すと readyz が遅延読込を確定させてしまう。
    let metadata_ok = state.metadata_probe.get().await.is_ok();
    let pictures_ok = state.pictures_repo.read_file_names().await.is_ok();
    let videos_ok = state.videos_repo.read_file_names().await.is_ok();

    let all_ok = metadata_ok && pictures_ok && videos_ok;
    let status = if all_ok { "ready" } else { "not_ready" };
    let code = if all_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        code,
        Json(serde_json::json!({
            "status": status,
            "checks": {
                "metadata": if metadata_ok { "ok" } else { "error" },
                "pictures_dir": if pictures_ok { "ok" } else { "error" },
                "videos_dir": if videos_ok { "ok" } else { "error" }
            }
        })),
    )
}
