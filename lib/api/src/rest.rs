use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use artrec_core::{Artwork, Level, RecommendOutcome, Recommender, Vector};
use artrec_storage::StorageManager;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

const NO_PREFERENCES_WARNING: &str = "no preferences";

#[derive(Deserialize)]
struct RecommendQuery {
    user_id: String,
    limit: Option<usize>,
}

#[derive(Serialize)]
struct CuratedResponse {
    user_id: String,
    recommendations: Vec<CuratedRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<&'static str>,
}

#[derive(Serialize)]
struct CuratedRow {
    rank: usize,
    artwork_id: String,
    artwork_name: Option<String>,
    similarity: Option<f32>,
    level: Level,
    explanation_id: Option<String>,
}

#[derive(Serialize)]
struct DiscoveryResponse {
    user_id: String,
    recommendations: Vec<DiscoveryRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<&'static str>,
}

#[derive(Serialize)]
struct DiscoveryRow {
    rank: usize,
    artwork_id: String,
    artwork_name: Option<String>,
    museum_name: Option<String>,
    similarity: Option<f32>,
}

#[derive(Deserialize)]
struct UpsertArtworksRequest {
    artworks: Vec<ArtworkRequest>,
}

#[derive(Deserialize)]
struct ArtworkRequest {
    artwork_id: String,
    name: String,
    museum_id: String,
    museum_name: String,
    embedding: Option<Vec<f32>>,
}

#[derive(Deserialize)]
struct RateRequest {
    ratings: Vec<RatingRequest>,
}

#[derive(Deserialize)]
struct RatingRequest {
    artwork_id: String,
    score: i64,
}

#[derive(Serialize)]
struct RatingsResponse {
    user_id: String,
    ratings: Vec<RatingRow>,
}

#[derive(Serialize)]
struct RatingRow {
    artwork_id: String,
    score: i64,
}

#[derive(Deserialize)]
struct UpsertExplanationsRequest {
    entries: Vec<ExplanationRequest>,
}

#[derive(Deserialize)]
struct ExplanationRequest {
    artwork_id: String,
    level: Level,
    explanation_id: String,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(
        storage: Arc<StorageManager>,
        recommender: Arc<Recommender>,
        port: u16,
    ) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(storage.clone()))
                .app_data(web::Data::new(recommender.clone()))
                .route(
                    "/recommendations/curated",
                    web::get().to(curated_recommendations),
                )
                .route(
                    "/recommendations/discovery",
                    web::get().to(discovery_recommendations),
                )
                .route("/artworks", web::put().to(upsert_artworks))
                .route("/artworks/{id}", web::get().to(get_artwork))
                .route("/artworks/{id}", web::delete().to(delete_artwork))
                .route("/users/{user_id}/ratings", web::put().to(upsert_ratings))
                .route("/users/{user_id}/ratings", web::get().to(get_ratings))
                .route("/explanations", web::put().to(upsert_explanations))
                .route("/snapshot", web::post().to(save_snapshot))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn curated_recommendations(
    storage: web::Data<Arc<StorageManager>>,
    recommender: web::Data<Arc<Recommender>>,
    query: web::Query<RecommendQuery>,
) -> ActixResult<HttpResponse> {
    let user_id = query.user_id.clone();
    let ratings = storage.preferences().ratings(&user_id);

    let explanations = storage.explanations().read();
    let outcome = recommender.curated(&ratings, storage.catalog(), &explanations);
    drop(explanations);

    let response = match outcome {
        RecommendOutcome::NoPreferences => CuratedResponse {
            user_id,
            recommendations: Vec::new(),
            warning: Some(NO_PREFERENCES_WARNING),
        },
        RecommendOutcome::Recommendations(rows) => CuratedResponse {
            user_id,
            recommendations: rows
                .into_iter()
                .map(|row| CuratedRow {
                    rank: row.rank,
                    artwork_id: row.artwork_id,
                    artwork_name: row.name,
                    similarity: row.similarity,
                    level: row.level,
                    explanation_id: row.explanation_id,
                })
                .collect(),
            warning: None,
        },
    };

    Ok(HttpResponse::Ok().json(response))
}

async fn discovery_recommendations(
    storage: web::Data<Arc<StorageManager>>,
    recommender: web::Data<Arc<Recommender>>,
    query: web::Query<RecommendQuery>,
) -> ActixResult<HttpResponse> {
    let user_id = query.user_id.clone();
    let ratings = storage.preferences().ratings(&user_id);

    let outcome = recommender.discovery(&ratings, storage.catalog(), query.limit);

    let response = match outcome {
        RecommendOutcome::NoPreferences => DiscoveryResponse {
            user_id,
            recommendations: Vec::new(),
            warning: Some(NO_PREFERENCES_WARNING),
        },
        RecommendOutcome::Recommendations(rows) => DiscoveryResponse {
            user_id,
            recommendations: rows
                .into_iter()
                .map(|row| DiscoveryRow {
                    rank: row.rank,
                    artwork_id: row.artwork_id,
                    artwork_name: row.name,
                    museum_name: row.museum_name,
                    similarity: row.similarity,
                })
                .collect(),
            warning: None,
        },
    };

    Ok(HttpResponse::Ok().json(response))
}

async fn upsert_artworks(
    storage: web::Data<Arc<StorageManager>>,
    req: web::Json<UpsertArtworksRequest>,
) -> ActixResult<HttpResponse> {
    let req = req.into_inner();

    for artwork_req in req.artworks {
        let mut artwork = Artwork::new(
            artwork_req.artwork_id,
            artwork_req.name,
            artwork_req.museum_id,
            artwork_req.museum_name,
        );
        if let Some(embedding) = artwork_req.embedding {
            artwork = artwork.with_embedding(Vector::new(embedding));
        }

        if let Err(e) = storage.catalog().upsert(artwork) {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            })));
        }
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": true
    })))
}

async fn get_artwork(
    storage: web::Data<Arc<StorageManager>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let artwork_id = path.into_inner();

    match storage.catalog().get(&artwork_id) {
        Some(artwork) => Ok(HttpResponse::Ok().json(artwork)),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Artwork not found"
        }))),
    }
}

async fn delete_artwork(
    storage: web::Data<Arc<StorageManager>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let artwork_id = path.into_inner();

    if storage.catalog().remove(&artwork_id) {
        Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": true
        })))
    } else {
        Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Artwork not found"
        })))
    }
}

async fn upsert_ratings(
    storage: web::Data<Arc<StorageManager>>,
    path: web::Path<String>,
    req: web::Json<RateRequest>,
) -> ActixResult<HttpResponse> {
    let user_id = path.into_inner();

    for rating in &req.ratings {
        if let Err(e) = storage
            .preferences()
            .rate(&user_id, &rating.artwork_id, rating.score)
        {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            })));
        }
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": true
    })))
}

async fn get_ratings(
    storage: web::Data<Arc<StorageManager>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let user_id = path.into_inner();

    let ratings = storage
        .preferences()
        .ratings(&user_id)
        .into_iter()
        .map(|rating| RatingRow {
            artwork_id: rating.artwork_id,
            score: rating.score,
        })
        .collect();

    Ok(HttpResponse::Ok().json(RatingsResponse { user_id, ratings }))
}

async fn upsert_explanations(
    storage: web::Data<Arc<StorageManager>>,
    req: web::Json<UpsertExplanationsRequest>,
) -> ActixResult<HttpResponse> {
    let req = req.into_inner();

    let mut index = storage.explanations().write();
    for entry in req.entries {
        index.insert(entry.artwork_id, entry.level, entry.explanation_id);
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": true
    })))
}

async fn save_snapshot(storage: web::Data<Arc<StorageManager>>) -> ActixResult<HttpResponse> {
    match storage.save() {
        Ok(description) => Ok(HttpResponse::Ok().json(description)),
        Err(e) => {
            warn!("Snapshot save failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            })))
        }
    }
}
