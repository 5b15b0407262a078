mod config;

use std::io::Cursor;

use actix_cors::Cors;
use actix_web::middleware::{Condition, Logger};
use actix_web::{get, post, web, App, HttpMessage, HttpRequest, HttpResponse, HttpServer, Responder};
use anyhow::Result;
use clap::Parser;
use log::{error, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

use config::{Config, Limits};
use mc_gen_core::TextGenError;
use mc_gen_core::corpus::{ExtraSpacesHandling, FileCorpusStream};
use mc_gen_core::model::{RandomTextGenerator, TransitionTableBuilder};

/// Query parameters for the `/v1/random/upload-text-file` endpoint
#[derive(Deserialize)]
struct UploadParams {
	#[serde(rename = "prefix-size")]
	prefix_size: usize,
	#[serde(rename = "ignore-extra-spaces")]
	ignore_extra_spaces: Option<bool>,
	seed: Option<u64>, // fixed seed for reproducible output
}

impl UploadParams {
	fn extra_spaces_handling(&self) -> ExtraSpacesHandling {
		if self.ignore_extra_spaces.unwrap_or(true) {
			ExtraSpacesHandling::IgnoreExtraSpaces
		} else {
			ExtraSpacesHandling::SpacesAsWords
		}
	}
}

/// Builds a table from the uploaded corpus and walks it once.
fn generate_text(corpus: web::Bytes, params: &UploadParams, limits: Limits) -> mc_gen_core::Result<String> {
	let stream = FileCorpusStream::from_reader(Cursor::new(corpus), params.extra_spaces_handling());
	let table = TransitionTableBuilder::build(stream, params.prefix_size)?;

	let rng = match params.seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng(),
	};
	Ok(RandomTextGenerator::new(&table, rng).with_max_units(limits.max_units).into_text())
}

/// HTTP POST endpoint `/v1/random/upload-text-file`
///
/// Reads a `text/plain` corpus from the request body and returns random
/// text generated from it.
///
/// # Responses
/// - 200 with the generated text
/// - 400 for a non text body or a prefix size lower than 2 (malformed
///   query parameters are rejected by the extractor)
/// - 500 if the corpus could not be read
#[post("/v1/random/upload-text-file")]
async fn upload_text_file(
	req: HttpRequest,
	limits: web::Data<Limits>,
	query: web::Query<UploadParams>,
	body: web::Bytes,
) -> impl Responder {
	let content_type = req.content_type().to_owned();
	if !content_type.starts_with("text/plain") {
		warn!("Uploaded file type unsupported: '{content_type}'");
		return HttpResponse::BadRequest().body("Uploaded file must be text/plain");
	}

	let params = query.into_inner();
	let limits = *limits.get_ref();
	let result = web::block(move || generate_text(body, &params, limits)).await;

	match result {
		Ok(Ok(text)) => HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(text),
		Ok(Err(e @ TextGenError::InvalidWindowSize(_))) => HttpResponse::BadRequest().body(e.to_string()),
		Ok(Err(e)) => {
			error!("An error occurred while trying to create the transition table: {e}");
			HttpResponse::InternalServerError().finish()
		}
		Err(e) => {
			error!("Generation task failed: {e}");
			HttpResponse::InternalServerError().finish()
		}
	}
}

#[get("/v1/health")]
async fn health() -> impl Responder {
	HttpResponse::Ok().body("OK")
}

fn routes(cfg: &mut web::ServiceConfig) {
	cfg.service(upload_text_file).service(health);
}

/// Main entry point for the server.
///
/// Parses the command line, sets up logging and starts an Actix-web
/// HTTP server. Each request builds its own table; nothing is shared
/// between requests but the limits.
#[actix_web::main]
async fn main() -> Result<()> {
	let config = Config::parse();

	env_logger::Builder::from_default_env()
		.filter_level(config.log_level.parse().unwrap_or(log::LevelFilter::Info))
		.init();

	info!("Starting mc-gen-server on {}:{} ({} workers)", config.host, config.port, config.workers);

	let limits = web::Data::new(Limits::from(&config));
	let payload = web::PayloadConfig::new(config.max_upload_bytes);
	let cors = config.cors;

	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Condition::new(cors, Cors::permissive()))
			.app_data(limits.clone())
			.app_data(payload.clone())
			.configure(routes)
	})
		.workers(config.workers)
		.bind((config.host.as_str(), config.port))?
		.run()
		.await?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::http::{StatusCode, header};
	use actix_web::test;

	const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Suspendisse sit amet nulla neque. \
		Cras consectetur nec purus at tristique. Etiam euismod, tellus vel maximus porta, urna nulla facilisis \
		magna, sed pellentesque lectus leo nec mauris.\n\nNam interdum velit a nisi rutrum suscipit. Donec sit \
		amet nunc tortor. Cras accumsan mauris aliquam lacus suscipit, in luctus leo convallis.";

	fn upload(query: &str, content_type: &str, corpus: &str) -> test::TestRequest {
		test::TestRequest::post()
			.uri(&format!("/v1/random/upload-text-file{query}"))
			.insert_header((header::CONTENT_TYPE, content_type.to_owned()))
			.set_payload(corpus.to_owned())
	}

	macro_rules! app {
		() => {
			test::init_service(
				App::new().app_data(web::Data::new(Limits { max_units: 1_000 })).configure(routes),
			)
			.await
		};
	}

	#[actix_web::test]
	async fn happy_path() {
		let app = app!();
		let req = upload("?prefix-size=3&ignore-extra-spaces=true", "text/plain", LOREM).to_request();
		let resp = test::call_service(&app, req).await;

		assert_eq!(resp.status(), StatusCode::OK);
		let body = test::read_body(resp).await;
		assert!(!body.is_empty());
		assert_ne!(body, LOREM.as_bytes());
	}

	#[actix_web::test]
	async fn same_seed_same_text() {
		let app = app!();
		let mut bodies = Vec::new();
		for _ in 0..2 {
			let req = upload("?prefix-size=2&seed=42", "text/plain; charset=utf-8", LOREM).to_request();
			let resp = test::call_service(&app, req).await;
			assert_eq!(resp.status(), StatusCode::OK);
			bodies.push(test::read_body(resp).await);
		}
		assert_eq!(bodies[0], bodies[1]);
	}

	#[actix_web::test]
	async fn short_corpus_gives_empty_text() {
		let app = app!();
		let resp = test::call_service(&app, upload("?prefix-size=100", "text/plain", "too short").to_request()).await;

		assert_eq!(resp.status(), StatusCode::OK);
		assert!(test::read_body(resp).await.is_empty());
	}

	#[actix_web::test]
	async fn bad_requests() {
		let app = app!();
		let cases = [
			("?prefix-size=3", "text/xml"),
			("?prefix-size=WRONG!!", "text/plain"),
			("", "text/plain"),
			("?prefix-size=4&ignore-extra-spaces=WRONG!!", "text/plain"),
			("?prefix-size=1", "text/plain"),
		];

		for (query, content_type) in cases {
			let resp = test::call_service(&app, upload(query, content_type, LOREM).to_request()).await;
			assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "query {query:?}, type {content_type}");
		}
	}

	#[actix_web::test]
	async fn invalid_utf8_is_replaced() {
		let app = app!();
		let req = test::TestRequest::post()
			.uri("/v1/random/upload-text-file?prefix-size=2")
			.insert_header((header::CONTENT_TYPE, "text/plain"))
			.set_payload(vec![b'a', b' ', 0xff, 0xfe, b'\n'])
			.to_request();
		let resp = test::call_service(&app, req).await;

		assert_eq!(resp.status(), StatusCode::OK);
		// One prefix only, so the walk is the same whatever the seed
		assert_eq!(test::read_body(resp).await, "a \u{FFFD}\u{FFFD}\n".as_bytes());
	}

	#[actix_web::test]
	async fn health_is_ok() {
		let app = app!();
		let req = test::TestRequest::get().uri("/v1/health").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::OK);
	}
}
