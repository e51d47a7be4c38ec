use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, middleware, put, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use log::{info, warn};
use serde::Deserialize;

use tweet_gen_core::bot::TweetBot;
use tweet_gen_core::corpus::parser::csv_file_to_training_data;
use tweet_gen_core::io::{corpus_name, list_files, resolve_data_dir};
use tweet_gen_core::random::{RandomSource, UniformRandom};
use tweet_gen_core::{BotError, ChainError};

/// Largest number of tweets a single request may ask for.
const MAX_COUNT: usize = 100;

/// Runtime configuration of the tweet generation service.
#[derive(Parser, Debug, Clone)]
#[command(name = "tweet-gen-server", version, about = "An HTTP service generating Markov-chain tweets")]
struct CliArgs {
	/// Address to listen on.
	#[arg(long, env = "TWEET_GEN_BIND", default_value_t = String::from("127.0.0.1:5000"))]
	bind: String,

	/// Directory holding the `.csv` corpora.
	#[arg(long, env = "TWEET_GEN_DATA", default_value_t = String::from("./data"))]
	data_dir: String,

	/// Default CSV column (zero indexed) holding the tweet text.
	#[arg(long, env = "TWEET_GEN_COLUMN", default_value_t = 2)]
	column: usize,

	/// Seed for reproducible generation. Seeded from the OS when absent.
	#[arg(long, env = "TWEET_GEN_SEED")]
	seed: Option<u64>,

	/// Increase log verbosity (-v info, -vv debug, -vvv trace).
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

/// Query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	length: Option<usize>,
	count: Option<usize>,
}

#[derive(Deserialize)]
struct CorpusQuery {
	names: Option<String>,
	column: Option<usize>,
}

struct SharedData {
	bot: TweetBot,
	corpora: Vec<String>,
	data_dir: PathBuf,
	column: usize,
	seed: Option<u64>,
}

impl SharedData {
	/// Creates the state with an untrained bot.
	fn new(data_dir: PathBuf, column: usize, seed: Option<u64>) -> Self {
		Self {
			bot: TweetBot::from_sentences(Vec::new(), random_source(seed)),
			corpora: Vec::new(),
			data_dir,
			column,
			seed,
		}
	}
}

/// Returns `true` if `name` is a bare file stem, with no directory part.
fn is_corpus_name(name: &str) -> bool {
	if name.contains(['/', '\\']) {
		return false;
	}
	let mut components = Path::new(name).components();
	matches!((components.next(), components.next()), (Some(Component::Normal(_)), None))
}

fn random_source(seed: Option<u64>) -> Box<dyn RandomSource + Send> {
	match seed {
		Some(seed) => Box::new(UniformRandom::seeded(seed)),
		None => Box::new(UniformRandom::new()),
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates `count` tweets of approximately `length` characters, one per line.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let length = query.length.unwrap_or(140);
	let count = query.count.unwrap_or(1);
	if count > MAX_COUNT {
		return HttpResponse::BadRequest().body(format!("count must be at most {MAX_COUNT}"));
	}

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Bot lock failed"),
	};

	match shared_data.bot.generate_tweets(count, length) {
		Ok(tweets) => HttpResponse::Ok().body(tweets.join("\n")),
		Err(e @ BotError::Chain(ChainError::InvalidLength { .. })) => HttpResponse::BadRequest().body(e.to_string()),
		Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
	}
}

/// HTTP GET endpoint `/v1/corpora`
///
/// Lists the corpora available in the data directory.
#[get("/v1/corpora")]
async fn get_corpora(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let data_dir = match data.lock() {
		Ok(m) => m.data_dir.clone(),
		Err(_) => return HttpResponse::InternalServerError().body("Bot lock failed"),
	};

	match list_files(&data_dir, "csv") {
		Ok(files) => {
			let names: Vec<String> = files.iter().filter_map(|f| corpus_name(f).ok()).collect();
			HttpResponse::Ok().body(names.join("\n"))
		}
		Err(_) => HttpResponse::InternalServerError().body("Failed to list corpora"),
	}
}

#[get("/v1/loaded_corpora")]
async fn get_loaded_corpora(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Bot lock failed"),
	};
	HttpResponse::Ok().body(shared_data.corpora.join("\n"))
}

/// HTTP PUT endpoint `/v1/load_corpora`
///
/// Retrains the bot from scratch on the named corpora.
#[put("/v1/load_corpora")]
async fn put_corpora(data: web::Data<Mutex<SharedData>>, query: web::Query<CorpusQuery>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Bot lock failed"),
	};

	let query_names = match &query.names {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty corpus name"),
	};

	let corpus_names: Vec<&str> = query_names
		.split(',')
		.map(|s| s.trim())
		.filter(|s| !s.is_empty())
		.collect();

	let column = query.column.unwrap_or(shared_data.column);
	let mut sentences = Vec::new();
	for name in &corpus_names {
		if !is_corpus_name(name) {
			return HttpResponse::BadRequest().body(format!("Invalid corpus name: {name}"));
		}
		let corpus_path = shared_data.data_dir.join(format!("{name}.csv"));
		if !corpus_path.is_file() {
			return HttpResponse::BadRequest().body(format!("Unknown corpus: {name}"));
		}
		match csv_file_to_training_data(&corpus_path, column) {
			Ok(mut s) => sentences.append(&mut s),
			Err(e) => {
				warn!("{e}");
				return HttpResponse::InternalServerError().body(format!("Failed to load corpus: {e}"));
			}
		}
	}

	info!("training on {} sentences from {}", sentences.len(), corpus_names.join(", "));
	shared_data.bot = TweetBot::from_sentences(sentences, random_source(shared_data.seed));
	shared_data.corpora = corpus_names.iter().map(|s| (*s).to_owned()).collect();

	HttpResponse::Ok().body("Corpora loaded successfully")
}

/// Main entry point for the server.
///
/// Starts with an untrained bot, wrapped in a `Mutex`, and serves the
/// generation endpoints with actix-web.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let args = CliArgs::parse();

	let level = match args.verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

	let data_dir = resolve_data_dir(&args.data_dir);
	info!("listening on {}, corpora in {}", args.bind, data_dir.display());

	let shared_data = SharedData::new(data_dir, args.column, args.seed);
	let shared_bot = web::Data::new(Mutex::new(shared_data));

	HttpServer::new(move || {
		App::new()
			.wrap(middleware::Logger::default())
			.wrap(Cors::permissive())
			.app_data(shared_bot.clone())
			.service(get_generated)
			.service(get_corpora)
			.service(put_corpora)
			.service(get_loaded_corpora)
	})
		.bind(args.bind.as_str())?
		.run()
		.await
}
