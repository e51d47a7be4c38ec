use clap::Parser;
use log::info;

use tweet_gen_core::bot::TweetBot;
use tweet_gen_core::random::{RandomSource, UniformRandom};

/// Trains a tweet bot on a CSV file and prints a few generated tweets.
#[derive(Parser, Debug)]
#[command(name = "tweet-gen-exemple", version)]
struct Args {
    /// CSV file holding one tweet per line
    #[arg(long, default_value = "files/twitterbot_test.csv")]
    csv: String,

    /// Column (zero indexed) holding the tweet text
    #[arg(long, default_value_t = 2)]
    column: usize,

    /// Number of tweets to generate
    #[arg(long, default_value_t = 10)]
    count: usize,

    /// Approximate length of each tweet, in characters
    #[arg(long, default_value_t = 140)]
    length: usize,

    /// File receiving the generated tweets, one per line
    #[arg(long, default_value = "files/generated_tweets.txt")]
    output: String,

    /// Append to the output file instead of overwriting it
    #[arg(long)]
    append: bool,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    // Same seed, same tweets
    let random: Box<dyn RandomSource + Send> = match args.seed {
        Some(seed) => Box::new(UniformRandom::seeded(seed)),
        None => Box::new(UniformRandom::new()),
    };

    let mut bot = TweetBot::from_csv(&args.csv, args.column, random)?;

    // Tweets are generated once, printed, then written to the output file
    let tweets = bot.write_tweets_to_file(args.count, args.length, &args.output, args.append)?;
    for (i, tweet) in tweets.iter().enumerate() {
        println!("Generated tweet {}: {}", i + 1, tweet);
    }
    info!("{} tweets written to {}", tweets.len(), args.output);

    // An invalid length is refused before anything is generated
    match bot.generate_tweet(0) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Length 0 is invalid: {e}"),
    }

    Ok(())
}
