mod client;


use clap::{Args, Parser, Subcommand};
use schema::{
    ArticleQuery, Chat, ClusterQuery, GenerateVideo, Message, NewChat, NewVersion, NewsStats, Version, VideoStatus,
    chat::chat_title_from_prompt, decode_list, decode_record, decode_record_opt_id, endpoints,
};
use serde::Serialize;

use crate::client::{ApiClient, CliError, Service};

#[derive(Parser, Debug)]
#[command(name = "ledgerline-cli", about = "Ledgerline chat and news API CLI")]
struct Cli {
    #[arg(long, env = "LEDGERLINE_CHAT_API", default_value = "http://localhost:8000")]
    chat_api: String,

    #[arg(long, env = "LEDGERLINE_NEWS_API", default_value = "http://localhost:8001")]
    news_api: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Chats(ChatsCommand),
    Versions(VersionsCommand),
    Messages { chat_id: String },
    News(NewsCommand),
    Video(VideoCommand),
}

#[derive(Args, Debug)]
struct ChatsCommand {
    #[command(subcommand)]
    command: ChatsSubcommand,
}

#[derive(Subcommand, Debug)]
enum ChatsSubcommand {
    List,
    /// Create a chat; the title defaults to one derived from `--prompt`.
    Create {
        #[arg(long, required_unless_present = "prompt")]
        title: Option<String>,
        #[arg(long)]
        prompt: Option<String>,
    },
}

#[derive(Args, Debug)]
struct VersionsCommand {
    #[command(subcommand)]
    command: VersionsSubcommand,
}

#[derive(Subcommand, Debug)]
enum VersionsSubcommand {
    List {
        chat_id: String,
    },
    Latest {
        chat_id: String,
    },
    /// Create a version; without `--number` it is numbered after the chat's
    /// existing versions.
    Create {
        chat_id: String,
        #[arg(long)]
        prompt: String,
        #[arg(long)]
        number: Option<u32>,
    },
}

#[derive(Args, Debug)]
struct NewsCommand {
    #[command(subcommand)]
    command: NewsSubcommand,
}

#[derive(Args, Debug, Default)]
struct NewsFilterArgs {
    #[arg(long)]
    company: Option<String>,
    #[arg(long)]
    factor_type: Option<String>,
    #[arg(long)]
    limit: Option<u32>,
    #[arg(long)]
    skip: Option<u32>,
}

/// Filters only the enriched-article listing understands.
#[derive(Args, Debug, Default)]
struct ArticleFilterArgs {
    #[arg(long)]
    sentiment: Option<String>,
    #[arg(long)]
    liquidity_impact: Option<String>,
    #[arg(long)]
    start_date: Option<String>,
    #[arg(long)]
    end_date: Option<String>,
    #[arg(long)]
    source: Option<String>,
    /// `true` or `false`; omitted means either.
    #[arg(long)]
    is_relevant: Option<bool>,
}

#[derive(Subcommand, Debug)]
enum NewsSubcommand {
    Clusters {
        #[command(flatten)]
        filter: NewsFilterArgs,
        #[arg(long)]
        start_date: Option<String>,
    },
    Articles {
        #[command(flatten)]
        filter: NewsFilterArgs,
        #[command(flatten)]
        article: ArticleFilterArgs,
    },
    Stats,
}

#[derive(Args, Debug)]
struct VideoCommand {
    #[command(subcommand)]
    command: VideoSubcommand,
}

#[derive(Subcommand, Debug)]
enum VideoSubcommand {
    Latest,
    Generate {
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let api = ApiClient::new(cli.chat_api, cli.news_api);
    if let Err(err) = run(&api, cli.command).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run(api: &ApiClient, command: Command) -> Result<(), CliError> {
    match command {
        Command::Chats(chats) => run_chats(api, chats.command).await,
        Command::Versions(versions) => run_versions(api, versions.command).await,
        Command::Messages { chat_id } => {
            let messages: Vec<Message> = decode_list(api.get(Service::Chat, &endpoints::messages(&chat_id), "").await?)?;
            print_json(&messages)
        }
        Command::News(news) => run_news(api, news.command).await,
        Command::Video(video) => run_video(api, video.command).await,
    }
}

async fn run_chats(api: &ApiClient, command: ChatsSubcommand) -> Result<(), CliError> {
    match command {
        ChatsSubcommand::List => {
            let chats: Vec<Chat> = decode_list(api.get(Service::Chat, endpoints::CHATS, "").await?)?;
            print_json(&chats)
        }
        ChatsSubcommand::Create { title, prompt } => {
            let title = resolve_title(title, prompt.as_deref());
            let chat: Chat = decode_record(api.post(Service::Chat, endpoints::CHATS, &NewChat { title }).await?)?;
            print_json(&chat)
        }
    }
}

async fn run_versions(api: &ApiClient, command: VersionsSubcommand) -> Result<(), CliError> {
    match command {
        VersionsSubcommand::List { chat_id } => {
            let versions: Vec<Version> = decode_list(api.get(Service::Chat, &endpoints::versions(&chat_id), "").await?)?;
            print_json(&versions)
        }
        VersionsSubcommand::Latest { chat_id } => {
            let version: Version =
                decode_record(api.get(Service::Chat, &endpoints::latest_version(&chat_id), "").await?)?;
            print_json(&version)
        }
        VersionsSubcommand::Create { chat_id, prompt, number } => {
            let version_number = match number {
                Some(number) => number,
                None => {
                    let existing: Vec<Version> =
                        decode_list(api.get(Service::Chat, &endpoints::versions(&chat_id), "").await?)?;
                    next_version_number(existing.len())
                }
            };
            let body = NewVersion { prompt, version_number };
            let version: Version = decode_record(api.post(Service::Chat, &endpoints::versions(&chat_id), &body).await?)?;
            print_json(&version)
        }
    }
}

async fn run_news(api: &ApiClient, command: NewsSubcommand) -> Result<(), CliError> {
    match command {
        NewsSubcommand::Clusters { filter, start_date } => {
            let query = cluster_query(filter, start_date);
            print_json(&api.get(Service::News, endpoints::NEWS_CLUSTERS, &query.to_query_string()).await?)
        }
        NewsSubcommand::Articles { filter, article } => {
            let query = article_query(filter, article);
            print_json(&api.get(Service::News, endpoints::NEWS_SUMMARIZED, &query.to_query_string()).await?)
        }
        NewsSubcommand::Stats => {
            let stats: NewsStats = serde_json::from_value(api.get(Service::News, endpoints::NEWS_STATS, "").await?)?;
            print_json(&stats)
        }
    }
}

async fn run_video(api: &ApiClient, command: VideoSubcommand) -> Result<(), CliError> {
    match command {
        VideoSubcommand::Latest => {
            let value = api.get(Service::News, endpoints::VIDEO_LATEST, "").await?;
            if value.is_null() {
                println!("no briefing yet");
                return Ok(());
            }
            let status: VideoStatus = decode_record_opt_id(value)?;
            print_json(&status)
        }
        VideoSubcommand::Generate { force } => {
            let value = api.post(Service::News, endpoints::VIDEO_GENERATE, &GenerateVideo { force }).await?;
            let status: VideoStatus = decode_record_opt_id(value)?;
            print_json(&status)
        }
    }
}

fn next_version_number(existing: usize) -> u32 {
    u32::try_from(existing).unwrap_or(u32::MAX).saturating_add(1)
}

fn resolve_title(title: Option<String>, prompt: Option<&str>) -> String {
    match title {
        Some(title) if !title.trim().is_empty() => title,
        _ => chat_title_from_prompt(prompt.unwrap_or_default()),
    }
}

fn cluster_query(filter: NewsFilterArgs, start_date: Option<String>) -> ClusterQuery {
    ClusterQuery {
        company: filter.company,
        factor_type: filter.factor_type,
        start_date,
        limit: filter.limit,
        skip: filter.skip,
    }
}

fn article_query(filter: NewsFilterArgs, article: ArticleFilterArgs) -> ArticleQuery {
    ArticleQuery {
        company: filter.company,
        factor_type: filter.factor_type,
        sentiment: article.sentiment,
        liquidity_impact: article.liquidity_impact,
        start_date: article.start_date,
        end_date: article.end_date,
        source: article.source,
        is_relevant: article.is_relevant,
        limit: filter.limit,
        skip: filter.skip,
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
