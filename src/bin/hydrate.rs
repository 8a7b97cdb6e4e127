//! Command-line front end for page-hydrator.
//!
//! Renders any page's hydration against the configured API without running
//! the server, creates blog posts interactively and checks the upstream.
//!
//! # Usage
//!
//! ```bash
//! # Blog list, page 2
//! cargo run --bin hydrate -- page blog --page 2
//!
//! # One article, raw JSON
//! cargo run --bin hydrate -- page blog-post my-first-post --json
//!
//! # One article, then three read-next carousel ticks
//! cargo run --bin hydrate -- page blog-post my-first-post --play 3
//!
//! # Admin table
//! cargo run --bin hydrate -- page admin blog-posts --per-page 25
//!
//! # Create a post
//! cargo run --bin hydrate -- post create
//!
//! # Update post 12, keeping its image
//! cargo run --bin hydrate -- post update 12
//!
//! # Check the upstream API
//! cargo run --bin hydrate -- health
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `page_hydrator::config`.

use page_hydrator::config::{self, Config};
use page_hydrator::dom::selectors::{READ_NEXT_DOTS, READ_NEXT_TRACK};
use page_hydrator::dom::{Binding, Hydration, Patch};
use page_hydrator::domain::endpoint::{Endpoint, ListQuery};
use page_hydrator::domain::entities::ImageUpload;
use page_hydrator::domain::repositories::ContentRepository;
use page_hydrator::forms::slugify;
use page_hydrator::infrastructure::fallback::load_places;
use page_hydrator::infrastructure::http::HttpContentRepository;
use page_hydrator::widgets::{Carousel, spawn_carousel};
use page_hydrator::{AppState, FormError};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for page-hydrator.
#[derive(Parser)]
#[command(name = "hydrate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Render a page's hydration
    Page {
        #[command(subcommand)]
        page: PageCommand,

        /// Print the hydration as JSON
        #[arg(long, global = true)]
        json: bool,

        /// Run the page's carousel for this many ticks
        #[arg(long, global = true, value_name = "TICKS")]
        play: Option<usize>,
    },

    /// Blog post operations
    Post {
        #[command(subcommand)]
        action: PostAction,
    },

    /// Check the upstream API
    Health,
}

/// Pages that can be rendered.
#[derive(Subcommand)]
enum PageCommand {
    /// Latest blog posts
    Blog {
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// One blog article
    BlogPost { slug: String },
    /// News index
    News,
    /// One news article
    NewsPost { ident: String },
    /// Admin table of a resource (e.g. "blog-posts")
    Admin {
        resource: String,

        #[arg(long)]
        per_page: Option<u32>,

        #[arg(long)]
        include_content: bool,
    },
    /// Search result list
    Search {
        /// Query string forwarded as-is (e.g. "q=tacos&page=2")
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Search map markers
    Map {
        #[arg(short, long)]
        q: Option<String>,
    },
}

/// Blog post subcommands.
#[derive(Subcommand)]
enum PostAction {
    /// Create a blog post
    Create {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Update an existing blog post
    Update {
        /// Post id
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Invalid configuration")?;
    let state = build_state(&config)?;

    match cli.command {
        Commands::Page { page, json, play } => handle_page(page, json, play, &state).await?,
        Commands::Post { action } => match action {
            PostAction::Create { yes } => submit_post(&state, None, yes).await?,
            PostAction::Update { id, yes } => submit_post(&state, Some(id), yes).await?,
        },
        Commands::Health => handle_health(&state, &config).await?,
    }

    Ok(())
}

fn build_state(config: &Config) -> Result<AppState> {
    let repository = Arc::new(HttpContentRepository::new(&config.api_base_url));
    let fallback = match &config.fallback_places_path {
        Some(path) => load_places(path)?,
        None => Vec::new(),
    };
    AppState::new(config, repository, fallback)
}

/// Renders one page and prints its hydration.
async fn handle_page(
    page: PageCommand,
    json: bool,
    play: Option<usize>,
    state: &AppState,
) -> Result<()> {
    let hydration = match page {
        PageCommand::Blog { page } => state.listing_service.blog_list(page).await,
        PageCommand::BlogPost { slug } => state
            .article_service
            .blog_detail(&slug)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to load blog post: {:?}", e))?,
        PageCommand::News => state.listing_service.news_index().await,
        PageCommand::NewsPost { ident } => state
            .article_service
            .news_detail(&ident)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to load news post: {:?}", e))?,
        PageCommand::Admin {
            resource,
            per_page,
            include_content,
        } => {
            state
                .admin_service
                .list(&resource, per_page, include_content.then_some(true), None)
                .await
        }
        PageCommand::Search { query } => state.places_service.search_results(query).await,
        PageCommand::Map { q } => state.places_service.map(q.as_deref()).await,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&hydration)?);
    } else {
        print_hydration(&hydration)?;
    }

    if let Some(ticks) = play {
        play_carousel(&hydration, ticks, json).await?;
    }
    Ok(())
}

/// Runs the read-next carousel bound by `hydration` and prints each
/// transition until `ticks` have passed.
async fn play_carousel(hydration: &Hydration, ticks: usize, json: bool) -> Result<()> {
    let Some((items, interval_ms)) = hydration.bindings.iter().find_map(|b| match b {
        Binding::Carousel {
            items, interval_ms, ..
        } => Some((*items, *interval_ms)),
        _ => None,
    }) else {
        println!("{}", "  No carousel on this page".yellow());
        return Ok(());
    };

    let carousel = Carousel::new(READ_NEXT_TRACK, READ_NEXT_DOTS, items);
    if !carousel.auto_advances() {
        println!("{}", "  Carousel has a single slide".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("▶ Carousel: {items} slides every {interval_ms} ms").bright_blue()
    );
    let mut driver = spawn_carousel(carousel, Duration::from_millis(interval_ms));
    for _ in 0..ticks {
        let Some(patches) = driver.patches.recv().await else {
            break;
        };
        let index = *driver.index.borrow();
        if json {
            println!("{}", serde_json::to_string(&patches)?);
        } else {
            println!("  slide {} ({} patches)", index.to_string().cyan(), patches.len());
        }
    }

    drop(driver.events);
    drop(driver.patches);
    driver.task.await.context("Carousel task failed")?;
    Ok(())
}

/// Human-readable summary of a hydration.
///
/// # Output Format
///
/// ```text
/// 🧩 Hydration
///
///   set_html     [data-latest-blog-list]          (2,345 bytes)
///   set_text     [data-blog-page-label]           Page 2 of 4
///
///   Bindings: pager
/// ```
fn print_hydration(hydration: &Hydration) -> Result<()> {
    println!("{}", "🧩 Hydration".bright_blue().bold());
    println!();

    if hydration.is_empty() {
        println!("{}", "  Nothing to apply".yellow());
        return Ok(());
    }

    for patch in &hydration.patches {
        let (op, detail) = match patch {
            Patch::SetHtml { html, .. } => ("set_html", format!("({} bytes)", html.len())),
            Patch::SetText { text, .. } => ("set_text", text.clone()),
            Patch::SetAttr { name, value, .. } => ("set_attr", format!("{name}={value}")),
            Patch::RemoveAttr { name, .. } => ("remove_attr", name.clone()),
            Patch::AddClass { class, .. } => ("add_class", class.clone()),
            Patch::RemoveClass { class, .. } => ("remove_class", class.clone()),
            Patch::SetStyle {
                property, value, ..
            } => ("set_style", format!("{property}: {value}")),
        };
        println!(
            "  {:<12} {:<40} {}",
            op.cyan(),
            patch.selector().bright_white(),
            detail.bright_black()
        );
    }

    if !hydration.bindings.is_empty() {
        let mut widgets = Vec::new();
        for binding in &hydration.bindings {
            let value = serde_json::to_value(binding)?;
            widgets.push(value["widget"].as_str().unwrap_or("?").to_string());
        }
        println!();
        println!("  Bindings: {}", widgets.join(", ").green());
    }
    println!();

    Ok(())
}

/// Creates or updates a blog post with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for title, slug (suggested from the title), category and author
/// 2. Prompt for an image file (optional on update)
/// 3. Confirm (unless `--yes` flag)
/// 4. Validate and submit as multipart
/// 5. Print field errors, or the saved post
async fn submit_post(state: &AppState, post_id: Option<i64>, skip_confirm: bool) -> Result<()> {
    let heading = match post_id {
        Some(id) => format!("📝 Update Blog Post #{id}"),
        None => "📝 Create Blog Post".to_string(),
    };
    println!("{}", heading.bright_blue().bold());
    println!();

    let title: String = Input::new().with_prompt("Title").interact_text()?;
    let slug: String = Input::new()
        .with_prompt("Slug")
        .with_initial_text(slugify(&title))
        .allow_empty(true)
        .interact_text()?;
    let category: String = Input::new().with_prompt("Category id").interact_text()?;
    let author: String = Input::new().with_prompt("Author id").interact_text()?;
    let image_prompt = if post_id.is_some() {
        "Image file (empty keeps the current one)"
    } else {
        "Image file"
    };
    let image_path: String = Input::new()
        .with_prompt(image_prompt)
        .allow_empty(post_id.is_some())
        .interact_text()?;
    let intro: String = Input::new()
        .with_prompt("Section 1 paragraph (optional)")
        .allow_empty(true)
        .interact_text()?;

    let image = match image_path.trim() {
        "" => None,
        path => Some(read_image(PathBuf::from(path))?),
    };

    println!();
    println!("{}", "Post details:".bright_white().bold());
    println!("  Title: {}", title.cyan());
    println!("  Slug:  {}", slug.cyan());
    match &image {
        Some(image) => println!("  Image: {}", image.file_name.cyan()),
        None => println!("  Image: {}", "unchanged".bright_black()),
    }
    println!();

    if !skip_confirm {
        let prompt = if post_id.is_some() {
            "Save changes?"
        } else {
            "Create this post?"
        };
        let confirmed = Confirm::new().with_prompt(prompt).default(true).interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let fields = vec![
        ("title", title),
        ("slug", slug),
        ("blog_cat_id", category),
        ("author_id", author),
        ("section_1_paragraph_1", intro),
    ];

    let result = match post_id {
        Some(id) => state.post_form_service.update(id, fields, image).await,
        None => state.post_form_service.submit(fields, image).await,
    };

    match result {
        Ok(outcome) => {
            println!("{}", "✅ Post saved successfully!".green().bold());
            println!();
            println!("{}", serde_json::to_string_pretty(&outcome.post)?);
            println!();
            println!("  Next: {}", outcome.redirect.bright_cyan());
        }
        Err(FormError::Invalid(errors)) | Err(FormError::Rejected { errors, .. }) => {
            println!("{}", "❌ The post was not saved:".red().bold());
            for field in errors.fields() {
                let messages = errors.get(field).unwrap_or_default().join(" ");
                println!("  {}: {}", field.yellow(), messages);
            }
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to save post: {}", e)),
    }
    println!();

    Ok(())
}

fn read_image(path: PathBuf) -> Result<ImageUpload> {
    let bytes = std::fs::read(&path)
        .with_context(|| format!("Failed to read image {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(ImageUpload {
        file_name,
        content_type: None,
        bytes,
    })
}

/// Checks that the upstream API answers.
async fn handle_health(state: &AppState, config: &Config) -> Result<()> {
    println!("{}", "🔍 Checking upstream API...".bright_blue());

    let endpoint = Endpoint::list("blog-posts", ListQuery::per_page(1));
    match state.repository.get_json(&endpoint).await {
        Ok(_) => {
            println!("{}", "✅ Upstream API reachable".green().bold());
            println!("  URL: {}", config.api_base_url.bright_black());
        }
        Err(e) => {
            println!("{}", "❌ Upstream API failing".red().bold());
            println!("  {}", e.to_string().bright_black());
            anyhow::bail!("Upstream API unavailable");
        }
    }

    println!(
        "  Fallback places: {}",
        state.fallback_places.to_string().bright_white()
    );
    Ok(())
}
