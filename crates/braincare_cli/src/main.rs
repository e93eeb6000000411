//! BrainCare command-line front end.
//!
//! # Responsibility
//! - Render the catalogue, detail view, and site settings as text.
//! - Route every write through `CatalogService` so privilege checks stay in core.
//!
//! # Invariants
//! - The admin session lives only for one invocation; writes need `--admin-key`.
//! - Insight failures print fallback text and never fail the command.

use braincare_core::db::open_db;
use braincare_core::{
    init_logging, AppConfig, Article, ArticleDraft, CatalogService, Category, CategoryFilter,
    ConfigStore, Confirmation, GeminiClient, HeroAlignment, InsightGenerator, InsightTracker,
    LoginOutcome, MemorySlotStorage, RecordStore, SessionGuard, SharedSecretAuthenticator,
    SiteField, SlotStorage, SqliteSlotStorage, ThemePatch,
};
use clap::{Args, Parser, Subcommand};
use log::{error, info};
use std::error::Error;
use std::num::NonZeroU32;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "braincare", version, about = "Personal AI article archive")]
struct Cli {
    /// Shared admin secret; required for every write.
    #[arg(long, global = true)]
    admin_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List articles matching the category and search query.
    List {
        #[arg(long, value_parser = parse_category_filter, default_value = "All")]
        category: CategoryFilter,
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Show one article, optionally with the AI pro tip for its code.
    Show {
        id: String,
        #[arg(long)]
        insight: bool,
    },
    /// Two-sentence AI summary of an article.
    Summarize { id: String },
    /// Create a new article.
    Add(DraftArgs),
    /// Replace an existing article; omitted fields keep their value.
    Edit {
        id: String,
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Delete an article. Without `--yes` nothing is removed.
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Patch the visual theme.
    Theme(ThemeArgs),
    /// Override one site field (heroTitle, heroHighlight, heroSubtitle,
    /// authorName, authorRole, avatarUrl).
    SetField { key: String, value: String },
    /// Print the site configuration.
    Config,
}

#[derive(Debug, Args)]
struct DraftArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    excerpt: Option<String>,
    #[arg(long)]
    content: Option<String>,
    #[arg(long)]
    code: Option<String>,
    #[arg(long, value_parser = parse_category)]
    category: Option<Category>,
    /// Comma-separated tags.
    #[arg(long)]
    tags: Option<String>,
    #[arg(long)]
    image: Option<String>,
    /// Rewrite the content with the AI model before saving.
    #[arg(long)]
    refine: bool,
}

impl DraftArgs {
    fn apply_to(self, draft: &mut ArticleDraft) {
        let fields = [
            (self.title, &mut draft.title),
            (self.excerpt, &mut draft.excerpt),
            (self.content, &mut draft.content),
            (self.code, &mut draft.code),
            (self.tags, &mut draft.tags),
            (self.image, &mut draft.image),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
        if let Some(category) = self.category {
            draft.category = category;
        }
    }
}

#[derive(Debug, Args)]
struct ThemeArgs {
    #[arg(long)]
    primary_color: Option<String>,
    #[arg(long)]
    accent_color: Option<String>,
    #[arg(long)]
    background_color: Option<String>,
    #[arg(long)]
    surface_color: Option<String>,
    #[arg(long)]
    heading_font: Option<String>,
    #[arg(long)]
    body_font: Option<String>,
    #[arg(long)]
    border_radius: Option<String>,
    #[arg(long)]
    grid_columns: Option<NonZeroU32>,
    #[arg(long, value_parser = parse_alignment)]
    hero_alignment: Option<HeroAlignment>,
    #[arg(long)]
    glass_effect: Option<bool>,
}

impl From<ThemeArgs> for ThemePatch {
    fn from(args: ThemeArgs) -> Self {
        Self {
            primary_color: args.primary_color,
            accent_color: args.accent_color,
            background_color: args.background_color,
            surface_color: args.surface_color,
            heading_font: args.heading_font,
            body_font: args.body_font,
            border_radius: args.border_radius,
            grid_columns: args.grid_columns,
            hero_alignment: args.hero_alignment,
            glass_effect: args.glass_effect,
        }
    }
}

fn parse_category(value: &str) -> Result<Category, String> {
    Category::parse(value).ok_or_else(|| format!("unknown category: {value}"))
}

fn parse_category_filter(value: &str) -> Result<CategoryFilter, String> {
    CategoryFilter::parse(value).ok_or_else(|| format!("unknown category filter: {value}"))
}

fn parse_alignment(value: &str) -> Result<HeroAlignment, String> {
    HeroAlignment::parse(value).ok_or_else(|| format!("expected left or center, got {value}"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_command module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;
    init_logging(&config.log_level, &config.log_dir())?;
    info!("event=cli_start module=cli status=ok config={config:?}");

    let conn = open_db(config.db_path())?;
    let durable = SqliteSlotStorage::new(&conn);
    let volatile = MemorySlotStorage::new();
    let session = SessionGuard::new(
        &volatile,
        SharedSecretAuthenticator::new(config.admin_key.clone()),
    )
    .with_ttl(config.session_ttl);
    let mut catalog = CatalogService::new(
        RecordStore::load(durable),
        ConfigStore::load(durable),
        session,
    );

    if let Some(key) = cli.admin_key.as_deref() {
        if catalog.login(Some(key))? == LoginOutcome::Granted {
            info!("event=cli_login module=cli status=ok");
        }
    }

    let generator = InsightGenerator::new(GeminiClient::new(
        config.gemini_api_key.clone(),
        config.model.clone(),
    ))
    .with_timeout(config.insight_timeout);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match cli.command {
        Command::List { category, query } => {
            catalog.set_category(category);
            catalog.set_query(query);
            let visible = catalog.visible_articles();
            if visible.is_empty() {
                println!("No articles match.");
            }
            for article in visible {
                print_summary_line(article);
            }
        }
        Command::Show { id, insight } => {
            let article = find(&catalog, &id)?;
            print_detail(article);
            if insight {
                let mut tracker = InsightTracker::new();
                match tracker.begin(article) {
                    Some(ticket) => {
                        let result = runtime.block_on(ticket.run(&generator));
                        tracker.complete(&ticket, result);
                    }
                    None => println!("\n(no code attached; nothing to explain)"),
                }
                if let Some(text) = tracker.state().text() {
                    println!("\nAI Pro Tip:\n{text}");
                }
                tracker.leave();
            }
        }
        Command::Summarize { id } => {
            let article = find(&catalog, &id)?;
            let summary = runtime.block_on(generator.summarize(&article.content));
            println!("{summary}");
        }
        Command::Add(args) => {
            let refine = args.refine;
            let mut draft = ArticleDraft::default();
            args.apply_to(&mut draft);
            if refine {
                refine_draft(&runtime, &generator, &mut draft);
            }
            let id = catalog.save_draft(draft, None)?;
            println!("Saved article {id}");
        }
        Command::Edit { id, draft: args } => {
            let refine = args.refine;
            let mut draft = ArticleDraft::from_article(find(&catalog, &id)?);
            args.apply_to(&mut draft);
            if refine {
                refine_draft(&runtime, &generator, &mut draft);
            }
            let id = catalog.save_draft(draft, Some(id.as_str()))?;
            println!("Saved article {id}");
        }
        Command::Delete { id, yes } => {
            let confirmation = if yes {
                Confirmation::Confirmed
            } else {
                Confirmation::Declined
            };
            if catalog.delete_article(&id, confirmation)? {
                println!("Deleted article {id}");
            } else if yes {
                println!("No article with id {id}");
            } else {
                println!("Not deleted; pass --yes to confirm.");
            }
        }
        Command::Theme(args) => {
            catalog.update_theme(args.into())?;
            print_config(&catalog);
        }
        Command::SetField { key, value } => {
            let field = SiteField::parse(&key)?;
            catalog.edit_site_field(field, value)?;
            print_config(&catalog);
        }
        Command::Config => print_config(&catalog),
    }
    Ok(())
}

fn find<'a, S, V>(
    catalog: &'a CatalogService<S, V, SharedSecretAuthenticator>,
    id: &str,
) -> Result<&'a Article, Box<dyn Error>>
where
    S: SlotStorage,
    V: SlotStorage,
{
    catalog
        .article(id)
        .ok_or_else(|| format!("article not found: {id}").into())
}

fn refine_draft(
    runtime: &tokio::runtime::Runtime,
    generator: &InsightGenerator<GeminiClient>,
    draft: &mut ArticleDraft,
) {
    let refined = runtime.block_on(generator.refine(&draft.code, &draft.content));
    if !draft.apply_refinement(&refined) {
        eprintln!("warning: {refined} Draft kept unchanged.");
    }
}

fn print_summary_line(article: &Article) {
    let tags = article.display_tags().join(", ");
    println!(
        "{:<16} {:<8} {}  {}  [{}]",
        article.id,
        article.category.as_str(),
        article.date,
        article.title,
        tags
    );
}

fn print_detail(article: &Article) {
    println!("{}", article.title);
    println!(
        "{} | {} | {}",
        article.category.as_str(),
        article.author,
        article.date
    );
    if !article.excerpt.is_empty() {
        println!("\n{}", article.excerpt);
    }
    for paragraph in article.paragraphs() {
        println!("\n{paragraph}");
    }
    if let Some(code) = article.code.as_deref().filter(|_| article.has_code()) {
        let language = article.language.as_deref().unwrap_or("text");
        println!("\n--- {language} ---\n{code}");
    }
    if !article.tags.is_empty() {
        println!("\nTags: {}", article.tags.join(", "));
    }
}

fn print_config<S, V>(catalog: &CatalogService<S, V, SharedSecretAuthenticator>)
where
    S: SlotStorage,
    V: SlotStorage,
{
    let site = catalog.site_config();
    for field in SiteField::ALL {
        println!("{:<14} {}", field.key(), site.field(field));
    }
    println!("theme:");
    for (name, value) in site.theme.css_variables() {
        println!("  {name:<22} {value}");
    }
    println!("  grid-columns           {}", site.theme.grid_columns);
    println!("  hero-alignment         {:?}", site.theme.hero_alignment);
    println!("  glass-effect           {}", site.theme.glass_effect);
}
